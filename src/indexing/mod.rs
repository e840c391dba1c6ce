pub mod attributes;
pub mod event;
pub mod msgs;
pub mod projection;
pub mod projector;
pub mod routes;
