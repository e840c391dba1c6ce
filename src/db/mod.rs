pub mod connection;
pub mod db_builder;
pub mod db_persister;
pub mod models;
pub mod persister;
