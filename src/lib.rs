pub mod config;
pub mod db;
pub mod indexing;
pub mod util;
