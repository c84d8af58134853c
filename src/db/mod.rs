pub mod connection;
pub mod kv_repo;
pub mod migrations;

pub use connection::*;
