pub mod repository;

pub mod config;
pub use config::{DatabaseConfig, ServerConfig};

pub mod db;
