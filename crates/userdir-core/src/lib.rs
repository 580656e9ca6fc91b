pub mod config;
pub mod db;
pub mod sea_ext;
pub mod tracing;
