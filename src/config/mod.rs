//! Environment-driven configuration.

mod loader;
mod types;

pub use types::{AppConfig, DatabaseConfig, HttpConfig};
