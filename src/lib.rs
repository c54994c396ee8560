//! vasedb server configuration library.

pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod types;

pub use config::schema::{ServerConfig, ServerOptions};
pub use config::settings::Settings;
