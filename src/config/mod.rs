//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (YAML/JSON, chosen by suffix)
//!     → loader.rs (read file)
//!     → codec.rs (decode, fields missing from the file take defaults.rs values)
//!     → ServerOptions / ServerConfig (schema.rs)
//!
//! Settings holder (settings.rs):
//!     starts from defaults.rs
//!     → reload() loads <base>/etc/config.* into a fresh instance
//!     → atomic swap of Arc<ServerOptions> on success, no change on failure
//!
//! Persist (persist.rs):
//!     instance → codec.rs (encode) → <base>/etc/config.* or explicit path
//!
//! On file change:
//!     watcher.rs detects change → settings.reload()
//! ```
//!
//! # Design Decisions
//! - Instances are never edited in place by the holder; changes require a
//!   full reload
//! - All fields have defaults to allow minimal configs
//! - Syntax errors and schema mismatches are reported separately

pub mod codec;
pub mod defaults;
pub mod error;
pub mod loader;
pub mod persist;
pub mod schema;
pub mod settings;
pub mod watcher;

pub use codec::Format;
pub use defaults::DEFAULT_CONFIG_JSON;
pub use error::{ConfigError, Result};
pub use loader::{load, load_into};
pub use persist::ConfigFile;
pub use schema::{Compressor, Encryptor, Region, ServerConfig, ServerOptions, VaseDB};
pub use settings::{has_custom, Settings};
pub use watcher::SettingsWatcher;
