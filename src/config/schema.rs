//! Configuration schema definitions.
//!
//! Two shapes are supported:
//! - [`ServerOptions`], the flat schema with every field at the top level.
//! - [`ServerConfig`], the composite schema wrapping the core server fields
//!   under a `vasedb:` key.
//!
//! Every struct carries `#[serde(default)]` so a partial file is merged
//! field by field against the compiled-in defaults.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Flat server options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerOptions {
    /// Listening port. Range is not checked here.
    pub port: u16,

    /// Base storage path.
    pub path: String,

    pub debug: bool,

    /// Log file location, empty when logging to stdout only.
    #[serde(alias = "logpath")]
    pub log_path: String,

    /// Administrative password.
    pub password: String,

    pub region: Region,

    pub encryptor: Encryptor,

    pub compressor: Compressor,

    /// Allowed client addresses. Empty means no restriction.
    #[serde(alias = "allowip")]
    pub allow_ip: Vec<String>,
}

impl Default for ServerOptions {
    fn default() -> Self {
        defaults::server_options()
    }
}

/// Region replication policy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Region {
    pub enable: bool,

    /// Interval in **milliseconds**. The wire name is kept for compatibility
    /// with existing config files.
    pub second: u64,

    pub threshold: u32,
}

impl Region {
    /// The `second` field as a duration.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.second)
    }
}

impl Default for Region {
    fn default() -> Self {
        defaults::server_options().region
    }
}

/// At-rest encryption settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Encryptor {
    pub enable: bool,

    /// Secret used for key derivation.
    pub secret: String,
}

impl Default for Encryptor {
    fn default() -> Self {
        defaults::server_options().encryptor
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Compressor {
    pub enable: bool,
}

/// Composite configuration: server fields nested under `vasedb:`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub vasedb: VaseDB,
}

/// Core server fields of the composite schema.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct VaseDB {
    pub port: u16,
    pub path: String,
    pub debug: bool,
}

impl Default for VaseDB {
    fn default() -> Self {
        let options = defaults::server_options();
        Self {
            port: options.port,
            path: options.path,
            debug: options.debug,
        }
    }
}

// Rendering is intentionally unredacted; callers that log it decide what to hide.
impl fmt::Display for ServerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "port={} path={} debug={} log_path={} password={} ",
            self.port, self.path, self.debug, self.log_path, self.password
        )?;
        write!(
            f,
            "region={{enable={} second={} threshold={}}} ",
            self.region.enable, self.region.second, self.region.threshold
        )?;
        write!(
            f,
            "encryptor={{enable={} secret={}}} compressor={{enable={}}} ",
            self.encryptor.enable, self.encryptor.secret, self.compressor.enable
        )?;
        write!(f, "allow_ip=[{}]", self.allow_ip.join(", "))
    }
}

impl fmt::Display for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vasedb={{port={} path={} debug={}}}",
            self.vasedb.port, self.vasedb.path, self.vasedb.debug
        )
    }
}
