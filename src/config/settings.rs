//! Process-scoped settings holder.
//!
//! # Design Decisions
//! - Readers take lock-free snapshots (`Arc<ServerOptions>`) via `arc-swap`
//! - The only mutation is a whole-instance swap after a successful load, so
//!   no reader ever observes fields from two different instances
//! - A failed reload keeps the previous instance authoritative
//! - The holder is an explicit handle; share it with `Arc<Settings>`

use std::path::{Path, PathBuf};
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::defaults;
use crate::config::error::Result;
use crate::config::loader;
use crate::config::persist;
use crate::config::schema::ServerOptions;

/// Shared settings: a base directory plus the current server options.
pub struct Settings {
    base_path: PathBuf,
    current: ArcSwap<ServerOptions>,
}

impl Settings {
    /// Holder anchored at `base_path`, starting from the defaults.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self::with_options(base_path, defaults::server_options())
    }

    /// Holder anchored at `base_path`, starting from `options`.
    pub fn with_options(base_path: impl Into<PathBuf>, options: ServerOptions) -> Self {
        Self {
            base_path: base_path.into(),
            current: ArcSwap::from_pointee(options),
        }
    }

    /// Directory under which config and log files are resolved.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Snapshot of the current options.
    pub fn current(&self) -> Arc<ServerOptions> {
        self.current.load_full()
    }

    /// Canonical config file: `<base>/etc/config.{yaml|yml|json}`.
    pub fn canonical_path(&self) -> PathBuf {
        persist::canonical_path(&self.base_path)
    }

    /// Reload from the canonical path.
    pub fn reload(&self) -> Result<Arc<ServerOptions>> {
        self.reload_from(&self.canonical_path())
    }

    /// Reload from an explicit path.
    ///
    /// The file is decoded into a fresh instance; the live one is replaced
    /// only on success. Failures are returned unlogged.
    pub fn reload_from(&self, path: &Path) -> Result<Arc<ServerOptions>> {
        let fresh: ServerOptions = loader::load(path)?;

        let fresh = Arc::new(fresh);
        self.current.store(Arc::clone(&fresh));

        tracing::info!(
            path = %path.display(),
            port = fresh.port,
            debug = fresh.debug,
            "Config reloaded"
        );
        Ok(fresh)
    }

    /// Save the current options to the canonical path.
    pub fn saved(&self) -> Result<PathBuf> {
        persist::saved(self.current().as_ref(), &self.base_path)
    }
}

impl Default for Settings {
    /// Anchored at the default storage path with default options.
    fn default() -> Self {
        Self::new(defaults::DEFAULT_PATH)
    }
}

/// True when the user supplied a config path. Empty means "not supplied";
/// file existence is not checked.
pub fn has_custom(flag: &str) -> bool {
    !flag.is_empty()
}
