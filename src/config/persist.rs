//! Writing configuration back to disk.
//!
//! # Responsibilities
//! - Save an instance under a base path at the canonical location
//! - Save an instance to an explicit path, format chosen by suffix
//! - In-memory JSON marshal/unmarshal for callers with their own storage
//!
//! # Design Decisions
//! - Existing files are overwritten in place; concurrent writers to the same
//!   path are not coordinated (last writer wins)
//! - Directories are created with [`FS_PERM`]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::codec::{self, Format};
use crate::config::error::{ConfigError, Result};
use crate::config::schema::{ServerConfig, ServerOptions};

/// Permission mode for directories created while saving.
pub const FS_PERM: u32 = 0o755;

/// Directory under the base path holding the config file.
pub const CONFIG_DIR: &str = "etc";

/// File stem of the canonical config file.
pub const CONFIG_STEM: &str = "config";

/// Resolve the canonical config file under `base`.
///
/// Returns the first existing `etc/config.{yaml,yml,json}`, or
/// `etc/config.yaml` when none exists yet.
pub fn canonical_path(base: &Path) -> PathBuf {
    let dir = base.join(CONFIG_DIR);
    ["yaml", "yml", "json"]
        .iter()
        .map(|ext| dir.join(format!("{CONFIG_STEM}.{ext}")))
        .find(|candidate| candidate.is_file())
        .unwrap_or_else(|| dir.join(format!("{CONFIG_STEM}.{}", Format::Yaml.extension())))
}

/// Save `config` to the canonical path under `base`, creating the `etc`
/// directory and any missing parents. Returns the path written.
pub fn saved<T: Serialize>(config: &T, base: &Path) -> Result<PathBuf> {
    let path = canonical_path(base);
    let format = Format::from_path(&path)?;
    let bytes = encode_for_write(config, format, &path)?;

    if let Some(dir) = path.parent() {
        create_dir(dir, true).map_err(|source| ConfigError::Write {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    write_file(&path, &bytes)?;

    tracing::info!(path = %path.display(), %format, "Config saved");
    Ok(path)
}

/// Save `config` to an explicit `path`.
///
/// Only the immediate parent directory is created when missing. `None`
/// is rejected with [`ConfigError::InvalidArgument`].
pub fn saved_as<T: Serialize>(config: Option<&T>, path: &Path) -> Result<()> {
    let config = config.ok_or_else(|| {
        ConfigError::InvalidArgument("cannot save an absent config instance".to_string())
    })?;
    let format = Format::from_path(path)?;
    let bytes = encode_for_write(config, format, path)?;

    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            create_dir(dir, false).map_err(|source| ConfigError::Write {
                path: dir.to_path_buf(),
                source,
            })?;
        }
    }
    write_file(path, &bytes)?;

    tracing::info!(path = %path.display(), %format, "Config saved");
    Ok(())
}

// Encode failures while saving are reported as write failures on `path`.
fn encode_for_write<T: Serialize>(config: &T, format: Format, path: &Path) -> Result<Vec<u8>> {
    codec::encode(config, format).map_err(|e| ConfigError::Write {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidData, e.to_string()),
    })
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn create_dir(dir: &Path, recursive: bool) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(recursive);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(FS_PERM);
    }
    builder.create(dir)
}

/// A config document that can be persisted and exchanged in memory.
pub trait ConfigFile: Serialize + DeserializeOwned {
    /// Encode as JSON.
    fn marshal(&self) -> Result<Vec<u8>> {
        codec::encode(self, Format::Json)
    }

    /// Replace `self` with the JSON document in `bytes`. `self` is left
    /// unchanged when decoding fails.
    fn unmarshal(&mut self, bytes: &[u8]) -> Result<()> {
        *self = codec::decode(bytes, Format::Json)?;
        Ok(())
    }

    /// Save to the canonical path under `base`.
    fn saved(&self, base: &Path) -> Result<PathBuf> {
        saved(self, base)
    }

    /// Save to an explicit path.
    fn saved_as(&self, path: &Path) -> Result<()> {
        saved_as(Some(self), path)
    }
}

impl ConfigFile for ServerOptions {}

impl ConfigFile for ServerConfig {}
