//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::config::codec::{self, Format};
use crate::config::error::{ConfigError, Result};

/// Load a config document of any schema shape from `path`.
///
/// The format comes from the path suffix. A missing file is reported as
/// [`ConfigError::NotFound`]; falling back to defaults is the caller's call.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = Format::from_path(path)?;
    let bytes = fs::read(path).map_err(|e| ConfigError::from_read(path, e))?;
    let config = codec::decode(&bytes, format)?;

    tracing::debug!(path = %path.display(), %format, "Config file loaded");
    Ok(config)
}

/// Load `path` into an existing destination.
///
/// `dest` is only written once the whole document decoded successfully.
pub fn load_into<T: DeserializeOwned>(path: &Path, dest: &mut T) -> Result<()> {
    *dest = load(path)?;
    Ok(())
}
