//! String-keyed table of opaque values.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors from encoding or decoding a [`Tables`].
#[derive(Debug, Error)]
pub enum TableError {
    #[error("BSON encode error: {0}")]
    BsonEncode(#[from] bson::ser::Error),

    #[error("BSON decode error: {0}")]
    BsonDecode(#[from] bson::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A mapping of string keys to arbitrary values.
///
/// Serialized as a document with a single `hash` field holding the map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tables {
    pub hash: HashMap<String, Value>,
}

impl Tables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous one for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.hash.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.hash.get(key)
    }

    pub fn len(&self) -> usize {
        self.hash.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hash.is_empty()
    }

    /// Encode as a BSON document.
    ///
    /// Fails for values BSON cannot hold, such as unsigned integers above
    /// `i64::MAX`.
    pub fn to_bson(&self) -> Result<Vec<u8>, TableError> {
        Ok(bson::to_vec(self)?)
    }

    pub fn from_bson(bytes: &[u8]) -> Result<Self, TableError> {
        Ok(bson::from_slice(bytes)?)
    }

    pub fn to_json(&self) -> Result<Vec<u8>, TableError> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, TableError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
