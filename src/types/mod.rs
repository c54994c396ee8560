//! Loosely typed data shared with the storage engine.
//!
//! Kept apart from the strongly typed settings schema in [`crate::config`].

pub mod table;

pub use table::{TableError, Tables};
