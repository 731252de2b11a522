//! # Storage Layer
//!
//! Records live in a plain key-value string store, the same shape as a browser's
//! `localStorage`: one fixed key holds the whole collection serialized as a JSON
//! array. The [`StorageBackend`] trait is that key-value store; [`RecordStore`]
//! owns the in-memory collection on top of it.
//!
//! ## Lifecycle
//!
//! - **Load once**: [`RecordStore::load`] reads the key at startup. A missing key or
//!   a payload that does not parse yields an empty collection.
//! - **Save after every mutation**: `add`, `update` and `remove` rewrite the whole
//!   array. There is no incremental write.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one `<key>.json` file per key in the data directory,
//!   written atomically (tmp file + rename).
//! - [`mem_backend::MemBackend`]: in-memory map for tests, with write-error simulation.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── users.json      # the collection (key "users" by default)
//! └── config.json     # settings, see config.rs
//! ```

use crate::error::Result;
use std::path::PathBuf;

pub mod fs_backend;
pub mod mem_backend;
pub mod record_store;

pub use record_store::RecordStore;

/// Key the collection is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "users";

/// Raw key-value persistence.
///
/// Backends only move strings; parsing and the collection invariant belong to
/// [`RecordStore`].
pub trait StorageBackend {
    /// Returns the stored value, or `Ok(None)` if the key was never written.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the stored value. Must not leave a partially written value behind.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Where the value lives, for display. Virtual for non-file backends.
    fn item_location(&self, key: &str) -> PathBuf;
}
