//! # Storage Layer
//!
//! This module defines the persistence capability used by the counter store.
//! The [`StorageBackend`] trait is a plain key-value slot: load a raw string,
//! save a raw string. Everything about the counter list (its JSON shape, its
//! invariants, what to do when a load is corrupt) lives in
//! [`crate::counters`], not here.
//!
//! ## Implementations
//!
//! - [`fs::FsBackend`]: Production file-based storage
//!   - One file per key: `<root>/<key>.json`
//!   - Atomic writes (temp file, then rename)
//!
//! - [`memory::MemBackend`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Storage Format
//!
//! For `FsBackend`:
//! ```text
//! ~/.local/share/tally/
//! ├── multi-counter-app.json   # The counter list (JSON array)
//! └── config.json              # Optional configuration
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Key under which the counter list is stored.
pub const STORAGE_KEY: &str = "multi-counter-app";

/// Abstract interface for raw key-value storage.
///
/// Both methods are synchronous. Implementations that need to mutate through
/// `&self` use interior mutability; the application is single-threaded.
pub trait StorageBackend {
    /// Read the raw value stored under `key`.
    /// Returns Ok(None) if nothing has been stored yet.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn save(&self, key: &str, raw: &str) -> Result<()>;
}
