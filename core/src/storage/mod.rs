//! Persistence backends for the trail record.
//!
//! A backend stores one opaque string (the encoded record) under one entry.
//! Writes replace the whole record; there is no incremental merge, so the
//! last writer wins when several views share a backend.

mod error;
#[cfg(not(target_arch = "wasm32"))]
mod file;
mod memory;

pub use error::StorageError;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;
pub use memory::MemoryStorage;

pub trait ProgressStorage {
    /// Current raw record, or `None` when nothing has been stored yet.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Replace the stored record.
    fn save(&self, raw: &str) -> Result<(), StorageError>;
}
