use super::backend::StorageBackend;
use crate::error::{DirectoryError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the directory is
/// single-threaded. This keeps `StorageBackend` on `&self` without paying
/// for a lock.
#[derive(Default)]
pub struct MemBackend {
    entries: RefCell<HashMap<String, Vec<u8>>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Test helper to plant arbitrary bytes, bypassing the codec.
    pub fn insert_raw(&self, key: &str, bytes: impl Into<Vec<u8>>) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), bytes.into());
    }

    /// Test helper to inspect what was persisted under `key`.
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.borrow().get(key).cloned()
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(DirectoryError::Store("Simulated write error".to_string()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
