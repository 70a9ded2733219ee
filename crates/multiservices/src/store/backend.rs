use crate::error::Result;

/// Abstract interface for raw key-value storage.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// `RecordStore` handles the "what" (records, ids, corruption policy).
/// Methods take `&self`; implementations that mutate use interior
/// mutability.
pub trait StorageBackend {
    /// Read the bytes stored under `key`.
    /// Returns Ok(None) if nothing was ever written there.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replace the bytes stored under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, key: &str, bytes: &[u8]) -> Result<()>;
}
