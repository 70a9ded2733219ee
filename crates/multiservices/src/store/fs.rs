use super::fs_backend::FsBackend;
use super::record_store::RecordStore;
use std::path::PathBuf;

pub type FileStore = RecordStore<FsBackend>;

impl FileStore {
    /// A store keeping its collections as JSON files under `data_dir`.
    /// The directory is created on first write.
    pub fn open(data_dir: impl Into<PathBuf>) -> Self {
        RecordStore::with_backend(FsBackend::new(data_dir))
    }
}
