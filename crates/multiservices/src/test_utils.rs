//! Filesystem-backed test environment.

use crate::api::DirectoryApi;
use crate::ids::SequentialIds;
use crate::store::fs::FileStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// A [`DirectoryApi`] over a throwaway data directory. The directory is
/// removed when the env is dropped.
pub struct TestEnv {
    _temp_dir: TempDir,
    data_dir: PathBuf,
    pub api: DirectoryApi<FileStore>,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let data_dir = temp_dir.path().join("data");
        let store = FileStore::open(&data_dir).with_id_generator(SequentialIds::new());

        Self {
            _temp_dir: temp_dir,
            data_dir,
            api: DirectoryApi::new(store),
        }
    }

    /// Path of the JSON file holding `key`.
    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }

    /// A second store over the same directory, as another process would see it.
    pub fn reopen(&self) -> FileStore {
        FileStore::open(&self.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DirectoryStore;
    use crate::validation::ClientForm;

    #[test]
    fn records_survive_reopening() {
        let mut env = TestEnv::new();
        env.api
            .register_client(&ClientForm {
                name: "Bea".into(),
                email: "bea@example.com".into(),
                phone: "(11) 91234-5678".into(),
                location: "Santos - SP".into(),
            })
            .unwrap();

        assert!(env.entry_path("multiservices_clients").exists());
        let clients = env.reopen().list_clients().unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].id.as_str(), "1");
    }
}
