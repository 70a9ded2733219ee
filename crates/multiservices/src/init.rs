//! Wires a file-backed [`DirectoryApi`] from a data directory and its config.

use crate::api::DirectoryApi;
use crate::config::DirectoryConfig;
use crate::error::{DirectoryError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Overrides the OS data directory. Mostly used to isolate tests.
pub const DATA_DIR_ENV: &str = "MULTISERVICES_DATA";

pub struct DirectoryContext {
    pub api: DirectoryApi<FileStore>,
    pub config: DirectoryConfig,
    pub data_dir: PathBuf,
}

/// Picks the data directory:
/// 1. the explicit override (`--data`)
/// 2. the `MULTISERVICES_DATA` environment variable
/// 3. the OS data directory from [`directories`]
pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "multiservices", "multiservices")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| DirectoryError::Config("could not determine a data directory".into()))
}

/// Opens the directory at the resolved data dir, applies its config and
/// seeds the sample providers when enabled.
pub fn initialize(data_override: Option<PathBuf>) -> Result<DirectoryContext> {
    let data_dir = resolve_data_dir(data_override)?;
    open_at(&data_dir)
}

fn open_at(data_dir: &Path) -> Result<DirectoryContext> {
    let config = DirectoryConfig::load(data_dir)?;
    debug!(data_dir = %data_dir.display(), ?config, "opening directory");

    let store = FileStore::open(data_dir).with_corruption_policy(config.on_corrupt);
    let mut api = DirectoryApi::new(store);
    if config.seed_sample_data {
        api.seed_sample_data()?;
    }

    Ok(DirectoryContext {
        api,
        config,
        data_dir: data_dir.to_path_buf(),
    })
}
