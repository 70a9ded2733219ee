//! # Configuration
//!
//! Directory settings live in `multiservices.toml` inside the data directory
//! and are loaded with [`confique`]. A missing file is not an error: every
//! key has a compiled default.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `on_corrupt` | `"empty"` | `"empty"` reads an unreadable collection as empty, `"error"` fails instead |
//! | `seed_sample_data` | `true` | Store the sample providers when the directory has none |

use crate::error::{DirectoryError, Result};
use crate::store::CorruptionPolicy;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "multiservices.toml";

/// Configuration for the directory, stored in `multiservices.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// What to do with a collection whose stored data cannot be decoded:
    /// "empty" treats it as empty, "error" refuses to go on.
    #[config(default = "empty")]
    pub on_corrupt: CorruptionPolicy,

    /// Seed the sample providers when no provider is registered.
    #[config(default = true)]
    pub seed_sample_data: bool,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            on_corrupt: CorruptionPolicy::Empty,
            seed_sample_data: true,
        }
    }
}

impl DirectoryConfig {
    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE_NAME)
    }

    /// Loads the config file from `data_dir`, falling back to defaults for
    /// anything it does not set.
    pub fn load(data_dir: &Path) -> Result<Self> {
        DirectoryConfig::builder()
            .file(Self::path_in(data_dir))
            .load()
            .map_err(|e| DirectoryError::Config(e.to_string()))
    }

    /// A commented sample config file.
    pub fn template() -> String {
        confique::toml::template::<DirectoryConfig>(confique::toml::FormatOptions::default())
    }
}
