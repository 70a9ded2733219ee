use crate::store::Collection;
use crate::validation::ValidationErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Provider not found: {0}")]
    ProviderNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Corrupt {collection} collection: {reason}")]
    CorruptState {
        collection: Collection,
        reason: String,
    },

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
