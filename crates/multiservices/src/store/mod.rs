//! # Storage Layer
//!
//! The directory keeps three collections (providers, clients, reviews). Each
//! collection is one entry in a key-value container and is always read and
//! written as a whole.
//!
//! ## Layers
//!
//! 1. [`backend::StorageBackend`]: the storage port. Raw `read(key)` /
//!    `write(key, bytes)`; knows nothing about records.
//! 2. [`codec`]: turns a collection into bytes and back, inside a versioned
//!    envelope.
//! 3. [`record_store::RecordStore`]: the record operations. Assigns ids and
//!    timestamps, filters, and decides what happens when stored bytes cannot
//!    be decoded.
//!
//! ## Read-Modify-Write
//!
//! Every save loads the full collection, appends the new record and writes the
//! full collection back. Nothing is cached between calls, so a save followed
//! by a read on the same store always observes the new record. Saves take
//! `&mut self`; a store handle therefore has exactly one writer at a time.
//! Separate processes sharing a data directory can still overwrite each
//! other's last write.
//!
//! ## Corrupt Collections
//!
//! What happens when a collection cannot be read is governed by
//! [`CorruptionPolicy`]:
//! - `empty` (default): log a warning and behave as if the collection were
//!   empty. The next save overwrites the unreadable entry.
//! - `error`: return [`DirectoryError::CorruptState`](crate::error::DirectoryError::CorruptState).
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: for tests, no filesystem I/O.
//! - [`fs::FileStore`]: one JSON file per collection in a data directory.
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/
//! ├── multiservices.toml              # Configuration
//! ├── multiservices_providers.json
//! ├── multiservices_clients.json
//! └── multiservices_reviews.json
//! ```

use crate::error::Result;
use crate::model::{Client, ClientDraft, Provider, ProviderDraft, RecordId, Review, ReviewDraft};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod backend;
pub mod codec;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod record_store;

/// The persisted collections and their storage keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Providers,
    Clients,
    Reviews,
}

impl Collection {
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Providers => "multiservices_providers",
            Collection::Clients => "multiservices_clients",
            Collection::Reviews => "multiservices_reviews",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Collection::Providers => "providers",
            Collection::Clients => "clients",
            Collection::Reviews => "reviews",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptionPolicy {
    /// Treat unreadable collections as empty.
    #[default]
    Empty,
    /// Surface unreadable collections as errors.
    Error,
}

impl fmt::Display for CorruptionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CorruptionPolicy::Empty => "empty",
            CorruptionPolicy::Error => "error",
        })
    }
}

/// Record operations over the three directory collections.
///
/// Reads return `Ok` with an empty sequence when nothing was stored yet.
/// Lookups return `Ok(None)` for unknown ids; absence is never an error.
pub trait DirectoryStore {
    /// Whether anything was ever stored for `collection`, readable or not.
    fn collection_exists(&self, collection: Collection) -> Result<bool>;

    fn list_providers(&self) -> Result<Vec<Provider>>;

    fn save_provider(&mut self, draft: ProviderDraft) -> Result<Provider>;

    fn get_provider_by_id(&self, id: &RecordId) -> Result<Option<Provider>>;

    fn list_clients(&self) -> Result<Vec<Client>>;

    fn save_client(&mut self, draft: ClientDraft) -> Result<Client>;

    /// Reviews whose provider reference equals `provider_id`, in insertion order.
    fn list_reviews(&self, provider_id: &RecordId) -> Result<Vec<Review>>;

    /// Stores a review, stamping it with the current time.
    fn save_review(&mut self, draft: ReviewDraft) -> Result<Review>;
}
