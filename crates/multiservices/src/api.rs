//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for directory operations, whichever UI drives them.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g., turning a raw id string into a [`RecordId`])
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O operations**: no stdout, stderr, or terminal formatting
//! - **Presentation concerns**: returns data structures, not strings
//!
//! ## Generic Over DirectoryStore
//!
//! `DirectoryApi<S: DirectoryStore>` is generic over the storage backend:
//! - Production: `DirectoryApi<FileStore>`
//! - Testing: `DirectoryApi<InMemoryStore>`

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::RecordId;
use crate::search::{ProviderFilter, ProviderSort};
use crate::store::DirectoryStore;
use crate::validation::{ClientForm, ProviderForm, ReviewForm};

pub struct DirectoryApi<S: DirectoryStore> {
    store: S,
}

impl<S: DirectoryStore> DirectoryApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn register_provider(&mut self, form: &ProviderForm) -> Result<CmdResult> {
        commands::register::provider(&mut self.store, form)
    }

    pub fn register_client(&mut self, form: &ClientForm) -> Result<CmdResult> {
        commands::register::client(&mut self.store, form)
    }

    pub fn add_review(&mut self, form: &ReviewForm) -> Result<CmdResult> {
        commands::review::run(&mut self.store, form)
    }

    pub fn list_providers(&self, filter: &ProviderFilter, sort: ProviderSort) -> Result<CmdResult> {
        commands::list::providers(&self.store, filter, sort)
    }

    pub fn show_provider(&self, id: &str) -> Result<CmdResult> {
        commands::show::run(&self.store, &RecordId::from(id.trim()))
    }

    pub fn list_clients(&self) -> Result<CmdResult> {
        commands::list::clients(&self.store)
    }

    pub fn seed_sample_data(&mut self) -> Result<CmdResult> {
        commands::seed::run(&mut self.store)
    }
}
