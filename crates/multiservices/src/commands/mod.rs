//! # Command Layer
//!
//! This module contains the application logic the UI talks to. Each command
//! lives in its own submodule as a plain `run` function over a
//! [`DirectoryStore`](crate::store::DirectoryStore).
//!
//! ## Role and Responsibilities
//!
//! - Gate writes on form validation
//! - Combine records with derived data (ratings)
//! - Return structured [`CmdResult`] values with records and messages
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: no stdout, stderr or formatting for a terminal
//! - **Argument parsing**: that's the CLI layer's job
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! ## Testing Strategy
//!
//! Command tests run against `InMemoryStore` and check `CmdResult` contents
//! and error variants.
//!
//! ## Command Modules
//!
//! - [`register`]: register providers and clients
//! - [`review`]: rate a provider
//! - [`list`]: searchable provider listing, client listing
//! - [`show`]: one provider with its reviews
//! - [`seed`]: sample providers for an empty directory

use crate::model::{Client, Provider, Review};
use crate::rating::RatingSummary;
use serde::Serialize;

pub mod list;
pub mod register;
pub mod review;
pub mod seed;
pub mod show;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A provider together with its current rating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatedProvider {
    #[serde(flatten)]
    pub provider: Provider,
    pub rating: RatingSummary,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub providers: Vec<RatedProvider>,
    pub clients: Vec<Client>,
    pub reviews: Vec<Review>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_providers(mut self, providers: Vec<RatedProvider>) -> Self {
        self.providers = providers;
        self
    }
}
