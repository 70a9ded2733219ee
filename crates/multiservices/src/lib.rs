//! # MultiServices Directory
//!
//! A local-first directory of home-service providers (painters, plumbers,
//! electricians, ...), the clients who hire them, and the reviews clients
//! leave. Everything is kept as JSON collections in a data directory.
//!
//! This is a library that happens to have a CLI client, not the other way
//! round.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (multiservices-cli crate)                              │
//! │  - Parses arguments, renders output, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation gate, ratings, search, sample data            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DirectoryStore trait over a key/bytes StorageBackend     │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the
//! process. Diagnostics go through `tracing`; the binary decides where they
//! end up.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: one module per operation
//! - [`store`]: storage port, codec and implementations
//! - [`model`]: records and the service catalogue
//! - [`rating`]: average ratings from reviews
//! - [`validation`]: field predicates and form validation
//! - [`format`]: phone, date, stars, rates and contact links for display
//! - [`search`]: provider filter and sort order
//! - [`seed`]: sample providers
//! - [`config`], [`init`]: config file and data directory wiring
//! - [`ids`]: injectable id and clock sources
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod ids;
pub mod init;
pub mod model;
pub mod rating;
pub mod search;
pub mod seed;
pub mod store;
pub mod validation;

#[cfg(test)]
pub mod test_utils;
