//! # MultiServices CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/multiservices/`: the UI-agnostic directory library
//! - `crates/multiservices-cli/`: this client, depending on the library
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/multiservices-cli/src/cli/)              │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal rendering (render.rs, styles.rs)                │
//! │  - tracing subscriber (logging.rs)                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/multiservices/src/api.rs)                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from the API inward returns plain Rust values. The CLI owns
//! argument parsing, rendering, and exit codes.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
