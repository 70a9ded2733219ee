//! # CLI Behavior
//!
//! This is **one possible UI client** for the directory, not the application
//! itself. Only this layer knows about terminal I/O, exit codes and output
//! formatting.
//!
//! ## Naked Execution
//!
//! Running `multiservices` with no subcommand lists the providers, the same
//! as `multiservices list`.
//!
//! ## Machine Output
//!
//! `list`, `show` and `clients` accept `--json` and print the records as
//! JSON instead of the styled view.
//!
//! ## Diagnostics
//!
//! Library events go to stderr through `tracing`. Quiet by default; `-v`
//! enables debug output and `RUST_LOG` overrides both.
//!
//! ## Module Structure
//!
//! - `commands`: per-command handlers that call the API and print
//! - `logging`: tracing subscriber setup
//! - `render`: `CmdResult` → terminal strings
//! - `setup`: argument parsing via clap
//! - `styles`: terminal styles

mod commands;
mod logging;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
