//! Library exports for rpath-cli.
//!
//! Exposes the CLI structure so tooling can render documentation from it.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
