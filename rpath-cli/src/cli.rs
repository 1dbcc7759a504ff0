//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CheckCommand, CompareCommand, InspectCommand, JoinCommand, SegmentsCommand,
};
use clap::{Parser, Subcommand, ValueEnum};
use rpath::OutputFormat;
use std::path::PathBuf;

/// Command-line tool for inspecting and composing remote SFTP paths.
#[derive(Parser)]
#[command(name = "rpath")]
#[command(version, about = "Inspect and compose remote SFTP paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load an additional configuration file
    #[arg(long, value_name = "PATH", global = true, env = "RPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (overrides the configured one)
    #[arg(long, value_enum, global = true, ignore_case = true)]
    pub format: Option<FormatArg>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Split a path into its segments
    Segments(SegmentsCommand),

    /// Report everything known about a path
    Inspect(InspectCommand),

    /// Concatenate paths left to right
    Join(JoinCommand),

    /// Order and relate two paths
    Compare(CompareCommand),

    /// Validate paths against the configured policy
    Check(CheckCommand),
}

/// Output format flag values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Human => OutputFormat::Human,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}
