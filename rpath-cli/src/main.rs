//! Main entry point for the rpath CLI.
//!
//! Inspects and composes remote SFTP paths:
//! - `segments`: Split a path into its segments
//! - `inspect`: Report everything known about a path
//! - `join`: Concatenate paths
//! - `compare`: Order and relate two paths
//! - `check`: Validate paths against the configured policy

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library diagnostics to stderr based on verbosity
    if let Err(e) = rpath::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("Warning: {e}");
    }

    let global = GlobalOptions {
        config: cli.config,
        format: cli.format.map(Into::into),
    };

    let result = match cli.command {
        cli::Command::Segments(cmd) => cmd.execute(&global),
        cli::Command::Inspect(cmd) => cmd.execute(&global),
        cli::Command::Join(cmd) => cmd.execute(&global),
        cli::Command::Compare(cmd) => cmd.execute(&global),
        cli::Command::Check(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
