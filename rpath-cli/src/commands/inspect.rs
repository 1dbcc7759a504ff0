//! Inspect command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, output_format, print_output, GlobalOptions};
use clap::Args;
use rpath::{PathReport, RemotePath};

/// Report everything known about a path.
#[derive(Args)]
pub struct InspectCommand {
    /// Path to inspect
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl InspectCommand {
    /// Execute the inspect command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let report = PathReport::new(&RemotePath::from(self.path));

        let formatter = output_format(global, &config).create_formatter();
        print_output(&formatter.format_report(&report)?)
    }
}
