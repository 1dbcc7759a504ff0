//! Segments command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, output_format, print_output, GlobalOptions};
use clap::Args;
use rpath::RemotePath;

/// Split a path into its segments.
#[derive(Args)]
pub struct SegmentsCommand {
    /// Path to split
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Print only the segment at this zero-based index
    #[arg(long, value_name = "N")]
    pub nth: Option<usize>,
}

impl SegmentsCommand {
    /// Execute the segments command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = RemotePath::from(self.path);

        let mut segments: Vec<RemotePath> = path.segments().collect();
        log::debug!("{path:?} has {} segments", segments.len());

        if let Some(index) = self.nth {
            if index >= segments.len() {
                return Err(CliError::InvalidArguments(format!(
                    "segment index {index} out of range for {:?} ({} segments)",
                    path.native(),
                    segments.len()
                )));
            }
            segments = vec![segments.swap_remove(index)];
        }

        let formatter = output_format(global, &config).create_formatter();
        print_output(&formatter.format_segments(&segments)?)
    }
}
