//! Join command implementation.
//!
//! Folds `combine` over its arguments from left to right. An absolute part
//! is appended below the accumulated path rather than replacing it.

use crate::error::CliError;
use crate::utils::{load_configuration, output_format, path_policy, print_output, GlobalOptions};
use clap::Args;
use rpath::{OutputFormat, RemotePath};

/// Concatenate paths left to right.
#[derive(Args)]
pub struct JoinCommand {
    /// Starting path
    #[arg(value_name = "BASE", allow_hyphen_values = true)]
    pub base: String,

    /// Paths to append, in order
    #[arg(value_name = "PART", required = true, allow_hyphen_values = true)]
    pub parts: Vec<String>,

    /// Validate the result against the configured policy
    #[arg(long)]
    pub check: bool,
}

impl JoinCommand {
    /// Execute the join command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        let mut path = RemotePath::from(self.base);
        for part in &self.parts {
            path /= part.as_str();
            log::debug!("joined {part:?}: {path}");
        }

        if self.check {
            path_policy(&config)?.check(&path)?;
        }

        let output = match output_format(global, &config) {
            OutputFormat::Human => path.into_string(),
            OutputFormat::Json => serde_json::json!({ "path": path }).to_string(),
        };
        print_output(&output)
    }
}
