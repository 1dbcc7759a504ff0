//! Check command implementation.
//!
//! Applies the configured path policy to each argument. Every path is
//! reported; the command fails if any of them was rejected.

use crate::error::CliError;
use crate::utils::{load_configuration, output_format, path_policy, print_output, GlobalOptions};
use clap::Args;
use rpath::{OutputFormat, RemotePath};
use serde_json::json;

/// Validate paths against the configured policy.
#[derive(Args)]
pub struct CheckCommand {
    /// Paths to validate
    #[arg(value_name = "PATH", required = true, allow_hyphen_values = true)]
    pub paths: Vec<String>,

    /// Require absolute paths, whatever the configuration says
    #[arg(long)]
    pub require_absolute: bool,
}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut policy = path_policy(&config)?;
        if self.require_absolute {
            policy.require_absolute = true;
        }
        log::debug!("checking with {policy:?}");

        let results: Vec<(RemotePath, Option<String>)> = self
            .paths
            .into_iter()
            .map(RemotePath::from)
            .map(|path| {
                let reason = policy.check(&path).err().map(|e| e.to_string());
                (path, reason)
            })
            .collect();
        let rejected = results.iter().filter(|(_, r)| r.is_some()).count();

        let output = match output_format(global, &config) {
            OutputFormat::Human => results
                .iter()
                .map(|(path, reason)| match reason {
                    None => format!("ok: {}", path.native()),
                    Some(reason) => reason.clone(),
                })
                .collect::<Vec<_>>()
                .join("\n"),
            OutputFormat::Json => {
                let entries: Vec<_> = results
                    .iter()
                    .map(|(path, reason)| {
                        json!({ "path": path, "ok": reason.is_none(), "reason": reason })
                    })
                    .collect();
                serde_json::to_string_pretty(&entries)
                    .map_err(|e| CliError::Library(e.into()))?
            }
        };
        print_output(&output)?;

        if rejected > 0 {
            return Err(CliError::SemanticFailure(format!(
                "{rejected} of {} paths rejected",
                results.len()
            )));
        }
        Ok(())
    }
}
