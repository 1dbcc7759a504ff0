//! Compare command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, output_format, print_output, GlobalOptions};
use clap::Args;
use rpath::{OutputFormat, PathRelationship, RemotePath};
use std::cmp::Ordering;

/// Order and relate two paths.
///
/// Ordering is byte-wise over the stored text. The relationship says
/// whether the first path is an ancestor or descendant of the second.
#[derive(Args)]
pub struct CompareCommand {
    /// First path
    #[arg(value_name = "A", allow_hyphen_values = true)]
    pub first: String,

    /// Second path
    #[arg(value_name = "B", allow_hyphen_values = true)]
    pub second: String,
}

impl CompareCommand {
    /// Execute the compare command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let first = RemotePath::from(self.first);
        let second = RemotePath::from(self.second);

        let ordering = ordering_name(first.cmp(&second));
        let relationship = PathRelationship::between(&first, &second);

        let output = match output_format(global, &config) {
            OutputFormat::Human => format!("{ordering}\n{relationship}"),
            OutputFormat::Json => serde_json::json!({
                "first": first,
                "second": second,
                "ordering": ordering,
                "relationship": relationship.description(),
            })
            .to_string(),
        };
        print_output(&output)
    }
}

fn ordering_name(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    }
}
