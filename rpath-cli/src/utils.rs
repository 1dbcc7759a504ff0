//! Utility functions for CLI operations.
//!
//! Shared helpers for configuration loading and output.

use crate::error::CliError;
use rpath::{Config, ConfigBuilder, OutputFormat, PathPolicy};
use std::io::Write;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Additional configuration file.
    pub config: Option<PathBuf>,

    /// Output format requested on the command line.
    pub format: Option<OutputFormat>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. The `--config` file
/// 3. The user config in `~/.rpath`
/// 4. Built-in defaults (lowest priority)
///
/// Policy settings are validated by [`path_policy`], so commands that never
/// check paths are not stopped by a bad policy.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().skip_policy_validation();
    if let Some(path) = &global.config {
        log::debug!("using configuration file {}", path.display());
        builder = builder.with_config_file(path);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// The validated path policy from `config`.
pub fn path_policy(config: &Config) -> Result<PathPolicy, CliError> {
    config
        .checked_path_policy()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// The output format to use: the flag if given, else the configured one.
pub fn output_format(global: &GlobalOptions, config: &Config) -> OutputFormat {
    global.format.unwrap_or_else(|| config.output_format())
}

/// Write `output` followed by a newline to stdout.
pub fn print_output(output: &str) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}")?;
    Ok(())
}
