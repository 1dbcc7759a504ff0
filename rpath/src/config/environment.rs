//! Environment variable handling for configuration overrides.
//!
//! This module provides support for RPATH_* environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::output::OutputFormat;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use rpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric length, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        Self::apply_policy_overrides(config)?;

        if let Ok(val) = env::var("RPATH_OUTPUT_FORMAT") {
            config.output_format = Some(OutputFormat::parse(&val).map_err(|message| {
                Error::Validation {
                    field: "RPATH_OUTPUT_FORMAT".into(),
                    message,
                }
            })?);
        }

        Ok(())
    }

    fn apply_policy_overrides(config: &mut Config) -> Result<()> {
        let mut policy = config.policy.clone().unwrap_or_default();
        let mut modified = false;

        if let Ok(val) = env::var("RPATH_REJECT_CONTROL_CHARS") {
            policy.reject_control_chars =
                Some(Self::parse_bool("RPATH_REJECT_CONTROL_CHARS", &val)?);
            modified = true;
        }

        if let Ok(val) = env::var("RPATH_MAX_PATH_LENGTH") {
            policy.max_path_length = Some(Self::parse_length("RPATH_MAX_PATH_LENGTH", &val)?);
            modified = true;
        }

        if let Ok(val) = env::var("RPATH_MAX_SEGMENT_LENGTH") {
            policy.max_segment_length =
                Some(Self::parse_length("RPATH_MAX_SEGMENT_LENGTH", &val)?);
            modified = true;
        }

        if let Ok(val) = env::var("RPATH_REQUIRE_ABSOLUTE") {
            policy.require_absolute = Some(Self::parse_bool("RPATH_REQUIRE_ABSOLUTE", &val)?);
            modified = true;
        }

        if modified {
            config.policy = Some(policy);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    fn parse_length(field: &str, s: &str) -> Result<usize> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Invalid length: '{s}' (expected a non-negative integer)"),
        })
    }
}
