//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::config::validator::ConfigValidator;
use crate::error;
use crate::output::OutputFormat;
use crate::policy::PathPolicy;

/// Complete configuration structure.
///
/// Every field is optional so that partial files can be layered on top of
/// each other.
///
/// # Examples
///
/// ```
/// use rpath::config::{Config, PolicyConfig};
///
/// let config = Config {
///     policy: Some(PolicyConfig {
///         max_path_length: Some(1024),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// assert_eq!(config.path_policy().max_path_length, 1024);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Rules applied to untrusted path text.
    pub policy: Option<PolicyConfig>,

    /// Output format for reports.
    pub output_format: Option<OutputFormat>,
}

/// Path policy settings. Unset fields fall back to [`PathPolicy::default`].
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    /// Reject paths containing control characters.
    pub reject_control_chars: Option<bool>,

    /// Longest accepted path, in bytes.
    pub max_path_length: Option<usize>,

    /// Longest accepted name, in bytes.
    pub max_segment_length: Option<usize>,

    /// Reject relative paths.
    pub require_absolute: Option<bool>,
}

impl Config {
    /// The path policy described by this configuration.
    ///
    /// Unset fields take their defaults. The name limit never exceeds the
    /// path limit, so lowering only `max_path_length` lowers both.
    #[must_use]
    pub fn path_policy(&self) -> PathPolicy {
        let defaults = PathPolicy::default();
        let Some(policy) = &self.policy else {
            return defaults;
        };
        let max_path_length = policy.max_path_length.unwrap_or(defaults.max_path_length);
        PathPolicy {
            reject_control_chars: policy
                .reject_control_chars
                .unwrap_or(defaults.reject_control_chars),
            max_path_length,
            max_segment_length: policy
                .max_segment_length
                .unwrap_or(defaults.max_segment_length)
                .min(max_path_length),
            require_absolute: policy.require_absolute.unwrap_or(defaults.require_absolute),
        }
    }

    /// Validate the policy settings, then return [`path_policy`](Self::path_policy).
    ///
    /// For configurations built with
    /// [`ConfigBuilder::skip_policy_validation`](crate::config::ConfigBuilder::skip_policy_validation).
    ///
    /// # Errors
    ///
    /// Returns a validation error if the policy settings are invalid.
    pub fn checked_path_policy(&self) -> error::Result<PathPolicy> {
        ConfigValidator::validate(self)?;
        Ok(self.path_policy())
    }

    /// The configured output format, or human-readable output.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}
