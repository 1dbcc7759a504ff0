//! Configuration validation.

use crate::config::schema::{Config, PolicyConfig};
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use rpath::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error for zero limits, or for a name limit
    /// larger than the path limit.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref policy) = config.policy {
            Self::validate_policy(policy)?;
        }
        Ok(())
    }

    fn validate_policy(policy: &PolicyConfig) -> Result<()> {
        if policy.max_path_length == Some(0) {
            return Err(Error::Validation {
                field: "policy.max_path_length".into(),
                message: "Limit must be greater than 0".into(),
            });
        }

        if policy.max_segment_length == Some(0) {
            return Err(Error::Validation {
                field: "policy.max_segment_length".into(),
                message: "Limit must be greater than 0".into(),
            });
        }

        // Only limits set explicitly are compared; an unset name limit is
        // clamped to the path limit by `Config::path_policy`.
        if let (Some(path), Some(segment)) = (policy.max_path_length, policy.max_segment_length) {
            if segment > path {
                return Err(Error::Validation {
                    field: "policy.max_segment_length".into(),
                    message: format!("Name limit {segment} exceeds path limit {path}"),
                });
            }
        }

        Ok(())
    }
}
