//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, PolicyConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use rpath::config::{Config, ConfigMerger};
/// use rpath::OutputFormat;
///
/// let low = Config { output_format: Some(OutputFormat::Human), ..Default::default() };
/// let high = Config { output_format: Some(OutputFormat::Json), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.output_format, Some(OutputFormat::Json));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources given in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Policy settings merge field by field, so a file that only sets
    /// `max_path_length` keeps the other policy values from below it.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref source_policy) = source.policy {
            target.policy = Some(match &target.policy {
                Some(target_policy) => Self::merge_policy(target_policy, source_policy),
                None => source_policy.clone(),
            });
        }
    }

    fn merge_policy(target: &PolicyConfig, source: &PolicyConfig) -> PolicyConfig {
        PolicyConfig {
            reject_control_chars: source.reject_control_chars.or(target.reject_control_chars),
            max_path_length: source.max_path_length.or(target.max_path_length),
            max_segment_length: source.max_segment_length.or(target.max_segment_length),
            require_absolute: source.require_absolute.or(target.require_absolute),
        }
    }
}
