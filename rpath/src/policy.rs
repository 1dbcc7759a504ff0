//! Validation of untrusted remote path text.
//!
//! [`RemotePath`] accepts any text. Code that receives path text from an
//! untrusted source (a remote listing, user input) checks it against a
//! [`PathPolicy`] before acting on it.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::RemotePath;

/// Default limit on the total length of a path, in bytes.
pub const DEFAULT_MAX_PATH_LENGTH: usize = 4096;

/// Default limit on the length of a single name, in bytes.
pub const DEFAULT_MAX_SEGMENT_LENGTH: usize = 255;

/// Rules a remote path must satisfy to be accepted from untrusted input.
///
/// # Examples
///
/// ```
/// use rpath::{PathPolicy, RemotePath};
///
/// let policy = PathPolicy::default();
/// assert!(policy.check(&RemotePath::from("/srv/www/index.html")).is_ok());
/// assert!(policy.check(&RemotePath::from("/srv/evil\nname")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathPolicy {
    /// Reject paths containing control characters, NUL included.
    pub reject_control_chars: bool,
    /// Longest accepted path, in bytes.
    pub max_path_length: usize,
    /// Longest accepted name, in bytes.
    pub max_segment_length: usize,
    /// Reject relative paths.
    pub require_absolute: bool,
}

impl Default for PathPolicy {
    fn default() -> Self {
        Self {
            reject_control_chars: true,
            max_path_length: DEFAULT_MAX_PATH_LENGTH,
            max_segment_length: DEFAULT_MAX_SEGMENT_LENGTH,
            require_absolute: false,
        }
    }
}

impl PathPolicy {
    /// A policy that accepts every path.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            reject_control_chars: false,
            max_path_length: usize::MAX,
            max_segment_length: usize::MAX,
            require_absolute: false,
        }
    }

    /// Check a path against this policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PolicyViolation`] naming the first rule the path
    /// breaks.
    pub fn check(&self, path: &RemotePath) -> Result<()> {
        let text = path.native();

        if self.reject_control_chars {
            if let Some(c) = text.chars().find(|c| c.is_control()) {
                return Err(violation(
                    path,
                    format!("contains control character U+{:04X}", u32::from(c)),
                ));
            }
        }

        if text.len() > self.max_path_length {
            return Err(violation(
                path,
                format!(
                    "is {} bytes long, limit is {}",
                    text.len(),
                    self.max_path_length
                ),
            ));
        }

        if let Some(name) = text
            .split(crate::path::SEPARATOR)
            .find(|name| name.len() > self.max_segment_length)
        {
            return Err(violation(
                path,
                format!(
                    "has a {}-byte name, limit is {}",
                    name.len(),
                    self.max_segment_length
                ),
            ));
        }

        if self.require_absolute && !path.is_absolute() {
            return Err(violation(path, "is not absolute".to_string()));
        }

        log::debug!("path {text:?} accepted by policy");
        Ok(())
    }
}

fn violation(path: &RemotePath, reason: String) -> Error {
    log::debug!("path {:?} rejected: {reason}", path.native());
    Error::PolicyViolation {
        path: path.native().to_string(),
        reason,
    }
}
