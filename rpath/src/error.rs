//! Error types for the rpath library.
//!
//! Path values themselves never fail: any text is a valid remote path. The
//! errors here come from the layers around them, such as policy checks on
//! untrusted input and configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an rpath error.
///
/// # Examples
///
/// ```
/// use rpath::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(4096)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the rpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A remote path was rejected by a [`PathPolicy`](crate::PathPolicy).
    #[error("path {path:?} rejected: {reason}")]
    PolicyViolation {
        /// The text of the rejected path.
        path: String,
        /// Why the path was rejected.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be read.
    #[error("configuration file {}: {reason}", path.display())]
    ConfigFile {
        /// The configuration file.
        path: PathBuf,
        /// The reason it could not be used.
        reason: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// Output could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error is a policy rejection of a path.
    ///
    /// # Examples
    ///
    /// ```
    /// use rpath::Error;
    ///
    /// let err = Error::PolicyViolation {
    ///     path: "bad\u{0}name".to_string(),
    ///     reason: "contains a control character".to_string(),
    /// };
    /// assert!(err.is_policy_violation());
    /// ```
    #[must_use]
    pub fn is_policy_violation(&self) -> bool {
        matches!(self, Self::PolicyViolation { .. })
    }
}
