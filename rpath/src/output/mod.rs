//! Output formatting for path reports.
//!
//! This module renders what the library knows about a path, either for a
//! person reading a terminal or as JSON for scripts.

mod formatters;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path::RemotePath;
use crate::Result;

pub use formatters::{HumanFormatter, JsonFormatter};

/// Trait for rendering path information into an output format.
pub trait OutputFormatter {
    /// Render a full report on one path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_report(&self, report: &PathReport) -> Result<String>;

    /// Render the segments of a path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_segments(&self, segments: &[RemotePath]) -> Result<String>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format.
    #[default]
    Human,
    /// JSON format.
    Json,
}

impl OutputFormat {
    /// Parse a format name ("human" or "json", case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error message if the name is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use rpath::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
    /// assert!(OutputFormat::parse("xml").is_err());
    /// ```
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output format: {s} (expected human or json)")),
        }
    }

    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Everything the library can say about one path.
///
/// # Examples
///
/// ```
/// use rpath::{PathReport, RemotePath};
///
/// let report = PathReport::new(&RemotePath::from("/srv/www/"));
/// assert!(report.absolute);
/// assert!(report.directory);
/// assert_eq!(report.segments, ["/", "srv", "www", "."]);
/// assert_eq!(report.display_name, "www");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    /// The path text.
    pub path: String,
    /// Whether the path is empty.
    pub empty: bool,
    /// Whether the path is absolute.
    pub absolute: bool,
    /// Whether the path is in directory form.
    pub directory: bool,
    /// Whether the path is the root.
    pub root: bool,
    /// The name a folder view would show.
    pub display_name: String,
    /// The segments of the path.
    pub segments: Vec<String>,
}

impl PathReport {
    /// Build the report for `path`.
    #[must_use]
    pub fn new(path: &RemotePath) -> Self {
        Self {
            path: path.native().to_string(),
            empty: path.is_empty(),
            absolute: path.is_absolute(),
            directory: path.is_directory(),
            root: path.is_root(),
            display_name: path.display_name().to_string(),
            segments: path.segments().map(RemotePath::into_string).collect(),
        }
    }
}
