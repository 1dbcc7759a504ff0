//! The remote path value type.
//!
//! [`RemotePath`] holds the textual form of a path on a remote SSH host. The
//! text is stored verbatim: nothing is normalized, validated or resolved, so
//! the path can be handed back to the remote host exactly as it was received.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::iter::Segments;

/// The separator between segments of a remote path.
pub const SEPARATOR: char = '/';

/// The segment produced after the last name of a directory-form path.
pub const DIRECTORY_SENTINEL: &str = ".";

/// A POSIX-style path on a remote host.
///
/// Remote paths always use `/` as the separator, whatever the local platform
/// uses. Equality and ordering are those of the stored text: case-sensitive
/// and byte-lexicographic, with separators taking part in the comparison.
///
/// # Examples
///
/// ```
/// use rpath::RemotePath;
///
/// let path = RemotePath::from("/home/user/notes.txt");
/// assert!(path.is_absolute());
/// assert!(!path.is_directory());
/// assert_eq!(path.native(), "/home/user/notes.txt");
///
/// let dir = RemotePath::from("home/user/");
/// assert!(dir.is_relative());
/// assert!(dir.is_directory());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemotePath {
    text: String,
}

impl RemotePath {
    /// Create a path from its textual form.
    ///
    /// Any text is accepted and kept exactly as given.
    ///
    /// # Examples
    ///
    /// ```
    /// use rpath::RemotePath;
    ///
    /// let path = RemotePath::new("Test Dir/Test Filename.txt");
    /// assert_eq!(path.native(), "Test Dir/Test Filename.txt");
    /// ```
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The root path, `/`.
    #[must_use]
    pub fn root() -> Self {
        Self::new(SEPARATOR.to_string())
    }

    /// The text of the path in the remote host's form.
    ///
    /// This is the exact text the path was created from.
    #[must_use]
    pub fn native(&self) -> &str {
        &self.text
    }

    /// Same as [`native`](Self::native).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the path, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// Returns `true` if the path has no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns `true` if the path starts with `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rpath::RemotePath;
    ///
    /// assert!(RemotePath::from("/").is_absolute());
    /// assert!(RemotePath::from("/etc/hosts").is_absolute());
    /// assert!(!RemotePath::from("etc/hosts").is_absolute());
    /// assert!(!RemotePath::default().is_absolute());
    /// ```
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.text.starts_with(SEPARATOR)
    }

    /// Returns `true` if the path is not absolute. The empty path is relative.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// Returns `true` if the path ends with `/`, which marks it as naming a
    /// directory. The root path is a directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use rpath::RemotePath;
    ///
    /// assert!(RemotePath::from("foo/bar/").is_directory());
    /// assert!(!RemotePath::from("foo/bar").is_directory());
    /// assert!(RemotePath::from("/").is_directory());
    /// assert!(!RemotePath::default().is_directory());
    /// ```
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.text.ends_with(SEPARATOR)
    }

    /// Returns `true` if the path is exactly `/`.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.text.len() == 1 && self.is_absolute()
    }

    /// Iterate over the segments of the path.
    ///
    /// Absolute paths start with the root segment `/`. Directory-form paths
    /// (other than the root itself) end with a `.` segment after their last
    /// name, so a directory can be told apart from a file with the same
    /// names by looking at the final segment alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use rpath::RemotePath;
    ///
    /// let names: Vec<String> = RemotePath::from("/srv/www/")
    ///     .segments()
    ///     .map(RemotePath::into_string)
    ///     .collect();
    /// assert_eq!(names, ["/", "srv", "www", "."]);
    /// ```
    #[must_use]
    pub fn segments(&self) -> Segments<'_> {
        Segments::new(&self.text)
    }

    /// The last name in the path, ignoring the directory sentinel.
    ///
    /// Returns `None` for the empty path and for paths made only of
    /// separators.
    ///
    /// # Examples
    ///
    /// ```
    /// use rpath::RemotePath;
    ///
    /// assert_eq!(RemotePath::from("/srv/www/").file_name(), Some("www"));
    /// assert_eq!(RemotePath::from("notes.txt").file_name(), Some("notes.txt"));
    /// assert_eq!(RemotePath::from("/").file_name(), None);
    /// ```
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.text
            .trim_end_matches(SEPARATOR)
            .rsplit(SEPARATOR)
            .next()
            .filter(|name| !name.is_empty())
    }

    /// The name to show for this path in a folder view.
    ///
    /// This is the [`file_name`](Self::file_name) when there is one, and
    /// the full text otherwise (so the root shows as `/`).
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.file_name().unwrap_or(&self.text)
    }

    /// The directory containing the last name of this path, in directory
    /// form.
    ///
    /// Returns `None` when the path has no name to strip. A single relative
    /// name has no parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use rpath::RemotePath;
    ///
    /// assert_eq!(
    ///     RemotePath::from("/srv/www/index.html").parent(),
    ///     Some(RemotePath::from("/srv/www/"))
    /// );
    /// assert_eq!(RemotePath::from("/srv").parent(), Some(RemotePath::root()));
    /// assert_eq!(RemotePath::from("srv").parent(), None);
    /// assert_eq!(RemotePath::from("/").parent(), None);
    /// ```
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.file_name()?;
        let trimmed = self.text.trim_end_matches(SEPARATOR);
        let cut = trimmed.rfind(SEPARATOR)?;
        let prefix = trimmed[..cut].trim_end_matches(SEPARATOR);
        if prefix.is_empty() {
            // Only separators precede the last name.
            return Some(Self::root());
        }
        Some(Self::new(format!("{prefix}{SEPARATOR}")))
    }

    /// The directory form of this path, with a trailing `/`.
    ///
    /// Paths already in directory form and the empty path are returned
    /// unchanged.
    #[must_use]
    pub fn as_directory(&self) -> Self {
        if self.is_empty() || self.is_directory() {
            return self.clone();
        }
        Self::new(format!("{}{SEPARATOR}", self.text))
    }

    /// Compose the path of an entry named `name` inside this path.
    ///
    /// Shorthand for `self / name`, used when building child paths from
    /// directory listings.
    #[must_use]
    pub fn child(&self, name: &str) -> Self {
        self.join(&Self::from(name))
    }
}

impl From<&str> for RemotePath {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for RemotePath {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl From<&String> for RemotePath {
    fn from(text: &String) -> Self {
        Self::new(text.as_str())
    }
}

impl From<RemotePath> for String {
    fn from(path: RemotePath) -> Self {
        path.text
    }
}

impl FromStr for RemotePath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl AsRef<str> for RemotePath {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl PartialEq<str> for RemotePath {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for RemotePath {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl fmt::Display for RemotePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
