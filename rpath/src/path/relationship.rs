//! Path relationship checking.
//!
//! Decides whether one remote path lies beneath another, which is what
//! folder navigation needs when it maps an entry back to the folder that
//! listed it. The comparison is purely lexical: names are compared segment
//! by segment, nothing is resolved on the remote host.

use super::types::{RemotePath, DIRECTORY_SENTINEL};

/// Relationship between two remote paths.
///
/// # Examples
///
/// ```
/// use rpath::{PathRelationship, RemotePath};
///
/// let folder = RemotePath::from("/home/user/");
/// let file = RemotePath::from("/home/user/notes.txt");
///
/// assert_eq!(
///     PathRelationship::between(&folder, &file),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// Both paths name the same location.
    ///
    /// A directory-form path and the same names without the trailing `/`
    /// count as the same location here, even though they are not equal
    /// as values.
    Same,

    /// Neither path lies beneath the other. An absolute path is always
    /// unrelated to a relative one.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use rpath::{PathRelationship, RemotePath};
    ///
    /// let a = RemotePath::from("/a");
    /// let ab = RemotePath::from("/a/b");
    /// let b = RemotePath::from("/b");
    ///
    /// assert_eq!(PathRelationship::between(&a, &ab), PathRelationship::Ancestor);
    /// assert_eq!(PathRelationship::between(&ab, &a), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::between(&a, &a), PathRelationship::Same);
    /// assert_eq!(PathRelationship::between(&a, &b), PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &RemotePath, path2: &RemotePath) -> Self {
        if path1.is_absolute() != path2.is_absolute() {
            return Self::Unrelated;
        }

        let names1 = names(path1);
        let names2 = names(path2);

        if names1 == names2 {
            return Self::Same;
        }
        if names2.starts_with(&names1) {
            return Self::Ancestor;
        }
        if names1.starts_with(&names2) {
            return Self::Descendant;
        }
        Self::Unrelated
    }

    /// Returns `true` for everything but `Unrelated`.
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Check if `path` is inside `directory` (descendant or same).
    ///
    /// # Examples
    ///
    /// ```
    /// use rpath::{PathRelationship, RemotePath};
    ///
    /// let dir = RemotePath::from("/srv/www/");
    /// let page = RemotePath::from("/srv/www/index.html");
    ///
    /// assert!(PathRelationship::is_within(&page, &dir));
    /// assert!(PathRelationship::is_within(&dir, &dir));
    /// assert!(!PathRelationship::is_within(&dir, &page));
    /// ```
    #[must_use]
    pub fn is_within(path: &RemotePath, directory: &RemotePath) -> bool {
        matches!(
            Self::between(path, directory),
            Self::Descendant | Self::Same
        )
    }

    /// Check if `path` contains `other` (ancestor or same).
    #[must_use]
    pub fn contains(path: &RemotePath, other: &RemotePath) -> bool {
        matches!(Self::between(path, other), Self::Ancestor | Self::Same)
    }

    /// A short human-readable description of the relationship.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Ancestor => "ancestor",
            Self::Descendant => "descendant",
            Self::Same => "same",
            Self::Unrelated => "unrelated",
        }
    }
}

impl std::fmt::Display for PathRelationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// The name segments of a path, without the root marker and sentinel.
fn names(path: &RemotePath) -> Vec<String> {
    let has_sentinel = path.is_directory() && !path.is_root();
    let skip_root = usize::from(path.is_absolute());
    let mut segments: Vec<String> = path
        .segments()
        .skip(skip_root)
        .map(RemotePath::into_string)
        .collect();
    if has_sentinel && segments.last().map(String::as_str) == Some(DIRECTORY_SENTINEL) {
        segments.pop();
    }
    segments
}
