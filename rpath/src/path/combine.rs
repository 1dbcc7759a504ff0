//! Concatenation of remote paths.
//!
//! Both the copying form (`lhs / rhs`) and the in-place form (`lhs /= rhs`)
//! go through [`combine`].
//!
//! Joining with an absolute right-hand side does NOT restart at that path.
//! Its leading separators are dropped and the rest is appended to the
//! left-hand side, so `foo/bar` joined with `/baz/woz` is `foo/bar/baz/woz`.
//! Directory listings hand back names that may carry a leading `/`, and
//! callers rely on them staying beneath the folder being listed. Do not
//! change this to the `std::path::Path::join` behaviour.

use std::ops::{Div, DivAssign};

use super::types::{RemotePath, SEPARATOR};

/// Concatenate two remote paths.
///
/// - An empty `lhs` gives `rhs` unchanged, and an empty `rhs` gives `lhs`.
/// - Root joined with root is root.
/// - Otherwise the text of `rhs`, minus any leading separators, is appended
///   to `lhs` with exactly one separator between them.
///
/// The result is absolute exactly when `lhs` is (unless `lhs` is empty),
/// and is in directory form exactly when `rhs` is.
///
/// # Examples
///
/// ```
/// use rpath::{combine, RemotePath};
///
/// let base = RemotePath::from("foo/bar");
/// assert_eq!(combine(&base, &RemotePath::from("baz/woz")), "foo/bar/baz/woz");
/// assert_eq!(combine(&base, &RemotePath::from("/baz/woz")), "foo/bar/baz/woz");
/// assert_eq!(combine(&RemotePath::root(), &RemotePath::root()), "/");
/// ```
#[must_use]
pub fn combine(lhs: &RemotePath, rhs: &RemotePath) -> RemotePath {
    if lhs.is_empty() {
        return rhs.clone();
    }
    if rhs.is_empty() || (lhs.is_root() && rhs.is_root()) {
        return lhs.clone();
    }

    let left = lhs.native();
    let right = rhs.native().trim_start_matches(SEPARATOR);

    let mut text = String::with_capacity(left.len() + 1 + right.len());
    text.push_str(left);
    if !left.ends_with(SEPARATOR) {
        text.push(SEPARATOR);
    }
    text.push_str(right);
    RemotePath::from(text)
}

impl RemotePath {
    /// Return the concatenation of `self` and `rhs`, leaving both untouched.
    ///
    /// See [`combine`] for the rules.
    #[must_use]
    pub fn join(&self, rhs: &RemotePath) -> RemotePath {
        combine(self, rhs)
    }

    /// Replace `self` with the concatenation of `self` and `rhs`.
    ///
    /// Returns `self` so calls can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use rpath::RemotePath;
    ///
    /// let mut path = RemotePath::root();
    /// path.push(&RemotePath::from("srv")).push(&RemotePath::from("www/"));
    /// assert_eq!(path, "/srv/www/");
    /// ```
    pub fn push(&mut self, rhs: &RemotePath) -> &mut Self {
        *self = combine(self, rhs);
        self
    }
}

impl Div<&RemotePath> for &RemotePath {
    type Output = RemotePath;

    fn div(self, rhs: &RemotePath) -> RemotePath {
        combine(self, rhs)
    }
}

impl Div<RemotePath> for RemotePath {
    type Output = RemotePath;

    fn div(self, rhs: RemotePath) -> RemotePath {
        combine(&self, &rhs)
    }
}

impl Div<&RemotePath> for RemotePath {
    type Output = RemotePath;

    fn div(self, rhs: &RemotePath) -> RemotePath {
        combine(&self, rhs)
    }
}

impl Div<&str> for &RemotePath {
    type Output = RemotePath;

    fn div(self, rhs: &str) -> RemotePath {
        combine(self, &RemotePath::from(rhs))
    }
}

impl Div<&str> for RemotePath {
    type Output = RemotePath;

    fn div(self, rhs: &str) -> RemotePath {
        combine(&self, &RemotePath::from(rhs))
    }
}

impl DivAssign<&RemotePath> for RemotePath {
    fn div_assign(&mut self, rhs: &RemotePath) {
        self.push(rhs);
    }
}

impl DivAssign<RemotePath> for RemotePath {
    fn div_assign(&mut self, rhs: RemotePath) {
        self.push(&rhs);
    }
}

impl DivAssign<&str> for RemotePath {
    fn div_assign(&mut self, rhs: &str) {
        self.push(&RemotePath::from(rhs));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn join(lhs: &str, rhs: &str) -> RemotePath {
        combine(&RemotePath::from(lhs), &RemotePath::from(rhs))
    }

    #[test]
    fn test_relative_and_relative() {
        assert_eq!(join("foo/bar", "baz/woz"), "foo/bar/baz/woz");
    }

    #[test]
    fn test_directory_left_operand_keeps_single_separator() {
        assert_eq!(join("foo/bar/", "baz/woz/"), "foo/bar/baz/woz/");
        assert_eq!(join("foo/bar/", "baz/woz"), "foo/bar/baz/woz");
    }

    #[test]
    fn test_absolute_right_operand_is_appended_not_restarted() {
        assert_eq!(join("foo/bar", "/baz/woz"), "foo/bar/baz/woz");
        assert_eq!(join("foo/bar/", "/baz/woz"), "foo/bar/baz/woz");
        assert_eq!(join("/srv", "//baz"), "/srv/baz");
    }

    #[test]
    fn test_root_operands() {
        assert_eq!(join("/", "foo/bar"), "/foo/bar");
        assert_eq!(join("/", "/foo"), "/foo");
        assert_eq!(join("/", "/"), "/");
    }

    #[test]
    fn test_root_right_operand_gives_directory_form() {
        assert_eq!(join("foo", "/"), "foo/");
    }

    #[test]
    fn test_empty_operands_are_identity() {
        assert_eq!(join("", "foo/bar"), "foo/bar");
        assert_eq!(join("", "/abs/"), "/abs/");
        assert_eq!(join("foo/bar", ""), "foo/bar");
        assert_eq!(join("/", ""), "/");
        assert_eq!(join("", ""), "");
    }

    #[test]
    fn test_result_takes_left_rootedness() {
        assert!(join("rel", "/abs").is_relative());
        assert!(join("/abs", "rel").is_absolute());
    }

    #[test]
    fn test_operators_leave_operands_unchanged() {
        let p = RemotePath::from("foo/bar");
        let q = RemotePath::from("/baz/woz");
        let r = &p / &q;
        assert_eq!(r, "foo/bar/baz/woz");
        assert_eq!(p, "foo/bar");
        assert_eq!(q, "/baz/woz");
    }

    #[test]
    fn test_div_assign_updates_receiver_only() {
        let mut p = RemotePath::from("foo/bar/");
        let q = RemotePath::from("baz/woz/");
        p /= &q;
        assert_eq!(p, "foo/bar/baz/woz/");
        assert_eq!(q, "baz/woz/");

        p /= "file.txt";
        assert_eq!(p, "foo/bar/baz/woz/file.txt");
    }

    #[test]
    fn test_push_returns_receiver() {
        let mut p = RemotePath::default();
        let q = RemotePath::from("foo/bar");
        assert_eq!(*p.push(&q), q);
        assert_eq!(p, q);
    }

    #[test]
    fn test_owned_and_str_operators() {
        let base = RemotePath::from("/home");
        assert_eq!(base.clone() / RemotePath::from("user"), "/home/user");
        assert_eq!(&base / "user/", "/home/user/");
        assert_eq!(base / "user", "/home/user");
    }
}
