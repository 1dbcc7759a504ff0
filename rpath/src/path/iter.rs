//! Segment iteration over a [`RemotePath`].
//!
//! [`Segments`] is a cursor into the path's text: a borrowed slice plus a
//! byte offset and a phase. It owns no storage of its own, so a path can be
//! iterated any number of times without allocating a list of segments.

use std::iter::FusedIterator;

use super::types::{RemotePath, DIRECTORY_SENTINEL, SEPARATOR};

/// Where a [`Segments`] cursor is in its walk over the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// The root segment has not been produced yet.
    Root,
    /// Producing `/`-delimited names.
    Names,
    /// All names produced; the directory sentinel is still due.
    Sentinel,
    /// Nothing left.
    Done,
}

/// An iterator over the segments of a [`RemotePath`].
///
/// Created by [`RemotePath::segments`]. Each item is a single-segment
/// `RemotePath`:
///
/// - the root `/` first, if the path is absolute;
/// - then every non-empty `/`-delimited name, in order;
/// - then `.` if the path is in directory form and is not the root itself.
///
/// Runs of separators are treated as one; the stored text is not changed.
///
/// Two cursors over the same text compare equal when they are at the same
/// position, so every exhausted cursor over a path equals every other.
///
/// # Examples
///
/// ```
/// use rpath::RemotePath;
///
/// let path = RemotePath::from("foo/bar/");
/// let mut segments = path.segments();
/// assert_eq!(segments.len(), 3);
/// assert_eq!(segments.next(), Some(RemotePath::from("foo")));
/// assert_eq!(segments.next(), Some(RemotePath::from("bar")));
/// assert_eq!(segments.next(), Some(RemotePath::from(".")));
/// assert_eq!(segments.next(), None);
/// assert_eq!(segments, path.segments().to_end());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments<'a> {
    source: &'a str,
    pos: usize,
    phase: Phase,
}

impl<'a> Segments<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        let phase = if source.is_empty() {
            Phase::Done
        } else if source.starts_with(SEPARATOR) {
            Phase::Root
        } else {
            Phase::Names
        };
        Self {
            source,
            pos: 0,
            phase,
        }
    }

    /// The text this cursor walks over.
    #[must_use]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Returns `true` once every segment has been produced.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.phase == Phase::Done
    }

    fn has_sentinel(&self) -> bool {
        self.source.ends_with(SEPARATOR) && self.source.len() > 1
    }

    fn finish(&mut self) {
        self.pos = self.source.len();
        self.phase = Phase::Done;
    }

    fn after_names(&mut self) {
        if self.has_sentinel() {
            self.pos = self.source.len();
            self.phase = Phase::Sentinel;
        } else {
            self.finish();
        }
    }

    fn remaining_names(&self) -> usize {
        self.source[self.pos..]
            .split(SEPARATOR)
            .filter(|name| !name.is_empty())
            .count()
    }

    /// Move the cursor to its end position and return it.
    #[must_use]
    pub fn to_end(mut self) -> Self {
        self.finish();
        self
    }
}

impl Iterator for Segments<'_> {
    type Item = RemotePath;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.phase {
                Phase::Root => {
                    let names = self.source.trim_start_matches(SEPARATOR);
                    self.pos = self.source.len() - names.len();
                    self.phase = Phase::Names;
                    return Some(RemotePath::root());
                }
                Phase::Names => {
                    let rest = &self.source[self.pos..];
                    let trimmed = rest.trim_start_matches(SEPARATOR);
                    self.pos += rest.len() - trimmed.len();

                    if trimmed.is_empty() {
                        self.after_names();
                        continue;
                    }

                    let end = trimmed.find(SEPARATOR).unwrap_or(trimmed.len());
                    self.pos += end;
                    return Some(RemotePath::from(&trimmed[..end]));
                }
                Phase::Sentinel => {
                    self.finish();
                    return Some(RemotePath::from(DIRECTORY_SENTINEL));
                }
                Phase::Done => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = match self.phase {
            Phase::Root => 1 + self.remaining_names() + usize::from(self.has_sentinel()),
            Phase::Names => self.remaining_names() + usize::from(self.has_sentinel()),
            Phase::Sentinel => 1,
            Phase::Done => 0,
        };
        (len, Some(len))
    }
}

impl ExactSizeIterator for Segments<'_> {}

impl FusedIterator for Segments<'_> {}

impl<'a> IntoIterator for &'a RemotePath {
    type Item = RemotePath;
    type IntoIter = Segments<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments()
    }
}
