//! Remote filesystem paths.
//!
//! This module provides [`RemotePath`], the value type used for every path on
//! a remote SFTP host, independent of the local platform's path grammar.
//!
//! # Key Concepts
//!
//! ## Verbatim text
//!
//! A path stores exactly the text it was created from. `.` and `..` are not
//! resolved and repeated separators are not collapsed. Equality and ordering
//! compare that text directly.
//!
//! ## Directory form
//!
//! A trailing `/` marks a path as naming a directory. Iterating such a path
//! produces an extra `.` segment after its last name, so consumers can tell
//! `foo/bar/` from `foo/bar` by looking at the final segment.
//!
//! ## Concatenation
//!
//! `lhs / rhs` appends `rhs` beneath `lhs`. An absolute `rhs` loses its
//! leading separator instead of replacing `lhs`; see [`combine`].
//!
//! # Examples
//!
//! ```
//! use rpath::RemotePath;
//!
//! let home = RemotePath::from("/home/user/");
//! let file = &home / "notes.txt";
//! assert_eq!(file, "/home/user/notes.txt");
//!
//! let segments: Vec<RemotePath> = file.segments().collect();
//! assert_eq!(segments.len(), 4);
//! assert_eq!(segments[0], RemotePath::root());
//! ```

mod combine;
mod iter;
pub mod relationship;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use combine::combine;
pub use iter::Segments;
pub use relationship::PathRelationship;
pub use types::{RemotePath, DIRECTORY_SENTINEL, SEPARATOR};
