#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # rpath
//!
//! Path values for files on remote SFTP hosts.
//!
//! A remote host's path grammar need not match the local one, so remote
//! paths get their own type instead of `std::path::Path`. [`RemotePath`]
//! stores POSIX-style text verbatim and offers comparison, segment
//! iteration and concatenation over it.
//!
//! ## Core Types
//!
//! - [`RemotePath`] and [`Segments`]: the path value and its segment cursor
//! - [`combine`]: the concatenation behind `/` and `/=`
//! - [`PathRelationship`]: ancestor/descendant checks for navigation
//! - [`PathPolicy`]: opt-in validation of untrusted path text
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: stderr backend for the `log` facade
//!
//! ## Examples
//!
//! ```
//! use rpath::RemotePath;
//!
//! let folder = RemotePath::from("/home/user/");
//! let entry = RemotePath::from("notes.txt");
//!
//! let file = &folder / &entry;
//! assert_eq!(file, "/home/user/notes.txt");
//! assert!(file.is_absolute());
//! assert_eq!(file.display_name(), "notes.txt");
//!
//! // An absolute right-hand side is appended, not substituted.
//! assert_eq!(&folder / "/etc/passwd", "/home/user/etc/passwd");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;
pub mod policy;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, OutputFormatter, PathReport};
pub use path::{combine, PathRelationship, RemotePath, Segments};
pub use policy::PathPolicy;
