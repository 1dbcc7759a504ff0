//! CLI command implementations.
//!
//! - `segments`: Split a path into its segments
//! - `inspect`: Report everything known about a path
//! - `join`: Concatenate paths left to right
//! - `compare`: Order and relate two paths
//! - `check`: Validate paths against the configured policy

pub mod check;
pub mod compare;
pub mod inspect;
pub mod join;
pub mod segments;

pub use check::CheckCommand;
pub use compare::CompareCommand;
pub use inspect::InspectCommand;
pub use join::JoinCommand;
pub use segments::SegmentsCommand;
