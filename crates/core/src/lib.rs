//! Core types for commit statistics
//!
//! This crate defines the value describing the last durable commit point of a
//! segment set:
//! - [`CommitSnapshot`]: immutable user metadata + generation
//! - [`UserData`] / [`UserDataBuilder`]: the metadata mapping
//! - [`CommitSource`]: what a producer must expose to be captured
//! - [`SegmentCommit`]: in-memory producer descriptor
//!
//! Encoding and rendering live in `commit-stats-wire`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod snapshot;
pub mod source;
pub mod user_data;

pub use snapshot::CommitSnapshot;
pub use source::{CommitSource, SegmentCommit};
pub use user_data::{UserData, UserDataBuilder};
