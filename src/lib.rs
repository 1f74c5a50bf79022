//! # Commit Stats
//!
//! Metadata about the most recent durable commit point of a segment set.
//!
//! A [`CommitSnapshot`] is captured from the storage layer (anything that
//! implements [`CommitSource`]) and is immutable from then on. It can be:
//!
//! - encoded to a compact binary form for transport or persistence
//!   ([`to_bytes`] / [`from_bytes`], with `optional_*` variants for values
//!   that may be absent)
//! - rendered into a structured document as
//!   `{"commit":{"generation":N,"user_data":{...}}}` ([`to_json`],
//!   [`to_json_value`], or any [`StructuredSink`] via [`render_into`])
//!
//! ## Quick Start
//!
//! ```
//! use commit_stats::prelude::*;
//!
//! let mut segments = SegmentCommit::new();
//! segments.set_user_data("history_uuid", None::<&str>);
//! segments.commit();
//!
//! let snapshot = CommitSnapshot::capture(&segments);
//! let json = to_json(&snapshot, &JsonOptions::default())?;
//! assert_eq!(json, r#"{"commit":{"generation":1,"user_data":{"history_uuid":null}}}"#);
//! # Ok::<(), commit_stats::Error>(())
//! ```
//!
//! ## Crates
//!
//! - `commit-stats-core` - the snapshot value and producer interface
//! - `commit-stats-wire` - binary codec and structured rendering

#![warn(missing_docs)]

mod codec;
mod error;

pub mod prelude;

pub use codec::{
    from_bytes, optional_from_bytes, optional_to_bytes, render_into, to_bytes, to_json,
    to_json_value,
};
pub use error::{Error, Result};

// Re-export the building blocks
pub use commit_stats_core::{CommitSnapshot, CommitSource, SegmentCommit, UserData, UserDataBuilder};
pub use commit_stats_wire::{
    fields, DecodeError, JsonOptions, JsonSink, SinkError, StructuredSink, ToStructured, ValueSink,
};
