//! Wire encoding for commit snapshots
//!
//! This crate implements the two boundary contracts of a
//! [`CommitSnapshot`](commit_stats_core::CommitSnapshot):
//!
//! - [`binary`]: compact, deterministic byte encoding (plus an optional
//!   "maybe absent" variant) for transport and persistence
//! - [`structured`]: rendering into any nested-object sink, with bundled
//!   JSON text and `serde_json::Value` sinks
//!
//! ## Examples
//!
//! ```
//! use commit_stats_core::{CommitSnapshot, UserData};
//! use commit_stats_wire::{decode_snapshot, encode_snapshot, render_json};
//!
//! let snapshot = CommitSnapshot::new(
//!     UserData::builder().with("sync_id", Some("abc")).build(),
//!     42,
//! );
//!
//! let bytes = encode_snapshot(&snapshot);
//! assert_eq!(decode_snapshot(&bytes).unwrap(), snapshot);
//!
//! let json = render_json(&snapshot).unwrap();
//! assert_eq!(json, r#"{"commit":{"generation":42,"user_data":{"sync_id":"abc"}}}"#);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod binary;
pub mod structured;

// Re-export main types
pub use binary::{
    decode_optional_snapshot, decode_snapshot, encode_optional_snapshot, encode_snapshot,
    read_optional_snapshot, read_snapshot, Decodable, DecodeError, Encodable, StreamInput,
    StreamOutput,
};
pub use structured::{
    fields, render, render_json, render_json_with, render_value, JsonOptions, JsonSink,
    SinkError, StructuredSink, ToStructured, ValueSink,
};
