//! Facade-level encode, decode and render helpers.
//!
//! Thin wrappers over `commit-stats-wire` that report failures as the unified
//! [`Error`](crate::Error).

use crate::error::Result;
use commit_stats_core::CommitSnapshot;
use commit_stats_wire::{JsonOptions, StructuredSink};

/// Encode a snapshot to its binary form.
pub fn to_bytes(snapshot: &CommitSnapshot) -> Vec<u8> {
    commit_stats_wire::encode_snapshot(snapshot)
}

/// Decode a snapshot from bytes that hold exactly one encoded snapshot.
pub fn from_bytes(bytes: &[u8]) -> Result<CommitSnapshot> {
    Ok(commit_stats_wire::decode_snapshot(bytes)?)
}

/// Encode a snapshot that may be absent.
pub fn optional_to_bytes(snapshot: Option<&CommitSnapshot>) -> Vec<u8> {
    commit_stats_wire::encode_optional_snapshot(snapshot)
}

/// Decode a snapshot that may be absent.
pub fn optional_from_bytes(bytes: &[u8]) -> Result<Option<CommitSnapshot>> {
    Ok(commit_stats_wire::decode_optional_snapshot(bytes)?)
}

/// Render a snapshot as JSON text.
pub fn to_json(snapshot: &CommitSnapshot, options: &JsonOptions) -> Result<String> {
    Ok(commit_stats_wire::render_json_with(snapshot, options)?)
}

/// Render a snapshot as a `serde_json::Value` tree.
pub fn to_json_value(snapshot: &CommitSnapshot) -> Result<serde_json::Value> {
    Ok(commit_stats_wire::render_value(snapshot)?)
}

/// Render a snapshot into a caller-provided sink.
///
/// The sink's own error type is returned unchanged.
pub fn render_into<S: StructuredSink + ?Sized>(
    snapshot: &CommitSnapshot,
    sink: &mut S,
) -> std::result::Result<(), S::Error> {
    commit_stats_wire::render(snapshot, sink)
}
