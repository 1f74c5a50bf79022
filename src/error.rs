//! Unified error type for commit statistics.
//!
//! Only two things can go wrong: decoding bytes that are not a well-formed
//! snapshot, and a rendering sink failing. Capturing and encoding a snapshot
//! cannot fail.

use commit_stats_wire::{DecodeError, SinkError};
use thiserror::Error;

/// All commit-stats errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Bytes are truncated or otherwise not a valid encoding
    #[error("malformed stream: {0}")]
    MalformedStream(#[from] DecodeError),

    /// The structured-output sink reported a failure
    #[error("sink failure: {0}")]
    SinkFailure(#[from] SinkError),
}

/// Result type for commit-stats operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a decode-time error.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::MalformedStream(_))
    }

    /// Check if this is a rendering-time error.
    pub fn is_sink_failure(&self) -> bool {
        matches!(self, Error::SinkFailure(_))
    }

    /// Check if the input simply ended too early.
    pub fn is_truncation(&self) -> bool {
        matches!(self, Error::MalformedStream(e) if e.is_truncation())
    }
}
