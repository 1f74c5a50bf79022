//! Errors raised by the bundled structured sinks

use thiserror::Error;

/// Failure reported by [`JsonSink`](super::JsonSink) or
/// [`ValueSink`](super::ValueSink)
///
/// Caller-provided sinks report their own error type; the renderer passes it
/// through untouched.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The underlying writer failed
    #[error("sink i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A field or `end_object` arrived with no object open
    #[error("no object is open")]
    NoOpenObject,

    /// An unnamed object was started inside another object
    #[error("unnamed object inside an open object")]
    AnonymousNested,

    /// Output was finished while objects were still open
    #[error("{0} objects left open")]
    UnclosedObjects(usize),

    /// Output was finished before any object was written
    #[error("nothing was written")]
    NothingWritten,
}
