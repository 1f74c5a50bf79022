//! Decode errors for the binary format

use thiserror::Error;

/// A byte stream that does not hold a well-formed value
///
/// Every variant means the stream is malformed; none is recoverable by the
/// decoder and no partial value is ever returned alongside it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The stream ended before a fixed-size field was complete
    #[error("unexpected end of stream: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof {
        /// Bytes the field requires
        needed: usize,
        /// Bytes left in the stream
        remaining: usize,
    },

    /// A length prefix points past the end of the stream
    #[error("declared length {declared} exceeds {remaining} remaining bytes")]
    LengthOutOfBounds {
        /// Length read from the prefix
        declared: usize,
        /// Bytes left in the stream
        remaining: usize,
    },

    /// A VInt does not fit in 32 bits
    #[error("vint overflows 32 bits")]
    VIntOverflow,

    /// A presence byte other than 0 or 1
    #[error("invalid presence flag: {0:#04x}")]
    InvalidPresenceFlag(u8),

    /// String bytes are not valid UTF-8
    #[error("string is not valid utf-8")]
    InvalidUtf8,

    /// Bytes left over after a complete value
    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),
}

impl DecodeError {
    /// Whether the stream simply ran out of bytes
    ///
    /// Truncated input reports either `UnexpectedEof` or `LengthOutOfBounds`,
    /// depending on where the cut falls.
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            DecodeError::UnexpectedEof { .. } | DecodeError::LengthOutOfBounds { .. }
        )
    }
}
