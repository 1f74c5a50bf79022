//! Binary wire encoding for commit snapshots
//!
//! Compact, versionless, deterministic encoding built from four field kinds:
//!
//! | Field | Encoding |
//! |-------|----------|
//! | VInt | 7 bits per byte, low group first, high bit = continuation |
//! | Int64 | 8 bytes, big endian |
//! | String | VInt byte length + UTF-8 bytes |
//! | OptionalString | presence byte (0/1) + String if present |
//!
//! A snapshot is `VInt(count) (String OptionalString)* Int64(generation)`;
//! an optional snapshot is a presence byte followed by a snapshot if present.
//!
//! Decoding fails closed: any truncation, out-of-range length, bad presence
//! byte or invalid UTF-8 yields a [`DecodeError`] and no value.

mod codec;
mod error;
mod stream;
mod varint;

pub use codec::{
    decode_optional_snapshot, decode_snapshot, encode_optional_snapshot, encode_snapshot,
    read_optional_snapshot, read_snapshot, Decodable, Encodable,
};
pub use error::DecodeError;
pub use stream::{StreamInput, StreamOutput};
pub use varint::{decode_vint, encode_vint, vint_len, MAX_VINT_LEN};
