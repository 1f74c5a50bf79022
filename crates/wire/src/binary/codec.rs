//! Encodable / Decodable capabilities and the commit snapshot layout
//!
//! ```text
//! CommitSnapshot   := VInt(entryCount) entry* Int64(generation)
//! entry            := String(key) OptionalString(value)
//! OptionalSnapshot := Byte(present) [CommitSnapshot]
//! ```

use super::error::DecodeError;
use super::stream::{StreamInput, StreamOutput};
use commit_stats_core::{CommitSnapshot, UserDataBuilder};
use tracing::{debug, trace};

/// A value that can write itself to the binary format
pub trait Encodable {
    /// Append this value's fields to `out`
    fn write_to(&self, out: &mut StreamOutput);
}

/// A value that can be read back from the binary format
pub trait Decodable: Sized {
    /// Read one value starting at the current position of `input`
    fn read_from(input: &mut StreamInput<'_>) -> Result<Self, DecodeError>;
}

impl Encodable for CommitSnapshot {
    fn write_to(&self, out: &mut StreamOutput) {
        let user_data = self.user_data();
        let count =
            u32::try_from(user_data.len()).expect("user data entry count exceeds u32::MAX");
        out.write_vint(count);
        // One traversal: the count above and the entries below come from the
        // same frozen order.
        for (key, value) in user_data.iter() {
            out.write_string(key);
            out.write_optional_string(value);
        }
        out.write_i64(self.generation());
    }
}

impl Decodable for CommitSnapshot {
    fn read_from(input: &mut StreamInput<'_>) -> Result<Self, DecodeError> {
        let count = input.read_vint()?;
        // Each entry takes at least two bytes, so cap the preallocation by
        // what the input could possibly hold.
        let capacity = (count as usize).min(input.remaining() / 2);
        let mut builder = UserDataBuilder::with_capacity(capacity);
        for _ in 0..count {
            let key = input.read_string()?;
            let value = input.read_optional_string()?;
            builder.insert(key, value);
        }
        let generation = input.read_i64()?;
        Ok(CommitSnapshot::new(builder.build(), generation))
    }
}

impl<T: Encodable> Encodable for Option<T> {
    fn write_to(&self, out: &mut StreamOutput) {
        out.write_presence(self.is_some());
        if let Some(value) = self {
            value.write_to(out);
        }
    }
}

impl<T: Decodable> Decodable for Option<T> {
    fn read_from(input: &mut StreamInput<'_>) -> Result<Self, DecodeError> {
        if input.read_presence()? {
            T::read_from(input).map(Some)
        } else {
            trace!(position = input.position(), "Decoded absent value");
            Ok(None)
        }
    }
}

/// Encode a snapshot to bytes
///
/// Deterministic: the same snapshot always yields the same bytes.
pub fn encode_snapshot(snapshot: &CommitSnapshot) -> Vec<u8> {
    let mut out = StreamOutput::new();
    snapshot.write_to(&mut out);
    trace!(bytes = out.len(), "Encoded commit snapshot");
    out.into_bytes()
}

/// Encode an optional snapshot: presence byte, then the snapshot if any
pub fn encode_optional_snapshot(snapshot: Option<&CommitSnapshot>) -> Vec<u8> {
    let mut out = StreamOutput::new();
    out.write_presence(snapshot.is_some());
    if let Some(snapshot) = snapshot {
        snapshot.write_to(&mut out);
    }
    trace!(bytes = out.len(), "Encoded optional commit snapshot");
    out.into_bytes()
}

/// Read a snapshot at the current position, leaving the rest of the input
pub fn read_snapshot(input: &mut StreamInput<'_>) -> Result<CommitSnapshot, DecodeError> {
    CommitSnapshot::read_from(input).map_err(|e| log_failure(e, input))
}

/// Read an optional snapshot at the current position, leaving the rest of
/// the input
pub fn read_optional_snapshot(
    input: &mut StreamInput<'_>,
) -> Result<Option<CommitSnapshot>, DecodeError> {
    Option::<CommitSnapshot>::read_from(input).map_err(|e| log_failure(e, input))
}

/// Decode a snapshot that must span all of `bytes`
pub fn decode_snapshot(bytes: &[u8]) -> Result<CommitSnapshot, DecodeError> {
    let mut input = StreamInput::new(bytes);
    let snapshot = read_snapshot(&mut input)?;
    input.finish().map_err(|e| log_failure(e, &input))?;
    Ok(snapshot)
}

/// Decode an optional snapshot that must span all of `bytes`
pub fn decode_optional_snapshot(bytes: &[u8]) -> Result<Option<CommitSnapshot>, DecodeError> {
    let mut input = StreamInput::new(bytes);
    let snapshot = read_optional_snapshot(&mut input)?;
    input.finish().map_err(|e| log_failure(e, &input))?;
    Ok(snapshot)
}

fn log_failure(error: DecodeError, input: &StreamInput<'_>) -> DecodeError {
    debug!(
        %error,
        position = input.position(),
        remaining = input.remaining(),
        "Malformed commit snapshot stream"
    );
    error
}
