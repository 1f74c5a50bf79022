//! Field-level readers and writers for the binary format
//!
//! [`StreamOutput`] appends fields to an owned buffer and cannot fail.
//! [`StreamInput`] reads fields from a borrowed slice, tracking its position,
//! and fails closed on any inconsistency.

use super::error::DecodeError;
use super::varint::{decode_vint, encode_vint};
use byteorder::{BigEndian, ByteOrder};

const ABSENT: u8 = 0;
const PRESENT: u8 = 1;

/// Append-only writer of wire fields
#[derive(Debug, Default)]
pub struct StreamOutput {
    buf: Vec<u8>,
}

impl StreamOutput {
    /// Create an empty output
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an output with a preallocated buffer
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Write a single raw byte
    pub fn write_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Write a presence flag
    pub fn write_presence(&mut self, present: bool) {
        self.write_byte(if present { PRESENT } else { ABSENT });
    }

    /// Write a variable-length unsigned integer
    pub fn write_vint(&mut self, value: u32) {
        encode_vint(value, &mut self.buf);
    }

    /// Write a fixed 8-byte big-endian signed integer
    pub fn write_i64(&mut self, value: i64) {
        let mut bytes = [0u8; 8];
        BigEndian::write_i64(&mut bytes, value);
        self.buf.extend_from_slice(&bytes);
    }

    /// Write a VInt byte length followed by the UTF-8 bytes
    ///
    /// # Panics
    ///
    /// Panics if the string is 4 GiB or longer, which the length prefix
    /// cannot describe.
    pub fn write_string(&mut self, value: &str) {
        let len = u32::try_from(value.len()).expect("string length exceeds u32::MAX");
        self.write_vint(len);
        self.buf.extend_from_slice(value.as_bytes());
    }

    /// Write a presence flag, then the string if present
    pub fn write_optional_string(&mut self, value: Option<&str>) {
        self.write_presence(value.is_some());
        if let Some(s) = value {
            self.write_string(s);
        }
    }

    /// Bytes written so far
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been written
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// View the written bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Take the written bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Positioned reader of wire fields
#[derive(Debug, Clone)]
pub struct StreamInput<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> StreamInput<'a> {
    /// Start reading at the beginning of `buf`
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current offset into the buffer
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Whether every byte has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Fail unless every byte has been consumed
    pub fn finish(&self) -> Result<(), DecodeError> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(DecodeError::TrailingBytes(n)),
        }
    }

    fn take(&mut self, needed: usize) -> Result<&'a [u8], DecodeError> {
        let remaining = self.remaining();
        if needed > remaining {
            return Err(DecodeError::UnexpectedEof { needed, remaining });
        }
        let bytes = &self.buf[self.pos..self.pos + needed];
        self.pos += needed;
        Ok(bytes)
    }

    /// Read a single raw byte
    pub fn read_byte(&mut self) -> Result<u8, DecodeError> {
        Ok(self.take(1)?[0])
    }

    /// Read a presence flag; only 0 and 1 are accepted
    pub fn read_presence(&mut self) -> Result<bool, DecodeError> {
        match self.read_byte()? {
            ABSENT => Ok(false),
            PRESENT => Ok(true),
            other => Err(DecodeError::InvalidPresenceFlag(other)),
        }
    }

    /// Read a variable-length unsigned integer
    pub fn read_vint(&mut self) -> Result<u32, DecodeError> {
        decode_vint(self.buf, &mut self.pos)
    }

    /// Read a fixed 8-byte big-endian signed integer
    pub fn read_i64(&mut self) -> Result<i64, DecodeError> {
        Ok(BigEndian::read_i64(self.take(8)?))
    }

    /// Read a length-prefixed UTF-8 string
    pub fn read_string(&mut self) -> Result<String, DecodeError> {
        let declared = self.read_vint()? as usize;
        let remaining = self.remaining();
        if declared > remaining {
            return Err(DecodeError::LengthOutOfBounds {
                declared,
                remaining,
            });
        }
        let bytes = self.take(declared)?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| DecodeError::InvalidUtf8)
    }

    /// Read a presence flag, then the string if present
    pub fn read_optional_string(&mut self) -> Result<Option<String>, DecodeError> {
        if self.read_presence()? {
            self.read_string().map(Some)
        } else {
            Ok(None)
        }
    }
}
