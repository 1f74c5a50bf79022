//! Variable-length unsigned integers (VInt)
//!
//! 7 payload bits per byte, least significant group first, high bit set on
//! every byte except the last. A 32-bit value takes at most 5 bytes.

use super::error::DecodeError;

/// Longest valid encoding of a `u32`
pub const MAX_VINT_LEN: usize = 5;

/// Append `value` to `buf` using the minimum number of bytes
pub fn encode_vint(mut value: u32, buf: &mut Vec<u8>) {
    loop {
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;
        if value != 0 {
            byte |= 0x80;
        }
        buf.push(byte);
        if value == 0 {
            break;
        }
    }
}

/// Number of bytes [`encode_vint`] writes for `value`
pub fn vint_len(value: u32) -> usize {
    match value {
        0..=0x7F => 1,
        0x80..=0x3FFF => 2,
        0x4000..=0x1F_FFFF => 3,
        0x20_0000..=0xFFF_FFFF => 4,
        _ => 5,
    }
}

/// Decode a VInt from `buf` starting at `*pos`
///
/// Advances `*pos` past the consumed bytes. Fails on exhaustion and on
/// encodings that carry more than 32 bits.
pub fn decode_vint(buf: &[u8], pos: &mut usize) -> Result<u32, DecodeError> {
    let mut result: u32 = 0;
    for i in 0..MAX_VINT_LEN {
        let Some(&byte) = buf.get(*pos) else {
            return Err(DecodeError::UnexpectedEof {
                needed: 1,
                remaining: 0,
            });
        };
        *pos += 1;

        let payload = (byte & 0x7F) as u32;
        // The fifth byte may only contribute the top 4 bits
        if i == MAX_VINT_LEN - 1 && payload > 0x0F {
            return Err(DecodeError::VIntOverflow);
        }
        result |= payload << (7 * i);
        if byte & 0x80 == 0 {
            return Ok(result);
        }
    }
    Err(DecodeError::VIntOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(val: u32) {
        let mut buf = Vec::new();
        encode_vint(val, &mut buf);
        assert_eq!(buf.len(), vint_len(val));
        let mut pos = 0;
        assert_eq!(decode_vint(&buf, &mut pos).unwrap(), val);
        assert_eq!(pos, buf.len());
    }

    #[test]
    fn test_vint_zero_is_single_byte() {
        let mut buf = Vec::new();
        encode_vint(0, &mut buf);
        assert_eq!(buf, vec![0x00]);
    }

    #[test]
    fn test_vint_boundaries() {
        let mut buf = Vec::new();
        encode_vint(127, &mut buf);
        assert_eq!(buf, vec![0x7F]);

        buf.clear();
        encode_vint(128, &mut buf);
        assert_eq!(buf, vec![0x80, 0x01]);

        buf.clear();
        encode_vint(300, &mut buf);
        assert_eq!(buf, vec![0xAC, 0x02]);

        buf.clear();
        encode_vint(u32::MAX, &mut buf);
        assert_eq!(buf, vec![0xFF, 0xFF, 0xFF, 0xFF, 0x0F]);
    }

    #[test]
    fn test_vint_various() {
        for val in [1, 255, 256, 16_383, 16_384, 2_097_151, 2_097_152, 1 << 28, u32::MAX] {
            round_trip(val);
        }
    }

    #[test]
    fn test_vint_multiple_in_buffer() {
        let mut buf = Vec::new();
        encode_vint(100, &mut buf);
        encode_vint(200, &mut buf);
        encode_vint(70_000, &mut buf);

        let mut pos = 0;
        assert_eq!(decode_vint(&buf, &mut pos).unwrap(), 100);
        assert_eq!(decode_vint(&buf, &mut pos).unwrap(), 200);
        assert_eq!(decode_vint(&buf, &mut pos).unwrap(), 70_000);
        assert_eq!(pos, buf.len());
    }

    #[test]
    fn test_vint_unexpected_eof() {
        let mut pos = 0;
        assert!(matches!(
            decode_vint(&[], &mut pos),
            Err(DecodeError::UnexpectedEof { .. })
        ));

        // Continuation bit set on the last available byte
        let mut pos = 0;
        assert!(matches!(
            decode_vint(&[0x80, 0x80], &mut pos),
            Err(DecodeError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_vint_overflow() {
        let mut pos = 0;
        assert_eq!(
            decode_vint(&[0xFF, 0xFF, 0xFF, 0xFF, 0x1F], &mut pos),
            Err(DecodeError::VIntOverflow)
        );

        let mut pos = 0;
        assert_eq!(
            decode_vint(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x01], &mut pos),
            Err(DecodeError::VIntOverflow)
        );
    }
}
