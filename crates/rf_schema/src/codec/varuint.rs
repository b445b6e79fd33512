use alloc::vec::Vec;

use thiserror::Error;

/// Maximum bytes needed to encode a `u32`.
pub const MAX_VARUINT_LEN: usize = 5;

const CONTINUATION_BIT: u8 = 0x80;
const DATA_MASK: u8 = 0x7F;

/// Error returned when varuint decoding fails.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum VarintError {
    /// The buffer ended while the continuation bit was still set.
    #[error("unexpected end of buffer while reading varuint")]
    UnexpectedEof,
    /// The value does not fit in 32 bits.
    #[error("varuint overflows 32 bits")]
    Overflow,
}

/// Append `value` to `buf` as a varuint.
///
/// Zero is a single `0x00` byte.
///
/// ```text
/// 600 = 0b100_1011000
///   byte 0: 0b1_1011000 = 0xD8  (low 7 bits, continuation)
///   byte 1: 0b0_0000100 = 0x04  (remaining bits, last byte)
/// ```
///
/// # Examples
///
/// ```
/// use rf_schema::codec::encode_varuint;
///
/// let mut buf = Vec::new();
/// encode_varuint(600, &mut buf);
/// assert_eq!(buf, [0xD8, 0x04]);
/// ```
#[inline]
pub fn encode_varuint(mut value: u32, buf: &mut Vec<u8>) {
    loop {
        let byte = (value & DATA_MASK as u32) as u8;
        value >>= 7;
        if value == 0 {
            buf.push(byte);
            return;
        }
        buf.push(byte | CONTINUATION_BIT);
    }
}

/// Number of bytes [`encode_varuint`] writes for `value`.
#[inline]
#[must_use]
pub const fn varuint_len(value: u32) -> usize {
    if value == 0 {
        return 1;
    }
    let bits = (32 - value.leading_zeros()) as usize;
    bits.div_ceil(7)
}

/// Decode a varuint from the front of `buf`.
///
/// Returns the value and the number of bytes consumed.
///
/// # Errors
///
/// - [`VarintError::UnexpectedEof`] if `buf` ends before a byte without the
///   continuation bit.
/// - [`VarintError::Overflow`] if the groups carry bits past bit 31.
///
/// # Examples
///
/// ```
/// use rf_schema::codec::{VarintError, decode_varuint};
///
/// assert_eq!(decode_varuint(&[0xD8, 0x04, 0xFF]), Ok((600, 2)));
/// assert_eq!(decode_varuint(&[0xD8]), Err(VarintError::UnexpectedEof));
/// ```
pub fn decode_varuint(buf: &[u8]) -> Result<(u32, usize), VarintError> {
    let mut result: u32 = 0;

    for (i, &byte) in buf.iter().enumerate() {
        if i >= MAX_VARUINT_LEN {
            return Err(VarintError::Overflow);
        }

        let data = (byte & DATA_MASK) as u32;
        // The 5th group sits at bit 28, only its low 4 bits fit.
        if i == MAX_VARUINT_LEN - 1 && data > 0x0F {
            return Err(VarintError::Overflow);
        }
        result |= data << (7 * i);

        if byte & CONTINUATION_BIT == 0 {
            return Ok((result, i + 1));
        }
    }

    Err(VarintError::UnexpectedEof)
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{VarintError, decode_varuint, encode_varuint, varuint_len};

    fn encoded(value: u32) -> Vec<u8> {
        let mut buf = Vec::new();
        encode_varuint(value, &mut buf);
        buf
    }

    #[test]
    fn known_vectors() {
        assert_eq!(encoded(0), [0x00]);
        assert_eq!(encoded(1), [0x01]);
        assert_eq!(encoded(127), [0x7F]);
        assert_eq!(encoded(128), [0x80, 0x01]);
        assert_eq!(encoded(600), [0xD8, 0x04]);
        assert_eq!(encoded(u32::MAX), [0xFF, 0xFF, 0xFF, 0xFF, 0x0F]);
    }

    #[test]
    fn round_trip_consumes_exactly() {
        let mut samples: Vec<u32> = (0..=300).collect();
        samples.extend([16_383, 16_384, 2_097_151, 2_097_152, 268_435_455, 268_435_456]);
        samples.extend([u32::MAX - 1, u32::MAX]);
        let mut value: u32 = 1;
        while let Some(next) = value.checked_mul(3) {
            samples.push(next);
            value = next;
        }

        for value in samples {
            let mut buf = encoded(value);
            assert_eq!(buf.len(), varuint_len(value));
            let produced = buf.len();
            buf.extend([0xAA, 0x01]);
            assert_eq!(decode_varuint(&buf), Ok((value, produced)), "value {value}");
        }
    }

    #[test]
    fn unterminated_chain() {
        assert_eq!(decode_varuint(&[]), Err(VarintError::UnexpectedEof));
        assert_eq!(decode_varuint(&[0x80, 0x80]), Err(VarintError::UnexpectedEof));
    }

    #[test]
    fn overflow() {
        assert_eq!(
            decode_varuint(&[0xFF, 0xFF, 0xFF, 0xFF, 0x1F]),
            Err(VarintError::Overflow)
        );
        assert_eq!(
            decode_varuint(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x00]),
            Err(VarintError::Overflow)
        );
    }
}
