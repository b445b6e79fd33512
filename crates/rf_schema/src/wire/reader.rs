use alloc::string::String;
use alloc::vec::Vec;

use crate::DecodeError;
use crate::codec::{VarintError, decode_varuint, zigzag_decode};
use crate::ops::MAX_DEPTH;
use crate::wire::WireTag;

/// Sequential wire decoder over a borrowed buffer.
///
/// The cursor only moves forward. A failed read may already have consumed
/// bytes; callers abandon the reader on error instead of retrying.
///
/// Objects may nest at most [`MAX_DEPTH`] levels deep. Every
/// [`begin_object`](Self::begin_object) is paired with an
/// [`end_object`](Self::end_object) once the object's pairs are read.
///
/// # Examples
///
/// ```
/// use rf_schema::wire::WireReader;
///
/// let mut reader = WireReader::new(&[0x00, 0xD8, 0x04]);
/// assert_eq!(reader.read_int(), Ok(300));
/// assert!(reader.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
}

impl<'a> WireReader<'a> {
    #[inline]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: 0,
            depth: 0,
        }
    }

    /// Offset of the next unread byte.
    #[inline]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Number of unread bytes.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Consume exactly `len` bytes.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let remaining = self.remaining();
        if remaining < len {
            return Err(DecodeError::Truncated {
                offset: self.pos,
                needed: len - remaining,
            });
        }
        let slice = &self.bytes[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    /// Consume one tag byte and check it against `expected`.
    pub fn expect_tag(&mut self, expected: WireTag) -> Result<(), DecodeError> {
        let offset = self.pos;
        let found = self.take(1)?[0];
        if found == expected.as_byte() {
            Ok(())
        } else {
            Err(DecodeError::UnexpectedTag {
                expected,
                found,
                offset,
            })
        }
    }

    /// Returns the next tag without consuming it.
    pub fn peek_tag(&self) -> Option<WireTag> {
        self.bytes.get(self.pos).copied().and_then(WireTag::from_byte)
    }

    fn read_varuint(&mut self) -> Result<u32, DecodeError> {
        let offset = self.pos;
        match decode_varuint(&self.bytes[self.pos..]) {
            Ok((value, used)) => {
                self.pos += used;
                Ok(value)
            }
            Err(VarintError::UnexpectedEof) => Err(DecodeError::Truncated { offset, needed: 1 }),
            Err(VarintError::Overflow) => Err(DecodeError::VarintOverflow { offset }),
        }
    }

    pub fn read_int(&mut self) -> Result<i32, DecodeError> {
        self.expect_tag(WireTag::Integer)?;
        Ok(zigzag_decode(self.read_varuint()?))
    }

    /// Any nonzero payload byte reads as `true`.
    pub fn read_bool(&mut self) -> Result<bool, DecodeError> {
        self.expect_tag(WireTag::Boolean)?;
        Ok(self.take(1)?[0] != 0)
    }

    pub fn read_text(&mut self) -> Result<String, DecodeError> {
        self.expect_tag(WireTag::Text)?;
        let len = self.read_len()?;
        let offset = self.pos;
        let bytes = self.take(len)?;
        String::from_utf8(Vec::from(bytes)).map_err(|_| DecodeError::InvalidText { offset })
    }

    /// Number of objects entered and not yet ended.
    #[inline]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Consume an Object tag and return its field count.
    ///
    /// Fails with [`DecodeError::DepthExceeded`] when the object would sit
    /// more than [`MAX_DEPTH`] levels deep.
    pub fn begin_object(&mut self) -> Result<usize, DecodeError> {
        let offset = self.pos;
        self.expect_tag(WireTag::Object)?;
        if self.depth == MAX_DEPTH {
            return Err(DecodeError::DepthExceeded {
                limit: MAX_DEPTH,
                offset: Some(offset),
            });
        }
        self.depth += 1;
        self.read_len()
    }

    /// Leave the object opened by the last [`begin_object`](Self::begin_object).
    #[inline]
    pub fn end_object(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Consume an Array tag and return its element count.
    pub fn begin_array(&mut self) -> Result<usize, DecodeError> {
        self.expect_tag(WireTag::Array)?;
        self.read_len()
    }

    fn read_len(&mut self) -> Result<usize, DecodeError> {
        let offset = self.pos;
        let length = self.read_int()?;
        usize::try_from(length).map_err(|_| DecodeError::InvalidLength { length, offset })
    }
}

#[cfg(test)]
mod tests {
    use super::WireReader;
    use crate::ops::MAX_DEPTH;
    use crate::wire::{WireTag, WireWriter};
    use crate::{DecodeError, ErrorKind};

    #[test]
    fn reads_what_writer_wrote() {
        let mut writer = WireWriter::new();
        writer.write_int(i32::MIN);
        writer.write_bool(false);
        writer.write_text("héllo");
        writer.begin_array(3);
        let bytes = writer.into_bytes();

        let mut reader = WireReader::new(&bytes);
        assert_eq!(reader.read_int(), Ok(i32::MIN));
        assert_eq!(reader.read_bool(), Ok(false));
        assert_eq!(reader.read_text().as_deref(), Ok("héllo"));
        assert_eq!(reader.peek_tag(), Some(WireTag::Array));
        assert_eq!(reader.begin_array(), Ok(3));
        assert!(reader.is_empty());
    }

    #[test]
    fn nonzero_bool_is_true() {
        let mut reader = WireReader::new(&[0x01, 0x7F]);
        assert_eq!(reader.read_bool(), Ok(true));
    }

    #[test]
    fn tag_mismatch() {
        let mut reader = WireReader::new(&[0x01, 0x00]);
        let err = reader.read_int().unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnexpectedTag {
                expected: WireTag::Integer,
                found: 0x01,
                offset: 0,
            }
        );
        assert_eq!(err.kind(), ErrorKind::KindMismatch);
    }

    #[test]
    fn truncation() {
        assert_eq!(
            WireReader::new(&[]).read_int(),
            Err(DecodeError::Truncated { offset: 0, needed: 1 })
        );
        // varuint never terminates
        assert_eq!(
            WireReader::new(&[0x00, 0x80, 0x80]).read_int(),
            Err(DecodeError::Truncated { offset: 1, needed: 1 })
        );
        // text shorter than its declared length
        assert_eq!(
            WireReader::new(&[0x02, 0x00, 0x0A, b'a']).read_text(),
            Err(DecodeError::Truncated { offset: 3, needed: 4 })
        );
        assert_eq!(
            WireReader::new(&[0x01]).read_bool().unwrap_err().kind(),
            ErrorKind::TruncatedInput
        );
    }

    #[test]
    fn malformed() {
        // length -1
        assert_eq!(
            WireReader::new(&[0x02, 0x00, 0x01]).read_text(),
            Err(DecodeError::InvalidLength { length: -1, offset: 1 })
        );
        assert_eq!(
            WireReader::new(&[0x02, 0x00, 0x02, 0xFF]).read_text(),
            Err(DecodeError::InvalidText { offset: 3 })
        );
        assert_eq!(
            WireReader::new(&[0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F]).read_int(),
            Err(DecodeError::VarintOverflow { offset: 1 })
        );
    }

    #[test]
    fn object_depth() {
        let bytes = [0x03_u8, 0x00, 0x00].repeat(MAX_DEPTH + 1);
        let mut reader = WireReader::new(&bytes);
        for level in 1..=MAX_DEPTH {
            assert_eq!(reader.begin_object(), Ok(0));
            assert_eq!(reader.depth(), level);
        }
        let offset = reader.position();
        assert_eq!(
            reader.begin_object(),
            Err(DecodeError::DepthExceeded {
                limit: MAX_DEPTH,
                offset: Some(offset),
            })
        );

        // Siblings do not accumulate.
        let mut reader = WireReader::new(&bytes);
        for _ in 0..=MAX_DEPTH {
            assert_eq!(reader.begin_object(), Ok(0));
            reader.end_object();
        }
        assert_eq!(reader.depth(), 0);
        assert!(reader.is_empty());
    }
}
