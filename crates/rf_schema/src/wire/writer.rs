use alloc::vec::Vec;

use crate::codec::{encode_varuint, zigzag_encode};
use crate::wire::WireTag;

/// Append-only wire encoder.
///
/// Writing never fails. Lengths and counts travel as `i32`, so text longer
/// than `i32::MAX` bytes or sequences longer than `i32::MAX` elements have
/// no valid encoding; their header saturates at `i32::MAX` and the payload
/// will not decode.
///
/// # Examples
///
/// ```
/// use rf_schema::wire::WireWriter;
///
/// let mut writer = WireWriter::new();
/// writer.write_int(300);
/// assert_eq!(writer.as_bytes(), [0x00, 0xD8, 0x04]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    #[inline]
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn write_tag(&mut self, tag: WireTag) {
        self.buf.push(tag.as_byte());
    }

    /// Integer tag, then the zigzag-mapped value as a varuint.
    pub fn write_int(&mut self, value: i32) {
        self.write_tag(WireTag::Integer);
        encode_varuint(zigzag_encode(value), &mut self.buf);
    }

    /// Boolean tag, then `0x01` or `0x00`.
    pub fn write_bool(&mut self, value: bool) {
        self.write_tag(WireTag::Boolean);
        self.buf.push(value as u8);
    }

    /// Text tag, the byte length as an Integer value, then the raw bytes.
    ///
    /// `value` must be at most `i32::MAX` bytes long.
    pub fn write_text(&mut self, value: &str) {
        self.write_tag(WireTag::Text);
        self.write_len(value.len());
        self.buf.extend_from_slice(value.as_bytes());
    }

    /// Object tag and field count. The caller writes `count` name/value pairs.
    pub fn begin_object(&mut self, count: usize) {
        self.write_tag(WireTag::Object);
        self.write_len(count);
    }

    /// Array tag and element count. The caller writes `count` values.
    ///
    /// `count` must be at most `i32::MAX`.
    pub fn begin_array(&mut self, count: usize) {
        self.write_tag(WireTag::Array);
        self.write_len(count);
    }

    // Lengths travel as Integer values and saturate at `i32::MAX`.
    #[inline]
    fn write_len(&mut self, len: usize) {
        debug_assert!(len <= i32::MAX as usize, "wire length {len} exceeds i32::MAX");
        self.write_int(saturate_len(len));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

#[inline]
fn saturate_len(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{WireWriter, saturate_len};

    #[test]
    fn scalars() {
        let mut writer = WireWriter::new();
        writer.write_int(-1);
        writer.write_bool(true);
        writer.write_text("ab");
        assert_eq!(
            writer.into_bytes(),
            [0x00, 0x01, 0x01, 0x01, 0x02, 0x00, 0x04, b'a', b'b']
        );
    }

    #[test]
    fn headers() {
        let mut writer = WireWriter::new();
        writer.begin_object(2);
        writer.begin_array(0);
        assert_eq!(writer.as_bytes(), [0x03, 0x00, 0x04, 0x04, 0x00, 0x00]);
    }

    #[test]
    fn text_keeps_embedded_nul() {
        let mut writer = WireWriter::new();
        writer.write_text("a\0b");
        assert_eq!(writer.as_bytes(), [0x02, 0x00, 0x06, b'a', 0x00, b'b']);
    }

    #[test]
    fn length_saturates() {
        assert_eq!(saturate_len(5), 5);
        assert_eq!(saturate_len(i32::MAX as usize), i32::MAX);
        assert_eq!(saturate_len(usize::MAX), i32::MAX);
    }
}
