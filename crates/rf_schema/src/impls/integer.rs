use serde_json::Number;

use crate::document::Document;
use crate::impls::{ScalarValue, Value, sealed};
use crate::info::FieldKind;
use crate::wire::{WireReader, WireWriter};
use crate::{DecodeError, NodeKind};

impl sealed::Sealed for i32 {}

impl Value for i32 {
    #[inline]
    fn field_kind() -> FieldKind {
        FieldKind::Integer
    }

    fn decode_document(&mut self, node: &Document) -> Result<(), DecodeError> {
        match node {
            Document::Number(number) => {
                *self = number_to_i32(number);
                Ok(())
            }
            other => Err(DecodeError::unexpected_node(NodeKind::Number, other)),
        }
    }

    #[inline]
    fn encode_document(&self) -> Document {
        Document::from(*self)
    }

    #[inline]
    fn decode_wire(&mut self, reader: &mut WireReader<'_>) -> Result<(), DecodeError> {
        *self = reader.read_int()?;
        Ok(())
    }

    #[inline]
    fn encode_wire(&self, writer: &mut WireWriter) {
        writer.write_int(*self);
    }
}

impl ScalarValue for i32 {}

/// Out-of-range integers saturate, fractions truncate toward zero.
fn number_to_i32(number: &Number) -> i32 {
    if let Some(value) = number.as_i64() {
        value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    } else if number.is_u64() {
        i32::MAX
    } else {
        // `as` saturates and maps NaN to zero.
        number.as_f64().map_or(0, |value| value as i32)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::wire::{WireReader, WireWriter};
    use crate::{DecodeError, NodeKind, Value};

    #[test]
    fn document_numbers() {
        let mut value = 0_i32;
        value.decode_document(&json!(-17)).unwrap();
        assert_eq!(value, -17);

        value.decode_document(&json!(3.9)).unwrap();
        assert_eq!(value, 3);

        value.decode_document(&json!(-3.9)).unwrap();
        assert_eq!(value, -3);

        value.decode_document(&json!(1_u64 << 40)).unwrap();
        assert_eq!(value, i32::MAX);

        value.decode_document(&json!(-(1_i64 << 40))).unwrap();
        assert_eq!(value, i32::MIN);

        value.decode_document(&json!(u64::MAX)).unwrap();
        assert_eq!(value, i32::MAX);
    }

    #[test]
    fn document_mismatch() {
        let mut value = 5_i32;
        assert_eq!(
            value.decode_document(&json!("5")),
            Err(DecodeError::UnexpectedNode {
                expected: NodeKind::Number,
                found: NodeKind::String,
            })
        );
        assert_eq!(value, 5);
    }

    #[test]
    fn wire_extremes() {
        for value in [0, 1, -1, 300, i32::MAX, i32::MIN] {
            let mut writer = WireWriter::new();
            value.encode_wire(&mut writer);
            let bytes = writer.into_bytes();

            let mut decoded = 0_i32;
            decoded.decode_wire(&mut WireReader::new(&bytes)).unwrap();
            assert_eq!(decoded, value);
        }
    }
}
