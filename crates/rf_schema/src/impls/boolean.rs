use crate::document::Document;
use crate::impls::{ScalarValue, Value, sealed};
use crate::info::FieldKind;
use crate::wire::{WireReader, WireWriter};
use crate::{DecodeError, NodeKind};

impl sealed::Sealed for bool {}

impl Value for bool {
    #[inline]
    fn field_kind() -> FieldKind {
        FieldKind::Boolean
    }

    fn decode_document(&mut self, node: &Document) -> Result<(), DecodeError> {
        match node {
            Document::Bool(value) => {
                *self = *value;
                Ok(())
            }
            other => Err(DecodeError::unexpected_node(NodeKind::Bool, other)),
        }
    }

    #[inline]
    fn encode_document(&self) -> Document {
        Document::Bool(*self)
    }

    #[inline]
    fn decode_wire(&mut self, reader: &mut WireReader<'_>) -> Result<(), DecodeError> {
        *self = reader.read_bool()?;
        Ok(())
    }

    #[inline]
    fn encode_wire(&self, writer: &mut WireWriter) {
        writer.write_bool(*self);
    }
}

impl ScalarValue for bool {}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::wire::{WireReader, WireWriter};
    use crate::{DecodeError, ErrorKind, Value};

    #[test]
    fn document() {
        let mut value = false;
        value.decode_document(&json!(true)).unwrap();
        assert!(value);
        assert_eq!(value.encode_document(), json!(true));

        let err = value.decode_document(&json!(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KindMismatch);
    }

    #[test]
    fn wire() {
        let mut writer = WireWriter::new();
        true.encode_wire(&mut writer);
        assert_eq!(writer.as_bytes(), [0x01, 0x01]);

        let mut value = true;
        value
            .decode_wire(&mut WireReader::new(&[0x01, 0x00]))
            .unwrap();
        assert!(!value);

        let mut value = false;
        assert!(matches!(
            value.decode_wire(&mut WireReader::new(&[0x00, 0x02])),
            Err(DecodeError::UnexpectedTag { found: 0x00, .. })
        ));
    }
}
