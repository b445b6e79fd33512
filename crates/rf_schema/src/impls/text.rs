use alloc::string::String;

use crate::document::Document;
use crate::impls::{ScalarValue, Value, sealed};
use crate::info::FieldKind;
use crate::wire::{WireReader, WireWriter};
use crate::{DecodeError, NodeKind};

impl sealed::Sealed for String {}

impl Value for String {
    #[inline]
    fn field_kind() -> FieldKind {
        FieldKind::Text
    }

    fn decode_document(&mut self, node: &Document) -> Result<(), DecodeError> {
        match node {
            Document::String(value) => {
                value.clone_into(self);
                Ok(())
            }
            other => Err(DecodeError::unexpected_node(NodeKind::String, other)),
        }
    }

    #[inline]
    fn encode_document(&self) -> Document {
        Document::String(self.clone())
    }

    #[inline]
    fn decode_wire(&mut self, reader: &mut WireReader<'_>) -> Result<(), DecodeError> {
        *self = reader.read_text()?;
        Ok(())
    }

    #[inline]
    fn encode_wire(&self, writer: &mut WireWriter) {
        writer.write_text(self);
    }
}

impl ScalarValue for String {}
