use crate::DecodeError;
use crate::document::Document;
use crate::impls::{Value, sealed};
use crate::info::FieldKind;
use crate::ops;
use crate::registry::Schema;
use crate::wire::{WireReader, WireWriter};

impl<T: Schema> sealed::Sealed for T {}

impl<T: Schema> Value for T {
    #[inline]
    fn field_kind() -> FieldKind {
        FieldKind::Composite(T::type_name())
    }

    #[inline]
    fn decode_document(&mut self, node: &Document) -> Result<(), DecodeError> {
        ops::decode_document(self, node)
    }

    #[inline]
    fn encode_document(&self) -> Document {
        ops::encode_document(self)
    }

    #[inline]
    fn decode_wire(&mut self, reader: &mut WireReader<'_>) -> Result<(), DecodeError> {
        ops::decode_wire(self, reader)
    }

    #[inline]
    fn encode_wire(&self, writer: &mut WireWriter) {
        ops::encode_wire(self, writer);
    }
}
