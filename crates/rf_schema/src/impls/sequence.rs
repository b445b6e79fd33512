use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::document::Document;
use crate::impls::{Value, sealed};
use crate::info::FieldKind;
use crate::wire::{WireReader, WireWriter};
use crate::{DecodeError, NodeKind};

impl<T: Value> sealed::Sealed for Vec<T> {}

/// Decoding appends; existing elements are kept.
///
/// Each element is decoded into a fresh `T::default()` and pushed once it
/// decoded successfully.
impl<T: Value> Value for Vec<T> {
    #[inline]
    fn field_kind() -> FieldKind {
        FieldKind::Sequence(Box::new(T::field_kind()))
    }

    fn decode_document(&mut self, node: &Document) -> Result<(), DecodeError> {
        let Document::Array(items) = node else {
            return Err(DecodeError::unexpected_node(NodeKind::Array, node));
        };

        self.reserve(items.len());
        for item in items {
            let mut element = T::default();
            element.decode_document(item)?;
            self.push(element);
        }
        Ok(())
    }

    fn encode_document(&self) -> Document {
        Document::Array(self.iter().map(T::encode_document).collect())
    }

    fn decode_wire(&mut self, reader: &mut WireReader<'_>) -> Result<(), DecodeError> {
        let count = reader.begin_array()?;

        // Every element takes at least two bytes.
        self.reserve(count.min(reader.remaining() / 2));
        for _ in 0..count {
            let mut element = T::default();
            element.decode_wire(reader)?;
            self.push(element);
        }
        Ok(())
    }

    fn encode_wire(&self, writer: &mut WireWriter) {
        writer.begin_array(self.len());
        for element in self {
            element.encode_wire(writer);
        }
    }
}
