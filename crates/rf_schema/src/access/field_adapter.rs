use core::fmt;

use crate::DecodeError;
use crate::access::Accessor;
use crate::document::Document;
use crate::impls::{ScalarValue, Value};
use crate::wire::{WireReader, WireWriter};

/// Encode/decode handler for one registered field of `C`.
///
/// Every field of a schema stores one boxed adapter; the concrete adapter is
/// chosen when the field is registered, so no kind dispatch happens while
/// encoding or decoding.
pub trait FieldAdapter<C>: Send + Sync {
    /// Fill the field from a document node.
    fn read_document(&self, instance: &mut C, node: &Document) -> Result<(), DecodeError>;

    /// Render the field as a document node.
    fn write_document(&self, instance: &C) -> Document;

    /// Fill the field from the wire payload under `reader`.
    fn read_wire(&self, instance: &mut C, reader: &mut WireReader<'_>) -> Result<(), DecodeError>;

    /// Append the field's wire payload.
    fn write_wire(&self, instance: &C, writer: &mut WireWriter);

    /// Store the field's default into `instance`.
    ///
    /// Returns `false` if the field has no default.
    fn apply_default(&self, _instance: &mut C) -> bool {
        false
    }

    /// The field's default as a document node, if it has one.
    fn default_document(&self) -> Option<Document> {
        None
    }
}

// -----------------------------------------------------------------------------
// ValueField

/// Adapter for a field without a default.
pub struct ValueField<C, T> {
    accessor: Accessor<C, T>,
}

impl<C, T> ValueField<C, T> {
    #[inline]
    pub const fn new(accessor: Accessor<C, T>) -> Self {
        Self { accessor }
    }
}

impl<C, T: Value> FieldAdapter<C> for ValueField<C, T> {
    #[inline]
    fn read_document(&self, instance: &mut C, node: &Document) -> Result<(), DecodeError> {
        self.accessor.get_mut(instance).decode_document(node)
    }

    #[inline]
    fn write_document(&self, instance: &C) -> Document {
        self.accessor.get(instance).encode_document()
    }

    #[inline]
    fn read_wire(&self, instance: &mut C, reader: &mut WireReader<'_>) -> Result<(), DecodeError> {
        self.accessor.get_mut(instance).decode_wire(reader)
    }

    #[inline]
    fn write_wire(&self, instance: &C, writer: &mut WireWriter) {
        self.accessor.get(instance).encode_wire(writer);
    }
}

impl<C, T> fmt::Debug for ValueField<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueField")
            .field("accessor", &self.accessor)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// DefaultField

/// Adapter for a scalar field carrying a default, used when a document
/// omits the member.
pub struct DefaultField<C, T> {
    inner: ValueField<C, T>,
    default: T,
}

impl<C, T: ScalarValue> DefaultField<C, T> {
    #[inline]
    pub const fn new(accessor: Accessor<C, T>, default: T) -> Self {
        Self {
            inner: ValueField::new(accessor),
            default,
        }
    }

    #[inline]
    pub fn default_value(&self) -> &T {
        &self.default
    }
}

impl<C, T: ScalarValue> FieldAdapter<C> for DefaultField<C, T> {
    #[inline]
    fn read_document(&self, instance: &mut C, node: &Document) -> Result<(), DecodeError> {
        self.inner.read_document(instance, node)
    }

    #[inline]
    fn write_document(&self, instance: &C) -> Document {
        self.inner.write_document(instance)
    }

    #[inline]
    fn read_wire(&self, instance: &mut C, reader: &mut WireReader<'_>) -> Result<(), DecodeError> {
        self.inner.read_wire(instance, reader)
    }

    #[inline]
    fn write_wire(&self, instance: &C, writer: &mut WireWriter) {
        self.inner.write_wire(instance, writer);
    }

    fn apply_default(&self, instance: &mut C) -> bool {
        self.default.clone_into(self.inner.accessor.get_mut(instance));
        true
    }

    fn default_document(&self) -> Option<Document> {
        Some(self.default.encode_document())
    }
}

impl<C, T: fmt::Debug> fmt::Debug for DefaultField<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultField")
            .field("accessor", &self.inner.accessor)
            .field("default", &self.default)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{DefaultField, FieldAdapter, ValueField};
    use crate::accessor;
    use crate::wire::{WireReader, WireWriter};

    #[derive(Default)]
    struct Holder {
        count: i32,
        label: String,
    }

    #[test]
    fn value_field_reads_and_writes() {
        let count = ValueField::new(accessor!(Holder, count));
        let mut holder = Holder::default();

        count.read_document(&mut holder, &json!(12)).unwrap();
        assert_eq!(holder.count, 12);
        assert_eq!(count.write_document(&holder), json!(12));
        assert!(!count.apply_default(&mut holder));
        assert_eq!(count.default_document(), None);

        let mut writer = WireWriter::new();
        count.write_wire(&holder, &mut writer);
        let bytes = writer.into_bytes();
        assert_eq!(bytes, [0x00, 0x18]);

        let mut other = Holder::default();
        count
            .read_wire(&mut other, &mut WireReader::new(&bytes))
            .unwrap();
        assert_eq!(other.count, 12);
    }

    #[test]
    fn default_field_applies_default() {
        let label = DefaultField::new(accessor!(Holder, label), String::from("none"));
        let mut holder = Holder {
            count: 0,
            label: String::from("old"),
        };

        assert!(label.apply_default(&mut holder));
        assert_eq!(holder.label, "none");
        assert_eq!(label.default_document(), Some(json!("none")));
        assert_eq!(label.default_value(), "none");
    }
}
