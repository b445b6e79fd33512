use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::document::{self, Document};
use crate::info::TypeDescriptor;
use crate::ops;
use crate::registry::{SchemaBuilder, SchemaRegistry};
use crate::wire::{WireReader, WireWriter};
use crate::{DecodeError, LoadError};

/// A struct with a registered field schema.
///
/// Implementors only provide [`register`](Schema::register); every other
/// method has a default that goes through the type's descriptor in
/// [`SchemaRegistry::global`]. The descriptor is built on first use.
///
/// Usually implemented with `#[derive(Schema)]`.
///
/// # Examples
///
/// ```
/// use rf_schema::accessor;
/// use rf_schema::registry::{Schema, SchemaBuilder};
///
/// #[derive(Default)]
/// struct Flag {
///     on: bool,
/// }
///
/// impl Schema for Flag {
///     fn register(builder: &mut SchemaBuilder<Self>) {
///         builder.field_with_default("on", accessor!(Self, on), true);
///     }
/// }
///
/// let flag = Flag::from_document(&serde_json::json!({})).unwrap();
/// assert!(flag.on);
/// ```
pub trait Schema: Default + 'static {
    /// Register every field of `Self`.
    ///
    /// Runs once per registry; it must not query the registry for `Self`.
    fn register(builder: &mut SchemaBuilder<Self>);

    /// The name reported in descriptors and field kinds.
    fn type_name() -> &'static str {
        core::any::type_name::<Self>()
    }

    /// The registered descriptor of `Self`.
    #[inline]
    fn descriptor() -> Arc<TypeDescriptor<Self>> {
        SchemaRegistry::global().get_or_build::<Self>()
    }

    /// Fill `self` from an object node.
    ///
    /// Fields are visited in ascending name order. A missing member takes
    /// the field's default, or fails with [`DecodeError::MissingField`].
    /// Members without a matching field are ignored. On error, fields
    /// decoded before the failing one keep their new values.
    #[inline]
    fn load_from_document(&mut self, node: &Document) -> Result<(), DecodeError> {
        ops::decode_document(self, node)
    }

    /// Parse `text` and fill `self` from it.
    fn load_from_document_text(&mut self, text: &str) -> Result<(), LoadError> {
        let node = document::parse(text)?;
        self.load_from_document(&node)?;
        Ok(())
    }

    /// Render `self` as an object node with members in registration order.
    #[inline]
    fn to_document(&self) -> Document {
        ops::encode_document(self)
    }

    /// Render `self` as indented document text.
    fn to_document_text(&self) -> String {
        document::to_text(&self.to_document())
    }

    /// Decode one object from `reader`, leaving the cursor after it.
    #[inline]
    fn read_wire(&mut self, reader: &mut WireReader<'_>) -> Result<(), DecodeError> {
        ops::decode_wire(self, reader)
    }

    /// Decode one object from the start of `bytes`.
    ///
    /// Bytes after the object are ignored.
    fn load_from_wire(&mut self, bytes: &[u8]) -> Result<(), DecodeError> {
        let mut reader = WireReader::new(bytes);
        self.read_wire(&mut reader)?;
        if !reader.is_empty() {
            log::trace!(
                "ignoring {} trailing byte(s) after `{}`",
                reader.remaining(),
                Self::type_name()
            );
        }
        Ok(())
    }

    /// Append `self` to `writer`.
    #[inline]
    fn write_wire(&self, writer: &mut WireWriter) {
        ops::encode_wire(self, writer);
    }

    /// Encode `self` into a new buffer.
    fn to_wire_bytes(&self) -> Vec<u8> {
        let mut writer = WireWriter::new();
        self.write_wire(&mut writer);
        writer.into_bytes()
    }

    /// Decode a new value, starting from `Self::default()`.
    fn from_document(node: &Document) -> Result<Self, DecodeError> {
        let mut value = Self::default();
        value.load_from_document(node)?;
        Ok(value)
    }

    /// Decode a new value from wire bytes, starting from `Self::default()`.
    fn from_wire(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut value = Self::default();
        value.load_from_wire(bytes)?;
        Ok(value)
    }
}
