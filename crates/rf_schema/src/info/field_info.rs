use alloc::boxed::Box;
use core::fmt;

use crate::DecodeError;
use crate::access::FieldAdapter;
use crate::document::Document;
use crate::info::FieldKind;
use crate::wire::{WireReader, WireWriter};

/// One registered field of `C`: its name, kind and adapter.
pub struct FieldDescriptor<C> {
    name: &'static str,
    kind: FieldKind,
    adapter: Box<dyn FieldAdapter<C>>,
}

impl<C> FieldDescriptor<C> {
    pub fn new(name: &'static str, kind: FieldKind, adapter: Box<dyn FieldAdapter<C>>) -> Self {
        Self {
            name,
            kind,
            adapter,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    #[inline]
    pub fn has_default(&self) -> bool {
        self.adapter.default_document().is_some()
    }

    /// The default rendered as a document node.
    #[inline]
    pub fn default_document(&self) -> Option<Document> {
        self.adapter.default_document()
    }

    #[inline]
    pub fn adapter(&self) -> &dyn FieldAdapter<C> {
        &*self.adapter
    }

    #[inline]
    pub fn read_document(&self, instance: &mut C, node: &Document) -> Result<(), DecodeError> {
        self.adapter.read_document(instance, node)
    }

    #[inline]
    pub fn write_document(&self, instance: &C) -> Document {
        self.adapter.write_document(instance)
    }

    #[inline]
    pub fn read_wire(&self, instance: &mut C, reader: &mut WireReader<'_>) -> Result<(), DecodeError> {
        self.adapter.read_wire(instance, reader)
    }

    #[inline]
    pub fn write_wire(&self, instance: &C, writer: &mut WireWriter) {
        self.adapter.write_wire(instance, writer);
    }

    #[inline]
    pub fn apply_default(&self, instance: &mut C) -> bool {
        self.adapter.apply_default(instance)
    }
}

impl<C> fmt::Debug for FieldDescriptor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("default", &self.default_document())
            .finish()
    }
}
