use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::access::{Accessor, DefaultField, FieldAdapter, ValueField};
use crate::impls::{ScalarValue, Value};
use crate::info::{FieldDescriptor, FieldKind, TypeDescriptor};
use crate::registry::Schema;

/// Collects the fields of `C` during [`Schema::register`].
///
/// Registering a name twice keeps the first registration and logs a
/// warning.
pub struct SchemaBuilder<C> {
    type_name: &'static str,
    fields: Vec<FieldDescriptor<C>>,
    by_name: BTreeMap<&'static str, usize>,
}

impl<C: 'static> SchemaBuilder<C> {
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            fields: Vec::new(),
            by_name: BTreeMap::new(),
        }
    }

    /// Register a field without a default.
    ///
    /// A document that lacks this member fails to decode.
    pub fn field<T: Value>(&mut self, name: &'static str, accessor: Accessor<C, T>) -> &mut Self {
        self.push(name, T::field_kind(), Box::new(ValueField::new(accessor)))
    }

    /// Register a scalar field with a default used when a document lacks
    /// the member.
    pub fn field_with_default<T: ScalarValue>(
        &mut self,
        name: &'static str,
        accessor: Accessor<C, T>,
        default: impl Into<T>,
    ) -> &mut Self {
        self.push(
            name,
            T::field_kind(),
            Box::new(DefaultField::new(accessor, default.into())),
        )
    }

    fn push(
        &mut self,
        name: &'static str,
        kind: FieldKind,
        adapter: Box<dyn FieldAdapter<C>>,
    ) -> &mut Self {
        if self.by_name.contains_key(name) {
            log::warn!(
                "field `{name}` of `{}` is already registered; ignoring the new registration",
                self.type_name
            );
            return self;
        }

        self.by_name.insert(name, self.fields.len());
        self.fields.push(FieldDescriptor::new(name, kind, adapter));
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn finish(self) -> TypeDescriptor<C> {
        TypeDescriptor::new(self.type_name, self.fields, self.by_name)
    }
}

impl<C: Schema> SchemaBuilder<C> {
    /// Run `C`'s registration routine on a fresh builder.
    pub fn build() -> TypeDescriptor<C> {
        let mut builder = Self::new(C::type_name());
        C::register(&mut builder);
        builder.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::SchemaBuilder;
    use crate::accessor;
    use crate::info::FieldKind;

    #[derive(Default)]
    struct Sample {
        zeta: i32,
        alpha: Vec<bool>,
        mid: String,
    }

    #[test]
    fn orders() {
        let mut builder = SchemaBuilder::<Sample>::new("Sample");
        builder
            .field("zeta", accessor!(Sample, zeta))
            .field("alpha", accessor!(Sample, alpha))
            .field_with_default("mid", accessor!(Sample, mid), "m");
        let descriptor = builder.finish();

        assert_eq!(descriptor.type_name(), "Sample");
        assert_eq!(
            descriptor.field_names().collect::<Vec<_>>(),
            ["zeta", "alpha", "mid"]
        );
        assert_eq!(
            descriptor
                .fields_by_name()
                .map(|field| field.name())
                .collect::<Vec<_>>(),
            ["alpha", "mid", "zeta"]
        );

        let alpha = descriptor.field("alpha").unwrap();
        assert_eq!(alpha.kind(), &FieldKind::Sequence(Box::new(FieldKind::Boolean)));
        assert!(!alpha.has_default());
        assert!(descriptor.field("mid").unwrap().has_default());
        assert!(descriptor.field("missing").is_none());
    }

    #[test]
    fn duplicate_name_keeps_first() {
        let mut builder = SchemaBuilder::<Sample>::new("Sample");
        builder
            .field("zeta", accessor!(Sample, zeta))
            .field_with_default("zeta", accessor!(Sample, zeta), 9);
        assert_eq!(builder.len(), 1);

        let descriptor = builder.finish();
        let zeta = descriptor.field("zeta").unwrap();
        assert!(!zeta.has_default());

        let mut sample = Sample::default();
        assert!(!zeta.apply_default(&mut sample));
        assert_eq!(sample.zeta, 0);
    }
}
