use alloc::collections::BTreeMap;
use alloc::collections::btree_map;
use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

use crate::info::FieldDescriptor;

/// The registered fields of a schema type.
///
/// Fields are kept in registration order, which is the order encoded
/// documents list them in. A name index gives the ascending byte-wise name
/// order used by document decoding and by the wire format.
pub struct TypeDescriptor<C> {
    type_name: &'static str,
    fields: Vec<FieldDescriptor<C>>,
    by_name: BTreeMap<&'static str, usize>,
}

impl<C> TypeDescriptor<C> {
    pub(crate) fn new(
        type_name: &'static str,
        fields: Vec<FieldDescriptor<C>>,
        by_name: BTreeMap<&'static str, usize>,
    ) -> Self {
        debug_assert_eq!(fields.len(), by_name.len());
        Self {
            type_name,
            fields,
            by_name,
        }
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Look a field up by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor<C>> {
        self.by_name.get(name).map(|&index| &self.fields[index])
    }

    /// The field registered at `index`.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&FieldDescriptor<C>> {
        self.fields.get(index)
    }

    /// Fields in registration order.
    #[inline]
    pub fn fields(&self) -> &[FieldDescriptor<C>] {
        &self.fields
    }

    /// Fields in ascending name order.
    #[inline]
    pub fn fields_by_name(&self) -> FieldsByName<'_, C> {
        FieldsByName {
            fields: &self.fields,
            order: self.by_name.values(),
        }
    }

    /// Field names in registration order.
    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.fields.iter().map(FieldDescriptor::name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<C> fmt::Debug for TypeDescriptor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("type_name", &self.type_name)
            .field("fields", &self.fields)
            .finish()
    }
}

/// Iterator over a type's fields in ascending name order.
pub struct FieldsByName<'a, C> {
    fields: &'a [FieldDescriptor<C>],
    order: btree_map::Values<'a, &'static str, usize>,
}

impl<'a, C> Iterator for FieldsByName<'a, C> {
    type Item = &'a FieldDescriptor<C>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.order.next().map(|&index| &self.fields[index])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<C> DoubleEndedIterator for FieldsByName<'_, C> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.order.next_back().map(|&index| &self.fields[index])
    }
}

impl<C> ExactSizeIterator for FieldsByName<'_, C> {}

impl<C> FusedIterator for FieldsByName<'_, C> {}
