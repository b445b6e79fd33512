//! Registered metadata of schema types.
//!
//! A [`TypeDescriptor`] is built once per type by the
//! [`SchemaRegistry`](crate::registry::SchemaRegistry) and is immutable
//! afterwards.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod field_kind;
mod type_info;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::FieldDescriptor;
pub use field_kind::FieldKind;
pub use type_info::{FieldsByName, TypeDescriptor};
