//! Value kinds a schema field can hold.
//!
//! | Rust type         | Document node | Wire tag |
//! |-------------------|---------------|----------|
//! | `i32`             | number        | Integer  |
//! | `bool`            | bool          | Boolean  |
//! | `String`          | string        | Text     |
//! | `T: Schema`       | object        | Object   |
//! | `Vec<T: Value>`   | array         | Array    |
//!
//! The set is closed; [`Value`] cannot be implemented outside this crate
//! except through [`Schema`](crate::Schema).

// -----------------------------------------------------------------------------
// Modules

mod boolean;
mod composite;
mod integer;
mod sequence;
mod text;

// -----------------------------------------------------------------------------
// Value

use crate::DecodeError;
use crate::document::Document;
use crate::info::FieldKind;
use crate::wire::{WireReader, WireWriter};

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A type that can be stored in a schema field.
///
/// Decoding writes into an existing value. Scalars and composites overwrite
/// it; sequences append to it.
pub trait Value: sealed::Sealed + Default + 'static {
    /// The registered kind of fields of this type.
    fn field_kind() -> FieldKind;

    /// Read `self` from a document node.
    fn decode_document(&mut self, node: &Document) -> Result<(), DecodeError>;

    /// Render `self` as a document node.
    fn encode_document(&self) -> Document;

    /// Read `self` from the wire.
    fn decode_wire(&mut self, reader: &mut WireReader<'_>) -> Result<(), DecodeError>;

    /// Append `self` to the wire.
    fn encode_wire(&self, writer: &mut WireWriter);
}

/// A value kind that may carry a registered default.
///
/// Only integer, boolean and text fields have defaults.
pub trait ScalarValue: Value + Clone + Send + Sync {}
