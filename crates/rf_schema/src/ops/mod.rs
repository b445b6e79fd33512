//! Whole-object encode and decode driven by a type's descriptor.
//!
//! These back the provided methods of [`Schema`](crate::Schema) and the
//! [`Value`](crate::Value) impl of every schema type.

// -----------------------------------------------------------------------------
// Modules

mod document;
mod wire;

// -----------------------------------------------------------------------------
// Exports

pub use document::{decode_document, encode_document};
pub use wire::{decode_wire, encode_wire};

/// How deep objects may nest inside one decode call, the root included.
///
/// Deeper input fails with [`DecodeError::DepthExceeded`](crate::DecodeError::DepthExceeded)
/// instead of exhausting the stack on self-referencing schemas.
pub const MAX_DEPTH: usize = 128;
