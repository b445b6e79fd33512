//! Field access without raw offsets.
//!
//! - [`Accessor`]: a pair of function pointers reaching one field of `C`.
//! - [`FieldAdapter`]: the encode/decode handler bound to an accessor,
//!   selected once when the field is registered.
//! - [`accessor!`](crate::accessor): builds an [`Accessor`] from a field name.

// -----------------------------------------------------------------------------
// Modules

mod accessor;
mod field_adapter;

// -----------------------------------------------------------------------------
// Exports

pub use accessor::Accessor;
pub use field_adapter::{DefaultField, FieldAdapter, ValueField};
