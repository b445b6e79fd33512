//! Primitive integer codecs used by the wire format.
//!
//! - [`zigzag_encode`] / [`zigzag_decode`]: signed to unsigned mapping that
//!   keeps small magnitudes small.
//! - [`encode_varuint`] / [`decode_varuint`]: 7 bits per byte, least
//!   significant group first, high bit set on every byte but the last.

// -----------------------------------------------------------------------------
// Modules

mod varuint;
mod zigzag;

// -----------------------------------------------------------------------------
// Exports

pub use varuint::{MAX_VARUINT_LEN, VarintError, decode_varuint, encode_varuint, varuint_len};
pub use zigzag::{zigzag_decode, zigzag_encode};
