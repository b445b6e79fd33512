//! Tagged binary wire format.
//!
//! Every value is prefixed by a one-byte [`WireTag`]. Lengths and counts are
//! embedded as complete Integer values (tag included), so the format is
//! self-describing down to the last byte.
//!
//! - [`WireWriter`]: append-only encoder.
//! - [`WireReader`]: bounds-checked decoder over a borrowed buffer.

// -----------------------------------------------------------------------------
// Modules

mod reader;
mod tag;
mod writer;

// -----------------------------------------------------------------------------
// Exports

pub use reader::WireReader;
pub use tag::WireTag;
pub use writer::WireWriter;
