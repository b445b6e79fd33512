#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// The derive emits `::rf_schema::...` paths. Inside this crate (tests and
// doctests) that name has to resolve to `crate`.
extern crate self as rf_schema;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;

pub mod access;
pub mod codec;
pub mod document;
pub mod impls;
pub mod info;
pub mod ops;
pub mod registry;
pub mod wire;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use error::{DecodeError, ErrorKind, LoadError, NodeKind};
pub use impls::{ScalarValue, Value};
pub use registry::Schema;
pub use rf_schema_derive as derive;
pub use rf_schema_derive::Schema;
