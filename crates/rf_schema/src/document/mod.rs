//! The document tree consumed and produced by the schema.
//!
//! Documents are [`serde_json::Value`]s. The schema only relies on the
//! node predicates, object member lookup and array iteration on the read
//! side, and on building object, array and scalar nodes on the write side.
//!
//! Object members keep insertion order, so an encoded document lists fields
//! in declaration order.

use alloc::string::String;

// -----------------------------------------------------------------------------
// Modules

mod pretty;

// -----------------------------------------------------------------------------
// Exports

pub use pretty::to_text;

/// A document node.
pub type Document = serde_json::Value;

/// The member table of an object node.
pub type DocumentMap = serde_json::Map<String, Document>;

/// Parse document text.
///
/// Parser diagnostics are passed through untouched.
///
/// # Examples
///
/// ```
/// let doc = rf_schema::document::parse(r#"{ "id": 1 }"#).unwrap();
/// assert!(doc.is_object());
/// ```
pub fn parse(text: &str) -> Result<Document, serde_json::Error> {
    serde_json::from_str(text)
}
