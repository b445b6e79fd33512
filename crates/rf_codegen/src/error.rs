use alloc::string::String;

use rf_schema::NodeKind;
use thiserror::Error;

/// Error returned while generating source from a sample document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CodegenError {
    /// The sample text is not a well-formed document.
    #[error("document parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("the root node must be an object, found {found}")]
    RootNotObject { found: NodeKind },

    #[error("`{name}` is not a valid type name")]
    InvalidTypeName { name: String },

    /// A `null` sample carries no type.
    #[error("member `{path}` is null, its type cannot be inferred")]
    NullMember { path: String },

    /// An empty array has no element to infer from.
    #[error("array `{path}` is empty, its element type cannot be inferred")]
    EmptyArray { path: String },
}
