use alloc::string::String;
use core::fmt;

use thiserror::Error;

use crate::document::Document;
use crate::wire::WireTag;

// -----------------------------------------------------------------------------
// NodeKind

/// The shape of a document node, used to report mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl NodeKind {
    /// Returns the kind of `node`.
    pub fn of(node: &Document) -> Self {
        match node {
            Document::Null => Self::Null,
            Document::Bool(_) => Self::Bool,
            Document::Number(_) => Self::Number,
            Document::String(_) => Self::String,
            Document::Array(_) => Self::Array,
            Document::Object(_) => Self::Object,
        }
    }

    /// Returns a lowercase name, such as `"object"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// -----------------------------------------------------------------------------
// DecodeError

/// Classification of a [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A document node or wire tag is not the kind the field expects.
    KindMismatch,
    /// A document lacks a member that has no registered default.
    MissingRequiredField,
    /// A wire object names a field the schema does not have.
    UnrecognizedField,
    /// The wire buffer ended before a value was complete.
    TruncatedInput,
    /// The wire bytes are complete but cannot describe a valid value.
    Malformed,
}

/// Error returned by document and wire decoding.
///
/// Decoding is not transactional: fields written before the failing one
/// keep their new values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("expected a document {expected}, found {found}")]
    UnexpectedNode { expected: NodeKind, found: NodeKind },

    #[error("expected wire tag {expected} at offset {offset}, found byte {found:#04x}")]
    UnexpectedTag {
        expected: WireTag,
        found: u8,
        offset: usize,
    },

    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    #[error("unrecognized field `{field}`")]
    UnknownField { field: String },

    #[error("input truncated at offset {offset}, {needed} more byte(s) needed")]
    Truncated { offset: usize, needed: usize },

    #[error("varuint at offset {offset} overflows 32 bits")]
    VarintOverflow { offset: usize },

    #[error("invalid length {length} at offset {offset}")]
    InvalidLength { length: i32, offset: usize },

    #[error("text at offset {offset} is not valid utf-8")]
    InvalidText { offset: usize },

    /// Objects nest deeper than `limit`. `offset` is set for wire input.
    #[error("objects nest deeper than {limit} levels")]
    DepthExceeded {
        limit: usize,
        offset: Option<usize>,
    },
}

impl DecodeError {
    /// Returns the category of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnexpectedNode { .. } | Self::UnexpectedTag { .. } => ErrorKind::KindMismatch,
            Self::MissingField { .. } => ErrorKind::MissingRequiredField,
            Self::UnknownField { .. } => ErrorKind::UnrecognizedField,
            Self::Truncated { .. } => ErrorKind::TruncatedInput,
            Self::VarintOverflow { .. }
            | Self::InvalidLength { .. }
            | Self::InvalidText { .. }
            | Self::DepthExceeded { .. } => ErrorKind::Malformed,
        }
    }

    #[inline]
    pub(crate) fn unexpected_node(expected: NodeKind, found: &Document) -> Self {
        Self::UnexpectedNode {
            expected,
            found: NodeKind::of(found),
        }
    }
}

// -----------------------------------------------------------------------------
// LoadError

/// Error returned when loading from document text.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    /// The text is not a well-formed document.
    #[error("document parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
