use alloc::boxed::Box;
use core::fmt;

use crate::wire::WireTag;

/// What a registered field holds.
///
/// # Examples
///
/// ```
/// use rf_schema::Value;
/// use rf_schema::info::FieldKind;
///
/// let kind = <Vec<Vec<i32>>>::field_kind();
/// assert_eq!(kind.to_string(), "array<array<int>>");
/// assert_eq!(kind.element().and_then(FieldKind::element), Some(&FieldKind::Integer));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Integer,
    Boolean,
    Text,
    /// A nested schema type, by registered name.
    Composite(&'static str),
    /// An ordered sequence of the inner kind.
    Sequence(Box<FieldKind>),
}

impl FieldKind {
    /// The tag a value of this kind starts with on the wire.
    pub const fn wire_tag(&self) -> WireTag {
        match self {
            Self::Integer => WireTag::Integer,
            Self::Boolean => WireTag::Boolean,
            Self::Text => WireTag::Text,
            Self::Composite(_) => WireTag::Object,
            Self::Sequence(_) => WireTag::Array,
        }
    }

    /// Returns `true` for the kinds that may carry a default.
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Integer | Self::Boolean | Self::Text)
    }

    /// The element kind of a sequence.
    pub fn element(&self) -> Option<&FieldKind> {
        match self {
            Self::Sequence(inner) => Some(inner),
            _ => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => f.write_str("int"),
            Self::Boolean => f.write_str("bool"),
            Self::Text => f.write_str("string"),
            Self::Composite(name) => f.write_str(name),
            Self::Sequence(inner) => write!(f, "array<{inner}>"),
        }
    }
}
