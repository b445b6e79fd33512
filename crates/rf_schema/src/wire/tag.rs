use core::fmt;

/// One-byte discriminator in front of every encoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WireTag {
    Integer = 0,
    Boolean = 1,
    Text = 2,
    Object = 3,
    Array = 4,
}

impl WireTag {
    /// Returns the tag for `byte`, if it is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use rf_schema::wire::WireTag;
    ///
    /// assert_eq!(WireTag::from_byte(3), Some(WireTag::Object));
    /// assert_eq!(WireTag::from_byte(5), None);
    /// ```
    #[inline]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Self::Integer),
            1 => Some(Self::Boolean),
            2 => Some(Self::Text),
            3 => Some(Self::Object),
            4 => Some(Self::Array),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::Boolean => "Boolean",
            Self::Text => "Text",
            Self::Object => "Object",
            Self::Array => "Array",
        }
    }
}

impl fmt::Display for WireTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
