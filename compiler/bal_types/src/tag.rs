//! Type kind tag for tag-driven dispatch.
//!
//! Every type in the [`TypeTable`](crate::TypeTable) has a `Tag`. Cast and
//! conversion resolution match on the target's tag first and the source's
//! tag second, so the set of tags is closed and the matches are exhaustive.
//!
//! # Tag Ranges
//!
//! - 0-15: Value types (`is_value_type`: everything up to and including `TypeDesc`)
//! - 16-31: Built-in reference types
//! - 32-47: User-defined and structured types
//! - 48-63: Special types (null, inference marker, error)

use std::fmt;

/// Type kind discriminant.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Tag {
    // === Value Types (0-15) ===
    /// 64-bit signed integer.
    Int = 0,
    /// 64-bit floating point.
    Float = 1,
    /// UTF-8 string.
    String = 2,
    /// Boolean.
    Boolean = 3,
    /// Byte blob.
    Blob = 4,
    /// Type descriptor value (`typeof` result).
    TypeDesc = 5,

    // === Built-in Reference Types (16-31) ===
    /// JSON value, optionally constrained by a struct shape.
    Json = 16,
    /// XML value.
    Xml = 17,
    /// Tabular data.
    Datatable = 18,
    /// Top reference type; every value may be boxed into `any`.
    Any = 19,
    /// String-keyed map of `any`.
    Map = 20,

    // === User-Defined and Structured Types (32-47) ===
    /// Array type with an element type.
    Array = 32,
    /// Struct type with ordered named fields.
    Struct = 33,
    /// Connector type.
    Connector = 34,
    /// Enum type.
    Enum = 35,
    /// Function type with parameter and return type lists.
    Invokable = 36,

    // === Special (48-63) ===
    /// Type of the `null` literal.
    Null = 48,
    /// Unspecified type: inference marker and "no constraint".
    None = 49,
    /// Error placeholder (propagates silently).
    Error = 50,
}

impl Tag {
    /// Last value-type tag; value types are exactly the tags at or below it.
    pub const VALUE_TYPE_BOUNDARY: Tag = Tag::TypeDesc;

    /// Check if this tag is a value type.
    #[inline]
    pub const fn is_value_type(self) -> bool {
        (self as u8) <= (Self::VALUE_TYPE_BOUNDARY as u8)
    }

    /// Check if this tag is a user-defined type for assignability purposes.
    ///
    /// Arrays count as user-defined: two arrays are never assignable by tag alone.
    #[inline]
    pub const fn is_user_defined(self) -> bool {
        matches!(self, Self::Struct | Self::Connector | Self::Enum | Self::Array)
    }

    /// Check if this tag is a constrained (parametric) type.
    #[inline]
    pub const fn is_constrained(self) -> bool {
        matches!(self, Self::Json)
    }

    /// Check if types with this tag are identified by declaration, not structure.
    #[inline]
    pub const fn is_nominal(self) -> bool {
        matches!(self, Self::Struct | Self::Connector | Self::Enum)
    }

    /// Get the name of this tag as a static string.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Blob => "blob",
            Self::TypeDesc => "type",
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Datatable => "datatable",
            Self::Any => "any",
            Self::Map => "map",
            Self::Array => "array",
            Self::Struct => "struct",
            Self::Connector => "connector",
            Self::Enum => "enum",
            Self::Invokable => "function",
            Self::Null => "null",
            Self::None => "none",
            Self::Error => "<error>",
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag::{}", self.name())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// Tag must stay exactly 1 byte
const _: () = assert!(std::mem::size_of::<Tag>() == 1);
