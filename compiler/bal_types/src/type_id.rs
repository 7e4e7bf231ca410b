//! Type handle.
//!
//! A `TypeId` is a 32-bit index into the [`TypeTable`](crate::TypeTable).
//! Built-in types are pre-allocated at fixed indices so checks like
//! `ty == TypeId::INT` work without touching the table.

use std::fmt;

/// Handle to a type stored in a [`TypeTable`](crate::TypeTable).
///
/// Equality of handles implies type identity. The converse holds for every
/// type built through [`TypeTable::intern`](crate::TypeTable::intern), but
/// [`TypeTable::alloc`](crate::TypeTable::alloc) may produce a distinct handle
/// for a structurally identical type; use
/// [`TypeTable::identical`](crate::TypeTable::identical) when in doubt.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    // === Value Types ===
    pub const INT: TypeId = TypeId(0);
    pub const FLOAT: TypeId = TypeId(1);
    pub const STRING: TypeId = TypeId(2);
    pub const BOOLEAN: TypeId = TypeId(3);
    pub const BLOB: TypeId = TypeId(4);
    pub const TYPEDESC: TypeId = TypeId(5);

    // === Built-in Reference Types ===
    pub const XML: TypeId = TypeId(6);
    pub const DATATABLE: TypeId = TypeId(7);
    /// Unconstrained `json`.
    pub const JSON: TypeId = TypeId(8);
    pub const ANY: TypeId = TypeId(9);
    pub const MAP: TypeId = TypeId(10);

    // === Special ===
    pub const NULL: TypeId = TypeId(11);
    /// The unspecified type. Also the "no constraint" marker of `json`.
    pub const NONE: TypeId = TypeId(12);
    pub const ERROR: TypeId = TypeId(13);

    /// First index handed out for non-built-in types.
    pub const FIRST_DYNAMIC: u32 = 14;

    /// Invalid handle. Never stored in a table; marks "no operator found".
    pub const INVALID: TypeId = TypeId(u32::MAX);

    /// Create a handle from a raw index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        TypeId(raw)
    }

    /// Get the raw index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into table storage.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is one of the pre-allocated built-in handles.
    #[inline]
    pub const fn is_builtin(self) -> bool {
        self.0 < Self::FIRST_DYNAMIC
    }

    /// Check if this is the invalid sentinel.
    #[inline]
    pub const fn is_invalid(self) -> bool {
        self.0 == u32::MAX
    }

    /// Name of a built-in handle, for debug output.
    pub const fn builtin_name(self) -> Option<&'static str> {
        Some(match self {
            Self::INT => "int",
            Self::FLOAT => "float",
            Self::STRING => "string",
            Self::BOOLEAN => "boolean",
            Self::BLOB => "blob",
            Self::TYPEDESC => "type",
            Self::XML => "xml",
            Self::DATATABLE => "datatable",
            Self::JSON => "json",
            Self::ANY => "any",
            Self::MAP => "map",
            Self::NULL => "null",
            Self::NONE => "none",
            Self::ERROR => "<error>",
            _ => return None,
        })
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_invalid() {
            return write!(f, "TypeId::INVALID");
        }
        match self.builtin_name() {
            Some(name) => write!(f, "TypeId::{name}"),
            None => write!(f, "TypeId({})", self.0),
        }
    }
}

impl Default for TypeId {
    fn default() -> Self {
        Self::NONE
    }
}

const _: () = assert!(std::mem::size_of::<TypeId>() == 4);
