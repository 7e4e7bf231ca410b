//! Type content stored in the [`TypeTable`](crate::TypeTable).

use bal_ir::Name;
use bitflags::bitflags;

use crate::{Tag, TypeId};

/// Index of a nominal declaration (struct, connector, or enum).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct DeclId(u32);

impl DeclId {
    #[inline]
    pub(crate) const fn new(raw: u32) -> Self {
        DeclId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Content of a type.
///
/// Nominal kinds carry a [`DeclId`] so two declarations with the same shape
/// stay distinct; everything else is compared structurally.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeData {
    Int,
    Float,
    String,
    Boolean,
    Blob,
    TypeDesc,
    Xml,
    Datatable,
    Any,
    Map,
    /// `json`, optionally constrained; [`TypeId::NONE`] means unconstrained.
    Json {
        constraint: TypeId,
    },
    Array {
        element: TypeId,
    },
    Struct(DeclId),
    Connector(DeclId),
    Enum(DeclId),
    Invokable {
        params: Box<[TypeId]>,
        rets: Box<[TypeId]>,
    },
    Null,
    None,
    Error,
}

impl TypeData {
    /// Get the tag of this type content.
    pub const fn tag(&self) -> Tag {
        match self {
            Self::Int => Tag::Int,
            Self::Float => Tag::Float,
            Self::String => Tag::String,
            Self::Boolean => Tag::Boolean,
            Self::Blob => Tag::Blob,
            Self::TypeDesc => Tag::TypeDesc,
            Self::Xml => Tag::Xml,
            Self::Datatable => Tag::Datatable,
            Self::Any => Tag::Any,
            Self::Map => Tag::Map,
            Self::Json { .. } => Tag::Json,
            Self::Array { .. } => Tag::Array,
            Self::Struct(_) => Tag::Struct,
            Self::Connector(_) => Tag::Connector,
            Self::Enum(_) => Tag::Enum,
            Self::Invokable { .. } => Tag::Invokable,
            Self::Null => Tag::Null,
            Self::None => Tag::None,
            Self::Error => Tag::Error,
        }
    }

    /// Pre-allocated content for each built-in [`TypeId`], in index order.
    pub(crate) fn builtins() -> [TypeData; TypeId::FIRST_DYNAMIC as usize] {
        [
            TypeData::Int,
            TypeData::Float,
            TypeData::String,
            TypeData::Boolean,
            TypeData::Blob,
            TypeData::TypeDesc,
            TypeData::Xml,
            TypeData::Datatable,
            TypeData::Json {
                constraint: TypeId::NONE,
            },
            TypeData::Any,
            TypeData::Map,
            TypeData::Null,
            TypeData::None,
            TypeData::Error,
        ]
    }
}

bitflags! {
    /// Modifiers on a struct field.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
    pub struct FieldFlags: u8 {
        const PUBLIC = 1 << 0;
        const READONLY = 1 << 1;
        /// Field has a default value in the declaration.
        const DEFAULTED = 1 << 2;
    }
}

/// One field of a struct declaration.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct StructField {
    pub name: Name,
    pub ty: TypeId,
    pub flags: FieldFlags,
}

impl StructField {
    pub const fn new(name: Name, ty: TypeId) -> Self {
        StructField {
            name,
            ty,
            flags: FieldFlags::empty(),
        }
    }

    #[must_use]
    pub const fn with_flags(mut self, flags: FieldFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// Declaration-specific payload of a nominal type.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum DeclKind {
    /// `None` until the fields are defined, so a struct can mention itself.
    Struct { fields: Option<Box<[StructField]>> },
    Connector,
    Enum { members: Box<[Name]> },
}

/// A nominal declaration.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Declaration {
    pub name: Name,
    pub kind: DeclKind,
}
