//! Type table: storage and interning for all types of a compilation.
//!
//! Types are stored in a flat `Vec` indexed by [`TypeId`]. Built-in types
//! occupy the first [`TypeId::FIRST_DYNAMIC`] slots. Compound types built
//! through [`TypeTable::intern`] are deduplicated, so equal handles mean
//! identical types and most identity checks are a `u32` compare.
//!
//! The table is built single-threaded during declaration collection and then
//! shared by reference (`&TypeTable` is `Sync`) with every checking thread.

mod format;

use bal_ir::Name;
use rustc_hash::FxHashMap;

use crate::{DeclId, DeclKind, Declaration, StructField, Tag, TypeData, TypeId, TypeTableError};

/// Storage for every type in a compilation.
#[derive(Clone, Debug)]
pub struct TypeTable {
    types: Vec<TypeData>,
    /// Dedup map for interned content. Allocated duplicates are not in here.
    interned: FxHashMap<TypeData, TypeId>,
    decls: Vec<Declaration>,
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeTable {
    /// Create a table holding only the built-in types.
    pub fn new() -> Self {
        let builtins = TypeData::builtins();
        let mut interned = FxHashMap::default();
        interned.reserve(builtins.len());
        for (index, data) in builtins.iter().enumerate() {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "builtin count is a small compile-time constant"
            )]
            let id = TypeId::from_raw(index as u32);
            interned.insert(data.clone(), id);
        }

        TypeTable {
            types: builtins.into(),
            interned,
            decls: Vec::new(),
        }
    }

    // === Construction ===

    /// Intern type content, returning the existing handle if present.
    pub fn try_intern(&mut self, data: TypeData) -> Result<TypeId, TypeTableError> {
        if let Some(&id) = self.interned.get(&data) {
            return Ok(id);
        }
        let id = self.push(data.clone())?;
        self.interned.insert(data, id);
        Ok(id)
    }

    /// Intern type content.
    ///
    /// # Panics
    /// Panics if the table exceeds `u32::MAX - 1` types.
    pub fn intern(&mut self, data: TypeData) -> TypeId {
        match self.try_intern(data) {
            Ok(id) => id,
            Err(err) => panic!("{err}"),
        }
    }

    /// Allocate a fresh handle without interning.
    ///
    /// The result is never equal to an existing handle even when the content
    /// is. Front ends that materialize a type per occurrence (for example a
    /// `json` annotation on every variable) use this; the checker's
    /// structural identity fallback keeps such types compatible.
    pub fn alloc(&mut self, data: TypeData) -> Result<TypeId, TypeTableError> {
        self.push(data)
    }

    /// Intern an array of `element`.
    pub fn array(&mut self, element: TypeId) -> TypeId {
        self.intern(TypeData::Array { element })
    }

    /// Intern an array of `element` with `dims` dimensions (`dims == 0` yields `element`).
    pub fn array_of(&mut self, element: TypeId, dims: u32) -> TypeId {
        (0..dims).fold(element, |inner, _| self.array(inner))
    }

    /// Intern `json<constraint>`; [`TypeId::NONE`] yields unconstrained `json`.
    pub fn json(&mut self, constraint: TypeId) -> TypeId {
        self.intern(TypeData::Json { constraint })
    }

    /// Intern a function type.
    pub fn invokable(&mut self, params: &[TypeId], rets: &[TypeId]) -> TypeId {
        self.intern(TypeData::Invokable {
            params: params.into(),
            rets: rets.into(),
        })
    }

    /// Declare a struct whose fields are defined later.
    ///
    /// Splitting declaration from definition lets a field refer to the struct
    /// itself (directly or through other structs).
    pub fn declare_struct(&mut self, name: Name) -> Result<TypeId, TypeTableError> {
        let decl = self.declare(name, DeclKind::Struct { fields: None });
        self.try_intern(TypeData::Struct(decl))
    }

    /// Define the fields of a struct created by [`declare_struct`](Self::declare_struct).
    pub fn define_struct_fields(
        &mut self,
        id: TypeId,
        fields: Vec<StructField>,
    ) -> Result<(), TypeTableError> {
        let decl = match self.data(id) {
            TypeData::Struct(decl) => *decl,
            other => {
                return Err(TypeTableError::NotAStruct {
                    id,
                    found: other.tag(),
                })
            }
        };
        match &mut self.decls[decl.index()].kind {
            DeclKind::Struct { fields: slot @ None } => {
                *slot = Some(fields.into_boxed_slice());
                Ok(())
            }
            _ => Err(TypeTableError::FieldsAlreadyDefined { id }),
        }
    }

    /// Declare and define a struct in one step.
    pub fn struct_type(
        &mut self,
        name: Name,
        fields: Vec<StructField>,
    ) -> Result<TypeId, TypeTableError> {
        let id = self.declare_struct(name)?;
        self.define_struct_fields(id, fields)?;
        Ok(id)
    }

    /// Declare a connector type.
    pub fn connector(&mut self, name: Name) -> Result<TypeId, TypeTableError> {
        let decl = self.declare(name, DeclKind::Connector);
        self.try_intern(TypeData::Connector(decl))
    }

    /// Declare an enum type.
    pub fn enum_type(&mut self, name: Name, members: Vec<Name>) -> Result<TypeId, TypeTableError> {
        let decl = self.declare(
            name,
            DeclKind::Enum {
                members: members.into_boxed_slice(),
            },
        );
        self.try_intern(TypeData::Enum(decl))
    }

    fn declare(&mut self, name: Name, kind: DeclKind) -> DeclId {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "declarations are bounded by types, which are bounded by u32"
        )]
        let decl = DeclId::new(self.decls.len() as u32);
        self.decls.push(Declaration { name, kind });
        decl
    }

    fn push(&mut self, data: TypeData) -> Result<TypeId, TypeTableError> {
        let raw = u32::try_from(self.types.len())
            .ok()
            .filter(|&raw| raw < u32::MAX)
            .ok_or(TypeTableError::Overflow { max: u32::MAX - 1 })?;
        self.types.push(data);
        Ok(TypeId::from_raw(raw))
    }

    // === Queries ===

    /// Get the content of a type.
    ///
    /// # Panics
    /// Panics if `id` did not come from this table.
    #[inline]
    pub fn data(&self, id: TypeId) -> &TypeData {
        &self.types[id.index()]
    }

    /// Get the tag of a type.
    #[inline]
    pub fn tag(&self, id: TypeId) -> Tag {
        self.data(id).tag()
    }

    /// Check if a type is a value type.
    #[inline]
    pub fn is_value_type(&self, id: TypeId) -> bool {
        self.tag(id).is_value_type()
    }

    /// Number of types in the table, built-ins included.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Always `false`: the built-ins are present from construction.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Immediate element type of an array, `None` for non-arrays.
    pub fn array_element(&self, id: TypeId) -> Option<TypeId> {
        match self.data(id) {
            TypeData::Array { element } => Some(*element),
            _ => None,
        }
    }

    /// Innermost non-array element type; `id` itself for non-arrays.
    pub fn element_type(&self, id: TypeId) -> TypeId {
        let mut current = id;
        while let TypeData::Array { element } = self.data(current) {
            current = *element;
        }
        current
    }

    /// Number of array dimensions; zero for non-arrays.
    pub fn dimensions(&self, id: TypeId) -> u32 {
        let mut dims = 0;
        let mut current = id;
        while let TypeData::Array { element } = self.data(current) {
            dims += 1;
            current = *element;
        }
        dims
    }

    /// Constraint of a `json` type: [`TypeId::NONE`] when unconstrained,
    /// `None` when `id` is not `json` at all.
    pub fn json_constraint(&self, id: TypeId) -> Option<TypeId> {
        match self.data(id) {
            TypeData::Json { constraint } => Some(*constraint),
            _ => None,
        }
    }

    /// Fields of a struct in declaration order.
    ///
    /// Empty for non-structs and for structs whose fields are not yet defined.
    pub fn struct_fields(&self, id: TypeId) -> &[StructField] {
        match self.declaration(id).map(|decl| &decl.kind) {
            Some(DeclKind::Struct {
                fields: Some(fields),
            }) => fields,
            _ => &[],
        }
    }

    /// Parameter and return types of a function type.
    pub fn signature(&self, id: TypeId) -> Option<(&[TypeId], &[TypeId])> {
        match self.data(id) {
            TypeData::Invokable { params, rets } => Some((params, rets)),
            _ => None,
        }
    }

    /// Declaration behind a nominal type.
    pub fn declaration(&self, id: TypeId) -> Option<&Declaration> {
        match self.data(id) {
            TypeData::Struct(decl) | TypeData::Connector(decl) | TypeData::Enum(decl) => {
                Some(&self.decls[decl.index()])
            }
            _ => None,
        }
    }

    /// Canonical handle for types without components.
    ///
    /// Built-in kinds and unconstrained `json` map to their pre-allocated
    /// handle even when `id` was produced by [`alloc`](Self::alloc). Other
    /// types are returned unchanged.
    pub fn canonical(&self, id: TypeId) -> TypeId {
        if id.is_builtin() || id.is_invalid() {
            return id;
        }
        match self.data(id) {
            TypeData::Int => TypeId::INT,
            TypeData::Float => TypeId::FLOAT,
            TypeData::String => TypeId::STRING,
            TypeData::Boolean => TypeId::BOOLEAN,
            TypeData::Blob => TypeId::BLOB,
            TypeData::TypeDesc => TypeId::TYPEDESC,
            TypeData::Xml => TypeId::XML,
            TypeData::Datatable => TypeId::DATATABLE,
            TypeData::Any => TypeId::ANY,
            TypeData::Map => TypeId::MAP,
            TypeData::Null => TypeId::NULL,
            TypeData::None => TypeId::NONE,
            TypeData::Error => TypeId::ERROR,
            TypeData::Json { constraint } if self.tag(*constraint) == Tag::None => TypeId::JSON,
            _ => id,
        }
    }

    /// Structural type identity.
    ///
    /// Equal handles are identical. Otherwise components are compared;
    /// nominal types are identical only if they share a declaration.
    /// Array and `json` layers are peeled in a loop, so nesting depth is
    /// not bounded by the stack.
    pub fn identical(&self, mut a: TypeId, mut b: TypeId) -> bool {
        loop {
            if a == b {
                return true;
            }
            match (self.data(a), self.data(b)) {
                (TypeData::Json { constraint: inner_a }, TypeData::Json { constraint: inner_b })
                | (TypeData::Array { element: inner_a }, TypeData::Array { element: inner_b }) => {
                    a = *inner_a;
                    b = *inner_b;
                }
                (
                    TypeData::Invokable {
                        params: pa,
                        rets: ra,
                    },
                    TypeData::Invokable {
                        params: pb,
                        rets: rb,
                    },
                ) => return self.all_identical(pa, pb) && self.all_identical(ra, rb),
                (da, db) => return da == db,
            }
        }
    }

    fn all_identical(&self, a: &[TypeId], b: &[TypeId]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| self.identical(x, y))
    }
}
