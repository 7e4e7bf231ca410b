//! Tests for the type checker.

use bal_ir::StringInterner;
use bal_types::{OperatorTable, StructField, TypeId, TypeTable};

use crate::TypeChecker;

mod implicit_tests;
mod structural_tests;

/// Type table, operator registry, and interner for one test.
struct Fixture {
    interner: StringInterner,
    types: TypeTable,
    operators: OperatorTable,
}

impl Fixture {
    fn new() -> Self {
        Fixture {
            interner: StringInterner::new(),
            types: TypeTable::new(),
            operators: OperatorTable::with_builtins(),
        }
    }

    fn checker(&self) -> TypeChecker<'_> {
        TypeChecker::new(&self.types, &self.operators, &self.interner)
    }

    /// Declare and define a struct from `(field name, type)` pairs.
    fn struct_type(&mut self, name: &str, fields: &[(&str, TypeId)]) -> TypeId {
        let fields = fields
            .iter()
            .map(|&(field, ty)| StructField::new(self.interner.intern(field), ty))
            .collect();
        self.types
            .struct_type(self.interner.intern(name), fields)
            .unwrap()
    }

    /// Declare a struct whose fields are defined later with [`Self::define`].
    fn declare(&mut self, name: &str) -> TypeId {
        self.types
            .declare_struct(self.interner.intern(name))
            .unwrap()
    }

    fn define(&mut self, id: TypeId, fields: &[(&str, TypeId)]) {
        let fields = fields
            .iter()
            .map(|&(field, ty)| StructField::new(self.interner.intern(field), ty))
            .collect();
        self.types.define_struct_fields(id, fields).unwrap();
    }

    /// `Person { name: string, age: int }`
    fn person(&mut self) -> TypeId {
        self.struct_type("Person", &[("name", TypeId::STRING), ("age", TypeId::INT)])
    }
}
