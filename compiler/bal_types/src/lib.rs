//! Type model for the bal compiler.
//!
//! - [`Tag`]: closed set of type kinds, ordered so value types form a prefix
//! - [`TypeId`]: 32-bit type handle with pre-allocated built-in constants
//! - [`TypeData`]: type content (components, declarations)
//! - [`TypeTable`]: storage, interning, structural identity, and rendering
//! - [`OperatorSymbol`] / [`OperatorTable`]: cast and conversion operators
//!
//! Everything here is plain data. Compatibility rules live in `bal_typeck`.

mod data;
mod error;
mod operator;
mod table;
mod tag;
mod type_id;

pub use data::{DeclId, DeclKind, Declaration, FieldFlags, StructField, TypeData};
pub use error::TypeTableError;
pub use operator::{Opcode, OperatorKind, OperatorResolver, OperatorSymbol, OperatorTable};
pub use table::TypeTable;
pub use tag::Tag;
pub use type_id::TypeId;

// Size assertions to prevent accidental regressions
bal_ir::static_assert_size!(TypeId, 4);
bal_ir::static_assert_size!(Tag, 1);
bal_ir::static_assert_size!(OperatorSymbol, 16);
