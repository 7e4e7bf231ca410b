use thiserror::Error;

use crate::{Tag, TypeId};

/// Errors from building types in a [`TypeTable`](crate::TypeTable).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TypeTableError {
    #[error("type table exceeded capacity of {max} types")]
    Overflow { max: u32 },

    #[error("{id:?} is a {found}, expected a struct")]
    NotAStruct { id: TypeId, found: Tag },

    #[error("fields of struct {id:?} are already defined")]
    FieldsAlreadyDefined { id: TypeId },
}
