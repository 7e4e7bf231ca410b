//! Structural checks: struct equivalence, array and function equivalence,
//! and whether a struct can describe (or be turned into) a JSON document.

use bal_types::{OperatorResolver, Tag, TypeId};

use super::guard::{CheckKind, RecursionGuard};
use super::TypeChecker;
use crate::ensure_sufficient_stack;

impl<R: OperatorResolver> TypeChecker<'_, R> {
    /// Can a value of struct `actual` be used as struct `expected`?
    ///
    /// Positional: `expected` may not have more fields than `actual`, and
    /// field `i` of `expected` must match field `i` of `actual` by name and
    /// accept its type. Extra trailing fields in `actual` are fine.
    pub fn check_struct_equivalency(&self, actual: TypeId, expected: TypeId) -> bool {
        if self.tag(actual) != Tag::Struct || self.tag(expected) != Tag::Struct {
            return false;
        }

        let actual_fields = self.types.struct_fields(actual);
        let expected_fields = self.types.struct_fields(expected);
        if expected_fields.len() > actual_fields.len() {
            return false;
        }

        expected_fields
            .iter()
            .zip(actual_fields)
            .all(|(exp, act)| exp.name == act.name && self.is_assignable(act.ty, exp.ty))
    }

    /// Arrays are equivalent when their elements are, all the way down;
    /// anything else must be identical.
    pub fn check_array_equivalent(&self, actual: TypeId, expected: TypeId) -> bool {
        match (
            self.types.array_element(actual),
            self.types.array_element(expected),
        ) {
            (Some(actual_elem), Some(expected_elem)) => {
                ensure_sufficient_stack(|| self.check_array_equivalent(actual_elem, expected_elem))
            }
            _ => self.same(actual, expected),
        }
    }

    /// Function types are equivalent when parameter and return lists are
    /// identical element-wise.
    pub fn check_function_type_equivalent(&self, actual: TypeId, expected: TypeId) -> bool {
        let (Some((actual_params, actual_rets)), Some((expected_params, expected_rets))) = (
            self.types.signature(actual),
            self.types.signature(expected),
        ) else {
            return false;
        };

        actual_params.len() == expected_params.len()
            && actual_rets.len() == expected_rets.len()
            && actual_params
                .iter()
                .zip(expected_params)
                .all(|(&a, &e)| self.same(a, e))
            && actual_rets
                .iter()
                .zip(expected_rets)
                .all(|(&a, &e)| self.same(a, e))
    }

    /// Base element type of a (possibly nested) array; `ty` itself otherwise.
    pub fn get_element_type(&self, ty: TypeId) -> TypeId {
        self.types.element_type(ty)
    }

    /// Can struct `ty` be used as a `json` constraint?
    ///
    /// Every field must be JSON-representable: a value type, the struct
    /// itself, another compatible struct, something assignable or implicitly
    /// castable to `json`, or an array of any of those. Self-referential
    /// structs terminate.
    pub fn check_struct_to_json_compatibility(&self, ty: TypeId) -> bool {
        if self.tag(ty) != Tag::Struct {
            return false;
        }
        self.struct_json_compatible(&mut RecursionGuard::new(), ty)
    }

    /// Can struct `ty` be converted to a `json` value at run time?
    ///
    /// Like [`check_struct_to_json_compatibility`](Self::check_struct_to_json_compatibility),
    /// but `map` and `any` fields are accepted too; their contents are
    /// checked during the conversion.
    pub fn check_struct_to_json_convertibility(&self, ty: TypeId) -> bool {
        if self.tag(ty) != Tag::Struct {
            return false;
        }
        self.struct_json_convertible(&mut RecursionGuard::new(), ty)
    }

    /// Annotation attributes may only hold value types or arrays of them.
    pub fn is_annotation_field_type(&self, ty: TypeId) -> bool {
        self.is_value_type(ty)
            || self
                .types
                .array_element(ty)
                .is_some_and(|elem| self.is_value_type(elem))
    }

    fn struct_json_compatible(&self, guard: &mut RecursionGuard, ty: TypeId) -> bool {
        guard.visit(CheckKind::JsonCompatible, ty, TypeId::JSON, |guard| {
            self.types
                .struct_fields(ty)
                .iter()
                .all(|field| self.field_json_compatible(guard, ty, field.ty))
        })
    }

    fn field_json_compatible(&self, guard: &mut RecursionGuard, owner: TypeId, field: TypeId) -> bool {
        if self.same(owner, field) || self.is_value_type(field) {
            return true;
        }
        match self.tag(field) {
            Tag::Struct => ensure_sufficient_stack(|| self.struct_json_compatible(guard, field)),
            Tag::Array => {
                let elem = self.get_element_type(field);
                self.is_json_assignable(field) || self.field_json_compatible(guard, owner, elem)
            }
            _ => self.is_json_assignable(field),
        }
    }

    fn struct_json_convertible(&self, guard: &mut RecursionGuard, ty: TypeId) -> bool {
        guard.visit(CheckKind::JsonConvertible, ty, TypeId::JSON, |guard| {
            self.types
                .struct_fields(ty)
                .iter()
                .all(|field| self.field_json_convertible(guard, ty, field.ty))
        })
    }

    fn field_json_convertible(
        &self,
        guard: &mut RecursionGuard,
        owner: TypeId,
        field: TypeId,
    ) -> bool {
        if self.same(owner, field) || self.is_value_type(field) {
            return true;
        }
        match self.tag(field) {
            Tag::Map | Tag::Any => true,
            Tag::Struct => ensure_sufficient_stack(|| self.struct_json_convertible(guard, field)),
            Tag::Array => {
                let elem = self.get_element_type(field);
                self.field_json_convertible(guard, owner, elem)
            }
            _ => self.is_json_assignable(field),
        }
    }

    /// Assignable or implicitly castable to unconstrained `json`.
    fn is_json_assignable(&self, ty: TypeId) -> bool {
        self.is_assignable(ty, TypeId::JSON) || self.is_implicit_cast_possible(ty, TypeId::JSON)
    }
}
