//! Implicit cast detection and insertion.

use bal_types::{OperatorKind, OperatorResolver, Tag, TypeId};

use super::TypeChecker;
use crate::{ensure_sufficient_stack, ImplicitCast, TypedExpr};

impl<R: OperatorResolver> TypeChecker<'_, R> {
    /// Can the checker silently insert a cast from `actual` to `expected`?
    ///
    /// Never into a constrained `json`. Otherwise: a registered implicit cast
    /// exists, `expected` is `any`, or both are arrays whose elements are
    /// implicitly array-castable.
    pub fn is_implicit_cast_possible(&self, actual: TypeId, expected: TypeId) -> bool {
        if self.json_constraint(expected).is_some() {
            return false;
        }

        if self
            .lookup_operator(OperatorKind::ImplicitCast, actual, expected)
            .is_found()
        {
            return true;
        }

        match (self.tag(actual), self.tag(expected)) {
            (_, Tag::Any) => true,
            (Tag::Array, Tag::Array) => self.is_implicit_array_cast_possible(actual, expected),
            _ => false,
        }
    }

    /// Element-wise implicit cast between arrays.
    ///
    /// Only reference elements qualify: an array element is never boxed, so
    /// `int[]` does not implicitly become `any[]`, while `Person[]` does.
    fn is_implicit_array_cast_possible(&self, actual: TypeId, expected: TypeId) -> bool {
        match (
            self.types.array_element(actual),
            self.types.array_element(expected),
        ) {
            (Some(actual_elem), Some(expected_elem)) => ensure_sufficient_stack(|| {
                self.is_implicit_array_cast_possible(actual_elem, expected_elem)
            }),
            (Some(_), None) => self.tag(expected) == Tag::Any,
            (None, Some(_)) => false,
            (None, None) => {
                self.same(actual, expected)
                    || (self.tag(expected) == Tag::Any && !self.is_value_type(actual))
            }
        }
    }

    /// Wrap `expr` in one implicit cast layer to `expected`, if a registered
    /// implicit cast from `actual` exists. No-op otherwise.
    ///
    /// The new layer owns the expression's previous layer, so repeated calls
    /// build a chain outermost-first.
    pub fn set_implicit_cast_expr(&self, expr: &mut TypedExpr, actual: TypeId, expected: TypeId) {
        let Some(symbol) = self
            .lookup_operator(OperatorKind::ImplicitCast, actual, expected)
            .found()
        else {
            return;
        };

        let inner = expr.implicit_cast.take();
        expr.implicit_cast = Some(Box::new(ImplicitCast {
            span: expr.span,
            target: expected,
            symbol,
            inner,
        }));
    }
}
