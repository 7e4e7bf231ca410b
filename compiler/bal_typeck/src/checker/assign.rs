//! Assignability and the `check_type` entry point.

use bal_diagnostic::{DiagnosticSink, ErrorCode};
use bal_ir::Span;
use bal_types::{OperatorResolver, Tag, TypeId};

use super::TypeChecker;
use crate::TypeCheckError;

impl<R: OperatorResolver> TypeChecker<'_, R> {
    /// Can a value of `actual` be stored where `expected` is required, with no
    /// conversion at all?
    ///
    /// The first matching rule decides:
    /// 1. identical types
    /// 2. `expected` is the error type
    /// 3. `null` into any reference type
    /// 4. same value type
    /// 5. function types with identical signatures
    /// 6. same kind with no components or constraint (`map`, `any`, `xml`, ...)
    /// 7. arrays with exactly equal element types (no covariance)
    /// 8. `json` into unconstrained `json`, or into `json` with the identical constraint
    pub fn is_assignable(&self, actual: TypeId, expected: TypeId) -> bool {
        if self.same(actual, expected) {
            return true;
        }

        let expected_tag = self.tag(expected);
        if expected_tag == Tag::Error {
            return true;
        }

        let actual_tag = self.tag(actual);
        if actual_tag == Tag::Null && !expected_tag.is_value_type() {
            return true;
        }

        if actual_tag == expected_tag {
            if actual_tag.is_value_type() {
                return true;
            }
            if actual_tag == Tag::Invokable {
                return self.check_function_type_equivalent(actual, expected);
            }
            if !actual_tag.is_user_defined() && !actual_tag.is_constrained() {
                return true;
            }
            if actual_tag == Tag::Array {
                return self.check_array_equivalent(actual, expected);
            }
        }

        // TODO: connector and enum assignability once connectors carry action signatures
        self.is_constrained_type_assignable(actual, expected)
    }

    /// `json` assignability: the expected constraint is absent or identical
    /// to the actual one. Structurally compatible constraints do not count.
    pub(crate) fn is_constrained_type_assignable(&self, actual: TypeId, expected: TypeId) -> bool {
        let (Some(actual_constraint), Some(expected_constraint)) = (
            self.types.json_constraint(actual),
            self.types.json_constraint(expected),
        ) else {
            return false;
        };

        self.tag(expected_constraint) == Tag::None
            || self.same(expected_constraint, actual_constraint)
    }

    /// Check `actual` against `expected`, reporting one diagnostic on failure.
    ///
    /// Returns the type the checked expression now has: `actual` on success,
    /// `expected` when `expected` is the error type, and [`TypeId::ERROR`]
    /// after a reported mismatch. `expected == TypeId::NONE` means "infer",
    /// which always succeeds.
    #[tracing::instrument(level = "trace", skip(self, sink))]
    pub fn check_type(
        &self,
        span: Span,
        actual: TypeId,
        expected: TypeId,
        code: ErrorCode,
        sink: &mut impl DiagnosticSink,
    ) -> TypeId {
        if actual == expected {
            return actual;
        }

        match self.tag(expected) {
            Tag::Error => return expected,
            Tag::None => return actual,
            _ => {}
        }

        if self.tag(actual) == Tag::Error
            || self.is_assignable(actual, expected)
            || self.is_implicit_cast_possible(actual, expected)
        {
            return actual;
        }

        Self::report(
            sink,
            &TypeCheckError::Incompatible {
                span,
                code,
                expected: self.render(expected),
                found: self.render(actual),
            },
        );
        TypeId::ERROR
    }

    /// [`check_type`](Self::check_type) over parallel lists.
    ///
    /// Lists of different lengths are a caller bug; only the common prefix is
    /// checked.
    pub fn check_types(
        &self,
        span: Span,
        actuals: &[TypeId],
        expecteds: &[TypeId],
        code: ErrorCode,
        sink: &mut impl DiagnosticSink,
    ) -> Vec<TypeId> {
        debug_assert_eq!(
            actuals.len(),
            expecteds.len(),
            "check_types called with lists of different lengths"
        );
        actuals
            .iter()
            .zip(expecteds)
            .map(|(&actual, &expected)| self.check_type(span, actual, expected, code, sink))
            .collect()
    }
}
