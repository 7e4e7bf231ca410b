//! Expression-level wrappers that report diagnostics.
//!
//! The resolvers in `cast`, `conversion`, and `structural` answer questions;
//! these wrappers turn negative answers into diagnostics for a source span.

use bal_diagnostic::{DiagnosticSink, ErrorCode};
use bal_ir::Span;
use bal_types::{OperatorResolver, OperatorSymbol, Tag, TypeId};

use super::TypeChecker;
use crate::{TypeCheckError, TypedExpr};

impl<R: OperatorResolver> TypeChecker<'_, R> {
    /// Check an expression against `expected` and record the outcome on it.
    ///
    /// The expression's type becomes the [`check_type`](Self::check_type)
    /// result. Unless that is the error type, an implicit cast layer is
    /// attached when one is registered.
    pub fn check_expr_type(
        &self,
        expr: &mut TypedExpr,
        expected: TypeId,
        code: ErrorCode,
        sink: &mut impl DiagnosticSink,
    ) -> TypeId {
        let actual = expr.ty;
        expr.ty = self.check_type(expr.span, actual, expected, code, sink);
        if self.tag(expr.ty) != Tag::Error {
            self.set_implicit_cast_expr(expr, actual, expected);
        }
        expr.ty
    }

    /// Resolve a cast expression, reporting when no operator exists.
    ///
    /// Casts involving the error type resolve to
    /// [`OperatorSymbol::NOT_FOUND`] silently; the error was reported where it
    /// arose. A cast to an enum is reported like any other illegal cast.
    pub fn resolve_cast(
        &self,
        span: Span,
        source: TypeId,
        target: TypeId,
        sink: &mut impl DiagnosticSink,
    ) -> OperatorSymbol {
        let (source_tag, target_tag) = (self.tag(source), self.tag(target));
        if source_tag == Tag::Error || target_tag == Tag::Error {
            return OperatorSymbol::NOT_FOUND;
        }

        let symbol = if target_tag == Tag::Enum && !self.same(source, target) {
            OperatorSymbol::NOT_FOUND
        } else {
            self.get_cast_operator(source, target)
        };

        if symbol.is_not_found() {
            Self::report(
                sink,
                &TypeCheckError::InvalidCast {
                    span,
                    code: self.config.cast_code,
                    source: self.render(source),
                    target: self.render(target),
                },
            );
        } else if !symbol.safe && self.config.unsafe_cast_warnings {
            Self::report(
                sink,
                &TypeCheckError::UnsafeCast {
                    span,
                    source: self.render(source),
                    target: self.render(target),
                },
            );
        }
        symbol
    }

    /// Resolve a conversion expression, reporting when no operator exists.
    pub fn resolve_conversion(
        &self,
        span: Span,
        source: TypeId,
        target: TypeId,
        sink: &mut impl DiagnosticSink,
    ) -> OperatorSymbol {
        if self.tag(source) == Tag::Error || self.tag(target) == Tag::Error {
            return OperatorSymbol::NOT_FOUND;
        }

        let symbol = self.get_conversion_operator(source, target);
        if symbol.is_not_found() {
            Self::report(
                sink,
                &TypeCheckError::InvalidConversion {
                    span,
                    code: self.config.conversion_code,
                    source: self.render(source),
                    target: self.render(target),
                },
            );
        }
        symbol
    }

    /// Validate the constraint of a `json<constraint>` annotation.
    ///
    /// The constraint must be a struct whose every field is
    /// JSON-representable.
    pub fn check_json_constraint(
        &self,
        span: Span,
        constraint: TypeId,
        sink: &mut impl DiagnosticSink,
    ) -> bool {
        if self.tag(constraint) == Tag::Error || self.check_struct_to_json_compatibility(constraint)
        {
            return true;
        }

        Self::report(
            sink,
            &TypeCheckError::InvalidJsonConstraint {
                span,
                constraint: self.render(constraint),
            },
        );
        false
    }
}
