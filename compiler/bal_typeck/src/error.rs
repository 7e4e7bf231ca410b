//! Type checking errors with structured information.
//!
//! Types are stored pre-rendered so an error outlives the type table and can
//! be compared in tests without one.

use bal_diagnostic::{Diagnostic, ErrorCode};
use bal_ir::Span;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeCheckError {
    /// `found` is neither assignable nor implicitly castable to `expected`.
    Incompatible {
        span: Span,
        code: ErrorCode,
        expected: String,
        found: String,
    },

    /// No cast operator from `source` to `target`.
    InvalidCast {
        span: Span,
        code: ErrorCode,
        source: String,
        target: String,
    },

    /// No conversion operator from `source` to `target`.
    InvalidConversion {
        span: Span,
        code: ErrorCode,
        source: String,
        target: String,
    },

    /// Cast accepted, but it needs a run-time check.
    UnsafeCast {
        span: Span,
        source: String,
        target: String,
    },

    /// `constraint` cannot parameterize `json`.
    InvalidJsonConstraint { span: Span, constraint: String },
}

impl TypeCheckError {
    /// Get the primary span of this error.
    pub fn span(&self) -> Span {
        match self {
            TypeCheckError::Incompatible { span, .. }
            | TypeCheckError::InvalidCast { span, .. }
            | TypeCheckError::InvalidConversion { span, .. }
            | TypeCheckError::UnsafeCast { span, .. }
            | TypeCheckError::InvalidJsonConstraint { span, .. } => *span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            TypeCheckError::Incompatible { code, .. }
            | TypeCheckError::InvalidCast { code, .. }
            | TypeCheckError::InvalidConversion { code, .. } => *code,
            TypeCheckError::UnsafeCast { .. } => ErrorCode::W2001,
            TypeCheckError::InvalidJsonConstraint { .. } => ErrorCode::E2005,
        }
    }

    /// Convert this error to a diagnostic.
    ///
    /// Mismatches carry `[expected, found]`; casts and conversions carry
    /// `[source, target]`.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let args = match self {
            TypeCheckError::Incompatible {
                expected, found, ..
            } => vec![expected.clone(), found.clone()],
            TypeCheckError::InvalidCast { source, target, .. }
            | TypeCheckError::InvalidConversion { source, target, .. }
            | TypeCheckError::UnsafeCast { source, target, .. } => {
                vec![source.clone(), target.clone()]
            }
            TypeCheckError::InvalidJsonConstraint { constraint, .. } => vec![constraint.clone()],
        };
        Diagnostic::from_template(self.code(), self.span(), args)
    }
}
