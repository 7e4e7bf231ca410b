//! Diagnostic system for semantic-analysis errors.
//!
//! A diagnostic is data: an [`ErrorCode`], a primary span, and the message
//! arguments the code's template is rendered with. Checkers never raise on a
//! user-facing type error; they push a [`Diagnostic`] into a
//! [`DiagnosticSink`] and keep going.
//!
//! [`DiagnosticQueue`] is the standard sink: it enforces an error limit,
//! drops duplicates and follow-on errors, and hands diagnostics back sorted by
//! source position.

mod diagnostic;
mod error_code;
pub mod queue;
mod sink;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
pub use sink::DiagnosticSink;
