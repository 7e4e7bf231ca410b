//! Bal Typeck - type compatibility and operator resolution.
//!
//! Given an actual and an expected type, the checker decides whether a value
//! is directly assignable, whether an implicit cast may be inserted, which
//! run-time operation realizes an explicit cast, and which realizes an
//! explicit conversion between record, map, and JSON representations.
//!
//! # Main Entry Points
//!
//! - [`TypeChecker::check_type`]: assignability with diagnostics
//! - [`TypeChecker::get_cast_operator`]: `(T) expr`
//! - [`TypeChecker::get_conversion_operator`]: `<T> expr`
//! - [`TypeChecker::check_expr_type`], [`TypeChecker::resolve_cast`],
//!   [`TypeChecker::resolve_conversion`]: expression-level wrappers
//!
//! The type table and operator registry are read-only here. A checker is
//! `Sync` whenever its operator resolver is.

mod checker;
mod config;
mod error;
mod expr;
mod logging;
mod stack;

pub use checker::TypeChecker;
pub use config::CheckerConfig;
pub use error::TypeCheckError;
pub use expr::{ImplicitCast, TypedExpr};
pub use logging::init_tracing;
pub use stack::ensure_sufficient_stack;
