//! Type checker core implementation.
//!
//! `TypeChecker` answers compatibility questions over an immutable
//! [`TypeTable`] and an [`OperatorResolver`]. It holds no mutable state, so
//! one checker can serve many threads; recursive checks carry their own
//! per-call [`RecursionGuard`](guard::RecursionGuard).
//!
//! # Module Structure
//!
//! - `assign`: assignability and `check_type`
//! - `implicit`: implicit cast detection and insertion
//! - `cast`: explicit cast resolution
//! - `conversion`: explicit conversion resolution
//! - `structural`: struct, array, function, and JSON shape checks
//! - `report`: expression-level wrappers that emit diagnostics
//! - `guard`: in-progress set for cyclic type graphs

mod assign;
mod cast;
mod conversion;
mod guard;
mod implicit;
mod report;
mod structural;

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

use bal_diagnostic::DiagnosticSink;
use bal_ir::StringLookup;
use bal_types::{
    Opcode, OperatorKind, OperatorResolver, OperatorSymbol, OperatorTable, Tag, TypeId, TypeTable,
};

use crate::{CheckerConfig, TypeCheckError};

/// Type compatibility and operator resolution over a finished type table.
///
/// `R` is the operator registry; [`OperatorTable`] unless the embedder
/// supplies its own.
pub struct TypeChecker<'a, R = OperatorTable> {
    pub(crate) types: &'a TypeTable,
    pub(crate) operators: &'a R,
    /// Resolves declaration names when rendering types into diagnostics.
    pub(crate) names: &'a (dyn StringLookup + Sync),
    pub(crate) config: CheckerConfig,
}

impl<'a, R: OperatorResolver> TypeChecker<'a, R> {
    pub fn new(
        types: &'a TypeTable,
        operators: &'a R,
        names: &'a (dyn StringLookup + Sync),
    ) -> Self {
        TypeChecker {
            types,
            operators,
            names,
            config: CheckerConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: CheckerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn types(&self) -> &'a TypeTable {
        self.types
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Render a type for a diagnostic.
    pub fn render(&self, id: TypeId) -> String {
        self.types.display(id, self.names)
    }

    #[inline]
    pub(crate) fn tag(&self, id: TypeId) -> Tag {
        self.types.tag(id)
    }

    #[inline]
    pub(crate) fn is_value_type(&self, id: TypeId) -> bool {
        self.types.is_value_type(id)
    }

    /// Handle equality with structural fallback.
    #[inline]
    pub(crate) fn same(&self, a: TypeId, b: TypeId) -> bool {
        a == b || self.types.identical(a, b)
    }

    /// Constraint of a constrained `json`; `None` for unconstrained `json`
    /// and for every other type.
    pub(crate) fn json_constraint(&self, id: TypeId) -> Option<TypeId> {
        self.types
            .json_constraint(id)
            .filter(|&constraint| self.tag(constraint) != Tag::None)
    }

    /// Registry lookup on canonical handles.
    pub(crate) fn lookup_operator(
        &self,
        kind: OperatorKind,
        source: TypeId,
        target: TypeId,
    ) -> OperatorSymbol {
        self.operators.resolve(
            kind,
            self.types.canonical(source),
            self.types.canonical(target),
        )
    }

    pub(crate) fn report(sink: &mut impl DiagnosticSink, error: &TypeCheckError) {
        tracing::debug!(code = %error.code(), span = ?error.span(), "type error");
        sink.emit(error.to_diagnostic());
    }
}

pub(crate) const fn cast_symbol(
    source: TypeId,
    target: TypeId,
    safe: bool,
    opcode: Opcode,
) -> OperatorSymbol {
    OperatorSymbol::new(OperatorKind::Cast, source, target, safe, opcode)
}

pub(crate) const fn conversion_symbol(
    source: TypeId,
    target: TypeId,
    opcode: Opcode,
) -> OperatorSymbol {
    // Conversions re-shape data at run time and can always fail
    OperatorSymbol::new(OperatorKind::Conversion, source, target, false, opcode)
}
