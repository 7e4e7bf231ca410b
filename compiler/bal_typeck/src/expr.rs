//! Expression-side view the checker annotates.

use bal_ir::Span;
use bal_types::{OperatorSymbol, TypeId};

/// An expression as seen by the checker: where it is, its type, and any
/// implicit casts the checker attached.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TypedExpr {
    pub span: Span,
    pub ty: TypeId,
    /// Outermost implicit cast, if any.
    pub implicit_cast: Option<Box<ImplicitCast>>,
}

/// A cast inserted by the checker around an expression.
///
/// Each layer owns the one it wraps; `inner == None` means the layer wraps
/// the bare expression.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ImplicitCast {
    pub span: Span,
    /// Type of the value after the cast.
    pub target: TypeId,
    pub symbol: OperatorSymbol,
    pub inner: Option<Box<ImplicitCast>>,
}

impl TypedExpr {
    pub fn new(span: Span, ty: TypeId) -> Self {
        TypedExpr {
            span,
            ty,
            implicit_cast: None,
        }
    }

    /// Type of the value after all implicit casts run.
    pub fn effective_type(&self) -> TypeId {
        self.implicit_cast.as_ref().map_or(self.ty, |cast| cast.target)
    }

    /// Number of implicit cast layers.
    pub fn cast_depth(&self) -> usize {
        let mut depth = 0;
        let mut layer = self.implicit_cast.as_deref();
        while let Some(cast) = layer {
            depth += 1;
            layer = cast.inner.as_deref();
        }
        depth
    }
}
