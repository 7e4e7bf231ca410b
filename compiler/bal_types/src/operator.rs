//! Cast and conversion operators.
//!
//! An [`OperatorSymbol`] is the resolved outcome of asking "how does a value
//! of type S become a value of type T?". The checker synthesizes symbols for
//! structural cases (identity, struct/map/json shapes, arrays) and asks an
//! [`OperatorResolver`] for the rest.

mod builtins;

use rustc_hash::FxHashMap;

use crate::TypeId;

/// Operator namespace.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum OperatorKind {
    /// Explicit `(T) expr` cast.
    Cast,
    /// Cast the checker may insert without a source annotation.
    ImplicitCast,
    /// Explicit `<T> expr` conversion.
    Conversion,
}

/// Runtime operation performed by an operator.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Opcode {
    /// No runtime work.
    Nop,
    /// Runtime type check of a reference value.
    CheckCast,
    StructToMap,
    StructToJson,
    MapToStruct,
    JsonToStruct,

    // Boxing and widening
    IntToFloat,
    IntToJson,
    FloatToJson,
    StringToJson,
    BooleanToJson,
    IntToAny,
    FloatToAny,
    StringToAny,
    BooleanToAny,
    BlobToAny,

    // Unboxing and narrowing
    FloatToInt,
    AnyToInt,
    AnyToFloat,
    AnyToString,
    AnyToBoolean,
    AnyToBlob,
    AnyToTypeDesc,
    AnyToJson,
    AnyToXml,
    AnyToMap,
    AnyToDatatable,
    JsonToInt,
    JsonToFloat,
    JsonToString,
    JsonToBoolean,

    // Value conversions
    IntToString,
    FloatToString,
    BooleanToString,
    StringToInt,
    StringToFloat,
    StringToBoolean,
    IntToBoolean,
    FloatToBoolean,
    XmlToString,
    StringToXml,
    /// Serialize a `json` value to its text form.
    JsonSerialize,
    /// Parse text into a `json` value.
    JsonParse,
    MapToJson,
    JsonToMap,

    /// Operator registered by an embedder; the payload is theirs to interpret.
    Custom(u16),
}

/// A resolved cast, implicit cast, or conversion.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct OperatorSymbol {
    pub kind: OperatorKind,
    pub source: TypeId,
    pub target: TypeId,
    /// The operation cannot fail at run time.
    pub safe: bool,
    pub opcode: Opcode,
}

impl OperatorSymbol {
    /// The "no such operator" answer.
    pub const NOT_FOUND: OperatorSymbol = OperatorSymbol {
        kind: OperatorKind::Cast,
        source: TypeId::INVALID,
        target: TypeId::INVALID,
        safe: false,
        opcode: Opcode::Nop,
    };

    pub const fn new(
        kind: OperatorKind,
        source: TypeId,
        target: TypeId,
        safe: bool,
        opcode: Opcode,
    ) -> Self {
        OperatorSymbol {
            kind,
            source,
            target,
            safe,
            opcode,
        }
    }

    #[inline]
    pub const fn is_found(&self) -> bool {
        !self.source.is_invalid()
    }

    #[inline]
    pub const fn is_not_found(&self) -> bool {
        self.source.is_invalid()
    }

    /// `Some(self)` unless this is [`NOT_FOUND`](Self::NOT_FOUND).
    #[inline]
    pub const fn found(self) -> Option<Self> {
        if self.is_found() {
            Some(self)
        } else {
            None
        }
    }
}

/// Lookup of registered operators by exact source and target type.
///
/// Callers pass canonical handles (see
/// [`TypeTable::canonical`](crate::TypeTable::canonical)). Returns
/// [`OperatorSymbol::NOT_FOUND`] when nothing is registered.
pub trait OperatorResolver {
    fn resolve(&self, kind: OperatorKind, source: TypeId, target: TypeId) -> OperatorSymbol;
}

/// Operator registry keyed by `(kind, source, target)`.
///
/// Implicit casts double as explicit casts: a [`OperatorKind::Cast`] lookup
/// falls back to the implicit entry for the same pair.
#[derive(Clone, Debug, Default)]
pub struct OperatorTable {
    entries: FxHashMap<(OperatorKind, TypeId, TypeId), OperatorSymbol>,
}

impl OperatorTable {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the language's built-in operators.
    pub fn with_builtins() -> Self {
        let mut table = Self::new();
        builtins::register_all(&mut table);
        table
    }

    /// Register an operator, returning the one it replaced.
    pub fn register(
        &mut self,
        kind: OperatorKind,
        source: TypeId,
        target: TypeId,
        safe: bool,
        opcode: Opcode,
    ) -> Option<OperatorSymbol> {
        let symbol = OperatorSymbol::new(kind, source, target, safe, opcode);
        self.entries.insert((kind, source, target), symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl OperatorResolver for OperatorTable {
    fn resolve(&self, kind: OperatorKind, source: TypeId, target: TypeId) -> OperatorSymbol {
        let direct = self.entries.get(&(kind, source, target));
        let symbol = match kind {
            OperatorKind::Cast => direct.or_else(|| {
                self.entries
                    .get(&(OperatorKind::ImplicitCast, source, target))
            }),
            OperatorKind::ImplicitCast | OperatorKind::Conversion => direct,
        };
        symbol.copied().unwrap_or(OperatorSymbol::NOT_FOUND)
    }
}

impl<R: OperatorResolver + ?Sized> OperatorResolver for &R {
    fn resolve(&self, kind: OperatorKind, source: TypeId, target: TypeId) -> OperatorSymbol {
        (**self).resolve(kind, source, target)
    }
}
