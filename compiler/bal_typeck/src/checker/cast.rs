//! Explicit cast resolution.
//!
//! Dispatch is on the target's tag first, then on the source. Casts never
//! change a value's representation beyond boxing; anything that re-shapes
//! data is a conversion (see `conversion`).

use bal_types::{Opcode, OperatorKind, OperatorResolver, OperatorSymbol, Tag, TypeId};

use super::{cast_symbol, TypeChecker};
use crate::ensure_sufficient_stack;

impl<R: OperatorResolver> TypeChecker<'_, R> {
    /// Resolve the operator for `(target) source`.
    ///
    /// Returns [`OperatorSymbol::NOT_FOUND`] when the cast is illegal.
    ///
    /// # Panics
    /// Panics if `target` is an enum or the error type. No cast can produce
    /// those; callers must reject such casts before asking.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn get_cast_operator(&self, source: TypeId, target: TypeId) -> OperatorSymbol {
        if self.same(source, target) {
            return cast_symbol(source, target, true, Opcode::Nop);
        }

        let source_tag = self.tag(source);
        match self.tag(target) {
            Tag::Any => {
                if source_tag.is_value_type() {
                    // Boxing needs a registered operator
                    self.lookup_operator(OperatorKind::Cast, source, target)
                } else {
                    cast_symbol(source, target, true, Opcode::Nop)
                }
            }

            Tag::Json => {
                if self.is_constrained_type_assignable(source, target) {
                    cast_symbol(source, target, true, Opcode::Nop)
                } else if source_tag == Tag::Array {
                    self.explicit_array_cast(target, source, target, source)
                } else if self.json_constraint(target).is_some() {
                    OperatorSymbol::NOT_FOUND
                } else {
                    self.lookup_operator(OperatorKind::Cast, source, target)
                }
            }

            Tag::Array => self.explicit_array_cast(target, source, target, source),

            Tag::Struct => match source_tag {
                Tag::Any => cast_symbol(source, target, false, Opcode::CheckCast),
                Tag::Struct if self.check_struct_equivalency(source, target) => {
                    cast_symbol(source, target, true, Opcode::Nop)
                }
                Tag::Struct => {
                    tracing::debug!(?source, ?target, "struct cast falls back to run-time check");
                    cast_symbol(source, target, false, Opcode::CheckCast)
                }
                _ => OperatorSymbol::NOT_FOUND,
            },

            Tag::Connector => match source_tag {
                Tag::Any => cast_symbol(source, target, false, Opcode::CheckCast),
                _ => OperatorSymbol::NOT_FOUND,
            },

            Tag::Enum | Tag::Error => self.invalid_cast_target(source, target),

            Tag::Int
            | Tag::Float
            | Tag::String
            | Tag::Boolean
            | Tag::Blob
            | Tag::TypeDesc
            | Tag::Xml
            | Tag::Datatable
            | Tag::Map
            | Tag::Invokable
            | Tag::Null
            | Tag::None => {
                if source_tag == Tag::Array {
                    OperatorSymbol::NOT_FOUND
                } else {
                    self.lookup_operator(OperatorKind::Cast, source, target)
                }
            }
        }
    }

    /// Cast where at least one side is an array.
    ///
    /// Walks `target` and `source` in lockstep; the resulting symbol always
    /// names the outer pair `(outer_source, outer_target)`.
    fn explicit_array_cast(
        &self,
        target: TypeId,
        source: TypeId,
        outer_target: TypeId,
        outer_source: TypeId,
    ) -> OperatorSymbol {
        match (
            self.types.array_element(target),
            self.types.array_element(source),
        ) {
            (Some(target_elem), Some(source_elem)) => ensure_sufficient_stack(|| {
                self.explicit_array_cast(target_elem, source_elem, outer_target, outer_source)
            }),

            (Some(_), None) => {
                let source_tag = self.tag(source);
                let json_to_json_array = source_tag == Tag::Json
                    && self.tag(self.types.element_type(target)) == Tag::Json;
                if json_to_json_array || source_tag == Tag::Any {
                    cast_symbol(outer_source, outer_target, false, Opcode::CheckCast)
                } else {
                    OperatorSymbol::NOT_FOUND
                }
            }

            (None, Some(source_elem)) => match self.tag(target) {
                Tag::Json => ensure_sufficient_stack(|| {
                    self.explicit_array_cast(TypeId::JSON, source_elem, outer_target, outer_source)
                }),
                Tag::Any => cast_symbol(outer_source, outer_target, true, Opcode::Nop),
                _ => OperatorSymbol::NOT_FOUND,
            },

            (None, None) => {
                if self.same(source, target)
                    || (self.tag(target) == Tag::Any && !self.is_value_type(source))
                {
                    cast_symbol(outer_source, outer_target, true, Opcode::Nop)
                } else if !self.is_value_type(target) && self.tag(source) == Tag::Any {
                    cast_symbol(outer_source, outer_target, false, Opcode::CheckCast)
                } else {
                    OperatorSymbol::NOT_FOUND
                }
            }
        }
    }

    #[cold]
    #[inline(never)]
    fn invalid_cast_target(&self, source: TypeId, target: TypeId) -> ! {
        tracing::error!(
            ?source,
            ?target,
            tag = %self.tag(target),
            "cast requested to a type that no cast can produce"
        );
        panic!(
            "internal error: cast from '{}' to '{}' requested; {} types have no cast operators",
            self.render(source),
            self.render(target),
            self.tag(target),
        );
    }
}
