//! Explicit conversion resolution (`<T> expr`).

use bal_types::{Opcode, OperatorKind, OperatorResolver, OperatorSymbol, Tag, TypeId};

use super::{conversion_symbol, TypeChecker};

impl<R: OperatorResolver> TypeChecker<'_, R> {
    /// Resolve the operator for `<target> source`.
    ///
    /// Converting a type to itself is not a conversion and yields
    /// [`OperatorSymbol::NOT_FOUND`]. Every conversion found is unsafe.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn get_conversion_operator(&self, source: TypeId, target: TypeId) -> OperatorSymbol {
        if self.same(source, target) {
            return OperatorSymbol::NOT_FOUND;
        }

        let source_tag = self.tag(source);
        match self.tag(target) {
            Tag::Map => match source_tag {
                Tag::Struct => conversion_symbol(source, target, Opcode::StructToMap),
                _ => self.lookup_operator(OperatorKind::Conversion, source, target),
            },

            Tag::Json => match source_tag {
                Tag::Struct if self.check_struct_to_json_convertibility(source) => {
                    conversion_symbol(source, target, Opcode::StructToJson)
                }
                Tag::Struct => OperatorSymbol::NOT_FOUND,
                _ => self.lookup_operator(OperatorKind::Conversion, source, target),
            },

            Tag::Struct => match source_tag {
                Tag::Map => conversion_symbol(source, target, Opcode::MapToStruct),
                Tag::Json => conversion_symbol(source, target, Opcode::JsonToStruct),
                _ => OperatorSymbol::NOT_FOUND,
            },

            Tag::Array | Tag::Any | Tag::Connector | Tag::Enum | Tag::Error => {
                OperatorSymbol::NOT_FOUND
            }

            Tag::Int
            | Tag::Float
            | Tag::String
            | Tag::Boolean
            | Tag::Blob
            | Tag::TypeDesc
            | Tag::Xml
            | Tag::Datatable
            | Tag::Invokable
            | Tag::Null
            | Tag::None => self.lookup_operator(OperatorKind::Conversion, source, target),
        }
    }
}
