//! The language's built-in cast and conversion operators.

use super::{Opcode, OperatorKind, OperatorTable};
use crate::TypeId;

/// `(source, target, opcode)`, all safe.
const IMPLICIT_CASTS: &[(TypeId, TypeId, Opcode)] = &[
    (TypeId::INT, TypeId::FLOAT, Opcode::IntToFloat),
    (TypeId::INT, TypeId::JSON, Opcode::IntToJson),
    (TypeId::FLOAT, TypeId::JSON, Opcode::FloatToJson),
    (TypeId::STRING, TypeId::JSON, Opcode::StringToJson),
    (TypeId::BOOLEAN, TypeId::JSON, Opcode::BooleanToJson),
    (TypeId::INT, TypeId::ANY, Opcode::IntToAny),
    (TypeId::FLOAT, TypeId::ANY, Opcode::FloatToAny),
    (TypeId::STRING, TypeId::ANY, Opcode::StringToAny),
    (TypeId::BOOLEAN, TypeId::ANY, Opcode::BooleanToAny),
    (TypeId::BLOB, TypeId::ANY, Opcode::BlobToAny),
    // Type descriptors are already references at run time
    (TypeId::TYPEDESC, TypeId::ANY, Opcode::Nop),
];

/// `(source, target, safe, opcode)`.
const CASTS: &[(TypeId, TypeId, bool, Opcode)] = &[
    (TypeId::FLOAT, TypeId::INT, true, Opcode::FloatToInt),
    (TypeId::ANY, TypeId::INT, false, Opcode::AnyToInt),
    (TypeId::ANY, TypeId::FLOAT, false, Opcode::AnyToFloat),
    (TypeId::ANY, TypeId::STRING, false, Opcode::AnyToString),
    (TypeId::ANY, TypeId::BOOLEAN, false, Opcode::AnyToBoolean),
    (TypeId::ANY, TypeId::BLOB, false, Opcode::AnyToBlob),
    (TypeId::ANY, TypeId::TYPEDESC, false, Opcode::AnyToTypeDesc),
    (TypeId::ANY, TypeId::JSON, false, Opcode::AnyToJson),
    (TypeId::ANY, TypeId::XML, false, Opcode::AnyToXml),
    (TypeId::ANY, TypeId::MAP, false, Opcode::AnyToMap),
    (TypeId::ANY, TypeId::DATATABLE, false, Opcode::AnyToDatatable),
    (TypeId::JSON, TypeId::INT, false, Opcode::JsonToInt),
    (TypeId::JSON, TypeId::FLOAT, false, Opcode::JsonToFloat),
    (TypeId::JSON, TypeId::STRING, false, Opcode::JsonToString),
    (TypeId::JSON, TypeId::BOOLEAN, false, Opcode::JsonToBoolean),
];

/// `(source, target, opcode)`; conversions can always fail.
const CONVERSIONS: &[(TypeId, TypeId, Opcode)] = &[
    (TypeId::INT, TypeId::STRING, Opcode::IntToString),
    (TypeId::FLOAT, TypeId::STRING, Opcode::FloatToString),
    (TypeId::BOOLEAN, TypeId::STRING, Opcode::BooleanToString),
    (TypeId::STRING, TypeId::INT, Opcode::StringToInt),
    (TypeId::STRING, TypeId::FLOAT, Opcode::StringToFloat),
    (TypeId::STRING, TypeId::BOOLEAN, Opcode::StringToBoolean),
    (TypeId::INT, TypeId::BOOLEAN, Opcode::IntToBoolean),
    (TypeId::FLOAT, TypeId::BOOLEAN, Opcode::FloatToBoolean),
    (TypeId::XML, TypeId::STRING, Opcode::XmlToString),
    (TypeId::STRING, TypeId::XML, Opcode::StringToXml),
    (TypeId::JSON, TypeId::STRING, Opcode::JsonSerialize),
    (TypeId::STRING, TypeId::JSON, Opcode::JsonParse),
    (TypeId::MAP, TypeId::JSON, Opcode::MapToJson),
    (TypeId::JSON, TypeId::MAP, Opcode::JsonToMap),
];

pub(super) fn register_all(table: &mut OperatorTable) {
    for &(source, target, opcode) in IMPLICIT_CASTS {
        table.register(OperatorKind::ImplicitCast, source, target, true, opcode);
    }
    for &(source, target, safe, opcode) in CASTS {
        table.register(OperatorKind::Cast, source, target, safe, opcode);
    }
    for &(source, target, opcode) in CONVERSIONS {
        table.register(OperatorKind::Conversion, source, target, false, opcode);
    }
}
