//! Source-level rendering of types for diagnostics.

use bal_ir::StringLookup;

use super::TypeTable;
use crate::{TypeData, TypeId};

impl TypeTable {
    /// Render a type the way it is written in source.
    ///
    /// `int[][]`, `json<Person>`, `function (int, string) returns (boolean)`.
    pub fn display(&self, id: TypeId, names: &dyn StringLookup) -> String {
        let mut out = String::new();
        self.write_type(&mut out, id, names);
        out
    }

    fn write_type(&self, out: &mut String, id: TypeId, names: &dyn StringLookup) {
        if id.is_invalid() {
            out.push_str("<invalid>");
            return;
        }
        match self.data(id) {
            TypeData::Json { constraint } => {
                out.push_str("json");
                if !self.identical(*constraint, TypeId::NONE) {
                    out.push('<');
                    self.write_type(out, *constraint, names);
                    out.push('>');
                }
            }
            TypeData::Array { element } => {
                self.write_type(out, *element, names);
                out.push_str("[]");
            }
            TypeData::Struct(_) | TypeData::Connector(_) | TypeData::Enum(_) => {
                if let Some(decl) = self.declaration(id) {
                    out.push_str(names.lookup(decl.name));
                }
            }
            TypeData::Invokable { params, rets } => {
                out.push_str("function ");
                self.write_list(out, params, names);
                if !rets.is_empty() {
                    out.push_str(" returns ");
                    self.write_list(out, rets, names);
                }
            }
            data => out.push_str(data.tag().name()),
        }
    }

    fn write_list(&self, out: &mut String, types: &[TypeId], names: &dyn StringLookup) {
        out.push('(');
        for (i, &ty) in types.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.write_type(out, ty, names);
        }
        out.push(')');
    }

    /// Render a comma-separated list of types, as used in multi-value messages.
    pub fn display_list(&self, types: &[TypeId], names: &dyn StringLookup) -> String {
        let mut out = String::new();
        for (i, &ty) in types.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.write_type(&mut out, ty, names);
        }
        out
    }
}
