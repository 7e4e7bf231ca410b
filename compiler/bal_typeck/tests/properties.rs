//! Property-based and whole-crate tests for the type checker.
//!
//! Types are drawn from a fixed universe covering every kind: built-ins,
//! structs (including a self-referential one), arrays, constrained `json`,
//! functions, connectors, enums, and a non-interned copy of `int`.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use bal_diagnostic::{Diagnostic, ErrorCode};
use bal_ir::{SharedInterner, Span};
use bal_typeck::TypeChecker;
use bal_types::{
    Opcode, OperatorKind, OperatorSymbol, OperatorTable, StructField, Tag, TypeData, TypeId,
    TypeTable,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use proptest::sample::Index;
use rayon::prelude::*;

// -- Universe --

struct Universe {
    interner: SharedInterner,
    types: TypeTable,
    operators: OperatorTable,
    all: Vec<TypeId>,
}

impl Universe {
    fn new() -> Self {
        let interner = SharedInterner::new();
        let mut types = TypeTable::new();
        let field = |name: &str, ty| StructField::new(interner.intern(name), ty);

        let person = types
            .struct_type(
                interner.intern("Person"),
                vec![field("name", TypeId::STRING), field("age", TypeId::INT)],
            )
            .unwrap();
        let named = types
            .struct_type(interner.intern("Named"), vec![field("name", TypeId::STRING)])
            .unwrap();
        let node = types.declare_struct(interner.intern("Node")).unwrap();
        types
            .define_struct_fields(node, vec![field("value", TypeId::INT), field("next", node)])
            .unwrap();
        let bag = types
            .struct_type(interner.intern("Bag"), vec![field("extra", TypeId::MAP)])
            .unwrap();

        let json_person = types.json(person);
        let ints = types.array(TypeId::INT);
        let anys = types.array(TypeId::ANY);
        let people = types.array(person);
        let jsons = types.array(TypeId::JSON);
        let int_grid = types.array(ints);
        let func = types.invokable(&[TypeId::INT], &[TypeId::STRING]);
        let client = types.connector(interner.intern("Client")).unwrap();
        let color = types
            .enum_type(
                interner.intern("Color"),
                vec![interner.intern("RED"), interner.intern("GREEN")],
            )
            .unwrap();
        let fresh_int = types.alloc(TypeData::Int).unwrap();

        let builtins = [
            TypeId::INT,
            TypeId::FLOAT,
            TypeId::STRING,
            TypeId::BOOLEAN,
            TypeId::BLOB,
            TypeId::TYPEDESC,
            TypeId::XML,
            TypeId::DATATABLE,
            TypeId::JSON,
            TypeId::ANY,
            TypeId::MAP,
            TypeId::NULL,
            TypeId::NONE,
            TypeId::ERROR,
        ];
        let all = builtins
            .into_iter()
            .chain([
                person,
                named,
                node,
                bag,
                json_person,
                ints,
                anys,
                people,
                jsons,
                int_grid,
                func,
                client,
                color,
                fresh_int,
            ])
            .collect();

        Universe {
            interner,
            types,
            operators: OperatorTable::with_builtins(),
            all,
        }
    }

    fn checker(&self) -> TypeChecker<'_> {
        TypeChecker::new(&self.types, &self.operators, &*self.interner)
    }

    fn pick(&self, index: Index) -> TypeId {
        *index.get(&self.all)
    }

    /// Targets `get_cast_operator` accepts without an invariant panic.
    fn is_castable_target(&self, ty: TypeId) -> bool {
        !matches!(self.types.tag(ty), Tag::Enum | Tag::Error)
    }
}

// -- Properties --

proptest! {
    #[test]
    fn assignability_is_reflexive(t in any::<Index>()) {
        let u = Universe::new();
        let ty = u.pick(t);
        prop_assert!(u.checker().is_assignable(ty, ty));
    }

    #[test]
    fn everything_is_assignable_to_error(t in any::<Index>()) {
        let u = Universe::new();
        prop_assert!(u.checker().is_assignable(u.pick(t), TypeId::ERROR));
    }

    #[test]
    fn null_goes_exactly_to_reference_types(t in any::<Index>()) {
        let u = Universe::new();
        let ty = u.pick(t);
        let is_value = u.types.tag(ty).is_value_type();
        prop_assert_eq!(u.checker().is_assignable(TypeId::NULL, ty), !is_value);
    }

    #[test]
    fn identity_cast_is_a_safe_nop(t in any::<Index>()) {
        let u = Universe::new();
        let ty = u.pick(t);
        prop_assert_eq!(
            u.checker().get_cast_operator(ty, ty),
            OperatorSymbol::new(OperatorKind::Cast, ty, ty, true, Opcode::Nop)
        );
    }

    #[test]
    fn identity_conversion_is_not_found(t in any::<Index>()) {
        let u = Universe::new();
        let ty = u.pick(t);
        prop_assert!(u.checker().get_conversion_operator(ty, ty).is_not_found());
    }

    #[test]
    fn conversions_are_never_safe(a in any::<Index>(), b in any::<Index>()) {
        let u = Universe::new();
        let found = u.checker().get_conversion_operator(u.pick(a), u.pick(b));
        prop_assert!(found.is_not_found() || !found.safe);
    }

    #[test]
    fn casts_resolve_without_panicking(a in any::<Index>(), b in any::<Index>()) {
        let u = Universe::new();
        let (source, target) = (u.pick(a), u.pick(b));
        prop_assume!(u.is_castable_target(target));
        let symbol = u.checker().get_cast_operator(source, target);
        if symbol.is_not_found() {
            prop_assert_eq!(symbol, OperatorSymbol::NOT_FOUND);
        }
    }

    #[test]
    fn check_type_reports_at_most_once(a in any::<Index>(), b in any::<Index>()) {
        let u = Universe::new();
        let (actual, expected) = (u.pick(a), u.pick(b));
        let checker = u.checker();
        let mut sink: Vec<Diagnostic> = Vec::new();

        let result = checker.check_type(Span::DUMMY, actual, expected, ErrorCode::E2001, &mut sink);

        prop_assert!(sink.len() <= 1);
        if sink.is_empty() {
            prop_assert!(result == actual || result == TypeId::ERROR);
        } else {
            prop_assert_eq!(result, TypeId::ERROR);
            prop_assert!(!checker.is_assignable(actual, expected));
            prop_assert!(!checker.is_implicit_cast_possible(actual, expected));
        }
    }

    #[test]
    fn implicit_casts_pass_check_type(a in any::<Index>(), b in any::<Index>()) {
        let u = Universe::new();
        let (actual, expected) = (u.pick(a), u.pick(b));
        let checker = u.checker();
        if checker.is_implicit_cast_possible(actual, expected) {
            let mut sink: Vec<Diagnostic> = Vec::new();
            checker.check_type(Span::DUMMY, actual, expected, ErrorCode::E2001, &mut sink);
            prop_assert!(sink.is_empty());
        }
    }
}

// -- Whole-crate checks --

#[test]
fn one_checker_serves_many_threads() {
    bal_typeck::init_tracing();
    let u = Universe::new();
    let checker = u.checker();
    let pairs: Vec<(TypeId, TypeId)> = u
        .all
        .iter()
        .flat_map(|&a| u.all.iter().map(move |&b| (a, b)))
        .filter(|&(_, b)| u.is_castable_target(b))
        .collect();

    let resolve = |&(a, b): &(TypeId, TypeId)| {
        (
            checker.is_assignable(a, b),
            checker.get_cast_operator(a, b),
            checker.get_conversion_operator(a, b),
        )
    };
    let sequential: Vec<_> = pairs.iter().map(resolve).collect();
    let parallel: Vec<_> = pairs.par_iter().map(resolve).collect();

    assert_eq!(parallel, sequential);
}

#[test]
fn deeply_nested_arrays_do_not_overflow() {
    const DEPTH: u32 = 20_000;

    let u = Universe::new();
    let mut types = u.types;
    let deep_ints = types.array_of(TypeId::INT, DEPTH);
    let deep_floats = types.array_of(TypeId::FLOAT, DEPTH);
    let deep_jsons = types.array_of(TypeId::JSON, DEPTH);
    let checker = TypeChecker::new(&types, &u.operators, &*u.interner);

    assert!(checker.check_array_equivalent(deep_ints, deep_ints));
    assert!(!checker.check_array_equivalent(deep_ints, deep_floats));
    assert!(!checker.is_assignable(deep_ints, deep_floats));
    assert!(!checker.is_implicit_cast_possible(deep_ints, deep_floats));
    assert!(checker.get_cast_operator(deep_ints, deep_floats).is_not_found());
    assert_eq!(
        checker.get_cast_operator(deep_jsons, TypeId::JSON).opcode,
        Opcode::Nop
    );
    assert_eq!(checker.get_element_type(deep_floats), TypeId::FLOAT);
}
