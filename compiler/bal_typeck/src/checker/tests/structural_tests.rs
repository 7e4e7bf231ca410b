//! Tests for struct, array, function, and JSON shape checks.

use bal_types::{TypeData, TypeId};
use pretty_assertions::assert_eq;

use super::Fixture;
use crate::checker::guard::{CheckKind, RecursionGuard};

#[test]
fn wider_struct_is_equivalent_to_narrower() {
    let mut fx = Fixture::new();
    let xy = fx.struct_type("XY", &[("x", TypeId::INT), ("y", TypeId::STRING)]);
    let x = fx.struct_type("X", &[("x", TypeId::INT)]);
    let checker = fx.checker();

    assert!(checker.check_struct_equivalency(xy, x));
    assert!(!checker.check_struct_equivalency(x, xy));
}

#[test]
fn struct_equivalence_is_positional() {
    let mut fx = Fixture::new();
    let yx = fx.struct_type("YX", &[("y", TypeId::INT), ("x", TypeId::INT)]);
    let x = fx.struct_type("X", &[("x", TypeId::INT)]);
    let checker = fx.checker();

    // `x` exists in YX, but not at index 0
    assert!(!checker.check_struct_equivalency(yx, x));
}

#[test]
fn struct_fields_must_be_assignable() {
    let mut fx = Fixture::new();
    let person = fx.person();
    let json_person = fx.types.json(person);
    let narrow = fx.struct_type("Doc", &[("body", json_person)]);
    let wide = fx.struct_type("AnyDoc", &[("body", TypeId::JSON)]);
    let floaty = fx.struct_type("F", &[("body", TypeId::FLOAT)]);
    let inty = fx.struct_type("I", &[("body", TypeId::INT)]);
    let checker = fx.checker();

    assert!(checker.check_struct_equivalency(narrow, wide));
    assert!(!checker.check_struct_equivalency(wide, narrow));
    // Implicit casts do not make fields equivalent
    assert!(!checker.check_struct_equivalency(inty, floaty));
}

#[test]
fn equivalency_needs_two_structs() {
    let mut fx = Fixture::new();
    let person = fx.person();
    let checker = fx.checker();
    assert!(!checker.check_struct_equivalency(TypeId::MAP, person));
    assert!(!checker.check_struct_equivalency(person, TypeId::ANY));
}

#[test]
fn array_equivalence_recurses_to_the_base() {
    let mut fx = Fixture::new();
    let grid = fx.types.array_of(TypeId::INT, 2);
    let fresh_int = fx.types.alloc(TypeData::Int).unwrap();
    let fresh_grid = fx.types.array_of(fresh_int, 2);
    let float_grid = fx.types.array_of(TypeId::FLOAT, 2);
    let cube = fx.types.array_of(TypeId::INT, 3);
    let checker = fx.checker();

    assert!(checker.check_array_equivalent(fresh_grid, grid));
    assert!(!checker.check_array_equivalent(float_grid, grid));
    assert!(!checker.check_array_equivalent(cube, grid));
}

#[test]
fn function_equivalence() {
    let mut fx = Fixture::new();
    let f = fx.types.invokable(&[TypeId::INT], &[TypeId::STRING]);
    let g = fx.types.invokable(&[TypeId::INT], &[TypeId::STRING, TypeId::INT]);
    let checker = fx.checker();

    assert!(checker.check_function_type_equivalent(f, f));
    assert!(!checker.check_function_type_equivalent(f, g));
    assert!(!checker.check_function_type_equivalent(f, TypeId::INT));
}

#[test]
fn element_type_strips_every_dimension() {
    let mut fx = Fixture::new();
    let person = fx.person();
    let people_cube = fx.types.array_of(person, 3);
    let checker = fx.checker();

    assert_eq!(checker.get_element_type(people_cube), person);
    assert_eq!(checker.get_element_type(TypeId::JSON), TypeId::JSON);
}

#[test]
fn json_compatible_structs() {
    let mut fx = Fixture::new();
    let address = fx.struct_type("Address", &[("city", TypeId::STRING)]);
    let tags = fx.types.array(TypeId::STRING);
    let nested = fx.types.array_of(address, 2);
    let person = fx.struct_type(
        "Person",
        &[
            ("name", TypeId::STRING),
            ("photo", TypeId::BLOB),
            ("home", address),
            ("tags", tags),
            ("past", nested),
            ("raw", TypeId::JSON),
        ],
    );
    let checker = fx.checker();

    assert!(checker.check_struct_to_json_compatibility(address));
    assert!(checker.check_struct_to_json_compatibility(person));
    assert!(!checker.check_struct_to_json_compatibility(TypeId::JSON));
}

#[test]
fn map_and_any_fields_are_only_convertible() {
    let mut fx = Fixture::new();
    let with_map = fx.struct_type("WithMap", &[("extra", TypeId::MAP)]);
    let with_any = fx.struct_type("WithAny", &[("extra", TypeId::ANY)]);
    let with_xml = fx.struct_type("WithXml", &[("doc", TypeId::XML)]);
    let checker = fx.checker();

    for ty in [with_map, with_any] {
        assert!(!checker.check_struct_to_json_compatibility(ty));
        assert!(checker.check_struct_to_json_convertibility(ty));
    }
    assert!(!checker.check_struct_to_json_compatibility(with_xml));
    assert!(!checker.check_struct_to_json_convertibility(with_xml));
}

#[test]
fn self_referential_struct_terminates() {
    let mut fx = Fixture::new();
    let node = fx.declare("Node");
    let children = fx.types.array(node);
    fx.define(
        node,
        &[("value", TypeId::INT), ("next", node), ("children", children)],
    );
    let checker = fx.checker();

    assert!(checker.check_struct_to_json_compatibility(node));
    assert!(checker.check_struct_to_json_convertibility(node));
}

#[test]
fn mutually_recursive_structs_terminate() {
    let mut fx = Fixture::new();
    let a = fx.declare("A");
    let b = fx.declare("B");
    fx.define(a, &[("b", b)]);
    fx.define(b, &[("a", a), ("x", TypeId::XML)]);
    let checker = fx.checker();

    // The cycle itself is fine; the xml field is not
    assert!(!checker.check_struct_to_json_compatibility(a));
    assert!(!checker.check_struct_to_json_compatibility(b));

    let mut fx = Fixture::new();
    let a = fx.declare("A");
    let b = fx.declare("B");
    fx.define(a, &[("b", b), ("n", TypeId::INT)]);
    fx.define(b, &[("a", a)]);
    let checker = fx.checker();
    assert!(checker.check_struct_to_json_compatibility(a));
    assert!(checker.check_struct_to_json_convertibility(b));
}

#[test]
fn recursion_guard_short_circuits_reentry() {
    let mut guard = RecursionGuard::new();
    let outer = guard.visit(CheckKind::JsonCompatible, TypeId::INT, TypeId::JSON, |guard| {
        assert_eq!(guard.depth(), 1);
        // Same pair again: assumed satisfied without running the check
        let reentered = guard.visit(CheckKind::JsonCompatible, TypeId::INT, TypeId::JSON, |_| false);
        // Different kind is tracked separately
        let other = guard.visit(CheckKind::JsonConvertible, TypeId::INT, TypeId::JSON, |_| false);
        reentered && !other
    });
    assert!(outer);
    assert_eq!(guard.depth(), 0);
}

#[test]
fn recursion_guard_reuses_finished_results() {
    let mut guard = RecursionGuard::new();
    assert!(!guard.visit(CheckKind::JsonCompatible, TypeId::XML, TypeId::JSON, |_| false));
    assert_eq!(guard.finished(), 1);

    // A finished pair is answered without running the check again
    let again = guard.visit(CheckKind::JsonCompatible, TypeId::XML, TypeId::JSON, |_| {
        panic!("finished pair checked twice")
    });
    assert!(!again);
    assert_eq!(guard.finished(), 1);
}

/// `L0 { n: int }`, then `Li { left: L(i-1), right: L(i-1) }`.
fn shared_struct_ladder(fx: &mut Fixture, depth: usize, leaf_field: TypeId) -> TypeId {
    let mut below = fx.struct_type("L0", &[("n", leaf_field)]);
    for level in 1..=depth {
        below = fx.struct_type(&format!("L{level}"), &[("left", below), ("right", below)]);
    }
    below
}

#[test]
fn shared_struct_shapes_are_checked_once() {
    let mut fx = Fixture::new();
    let top = shared_struct_ladder(&mut fx, 64, TypeId::INT);
    let checker = fx.checker();

    // Without reuse this visits 2^64 paths
    assert!(checker.check_struct_to_json_compatibility(top));
    assert!(checker.check_struct_to_json_convertibility(top));
}

#[test]
fn shared_struct_shapes_fail_fast() {
    let mut fx = Fixture::new();
    let top = shared_struct_ladder(&mut fx, 64, TypeId::XML);
    let checker = fx.checker();

    assert!(!checker.check_struct_to_json_compatibility(top));
    assert!(checker.get_conversion_operator(top, TypeId::JSON).is_not_found());
}

#[test]
fn annotation_field_types() {
    let mut fx = Fixture::new();
    let strings = fx.types.array(TypeId::STRING);
    let grid = fx.types.array_of(TypeId::INT, 2);
    let person = fx.person();
    let checker = fx.checker();

    assert!(checker.is_annotation_field_type(TypeId::INT));
    assert!(checker.is_annotation_field_type(TypeId::TYPEDESC));
    assert!(checker.is_annotation_field_type(strings));
    assert!(!checker.is_annotation_field_type(grid));
    assert!(!checker.is_annotation_field_type(TypeId::JSON));
    assert!(!checker.is_annotation_field_type(person));
}
