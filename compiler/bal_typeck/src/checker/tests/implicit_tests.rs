//! Tests for implicit cast detection and insertion.

use bal_ir::Span;
use bal_types::{Opcode, OperatorKind, TypeId};
use pretty_assertions::assert_eq;

use super::Fixture;
use crate::TypedExpr;

#[test]
fn registered_implicit_casts() {
    let fx = Fixture::new();
    let checker = fx.checker();
    assert!(checker.is_implicit_cast_possible(TypeId::INT, TypeId::FLOAT));
    assert!(checker.is_implicit_cast_possible(TypeId::STRING, TypeId::JSON));
    assert!(!checker.is_implicit_cast_possible(TypeId::FLOAT, TypeId::INT));
    assert!(!checker.is_implicit_cast_possible(TypeId::BLOB, TypeId::JSON));
}

#[test]
fn anything_goes_to_any() {
    let mut fx = Fixture::new();
    let person = fx.person();
    let people = fx.types.array(person);
    let checker = fx.checker();
    for ty in [TypeId::INT, TypeId::BLOB, TypeId::MAP, person, people] {
        assert!(checker.is_implicit_cast_possible(ty, TypeId::ANY), "{ty:?}");
    }
}

#[test]
fn constrained_json_is_never_an_implicit_target() {
    let mut fx = Fixture::new();
    let person = fx.person();
    let json_person = fx.types.json(person);
    let checker = fx.checker();
    assert!(!checker.is_implicit_cast_possible(TypeId::INT, json_person));
    assert!(!checker.is_implicit_cast_possible(TypeId::JSON, json_person));
    assert!(!checker.is_implicit_cast_possible(person, json_person));
}

#[test]
fn array_elements_are_only_widened_by_reference() {
    let mut fx = Fixture::new();
    let person = fx.person();
    let people = fx.types.array(person);
    let anys = fx.types.array(TypeId::ANY);
    let ints = fx.types.array(TypeId::INT);
    let floats = fx.types.array(TypeId::FLOAT);
    let int_grid = fx.types.array(ints);
    let checker = fx.checker();

    assert!(checker.is_implicit_cast_possible(people, anys));
    // Value elements would need boxing
    assert!(!checker.is_implicit_cast_possible(ints, anys));
    assert!(!checker.is_implicit_cast_possible(ints, floats));
    // Inner arrays are references
    assert!(checker.is_implicit_cast_possible(int_grid, anys));
    // Narrowing is never implicit
    assert!(!checker.is_implicit_cast_possible(anys, people));
    assert!(!checker.is_implicit_cast_possible(anys, int_grid));
}

#[test]
fn set_implicit_cast_wraps_once_per_call() {
    let fx = Fixture::new();
    let checker = fx.checker();
    let span = Span::new(3, 5);
    let mut expr = TypedExpr::new(span, TypeId::INT);

    checker.set_implicit_cast_expr(&mut expr, TypeId::INT, TypeId::FLOAT);
    assert_eq!(expr.cast_depth(), 1);
    assert_eq!(expr.effective_type(), TypeId::FLOAT);

    let layer = expr.implicit_cast.as_deref().unwrap();
    assert_eq!(layer.span, span);
    assert_eq!(layer.symbol.kind, OperatorKind::ImplicitCast);
    assert_eq!(layer.symbol.opcode, Opcode::IntToFloat);
    assert!(layer.symbol.safe);
    assert!(layer.inner.is_none());

    checker.set_implicit_cast_expr(&mut expr, TypeId::FLOAT, TypeId::JSON);
    assert_eq!(expr.cast_depth(), 2);
    assert_eq!(expr.effective_type(), TypeId::JSON);
    let outer = expr.implicit_cast.as_deref().unwrap();
    assert_eq!(outer.symbol.opcode, Opcode::FloatToJson);
    assert_eq!(
        outer.inner.as_deref().map(|inner| inner.symbol.opcode),
        Some(Opcode::IntToFloat)
    );
    // The expression's own type is untouched
    assert_eq!(expr.ty, TypeId::INT);
}

#[test]
fn set_implicit_cast_without_operator_is_a_no_op() {
    let mut fx = Fixture::new();
    let person = fx.person();
    let checker = fx.checker();
    let mut expr = TypedExpr::new(Span::DUMMY, person);

    // Structs reach `any` without a registered operator
    assert!(checker.is_implicit_cast_possible(person, TypeId::ANY));
    checker.set_implicit_cast_expr(&mut expr, person, TypeId::ANY);

    assert_eq!(expr.cast_depth(), 0);
    assert_eq!(expr.effective_type(), person);
}
