//! Integration tests for Value types
//!
//! Tests Value variants, equality, hashing, and display.

use numeris_foundation::{LtMap, LtVec, Type, Value};
use std::collections::HashSet;

// =============================================================================
// Value Construction
// =============================================================================

#[test]
fn value_number() {
    let v = Value::Number(42.5);
    assert_eq!(v.as_number(), Some(42.5));
    assert_eq!(v.value_type(), Type::Number);
}

#[test]
fn value_bool_is_not_a_number() {
    let v = Value::Bool(true);
    assert_eq!(v.as_bool(), Some(true));
    assert_eq!(v.as_number(), None);
}

#[test]
fn value_string() {
    let v = Value::from("3.5");
    assert_eq!(v.as_str(), Some("3.5"));
    assert_eq!(v.as_number(), None);
    assert_eq!(v.value_type(), Type::String);
}

#[test]
fn value_list_from_vec() {
    let v = Value::from(vec![1.0, 2.0, 3.0]);
    let list = v.as_list().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list.get(2), Some(&Value::Number(3.0)));
}

#[test]
fn value_list_from_iterator() {
    let list: LtVec<Value> = (1..=3i32).map(Value::from).collect();
    assert_eq!(Value::List(list), Value::from(vec![1, 2, 3]));
}

#[test]
fn value_map() {
    let m: LtMap<Value, Value> = [(Value::from("a"), Value::from(1))].into_iter().collect();
    let v = Value::Map(m);
    assert_eq!(v.value_type(), Type::Map);
    assert_eq!(v.as_map().map(LtMap::len), Some(1));
}

// =============================================================================
// Equality and Hashing
// =============================================================================

#[test]
fn numbers_compare_by_bits() {
    assert_eq!(Value::Number(1.0), Value::Number(1.0));
    assert_eq!(Value::Number(f64::NAN), Value::Number(f64::NAN));
    assert_ne!(Value::Number(0.0), Value::Number(-0.0));
}

#[test]
fn different_variants_are_not_equal() {
    assert_ne!(Value::Number(1.0), Value::Bool(true));
    assert_ne!(Value::Number(1.0), Value::from("1"));
    assert_ne!(Value::Nil, Value::Bool(false));
}

#[test]
fn values_work_as_hash_keys() {
    let mut set = HashSet::new();
    set.insert(Value::Number(1.0));
    set.insert(Value::Number(1.0));
    set.insert(Value::from(vec![1.0]));
    set.insert(Value::from("1"));
    assert_eq!(set.len(), 3);
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_integral_numbers_without_fraction() {
    assert_eq!(Value::Number(6.0).to_string(), "6");
    assert_eq!(Value::Number(-2.5).to_string(), "-2.5");
    assert_eq!(Value::Number(f64::INFINITY).to_string(), "inf");
}

#[test]
fn display_lists() {
    assert_eq!(Value::from(vec![1, 2, 3]).to_string(), "[1 2 3]");
    assert_eq!(Value::from(Vec::<f64>::new()).to_string(), "[]");
}

#[test]
fn display_nil_and_bool() {
    assert_eq!(Value::Nil.to_string(), "nil");
    assert_eq!(Value::Bool(true).to_string(), "true");
}
