//! Tests for the published name table.

use numeris::foundation::{Arity, Value};
use numeris::stdlib::Registry;

const PUBLISHED: [&str; 47] = [
    "abs", "sign", "max", "min", "clamp", "ceil", "floor", "round", "trunc", "pow", "sqrt",
    "cbrt", "exp", "exp2", "log", "log10", "log2", "sin", "cos", "tan", "asin", "acos", "atan",
    "atan2", "sinh", "cosh", "tanh", "radians", "degrees", "sum", "mean", "median", "mode",
    "variance", "stddev", "random", "randomSeed", "randomFloat", "isNan", "isInf", "isFinite",
    "gcd", "lcm", "factorial", "pi", "e", "phi",
];

#[test]
fn publishes_exactly_the_documented_names() {
    let registry = Registry::new();
    assert_eq!(registry.len(), PUBLISHED.len());
    let mut expected = PUBLISHED.to_vec();
    expected.sort_unstable();
    assert_eq!(registry.names(), expected);
}

#[test]
fn declared_arities() {
    let registry = Registry::new();
    let arity = |name: &str| registry.get(name).map(|op| op.arity);
    assert_eq!(arity("pi"), Some(Arity::Exact(0)));
    assert_eq!(arity("clamp"), Some(Arity::Exact(3)));
    assert_eq!(arity("round"), Some(Arity::Range(1, 2)));
    assert_eq!(arity("sum"), Some(Arity::Variadic(0)));
    assert_eq!(arity("gcd"), Some(Arity::Variadic(2)));
    assert_eq!(arity("randomSeed"), Some(Arity::Range(0, 1)));
}

#[test]
fn every_unary_operation_rejects_two_arguments() {
    let registry = Registry::new();
    let two = [Value::from(1), Value::from(2)];
    for (name, op) in registry.iter() {
        if op.arity == Arity::Exact(1) {
            let err = registry.call(name, &two).unwrap().unwrap_err();
            assert!(err.is_arity_error(), "{name}: {err}");
            assert_eq!(err.to_string(), format!("{}: expected 1 argument", op.name));
        }
    }
}

#[test]
fn every_operation_rejects_a_map() {
    let registry = Registry::new();
    let map = Value::Map(numeris::foundation::LtMap::new());
    for (name, op) in registry.iter() {
        let count = match op.arity {
            Arity::Exact(0) => continue,
            Arity::Exact(n) | Arity::Variadic(n) => n.max(1),
            Arity::Range(_, hi) => hi,
            Arity::OneOf(_) => 1,
        };
        let args = vec![map.clone(); count];
        let err = registry.call(name, &args).unwrap().unwrap_err();
        assert!(err.is_type_error(), "{name}: {err}");
    }
}

#[test]
fn aliases_call_the_same_operation() {
    let registry = Registry::new();
    let args = [Value::from(f64::NAN)];
    assert_eq!(
        registry.call("is_nan", &args).unwrap().unwrap(),
        registry.call("isNan", &args).unwrap().unwrap()
    );
    assert!(!registry.names().contains(&"is_nan"));
}
