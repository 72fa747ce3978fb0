//! Integration tests for Error types
//!
//! Tests error construction, display, and classification.

use numeris_foundation::{Arity, Error, ErrorKind, Type};

// =============================================================================
// Arity Errors
// =============================================================================

#[test]
fn arity_exact() {
    let err = Error::arity_mismatch("clamp", Arity::Exact(3), 2);
    assert_eq!(err.to_string(), "clamp: expected 3 arguments");
    assert!(err.is_arity_error());
}

#[test]
fn arity_at_least() {
    let err = Error::arity_mismatch("max", Arity::Variadic(1), 0);
    assert_eq!(err.to_string(), "max: expected at least 1");
}

#[test]
fn arity_between() {
    let err = Error::arity_mismatch("randomSeed", Arity::Range(0, 1), 2);
    assert_eq!(err.to_string(), "randomSeed: expected between 0 and 1");
}

#[test]
fn arity_one_of() {
    let err = Error::arity_mismatch("random", Arity::OneOf(&[0, 1, 2]), 3);
    assert_eq!(err.to_string(), "random: expected one of {0, 1, 2}");
}

// =============================================================================
// Type Errors
// =============================================================================

#[test]
fn type_mismatch_names_context() {
    let err = Error::type_mismatch("pow", "base", Type::List);
    assert_eq!(err.to_string(), "pow: base expected number, got list");
    assert!(err.is_type_error());
    assert!(!err.is_arity_error());
}

#[test]
fn invalid_number_quotes_text() {
    let err = Error::invalid_number("sum", "argument 2", "1,5");
    assert!(matches!(err.kind, ErrorKind::InvalidNumber { .. }));
    assert!(err.to_string().contains("\"1,5\""));
}

#[test]
fn no_values() {
    let err = Error::no_values("mean");
    assert_eq!(err.op, "mean");
    assert_eq!(err.to_string(), "mean: no numeric values found");
    assert!(err.is_type_error());
}

#[test]
fn errors_compare_equal() {
    assert_eq!(Error::no_values("mode"), Error::no_values("mode"));
    assert_ne!(Error::no_values("mode"), Error::no_values("mean"));
}
