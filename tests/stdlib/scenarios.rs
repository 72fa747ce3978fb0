//! Concrete call scenarios.

use numeris::foundation::{ErrorKind, Value};

use crate::{call, number, nums};

// =============================================================================
// Documented Examples
// =============================================================================

#[test]
fn round_to_two_places() {
    let r = number("round", &[Value::from(3.14159), Value::from(2)]);
    assert!((r - 3.14).abs() < 1e-12);
}

#[test]
fn gcd_of_three() {
    assert_eq!(number("gcd", &nums(&[12.0, 18.0, 24.0])), 6.0);
}

#[test]
fn median_of_list() {
    let list = Value::from(vec![3, 1, 2, 5, 4]);
    assert_eq!(number("median", &[list]), 3.0);
}

#[test]
fn sample_variance() {
    let v = number("variance", &nums(&[1.0, 2.0, 3.0, 4.0, 5.0]));
    assert!((v - 2.5).abs() < 1e-12);
}

#[test]
fn atan2_quarter_pi() {
    let r = number("atan2", &nums(&[1.0, 1.0]));
    assert!((r - 0.785_398_163_397_448_3).abs() < 1e-15);
}

#[test]
fn factorial_of_negative_is_nan() {
    assert!(number("factorial", &nums(&[-1.0])).is_nan());
}

#[test]
fn max_without_arguments_is_arity_error() {
    let err = call("max", &[]).unwrap_err();
    assert!(err.is_arity_error());
}

#[test]
fn mean_of_non_numeric_string_is_type_error() {
    let err = call("mean", &[Value::from("abc")]).unwrap_err();
    assert!(err.is_type_error());
}

// =============================================================================
// Edge Cases
// =============================================================================

#[test]
fn domain_errors_are_nan_not_failures() {
    assert!(number("sqrt", &nums(&[-4.0])).is_nan());
    assert!(number("log", &nums(&[0.0])).is_nan());
    assert!(number("log10", &nums(&[-1.0])).is_nan());
    assert!(number("log2", &nums(&[0.0])).is_nan());
    assert!(number("asin", &nums(&[2.0])).is_nan());
    assert!(number("acos", &nums(&[-2.0])).is_nan());
}

#[test]
fn overflow_is_infinite() {
    assert_eq!(number("factorial", &nums(&[200.0])), f64::INFINITY);
    assert_eq!(number("exp", &nums(&[1000.0])), f64::INFINITY);
}

#[test]
fn predicates_return_bools() {
    assert_eq!(call("isNan", &nums(&[f64::NAN])).unwrap(), Value::Bool(true));
    assert_eq!(call("isInf", &nums(&[f64::NEG_INFINITY])).unwrap(), Value::Bool(true));
    assert_eq!(call("isFinite", &nums(&[f64::INFINITY])).unwrap(), Value::Bool(false));
}

#[test]
fn sum_accepts_nothing_but_mean_does_not() {
    assert_eq!(call("sum", &[]).unwrap(), Value::from(0.0));
    assert!(call("mean", &[]).unwrap_err().is_arity_error());
}

#[test]
fn reducers_on_empty_lists() {
    let empty = [Value::from(Vec::<f64>::new())];
    assert_eq!(call("sum", &empty).unwrap(), Value::from(0.0));
    for name in ["max", "min", "mean", "median", "mode", "variance", "stddev"] {
        let err = call(name, &empty).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::NoValues), "{name}: {err}");
        assert_eq!(err.to_string(), format!("{name}: no numeric values found"));
    }
}

#[test]
fn mixed_scalars_and_lists() {
    let args = [
        Value::from(10),
        Value::from(vec![1, 2]),
        Value::from(Vec::<f64>::new()),
        Value::from(vec![30]),
    ];
    assert_eq!(number("sum", &args), 43.0);
    assert_eq!(number("max", &args), 30.0);
    assert_eq!(number("min", &args), 1.0);
    assert_eq!(number("median", &args), 6.0);
}

#[test]
fn nested_list_is_rejected_with_position() {
    let nested = Value::List(
        [Value::from(1), Value::from(vec![2, 3])]
            .into_iter()
            .collect(),
    );
    let err = call("sum", &[Value::from(0), nested]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "sum: argument 2 item 2 expected number, got list"
    );
}

#[test]
fn booleans_are_not_coerced() {
    let err = call("abs", &[Value::Bool(false)]).unwrap_err();
    assert_eq!(err.to_string(), "abs: value expected number, got bool");
}

#[test]
fn numeric_strings_are_parsed() {
    assert_eq!(number("pow", &[Value::from("2"), Value::from("8")]), 256.0);
    assert_eq!(number("sum", &[Value::from(vec!["1.5", "2.5"])]), 4.0);
}

#[test]
fn constants() {
    assert_eq!(number("pi", &[]), std::f64::consts::PI);
    assert_eq!(number("e", &[]), std::f64::consts::E);
    assert!((number("phi", &[]) - 1.618_033_988_749_895).abs() < 1e-15);
}

#[test]
fn clamp_orders_floor_before_ceiling() {
    assert_eq!(number("clamp", &nums(&[-1.0, 0.0, 1.0])), 0.0);
    assert_eq!(number("clamp", &nums(&[0.5, 0.0, 1.0])), 0.5);
    assert_eq!(number("clamp", &nums(&[-1.0, 5.0, 1.0])), 5.0);
}

#[test]
fn round_negative_precision() {
    assert_eq!(number("round", &nums(&[1234.5, -2.0])), 1200.0);
    assert_eq!(number("round", &nums(&[-0.5])), -1.0);
}

#[test]
fn lcm_of_several() {
    assert_eq!(number("lcm", &nums(&[4.0, 6.0, 10.0])), 60.0);
    assert_eq!(number("lcm", &nums(&[0.0, 6.0])), 0.0);
}

#[test]
fn angle_conversion() {
    assert!((number("radians", &nums(&[90.0])) - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
    assert!((number("degrees", &nums(&[std::f64::consts::PI])) - 180.0).abs() < 1e-12);
}

#[test]
fn inputs_are_not_mutated() {
    let list = Value::from(vec![5, 3, 4]);
    let args = [list.clone()];
    number("median", &args);
    number("mode", &args);
    assert_eq!(args[0], list);
}
