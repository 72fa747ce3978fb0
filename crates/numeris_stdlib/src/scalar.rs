//! Scalar math operations.
//!
//! Each operation coerces one or two numeric arguments and returns a number.
//! Math domain errors yield `NaN` instead of failing.

use numeris_foundation::{Result, Value};

use crate::adapter::{from_bool, from_number};
use crate::args::Args;

/// Applies `f` to the single `value` argument.
fn unary(args: &Args<'_>, f: fn(f64) -> f64) -> Result<Value> {
    let x = args.number(0, "value")?;
    Ok(from_number(f(x)))
}

/// Applies `f` to the single `value` argument, producing a boolean.
fn predicate(args: &Args<'_>, f: fn(f64) -> bool) -> Result<Value> {
    let x = args.number(0, "value")?;
    Ok(from_bool(f(x)))
}

// =============================================================================
// Basic Math Functions
// =============================================================================

/// Math: abs
pub(crate) fn native_abs(args: &Args<'_>) -> Result<Value> {
    unary(args, f64::abs)
}

/// Math: sign - exactly -1, 0, or 1 (`NaN` stays `NaN`)
pub(crate) fn native_sign(args: &Args<'_>) -> Result<Value> {
    unary(args, sign)
}

fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else if x == 0.0 {
        0.0
    } else {
        f64::NAN
    }
}

/// Math: ceil
pub(crate) fn native_ceil(args: &Args<'_>) -> Result<Value> {
    unary(args, f64::ceil)
}

/// Math: floor
pub(crate) fn native_floor(args: &Args<'_>) -> Result<Value> {
    unary(args, f64::floor)
}

/// Math: trunc - truncate towards zero
pub(crate) fn native_trunc(args: &Args<'_>) -> Result<Value> {
    unary(args, f64::trunc)
}

/// Math: round - half away from zero, optionally to `precision` decimal places
///
/// (round 3.14159 2)  -> 3.14
/// (round 1250 -2)    -> 1300
pub(crate) fn native_round(args: &Args<'_>) -> Result<Value> {
    let x = args.number(0, "value")?;
    let precision = args.integer_or(1, "precision", 0)?;
    Ok(from_number(round_to(x, precision)))
}

#[allow(clippy::cast_possible_truncation)]
fn round_to(x: f64, precision: i64) -> f64 {
    if precision == 0 {
        return x.round();
    }
    let places = precision.clamp(-i64::from(i32::MAX), i64::from(i32::MAX)) as i32;
    // Negative places divide by an exact power of ten instead of
    // multiplying by an inexact fraction.
    if places > 0 {
        let factor = 10f64.powi(places);
        (x * factor).round() / factor
    } else {
        let factor = 10f64.powi(-places);
        (x / factor).round() * factor
    }
}

// =============================================================================
// Powers and Roots
// =============================================================================

/// Math: pow - raise to power
pub(crate) fn native_pow(args: &Args<'_>) -> Result<Value> {
    let base = args.number(0, "base")?;
    let exponent = args.number(1, "exponent")?;
    Ok(from_number(base.powf(exponent)))
}

/// Math: sqrt - `NaN` for negative input
pub(crate) fn native_sqrt(args: &Args<'_>) -> Result<Value> {
    unary(args, f64::sqrt)
}

/// Math: cbrt - cube root
pub(crate) fn native_cbrt(args: &Args<'_>) -> Result<Value> {
    unary(args, f64::cbrt)
}

// =============================================================================
// Exponentials and Logarithms
// =============================================================================

/// Math: exp - e^x
pub(crate) fn native_exp(args: &Args<'_>) -> Result<Value> {
    unary(args, f64::exp)
}

/// Math: exp2 - 2^x
pub(crate) fn native_exp2(args: &Args<'_>) -> Result<Value> {
    unary(args, f64::exp2)
}

/// Logarithms are `NaN` at and below zero, where `f64` would give `-inf`
/// for zero.
fn positive_only(x: f64, f: fn(f64) -> f64) -> f64 {
    if x > 0.0 { f(x) } else { f64::NAN }
}

/// Math: log - natural logarithm
pub(crate) fn native_log(args: &Args<'_>) -> Result<Value> {
    unary(args, |x| positive_only(x, f64::ln))
}

/// Math: log10 - base-10 logarithm
pub(crate) fn native_log10(args: &Args<'_>) -> Result<Value> {
    unary(args, |x| positive_only(x, f64::log10))
}

/// Math: log2 - base-2 logarithm
pub(crate) fn native_log2(args: &Args<'_>) -> Result<Value> {
    unary(args, |x| positive_only(x, f64::log2))
}

// =============================================================================
// Trigonometric Functions
// =============================================================================

/// Math: sin - sine
pub(crate) fn native_sin(args: &Args<'_>) -> Result<Value> {
    unary(args, f64::sin)
}

/// Math: cos - cosine
pub(crate) fn native_cos(args: &Args<'_>) -> Result<Value> {
    unary(args, f64::cos)
}

/// Math: tan - tangent
pub(crate) fn native_tan(args: &Args<'_>) -> Result<Value> {
    unary(args, f64::tan)
}

/// Math: asin - arcsine, `NaN` outside [-1, 1]
pub(crate) fn native_asin(args: &Args<'_>) -> Result<Value> {
    unary(args, f64::asin)
}

/// Math: acos - arccosine, `NaN` outside [-1, 1]
pub(crate) fn native_acos(args: &Args<'_>) -> Result<Value> {
    unary(args, f64::acos)
}

/// Math: atan - arctangent
pub(crate) fn native_atan(args: &Args<'_>) -> Result<Value> {
    unary(args, f64::atan)
}

/// Math: atan2 - two-argument arctangent of y/x
pub(crate) fn native_atan2(args: &Args<'_>) -> Result<Value> {
    let y = args.number(0, "y")?;
    let x = args.number(1, "x")?;
    Ok(from_number(y.atan2(x)))
}

// =============================================================================
// Hyperbolic Trigonometry
// =============================================================================

/// Math: sinh - hyperbolic sine
pub(crate) fn native_sinh(args: &Args<'_>) -> Result<Value> {
    unary(args, f64::sinh)
}

/// Math: cosh - hyperbolic cosine
pub(crate) fn native_cosh(args: &Args<'_>) -> Result<Value> {
    unary(args, f64::cosh)
}

/// Math: tanh - hyperbolic tangent
pub(crate) fn native_tanh(args: &Args<'_>) -> Result<Value> {
    unary(args, f64::tanh)
}

// =============================================================================
// Angle Conversion
// =============================================================================

/// Math: radians - degrees to radians
pub(crate) fn native_radians(args: &Args<'_>) -> Result<Value> {
    unary(args, |d| d * std::f64::consts::PI / 180.0)
}

/// Math: degrees - radians to degrees
pub(crate) fn native_degrees(args: &Args<'_>) -> Result<Value> {
    unary(args, |r| r * 180.0 / std::f64::consts::PI)
}

// =============================================================================
// Factorial
// =============================================================================

/// Math: factorial - of the truncated argument; `NaN` below zero
///
/// Results past 170! overflow to `+inf`.
pub(crate) fn native_factorial(args: &Args<'_>) -> Result<Value> {
    let n = args.integer(0, "n")?;
    Ok(from_number(factorial(n)))
}

#[allow(clippy::cast_precision_loss)]
fn factorial(n: i64) -> f64 {
    if n < 0 {
        return f64::NAN;
    }
    let mut result = 1.0_f64;
    for i in 2..=n {
        result *= i as f64;
        if result.is_infinite() {
            break;
        }
    }
    result
}

// =============================================================================
// Constants
// =============================================================================

/// Math constant: pi
pub(crate) fn native_pi(_args: &Args<'_>) -> Result<Value> {
    Ok(from_number(std::f64::consts::PI))
}

/// Math constant: e
pub(crate) fn native_e(_args: &Args<'_>) -> Result<Value> {
    Ok(from_number(std::f64::consts::E))
}

/// Golden ratio, (1 + sqrt 5) / 2.
pub(crate) const PHI: f64 = 1.618_033_988_749_895;

/// Math constant: phi (golden ratio)
pub(crate) fn native_phi(_args: &Args<'_>) -> Result<Value> {
    Ok(from_number(PHI))
}

// =============================================================================
// Number Validation
// =============================================================================

/// Predicate: isNan
pub(crate) fn native_is_nan(args: &Args<'_>) -> Result<Value> {
    predicate(args, f64::is_nan)
}

/// Predicate: isInf - true for both infinities
pub(crate) fn native_is_inf(args: &Args<'_>) -> Result<Value> {
    predicate(args, f64::is_infinite)
}

/// Predicate: isFinite
pub(crate) fn native_is_finite(args: &Args<'_>) -> Result<Value> {
    predicate(args, f64::is_finite)
}
