//! Greatest common divisor and least common multiple.

use numeris_foundation::{Result, Value};

use crate::adapter::from_number;
use crate::args::Args;

/// 2^64 as a double; accumulators at or above this no longer fit a `u64`.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Absolute value truncated toward zero. Saturates at `u64::MAX`; `NaN` is 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_magnitude(x: f64) -> u64 {
    x.abs().trunc() as u64
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Math: gcd - greatest common divisor of two or more integers
///
/// (gcd 12 18 24) -> 6
#[allow(clippy::cast_precision_loss)]
pub(crate) fn native_gcd(args: &Args<'_>) -> Result<Value> {
    let result = args
        .numbers()?
        .into_iter()
        .map(to_magnitude)
        .fold(0, gcd);
    Ok(from_number(result as f64))
}

/// Math: lcm - least common multiple of two or more integers
///
/// Folds in `f64`, so products past 2^53 lose precision and very large
/// ones become `+inf`. Any zero makes the result zero.
pub(crate) fn native_lcm(args: &Args<'_>) -> Result<Value> {
    let result = args
        .numbers()?
        .into_iter()
        .map(to_magnitude)
        .fold(None, |acc, b| Some(acc.map_or(as_f64(b), |a| lcm(a, b))));
    Ok(from_number(result.unwrap_or(0.0)))
}

#[allow(clippy::cast_precision_loss)]
fn as_f64(n: u64) -> f64 {
    n as f64
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lcm(acc: f64, b: u64) -> f64 {
    if acc == 0.0 || b == 0 {
        return 0.0;
    }
    let divisor = if acc < U64_LIMIT { gcd(acc as u64, b) } else { 1 };
    acc / as_f64(divisor) * as_f64(b)
}
