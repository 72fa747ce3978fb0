//! Variadic reducers and descriptive statistics.
//!
//! Reducers take any mix of numbers and flat lists, flatten them in order,
//! and reduce the resulting sequence:
//!
//! ```text
//! (sum 1 [2 3])            ;; 6
//! (median [3 1 2 5 4])     ;; 3
//! (variance 1 2 3 4 5)     ;; 2.5 (sample variance)
//! ```
//!
//! `sum` of nothing is 0. Every other reducer fails with
//! "no numeric values found" on empty input, except that `variance` and
//! `stddev` return 0 for a single value.

use std::collections::HashMap;

use numeris_foundation::{Result, Value};

use crate::adapter::from_number;
use crate::args::Args;

// =============================================================================
// Extrema
// =============================================================================

/// Math: max - largest flattened value; ties keep the first
pub(crate) fn native_max(args: &Args<'_>) -> Result<Value> {
    let xs = args.flatten_non_empty()?;
    Ok(from_number(extremum(&xs, |candidate, best| candidate > best)))
}

/// Math: min - smallest flattened value; ties keep the first
pub(crate) fn native_min(args: &Args<'_>) -> Result<Value> {
    let xs = args.flatten_non_empty()?;
    Ok(from_number(extremum(&xs, |candidate, best| candidate < best)))
}

/// Linear scan keeping the first value no later value beats.
fn extremum(xs: &[f64], beats: fn(f64, f64) -> bool) -> f64 {
    let mut best = xs[0];
    for &x in &xs[1..] {
        if beats(x, best) {
            best = x;
        }
    }
    best
}

/// Math: clamp - floor to `min` first, then cap at `max`
pub(crate) fn native_clamp(args: &Args<'_>) -> Result<Value> {
    let x = args.number(0, "value")?;
    let lo = args.number(1, "min")?;
    let hi = args.number(2, "max")?;
    Ok(from_number(clamp(x, lo, hi)))
}

// Not f64::clamp, which panics when lo > hi.
fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

// =============================================================================
// Sums and Averages
// =============================================================================

/// Math: sum - 0 for no values
pub(crate) fn native_sum(args: &Args<'_>) -> Result<Value> {
    let xs = args.flatten()?;
    // Iterator::sum for f64 starts from -0.0.
    Ok(from_number(xs.iter().fold(0.0, |acc, x| acc + x)))
}

/// Math: mean - arithmetic mean
pub(crate) fn native_mean(args: &Args<'_>) -> Result<Value> {
    let xs = args.flatten_non_empty()?;
    Ok(from_number(mean(&xs)))
}

#[allow(clippy::cast_precision_loss)]
fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Math: median - middle value, or the average of the two middle values
pub(crate) fn native_median(args: &Args<'_>) -> Result<Value> {
    let mut xs = args.flatten_non_empty()?;
    xs.sort_by(f64::total_cmp);
    let mid = xs.len() / 2;
    let median = if xs.len() % 2 == 1 {
        xs[mid]
    } else {
        (xs[mid - 1] + xs[mid]) / 2.0
    };
    Ok(from_number(median))
}

/// Math: mode - most frequent value
///
/// Values are compared for exact equality. On a tie the value seen first wins.
pub(crate) fn native_mode(args: &Args<'_>) -> Result<Value> {
    let xs = args.flatten_non_empty()?;
    Ok(from_number(mode(&xs)))
}

fn mode(xs: &[f64]) -> f64 {
    // Key by bits with -0.0 folded into 0.0 so that equal values share a bucket.
    let key = |x: f64| if x == 0.0 { 0.0_f64.to_bits() } else { x.to_bits() };

    let mut counts: HashMap<u64, (usize, usize)> = HashMap::with_capacity(xs.len());
    for (index, &x) in xs.iter().enumerate() {
        counts.entry(key(x)).or_insert((0, index)).0 += 1;
    }

    let mut best = (0, usize::MAX);
    for &(count, first_seen) in counts.values() {
        if count > best.0 || (count == best.0 && first_seen < best.1) {
            best = (count, first_seen);
        }
    }
    xs[best.1]
}

// =============================================================================
// Dispersion
// =============================================================================

/// Math: variance - sample variance (n - 1 denominator); 0 for a single value
pub(crate) fn native_variance(args: &Args<'_>) -> Result<Value> {
    let xs = args.flatten_non_empty()?;
    Ok(from_number(sample_variance(&xs)))
}

/// Math: stddev - square root of the sample variance
pub(crate) fn native_stddev(args: &Args<'_>) -> Result<Value> {
    let xs = args.flatten_non_empty()?;
    Ok(from_number(sample_variance(&xs).sqrt()))
}

#[allow(clippy::cast_precision_loss)]
fn sample_variance(xs: &[f64]) -> f64 {
    if xs.len() <= 1 {
        return 0.0;
    }
    let mu = mean(xs);
    let squares: f64 = xs.iter().map(|x| (x - mu).powi(2)).sum();
    squares / (xs.len() - 1) as f64
}
