//! Seedable pseudo-random numbers.
//!
//! All random operations draw from one process-wide [`RandomSource`] behind a
//! mutex. A clean start is deterministic: the source begins from a fixed
//! seed until `random_seed` is called. After `random_seed(s)` the sequence of
//! draws on a single thread is reproducible; draws from several threads
//! interleave in no particular order.
//!
//! Not suitable for cryptography.

use std::sync::{LazyLock, Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use numeris_foundation::{Result, Value};
use rand::distributions::Standard;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::adapter::{from_bool, from_number};
use crate::args::Args;

/// Seed the process-wide source starts from.
pub const DEFAULT_SEED: u64 = 0x5EED;

/// A seedable generator with the three draw shapes the operations need.
#[derive(Clone, Debug)]
pub struct RandomSource {
    rng: ChaCha8Rng,
}

impl RandomSource {
    /// Creates a source from a 64-bit seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Restarts the stream from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Uniform double in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        self.rng.sample(Standard)
    }

    /// Uniform integer in `[min, max)`, or `min` when the range is empty.
    pub fn next_int(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    /// `min + u * (max - min)` for a uniform `u` in `[0, 1)`.
    ///
    /// The bounds may be given in either order.
    pub fn next_float(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_unit() * (max - min)
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

/// Nanoseconds since the epoch, or 0 if the clock is before it.
#[allow(clippy::cast_possible_truncation)]
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}

static SOURCE: LazyLock<Mutex<RandomSource>> = LazyLock::new(Mutex::default);

/// Runs `f` with exclusive access to the process-wide source.
///
/// A panic while the lock was held leaves the generator in a valid state,
/// so a poisoned lock is recovered rather than propagated.
pub fn with_source<T>(f: impl FnOnce(&mut RandomSource) -> T) -> T {
    let mut guard = SOURCE.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// Reseeds the process-wide source.
pub fn reseed(seed: u64) {
    tracing::debug!(seed, "reseeding random source");
    with_source(|source| source.reseed(seed));
}

// =============================================================================
// Operations
// =============================================================================

/// Random: random - `[0, 1)`, or an integer in `[0, max)` / `[min, max)`
///
/// (random)        -> 0.7311...
/// (random 6)      -> 0..=5
/// (random 10 20)  -> 10..=19
pub(crate) fn native_random(args: &Args<'_>) -> Result<Value> {
    let drawn = match args.len() {
        0 => with_source(RandomSource::next_unit),
        1 => {
            let max = args.integer(0, "max")?;
            int_to_f64(with_source(|source| source.next_int(0, max)))
        }
        _ => {
            let min = args.integer(0, "min")?;
            let max = args.integer(1, "max")?;
            int_to_f64(with_source(|source| source.next_int(min, max)))
        }
    };
    Ok(from_number(drawn))
}

#[allow(clippy::cast_precision_loss)]
fn int_to_f64(n: i64) -> f64 {
    n as f64
}

/// Random: randomFloat - `[0, 1)`, `u * max`, or `min + u * (max - min)`
pub(crate) fn native_random_float(args: &Args<'_>) -> Result<Value> {
    let drawn = match args.len() {
        0 => with_source(RandomSource::next_unit),
        1 => {
            let max = args.number(0, "max")?;
            with_source(|source| source.next_float(0.0, max))
        }
        _ => {
            let min = args.number(0, "min")?;
            let max = args.number(1, "max")?;
            with_source(|source| source.next_float(min, max))
        }
    };
    Ok(from_number(drawn))
}

/// Random: randomSeed - reseed from the truncated argument, or the clock
pub(crate) fn native_random_seed(args: &Args<'_>) -> Result<Value> {
    let seed = if args.is_empty() {
        clock_seed()
    } else {
        seed_bits(args.integer(0, "seed")?)
    };
    reseed(seed);
    Ok(from_bool(true))
}

/// Negative seeds keep their bit pattern.
#[allow(clippy::cast_sign_loss)]
fn seed_bits(seed: i64) -> u64 {
    seed as u64
}
