//! The name-to-operation table published to a host.

use std::collections::HashMap;
use std::fmt;

use numeris_foundation::{Arity, Error, Result, Value};

use crate::args::Args;
use crate::config::{MathConfig, StringCoercion};
use crate::{number_theory, random, reduce, scalar};

/// Body of an operation. Receives arguments whose count already matches the
/// declared arity.
pub type OperationFn = fn(&Args<'_>) -> Result<Value>;

/// A named, arity-checked math operation.
#[derive(Clone, Copy)]
pub struct Operation {
    /// Internal snake_case name, used in error messages.
    pub name: &'static str,
    /// Accepted argument counts.
    pub arity: Arity,
    func: OperationFn,
    strings: StringCoercion,
}

impl Operation {
    /// Calls the operation.
    ///
    /// The argument count is validated before any argument is coerced.
    ///
    /// # Errors
    ///
    /// Returns an arity error for a wrong argument count, or a type error
    /// for an argument that cannot be used as a number.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        if !self.arity.accepts(args.len()) {
            return Err(Error::arity_mismatch(self.name, self.arity, args.len()));
        }
        (self.func)(&Args::new(self.name, args, self.strings))
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Operation({}, {:?})", self.name, self.arity)
    }
}

/// One row of the operation table: published name, internal name, arity, body.
type Entry = (&'static str, &'static str, Arity, OperationFn);

/// Every published operation.
///
/// Published names follow the host's camelCase convention; the internal name
/// differs only for the multi-word operations.
const OPERATIONS: &[Entry] = &[
    // Basic
    ("abs", "abs", Arity::Exact(1), scalar::native_abs),
    ("sign", "sign", Arity::Exact(1), scalar::native_sign),
    ("max", "max", Arity::Variadic(1), reduce::native_max),
    ("min", "min", Arity::Variadic(1), reduce::native_min),
    ("clamp", "clamp", Arity::Exact(3), reduce::native_clamp),
    ("ceil", "ceil", Arity::Exact(1), scalar::native_ceil),
    ("floor", "floor", Arity::Exact(1), scalar::native_floor),
    ("round", "round", Arity::Range(1, 2), scalar::native_round),
    ("trunc", "trunc", Arity::Exact(1), scalar::native_trunc),
    // Powers, roots, logarithms
    ("pow", "pow", Arity::Exact(2), scalar::native_pow),
    ("sqrt", "sqrt", Arity::Exact(1), scalar::native_sqrt),
    ("cbrt", "cbrt", Arity::Exact(1), scalar::native_cbrt),
    ("exp", "exp", Arity::Exact(1), scalar::native_exp),
    ("exp2", "exp2", Arity::Exact(1), scalar::native_exp2),
    ("log", "log", Arity::Exact(1), scalar::native_log),
    ("log10", "log10", Arity::Exact(1), scalar::native_log10),
    ("log2", "log2", Arity::Exact(1), scalar::native_log2),
    // Trigonometry
    ("sin", "sin", Arity::Exact(1), scalar::native_sin),
    ("cos", "cos", Arity::Exact(1), scalar::native_cos),
    ("tan", "tan", Arity::Exact(1), scalar::native_tan),
    ("asin", "asin", Arity::Exact(1), scalar::native_asin),
    ("acos", "acos", Arity::Exact(1), scalar::native_acos),
    ("atan", "atan", Arity::Exact(1), scalar::native_atan),
    ("atan2", "atan2", Arity::Exact(2), scalar::native_atan2),
    ("sinh", "sinh", Arity::Exact(1), scalar::native_sinh),
    ("cosh", "cosh", Arity::Exact(1), scalar::native_cosh),
    ("tanh", "tanh", Arity::Exact(1), scalar::native_tanh),
    ("radians", "radians", Arity::Exact(1), scalar::native_radians),
    ("degrees", "degrees", Arity::Exact(1), scalar::native_degrees),
    // Statistics
    ("sum", "sum", Arity::Variadic(0), reduce::native_sum),
    ("mean", "mean", Arity::Variadic(1), reduce::native_mean),
    ("median", "median", Arity::Variadic(1), reduce::native_median),
    ("mode", "mode", Arity::Variadic(1), reduce::native_mode),
    ("variance", "variance", Arity::Variadic(1), reduce::native_variance),
    ("stddev", "stddev", Arity::Variadic(1), reduce::native_stddev),
    // Random
    ("random", "random", Arity::OneOf(&[0, 1, 2]), random::native_random),
    ("randomSeed", "random_seed", Arity::Range(0, 1), random::native_random_seed),
    ("randomFloat", "random_float", Arity::OneOf(&[0, 1, 2]), random::native_random_float),
    // Validation
    ("isNan", "is_nan", Arity::Exact(1), scalar::native_is_nan),
    ("isInf", "is_inf", Arity::Exact(1), scalar::native_is_inf),
    ("isFinite", "is_finite", Arity::Exact(1), scalar::native_is_finite),
    // Number theory
    ("gcd", "gcd", Arity::Variadic(2), number_theory::native_gcd),
    ("lcm", "lcm", Arity::Variadic(2), number_theory::native_lcm),
    ("factorial", "factorial", Arity::Exact(1), scalar::native_factorial),
    // Constants
    ("pi", "pi", Arity::Exact(0), scalar::native_pi),
    ("e", "e", Arity::Exact(0), scalar::native_e),
    ("phi", "phi", Arity::Exact(0), scalar::native_phi),
];

/// Read-only mapping from operation name to [`Operation`].
///
/// Lookups accept both the published name (`randomSeed`) and the internal
/// snake_case name (`random_seed`); only published names are listed and
/// counted.
#[derive(Debug, Clone)]
pub struct Registry {
    operations: HashMap<&'static str, Operation>,
    aliases: HashMap<&'static str, &'static str>,
}

impl Registry {
    /// Builds a registry with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&MathConfig::default())
    }

    /// Builds a registry, reseeding the process-wide random source if the
    /// configuration carries a seed.
    #[must_use]
    pub fn with_config(config: &MathConfig) -> Self {
        if let Some(seed) = config.seed {
            random::reseed(seed);
        }

        let mut operations = HashMap::with_capacity(OPERATIONS.len());
        let mut aliases = HashMap::new();
        for &(published, name, arity, func) in OPERATIONS {
            operations.insert(
                published,
                Operation {
                    name,
                    arity,
                    func,
                    strings: config.strings,
                },
            );
            if name != published {
                aliases.insert(name, published);
            }
        }

        tracing::debug!(
            operations = operations.len(),
            strings = ?config.strings,
            "built math registry"
        );
        Self {
            operations,
            aliases,
        }
    }

    /// Looks up an operation by published or internal name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Operation> {
        self.operations.get(name).or_else(|| {
            self.aliases
                .get(name)
                .and_then(|published| self.operations.get(published))
        })
    }

    /// Returns true if `name` resolves to an operation.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Calls the named operation, or returns `None` if there is no such name.
    #[must_use]
    pub fn call(&self, name: &str, args: &[Value]) -> Option<Result<Value>> {
        self.get(name).map(|op| op.call(args))
    }

    /// Returns the number of published operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns true if the registry publishes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Returns the published names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.operations.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Iterates over published names and operations in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Operation)> {
        self.operations.iter().map(|(name, op)| (*name, op))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
