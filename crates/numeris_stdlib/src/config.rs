//! Configuration for a math registry.

/// How string arguments are treated where a number is expected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StringCoercion {
    /// Trim and parse the string as a decimal number; fail if it does not parse.
    #[default]
    Parse,
    /// Strings are a type mismatch like any other non-number.
    Reject,
}

/// Configuration for a [`Registry`](crate::Registry).
#[derive(Clone, Debug, Default)]
pub struct MathConfig {
    /// Seed applied to the process-wide random source when the registry is
    /// built. `None` leaves the source as it is.
    pub seed: Option<u64>,

    /// String coercion policy for every operation in the registry.
    pub strings: StringCoercion,
}

impl MathConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that rejects string arguments.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strings: StringCoercion::Reject,
            ..Self::default()
        }
    }

    /// Creates a configuration that reseeds the random source.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Builder method to set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method to set the string coercion policy.
    #[must_use]
    pub fn with_strings(mut self, strings: StringCoercion) -> Self {
        self.strings = strings;
        self
    }
}
