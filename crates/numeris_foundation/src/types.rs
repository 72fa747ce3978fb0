//! Value tags and arity descriptors.

use std::fmt;

/// Tag naming the variant of a [`Value`](crate::Value).
///
/// Used in type-mismatch messages (`expected number, got bool`).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// The nil type (only value: nil).
    Nil,
    /// Boolean type.
    Bool,
    /// IEEE-754 double.
    Number,
    /// String type.
    String,
    /// Flat ordered sequence.
    List,
    /// Key-value map.
    Map,
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool => write!(f, "bool"),
            Self::Number => write!(f, "number"),
            Self::String => write!(f, "string"),
            Self::List => write!(f, "list"),
            Self::Map => write!(f, "map"),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Accepted argument counts for an operation.
///
/// Every operation declares one of these; the registry checks it before any
/// argument is coerced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Exactly N arguments.
    Exact(usize),
    /// Between min and max arguments (inclusive).
    Range(usize, usize),
    /// At least N arguments, then any number more.
    Variadic(usize),
    /// One of a fixed set of counts, listed in ascending order.
    OneOf(&'static [usize]),
}

impl Arity {
    /// Returns true if a call with `count` arguments satisfies this arity.
    #[must_use]
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exact(n) => count == n,
            Self::Range(lo, hi) => (lo..=hi).contains(&count),
            Self::Variadic(min) => count >= min,
            Self::OneOf(counts) => counts.contains(&count),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(1) => write!(f, "expected 1 argument"),
            Self::Exact(n) => write!(f, "expected {n} arguments"),
            Self::Range(lo, hi) => write!(f, "expected between {lo} and {hi}"),
            Self::Variadic(min) => write!(f, "expected at least {min}"),
            Self::OneOf(counts) => {
                write!(f, "expected one of {{")?;
                for (i, count) in counts.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{count}")?;
                }
                write!(f, "}}")
            }
        }
    }
}
