//! Error types for Numeris operations.
//!
//! Uses `thiserror` for ergonomic error definition. Every error names the
//! operation that raised it, so messages read `"<op>: <detail>"`.
//!
//! Domain errors of pure math (square root of a negative, logarithm of zero)
//! are not errors at all; operations return `NaN` for those.

use thiserror::Error;

use crate::types::{Arity, Type};

/// The main error type for Numeris operations.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{op}: {kind}")]
pub struct Error {
    /// Name of the operation that failed.
    pub op: String,
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error for the named operation.
    #[must_use]
    pub fn new(op: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            op: op.into(),
            kind,
        }
    }

    /// Creates an arity mismatch error.
    #[must_use]
    pub fn arity_mismatch(op: impl Into<String>, expected: Arity, actual: usize) -> Self {
        Self::new(op, ErrorKind::ArityMismatch { expected, actual })
    }

    /// Creates a type mismatch error for an argument that is not a number.
    #[must_use]
    pub fn type_mismatch(op: impl Into<String>, context: impl Into<String>, actual: Type) -> Self {
        Self::new(
            op,
            ErrorKind::TypeMismatch {
                context: context.into(),
                expected: Type::Number,
                actual,
            },
        )
    }

    /// Creates an error for a string argument that does not parse as a number.
    #[must_use]
    pub fn invalid_number(
        op: impl Into<String>,
        context: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self::new(
            op,
            ErrorKind::InvalidNumber {
                context: context.into(),
                text: text.into(),
            },
        )
    }

    /// Creates the error raised by reducers that received nothing to reduce.
    #[must_use]
    pub fn no_values(op: impl Into<String>) -> Self {
        Self::new(op, ErrorKind::NoValues)
    }

    /// Returns true for wrong-argument-count errors.
    #[must_use]
    pub fn is_arity_error(&self) -> bool {
        matches!(self.kind, ErrorKind::ArityMismatch { .. })
    }

    /// Returns true for errors raised while turning arguments into numbers.
    #[must_use]
    pub fn is_type_error(&self) -> bool {
        !self.is_arity_error()
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    /// Wrong number of arguments to an operation.
    #[error("{expected}")]
    ArityMismatch {
        /// The arity the operation declares.
        expected: Arity,
        /// Actual number of arguments.
        actual: usize,
    },

    /// An argument was not of a numeric type.
    #[error("{context} expected {expected}, got {actual}")]
    TypeMismatch {
        /// Which argument was wrong (`argument 2`, `argument 1 item 3`, `base`).
        context: String,
        /// The expected type.
        expected: Type,
        /// The actual type encountered.
        actual: Type,
    },

    /// A string argument could not be parsed as a number.
    #[error("{context} cannot parse {text:?} as a number")]
    InvalidNumber {
        /// Which argument was wrong.
        context: String,
        /// The offending text.
        text: String,
    },

    /// A reducer found no values after flattening its arguments.
    #[error("no numeric values found")]
    NoValues,
}
