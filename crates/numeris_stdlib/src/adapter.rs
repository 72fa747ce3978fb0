//! Conversions between host values and `f64`.

use numeris_foundation::{Error, Type, Value};
use thiserror::Error;

use crate::config::StringCoercion;
use crate::flatten::Provenance;

/// Why a value could not be used as a number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NotANumber {
    /// The value has a non-numeric type.
    #[error("expected number, got {0}")]
    Mismatch(Type),
    /// The value is a string that does not parse.
    #[error("cannot parse {0:?} as a number")]
    Unparsable(String),
}

impl NotANumber {
    /// Attaches the operation name and argument position.
    #[must_use]
    pub fn into_error(self, op: &str, provenance: Provenance) -> Error {
        let context = provenance.to_string();
        match self {
            Self::Mismatch(actual) => Error::type_mismatch(op, context, actual),
            Self::Unparsable(text) => Error::invalid_number(op, context, text),
        }
    }
}

/// Converts a host value to a double.
///
/// Numbers pass through. Strings are parsed when `strings` allows it.
/// Booleans are never coerced.
///
/// # Errors
///
/// Returns [`NotANumber`] for any other variant, or for a string that does
/// not parse.
pub fn to_number(value: &Value, strings: StringCoercion) -> Result<f64, NotANumber> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::String(s) => match strings {
            StringCoercion::Parse => s
                .trim()
                .parse::<f64>()
                .map_err(|_| NotANumber::Unparsable(s.to_string())),
            StringCoercion::Reject => Err(NotANumber::Mismatch(Type::String)),
        },
        Value::Nil | Value::Bool(_) | Value::List(_) | Value::Map(_) => {
            Err(NotANumber::Mismatch(value.value_type()))
        }
    }
}

/// Wraps a double as a host value.
#[must_use]
pub fn from_number(x: f64) -> Value {
    Value::Number(x)
}

/// Wraps a boolean as a host value.
#[must_use]
pub fn from_bool(b: bool) -> Value {
    Value::Bool(b)
}

/// Truncates toward zero. Out-of-range values saturate and `NaN` becomes 0.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn truncate(x: f64) -> i64 {
    x as i64
}
