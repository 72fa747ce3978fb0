//! Per-call argument access for operation bodies.

use numeris_foundation::{Error, Result, Value};

use crate::adapter::{to_number, truncate};
use crate::config::StringCoercion;
use crate::flatten::{Flatten, Provenance};

/// The arguments of one call, with the operation name for error messages.
///
/// Arity has already been checked when an operation body sees this, so
/// positional accessors only fail on coercion.
#[derive(Clone, Copy, Debug)]
pub struct Args<'a> {
    op: &'static str,
    values: &'a [Value],
    strings: StringCoercion,
}

impl<'a> Args<'a> {
    /// Creates an argument view for operation `op`.
    #[must_use]
    pub fn new(op: &'static str, values: &'a [Value], strings: StringCoercion) -> Self {
        Self {
            op,
            values,
            strings,
        }
    }

    /// Returns the number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Coerces one value to a double, labelling any failure with `provenance`.
    ///
    /// # Errors
    ///
    /// Returns a type error if the value is not numeric.
    pub fn coerce(&self, value: &Value, provenance: Provenance) -> Result<f64> {
        to_number(value, self.strings).map_err(|cause| cause.into_error(self.op, provenance))
    }

    /// Coerces the argument at `index`, naming it `role` in errors.
    ///
    /// # Errors
    ///
    /// Returns a type error if the argument is missing or not numeric.
    pub fn number(&self, index: usize, role: &'static str) -> Result<f64> {
        match self.values.get(index) {
            Some(value) => self.coerce(value, Provenance::Role(role)),
            None => self.coerce(&Value::Nil, Provenance::Role(role)),
        }
    }

    /// Coerces the argument at `index` and truncates it toward zero.
    ///
    /// # Errors
    ///
    /// Returns a type error if the argument is missing or not numeric.
    pub fn integer(&self, index: usize, role: &'static str) -> Result<i64> {
        self.number(index, role).map(truncate)
    }

    /// Truncates the argument at `index` if present, else returns `default`.
    ///
    /// # Errors
    ///
    /// Returns a type error if the argument is present but not numeric.
    pub fn integer_or(&self, index: usize, role: &'static str, default: i64) -> Result<i64> {
        if index < self.values.len() {
            self.integer(index, role)
        } else {
            Ok(default)
        }
    }

    /// Coerces every argument positionally, without expanding lists.
    ///
    /// # Errors
    ///
    /// Returns a type error naming the first argument that is not numeric.
    pub fn numbers(&self) -> Result<Vec<f64>> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, value)| self.coerce(value, Provenance::Argument(i)))
            .collect()
    }

    /// Flattens scalar and list arguments into one sequence of doubles.
    ///
    /// # Errors
    ///
    /// Returns a type error naming the first element that is not numeric.
    pub fn flatten(&self) -> Result<Vec<f64>> {
        Flatten::new(self.values)
            .map(|(provenance, value)| self.coerce(value, provenance))
            .collect()
    }

    /// Flattens, failing with "no numeric values found" on an empty result.
    ///
    /// # Errors
    ///
    /// Returns a type error on a non-numeric element or an empty sequence.
    pub fn flatten_non_empty(&self) -> Result<Vec<f64>> {
        let xs = self.flatten()?;
        if xs.is_empty() {
            return Err(Error::no_values(self.op));
        }
        Ok(xs)
    }
}
