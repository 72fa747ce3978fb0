//! Host values, arity descriptors, and errors for Numeris.
//!
//! This crate provides:
//! - [`Value`] - The tagged value a host runtime hands to math operations
//! - [`Type`] - Tags naming each value variant in error messages
//! - [`Arity`] - Argument-count constraints and their canonical messages
//! - [`Error`] - Arity and type errors carrying the operation name
//! - Persistent collections ([`LtVec`], [`LtMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod collections;
mod error;
mod types;
mod value;

pub use collections::{LtMap, LtVec};
pub use error::{Error, ErrorKind};
pub use types::{Arity, Type};
pub use value::Value;

/// Result type alias using the Numeris error type.
pub type Result<T> = std::result::Result<T, Error>;
