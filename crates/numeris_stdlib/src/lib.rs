//! Math operations for a host expression runtime.
//!
//! This crate provides the operations a host publishes under their names:
//! - Scalar math (rounding, powers, logarithms, trigonometry, constants)
//! - Reducers over mixed numbers and lists (sum, mean, median, mode, ...)
//! - Number theory (gcd, lcm, factorial)
//! - A seedable process-wide random source
//!
//! Hosts build a [`Registry`] once and call operations by name:
//!
//! ```
//! use numeris_foundation::Value;
//! use numeris_stdlib::Registry;
//!
//! let registry = Registry::new();
//! let median = registry.call("median", &[Value::from(vec![3, 1, 2])]);
//! assert_eq!(median.unwrap().unwrap(), Value::from(2.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod adapter;
mod args;
mod config;
mod flatten;
mod number_theory;
pub mod random;
mod reduce;
mod registry;
mod scalar;

pub use args::Args;
pub use config::{MathConfig, StringCoercion};
pub use flatten::{Flatten, Provenance};
pub use random::RandomSource;
pub use registry::{Operation, OperationFn, Registry};
