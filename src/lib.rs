//! Numeris - math functions for host expression runtimes
//!
//! This crate re-exports both layers of the Numeris library for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: numeris_stdlib      - Operations, random source, registry
//! Layer 0: numeris_foundation  - Core types (Value, Arity, Error)
//! ```

pub use numeris_foundation as foundation;
pub use numeris_stdlib as stdlib;
