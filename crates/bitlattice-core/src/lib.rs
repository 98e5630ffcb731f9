#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for the bitlattice type-tag generator.
//!
//! Three layers:
//! - **Names and bits**: `TypeName` identifiers and the `Bits` mask they map to
//! - **Specification**: `LatticeSpec`, the ordered tables of basic types and unions
//! - **Builtin tables**: `LatticeSpec::hir()`, the lattice shipped to the JIT

mod bits;
mod builtin;
mod name;
mod spec;


pub use bits::Bits;
pub use name::TypeName;
pub use spec::{BasicGroup, BasicType, LatticeSpec, LatticeSpecBuilder, UnionGroup, UnionSpec};

/// Prefix of the derived "this or null" variant of a type.
pub const OPTIONAL_PREFIX: &str = "Opt";
