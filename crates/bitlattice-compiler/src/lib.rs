//! bitlattice compiler: turns a `LatticeSpec` into a sorted type lattice and
//! renders it as a C++ X-macro header.
//!
//! Stages run in order, each consuming the previous one's output:
//! - `alloc` - one bit per basic type
//! - `resolve` - union bitmasks, object unions before the rest
//! - `optional` - `Opt*` variants for object categories
//! - `emit` - the header text

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod alloc;
pub mod emit;
pub mod lattice;
pub mod optional;
pub mod resolve;

#[cfg(test)]
mod alloc_tests;
#[cfg(test)]
mod resolve_tests;

use bitlattice_core::{LatticeSpec, TypeName};

pub use lattice::{Lattice, Type, TypeOrigin};

/// Errors in a lattice specification.
///
/// All of these are defects in the static tables; generation stops at the
/// first one instead of emitting a wrong lattice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The same name was declared twice (basic type, union, or derived `Opt` variant).
    #[error("type `{0}` is defined more than once")]
    DuplicateType(TypeName),

    #[error("union `{union}` references undefined type `{component}`")]
    UndefinedComponent { union: TypeName, component: TypeName },

    #[error("null marker `{0}` is not a basic type")]
    UndefinedNullMarker(TypeName),

    #[error("{count} basic types do not fit in a {capacity}-bit lattice")]
    TooManyBasicTypes { count: usize, capacity: usize },
}

/// Result type for lattice generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Run allocation, union resolution and optional expansion over `spec`.
pub fn generate(spec: &LatticeSpec) -> Result<Lattice> {
    let assignment = alloc::allocate(spec)?;
    let resolved = resolve::resolve_unions(spec, assignment)?;
    let types = optional::expand(spec, &resolved)?;
    Lattice::new(types, resolved.num_bits())
}
