//! Optional expander.
//!
//! Object categories (object basic types and object unions) are emitted as a
//! `T`/`OptT` pair, where `OptT` also admits the null marker. Primitive basic
//! types and the other unions are emitted alone: they have no null state.

use bitlattice_core::LatticeSpec;

use crate::lattice::{Type, TypeOrigin};
use crate::resolve::Resolved;
use crate::{Error, Result};

/// Collect every type of the lattice, unsorted, with `Opt` variants added.
pub fn expand(spec: &LatticeSpec, resolved: &Resolved) -> Result<Vec<Type>> {
    let null_marker = spec.null_marker();
    let null_bit = match resolved.lookup(null_marker.as_str()) {
        Some((bits, TypeOrigin::Basic(_))) => bits,
        _ => return Err(Error::UndefinedNullMarker(null_marker.clone())),
    };

    let mut types = Vec::with_capacity(resolved.len() * 2);
    for (name, bits, origin) in resolved.iter() {
        types.push(Type::new(name.clone(), bits, origin));
        if origin.is_nullable() {
            types.push(Type::new(name.optional(), bits | null_bit, TypeOrigin::Optional));
        }
    }

    tracing::debug!(
        target: "lattice",
        optional = types.len() - resolved.len(),
        total = types.len(),
        "expanded optional variants"
    );
    Ok(types)
}
