//! Union resolver.
//!
//! Unions are resolved strictly in declaration order, object unions first.
//! Each resolved union is added to the lookup table, so it is visible to every
//! union after it and to none before it.

use indexmap::IndexMap;
use indexmap::map::Entry;

use bitlattice_core::{Bits, LatticeSpec, TypeName, UnionGroup, UnionSpec};

use crate::alloc::BitAssignment;
use crate::lattice::TypeOrigin;
use crate::{Error, Result};

/// Bits of every basic type and union.
#[derive(Clone, Debug)]
pub struct Resolved {
    bits: IndexMap<TypeName, (Bits, TypeOrigin)>,
    num_bits: usize,
}

impl Resolved {
    pub fn get(&self, name: &str) -> Option<Bits> {
        self.lookup(name).map(|(bits, _)| bits)
    }

    /// Bits and origin of `name`.
    pub fn lookup(&self, name: &str) -> Option<(Bits, TypeOrigin)> {
        self.bits.get(name).copied()
    }

    /// Basic types in allocation order, then unions in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = (&TypeName, Bits, TypeOrigin)> {
        self.bits
            .iter()
            .map(|(name, &(bits, origin))| (name, bits, origin))
    }

    /// Bit width inherited from the allocator; unions never add bits.
    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    /// Number of named entries (basic types and unions).
    pub(crate) fn len(&self) -> usize {
        self.bits.len()
    }
}

/// Resolve every union of `spec` on top of the basic-type `assignment`.
pub fn resolve_unions(spec: &LatticeSpec, assignment: BitAssignment) -> Result<Resolved> {
    let num_bits = assignment.num_bits();
    let mut bits = assignment.bits;

    let mut object_count = 0usize;
    for (group, union) in spec.unions() {
        let union_bits = union_bits(union, &bits)?;
        match bits.entry(union.name.clone()) {
            Entry::Occupied(_) => return Err(Error::DuplicateType(union.name.clone())),
            Entry::Vacant(e) => {
                e.insert((union_bits, TypeOrigin::Union(group)));
            }
        }
        if group == UnionGroup::Object {
            object_count += 1;
        }
        tracing::trace!(target: "lattice", union = %union.name, bits = %union_bits, "resolved union");
    }

    tracing::debug!(
        target: "lattice",
        object_unions = object_count,
        other_unions = bits.len() - num_bits - object_count,
        "resolved unions"
    );
    Ok(Resolved { bits, num_bits })
}

/// OR of the component bitmasks. An empty union is `Bits::EMPTY`.
fn union_bits(union: &UnionSpec, known: &IndexMap<TypeName, (Bits, TypeOrigin)>) -> Result<Bits> {
    let mut acc = Bits::EMPTY;
    for component in &union.components {
        let Some(&(bits, _)) = known.get(component) else {
            return Err(Error::UndefinedComponent {
                union: union.name.clone(),
                component: component.clone(),
            });
        };
        acc |= bits;
    }
    Ok(acc)
}
