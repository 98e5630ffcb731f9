//! Base allocator: one bit per basic type, in table order.

use indexmap::IndexMap;
use indexmap::map::Entry;

use bitlattice_core::{Bits, LatticeSpec, TypeName};

use crate::lattice::TypeOrigin;
use crate::{Error, Result};

/// Bits of every basic type, in allocation order.
#[derive(Clone, Debug)]
pub struct BitAssignment {
    pub(crate) bits: IndexMap<TypeName, (Bits, TypeOrigin)>,
}

impl BitAssignment {
    pub fn get(&self, name: &str) -> Option<Bits> {
        self.bits.get(name).map(|&(bits, _)| bits)
    }

    /// Width of the lattice: the number of basic types.
    pub fn num_bits(&self) -> usize {
        self.bits.len()
    }
}

/// Give the i-th basic type of `spec` the bit `1 << i`.
pub fn allocate(spec: &LatticeSpec) -> Result<BitAssignment> {
    let basic = spec.basic_types();
    if basic.len() > Bits::CAPACITY {
        return Err(Error::TooManyBasicTypes {
            count: basic.len(),
            capacity: Bits::CAPACITY,
        });
    }

    let mut bits = IndexMap::with_capacity(basic.len());
    for (index, ty) in basic.iter().enumerate() {
        let bit = Bits::bit(index).ok_or(Error::TooManyBasicTypes {
            count: basic.len(),
            capacity: Bits::CAPACITY,
        })?;
        match bits.entry(ty.name.clone()) {
            Entry::Occupied(_) => return Err(Error::DuplicateType(ty.name.clone())),
            Entry::Vacant(e) => {
                e.insert((bit, TypeOrigin::Basic(ty.group)));
            }
        }
    }

    tracing::debug!(target: "lattice", num_bits = bits.len(), "allocated basic type bits");
    Ok(BitAssignment { bits })
}
