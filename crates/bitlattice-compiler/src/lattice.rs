//! The resolved lattice: every named type and its bitmask, sorted by name.

use bitlattice_core::{BasicGroup, Bits, TypeName, UnionGroup};

use crate::{Error, Result};

/// Where a type came from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TypeOrigin {
    /// A basic type owning one bit.
    Basic(BasicGroup),
    /// A union declared in the given group.
    Union(UnionGroup),
    /// An `Opt*` variant derived by OR'ing in the null marker.
    Optional,
}

impl TypeOrigin {
    /// Whether the type gets an `Opt*` variant.
    pub fn is_nullable(self) -> bool {
        match self {
            Self::Basic(group) => group.is_object(),
            Self::Union(group) => group == UnionGroup::Object,
            Self::Optional => false,
        }
    }
}

/// A named type tag.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Type {
    pub name: TypeName,
    pub bits: Bits,
    pub origin: TypeOrigin,
}

impl Type {
    pub fn new(name: TypeName, bits: Bits, origin: TypeOrigin) -> Self {
        Self { name, bits, origin }
    }
}

/// All types of a generated lattice, sorted by name.
#[derive(Clone, Debug)]
pub struct Lattice {
    types: Vec<Type>,
    num_bits: usize,
}

impl Lattice {
    /// Sort `types` by name. Fails if two types share a name.
    pub fn new(mut types: Vec<Type>, num_bits: usize) -> Result<Self> {
        types.sort_by(|a, b| a.name.cmp(&b.name));
        if let Some(pair) = types.windows(2).find(|pair| pair[0].name == pair[1].name) {
            return Err(Error::DuplicateType(pair[0].name.clone()));
        }
        Ok(Self { types, num_bits })
    }

    /// Number of basic types, i.e. bits in use.
    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    pub fn types(&self) -> &[Type] {
        &self.types
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Type> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Type> {
        self.types
            .binary_search_by(|ty| ty.name.as_str().cmp(name))
            .ok()
            .map(|idx| &self.types[idx])
    }

    pub fn bits(&self, name: &str) -> Option<Bits> {
        self.get(name).map(|ty| ty.bits)
    }
}

impl<'a> IntoIterator for &'a Lattice {
    type Item = &'a Type;
    type IntoIter = std::slice::Iter<'a, Type>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter()
    }
}
