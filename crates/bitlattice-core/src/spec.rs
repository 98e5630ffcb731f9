//! Declarative lattice specification.
//!
//! A `LatticeSpec` is a set of immutable, ordered tables: the basic types in
//! bit-allocation order, then two groups of unions. Union order matters: a
//! union may reference any basic type and any union declared before it, in
//! its own group or in an earlier one.

use crate::TypeName;

/// Name of the null-marker basic type unless the builder says otherwise.
const DEFAULT_NULL_MARKER: &str = "Nullptr";

/// Classification of a basic type.
///
/// Pure data: the group decides which generated unions a type joins and
/// whether it gets an `Opt` variant.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BasicGroup {
    /// Python object types that users cannot subtype.
    Final,
    /// Exact instances of a subtypable Python type.
    Exact,
    /// User-defined subtypes of a subtypable Python type.
    User,
    /// Signed C integers.
    Signed,
    /// Unsigned C integers.
    Unsigned,
    /// Other runtime-internal machine values (bool, pointer, double, null).
    Primitive,
}

impl BasicGroup {
    /// Heap-object categories; these are the only ones with an `Opt` variant.
    pub fn is_object(self) -> bool {
        matches!(self, Self::Final | Self::Exact | Self::User)
    }

    pub fn is_primitive(self) -> bool {
        !self.is_object()
    }
}

/// An atomic type that owns one bit.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BasicType {
    pub name: TypeName,
    pub group: BasicGroup,
}

/// Which union table a union was declared in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UnionGroup {
    /// Unions of Python object types only. These get `Opt` variants.
    Object,
    /// Structural and primitive unions (`Top`, `Bottom`, integer categories).
    Other,
}

/// A named union of previously defined types.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UnionSpec {
    pub name: TypeName,
    pub components: Vec<TypeName>,
}

impl UnionSpec {
    pub fn new<I, S>(name: impl Into<TypeName>, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TypeName>,
    {
        Self {
            name: name.into(),
            components: components.into_iter().map(Into::into).collect(),
        }
    }
}

/// The complete, ordered input of one generation run.
#[derive(Clone, Debug)]
pub struct LatticeSpec {
    basic: Vec<BasicType>,
    null_marker: TypeName,
    object_unions: Vec<UnionSpec>,
    other_unions: Vec<UnionSpec>,
}

impl LatticeSpec {
    pub fn builder() -> LatticeSpecBuilder {
        LatticeSpecBuilder::default()
    }

    /// Basic types in bit-allocation order.
    pub fn basic_types(&self) -> &[BasicType] {
        &self.basic
    }

    /// Names of the basic types whose group satisfies `pred`, in allocation order.
    pub fn names_where(&self, pred: impl Fn(BasicGroup) -> bool) -> Vec<TypeName> {
        self.basic
            .iter()
            .filter(|ty| pred(ty.group))
            .map(|ty| ty.name.clone())
            .collect()
    }

    pub fn group_of(&self, name: &str) -> Option<BasicGroup> {
        self.basic
            .iter()
            .find(|ty| ty.name.as_str() == name)
            .map(|ty| ty.group)
    }

    /// The basic type OR'd into every `Opt` variant.
    pub fn null_marker(&self) -> &TypeName {
        &self.null_marker
    }

    pub fn object_unions(&self) -> &[UnionSpec] {
        &self.object_unions
    }

    pub fn other_unions(&self) -> &[UnionSpec] {
        &self.other_unions
    }

    /// All unions in resolution order: the object group first, then the rest.
    pub fn unions(&self) -> impl Iterator<Item = (UnionGroup, &UnionSpec)> {
        let object = self.object_unions.iter().map(|u| (UnionGroup::Object, u));
        let other = self.other_unions.iter().map(|u| (UnionGroup::Other, u));
        object.chain(other)
    }
}

/// Builder for [`LatticeSpec`].
///
/// Tables keep the order in which entries are added.
#[derive(Clone, Debug, Default)]
pub struct LatticeSpecBuilder {
    basic: Vec<BasicType>,
    null_marker: Option<TypeName>,
    object_unions: Vec<UnionSpec>,
    other_unions: Vec<UnionSpec>,
}

impl LatticeSpecBuilder {
    /// Append basic types of one group.
    pub fn basic<I, S>(mut self, group: BasicGroup, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TypeName>,
    {
        self.basic.extend(names.into_iter().map(|name| BasicType {
            name: name.into(),
            group,
        }));
        self
    }

    /// Override the null-marker basic type (default: `Nullptr`).
    pub fn null_marker(mut self, name: impl Into<TypeName>) -> Self {
        self.null_marker = Some(name.into());
        self
    }

    pub fn object_union(mut self, union: UnionSpec) -> Self {
        self.object_unions.push(union);
        self
    }

    pub fn other_union(mut self, union: UnionSpec) -> Self {
        self.other_unions.push(union);
        self
    }

    pub fn build(self) -> LatticeSpec {
        LatticeSpec {
            basic: self.basic,
            null_marker: self
                .null_marker
                .unwrap_or_else(|| TypeName::from(DEFAULT_NULL_MARKER)),
            object_unions: self.object_unions,
            other_unions: self.other_unions,
        }
    }
}
