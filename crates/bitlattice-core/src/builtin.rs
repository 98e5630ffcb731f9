//! The HIR type lattice consumed by the JIT.
//!
//! Every basic type below ends up as one bit of the generated header, in
//! table order. Reordering or inserting basic types renumbers every constant
//! after the edit point.

use crate::{BasicGroup, LatticeSpec, TypeName, UnionSpec};

/// Basic types that can't be subtyped by users.
const FINAL_TYPES: &[&str] = &["Array", "Bool", "Slice"];

/// Basic types that can be subtyped by users. Each is expanded into `*Exact`
/// and `*User` basic types plus a union of the two.
const BASE_TYPES: &[&str] = &["Int", "Str", "List"];

/// Root of the object hierarchy; contributes `ObjectExact` and `ObjectUser`.
const OBJECT: &str = "Object";

const SIGNED_TYPES: &[&str] = &["CInt8", "CInt16", "CInt32", "CInt64"];

const UNSIGNED_TYPES: &[&str] = &["CUInt8", "CUInt16", "CUInt32", "CUInt64"];

impl LatticeSpec {
    /// The builtin HIR lattice.
    pub fn hir() -> Self {
        let object = TypeName::from(OBJECT);
        let bases: Vec<TypeName> = BASE_TYPES.iter().copied().map(TypeName::from).collect();

        let exact: Vec<TypeName> = std::iter::once(&object)
            .chain(&bases)
            .map(|ty| ty.with_suffix("Exact"))
            .collect();
        let user: Vec<TypeName> = std::iter::once(&object)
            .chain(&bases)
            .map(|ty| ty.with_suffix("User"))
            .collect();

        let mut builder = LatticeSpec::builder()
            .basic(BasicGroup::Final, FINAL_TYPES.iter().copied())
            .basic(BasicGroup::Exact, exact.iter().cloned())
            .basic(BasicGroup::User, user.iter().cloned())
            .basic(BasicGroup::Primitive, ["CBool"])
            .basic(BasicGroup::Signed, SIGNED_TYPES.iter().copied())
            .basic(BasicGroup::Unsigned, UNSIGNED_TYPES.iter().copied())
            .basic(BasicGroup::Primitive, ["CPtr", "CDouble", "Nullptr"])
            .null_marker("Nullptr");

        // Pure Python object unions; these get Opt variants.
        let builtin_exact = FINAL_TYPES
            .iter()
            .copied()
            .map(TypeName::from)
            .chain(exact.iter().cloned());
        builder = builder.object_union(UnionSpec::new("BuiltinExact", builtin_exact));
        for base in &bases {
            builder = builder.object_union(UnionSpec::new(
                base.clone(),
                [base.with_suffix("User"), base.with_suffix("Exact")],
            ));
        }
        builder = builder.object_union(UnionSpec::new("User", user.iter().cloned()));

        // Everything that depends on the assembled tables goes through the
        // partially built spec so the groups can't drift from the basic list.
        let draft = builder.clone().build();
        let all = draft.names_where(|_| true);
        let pytypes = draft.names_where(BasicGroup::is_object);
        let primitives = draft.names_where(BasicGroup::is_primitive);

        builder
            .object_union(UnionSpec::new(OBJECT, pytypes))
            .other_union(UnionSpec::new("Top", all))
            .other_union(UnionSpec::new("Bottom", Vec::<TypeName>::new()))
            .other_union(UnionSpec::new("Primitive", primitives))
            .other_union(UnionSpec::new("CSigned", SIGNED_TYPES.iter().copied()))
            .other_union(UnionSpec::new("CUnsigned", UNSIGNED_TYPES.iter().copied()))
            .other_union(UnionSpec::new("CInt", ["CSigned", "CUnsigned"]))
            .build()
    }
}
