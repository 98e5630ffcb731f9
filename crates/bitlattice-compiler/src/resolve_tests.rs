use bitlattice_core::{BasicGroup, Bits, LatticeSpec, TypeName, UnionGroup, UnionSpec};

use crate::Error;
use crate::alloc::allocate;
use crate::lattice::TypeOrigin;
use crate::resolve::{Resolved, resolve_unions};

fn resolve(spec: &LatticeSpec) -> Result<Resolved, Error> {
    resolve_unions(spec, allocate(spec)?)
}

fn ab_spec() -> bitlattice_core::LatticeSpecBuilder {
    LatticeSpec::builder()
        .basic(BasicGroup::Final, ["A", "B"])
        .basic(BasicGroup::Primitive, ["N"])
}

#[test]
fn union_is_or_of_components() {
    let spec = ab_spec()
        .other_union(UnionSpec::new("U", ["A", "B"]))
        .build();

    let resolved = resolve(&spec).unwrap();

    assert_eq!(resolved.get("U"), Some(Bits::from_raw(3)));
    assert_eq!(resolved.num_bits(), 3);
    assert_eq!(resolved.len(), 4);
}

#[test]
fn empty_union_is_zero() {
    let spec = ab_spec()
        .other_union(UnionSpec::new("Bottom", Vec::<TypeName>::new()))
        .build();

    assert_eq!(resolve(&spec).unwrap().get("Bottom"), Some(Bits::EMPTY));
}

#[test]
fn other_unions_see_object_unions() {
    let spec = ab_spec()
        .object_union(UnionSpec::new("Obj", ["A", "B"]))
        .other_union(UnionSpec::new("All", ["Obj", "N"]))
        .build();

    assert_eq!(resolve(&spec).unwrap().get("All"), Some(Bits::from_raw(7)));
}

#[test]
fn later_union_in_same_group_sees_earlier() {
    let spec = ab_spec()
        .other_union(UnionSpec::new("U1", ["A"]))
        .other_union(UnionSpec::new("U2", ["U1", "N"]))
        .build();

    assert_eq!(resolve(&spec).unwrap().get("U2"), Some(Bits::from_raw(5)));
}

#[test]
fn union_cannot_see_later_union() {
    let spec = ab_spec()
        .other_union(UnionSpec::new("U1", ["U2"]))
        .other_union(UnionSpec::new("U2", ["A"]))
        .build();

    assert_eq!(
        resolve(&spec).unwrap_err(),
        Error::UndefinedComponent {
            union: TypeName::from("U1"),
            component: TypeName::from("U2"),
        }
    );
}

#[test]
fn object_union_cannot_see_other_union() {
    let spec = ab_spec()
        .object_union(UnionSpec::new("Obj", ["Top"]))
        .other_union(UnionSpec::new("Top", ["A", "B", "N"]))
        .build();

    assert!(matches!(
        resolve(&spec),
        Err(Error::UndefinedComponent { component, .. }) if component.as_str() == "Top"
    ));
}

#[test]
fn undefined_component_fails() {
    let spec = ab_spec()
        .other_union(UnionSpec::new("U", ["A", "Missing"]))
        .build();

    let err = resolve(&spec).unwrap_err();

    assert_eq!(
        err.to_string(),
        "union `U` references undefined type `Missing`"
    );
}

#[test]
fn union_shadowing_basic_type_fails() {
    let spec = ab_spec()
        .other_union(UnionSpec::new("A", ["B"]))
        .build();

    assert_eq!(
        resolve(&spec).unwrap_err(),
        Error::DuplicateType(TypeName::from("A"))
    );
}

#[test]
fn hir_unions() {
    let resolved = resolve(&LatticeSpec::hir()).unwrap();
    let bits = |name: &str| resolved.get(name).unwrap();

    assert_eq!(bits("Top"), Bits::from_raw(0x7fffff));
    assert_eq!(bits("Bottom"), Bits::EMPTY);
    assert_eq!(bits("Object"), Bits::from_raw(0x7ff));
    assert_eq!(bits("Primitive"), Bits::from_raw(0x7ff800));
    assert_eq!(bits("BuiltinExact"), Bits::from_raw(0x7f));
    assert_eq!(bits("Int"), bits("IntUser") | bits("IntExact"));
    assert_eq!(bits("CInt"), bits("CSigned") | bits("CUnsigned"));
    assert_eq!(bits("CInt"), Bits::from_raw(0x0ff000));
    assert_eq!(bits("Object") | bits("Primitive"), bits("Top"));
}

#[test]
fn lookup_reports_origin() {
    let spec = ab_spec()
        .object_union(UnionSpec::new("Obj", ["A", "B"]))
        .other_union(UnionSpec::new("Top", ["Obj", "N"]))
        .build();

    let resolved = resolve(&spec).unwrap();

    assert_eq!(
        resolved.lookup("N"),
        Some((Bits::from_raw(4), TypeOrigin::Basic(BasicGroup::Primitive)))
    );
    assert_eq!(
        resolved.lookup("Obj"),
        Some((Bits::from_raw(3), TypeOrigin::Union(UnionGroup::Object)))
    );
    assert_eq!(
        resolved.lookup("Top"),
        Some((Bits::from_raw(7), TypeOrigin::Union(UnionGroup::Other)))
    );
    assert_eq!(resolved.lookup("Missing"), None);
}
