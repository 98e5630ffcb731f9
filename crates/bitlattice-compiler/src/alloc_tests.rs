use bitlattice_core::{BasicGroup, Bits, LatticeSpec, TypeName};

use crate::Error;
use crate::alloc::allocate;

#[test]
fn bits_follow_table_order() {
    let spec = LatticeSpec::builder()
        .basic(BasicGroup::Final, ["A", "B"])
        .basic(BasicGroup::Primitive, ["N"])
        .build();

    let assignment = allocate(&spec).unwrap();

    assert_eq!(assignment.num_bits(), 3);
    assert_eq!(assignment.get("A"), Some(Bits::from_raw(1)));
    assert_eq!(assignment.get("B"), Some(Bits::from_raw(2)));
    assert_eq!(assignment.get("N"), Some(Bits::from_raw(4)));
    assert_eq!(assignment.get("C"), None);
}

#[test]
fn hir_bits_are_distinct_single_bits() {
    let spec = LatticeSpec::hir();
    let assignment = allocate(&spec).unwrap();

    assert_eq!(assignment.num_bits(), 23);
    let mut seen = Bits::EMPTY;
    for ty in spec.basic_types() {
        let name = &ty.name;
        let bits = assignment.get(name.as_str()).unwrap();
        assert!(bits.is_single_bit(), "{name} has {bits}");
        assert!(!bits.is_subset_of(seen), "{name} reuses a bit");
        seen |= bits;
    }
    assert_eq!(seen.count_ones(), 23);
}

#[test]
fn duplicate_basic_type_fails() {
    let spec = LatticeSpec::builder()
        .basic(BasicGroup::Final, ["A", "B"])
        .basic(BasicGroup::Primitive, ["A"])
        .build();

    assert_eq!(
        allocate(&spec).unwrap_err(),
        Error::DuplicateType(TypeName::from("A"))
    );
}

#[test]
fn sixty_four_basic_types_fit() {
    let spec = LatticeSpec::builder()
        .basic(BasicGroup::Primitive, (0..64).map(|i| format!("T{i}")))
        .build();

    let assignment = allocate(&spec).unwrap();

    assert_eq!(assignment.num_bits(), 64);
    assert_eq!(assignment.get("T63"), Some(Bits::from_raw(1 << 63)));
}

#[test]
fn too_many_basic_types_fails() {
    let spec = LatticeSpec::builder()
        .basic(BasicGroup::Primitive, (0..65).map(|i| format!("T{i}")))
        .build();

    assert_eq!(
        allocate(&spec).unwrap_err(),
        Error::TooManyBasicTypes {
            count: 65,
            capacity: 64
        }
    );
}

#[test]
fn empty_spec_has_no_bits() {
    let assignment = allocate(&LatticeSpec::builder().build()).unwrap();

    assert_eq!(assignment.num_bits(), 0);
}
