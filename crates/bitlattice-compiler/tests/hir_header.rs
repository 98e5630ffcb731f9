//! The builtin lattice must regenerate the checked-in header byte for byte.

use bitlattice_compiler::emit::{Config, render};
use bitlattice_compiler::generate;
use bitlattice_core::LatticeSpec;

const EXPECTED: &str = include_str!("fixtures/hir_types.h");

#[test]
fn hir_header_matches_fixture() {
    let lattice = generate(&LatticeSpec::hir()).unwrap();

    let text = render(&lattice, &Config::default());

    assert_eq!(text, EXPECTED);
}

#[test]
fn hir_header_reports_bit_count() {
    let lattice = generate(&LatticeSpec::hir()).unwrap();

    assert_eq!(lattice.num_bits(), 23);
    assert!(render(&lattice, &Config::default()).contains("constexpr size_t kNumTypeBits = 23;\n"));
}
