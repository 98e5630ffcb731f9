//! Bitmask representation of a type tag.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A set of basic-type bits.
///
/// Each basic type owns exactly one bit; every other type is the OR of the
/// basic types it admits.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Bits(u64);

impl Bits {
    /// The empty set (`Bottom`).
    pub const EMPTY: Self = Self(0);

    /// Maximum number of basic types a lattice can hold.
    pub const CAPACITY: usize = u64::BITS as usize;

    /// The single bit at `index`. Returns `None` past [`Bits::CAPACITY`].
    pub fn bit(index: usize) -> Option<Self> {
        u32::try_from(index)
            .ok()
            .and_then(|shift| 1u64.checked_shl(shift))
            .map(Self)
    }

    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_single_bit(self) -> bool {
        self.0.is_power_of_two()
    }

    pub fn count_ones(self) -> u32 {
        self.0.count_ones()
    }

    /// Whether every bit of `self` is also set in `other`.
    pub fn is_subset_of(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Number of hex digits needed to print the value; zero for the empty set.
    pub fn hex_digits(self) -> usize {
        let significant = (u64::BITS - self.0.leading_zeros()) as usize;
        significant.div_ceil(4)
    }
}

impl BitOr for Bits {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bits {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::LowerHex for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
