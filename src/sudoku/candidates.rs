#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Fixed-width bitsets over the value range `{1..side}`.
//!
//! Every cell of a grid holds a `CandidateSet`: one bit per value, bit `v - 1`
//! set iff value `v` is still possible for that cell. Subset tests, unions,
//! intersections and differences are single integer operations, and the
//! subset-elimination rule enumerates value subsets by iterating the raw
//! encodings `1..full_mask` directly.

use core::fmt;
use core::ops::{BitAnd, BitOr, Sub};

/// A set of candidate values drawn from `{1..=side}`, stored as a `u32`
/// bitmask. Sides above [`CandidateSet::MAX_VALUES`] are not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CandidateSet(u32);

impl CandidateSet {
    /// The set containing no values.
    pub const EMPTY: Self = Self(0);

    /// The widest supported value range, fixed by the `u32` backing.
    pub const MAX_VALUES: usize = 32;

    /// The full set `{1..=side}`.
    ///
    /// # Panics
    ///
    /// If `side` is zero or exceeds [`Self::MAX_VALUES`].
    #[must_use]
    pub const fn full(side: usize) -> Self {
        assert!(side >= 1 && side <= Self::MAX_VALUES);
        if side == Self::MAX_VALUES {
            Self(u32::MAX)
        } else {
            Self((1 << side) - 1)
        }
    }

    /// The set containing exactly `value`.
    ///
    /// # Panics
    ///
    /// If `value` is not in `{1..=MAX_VALUES}`.
    #[must_use]
    pub const fn singleton(value: u32) -> Self {
        assert!(value >= 1 && value as usize <= Self::MAX_VALUES);
        Self(1 << (value - 1))
    }

    /// Reconstructs a set from its raw encoding, bit `v - 1` meaning value `v`.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw encoding of this set.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Number of values in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True iff the set holds exactly one value, i.e. the cell is resolved.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        self.0.count_ones() == 1
    }

    #[must_use]
    pub const fn contains(self, value: u32) -> bool {
        value >= 1
            && (value as usize) <= Self::MAX_VALUES
            && self.0 & (1 << (value - 1)) != 0
    }

    /// True iff every value in `self` is also in `other`.
    #[must_use]
    pub const fn is_subset_of(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// The resolved value, if the set is a singleton.
    #[must_use]
    pub const fn value(self) -> Option<u32> {
        if self.is_singleton() {
            Some(self.0.trailing_zeros() + 1)
        } else {
            None
        }
    }

    /// The smallest value in the set, if any.
    #[must_use]
    pub const fn min_value(self) -> Option<u32> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros() + 1)
        }
    }

    /// Adds `value` to the set.
    ///
    /// # Panics
    ///
    /// If `value` is not in `{1..=MAX_VALUES}`.
    pub const fn insert(&mut self, value: u32) {
        assert!(value >= 1 && value as usize <= Self::MAX_VALUES);
        self.0 |= 1 << (value - 1);
    }

    /// Removes `value` from the set, if present.
    pub const fn remove(&mut self, value: u32) {
        if value >= 1 && (value as usize) <= Self::MAX_VALUES {
            self.0 &= !(1 << (value - 1));
        }
    }

    /// Iterates the values in the set in increasing order.
    #[must_use]
    pub const fn iter(self) -> Values {
        Values(self.0)
    }
}

impl BitOr for CandidateSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for CandidateSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Sub for CandidateSet {
    type Output = Self;

    /// Set difference: the values of `self` not present in `rhs`.
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 & !rhs.0)
    }
}

impl FromIterator<u32> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl IntoIterator for CandidateSet {
    type Item = u32;
    type IntoIter = Values;

    fn into_iter(self) -> Values {
        self.iter()
    }
}

/// Iterator over the values of a [`CandidateSet`], smallest first.
#[derive(Debug, Clone)]
pub struct Values(u32);

impl Iterator for Values {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.0 == 0 {
            return None;
        }
        let value = self.0.trailing_zeros() + 1;
        self.0 &= self.0 - 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Values {}

impl fmt::Display for CandidateSet {
    /// Renders the set as its sorted values, e.g. `{1,4,7}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "}}")
    }
}
