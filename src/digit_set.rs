//! Space-efficient sets of digits.
//!
//! The possibility set of a cell is recomputed on every query, so it has to
//! be cheap to build and compare. A fixed-size bitmask covers every grid
//! size the line format can express.

use crate::digit::Digit;
use crate::geometry::Geometry;

/// A set of digits, stored as a bitmask.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The empty set.
    pub const NONE: DigitSet = DigitSet(0);

    /// The set of every digit the grid allows, `1..=side`.
    pub fn all(geometry: Geometry) -> DigitSet {
        DigitSet((1u16 << geometry.side()) - 1)
    }

    /// Returns `true` if `digit` is contained in the set.
    pub fn contains(self, digit: Digit) -> bool {
        self.0 & (1 << digit.as_index()) != 0
    }

    /// Inserts `digit` into the set.
    pub fn insert(&mut self, digit: Digit) {
        self.0 |= 1 << digit.as_index();
    }

    /// Removes `digit` from the set.
    pub fn remove(&mut self, digit: Digit) {
        self.0 &= !(1 << digit.as_index());
    }

    /// Returns the set of digits in `self` that are not in `other`.
    pub fn without(self, other: DigitSet) -> DigitSet {
        DigitSet(self.0 & !other.0)
    }

    /// Returns the number of digits in the set.
    pub fn len(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Returns `true` if the set contains no digits.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the digit contained in the set, if it contains exactly one.
    pub fn unique(self) -> Option<Digit> {
        if self.0.count_ones() == 1 {
            Some(Digit::from_index(self.0.trailing_zeros() as u8))
        } else {
            None
        }
    }

    /// Returns an iterator over the digits in the set, in ascending order.
    pub fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the digits contained in a [`DigitSet`].
#[derive(Copy, Clone, Debug)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Digit::from_index(idx))
    }
}
