use crate::geometry::Geometry;
use std::fmt;
use std::num::NonZeroU8;

// defined separately from the index types because it has an offset
/// A value that can be entered in a cell of a sudoku.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Digit(NonZeroU8);

impl Digit {
    /// Constructs a new `Digit`. Returns `None`, if the value is not in
    /// the range of `1..=side` for the given geometry.
    pub fn new_checked(value: u8, geometry: Geometry) -> Option<Self> {
        if value > geometry.side() {
            return None;
        }
        NonZeroU8::new(value).map(Digit)
    }

    /// Constructs a new `Digit` from an index, i.e. `value - 1`.
    pub(crate) fn from_index(idx: u8) -> Self {
        Digit(NonZeroU8::new(idx + 1).unwrap())
    }

    /// Returns the value contained within.
    pub fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the value offset by `-1`. Guarantees that the numbering starts from `0`.
    pub fn as_index(self) -> usize {
        self.get() as usize - 1
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
