//! Errors reported while loading or solving a board.

use thiserror::Error;

/// Error for malformed board strings.
///
/// Parsing is strict: one ascii digit per cell, nothing else. A malformed
/// string is rejected before any solving begins.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum ParseError {
    /// The string does not contain exactly one character per cell.
    #[error("board string has {found} characters, expected {expected}")]
    WrongLength {
        /// Number of cells in the grid.
        expected: usize,
        /// Number of characters found.
        found: usize,
    },
    /// A character that is not an ascii digit.
    #[error("cell {cell} contains invalid character '{ch}'")]
    InvalidCharacter {
        /// Cell number in row-major order, `0..=8` for the first row and so on.
        cell: usize,
        /// The offending character.
        ch: char,
    },
    /// A digit larger than the grid allows.
    #[error("cell {cell} contains digit {digit}, expected 0..={max}")]
    DigitOutOfRange {
        /// Cell number in row-major order.
        cell: usize,
        /// The offending digit.
        digit: u8,
        /// The largest digit the grid allows.
        max: u8,
    },
}

/// Error for an attempt to give a value to a cell that already holds one.
///
/// Cells are assigned at most once. A second assignment means an
/// elimination rule fired when it should not have, which is a logic fault
/// and must abort the solve rather than silently corrupt the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("cell ({x}, {y}) already holds {current}, tried to assign {attempted}")]
pub struct AlreadyAssigned {
    /// Column of the cell, leftmost is 0.
    pub x: u8,
    /// Row of the cell, topmost is 0.
    pub y: u8,
    /// The value the cell holds.
    pub current: u8,
    /// The value the failed assignment carried.
    pub attempted: u8,
}

/// Error for a solve run that did not terminate cleanly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum SolveError {
    /// An elimination rule tried to overwrite an assigned cell.
    #[error(transparent)]
    AlreadyAssigned(#[from] AlreadyAssigned),
    /// No fixed point within the pass cap.
    ///
    /// Every pass before the last one assigns at least one cell, so this
    /// cannot trigger unless that invariant is broken.
    #[error("no fixed point after {limit} passes")]
    PassLimitExceeded {
        /// The pass cap that was exceeded.
        limit: usize,
    },
}
