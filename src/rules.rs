//! The elimination rules.
//!
//! Both rules inspect a single cell against the live state of its
//! neighbours and either produce the one value the cell must hold or
//! nothing. They never write to the board; the board applies the result
//! and records which rule fired.

use crate::board::Board;
use crate::digit::Digit;
use std::fmt;

/// The elimination rule that produced an assignment.
///
/// Reported for trace output only; nothing downstream branches on it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Only one value is legal for the cell.
    LastPossibility,
    /// Of the cell's own candidates, only one is not also a candidate of
    /// some neighbour.
    LastOption,
}

impl Rule {
    /// A short name for trace lines.
    pub fn name(self) -> &'static str {
        match self {
            Rule::LastPossibility => "last possibility",
            Rule::LastOption => "last option",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A cell whose neighbours rule out all values but one must hold that value.
pub(crate) fn last_possibility(board: &Board, cell: u16) -> Option<Digit> {
    board.possibilities(cell).unique()
}

/// Starting from the cell's own candidates, drops every value that is also
/// a possibility of some neighbour. A value that survives cannot be placed
/// anywhere around the cell, so the cell must hold it.
///
/// This is a greedy elimination over all neighbours at once, not the
/// textbook hidden single, which works one house at a time. It can fire
/// where the hidden single does not and vice versa; the behaviour is kept
/// as is.
pub(crate) fn last_option(board: &Board, cell: u16) -> Option<Digit> {
    let mut survivors = board.possibilities(cell);
    for &neighbour in board.cell(cell).neighbours() {
        survivors = survivors.without(board.possibilities(neighbour));
        if survivors.is_empty() {
            return None;
        }
    }
    survivors.unique()
}
