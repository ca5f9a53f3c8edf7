use crate::digit::Digit;
use crate::errors::AlreadyAssigned;

/// A single cell of a board.
///
/// A cell knows its coordinates, its value if one was given or deduced, and
/// the indices of the cells that constrain it. The board owns every cell;
/// the neighbour relation is kept as indices into the board's flat cell
/// store instead of references, so there are no cycles to manage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    x: u8,
    y: u8,
    value: Option<Digit>,
    neighbours: Vec<u16>,
}

impl Cell {
    /// Creates a cell with no neighbours.
    ///
    /// Construction is two-phase: the board allocates every cell first and
    /// links the neighbour relation afterwards.
    pub fn new(x: u8, y: u8, value: Option<Digit>) -> Cell {
        Cell {
            x,
            y,
            value,
            neighbours: Vec::new(),
        }
    }

    /// Column coordinate, leftmost is 0.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Row coordinate, topmost is 0.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// The value of the cell, if it holds one.
    pub fn value(&self) -> Option<Digit> {
        self.value
    }

    /// Indices of the cells sharing this cell's row, column or box,
    /// in ascending order, without the cell itself.
    pub fn neighbours(&self) -> &[u16] {
        &self.neighbours
    }

    pub(crate) fn set_neighbours(&mut self, neighbours: Vec<u16>) {
        self.neighbours = neighbours;
    }

    /// Gives the cell a value.
    ///
    /// A cell is assigned at most once and never unset; a second assignment
    /// fails with [`AlreadyAssigned`].
    pub fn assign(&mut self, digit: Digit) -> Result<(), AlreadyAssigned> {
        match self.value {
            Some(current) => Err(AlreadyAssigned {
                x: self.x,
                y: self.y,
                current: current.get(),
                attempted: digit.get(),
            }),
            None => {
                self.value = Some(digit);
                Ok(())
            }
        }
    }
}
