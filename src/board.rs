//! The board and its fixed-point solve loop.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::cell::Cell;
use crate::digit::Digit;
use crate::digit_set::DigitSet;
use crate::errors::{AlreadyAssigned, ParseError, SolveError};
use crate::geometry::Geometry;
use crate::rules::{self, Rule};

/// Outcome of a solve run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Every cell holds a value.
    Solved,
    /// Blank cells remain and no rule makes further progress.
    Stalled,
}

/// A sudoku board.
///
/// The board owns all of its cells and drives the elimination loop. It is
/// constructed once from a line of digits, links the neighbour relation
/// immediately, and is then only ever mutated by assigning values to blank
/// cells until the loop reaches a fixed point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    geometry: Geometry,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a standard 9x9 board from a line of 81 ascii digits in
    /// row-major order, where `'0'` denotes a blank cell.
    ///
    /// Example board strings:
    ///
    /// `200070038000006070300040600008020700100000006007030400004080009060400000910060002`
    /// `002980500400070013039604070200056400840300201907001086600705130091400005020030608`
    pub fn from_str_line(s: &str) -> Result<Board, ParseError> {
        Board::from_str_line_with(Geometry::STANDARD, s)
    }

    /// Creates a board of the given geometry from a line of ascii digits.
    pub fn from_str_line_with(geometry: Geometry, s: &str) -> Result<Board, ParseError> {
        let expected = geometry.n_cells();
        let found = s.chars().count();
        if found != expected {
            return Err(ParseError::WrongLength { expected, found });
        }

        let mut cells = Vec::with_capacity(expected);
        for (index, ch) in s.chars().enumerate() {
            let raw = match ch.to_digit(10) {
                Some(raw) => raw as u8,
                None => return Err(ParseError::InvalidCharacter { cell: index, ch }),
            };
            let value = match raw {
                0 => None,
                _ => match Digit::new_checked(raw, geometry) {
                    Some(digit) => Some(digit),
                    None => {
                        return Err(ParseError::DigitOutOfRange {
                            cell: index,
                            digit: raw,
                            max: geometry.side(),
                        })
                    }
                },
            };
            let (x, y) = geometry.coords_of(index);
            cells.push(Cell::new(x, y, value));
        }

        let mut board = Board { geometry, cells };
        board.link_neighbours();
        Ok(board)
    }

    // The relation needs the full cell store, so linking runs as a second
    // phase after parsing allocated every cell.
    fn link_neighbours(&mut self) {
        let geometry = self.geometry;
        for index in 0..self.cells.len() {
            let (x, y) = (self.cells[index].x(), self.cells[index].y());
            let cell_box = geometry.box_of(x, y);
            let neighbours = self
                .cells
                .iter()
                .enumerate()
                .filter(|&(other_index, other)| {
                    other_index != index
                        && (other.x() == x
                            || other.y() == y
                            || geometry.box_of(other.x(), other.y()) == cell_box)
                })
                .map(|(other_index, _)| other_index as u16)
                .collect();
            self.cells[index].set_neighbours(neighbours);
        }
    }

    /// The grid dimensions of the board.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// All cells, in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell at `index`, row-major.
    ///
    /// # Panic
    /// Panics, if `index` is not below [`Geometry::n_cells`].
    pub fn cell(&self, index: u16) -> &Cell {
        &self.cells[index as usize]
    }

    /// The cell at column `x`, row `y`.
    ///
    /// # Panic
    /// Panics, if either coordinate is not below [`Geometry::side`].
    pub fn cell_at(&self, x: u8, y: u8) -> &Cell {
        &self.cells[self.geometry.index_of(x, y)]
    }

    /// The set of values the cell at `index` could legally hold: every
    /// digit of the grid minus the values held by its neighbours.
    ///
    /// Recomputed from live neighbour state on every call, never cached.
    /// The query applies the same formula to a cell that already holds a
    /// value; callers must not attach meaning to its result for such cells.
    ///
    /// # Panic
    /// Panics, if `index` is not below [`Geometry::n_cells`].
    pub fn possibilities(&self, index: u16) -> DigitSet {
        let mut possible = DigitSet::all(self.geometry);
        for &neighbour in self.cell(index).neighbours() {
            if let Some(digit) = self.cell(neighbour).value() {
                possible.remove(digit);
            }
        }
        possible
    }

    fn assign(&mut self, index: u16, digit: Digit, rule: Rule) -> Result<(), AlreadyAssigned> {
        let cell = &mut self.cells[index as usize];
        cell.assign(digit)?;
        debug!("{} assigned {} to cell ({}, {})", rule, digit, cell.x(), cell.y());
        Ok(())
    }

    /// Runs one elimination attempt on the cell at `index`.
    ///
    /// Does nothing for a cell that already holds a value. Otherwise tries
    /// the last-possibility rule, then the last-option rule, and assigns
    /// the value of the first rule that produces one. Returns the rule
    /// that fired, if any.
    pub fn step_cell(&mut self, index: u16) -> Result<Option<Rule>, AlreadyAssigned> {
        if self.cell(index).value().is_some() {
            return Ok(None);
        }
        if let Some(digit) = rules::last_possibility(self, index) {
            self.assign(index, digit, Rule::LastPossibility)?;
            return Ok(Some(Rule::LastPossibility));
        }
        if let Some(digit) = rules::last_option(self, index) {
            self.assign(index, digit, Rule::LastOption)?;
            return Ok(Some(Rule::LastOption));
        }
        Ok(None)
    }

    /// Runs one elimination pass over every cell in storage order and
    /// returns the number of assignments made.
    ///
    /// Assignments made early in a pass are visible to the cells processed
    /// after them in the same pass. Results therefore depend on the fixed
    /// row-major order, which makes them reproducible.
    pub fn solve_pass(&mut self) -> Result<usize, AlreadyAssigned> {
        let mut assigned = 0;
        for index in 0..self.cells.len() as u16 {
            if self.step_cell(index)?.is_some() {
                assigned += 1;
            }
        }
        Ok(assigned)
    }

    /// Runs elimination passes until a full pass changes nothing.
    ///
    /// Convenience wrapper around [`Board::solve_with`] without an
    /// observer.
    pub fn solve(&mut self) -> Result<Outcome, SolveError> {
        self.solve_with(|_, _| ())
    }

    /// Runs elimination passes until a full pass changes nothing, calling
    /// `on_pass` with the board and the 1-based pass number after every
    /// pass, including the final one.
    ///
    /// A board without blank cells is reported [`Outcome::Solved`],
    /// anything else [`Outcome::Stalled`]. The solver never guesses: a
    /// stalled board is left with all the progress that was made.
    ///
    /// Every pass but the last assigns at least one cell, so the loop is
    /// bounded by one changing pass per cell plus the pass that confirms
    /// the fixed point. Exceeding that bound means an invariant was broken
    /// and fails with [`SolveError::PassLimitExceeded`] instead of hanging.
    pub fn solve_with<F>(&mut self, mut on_pass: F) -> Result<Outcome, SolveError>
    where
        F: FnMut(&Board, usize),
    {
        let limit = self.cells.len();
        let mut passes = 0;
        loop {
            let snapshot = self.to_str_line();
            self.solve_pass()?;
            passes += 1;
            on_pass(self, passes);
            if self.to_str_line() == snapshot {
                break;
            }
            if passes > limit {
                return Err(SolveError::PassLimitExceeded { limit });
            }
        }
        match self.is_solved() {
            true => Ok(Outcome::Solved),
            false => Ok(Outcome::Stalled),
        }
    }

    /// The board as one line of ascii digits in row-major order, blank
    /// cells as `'0'`.
    pub fn to_str_line(&self) -> String {
        self.cells
            .iter()
            .map(|cell| match cell.value() {
                Some(digit) => (b'0' + digit.get()) as char,
                None => '0',
            })
            .collect()
    }

    /// Returns the number of cells that hold a value.
    pub fn n_assigned(&self) -> usize {
        self.cells.iter().filter(|cell| cell.value().is_some()).count()
    }

    /// Returns `true` if every cell holds a value.
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|cell| cell.value().is_some())
    }
}

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Board, ParseError> {
        Board::from_str_line(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let side = self.geometry.side() as usize;
        for (index, cell) in self.cells.iter().enumerate() {
            match cell.value() {
                Some(digit) => write!(f, "{}", digit)?,
                None => f.write_str("0")?,
            }
            if (index + 1) % side == 0 {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}
