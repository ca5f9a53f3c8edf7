#![warn(missing_docs)]
//! A logical sudoku solver.
//!
//! ## Overview
//!
//! The solver repeatedly narrows the set of legal values of every blank
//! cell using the row, column and box constraints until a full pass over
//! the board changes nothing. It never guesses: a board that would require
//! backtracking is reported as stalled with all the progress that was
//! made, not solved.
//!
//! Two elimination rules are applied per cell and pass, see [`Rule`].
//!
//! ## Example
//!
//! ```
//! use logical_sudoku::{Board, Outcome};
//!
//! let line = "002980500400070013039604070200056400840300201907001086600705130091400005020030608";
//!
//! let mut board = Board::from_str_line(line)?;
//! let outcome = board.solve()?;
//!
//! assert_eq!(outcome, Outcome::Solved);
//! println!("{}", board);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod board;
mod cell;
mod digit;
mod digit_set;
pub mod errors;
mod geometry;
mod rules;

pub use crate::board::{Board, Outcome};
pub use crate::cell::Cell;
pub use crate::digit::Digit;
pub use crate::digit_set::DigitSet;
pub use crate::geometry::Geometry;
pub use crate::rules::Rule;
