#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Constraint-propagation Sudoku engine: the candidate-set grid and the
//! lookahead solver built on top of it.

pub mod board;
pub mod candidates;
pub mod error;
pub mod grid;
pub mod partition;
pub mod solver;
