#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Error taxonomy for grid and solver construction and for the resolution
//! loop.
//!
//! All construction-time errors are fatal to the instance being built and are
//! reported immediately; nothing in the engine retries. A contradiction inside
//! a trial grid is not an error at all: it is recovered locally by the
//! lookahead loop discarding that trial value.

use core::fmt;
use std::error::Error;

/// Everything that can go wrong when building or solving a puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// A caller-supplied region partition does not cover the grid exactly
    /// once with `side` groups of `side` cells each.
    MalformedPartition(String),

    /// The board's row or column count disagrees with the grid side.
    ShapeMismatch {
        /// The side length the grid expects.
        expected: usize,
        /// The offending dimension found on the board.
        actual: usize,
    },

    /// A literal board symbol encodes a value outside `{1..=side}`, or is not
    /// a value symbol at all.
    OutOfRangeValue {
        /// The symbol as written on the board.
        symbol: char,
        /// Row of the offending symbol.
        row: usize,
        /// Column of the offending symbol.
        col: usize,
        /// The side length bounding legal values.
        side: usize,
    },

    /// The lookahead loop completed a full pass over every unresolved cell
    /// without narrowing anything. Typical of under-constrained puzzles with
    /// several solutions; the grid is left in its narrowed state for
    /// inspection.
    NotConverged {
        /// Cells still holding more than one candidate (or none).
        unresolved: usize,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedPartition(detail) => {
                write!(f, "malformed region partition: {detail}")
            }
            Self::ShapeMismatch { expected, actual } => write!(
                f,
                "board shape mismatch: expected {expected} rows of {expected} symbols, found a dimension of {actual}"
            ),
            Self::OutOfRangeValue {
                symbol,
                row,
                col,
                side,
            } => write!(
                f,
                "symbol '{symbol}' at ({row}, {col}) is not a value in 1..={side}"
            ),
            Self::NotConverged { unresolved } => write!(
                f,
                "no further progress with {unresolved} cells unresolved (puzzle may admit multiple solutions)"
            ),
        }
    }
}

impl Error for PuzzleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = PuzzleError::ShapeMismatch {
            expected: 9,
            actual: 8,
        };
        assert!(err.to_string().contains("expected 9"));

        let err = PuzzleError::OutOfRangeValue {
            symbol: '7',
            row: 0,
            col: 3,
            side: 4,
        };
        assert!(err.to_string().contains("'7'"));
        assert!(err.to_string().contains("1..=4"));

        let err = PuzzleError::MalformedPartition("missing cell (0, 0)".into());
        assert!(err.to_string().contains("missing cell"));

        let err = PuzzleError::NotConverged { unresolved: 12 };
        assert!(err.to_string().contains("12"));
    }
}
