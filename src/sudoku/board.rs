#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The board adapter: literal puzzle text in, given values out.
//!
//! A board is `side` rows of `side` symbols. `.` marks an unknown cell;
//! `1`-`9` are the usual values, and letters continue the range for sides
//! above nine (`a` = 10, case-insensitive), so a 16×16 board stays one symbol
//! per cell.

use crate::sudoku::error::PuzzleError;
use itertools::Itertools;

/// The placeholder symbol for an unknown cell.
pub const BLANK: char = '.';

/// Symbol radix: digits then letters, one character per value.
const SYMBOL_RADIX: u32 = 36;

/// A parsed board: the given values of a puzzle, before any propagation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    side: usize,
    givens: Vec<Option<u32>>,
}

impl Board {
    /// Parses a board for a grid of shape `(m, n)` from `side` rows of
    /// symbols.
    ///
    /// # Errors
    ///
    /// - [`PuzzleError::ShapeMismatch`] if the row count or any row length is
    ///   not `m * n`.
    /// - [`PuzzleError::OutOfRangeValue`] if a symbol is neither [`BLANK`] nor
    ///   a value in `{1..=side}`.
    pub fn parse<S: AsRef<str>>(shape: (usize, usize), rows: &[S]) -> Result<Self, PuzzleError> {
        let side = shape.0 * shape.1;
        if rows.len() != side {
            return Err(PuzzleError::ShapeMismatch {
                expected: side,
                actual: rows.len(),
            });
        }

        let mut givens = Vec::with_capacity(side * side);
        for (row_idx, row) in rows.iter().enumerate() {
            let symbols = row.as_ref().chars().collect_vec();
            if symbols.len() != side {
                return Err(PuzzleError::ShapeMismatch {
                    expected: side,
                    actual: symbols.len(),
                });
            }
            for (col_idx, &symbol) in symbols.iter().enumerate() {
                givens.push(parse_symbol(symbol, row_idx, col_idx, side)?);
            }
        }

        Ok(Self { side, givens })
    }

    /// The side length this board was parsed against.
    #[must_use]
    pub const fn side(&self) -> usize {
        self.side
    }

    /// The given value at (row, col), if the cell is not blank.
    #[must_use]
    pub fn given(&self, row: usize, col: usize) -> Option<u32> {
        self.givens[self.side * row + col]
    }

    /// Iterates the non-blank cells as `(row, col, value)` in row-major order.
    pub fn iter_givens(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        self.givens
            .iter()
            .enumerate()
            .filter_map(|(idx, given)| given.map(|value| (idx / self.side, idx % self.side, value)))
    }
}

fn parse_symbol(
    symbol: char,
    row: usize,
    col: usize,
    side: usize,
) -> Result<Option<u32>, PuzzleError> {
    if symbol == BLANK {
        return Ok(None);
    }
    match symbol.to_digit(SYMBOL_RADIX) {
        Some(value) if value >= 1 && value as usize <= side => Ok(Some(value)),
        _ => Err(PuzzleError::OutOfRangeValue {
            symbol,
            row,
            col,
            side,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_collects_givens() {
        let board = Board::parse((2, 2), &["1...", "..2.", "....", "4..."]).unwrap();
        assert_eq!(board.side(), 4);
        assert_eq!(board.given(0, 0), Some(1));
        assert_eq!(board.given(1, 2), Some(2));
        assert_eq!(board.given(3, 0), Some(4));
        assert_eq!(board.given(2, 2), None);

        let givens = board.iter_givens().collect::<Vec<_>>();
        assert_eq!(givens, vec![(0, 0, 1), (1, 2, 2), (3, 0, 4)]);
    }

    #[test]
    fn test_parse_letter_symbols() {
        let rows: Vec<String> = (0..16).map(|_| ".".repeat(16)).collect();
        let mut rows = rows;
        rows[0] = format!("a{}", ".".repeat(15));
        let board = Board::parse((4, 4), &rows).unwrap();
        assert_eq!(board.given(0, 0), Some(10));
    }

    #[test]
    fn test_parse_wrong_row_count() {
        let err = Board::parse((2, 2), &["....", "....", "...."]).unwrap_err();
        assert_eq!(
            err,
            PuzzleError::ShapeMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_parse_wrong_row_length() {
        let err = Board::parse((2, 2), &["....", ".....", "....", "...."]).unwrap_err();
        assert_eq!(
            err,
            PuzzleError::ShapeMismatch {
                expected: 4,
                actual: 5
            }
        );
    }

    #[test]
    fn test_parse_value_above_side() {
        let err = Board::parse((2, 2), &["...5", "....", "....", "...."]).unwrap_err();
        assert_eq!(
            err,
            PuzzleError::OutOfRangeValue {
                symbol: '5',
                row: 0,
                col: 3,
                side: 4
            }
        );
    }

    #[test]
    fn test_parse_rejects_zero_and_junk() {
        assert!(matches!(
            Board::parse((2, 2), &["0...", "....", "....", "...."]),
            Err(PuzzleError::OutOfRangeValue { symbol: '0', .. })
        ));
        assert!(matches!(
            Board::parse((2, 2), &["#...", "....", "....", "...."]),
            Err(PuzzleError::OutOfRangeValue { symbol: '#', .. })
        ));
    }
}
