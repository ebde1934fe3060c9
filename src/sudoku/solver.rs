#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The resolution loop: pure propagation first, then one-step lookahead per
//! unresolved cell until every cell is a singleton.
//!
//! No chronological backtracking happens anywhere in here. Each candidate
//! value of an unresolved cell is probed on a private clone of the grid
//! (assign, simplify, validity-check); the values whose trial grids stay
//! valid become the cell's new candidate set. Trials only ever narrow the
//! live grid, since a probed value was already a member of the set it refines.

use crate::sudoku::board::Board;
use crate::sudoku::candidates::CandidateSet;
use crate::sudoku::error::PuzzleError;
use crate::sudoku::grid::Grid;
use itertools::Itertools;

/// Counters describing the work a [`Solver::solve`] call performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolveStats {
    /// Outer lookahead rounds over the unresolved cells.
    pub rounds: usize,
    /// Trial grids cloned, simplified and validity-checked.
    pub trials: usize,
    /// Total `reduce_once` passes, across the live grid and all trials.
    pub passes: usize,
}

/// Owns one [`Grid`], seeds it from a parsed [`Board`], and drives it to a
/// solution.
#[derive(Debug, Clone)]
pub struct Solver {
    grid: Grid,
}

impl Solver {
    /// Builds a solver for a grid of shape `(m, n)` seeded with the board's
    /// given values, using the standard block tiling or a caller-supplied
    /// region partition.
    ///
    /// # Errors
    ///
    /// - [`PuzzleError::ShapeMismatch`] if the board was parsed for a
    ///   different side length.
    /// - [`PuzzleError::MalformedPartition`] if `regions` is not an exact
    ///   partition of the grid.
    pub fn new(
        shape: (usize, usize),
        board: &Board,
        regions: Option<&[Vec<(usize, usize)>]>,
    ) -> Result<Self, PuzzleError> {
        let side = shape.0 * shape.1;
        if board.side() != side {
            return Err(PuzzleError::ShapeMismatch {
                expected: side,
                actual: board.side(),
            });
        }

        let mut grid = Grid::new(shape.0, shape.1, regions)?;
        for (row, col, value) in board.iter_givens() {
            grid.set(row, col, CandidateSet::singleton(value));
        }
        Ok(Self { grid })
    }

    /// Convenience constructor: parses `rows` as a board first. See
    /// [`Board::parse`] and [`Solver::new`] for the failure modes.
    ///
    /// # Errors
    ///
    /// Any [`PuzzleError`] raised by parsing or by [`Solver::new`].
    pub fn from_lines<S: AsRef<str>>(
        shape: (usize, usize),
        rows: &[S],
        regions: Option<&[Vec<(usize, usize)>]>,
    ) -> Result<Self, PuzzleError> {
        let board = Board::parse(shape, rows)?;
        Self::new(shape, &board, regions)
    }

    /// The grid in its current state of narrowing.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consumes the solver, returning the grid.
    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Resolves the grid: one `simplify` to exhaust pure propagation, then
    /// repeated lookahead rounds. Each round probes every candidate value of
    /// every unresolved cell on a trial clone, keeps the values whose trials
    /// survive, and re-simplifies the live grid once all cells have been
    /// refined.
    ///
    /// # Errors
    ///
    /// [`PuzzleError::NotConverged`] if a whole round leaves the total
    /// candidate count unchanged while cells remain unresolved. This is the
    /// under-constrained case, where a cell's surviving set can stay above
    /// size one forever. The grid keeps its narrowed state for inspection.
    pub fn solve(&mut self) -> Result<SolveStats, PuzzleError> {
        let mut stats = SolveStats {
            passes: self.grid.simplify(),
            ..SolveStats::default()
        };

        while !self.grid.is_solved() {
            let options = self.grid.candidate_count();
            stats.rounds += 1;

            let pending = self.grid.unresolved().collect_vec();
            for idx in pending {
                // Earlier refinements in this round may have resolved it.
                if self.grid.is_defined(idx) {
                    continue;
                }
                let surviving = self.surviving_values(idx, &mut stats);
                self.grid.set_at(idx, surviving);
            }
            stats.passes += self.grid.simplify();

            if self.grid.candidate_count() == options {
                return Err(PuzzleError::NotConverged {
                    unresolved: self.grid.unresolved().count(),
                });
            }
        }

        Ok(stats)
    }

    /// Probes each candidate value of the cell at `idx` on a clone of the
    /// live grid and returns the values whose trials simplify to a valid
    /// state. A subset of the cell's current candidates by construction.
    fn surviving_values(&self, idx: usize, stats: &mut SolveStats) -> CandidateSet {
        let mut surviving = CandidateSet::EMPTY;
        for value in self.grid.cell_at(idx) {
            let mut trial = self.grid.clone();
            trial.set_at(idx, CandidateSet::singleton(value));
            stats.passes += trial.simplify();
            stats.trials += 1;
            if trial.is_valid() {
                surviving.insert(value);
            }
        }
        surviving
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sudoku::partition::block_areas;

    /// The first of the example boards bundled with the binary.
    const NINE: [&str; 9] = [
        "345......",
        "..6..1...",
        "8.1.7.2..",
        "..3..8...",
        "6......5.",
        "..419.6..",
        "...6.51.3",
        "......7..",
        ".....4...",
    ];

    fn assert_solved(grid: &Grid) {
        assert!(grid.is_solved(), "unresolved cells remain:\n{grid}");
        assert!(grid.is_valid(), "solved grid violates an area:\n{grid}");
    }

    #[test]
    fn test_solve_nine_by_nine() {
        let mut solver = Solver::from_lines((3, 3), &NINE, None).unwrap();
        let stats = solver.solve().unwrap();
        let grid = solver.grid();

        assert_solved(grid);
        assert_eq!(grid.cell(0, 0).value(), Some(3));
        assert_eq!(grid.cell(0, 1).value(), Some(4));
        assert_eq!(grid.cell(0, 2).value(), Some(5));
        assert!(stats.passes > 0);
    }

    #[test]
    fn test_solve_keeps_givens() {
        let mut solver = Solver::from_lines((3, 3), &NINE, None).unwrap();
        solver.solve().unwrap();
        let board = Board::parse((3, 3), &NINE).unwrap();
        for (row, col, value) in board.iter_givens() {
            assert_eq!(solver.grid().cell(row, col).value(), Some(value));
        }
    }

    #[test]
    fn test_solve_four_by_four() {
        // Unique completion of 1234/3412/2143/4321 with one blank per row.
        let rows = ["1.34", "34.2", ".143", "432."];
        let mut solver = Solver::from_lines((2, 2), &rows, None).unwrap();
        solver.solve().unwrap();
        let grid = solver.grid();

        assert_solved(grid);
        assert_eq!(grid.cell(0, 1).value(), Some(2));
        assert_eq!(grid.cell(1, 2).value(), Some(1));
        assert_eq!(grid.cell(2, 0).value(), Some(2));
        assert_eq!(grid.cell(3, 3).value(), Some(1));
    }

    #[test]
    fn test_solve_with_custom_regions() {
        // The default 2x2 blocks handed in explicitly as coordinates must
        // behave exactly like the built-in tiling.
        let side = 4;
        let regions: Vec<Vec<(usize, usize)>> = block_areas(2, 2)
            .iter()
            .map(|area| area.iter().map(|&idx| (idx / side, idx % side)).collect())
            .collect();
        let rows = ["1.34", "34.2", ".143", "432."];
        let mut solver = Solver::from_lines((2, 2), &rows, Some(&regions)).unwrap();
        solver.solve().unwrap();
        assert_solved(solver.grid());
    }

    #[test]
    fn test_blank_board_does_not_converge() {
        let rows = ["....", "....", "....", "...."];
        let mut solver = Solver::from_lines((2, 2), &rows, None).unwrap();
        let err = solver.solve().unwrap_err();
        assert_eq!(err, PuzzleError::NotConverged { unresolved: 16 });
        // The grid is untouched: every trial of every value survives.
        assert_eq!(solver.grid().candidate_count(), 4 * 16);
    }

    #[test]
    fn test_board_side_must_match_shape() {
        let board = Board::parse((2, 2), &["....", "....", "....", "...."]).unwrap();
        let err = Solver::new((3, 3), &board, None).unwrap_err();
        assert_eq!(
            err,
            PuzzleError::ShapeMismatch {
                expected: 9,
                actual: 4
            }
        );
    }

    #[test]
    fn test_construction_rejects_bad_value() {
        let err = Solver::from_lines((2, 2), &["6...", "....", "....", "...."], None).unwrap_err();
        assert!(matches!(err, PuzzleError::OutOfRangeValue { .. }));
    }
}
