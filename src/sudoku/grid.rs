#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The constraint store: a matrix of candidate sets plus the area partition,
//! with the generalized subset-elimination reducer over it.
//!
//! A `Grid` knows nothing about solving. It owns `side^2` candidate sets
//! (flattened row-major), the `3 * side` areas constraining them, and exposes
//! exactly two non-trivial operations: one application of the subset rule
//! ([`Grid::reduce_once`]) and its fixpoint ([`Grid::simplify`]). Candidate
//! sets only ever shrink under these; the solver narrows cells explicitly via
//! [`Grid::set`] when it commits lookahead results.

use crate::sudoku::candidates::CandidateSet;
use crate::sudoku::error::PuzzleError;
use crate::sudoku::partition::{Area, block_areas, column_areas, custom_areas, row_areas};
use core::fmt;

/// A square constraint grid of side `m * n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    side: usize,
    cells: Vec<CandidateSet>,
    areas: Vec<Area>,
}

impl Grid {
    /// Builds an unconstrained grid of side `m * n`: every cell starts with
    /// the full candidate set `{1..=side}`.
    ///
    /// If `regions` is supplied it must be exactly `side` groups of `side`
    /// (row, col) pairs covering the grid once; otherwise the standard m×n
    /// block tiling is used.
    ///
    /// # Errors
    ///
    /// [`PuzzleError::MalformedPartition`] if `regions` is not an exact
    /// partition.
    ///
    /// # Panics
    ///
    /// If `m * n` is zero or exceeds [`CandidateSet::MAX_VALUES`].
    pub fn new(
        m: usize,
        n: usize,
        regions: Option<&[Vec<(usize, usize)>]>,
    ) -> Result<Self, PuzzleError> {
        let side = m * n;
        assert!(
            side >= 1 && side <= CandidateSet::MAX_VALUES,
            "grid side must be in 1..={}",
            CandidateSet::MAX_VALUES
        );

        let mut areas = row_areas(side);
        areas.extend(column_areas(side));
        match regions {
            Some(regions) => areas.extend(custom_areas(side, regions)?),
            None => areas.extend(block_areas(m, n)),
        }

        Ok(Self {
            side,
            cells: vec![CandidateSet::full(side); side * side],
            areas,
        })
    }

    /// The side length of the grid.
    #[must_use]
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Flattened index of the cell at (row, col).
    #[must_use]
    pub const fn index_of(&self, row: usize, col: usize) -> usize {
        self.side * row + col
    }

    /// The candidate set at (row, col).
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> CandidateSet {
        self.cells[self.index_of(row, col)]
    }

    /// The candidate set at a flattened index.
    #[must_use]
    pub fn cell_at(&self, idx: usize) -> CandidateSet {
        self.cells[idx]
    }

    /// Replaces the candidate set at (row, col). No validity check happens
    /// here; callers observe consequences through [`Grid::simplify`] and
    /// [`Grid::is_valid`].
    pub fn set(&mut self, row: usize, col: usize, values: CandidateSet) {
        let idx = self.index_of(row, col);
        self.cells[idx] = values;
    }

    /// Replaces the candidate set at a flattened index. See [`Grid::set`].
    pub fn set_at(&mut self, idx: usize, values: CandidateSet) {
        self.cells[idx] = values;
    }

    /// True iff the cell at `idx` is resolved to a single value.
    #[must_use]
    pub fn is_defined(&self, idx: usize) -> bool {
        self.cells[idx].is_singleton()
    }

    /// True iff every cell is resolved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_singleton())
    }

    /// Flattened indices of the cells not yet resolved, in row-major order.
    pub fn unresolved(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_singleton())
            .map(|(idx, _)| idx)
    }

    /// Sum of candidate-set sizes across the grid. Strictly decreasing under
    /// any effective reduction, which is what bounds the fixpoint iteration.
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.cells.iter().map(|cell| cell.len()).sum()
    }

    /// Checks validity of the current constraint state: for every area, no
    /// value may be eliminated from all of its cells, and no two resolved
    /// cells may share a value. Returns `false` on the first violated area.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let full = CandidateSet::full(self.side);
        self.areas.iter().all(|area| {
            let mut union = CandidateSet::EMPTY;
            let mut resolved = CandidateSet::EMPTY;
            for &idx in area {
                let cell = self.cells[idx];
                union = union | cell;
                if let Some(value) = cell.value() {
                    if resolved.contains(value) {
                        return false;
                    }
                    resolved.insert(value);
                }
            }
            union == full
        })
    }

    /// Applies the generalized subset-elimination rule once, in place.
    ///
    /// For each area and each non-empty proper value subset S of `{1..=side}`:
    /// if exactly `|S|` cells of the area have all their candidates confined
    /// within S, those values must occupy exactly those cells, so S is removed
    /// from every other cell of the area. Ranging over all subsets this
    /// subsumes the classical naked and (via complements) hidden subset
    /// techniques in one rule.
    ///
    /// Candidate sets only shrink; the total candidate count never increases.
    pub fn reduce_once(&mut self) {
        let full_bits = CandidateSet::full(self.side).bits();
        for area_idx in 0..self.areas.len() {
            for bits in 1..full_bits {
                let subset = CandidateSet::from_bits(bits);

                let mut confined = 0_usize;
                for &idx in &self.areas[area_idx] {
                    if self.cells[idx].is_subset_of(subset) {
                        confined += 1;
                    }
                }
                if confined != subset.len() {
                    continue;
                }

                for &idx in &self.areas[area_idx] {
                    if !self.cells[idx].is_subset_of(subset) {
                        self.cells[idx] = self.cells[idx] - subset;
                    }
                }
            }
        }
    }

    /// Runs [`Grid::reduce_once`] until a full pass changes nothing, and
    /// returns the number of passes. Terminates because the candidate count is
    /// non-increasing and bounded.
    pub fn simplify(&mut self) -> usize {
        let mut options = self.candidate_count();
        let mut passes = 0;
        loop {
            self.reduce_once();
            passes += 1;
            let remaining = self.candidate_count();
            if remaining == options {
                return passes;
            }
            options = remaining;
        }
    }

    /// Renders every cell's full candidate set, one row per line, cells
    /// separated by `|`. The verbose counterpart of the `Display` impl.
    #[must_use]
    pub fn dump_candidates(&self) -> String {
        let width = self
            .cells
            .iter()
            .map(|cell| cell.len())
            .max()
            .unwrap_or(1)
            .max(1);
        let mut out = String::new();
        for row in 0..self.side {
            if row > 0 {
                out.push('\n');
            }
            for col in 0..self.side {
                if col > 0 {
                    out.push('|');
                }
                let cell: String = self.cell(row, col).iter().map(|v| v.to_string()).collect();
                out.push_str(&format!("{cell:>width$}"));
            }
        }
        out
    }
}

impl fmt::Display for Grid {
    /// Renders the grid one row per line: resolved cells as their value,
    /// unresolved cells as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.side {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.side {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.cell(row, col).value() {
                    Some(value) => write!(f, "{value}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}
