#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Construction of the area partition: rows, columns, and regions.
//!
//! A grid of side `s` carries `3 * s` areas of `s` flattened cell indices
//! each. The row and column families are fixed; the region family is either
//! the canonical m×n rectangular tiling or a caller-supplied partition, which
//! is validated here before any reduction is allowed to run.

use crate::sudoku::error::PuzzleError;
use itertools::Itertools;
use smallvec::SmallVec;

/// One row, column or region: the flattened indices of its `side` cells.
pub type Area = SmallVec<[usize; 16]>;

/// The row areas of a grid, in row order.
#[must_use]
pub fn row_areas(side: usize) -> Vec<Area> {
    (0..side)
        .map(|row| (0..side).map(|col| side * row + col).collect())
        .collect()
}

/// The column areas of a grid, in column order.
#[must_use]
pub fn column_areas(side: usize) -> Vec<Area> {
    (0..side)
        .map(|col| (0..side).map(|row| side * row + col).collect())
        .collect()
}

/// The canonical block tiling: regions of `m` rows by `n` columns, walked in
/// row-major block order. `m * n` blocks of `m * n` cells tile the grid
/// exactly.
#[must_use]
pub fn block_areas(m: usize, n: usize) -> Vec<Area> {
    let side = m * n;
    (0..n)
        .cartesian_product(0..m)
        .map(|(block_row, block_col)| {
            (0..m)
                .cartesian_product(0..n)
                .map(|(r, s)| side * (m * block_row + r) + n * block_col + s)
                .collect()
        })
        .collect()
}

/// Converts and validates a caller-supplied region partition, given as `side`
/// groups of `side` (row, col) coordinate pairs.
///
/// # Errors
///
/// [`PuzzleError::MalformedPartition`] if the group count or any group size is
/// not `side`, if a coordinate lies outside the grid, or if the groups do not
/// cover every cell exactly once.
pub fn custom_areas(
    side: usize,
    regions: &[Vec<(usize, usize)>],
) -> Result<Vec<Area>, PuzzleError> {
    if regions.len() != side {
        return Err(PuzzleError::MalformedPartition(format!(
            "expected exactly {side} groups, found {}",
            regions.len()
        )));
    }

    let mut areas = Vec::with_capacity(side);
    for (group_idx, group) in regions.iter().enumerate() {
        if group.len() != side {
            return Err(PuzzleError::MalformedPartition(format!(
                "group {group_idx} has {} cells, expected {side}",
                group.len()
            )));
        }
        let area: Area = group
            .iter()
            .map(|&(row, col)| {
                if row < side && col < side {
                    Ok(side * row + col)
                } else {
                    Err(PuzzleError::MalformedPartition(format!(
                        "cell ({row}, {col}) in group {group_idx} lies outside the grid"
                    )))
                }
            })
            .try_collect()?;
        areas.push(area);
    }

    let mut coverage = vec![0_usize; side * side];
    for &idx in areas.iter().flatten() {
        coverage[idx] += 1;
    }
    for (idx, &count) in coverage.iter().enumerate() {
        if count != 1 {
            return Err(PuzzleError::MalformedPartition(format!(
                "cell ({}, {}) is covered {count} times, expected once",
                idx / side,
                idx % side
            )));
        }
    }

    Ok(areas)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every family must independently partition `{0..side^2 - 1}`.
    fn assert_partitions(areas: &[Area], side: usize) {
        assert_eq!(areas.len(), side);
        let mut seen = vec![false; side * side];
        for area in areas {
            assert_eq!(area.len(), side);
            for &idx in area {
                assert!(!seen[idx], "cell {idx} covered twice");
                seen[idx] = true;
            }
        }
        assert!(seen.iter().all(|&covered| covered));
    }

    #[test]
    fn test_rows_cols_blocks_partition_nine() {
        assert_partitions(&row_areas(9), 9);
        assert_partitions(&column_areas(9), 9);
        assert_partitions(&block_areas(3, 3), 9);
    }

    #[test]
    fn test_blocks_partition_rectangular() {
        assert_partitions(&block_areas(2, 3), 6);
        assert_partitions(&block_areas(3, 2), 6);
        assert_partitions(&block_areas(2, 2), 4);
    }

    #[test]
    fn test_block_shape() {
        // 2 rows x 3 cols per block on a side-6 grid: the first block holds
        // cells (0..2, 0..3).
        let areas = block_areas(2, 3);
        let first: Vec<usize> = areas[0].to_vec();
        assert_eq!(first, vec![0, 1, 2, 6, 7, 8]);
    }

    #[test]
    fn test_custom_matches_blocks() {
        let side = 4;
        let regions: Vec<Vec<(usize, usize)>> = block_areas(2, 2)
            .iter()
            .map(|area| area.iter().map(|&idx| (idx / side, idx % side)).collect())
            .collect();
        let areas = custom_areas(side, &regions).unwrap();
        assert_eq!(areas, block_areas(2, 2));
    }

    #[test]
    fn test_custom_wrong_group_count() {
        let err = custom_areas(4, &[vec![(0, 0), (0, 1), (0, 2), (0, 3)]]).unwrap_err();
        assert!(matches!(err, PuzzleError::MalformedPartition(_)));
    }

    #[test]
    fn test_custom_wrong_group_size() {
        let regions = vec![
            vec![(0, 0), (0, 1), (0, 2)],
            vec![(1, 0), (1, 1), (1, 2), (1, 3)],
            vec![(2, 0), (2, 1), (2, 2), (2, 3)],
            vec![(3, 0), (3, 1), (3, 2), (3, 3)],
        ];
        let err = custom_areas(4, &regions).unwrap_err();
        assert!(matches!(err, PuzzleError::MalformedPartition(_)));
    }

    #[test]
    fn test_custom_missing_cell_fails() {
        // Rows as regions, except one group repeats (0, 0) and so misses
        // (0, 1): rejected before any reduction could run on such a grid.
        let mut regions: Vec<Vec<(usize, usize)>> = (0..4)
            .map(|row| (0..4).map(|col| (row, col)).collect())
            .collect();
        regions[0][1] = (0, 0);
        let err = custom_areas(4, &regions).unwrap_err();
        let PuzzleError::MalformedPartition(detail) = err else {
            panic!("expected MalformedPartition");
        };
        assert!(detail.contains("(0, 0)") || detail.contains("(0, 1)"));
    }

    #[test]
    fn test_custom_out_of_bounds_cell() {
        let mut regions: Vec<Vec<(usize, usize)>> = (0..4)
            .map(|row| (0..4).map(|col| (row, col)).collect())
            .collect();
        regions[3][3] = (4, 0);
        let err = custom_areas(4, &regions).unwrap_err();
        assert!(matches!(err, PuzzleError::MalformedPartition(_)));
    }
}
