#![warn(missing_docs)]
//! This crate provides a Sudoku solver for generalized m×n-block grids, built
//! on candidate-set constraint propagation rather than recursive backtracking.
//!
//! The engine combines a single subset-elimination rule (subsuming the
//! classical naked/hidden subset techniques) with one-step lookahead over
//! trial assignments. Irregular region partitions are supported alongside the
//! standard rectangular block tiling.

/// The `sudoku` module implements the constraint grid and the solver driving
/// it: candidate bitsets, area partitions, the subset-elimination reducer, and
/// the lookahead resolution loop.
pub mod sudoku;
