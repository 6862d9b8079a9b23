//! Defines a collection of standard heuristics for selecting which cell
//! to branch on next during the search process.

use crate::{
    grid::{Cell, Grid},
    solver::domain::DomainStore,
};

/// A trait for cell-selection heuristics.
///
/// Implementors of this trait define a strategy for choosing which
/// unassigned cell the solver should branch on next. A good heuristic
/// can dramatically improve solver performance.
pub trait VariableSelectionHeuristic {
    /// Selects the next cell to be assigned.
    ///
    /// # Arguments
    ///
    /// * `grid`: the current assignment state; a cell holding 0 is
    ///   unassigned.
    /// * `domains`: the current candidate sets of all cells.
    ///
    /// # Returns
    ///
    /// * `Some(cell)` of the chosen cell, if any cell is unassigned.
    /// * `None` if every cell is already assigned, which (given the
    ///   forward-checking invariant) means the search is complete.
    fn select_cell(&self, grid: &Grid, domains: &DomainStore) -> Option<Cell>;
}

/// A simple heuristic that selects the first unassigned cell in
/// row-major order.
///
/// This provides a basic, deterministic way to select cells.
pub struct SelectFirstHeuristic;

impl VariableSelectionHeuristic for SelectFirstHeuristic {
    fn select_cell(&self, grid: &Grid, _domains: &DomainStore) -> Option<Cell> {
        grid.unassigned_cells().next()
    }
}

/// A heuristic that selects the unassigned cell with the Minimum
/// Remaining Values in its domain.
///
/// This is a "fail-first" strategy that prioritizes the most
/// constrained cell. In case of a tie, the first cell in row-major
/// order is chosen to ensure determinism.
pub struct MinimumRemainingValuesHeuristic;

impl VariableSelectionHeuristic for MinimumRemainingValuesHeuristic {
    fn select_cell(&self, grid: &Grid, domains: &DomainStore) -> Option<Cell> {
        grid.unassigned_cells()
            // Primary criterion: domain length (ascending)
            // Secondary criterion: row-major position (for tie-breaking)
            .min_by_key(|&(row, col)| (domains.get((row, col)).len(), row, col))
    }
}
