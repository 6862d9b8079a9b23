use serde::Serialize;
use tracing::debug;

use crate::{
    grid::Grid,
    solver::{
        domain::DomainStore,
        heuristics::{
            value::{AscendingValueHeuristic, ValueOrderingHeuristic},
            variable::{MinimumRemainingValuesHeuristic, VariableSelectionHeuristic},
        },
        preprocess, propagate,
    },
};

/// The result of a solve: either the grid now holds a complete valid
/// assignment, or the search space was exhausted.
///
/// An unsolvable instance is a normal negative outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOutcome {
    /// A complete assignment was found and written into the grid.
    Solved,
    /// No assignment exists; the grid was left exactly as given.
    Unsolvable,
}

impl SearchOutcome {
    /// Returns `true` for [`SearchOutcome::Solved`].
    pub fn is_solved(self) -> bool {
        matches!(self, SearchOutcome::Solved)
    }
}

/// Counters collected over one solve.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Search invocations, one per visited node of the search tree.
    pub nodes_visited: u64,
    /// Candidate values abandoned after propagation or recursion failed.
    pub backtracks: u64,
    /// Forward-checking passes run.
    pub propagations: u64,
    /// Individual candidate removals made by those passes.
    pub prunings: u64,
}

/// The main engine for solving a puzzle.
///
/// The `SolverEngine` owns its two heuristics: one that picks the next
/// cell to branch on and one that fixes the order in which a cell's
/// candidates are tried. The default pairing (minimum remaining values,
/// ascending candidates) is deterministic: identical inputs produce
/// identical solutions.
///
/// It uses one-step forward checking and recursive backtracking search
/// to explore the assignment space, returning the first solution found.
pub struct SolverEngine {
    variable_heuristic: Box<dyn VariableSelectionHeuristic>,
    value_heuristic: Box<dyn ValueOrderingHeuristic>,
}

impl SolverEngine {
    /// Creates an engine from explicit heuristics.
    pub fn new(
        variable_heuristic: Box<dyn VariableSelectionHeuristic>,
        value_heuristic: Box<dyn ValueOrderingHeuristic>,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
        }
    }

    /// Creates an engine with the default deterministic heuristics.
    pub fn with_defaults() -> Self {
        Self::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(AscendingValueHeuristic),
        )
    }

    /// Attempts to solve the puzzle in place.
    ///
    /// Seeds the domain store from the clues, then runs the
    /// backtracking search. On success the grid holds a complete valid
    /// assignment; on failure it is left bit-for-bit as given, so
    /// callers must check the outcome rather than the grid.
    ///
    /// Contradictory clues (the same digit twice in one row, column or
    /// box) leave a cell's domain empty after preprocessing; the engine
    /// reports those as [`SearchOutcome::Unsolvable`] without searching.
    pub fn solve(&self, grid: &mut Grid) -> (SearchOutcome, SearchStats) {
        let mut stats = SearchStats::default();
        let mut domains = preprocess::initialize(grid);

        if domains.has_empty_domain() {
            debug!("clue set is contradictory, skipping search");
            return (SearchOutcome::Unsolvable, stats);
        }

        let solved = self.search(grid, &mut domains, &mut stats);
        debug!(
            nodes = stats.nodes_visited,
            backtracks = stats.backtracks,
            solved,
            "search finished"
        );
        let outcome = if solved {
            SearchOutcome::Solved
        } else {
            SearchOutcome::Unsolvable
        };
        (outcome, stats)
    }

    /// One node of the depth-first search.
    ///
    /// Each invocation assigns exactly one previously unassigned cell,
    /// so the recursion depth is bounded by the cell count.
    fn search(&self, grid: &mut Grid, domains: &mut DomainStore, stats: &mut SearchStats) -> bool {
        stats.nodes_visited += 1;

        // Cell selection: no unassigned cell left means the forward
        // checking invariant has carried us to a complete solution.
        let Some(cell) = self.variable_heuristic.select_cell(grid, domains) else {
            return true;
        };

        // The candidate list is read before the first assignment; the
        // assign/revert cycle restores the domain exactly, so the list
        // never shifts under its own iteration.
        let candidates = self.value_heuristic.order_values(domains.get(cell));

        for value in candidates {
            grid.set(cell, value);
            stats.propagations += 1;
            let (ledger, consistent) = propagate::apply(domains, cell, value);
            stats.prunings += ledger.removal_count() as u64;

            if consistent && self.search(grid, domains, stats) {
                // First solution wins; effects of this assignment stay.
                return true;
            }

            grid.set(cell, 0);
            propagate::revert(domains, ledger);
            stats.backtracks += 1;
        }

        false
    }
}

impl Default for SolverEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::heuristics::{
        value::ShuffledValueHeuristic, variable::SelectFirstHeuristic,
    };

    pub type Rows = [[u8; 9]; 9];

    // The classic puzzle and its unique solution.
    pub const CLASSIC_PUZZLE: Rows = [
        [5, 3, 0, 0, 7, 0, 0, 0, 0],
        [6, 0, 0, 1, 9, 5, 0, 0, 0],
        [0, 9, 8, 0, 0, 0, 0, 6, 0],
        [8, 0, 0, 0, 6, 0, 0, 0, 3],
        [4, 0, 0, 8, 0, 3, 0, 0, 1],
        [7, 0, 0, 0, 2, 0, 0, 0, 6],
        [0, 6, 0, 0, 0, 0, 2, 8, 0],
        [0, 0, 0, 4, 1, 9, 0, 0, 5],
        [0, 0, 0, 0, 8, 0, 0, 7, 9],
    ];

    pub const CLASSIC_SOLUTION: Rows = [
        [5, 3, 4, 6, 7, 8, 9, 1, 2],
        [6, 7, 2, 1, 9, 5, 3, 4, 8],
        [1, 9, 8, 3, 4, 2, 5, 6, 7],
        [8, 5, 9, 7, 6, 1, 4, 2, 3],
        [4, 2, 6, 8, 5, 3, 7, 9, 1],
        [7, 1, 3, 9, 2, 4, 8, 5, 6],
        [9, 6, 1, 5, 3, 7, 2, 8, 4],
        [2, 8, 7, 4, 1, 9, 6, 3, 5],
        [3, 4, 5, 2, 8, 6, 1, 7, 9],
    ];

    /// Checks that `solution` completes `puzzle` without disturbing any
    /// clue.
    pub fn solves_puzzle(puzzle: &Grid, solution: &Grid) -> bool {
        let clues_kept = Grid::cells()
            .all(|cell| puzzle.get(cell) == 0 || puzzle.get(cell) == solution.get(cell));
        clues_kept && solution.is_valid_solution()
    }

    #[test]
    fn classic_puzzle_solves_to_its_unique_solution() {
        let mut grid = Grid::from_rows(CLASSIC_PUZZLE);
        let (outcome, stats) = SolverEngine::with_defaults().solve(&mut grid);

        assert!(outcome.is_solved());
        assert_eq!(grid, Grid::from_rows(CLASSIC_SOLUTION));
        assert!(stats.nodes_visited > 0);
    }

    #[test]
    fn select_first_heuristic_reaches_the_same_unique_solution() {
        let mut grid = Grid::from_rows(CLASSIC_PUZZLE);
        let engine = SolverEngine::new(
            Box::new(SelectFirstHeuristic),
            Box::new(AscendingValueHeuristic),
        );
        let (outcome, _) = engine.solve(&mut grid);

        assert!(outcome.is_solved());
        assert_eq!(grid, Grid::from_rows(CLASSIC_SOLUTION));
    }

    #[test]
    fn shuffled_candidate_order_reaches_the_same_unique_solution() {
        let mut grid = Grid::from_rows(CLASSIC_PUZZLE);
        let engine = SolverEngine::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(ShuffledValueHeuristic::seeded(7)),
        );
        let (outcome, _) = engine.solve(&mut grid);

        assert!(outcome.is_solved());
        assert_eq!(grid, Grid::from_rows(CLASSIC_SOLUTION));
    }

    #[test]
    fn duplicated_clue_in_a_row_is_unsolvable_and_leaves_the_grid_untouched() {
        let mut rows = CLASSIC_PUZZLE;
        rows[0][8] = 5; // second 5 in the first row
        let original = Grid::from_rows(rows);

        let mut grid = original;
        let (outcome, stats) = SolverEngine::with_defaults().solve(&mut grid);

        assert_eq!(outcome, SearchOutcome::Unsolvable);
        assert_eq!(grid, original);
        assert_eq!(stats.nodes_visited, 0);
    }

    #[test]
    fn duplicated_clue_in_a_column_is_unsolvable() {
        let mut grid = Grid::empty();
        grid.set((1, 4), 8);
        grid.set((7, 4), 8);
        let (outcome, _) = SolverEngine::with_defaults().solve(&mut grid);
        assert_eq!(outcome, SearchOutcome::Unsolvable);
    }

    #[test]
    fn duplicated_clue_in_a_box_is_unsolvable() {
        let mut grid = Grid::empty();
        grid.set((0, 0), 2);
        grid.set((2, 2), 2);
        let (outcome, _) = SolverEngine::with_defaults().solve(&mut grid);
        assert_eq!(outcome, SearchOutcome::Unsolvable);
    }

    #[test]
    fn fully_solved_grid_is_returned_unchanged() {
        let original = Grid::from_rows(CLASSIC_SOLUTION);
        let mut grid = original;
        let (outcome, stats) = SolverEngine::with_defaults().solve(&mut grid);

        assert!(outcome.is_solved());
        assert_eq!(grid, original);
        // Selection finds nothing to branch on: one node, no backtracks.
        assert_eq!(stats.nodes_visited, 1);
        assert_eq!(stats.backtracks, 0);
    }

    #[test]
    fn empty_grid_solves_to_some_valid_grid() {
        let mut grid = Grid::empty();
        let (outcome, _) = SolverEngine::with_defaults().solve(&mut grid);

        assert!(outcome.is_solved());
        assert!(grid.is_valid_solution());
    }

    #[test]
    fn default_engine_is_deterministic_across_runs() {
        let mut first = Grid::empty();
        let mut second = Grid::empty();
        SolverEngine::with_defaults().solve(&mut first);
        SolverEngine::with_defaults().solve(&mut second);

        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn equal_shuffle_seeds_find_equal_solutions() {
        let mut first = Grid::empty();
        let mut second = Grid::empty();
        for grid in [&mut first, &mut second] {
            let engine = SolverEngine::new(
                Box::new(MinimumRemainingValuesHeuristic),
                Box::new(ShuffledValueHeuristic::seeded(99)),
            );
            let (outcome, _) = engine.solve(grid);
            assert!(outcome.is_solved());
        }
        assert_eq!(first, second);
    }
}
