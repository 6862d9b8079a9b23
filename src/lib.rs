//! Nonet is a one-shot 9×9 Sudoku solver built around a small
//! constraint-satisfaction core.
//!
//! The engine keeps a per-cell candidate set (a 9-bit mask), seeds it
//! from the clues, and then runs a recursive backtracking search with
//! one-step forward checking: every assignment removes its digit from
//! the 20 peer cells, every removal is written to an undo ledger, and
//! abandoning the assignment replays the ledger in reverse. Cell
//! selection and candidate ordering are pluggable heuristics; the
//! defaults (minimum remaining values, ascending candidates) make the
//! solver fully deterministic.
//!
//! # Core Concepts
//!
//! - **[`Grid`](grid::Grid)**: the 9×9 digit grid, 0 meaning unassigned,
//!   mutated in place by the search and restored on failure.
//! - **[`DomainStore`](solver::domain::DomainStore)**: the candidate
//!   sets of all cells, maintained incrementally by propagation.
//! - **[`SolverEngine`](solver::engine::SolverEngine)**: the search
//!   engine tying selection, propagation and backtracking together.
//!
//! # Example: Solving a Puzzle
//!
//! ```
//! use nonet::grid::Grid;
//! use nonet::solver::engine::SolverEngine;
//!
//! let mut grid = Grid::from_text(concat!(
//!     "530070000",
//!     "600195000",
//!     "098000060",
//!     "800060003",
//!     "400803001",
//!     "700020006",
//!     "060000280",
//!     "000419005",
//!     "000080079",
//! ));
//!
//! let engine = SolverEngine::with_defaults();
//! let (outcome, stats) = engine.solve(&mut grid);
//!
//! assert!(outcome.is_solved());
//! assert!(grid.is_valid_solution());
//! assert!(stats.nodes_visited > 0);
//! ```
//!
//! An unsolvable puzzle is a normal negative outcome, not an error: the
//! engine returns [`SearchOutcome::Unsolvable`](solver::engine::SearchOutcome)
//! and leaves the grid exactly as given.
pub mod error;
pub mod grid;
pub mod io;
pub mod solver;
