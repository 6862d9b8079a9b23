//! The constraint-satisfaction core: domains, propagation, heuristics
//! and the backtracking search engine.

pub mod domain;
pub mod engine;
pub mod heuristics;
pub mod preprocess;
pub mod propagate;
pub mod stats;
