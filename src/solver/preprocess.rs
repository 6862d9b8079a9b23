//! Seeds the domain store from the initial clues.

use crate::{
    grid::{for_each_peer, Grid},
    solver::domain::{CandidateSet, DomainStore},
};

/// Builds the initial domain store for `grid` in one full pass.
///
/// Clue cells are visited in row-major order. Each clue's own domain
/// becomes the singleton of its digit, and the digit is discarded from
/// every peer's domain, whether or not that peer is itself a clue.
///
/// Contradictions among clues are not detected here: two identical
/// clues in one peer group simply leave some cell's domain empty, to be
/// observed by the caller. Runs once per solve, never incrementally.
pub fn initialize(grid: &Grid) -> DomainStore {
    let mut domains = DomainStore::unconstrained();
    for cell in Grid::cells() {
        let value = grid.get(cell);
        if value != 0 {
            domains.set(cell, CandidateSet::singleton(value));
            for_each_peer(cell, |peer| {
                let mut domain = domains.get(peer);
                domain.remove(value);
                domains.set(peer, domain);
            });
        }
    }
    domains
}
