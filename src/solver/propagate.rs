//! One-step forward checking with an undo ledger.
//!
//! Assigning a digit to a cell removes that digit from the domains of
//! the cell's 20 peers. Every removal is recorded in an [`UndoLedger`]
//! so the whole effect can be replayed in reverse when the search
//! abandons the assignment. Propagation never looks past direct peers;
//! there is no transitive arc revision.

use tracing::debug;

use crate::{
    grid::{for_each_peer, Cell},
    solver::domain::{CandidateSet, DomainStore},
};

/// The record of one propagation call.
///
/// Holds the assigned cell's full prior domain plus every `(cell,
/// digit)` removal made at a peer. The ledger is consumed by value in
/// [`revert`], so it can be replayed at most once; dropping it instead
/// makes the propagation permanent.
#[derive(Debug)]
pub struct UndoLedger {
    cell: Cell,
    prior: CandidateSet,
    removals: Vec<(Cell, u8)>,
}

impl UndoLedger {
    fn new(cell: Cell, prior: CandidateSet) -> Self {
        Self {
            cell,
            prior,
            // A cell has at most 20 peers, so one propagation records
            // at most 20 removals.
            removals: Vec::with_capacity(20),
        }
    }

    /// Number of peer removals recorded.
    pub fn removal_count(&self) -> usize {
        self.removals.len()
    }
}

/// Assigns `value` to `cell` in the domain store and forward-checks its
/// peers.
///
/// Records the cell's prior domain, overwrites it with the singleton,
/// then removes `value` from every peer domain that contains it,
/// recording each removal. Returns the ledger and a consistency flag:
/// `false` means some peer's domain was emptied. The pass always visits
/// all peers, even after a wipeout, so the ledger contents are the same
/// whether the flag is `true` or `false`.
///
/// The caller decides what to do on inconsistency; a `false` flag
/// obliges it to [`revert`] the ledger before trying another value.
pub fn apply(domains: &mut DomainStore, cell: Cell, value: u8) -> (UndoLedger, bool) {
    let mut ledger = UndoLedger::new(cell, domains.get(cell));
    domains.set(cell, CandidateSet::singleton(value));

    let mut consistent = true;
    for_each_peer(cell, |peer| {
        let mut domain = domains.get(peer);
        if domain.contains(value) {
            domain.remove(value);
            domains.set(peer, domain);
            ledger.removals.push((peer, value));
            if domain.is_empty() {
                debug!(?peer, value, "domain wiped out");
                consistent = false;
            }
        }
    });

    (ledger, consistent)
}

/// Replays `ledger` in reverse, restoring the store bit-for-bit to its
/// state before the matching [`apply`].
pub fn revert(domains: &mut DomainStore, ledger: UndoLedger) {
    for &(peer, value) in ledger.removals.iter().rev() {
        let mut domain = domains.get(peer);
        debug_assert!(
            !domain.contains(value),
            "domain of {peer:?} desynchronized: {value} present before re-insert"
        );
        domain.insert(value);
        domains.set(peer, domain);
    }
    domains.set(ledger.cell, ledger.prior);
}
