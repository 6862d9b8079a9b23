use std::cell::RefCell;

use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::solver::domain::CandidateSet;

/// A trait for strategies that determine the order of candidate digits
/// to try for a cell.
pub trait ValueOrderingHeuristic {
    /// Given a cell's domain, returns the digits in the order they
    /// should be tried.
    ///
    /// # Arguments
    ///
    /// * `domain`: the domain of the cell being branched on.
    ///
    /// # Returns
    ///
    /// The candidate digits in the desired order.
    fn order_values(&self, domain: CandidateSet) -> Vec<u8>;
}

/// Orders candidates in ascending numeric order.
///
/// This is the default: the order is fixed and documented, so repeated
/// runs on the same puzzle find the same first solution.
pub struct AscendingValueHeuristic;

impl ValueOrderingHeuristic for AscendingValueHeuristic {
    fn order_values(&self, domain: CandidateSet) -> Vec<u8> {
        domain.iter().collect()
    }
}

/// Orders candidates randomly, driven by a seeded generator.
///
/// Two heuristics built from the same seed produce identical orderings,
/// so randomized runs stay reproducible.
pub struct ShuffledValueHeuristic {
    rng: RefCell<ChaCha8Rng>,
}

impl ShuffledValueHeuristic {
    /// Creates a heuristic whose shuffle sequence is determined by
    /// `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: RefCell::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl ValueOrderingHeuristic for ShuffledValueHeuristic {
    fn order_values(&self, domain: CandidateSet) -> Vec<u8> {
        let mut values: Vec<u8> = domain.iter().collect();
        values.shuffle(&mut *self.rng.borrow_mut());
        values
    }
}
