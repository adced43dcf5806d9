//! The pool of available actions.
//!
//! The pool is the frontier of sums reachable in one action from the current
//! basis but not yet committed. It is keyed by sum, so no two entries ever
//! produce the same value.

use std::collections::btree_map::{self, BTreeMap};
use std::collections::BTreeSet;

use chainforge_core::{Action, AdditionChain, ChainForgeError, Result};
use rayon::prelude::*;

/// Candidate actions keyed by their sum.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use chainforge_solver::catalog::ActionPool;
///
/// let basis = BTreeSet::from([1]);
/// let mut pool = ActionPool::new();
/// pool.expand_frontier(1, &basis);
///
/// assert_eq!(pool.len(), 1);
/// assert!(pool.contains_sum(2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ActionPool {
    actions: BTreeMap<u64, Action>,
}

impl ActionPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn contains_sum(&self, sum: u64) -> bool {
        self.actions.contains_key(&sum)
    }

    pub fn get(&self, sum: u64) -> Option<&Action> {
        self.actions.get(&sum)
    }

    /// Inserts `action` unless an entry with the same sum exists.
    ///
    /// Returns whether the action was inserted.
    pub fn insert(&mut self, action: Action) -> bool {
        match self.actions.entry(action.sum) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(action);
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    /// Removes and returns the entry producing `sum`.
    pub fn remove(&mut self, sum: u64) -> Option<Action> {
        self.actions.remove(&sum)
    }

    /// Iterates candidates in ascending sum order.
    pub fn iter(&self) -> btree_map::Values<'_, u64, Action> {
        self.actions.values()
    }

    pub fn iter_mut(&mut self) -> btree_map::ValuesMut<'_, u64, Action> {
        self.actions.values_mut()
    }

    /// Parallel mutable iteration over candidates.
    pub fn par_iter_mut(&mut self) -> impl ParallelIterator<Item = &mut Action> + '_ {
        self.actions.par_iter_mut().map(|(_, action)| action)
    }

    /// Returns the candidate with the lowest cost, ties going to the lowest sum.
    pub fn cheapest(&self) -> Option<&Action> {
        self.actions.values().min_by(|a, b| a.selection_cmp(b))
    }

    /// Adds every action that combines `new_basis_number` with a basis member.
    ///
    /// Sums already in the pool keep their existing entry. Sums already in the
    /// basis are skipped since committing them would not grow the basis.
    ///
    /// Returns the number of actions inserted.
    pub fn expand_frontier(&mut self, new_basis_number: u64, basis: &BTreeSet<u64>) -> usize {
        let mut inserted = 0;
        for &member in basis {
            let action = Action::new(new_basis_number, member);
            if basis.contains(&action.sum) {
                continue;
            }
            if self.insert(action) {
                inserted += 1;
            }
        }
        inserted
    }

    /// Commits `action`: records it, moves its sum into the basis and strikes
    /// it from the targets.
    ///
    /// # Errors
    ///
    /// Returns [`ChainForgeError::EmptyPoolCommit`] when the pool holds no
    /// entry for `action.sum`. Nothing is modified in that case.
    pub fn commit(
        &mut self,
        action: Action,
        basis: &mut BTreeSet<u64>,
        targets: &mut BTreeSet<u64>,
        performed: &mut AdditionChain,
    ) -> Result<()> {
        if self.remove(action.sum).is_none() {
            return Err(ChainForgeError::EmptyPoolCommit { sum: action.sum });
        }
        performed.push(action);
        basis.insert(action.sum);
        targets.remove(&action.sum);
        Ok(())
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
