//! Residual pathfinding.
//!
//! Estimates how many actions it takes to build a single target from a basis.
//! The estimate first doubles the basis toward the target, then runs a
//! breadth-first search over *residual paths*: the amount still owed after
//! each hypothesised addition.
//!
//! The estimator writes every intermediate value it used back into the basis
//! it was handed. Callers price several targets against one scratch basis so
//! that later, larger targets can reuse those values.

use std::collections::{BTreeSet, HashSet, VecDeque};

use chainforge_config::{PathfinderConfig, DEFAULT_MAX_EXPANSIONS};
use tracing::trace;

/// Outcome of a single estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathEstimate {
    /// Estimated number of additional actions.
    pub actions: u64,
    /// Residual paths popped from the search queue.
    pub expansions: usize,
    /// True when the search drained without completing and the estimate
    /// came from greedy decomposition.
    pub exhausted: bool,
}

impl PathEstimate {
    fn exact(actions: u64, expansions: usize) -> Self {
        Self {
            actions,
            expansions,
            exhausted: false,
        }
    }
}

/// Breadth-first residual search with a bounded queue.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use chainforge_solver::pathfinder::ResidualPathfinder;
///
/// let pathfinder = ResidualPathfinder::default();
/// let mut scratch = BTreeSet::from([1]);
///
/// // 1 -> 2 -> 4 -> 8
/// assert_eq!(pathfinder.estimate_path_length(8, &mut scratch), 3);
/// assert!(scratch.contains(&4));
/// ```
#[derive(Debug, Clone)]
pub struct ResidualPathfinder {
    max_expansions: usize,
}

impl Default for ResidualPathfinder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_EXPANSIONS)
    }
}

impl ResidualPathfinder {
    /// Creates a pathfinder that enqueues at most `max_expansions` paths per
    /// estimate.
    pub fn new(max_expansions: usize) -> Self {
        Self {
            max_expansions: max_expansions.max(1),
        }
    }

    pub fn from_config(config: &PathfinderConfig) -> Self {
        Self::new(config.max_expansions)
    }

    pub fn max_expansions(&self) -> usize {
        self.max_expansions
    }

    /// Returns the estimated number of actions to reach `target`.
    ///
    /// `scratch` receives every value the estimate passed through.
    pub fn estimate_path_length(&self, target: u64, scratch: &mut BTreeSet<u64>) -> u64 {
        self.estimate(target, scratch).actions
    }

    /// Estimates the actions to reach `target`, reporting search effort.
    pub fn estimate(&self, target: u64, scratch: &mut BTreeSet<u64>) -> PathEstimate {
        if scratch.contains(&target) {
            return PathEstimate::exact(0, 0);
        }
        // Nothing at or below the target to build from.
        let Some(&start) = scratch.range(..=target).next_back() else {
            return PathEstimate::exact(0, 0);
        };

        let mut max = start;
        let mut doublings = 0u64;
        while let Some(doubled) = max.checked_mul(2).filter(|d| target >= *d) {
            max = doubled;
            scratch.insert(max);
            doublings += 1;
        }

        if target == max {
            return PathEstimate::exact(doublings, 0);
        }

        let initial = vec![target - max];
        if completes(&initial, scratch) {
            return PathEstimate::exact(doublings + record_path(target, &initial, scratch), 0);
        }

        // Paths are goal-tested as they are generated. The queue is FIFO, so the
        // first completing path generated is the first one a pop-time test
        // would find.
        let mut enqueued: HashSet<Vec<u64>> = HashSet::from([initial.clone()]);
        let mut queue = VecDeque::from([initial]);
        let mut expansions = 0usize;

        while let Some(path) = queue.pop_front() {
            expansions += 1;
            let gap = path[0];
            let recorded = &path[1..];

            let mut found = None;
            let bases = scratch.range(..gap).rev().chain(recorded.iter().rev());
            for &base in bases {
                if base >= gap {
                    continue;
                }
                let mut next = path.clone();
                next[0] = gap - base;
                next.push(target - gap + base);
                if completes(&next, scratch) {
                    found = Some(next);
                    break;
                }
                if enqueued.len() < self.max_expansions && enqueued.insert(next.clone()) {
                    queue.push_back(next);
                }
            }

            if let Some(done) = found {
                let actions = doublings + record_path(target, &done, scratch);
                return PathEstimate::exact(actions, expansions);
            }
        }

        trace!(
            event = "pathfinder_fallback",
            target = target,
            expansions = expansions as u64,
        );
        let actions = doublings + greedy_decomposition(target - max, scratch);
        scratch.insert(target);
        PathEstimate {
            actions,
            expansions,
            exhausted: true,
        }
    }
}

// A path is complete when its outstanding gap is already reachable.
fn completes(path: &[u64], scratch: &BTreeSet<u64>) -> bool {
    let gap = path[0];
    scratch.contains(&gap) || path[1..].contains(&gap)
}

// Inserts the target and the path's recorded values, returning the path length.
fn record_path(target: u64, path: &[u64], scratch: &mut BTreeSet<u64>) -> u64 {
    scratch.insert(target);
    scratch.extend(path[1..].iter().copied());
    path.len() as u64
}

// Counts subtractions of the largest basis value not exceeding the gap.
fn greedy_decomposition(mut gap: u64, basis: &BTreeSet<u64>) -> u64 {
    let mut steps = 0;
    while gap > 0 {
        let Some(&base) = basis.range(1..=gap).next_back() else {
            break;
        };
        gap -= base;
        steps += 1;
    }
    steps
}

#[cfg(test)]
#[path = "pathfinder_tests.rs"]
mod tests;
