//! Candidate pricing.
//!
//! Each candidate is priced against its own clone of the basis with the
//! candidate's sum already inserted, so hypothetical states never leak between
//! candidates. Candidates are priced in parallel.

use std::collections::BTreeSet;

use chainforge_core::Action;
use rayon::prelude::*;

use crate::catalog::ActionPool;
use crate::pathfinder::ResidualPathfinder;

/// Work done by one pricing pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PricingSummary {
    /// Candidates that received a cost.
    pub candidates_priced: u64,
    /// Calls into the pathfinder.
    pub path_estimates: u64,
    /// Estimates that fell back to greedy decomposition.
    pub fallbacks: u64,
}

impl PricingSummary {
    fn merge(self, other: PricingSummary) -> Self {
        Self {
            candidates_priced: self.candidates_priced + other.candidates_priced,
            path_estimates: self.path_estimates + other.path_estimates,
            fallbacks: self.fallbacks + other.fallbacks,
        }
    }
}

/// Estimates the future actions each candidate leaves outstanding.
#[derive(Debug, Clone, Default)]
pub struct CostEstimator {
    pathfinder: ResidualPathfinder,
}

impl CostEstimator {
    pub fn new(pathfinder: ResidualPathfinder) -> Self {
        Self { pathfinder }
    }

    pub fn pathfinder(&self) -> &ResidualPathfinder {
        &self.pathfinder
    }

    /// Returns the cost of taking `action` now.
    ///
    /// A candidate that lands on a pending target is free. Any other candidate
    /// costs the sum of path estimates for every target, taken in ascending
    /// order against one scratch basis.
    pub fn price(
        &self,
        action: &Action,
        basis: &BTreeSet<u64>,
        targets: &BTreeSet<u64>,
    ) -> (u64, PricingSummary) {
        let mut summary = PricingSummary {
            candidates_priced: 1,
            ..PricingSummary::default()
        };
        if targets.contains(&action.sum) {
            return (0, summary);
        }

        let mut scratch = basis.clone();
        scratch.insert(action.sum);

        let mut cost = 0;
        for &target in targets {
            let estimate = self.pathfinder.estimate(target, &mut scratch);
            cost += estimate.actions;
            summary.path_estimates += 1;
            if estimate.exhausted {
                summary.fallbacks += 1;
            }
        }
        (cost, summary)
    }

    /// Reprices every candidate in `pool` for the current basis and targets.
    pub fn price_all(
        &self,
        pool: &mut ActionPool,
        basis: &BTreeSet<u64>,
        targets: &BTreeSet<u64>,
    ) -> PricingSummary {
        pool.par_iter_mut()
            .map(|action| {
                let (cost, summary) = self.price(action, basis, targets);
                action.cost = cost;
                summary
            })
            .reduce(PricingSummary::default, PricingSummary::merge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[u64]) -> BTreeSet<u64> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_landing_on_target_is_free() {
        let estimator = CostEstimator::default();
        let (cost, summary) = estimator.price(&Action::new(1, 1), &set(&[1]), &set(&[2, 9]));

        assert_eq!(cost, 0);
        assert_eq!(summary.path_estimates, 0);
    }

    #[test]
    fn test_cost_sums_estimates_over_targets() {
        let estimator = CostEstimator::default();
        // After 2: target 3 = 2 + 1, then target 4 = 3 + 1.
        let (cost, summary) = estimator.price(&Action::new(1, 1), &set(&[1]), &set(&[3, 4]));

        assert_eq!(cost, 2);
        assert_eq!(summary.path_estimates, 2);
        assert_eq!(summary.fallbacks, 0);
    }

    #[test]
    fn test_pricing_leaves_basis_untouched() {
        let estimator = CostEstimator::default();
        let basis = set(&[1, 2]);
        let mut pool = ActionPool::new();
        pool.expand_frontier(2, &basis);

        estimator.price_all(&mut pool, &basis, &set(&[100]));

        assert_eq!(basis, set(&[1, 2]));
    }

    #[test]
    fn test_price_all_updates_every_candidate() {
        let estimator = CostEstimator::default();
        let basis = set(&[1, 2]);
        let targets = set(&[3, 8]);
        let mut pool = ActionPool::new();
        pool.expand_frontier(2, &basis);

        let summary = estimator.price_all(&mut pool, &basis, &targets);

        assert_eq!(summary.candidates_priced, 2);
        // 2 + 1 = 3 is a target.
        assert_eq!(pool.get(3).unwrap().cost, 0);
        // After 4: 3 = 2 + 1, then 8 = 4 + 4.
        assert_eq!(pool.get(4).unwrap().cost, 2);
        assert_eq!(pool.cheapest().unwrap().sum, 3);
    }

    #[test]
    fn test_later_targets_reuse_earlier_paths() {
        let estimator = CostEstimator::default();
        // Pricing 2 with targets {7, 14}: 7 costs 3 from {1, 2}, then 14 = 7 + 7.
        let (cost, _) = estimator.price(&Action::new(1, 1), &set(&[1]), &set(&[7, 14]));

        assert_eq!(cost, 4);
    }
}
