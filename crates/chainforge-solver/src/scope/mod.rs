//! Build scope.
//!
//! [`BuildScope`] owns all mutable state of one chain build: the basis, the
//! outstanding targets, the action pool, the committed chain and the
//! statistics. Terminations observe it read-only.

use std::collections::BTreeSet;
use std::time::Duration;

use chainforge_core::{Action, AdditionChain, Result, SEED_VALUE};

use crate::catalog::ActionPool;
use crate::estimator::{CostEstimator, PricingSummary};
use crate::stats::ChainStats;

/// State for a single call to [`ChainBuilder::build`](crate::ChainBuilder::build).
#[derive(Debug)]
pub struct BuildScope {
    basis: BTreeSet<u64>,
    targets: BTreeSet<u64>,
    pool: ActionPool,
    chain: AdditionChain,
    stats: ChainStats,
}

impl BuildScope {
    /// Creates a scope with basis `{1}`.
    ///
    /// Targets already in the basis are dropped up front.
    pub fn new(targets: impl IntoIterator<Item = u64>) -> Self {
        let basis = BTreeSet::from([SEED_VALUE]);
        let targets = targets
            .into_iter()
            .filter(|t| !basis.contains(t))
            .collect();
        Self {
            basis,
            targets,
            pool: ActionPool::new(),
            chain: AdditionChain::new(),
            stats: ChainStats::default(),
        }
    }

    pub fn start_building(&mut self) {
        self.stats.start();
    }

    pub fn basis(&self) -> &BTreeSet<u64> {
        &self.basis
    }

    pub fn targets(&self) -> &BTreeSet<u64> {
        &self.targets
    }

    pub fn pool(&self) -> &ActionPool {
        &self.pool
    }

    pub fn chain(&self) -> &AdditionChain {
        &self.chain
    }

    pub fn stats(&self) -> &ChainStats {
        &self.stats
    }

    pub fn is_done(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn step_count(&self) -> u64 {
        self.stats.step_count
    }

    pub fn elapsed(&self) -> Duration {
        self.stats.elapsed()
    }

    /// Offers every action combining `new_basis_number` with the basis.
    pub fn expand_frontier(&mut self, new_basis_number: u64) -> usize {
        self.pool.expand_frontier(new_basis_number, &self.basis)
    }

    /// Reprices the pool for the current basis and targets.
    pub fn price_candidates(&mut self, estimator: &CostEstimator) -> PricingSummary {
        let summary = estimator.price_all(&mut self.pool, &self.basis, &self.targets);
        self.stats.record_pricing(summary);
        summary
    }

    /// Commits `action` and counts the step.
    pub fn commit(&mut self, action: Action) -> Result<()> {
        self.pool.commit(
            action,
            &mut self.basis,
            &mut self.targets,
            &mut self.chain,
        )?;
        self.stats.record_step();
        Ok(())
    }

    /// Ends the build, returning the chain and frozen statistics.
    pub fn finish(mut self) -> (AdditionChain, ChainStats) {
        self.stats.finish();
        (self.chain, self.stats)
    }
}
