//! Greedy addition chain construction.
//!
//! Logging levels:
//! - **INFO**: Build start/end with problem size and totals
//! - **DEBUG**: Each committed action with its cost
//! - **TRACE**: Pathfinder fallbacks

use chainforge_config::ChainConfig;
use chainforge_core::{AdditionChain, ChainForgeError, Result, SEED_VALUE};
use tracing::{debug, info};

use crate::estimator::CostEstimator;
use crate::pathfinder::ResidualPathfinder;
use crate::scope::BuildScope;
use crate::stats::ChainStats;
use crate::termination::{self, Termination};

/// Result of a completed build.
#[derive(Debug, Clone)]
pub struct BuildResult {
    /// Committed actions in order.
    pub chain: AdditionChain,
    /// Counters for the run.
    pub stats: ChainStats,
}

/// Builds addition chains by repeatedly committing the cheapest candidate.
///
/// Each iteration offers every sum of the newest basis number with the basis,
/// prices all candidates, and commits the one with the lowest cost (ties to
/// the lowest sum). Building stops once every target is in the basis.
///
/// # Example
///
/// ```
/// use chainforge_solver::ChainBuilder;
///
/// let result = ChainBuilder::new().build([2, 3]).unwrap();
///
/// let pairs: Vec<(u64, u64)> = result
///     .chain
///     .iter()
///     .map(|a| (a.addend1, a.addend2))
///     .collect();
/// assert_eq!(pairs, vec![(1, 1), (2, 1)]);
/// ```
#[derive(Debug, Default)]
pub struct ChainBuilder {
    estimator: CostEstimator,
    termination: Option<Box<dyn Termination>>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with the pathfinder bound and termination from `config`.
    pub fn from_config(config: &ChainConfig) -> Self {
        let pathfinder = ResidualPathfinder::from_config(&config.pathfinder);
        let termination = config.termination.as_ref().and_then(termination::from_config);
        Self {
            estimator: CostEstimator::new(pathfinder),
            termination,
        }
    }

    pub fn with_estimator(mut self, estimator: CostEstimator) -> Self {
        self.estimator = estimator;
        self
    }

    pub fn with_termination(mut self, termination: impl Termination + 'static) -> Self {
        self.termination = Some(Box::new(termination));
        self
    }

    /// Builds a chain reaching every value in `targets`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainForgeError::Terminated`] if the termination fires before
    /// every target is reached, and [`ChainForgeError::EmptyPoolCommit`] or
    /// [`ChainForgeError::Internal`] on a broken pool invariant.
    pub fn build(&self, targets: impl IntoIterator<Item = u64>) -> Result<BuildResult> {
        let mut scope = BuildScope::new(targets);
        scope.start_building();

        info!(
            event = "build_start",
            target_count = scope.targets().len() as u64,
            max_target = scope.targets().last().copied().unwrap_or(SEED_VALUE),
        );

        let mut newest = SEED_VALUE;
        while !scope.is_done() {
            if self
                .termination
                .as_ref()
                .is_some_and(|t| t.is_terminated(&scope))
            {
                return Err(ChainForgeError::Terminated {
                    steps: scope.step_count(),
                    remaining: scope.targets().len(),
                });
            }

            scope.expand_frontier(newest);
            scope.price_candidates(&self.estimator);

            let Some(&chosen) = scope.pool().cheapest() else {
                return Err(ChainForgeError::Internal(format!(
                    "no candidate action after adding {newest}"
                )));
            };
            scope.commit(chosen)?;

            debug!(
                event = "step",
                step = scope.step_count(),
                sum = chosen.sum,
                addend1 = chosen.addend1,
                addend2 = chosen.addend2,
                cost = chosen.cost,
                remaining = scope.targets().len() as u64,
            );
            newest = chosen.sum;
        }

        let (chain, stats) = scope.finish();
        info!(
            event = "build_end",
            actions = chain.len() as u64,
            duration_ms = stats.elapsed().as_millis() as u64,
            candidates_priced = stats.candidates_priced,
            path_estimates = stats.path_estimates,
            speed = stats.candidates_per_second(),
        );
        Ok(BuildResult { chain, stats })
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
