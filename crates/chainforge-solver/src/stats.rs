//! Build statistics.
//!
//! Stack-allocated counters for one chain build.

use std::time::{Duration, Instant};

use crate::estimator::PricingSummary;

/// Build-level statistics.
///
/// # Example
///
/// ```
/// use chainforge_solver::stats::ChainStats;
///
/// let mut stats = ChainStats::default();
/// stats.start();
/// stats.record_step();
/// stats.record_step();
///
/// assert_eq!(stats.step_count, 2);
/// assert_eq!(stats.candidates_priced, 0);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ChainStats {
    start_time: Option<Instant>,
    finished: Option<Duration>,
    /// Actions committed.
    pub step_count: u64,
    /// Candidates priced across all iterations.
    pub candidates_priced: u64,
    /// Pathfinder estimates across all iterations.
    pub path_estimates: u64,
    /// Estimates that fell back to greedy decomposition.
    pub pathfinder_fallbacks: u64,
}

impl ChainStats {
    /// Marks the start of building.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.finished = None;
    }

    /// Freezes the elapsed time.
    pub fn finish(&mut self) {
        self.finished = Some(self.elapsed());
    }

    /// Returns the elapsed time since building started.
    pub fn elapsed(&self) -> Duration {
        if let Some(finished) = self.finished {
            return finished;
        }
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Records a committed action.
    pub fn record_step(&mut self) {
        self.step_count += 1;
    }

    /// Records one pricing pass.
    pub fn record_pricing(&mut self, summary: PricingSummary) {
        self.candidates_priced += summary.candidates_priced;
        self.path_estimates += summary.path_estimates;
        self.pathfinder_fallbacks += summary.fallbacks;
    }

    /// Returns the candidates priced per second.
    pub fn candidates_per_second(&self) -> u64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            (self.candidates_priced as f64 / secs) as u64
        } else {
            0
        }
    }
}
