//! Termination conditions for chain builds.
//!
//! The greedy loop has no bound of its own on adversarial inputs. A
//! termination lets the caller cap it by committed actions or wall-clock time.

mod composite;
mod step_count;
mod time;

use std::fmt::Debug;

use chainforge_config::TerminationConfig;

use crate::scope::BuildScope;

pub use composite::OrTermination;
pub use step_count::StepCountTermination;
pub use time::TimeTermination;

/// Trait for determining when to stop building.
pub trait Termination: Send + Debug {
    /// Returns true if building should stop.
    fn is_terminated(&self, scope: &BuildScope) -> bool;
}

/// Builds the termination described by `config`, if it sets any limit.
pub fn from_config(config: &TerminationConfig) -> Option<Box<dyn Termination>> {
    let time = config.time_limit().map(TimeTermination::new);
    let steps = config.step_count_limit.map(StepCountTermination::new);
    match (time, steps) {
        (Some(time), Some(steps)) => Some(Box::new(OrTermination((time, steps)))),
        (Some(time), None) => Some(Box::new(time)),
        (None, Some(steps)) => Some(Box::new(steps)),
        (None, None) => None,
    }
}
