//! Step count termination.

use super::Termination;
use crate::scope::BuildScope;

/// Terminates once the given number of actions has been committed.
///
/// # Example
///
/// ```
/// use chainforge_solver::termination::StepCountTermination;
///
/// // Terminate after 1000 actions
/// let term = StepCountTermination::new(1000);
/// ```
#[derive(Debug, Clone)]
pub struct StepCountTermination {
    limit: u64,
}

impl StepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for StepCountTermination {
    fn is_terminated(&self, scope: &BuildScope) -> bool {
        scope.step_count() >= self.limit
    }
}
