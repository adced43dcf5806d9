//! Composite termination.
//!
//! Uses macro-generated tuple implementations, so combining terminations needs
//! no boxing.

use super::Termination;
use crate::scope::BuildScope;

/// Combines multiple terminations with OR logic (any must terminate).
///
/// # Examples
///
/// ```
/// use chainforge_solver::termination::{OrTermination, StepCountTermination, TimeTermination};
///
/// // Terminate after 30 seconds OR 1000 actions
/// let termination = OrTermination((
///     TimeTermination::seconds(30),
///     StepCountTermination::new(1000),
/// ));
/// ```
#[derive(Debug)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    /// Creates a new OR termination from a tuple of terminations.
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

/// Generates `Termination` implementations for OR tuples.
macro_rules! impl_or_termination {
    ($($idx:tt: $T:ident),+) => {
        impl<$($T),+> Termination for OrTermination<($($T,)+)>
        where
            $($T: Termination,)+
        {
            fn is_terminated(&self, scope: &BuildScope) -> bool {
                $((self.0).$idx.is_terminated(scope))||+
            }
        }
    };
}

impl_or_termination!(0: T0);
impl_or_termination!(0: T0, 1: T1);
impl_or_termination!(0: T0, 1: T1, 2: T2);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3);
