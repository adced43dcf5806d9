//! Chain verification.
//!
//! Replays a chain against the seed basis `{1}` and checks that every target
//! ends up in the basis.

use std::collections::BTreeSet;

use chainforge_core::{Action, ChainForgeError, Result, SEED_VALUE};
use tracing::debug;

use crate::output::ChainFile;

/// What a successful verification saw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifySummary {
    pub actions: usize,
    pub targets: usize,
}

/// Verifies a parsed chain file against `targets`.
///
/// # Errors
///
/// - [`ChainForgeError::CountMismatch`] if the declared count differs from
///   the listed actions
/// - [`ChainForgeError::InvalidAddend`] for the first action using a value
///   not yet in the basis (1-based index)
/// - [`ChainForgeError::MissedTarget`] for the smallest target never reached
pub fn verify(targets: &BTreeSet<u64>, chain: &ChainFile) -> Result<VerifySummary> {
    if chain.declared != chain.actions.len() {
        return Err(ChainForgeError::CountMismatch {
            declared: chain.declared,
            actual: chain.actions.len(),
        });
    }
    verify_actions(targets, &chain.actions)
}

/// Replays `actions` and checks every target is reached.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use chainforge_core::{Action, ChainForgeError};
/// use chainforge_io::verify_actions;
///
/// let targets = BTreeSet::from([3]);
/// assert!(verify_actions(&targets, &[Action::new(1, 1), Action::new(2, 1)]).is_ok());
///
/// let err = verify_actions(&targets, &[Action::new(5, 7)]).unwrap_err();
/// assert!(matches!(err, ChainForgeError::InvalidAddend { index: 1, addend: 5 }));
/// ```
pub fn verify_actions(targets: &BTreeSet<u64>, actions: &[Action]) -> Result<VerifySummary> {
    let mut basis = BTreeSet::from([SEED_VALUE]);

    for (i, action) in actions.iter().enumerate() {
        for addend in [action.addend1, action.addend2] {
            if !basis.contains(&addend) {
                return Err(ChainForgeError::InvalidAddend {
                    index: i + 1,
                    addend,
                });
            }
        }
        basis.insert(action.sum);
    }

    if let Some(&target) = targets.iter().find(|t| !basis.contains(t)) {
        return Err(ChainForgeError::MissedTarget { target });
    }

    debug!(
        event = "verified",
        actions = actions.len() as u64,
        targets = targets.len() as u64,
    );
    Ok(VerifySummary {
        actions: actions.len(),
        targets: targets.len(),
    })
}
