//! Chain replay checks.
//!
//! Mirrors what the verifier does, but panics with a readable message so test
//! failures point at the offending action.

use std::collections::BTreeSet;

use chainforge_core::{Action, SEED_VALUE};

/// Replays `actions` from the seed basis and returns the final basis.
///
/// # Panics
///
/// Panics if an action uses an addend that is not yet in the basis, or if an
/// action's sum does not match its addends.
pub fn replay_basis(actions: &[Action]) -> BTreeSet<u64> {
    let mut basis = BTreeSet::from([SEED_VALUE]);
    for (i, action) in actions.iter().enumerate() {
        let index = i + 1;
        assert_eq!(
            action.sum,
            action.addend1 + action.addend2,
            "action #{index} has a sum that does not match its addends"
        );
        for addend in [action.addend1, action.addend2] {
            assert!(
                basis.contains(&addend),
                "action #{index} uses {addend} before it is reached"
            );
        }
        basis.insert(action.sum);
    }
    basis
}

/// Asserts that `actions` is a legal chain reaching every target, and that
/// every action adds a new value to the basis.
pub fn assert_valid_chain(targets: &BTreeSet<u64>, actions: &[Action]) {
    let basis = replay_basis(actions);
    assert_eq!(
        basis.len(),
        actions.len() + 1,
        "some action produced a value already in the basis"
    );
    for target in targets {
        assert!(basis.contains(target), "target {target} was missed");
    }
}
