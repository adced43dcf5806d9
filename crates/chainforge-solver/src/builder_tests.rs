//! Tests for the greedy chain builder.

use std::collections::BTreeSet;

use super::*;
use crate::termination::StepCountTermination;
use chainforge_core::Action;
use chainforge_test::targets::small_target_sets;
use chainforge_test::{assert_valid_chain, seeded_targets, target_set};

fn pairs(chain: &AdditionChain) -> Vec<(u64, u64)> {
    chain.iter().map(|a| (a.addend1, a.addend2)).collect()
}

#[test]
fn test_seed_only_needs_no_actions() {
    let result = ChainBuilder::new().build([1]).unwrap();

    assert!(result.chain.is_empty());
    assert_eq!(result.stats.step_count, 0);
}

#[test]
fn test_empty_targets_need_no_actions() {
    let result = ChainBuilder::new().build([]).unwrap();
    assert!(result.chain.is_empty());
}

#[test]
fn test_two_is_one_doubling() {
    let result = ChainBuilder::new().build([2]).unwrap();
    assert_eq!(pairs(&result.chain), vec![(1, 1)]);
}

#[test]
fn test_two_and_three() {
    let result = ChainBuilder::new().build([3, 2]).unwrap();

    assert_eq!(pairs(&result.chain), vec![(1, 1), (2, 1)]);
    assert_valid_chain(&target_set(&[2, 3]), result.chain.actions());
}

#[test]
fn test_power_of_two_is_reached_by_doubling() {
    let result = ChainBuilder::new().build([16]).unwrap();

    assert_eq!(pairs(&result.chain), vec![(1, 1), (2, 2), (4, 4), (8, 8)]);
}

#[test]
fn test_small_sets_produce_valid_chains() {
    for targets in small_target_sets() {
        let result = ChainBuilder::new().build(targets.iter().copied()).unwrap();
        assert_valid_chain(&targets, result.chain.actions());
    }
}

#[test]
fn test_seeded_sets_produce_valid_chains() {
    for seed in 0..4 {
        let targets = seeded_targets(seed, 6, 500);
        let result = ChainBuilder::new().build(targets.iter().copied()).unwrap();
        assert_valid_chain(&targets, result.chain.actions());
    }
}

#[test]
fn test_basis_grows_by_one_per_action() {
    let targets = target_set(&[13, 29, 100]);
    let result = ChainBuilder::new().build(targets.iter().copied()).unwrap();

    let mut basis = BTreeSet::from([1u64]);
    for action in result.chain.iter() {
        let before = basis.len();
        assert!(basis.contains(&action.addend1));
        assert!(basis.contains(&action.addend2));
        basis.insert(action.sum);
        assert_eq!(basis.len(), before + 1);
    }
}

#[test]
fn test_targets_shrink_monotonically() {
    let targets = target_set(&[6, 11, 50]);
    let result = ChainBuilder::new().build(targets.iter().copied()).unwrap();

    let mut remaining = targets.clone();
    let mut previous = remaining.len();
    for action in result.chain.iter() {
        remaining.remove(&action.sum);
        assert!(remaining.len() <= previous);
        previous = remaining.len();
    }
    assert!(remaining.is_empty());
    // The last action always reaches the final outstanding target.
    let last: &Action = result.chain.actions().last().unwrap();
    assert!(targets.contains(&last.sum));
}

#[test]
fn test_build_is_deterministic() {
    let targets = seeded_targets(99, 8, 1_000);

    let first = ChainBuilder::new().build(targets.iter().copied()).unwrap();
    let reversed: Vec<u64> = targets.iter().rev().copied().collect();
    let second = ChainBuilder::new().build(reversed).unwrap();

    assert_eq!(first.chain, second.chain);
}

#[test]
fn test_step_termination_stops_build() {
    let builder = ChainBuilder::new().with_termination(StepCountTermination::new(2));

    let err = builder.build([1_000]).unwrap_err();

    assert!(matches!(
        err,
        ChainForgeError::Terminated {
            steps: 2,
            remaining: 1
        }
    ));
}

#[test]
fn test_from_config_applies_termination() {
    let config = ChainConfig::new().with_step_count_limit(1);
    let err = ChainBuilder::from_config(&config).build([7]).unwrap_err();
    assert!(matches!(err, ChainForgeError::Terminated { steps: 1, .. }));
}

#[test]
fn test_tight_pathfinder_bound_still_completes() {
    let config = ChainConfig::new().with_max_expansions(1);
    let targets = target_set(&[37, 101, 555]);

    let result = ChainBuilder::from_config(&config)
        .build(targets.iter().copied())
        .unwrap();

    assert_valid_chain(&targets, result.chain.actions());
}

#[test]
fn test_stats_track_work() {
    let result = ChainBuilder::new().build([5, 12]).unwrap();

    assert_eq!(result.stats.step_count, result.chain.len() as u64);
    assert!(result.stats.candidates_priced >= result.stats.step_count);
}
