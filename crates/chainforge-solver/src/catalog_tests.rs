//! Tests for the action pool.

use super::*;

fn basis(values: &[u64]) -> BTreeSet<u64> {
    values.iter().copied().collect()
}

#[test]
fn test_first_expansion_offers_doubling_of_one() {
    let mut pool = ActionPool::new();
    let inserted = pool.expand_frontier(1, &basis(&[1]));

    assert_eq!(inserted, 1);
    let action = pool.get(2).unwrap();
    assert_eq!((action.addend1, action.addend2), (1, 1));
    assert_eq!(action.cost, 0);
}

#[test]
fn test_expansion_pairs_new_number_with_every_member() {
    let mut pool = ActionPool::new();
    pool.expand_frontier(3, &basis(&[1, 2, 3]));

    let sums: Vec<u64> = pool.iter().map(|a| a.sum).collect();
    assert_eq!(sums, vec![4, 5, 6]);
    for action in pool.iter() {
        assert_eq!(action.addend1, 3);
        assert_eq!(action.sum, action.addend1 + action.addend2);
    }
}

#[test]
fn test_expansion_keeps_existing_sum() {
    let mut pool = ActionPool::new();
    pool.insert(Action::new(2, 2).with_cost(7));
    pool.expand_frontier(3, &basis(&[1, 2, 3]));

    // 3 + 1 = 4 already offered as 2 + 2
    let kept = pool.get(4).unwrap();
    assert_eq!((kept.addend1, kept.addend2, kept.cost), (2, 2, 7));
    assert_eq!(pool.len(), 3);
}

#[test]
fn test_expansion_skips_sums_already_in_basis() {
    let mut pool = ActionPool::new();
    pool.expand_frontier(3, &basis(&[1, 2, 3, 4]));

    assert!(!pool.contains_sum(4));
    assert!(pool.contains_sum(5));
    assert!(pool.contains_sum(6));
    assert!(pool.contains_sum(7));
}

#[test]
fn test_insert_rejects_duplicate_sum() {
    let mut pool = ActionPool::new();
    assert!(pool.insert(Action::new(1, 3)));
    assert!(!pool.insert(Action::new(2, 2)));
    assert_eq!(pool.get(4).unwrap().addend1, 1);
}

#[test]
fn test_cheapest_breaks_ties_by_lowest_sum() {
    let mut pool = ActionPool::new();
    pool.insert(Action::new(4, 4).with_cost(2));
    pool.insert(Action::new(2, 1).with_cost(2));
    pool.insert(Action::new(2, 2).with_cost(5));

    assert_eq!(pool.cheapest().unwrap().sum, 3);
}

#[test]
fn test_cheapest_prefers_cost_over_sum() {
    let mut pool = ActionPool::new();
    pool.insert(Action::new(1, 1).with_cost(4));
    pool.insert(Action::new(8, 8).with_cost(1));

    assert_eq!(pool.cheapest().unwrap().sum, 16);
}

#[test]
fn test_commit_moves_sum_into_basis() {
    let mut pool = ActionPool::new();
    let mut basis = basis(&[1]);
    let mut targets = BTreeSet::from([2, 3]);
    let mut performed = AdditionChain::new();
    pool.expand_frontier(1, &basis);

    let action = *pool.get(2).unwrap();
    pool.commit(action, &mut basis, &mut targets, &mut performed)
        .unwrap();

    assert!(pool.is_empty());
    assert!(basis.contains(&2));
    assert_eq!(targets, BTreeSet::from([3]));
    assert_eq!(performed.len(), 1);
}

#[test]
fn test_commit_without_pool_entry_fails() {
    let mut pool = ActionPool::new();
    let mut basis = basis(&[1]);
    let mut targets = BTreeSet::from([5]);
    let mut performed = AdditionChain::new();

    let err = pool
        .commit(Action::new(2, 3), &mut basis, &mut targets, &mut performed)
        .unwrap_err();

    assert!(matches!(err, ChainForgeError::EmptyPoolCommit { sum: 5 }));
    assert_eq!(basis.len(), 1);
    assert!(performed.is_empty());
    assert!(targets.contains(&5));
}
