//! Target set fixtures.

use std::collections::BTreeSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Collects `values` into a target set.
pub fn target_set(values: &[u64]) -> BTreeSet<u64> {
    values.iter().copied().collect()
}

/// Returns up to `count` distinct targets in `2..=max`, reproducible by `seed`.
///
/// # Example
///
/// ```
/// use chainforge_test::seeded_targets;
///
/// let a = seeded_targets(7, 10, 500);
/// let b = seeded_targets(7, 10, 500);
/// assert_eq!(a, b);
/// assert!(a.iter().all(|&t| (2..=500).contains(&t)));
/// ```
pub fn seeded_targets(seed: u64, count: usize, max: u64) -> BTreeSet<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.random_range(2..=max)).collect()
}

/// Small hand-picked target sets covering doubling, odd and mixed cases.
pub fn small_target_sets() -> Vec<BTreeSet<u64>> {
    vec![
        target_set(&[2]),
        target_set(&[3]),
        target_set(&[2, 3]),
        target_set(&[7]),
        target_set(&[15]),
        target_set(&[5, 9, 17]),
        target_set(&[1, 64]),
        target_set(&[10, 20, 40, 80]),
        target_set(&[31, 33, 95]),
        target_set(&[1000]),
    ]
}
