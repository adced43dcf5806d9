//! Addition actions and the chains built from them.

use std::cmp::Ordering;
use std::fmt;

/// One addition step: `sum = addend1 + addend2`.
///
/// `cost` is the estimated number of further actions needed to reach every
/// outstanding target once this action is taken. It is only meaningful
/// within the iteration that computed it.
///
/// # Example
///
/// ```
/// use chainforge_core::Action;
///
/// let action = Action::new(1, 2);
/// assert_eq!(action.sum, 3);
/// assert_eq!(action.cost, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    pub sum: u64,
    pub addend1: u64,
    pub addend2: u64,
    pub cost: u64,
}

impl Action {
    /// Creates an unpriced action adding `addend1` and `addend2`.
    pub fn new(addend1: u64, addend2: u64) -> Self {
        Self {
            sum: addend1 + addend2,
            addend1,
            addend2,
            cost: 0,
        }
    }

    /// Returns a copy carrying the given cost.
    pub fn with_cost(mut self, cost: u64) -> Self {
        self.cost = cost;
        self
    }

    /// Selection order: cheapest first, ties broken by the lowest sum.
    pub fn selection_cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.sum.cmp(&other.sum))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.addend1, self.addend2)
    }
}

/// An ordered list of committed actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdditionChain {
    actions: Vec<Action>,
}

impl AdditionChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an action in commit order.
    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }

    pub fn into_actions(self) -> Vec<Action> {
        self.actions
    }
}

impl From<Vec<Action>> for AdditionChain {
    fn from(actions: Vec<Action>) -> Self {
        Self { actions }
    }
}

impl<'a> IntoIterator for &'a AdditionChain {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_prefers_lower_cost() {
        let cheap = Action::new(4, 4).with_cost(1);
        let dear = Action::new(1, 1).with_cost(2);
        assert_eq!(cheap.selection_cmp(&dear), Ordering::Less);
    }

    #[test]
    fn test_selection_breaks_ties_by_sum() {
        let low = Action::new(1, 2).with_cost(3);
        let high = Action::new(2, 2).with_cost(3);
        assert_eq!(low.selection_cmp(&high), Ordering::Less);
        assert_eq!(high.selection_cmp(&low), Ordering::Greater);
    }

    #[test]
    fn test_display_omits_sum() {
        assert_eq!(Action::new(3, 5).to_string(), "3 5");
    }

    #[test]
    fn test_chain_preserves_order() {
        let mut chain = AdditionChain::new();
        chain.push(Action::new(1, 1));
        chain.push(Action::new(2, 1));
        let sums: Vec<u64> = chain.iter().map(|a| a.sum).collect();
        assert_eq!(sums, vec![2, 3]);
    }
}
