//! Core trait for scoring policies.

use crate::problem::{Instance, Item};

/// Selection state a scoring rule may consult.
///
/// Carries the instance budgets and the consumption vector of the current
/// selection. Static rules ignore it; the adaptive rule reads it on every
/// score call, so a fresh context must be built whenever the selection
/// changes.
#[derive(Debug, Clone)]
pub struct ScoreContext<'a> {
    budgets: &'a [u32],
    consumption: Vec<u64>,
}

impl<'a> ScoreContext<'a> {
    /// Builds the context for a selection over the given instance.
    pub fn new(instance: &'a Instance, selection: &[usize]) -> Self {
        Self {
            budgets: instance.budgets(),
            consumption: instance.consumption(selection),
        }
    }

    /// Returns the per-dimension budgets.
    pub fn budgets(&self) -> &[u32] {
        self.budgets
    }

    /// Returns the current selection's consumption vector.
    pub fn consumption(&self) -> &[u64] {
        &self.consumption
    }

    /// Returns the dimension with the largest overshoot
    /// `consumption[d] - budgets[d]`, ties broken by lowest index.
    pub fn most_violated_dimension(&self) -> usize {
        let mut worst = 0;
        let mut worst_overshoot = i64::MIN;
        for (d, (&used, &budget)) in self.consumption.iter().zip(self.budgets).enumerate() {
            let overshoot = used as i64 - i64::from(budget);
            if overshoot > worst_overshoot {
                worst_overshoot = overshoot;
                worst = d;
            }
        }
        worst
    }
}

/// A policy assigning an efficiency score to an item.
///
/// Higher scores rank earlier. Scores must never be NaN so that the induced
/// order is total; rules map zero-cost denominators to `+∞` instead of
/// dividing.
pub trait ScoringRule {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Computes the item's score under the given selection state.
    fn score(&self, item: &Item, ctx: &ScoreContext<'_>) -> f64;
}
