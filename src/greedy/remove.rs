//! Greedy-remove construction: strip until admissible, then backfill.

use log::debug;

use super::add::GreedyAdd;
use crate::problem::Instance;
use crate::scoring::{rank_descending, ScoringRule};

/// Greedy construction by removal from the full item set.
///
/// The selection starts as the whole item table, sorted so the least
/// efficient items under the removal rule are dropped first. Once the walk
/// ends, an inadmissible remainder means the instance has no reachable
/// admissible subset along this path and the empty selection is returned.
/// Otherwise a [`GreedyAdd`] pass under the addition rule backfills
/// whatever capacity the removals freed.
pub struct GreedyRemove;

impl GreedyRemove {
    /// Runs the removal pass followed by the addition backfill.
    ///
    /// The result is always admissible or empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use mkp_heur::greedy::GreedyRemove;
    /// use mkp_heur::problem::{Instance, Item};
    /// use mkp_heur::scoring::{MaxRatio, SumRatio};
    ///
    /// let instance = Instance::new(
    ///     1,
    ///     vec![10],
    ///     vec![
    ///         Item::new(10, vec![6]),
    ///         Item::new(9, vec![6]),
    ///         Item::new(1, vec![20]),
    ///     ],
    /// )
    /// .unwrap();
    /// let selection = GreedyRemove::run(&instance, &SumRatio, &MaxRatio);
    /// assert_eq!(selection.len(), 1);
    /// assert!(instance.total_utility(&selection) >= 9);
    /// ```
    pub fn run(
        instance: &Instance,
        removal_rule: &dyn ScoringRule,
        addition_rule: &dyn ScoringRule,
    ) -> Vec<usize> {
        let full: Vec<usize> = (0..instance.num_items()).collect();

        // Most efficient first; the walk below drops from the tail end.
        let mut selection = rank_descending(instance, removal_rule, &full);
        let drop_order: Vec<usize> = selection.iter().rev().copied().collect();

        for id in drop_order {
            if !instance.is_admissible(&selection) {
                selection.retain(|&kept| kept != id);
            }
        }

        if !instance.is_admissible(&selection) {
            debug!(
                "removal pass under {} left no admissible subset",
                removal_rule.name()
            );
            return Vec::new();
        }

        debug!(
            "removal pass kept {} of {} items, backfilling with {}",
            selection.len(),
            instance.num_items(),
            addition_rule.name()
        );
        GreedyAdd::extend(instance, addition_rule, selection)
    }
}
