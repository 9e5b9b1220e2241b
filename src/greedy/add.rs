//! Greedy-add construction.

use crate::problem::Instance;
use crate::scoring::{rank_descending, ScoringRule};

/// Greedy construction by descending-score insertion.
///
/// Items are ranked once, then visited in order; each item is kept only if
/// the augmented selection stays admissible. A rejected item is never
/// reconsidered, so the result is admissible but not necessarily maximal
/// under a different rule.
pub struct GreedyAdd;

impl GreedyAdd {
    /// Builds a selection from scratch.
    ///
    /// # Examples
    ///
    /// ```
    /// use mkp_heur::greedy::GreedyAdd;
    /// use mkp_heur::problem::{Instance, Item};
    /// use mkp_heur::scoring::SumRatio;
    ///
    /// let instance = Instance::new(
    ///     2,
    ///     vec![7, 7],
    ///     vec![
    ///         Item::new(10, vec![4, 3]),
    ///         Item::new(8, vec![3, 3]),
    ///         Item::new(5, vec![10, 10]),
    ///     ],
    /// )
    /// .unwrap();
    /// let selection = GreedyAdd::run(&instance, &SumRatio);
    /// assert_eq!(instance.total_utility(&selection), 18);
    /// ```
    pub fn run(instance: &Instance, rule: &dyn ScoringRule) -> Vec<usize> {
        Self::extend(instance, rule, Vec::new())
    }

    /// Extends an existing selection by the same single-pass walk.
    ///
    /// The ranking context is built from `start`, so adaptive rules see the
    /// current consumption. Items already present are skipped. `start` must
    /// hold distinct, in-range indices and be admissible; an inadmissible
    /// start blocks every insertion and is returned unchanged.
    pub fn extend(instance: &Instance, rule: &dyn ScoringRule, start: Vec<usize>) -> Vec<usize> {
        let order = rank_descending(instance, rule, &start);

        let mut member = vec![false; instance.num_items()];
        for &id in &start {
            member[id] = true;
        }

        let mut selection = start;
        for id in order {
            if member[id] {
                continue;
            }
            selection.push(id);
            if instance.is_admissible(&selection) {
                member[id] = true;
            } else {
                selection.pop();
            }
        }
        selection
    }
}
