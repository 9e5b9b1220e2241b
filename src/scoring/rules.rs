//! The three scoring policies and the deterministic ranking helper.

use super::types::{ScoreContext, ScoringRule};
use crate::problem::{Instance, Item};

/// Utility over a cost denominator, with zero mapped to `+∞` so that free
/// items rank first and the order stays NaN-free.
fn ratio(utility: u32, denominator: u64) -> f64 {
    if denominator == 0 {
        f64::INFINITY
    } else {
        f64::from(utility) / denominator as f64
    }
}

/// Utility divided by the sum of all costs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SumRatio;

impl ScoringRule for SumRatio {
    fn name(&self) -> &str {
        "sum-ratio"
    }

    fn score(&self, item: &Item, _ctx: &ScoreContext<'_>) -> f64 {
        let total: u64 = item.costs().iter().map(|&c| u64::from(c)).sum();
        ratio(item.utility(), total)
    }
}

/// Utility divided by the largest single-dimension cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxRatio;

impl ScoringRule for MaxRatio {
    fn name(&self) -> &str {
        "max-ratio"
    }

    fn score(&self, item: &Item, _ctx: &ScoreContext<'_>) -> f64 {
        let worst = item.costs().iter().copied().max().unwrap_or(0);
        ratio(item.utility(), u64::from(worst))
    }
}

/// Utility divided by the cost in the most violated dimension.
///
/// The dimension is taken from the context's current consumption, so
/// rankings under this rule go stale as soon as the selection changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MostViolated;

impl ScoringRule for MostViolated {
    fn name(&self) -> &str {
        "most-violated"
    }

    fn score(&self, item: &Item, ctx: &ScoreContext<'_>) -> f64 {
        let d = ctx.most_violated_dimension();
        ratio(item.utility(), u64::from(item.costs()[d]))
    }
}

/// Ranks all item indices by score, descending.
///
/// The selection parameter feeds the context for adaptive rules; static
/// rules ignore it. Ties are broken by lowest original index, so the
/// ordering is deterministic for every rule.
pub fn rank_descending(
    instance: &Instance,
    rule: &dyn ScoringRule,
    selection: &[usize],
) -> Vec<usize> {
    let ctx = ScoreContext::new(instance, selection);
    let scores: Vec<f64> = instance
        .items()
        .iter()
        .map(|item| rule.score(item, &ctx))
        .collect();

    let mut order: Vec<usize> = (0..instance.num_items()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));
    order
}
