//! Item scoring policies for greedy construction.
//!
//! A [`ScoringRule`] assigns each item an efficiency score (higher is
//! better); [`rank_descending`] turns a rule into a deterministic item
//! ordering. Three policies are provided:
//!
//! - [`SumRatio`]: utility / sum of costs — penalizes items that are
//!   expensive in aggregate.
//! - [`MaxRatio`]: utility / largest single-dimension cost — penalizes
//!   items whose worst dimension is costly.
//! - [`MostViolated`]: utility / cost in the dimension the current
//!   selection overshoots the most — adaptive, must be re-ranked whenever
//!   the selection changes.

mod rules;
mod types;

pub use rules::{rank_descending, MaxRatio, MostViolated, SumRatio};
pub use types::{ScoreContext, ScoringRule};
