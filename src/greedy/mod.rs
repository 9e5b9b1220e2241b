//! Greedy construction solvers.
//!
//! Both solvers are deterministic given an instance and scoring rules:
//!
//! - [`GreedyAdd`] builds a selection by a single pass over the items in
//!   descending score order, keeping each item only if admissibility is
//!   preserved.
//! - [`GreedyRemove`] starts from the full item set, strips the least
//!   efficient items until admissible, then backfills freed capacity with
//!   a second rule. Infeasibility yields the empty selection.

mod add;
mod remove;

pub use add::GreedyAdd;
pub use remove::GreedyRemove;
