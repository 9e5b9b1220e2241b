//! Heuristic solvers for the multi-dimensional knapsack problem.
//!
//! An instance consists of candidate items, each carrying a utility and a
//! vector of per-dimension resource costs, plus one budget per dimension.
//! The solvers select an admissible subset (no budget dimension exceeded)
//! of high total utility:
//!
//! - **Greedy-add**: Sorts items by a scoring policy and keeps each item
//!   that preserves admissibility.
//! - **Greedy-remove**: Starts from the full item set, strips low-score
//!   items until admissible, then backfills freed capacity with a second
//!   policy.
//! - **Hill climbing**: Refines a selection by single-swap moves, accepting
//!   strict improvements and a bounded number of equal-utility plateau
//!   moves. A randomized variant samples multi-swap neighbors from a
//!   seedable generator.
//!
//! Scoring policies are pluggable through the [`scoring::ScoringRule`]
//! trait; the adaptive policy re-ranks items against the consumption of the
//! current selection.
//!
//! All solvers are heuristic: they return admissible selections quickly but
//! never guarantee optimality. Selections are plain `Vec<usize>` index
//! vectors into the instance's item table, so items with identical payloads
//! stay distinct.
//!
//! # Architecture
//!
//! The crate is a pure library with no I/O of its own apart from the
//! plain-text benchmark loader in [`io`]. Callers construct an
//! [`problem::Instance`] (or load one from a benchmark file), run any
//! solver, and consume the returned selection. Solvers never mutate their
//! inputs.

pub mod error;
pub mod greedy;
pub mod hillclimb;
pub mod io;
pub mod problem;
pub mod scoring;
