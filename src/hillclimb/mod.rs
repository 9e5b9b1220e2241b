//! Hill-climbing local search with plateau tolerance.
//!
//! Starting from an admissible selection (typically a greedy result), the
//! search repeatedly replaces one selected item with an unselected one,
//! accepting strict utility improvements and a bounded number of
//! equal-utility plateau moves, until no such move remains. The exhaustive
//! variant enumerates every single-swap neighbor; the randomized variant
//! samples multi-swap neighbors from a seedable generator.

mod config;
mod runner;

pub use config::ClimbConfig;
pub use runner::{ClimbResult, HillClimb};
