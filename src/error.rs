//! Error types for instance construction, solver input validation, and
//! benchmark loading.

use thiserror::Error;

/// Errors surfaced by instance construction and solver entry validation.
///
/// Infeasibility is not represented here: a greedy-remove pass that cannot
/// reach an admissible subset returns the empty selection instead.
#[derive(Debug, Error)]
pub enum SolverError {
    /// Instance dimension must be at least 1.
    #[error("dimension must be at least 1")]
    InvalidDimension,

    /// Budget vector length does not match the instance dimension.
    #[error("budget vector has {found} entries, expected {expected}")]
    BudgetLength { expected: usize, found: usize },

    /// An item's cost vector length does not match the instance dimension.
    #[error("item {index} has {found} cost entries, expected {expected}")]
    CostLength {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// A solver configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A selection references an item index outside the instance.
    #[error("item index {0} is out of range")]
    UnknownItem(usize),

    /// A selection contains the same item index twice.
    #[error("item {0} appears more than once in the selection")]
    DuplicateItem(usize),

    /// A starting selection already violates a budget dimension.
    #[error("starting selection exceeds the budget in dimension {0}")]
    InfeasibleStart(usize),
}

/// Errors surfaced by the benchmark-file loader.
///
/// A missing or unreadable file and malformed content are distinct
/// conditions; neither ever yields a partial instance.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The benchmark file could not be opened or read.
    #[error("cannot read benchmark file: {0}")]
    Io(#[from] std::io::Error),

    /// The benchmark file content does not match the expected format.
    #[error("malformed benchmark file at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}
