//! Error types for matrix construction and engine configuration.
//!
//! All variants are fail-fast: they surface before any evolution starts.
//! Once a run begins there are no recoverable failures, because the core
//! performs no I/O and every operator preserves the permutation invariant.

use thiserror::Error;

/// Validation failure raised before the engine starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvolveError {
    /// The cost matrix has no rows.
    #[error("distance matrix is empty")]
    EmptyMatrix,

    /// A row's length does not match the matrix dimension.
    #[error("distance matrix is not square: row {row} has {actual} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A cost entry is negative.
    #[error("negative cost {cost} at ({from}, {to})")]
    NegativeCost { from: usize, to: usize, cost: f64 },

    /// A route's length does not match the matrix dimension.
    #[error("route has {actual} stops, matrix expects {expected}")]
    RouteLengthMismatch { expected: usize, actual: usize },

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
