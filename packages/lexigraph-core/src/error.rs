//! Typed errors for graph mutation.
//!
//! Using thiserror for ergonomic error handling with zero overhead.

use thiserror::Error;

/// Errors raised by graph mutation.
///
/// The contract has exactly one failure condition: a negative weight passed
/// to the edge-setting operation. Every other operation is total.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Negative weight passed to `set`
    #[error("Weight cannot be negative: {weight} on edge {from} -> {to}")]
    NegativeWeight { from: String, to: String, weight: i32 },
}

impl GraphError {
    /// Create a negative-weight error
    pub fn negative_weight(
        from: impl Into<String>,
        to: impl Into<String>,
        weight: i32,
    ) -> Self {
        Self::NegativeWeight {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// Result type alias for graph operations
pub type GraphResult<T> = Result<T, GraphError>;
