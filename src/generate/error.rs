//! Generation error types.

use crate::core::StateId;
use thiserror::Error;

/// Errors that can occur while generating an accepted string.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GenerateError {
    /// The walk used its whole step budget without stopping.
    #[error("Generation budget of {max_steps} steps exceeded after producing {produced} symbols")]
    BudgetExceeded { max_steps: usize, produced: usize },

    /// The walk reached a non-final state with no outgoing edges.
    #[error("Generation reached dead-end state {state}")]
    DeadEnd { state: StateId },

    #[error("Invalid generation config: {0}")]
    InvalidConfig(String),
}
