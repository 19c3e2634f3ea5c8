//! Build errors for the variadic combinators and JSON descriptions.

use crate::core::ALPHABET_SIZE;
use thiserror::Error;

/// Errors that can occur when composing automata from mixed operands.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid operand: expected an automaton, a symbol, or a symbol sequence, found {found}")]
    InvalidOperand { found: String },

    #[error("Symbol {value} is outside the alphabet (0..{})", ALPHABET_SIZE)]
    SymbolOutOfRange { value: u64 },

    #[error("Union needs at least one operand")]
    NoOperands,

    #[error("Malformed automaton description: {0}")]
    Json(#[from] serde_json::Error),
}
