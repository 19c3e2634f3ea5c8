//! Core automaton types and logic.
//!
//! This module contains the automaton graph and its two queries:
//! - States with fixed-size transition tables via `State`
//! - Fragments and the combinator algebra via `Nfa`
//! - Backtracking acceptance via `Nfa::matches`
//!
//! Construction only ever links existing states with new edges or wraps
//! them in fresh entry/exit states; queries never mutate the graph.

mod matcher;
mod nfa;
mod state;

pub use nfa::{concat, empty, from_string, literal, repeat, union, Nfa};
pub use state::{State, StateId, Symbol, ALPHABET_SIZE};
