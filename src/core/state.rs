//! Automaton states and their transition tables.
//!
//! A [`State`] is a node in the automaton graph. It holds one ordered list
//! of targets per alphabet symbol, one ordered list of epsilon targets and
//! an accepting flag. States never refer to each other directly; edges
//! point at [`StateId`]s inside the arena owned by an
//! [`Nfa`](crate::core::Nfa).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single input symbol. The alphabet is the byte range.
pub type Symbol = u8;

/// Number of distinct symbols; every transition table has this many slots.
pub const ALPHABET_SIZE: usize = Symbol::MAX as usize + 1;

/// Stable handle to a state inside an automaton arena.
///
/// Two states are the same state only if their ids are equal, never
/// because their transition tables happen to match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(pub(crate) usize);

impl StateId {
    /// Position of the state in its arena.
    pub fn index(self) -> usize {
        self.0
    }

    pub(crate) fn offset(self, by: usize) -> Self {
        StateId(self.0 + by)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// A node of the automaton graph.
///
/// The transition table always has [`ALPHABET_SIZE`] slots, so a state
/// costs 256 `Vec` headers (about 6 KB on 64-bit targets) before any edge
/// is added.
///
/// # Example
///
/// ```rust
/// use valgen::core::State;
/// use valgen::Nfa;
///
/// let nfa = Nfa::literal(b'a');
/// let entry: &State = nfa.state(nfa.entry());
///
/// assert_eq!(entry.targets(b'a'), &[nfa.exit()]);
/// assert!(entry.targets(b'b').is_empty());
/// assert!(!entry.is_final());
/// assert!(nfa.state(nfa.exit()).is_final());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct State {
    transitions: Vec<Vec<StateId>>,
    epsilon: Vec<StateId>,
    is_final: bool,
}

impl State {
    /// Create a non-final state with no outgoing edges.
    pub fn new() -> Self {
        Self {
            transitions: vec![Vec::new(); ALPHABET_SIZE],
            epsilon: Vec::new(),
            is_final: false,
        }
    }

    /// Append `target` to the targets reached by consuming `symbol`.
    pub fn add_symbol_edge(&mut self, symbol: Symbol, target: StateId) {
        self.transitions[usize::from(symbol)].push(target);
    }

    /// Append `target` to the targets reached without consuming input.
    pub fn add_epsilon_edge(&mut self, target: StateId) {
        self.epsilon.push(target);
    }

    /// Targets reached by consuming `symbol`, in insertion order.
    pub fn targets(&self, symbol: Symbol) -> &[StateId] {
        &self.transitions[usize::from(symbol)]
    }

    /// Targets reached without consuming input, in insertion order.
    pub fn epsilon_targets(&self) -> &[StateId] {
        &self.epsilon
    }

    /// Symbols with at least one outgoing edge, in ascending order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.transitions
            .iter()
            .enumerate()
            .filter(|(_, targets)| !targets.is_empty())
            .map(|(symbol, _)| symbol as Symbol)
    }

    /// True if any symbol or epsilon edge leaves this state.
    pub fn has_edges(&self) -> bool {
        !self.epsilon.is_empty() || self.transitions.iter().any(|t| !t.is_empty())
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub(crate) fn set_final(&mut self, is_final: bool) {
        self.is_final = is_final;
    }

    /// Shift every edge target by `by`, used when this state moves into a
    /// larger arena.
    pub(crate) fn rebase(&mut self, by: usize) {
        for targets in &mut self.transitions {
            for target in targets.iter_mut() {
                *target = target.offset(by);
            }
        }
        for target in &mut self.epsilon {
            *target = target.offset(by);
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
