//! Backtracking acceptance search over an automaton graph.
//!
//! The search runs on an explicit work stack of `(state, offset)` entries,
//! so its depth never grows the call stack. Each entry starts a fresh
//! epsilon stretch: its own `visited` set guards the walk over epsilon
//! edges against the cycles created by `repeat`, and is dropped once a
//! symbol is consumed, since consuming input always makes progress.
//!
//! Expanded entries are remembered per `(state, offset)`. With an empty
//! `visited` set the answer depends only on the state and the remaining
//! input, so an entry already expanded without success never needs to be
//! expanded again.

use super::nfa::Nfa;
use super::state::{StateId, Symbol};
use std::collections::HashSet;
use tracing::debug;

pub(crate) struct Matcher<'a> {
    nfa: &'a Nfa,
    input: &'a [Symbol],
    pending: Vec<(StateId, usize)>,
    settled: HashSet<(StateId, usize)>,
}

impl<'a> Matcher<'a> {
    pub(crate) fn new(nfa: &'a Nfa, input: &'a [Symbol]) -> Self {
        Self {
            nfa,
            input,
            pending: Vec::new(),
            settled: HashSet::new(),
        }
    }

    pub(crate) fn run(mut self) -> bool {
        self.pending.push((self.nfa.entry(), 0));
        let mut accepted = false;

        while let Some((state, offset)) = self.pending.pop() {
            if !self.settled.insert((state, offset)) {
                continue;
            }
            if self.expand(state, offset) {
                accepted = true;
                break;
            }
        }

        debug!(
            states = self.nfa.state_count(),
            input_len = self.input.len(),
            explored = self.settled.len(),
            accepted,
            "match_complete"
        );
        accepted
    }

    /// Walk the epsilon stretch starting at `entry`. Returns true if it
    /// reaches a final state with the input exhausted; otherwise queues
    /// every state reached by consuming the symbol at `offset`.
    fn expand(&mut self, entry: StateId, offset: usize) -> bool {
        let nfa = self.nfa;
        let symbol = self.input.get(offset).copied();
        let mut visited = HashSet::new();
        let mut stretch = vec![entry];

        while let Some(id) = stretch.pop() {
            if !visited.insert(id) {
                continue;
            }
            let state = nfa.state(id);

            match symbol {
                None if state.is_final() => return true,
                None => {}
                Some(symbol) => {
                    // reversed so the first target is expanded first
                    for &next in state.targets(symbol).iter().rev() {
                        if !self.settled.contains(&(next, offset + 1)) {
                            self.pending.push((next, offset + 1));
                        }
                    }
                }
            }

            stretch.extend(
                state
                    .epsilon_targets()
                    .iter()
                    .rev()
                    .filter(|next| !visited.contains(*next)),
            );
        }
        false
    }
}
