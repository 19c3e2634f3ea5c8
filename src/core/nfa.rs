//! Automaton fragments and the combinator algebra that builds them.

use super::matcher::Matcher;
use super::state::{State, StateId, Symbol};

/// An automaton fragment with one entry state and one exit state.
///
/// Within a fragment the exit is the only final state. Combinators consume
/// their fragment arguments and re-wire the consumed states into the
/// returned fragment, so a fragment that has been passed to a combinator
/// cannot be used again.
///
/// # Example
///
/// ```rust
/// use valgen::Nfa;
///
/// let pattern = Nfa::from_string("foo").union(Nfa::from_string("bar")).repeat();
///
/// assert!(pattern.matches(""));
/// assert!(pattern.matches("foobarfoo"));
/// assert!(!pattern.matches("fooba"));
/// ```
#[derive(Clone, Debug)]
pub struct Nfa {
    states: Vec<State>,
    entry: StateId,
    exit: StateId,
}

#[derive(Clone, Copy)]
struct Ends {
    entry: StateId,
    exit: StateId,
}

impl Nfa {
    /// Two-state fragment accepting exactly `symbol`.
    pub fn literal(symbol: Symbol) -> Self {
        let mut nfa = Self::pair();
        let exit = nfa.exit;
        nfa.state_mut(nfa.entry).add_symbol_edge(symbol, exit);
        nfa
    }

    /// Two-state fragment accepting only the empty sequence.
    pub fn empty() -> Self {
        let mut nfa = Self::pair();
        let exit = nfa.exit;
        nfa.state_mut(nfa.entry).add_epsilon_edge(exit);
        nfa
    }

    /// Fragment accepting this fragment's language followed by `second`'s.
    pub fn concat(self, second: Nfa) -> Self {
        let (states, first, second) = merge(self, second);
        let mut nfa = Nfa {
            states,
            entry: first.entry,
            exit: second.exit,
        };

        let junction = nfa.state_mut(first.exit);
        junction.set_final(false);
        junction.add_epsilon_edge(second.entry);
        nfa
    }

    /// Fragment accepting either this fragment's language or `other`'s.
    ///
    /// Fresh entry and exit states are added around both branches.
    pub fn union(self, other: Nfa) -> Self {
        let (mut states, left, right) = merge(self, other);
        let entry = StateId(states.len());
        let exit = StateId(states.len() + 1);
        states.push(State::new());
        states.push(State::new());

        let mut nfa = Nfa {
            states,
            entry,
            exit,
        };
        for branch in [left, right] {
            nfa.state_mut(entry).add_epsilon_edge(branch.entry);
            let old_exit = nfa.state_mut(branch.exit);
            old_exit.set_final(false);
            old_exit.add_epsilon_edge(exit);
        }
        nfa.state_mut(exit).set_final(true);
        nfa
    }

    /// Kleene star: zero or more repetitions of this fragment.
    ///
    /// No states are added. The exit loops back to the entry and the entry
    /// bypasses to the exit, which closes an epsilon cycle between them.
    pub fn repeat(mut self) -> Self {
        let (entry, exit) = (self.entry, self.exit);
        self.state_mut(exit).add_epsilon_edge(entry);
        self.state_mut(entry).add_epsilon_edge(exit);
        self
    }

    /// Fragment accepting exactly `sequence`; the empty sequence gives
    /// [`Nfa::empty`].
    ///
    /// Each symbol becomes its own `literal`, so the result has two states
    /// per symbol (plus two for the trailing `empty`). With the fixed
    /// transition table of [`State`](crate::core::State) that is roughly
    /// 12 KB per input symbol.
    pub fn from_string(sequence: impl AsRef<[Symbol]>) -> Self {
        sequence
            .as_ref()
            .iter()
            .rev()
            .fold(Self::empty(), |rest, &symbol| Self::literal(symbol).concat(rest))
    }

    /// Decide whether `input` is accepted.
    ///
    /// Never fails and always terminates, even through the epsilon cycles
    /// introduced by [`Nfa::repeat`].
    pub fn matches(&self, input: impl AsRef<[Symbol]>) -> bool {
        Matcher::new(self, input.as_ref()).run()
    }

    pub fn entry(&self) -> StateId {
        self.entry
    }

    pub fn exit(&self) -> StateId {
        self.exit
    }

    /// Look up a state of this fragment.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this fragment's arena.
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.0]
    }

    /// All states of the fragment, indexed by [`StateId::index`].
    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Ids of every state whose final flag is set.
    pub fn final_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, state)| state.is_final())
            .map(|(index, _)| StateId(index))
    }

    /// Reassemble a fragment from an arena whose edges have already been
    /// checked to stay inside it.
    pub(crate) fn from_parts(states: Vec<State>, entry: StateId, exit: StateId) -> Self {
        Self {
            states,
            entry,
            exit,
        }
    }

    fn pair() -> Self {
        let mut exit = State::new();
        exit.set_final(true);
        Self {
            states: vec![State::new(), exit],
            entry: StateId(0),
            exit: StateId(1),
        }
    }

    fn state_mut(&mut self, id: StateId) -> &mut State {
        &mut self.states[id.0]
    }
}

/// Move the smaller arena into the larger one and return the merged arena
/// together with both fragments' re-based entry and exit ids, in argument
/// order.
fn merge(a: Nfa, b: Nfa) -> (Vec<State>, Ends, Ends) {
    let a_ends = Ends {
        entry: a.entry,
        exit: a.exit,
    };
    let b_ends = Ends {
        entry: b.entry,
        exit: b.exit,
    };

    if a.states.len() >= b.states.len() {
        let offset = a.states.len();
        let states = append(a.states, b.states, offset);
        (states, a_ends, shift(b_ends, offset))
    } else {
        let offset = b.states.len();
        let states = append(b.states, a.states, offset);
        (states, shift(a_ends, offset), b_ends)
    }
}

fn append(mut base: Vec<State>, moved: Vec<State>, offset: usize) -> Vec<State> {
    base.reserve(moved.len());
    base.extend(moved.into_iter().map(|mut state| {
        state.rebase(offset);
        state
    }));
    base
}

fn shift(ends: Ends, offset: usize) -> Ends {
    Ends {
        entry: ends.entry.offset(offset),
        exit: ends.exit.offset(offset),
    }
}

/// Free-function form of [`Nfa::literal`].
pub fn literal(symbol: Symbol) -> Nfa {
    Nfa::literal(symbol)
}

/// Free-function form of [`Nfa::empty`].
pub fn empty() -> Nfa {
    Nfa::empty()
}

/// Free-function form of [`Nfa::concat`].
pub fn concat(first: Nfa, second: Nfa) -> Nfa {
    first.concat(second)
}

/// Free-function form of [`Nfa::union`].
pub fn union(a: Nfa, b: Nfa) -> Nfa {
    a.union(b)
}

/// Free-function form of [`Nfa::repeat`].
pub fn repeat(a: Nfa) -> Nfa {
    a.repeat()
}

/// Free-function form of [`Nfa::from_string`].
pub fn from_string(sequence: impl AsRef<[Symbol]>) -> Nfa {
    Nfa::from_string(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only_exit_is_final(nfa: &Nfa) -> bool {
        nfa.final_states().collect::<Vec<_>>() == vec![nfa.exit()]
    }

    #[test]
    fn literal_has_two_states_and_one_edge() {
        let nfa = Nfa::literal(b'a');

        assert_eq!(nfa.state_count(), 2);
        assert_eq!(nfa.state(nfa.entry()).targets(b'a'), &[nfa.exit()]);
        assert!(only_exit_is_final(&nfa));
    }

    #[test]
    fn empty_links_entry_to_exit_by_epsilon() {
        let nfa = Nfa::empty();

        assert_eq!(nfa.state_count(), 2);
        assert_eq!(nfa.state(nfa.entry()).epsilon_targets(), &[nfa.exit()]);
        assert_eq!(nfa.state(nfa.entry()).symbols().count(), 0);
        assert!(only_exit_is_final(&nfa));
    }

    #[test]
    fn concat_moves_final_flag_to_second_exit() {
        let nfa = Nfa::literal(b'a').concat(Nfa::literal(b'b'));

        assert_eq!(nfa.state_count(), 4);
        assert!(only_exit_is_final(&nfa));
        assert!(nfa.matches("ab"));
        assert!(!nfa.matches("a"));
        assert!(!nfa.matches("ba"));
    }

    #[test]
    fn concat_keeps_first_entry_when_second_is_larger() {
        let first = Nfa::literal(b'x');
        let second = Nfa::from_string("yz");
        let nfa = first.concat(second);

        assert!(nfa.state(nfa.entry()).targets(b'x').len() == 1);
        assert!(nfa.matches("xyz"));
        assert!(only_exit_is_final(&nfa));
    }

    #[test]
    fn union_adds_fresh_entry_and_exit() {
        let nfa = Nfa::literal(b'a').union(Nfa::literal(b'b'));

        assert_eq!(nfa.state_count(), 6);
        assert_eq!(nfa.state(nfa.entry()).epsilon_targets().len(), 2);
        assert!(only_exit_is_final(&nfa));
        assert!(nfa.matches("a"));
        assert!(nfa.matches("b"));
        assert!(!nfa.matches("ab"));
        assert!(!nfa.matches(""));
    }

    #[test]
    fn repeat_adds_no_states() {
        let nfa = Nfa::from_string("ab").repeat();

        assert_eq!(nfa.state_count(), Nfa::from_string("ab").state_count());
        assert!(only_exit_is_final(&nfa));
        assert!(nfa.state(nfa.exit()).epsilon_targets().contains(&nfa.entry()));
        assert!(nfa.state(nfa.entry()).epsilon_targets().contains(&nfa.exit()));
    }

    #[test]
    fn repeat_accepts_zero_or_more_copies() {
        let nfa = Nfa::from_string("ab").repeat();

        assert!(nfa.matches(""));
        assert!(nfa.matches("ab"));
        assert!(nfa.matches("ababab"));
        assert!(!nfa.matches("aba"));
        assert!(!nfa.matches("ba"));
    }

    #[test]
    fn repeat_of_empty_terminates() {
        let nfa = Nfa::empty().repeat().repeat();

        assert!(nfa.matches(""));
        assert!(!nfa.matches("a"));
    }

    #[test]
    fn from_empty_string_behaves_like_empty() {
        let nfa = Nfa::from_string("");

        assert!(nfa.matches(""));
        assert!(!nfa.matches("a"));
        assert_eq!(nfa.state_count(), 2);
    }

    #[test]
    fn from_string_accepts_only_the_sequence() {
        let nfa = Nfa::from_string("hello");

        assert!(nfa.matches("hello"));
        assert!(!nfa.matches("hell"));
        assert!(!nfa.matches("hello!"));
        assert!(!nfa.matches("Hello"));
        assert!(only_exit_is_final(&nfa));
    }

    #[test]
    fn from_string_handles_non_ascii_bytes() {
        let nfa = Nfa::from_string([0u8, 200, 255]);

        assert!(nfa.matches([0u8, 200, 255]));
        assert!(!nfa.matches([0u8, 200]));
    }

    #[test]
    fn free_functions_mirror_methods() {
        let nfa = concat(
            repeat(union(literal(b'a'), from_string("bc"))),
            empty(),
        );

        assert!(nfa.matches(""));
        assert!(nfa.matches("abca"));
        assert!(!nfa.matches("b"));
    }

    #[test]
    fn from_string_spends_two_states_per_symbol() {
        let text = "ab".repeat(500);
        let nfa = Nfa::from_string(&text);

        assert_eq!(nfa.state_count(), 2 * text.len() + 2);
        assert!(nfa.matches(&text));
        assert!(!nfa.matches(&text[1..]));
    }

    #[test]
    fn building_twice_gives_equivalent_fragments() {
        let build = || Nfa::from_string("ab").union(Nfa::literal(b'c')).repeat();
        let first = build();
        let second = build();

        for input in ["", "ab", "c", "abc", "cab", "ba", "abab", "x"] {
            assert_eq!(first.matches(input), second.matches(input), "input {input:?}");
        }
    }

    #[test]
    fn every_edge_stays_inside_the_arena() {
        let nfa = Nfa::from_string("foo")
            .union(Nfa::from_string("barbaz"))
            .repeat()
            .concat(Nfa::literal(b'!'));

        let count = nfa.state_count();
        for state in nfa.states() {
            for symbol in state.symbols() {
                assert!(state.targets(symbol).iter().all(|t| t.index() < count));
            }
            assert!(state.epsilon_targets().iter().all(|t| t.index() < count));
        }
    }
}
