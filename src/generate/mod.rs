//! Random generation of accepted strings.
//!
//! Generation is a random walk from the entry state. At each state the
//! walk may stop if the state is final, otherwise it flips one coin per
//! outgoing branch (symbols in ascending order, then epsilon) and follows
//! the first branch whose coin comes up. When every coin fails the round is
//! repeated. Whatever the walk emits was read along a path ending in a
//! final state, so every generated string is accepted by `Nfa::matches`.
//!
//! # Liveness
//!
//! The walk only terminates by stopping at a final state. Unlucky coins on
//! epsilon cycles can keep it going for a long time, so every walk runs
//! under the step budget of its [`GenerateConfig`] unless the budget is
//! removed with [`GenerateConfig::unbounded`].

mod config;
mod error;

pub use config::{GenerateConfig, DEFAULT_MAX_STEPS};
pub use error::GenerateError;

use crate::core::{Nfa, State, StateId, Symbol};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

enum Move {
    Consume(Symbol, StateId),
    Skip(StateId),
}

/// Random walker producing strings accepted by an automaton.
///
/// # Example
///
/// ```rust
/// use valgen::{GenerateConfig, Generator, Nfa};
///
/// let pattern = Nfa::from_string("ab").union(Nfa::from_string("c")).repeat();
/// let mut generator = Generator::new(GenerateConfig::default().with_seed(42)).unwrap();
///
/// for _ in 0..20 {
///     let sample = generator.generate(&pattern).unwrap();
///     assert!(pattern.matches(&sample));
/// }
/// ```
pub struct Generator<R = StdRng> {
    config: GenerateConfig,
    rng: R,
}

impl Generator<StdRng> {
    /// Create a generator seeded from `config.seed`, or from the OS when no
    /// seed is set.
    pub fn new(config: GenerateConfig) -> Result<Self, GenerateError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Generator<R> {
    /// Create a generator drawing from `rng`; `config.seed` is ignored.
    pub fn with_rng(config: GenerateConfig, rng: R) -> Result<Self, GenerateError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// The validated configuration this generator walks with.
    ///
    /// # Example
    ///
    /// ```rust
    /// use valgen::{GenerateConfig, Generator};
    ///
    /// let generator = Generator::new(GenerateConfig::default().with_seed(42)).unwrap();
    ///
    /// assert_eq!(generator.config().seed, Some(42));
    /// assert_eq!(generator.config().max_steps, Some(100_000));
    /// ```
    pub fn config(&self) -> &GenerateConfig {
        &self.config
    }

    /// Walk `nfa` from its entry state and return the symbols read on the
    /// way to a final state.
    pub fn generate(&mut self, nfa: &Nfa) -> Result<Vec<Symbol>, GenerateError> {
        let mut output = Vec::new();
        let mut current = nfa.entry();
        let mut steps = 0usize;

        loop {
            if let Some(max_steps) = self.config.max_steps {
                if steps >= max_steps {
                    debug!(max_steps, produced = output.len(), "generation_budget_exceeded");
                    return Err(GenerateError::BudgetExceeded {
                        max_steps,
                        produced: output.len(),
                    });
                }
            }
            steps += 1;

            let state = nfa.state(current);
            if state.is_final()
                && (!state.has_edges() || self.rng.random_bool(self.config.stop_probability))
            {
                debug!(steps, produced = output.len(), "generation_complete");
                return Ok(output);
            }
            if !state.has_edges() {
                return Err(GenerateError::DeadEnd { state: current });
            }

            match self.choose_move(state) {
                Some(Move::Consume(symbol, next)) => {
                    trace!(from = %current, to = %next, symbol, "generation_consume");
                    output.push(symbol);
                    current = next;
                }
                Some(Move::Skip(next)) => {
                    trace!(from = %current, to = %next, "generation_epsilon");
                    current = next;
                }
                None => {}
            }
        }
    }

    /// One round of coin flips over the branches of `state`.
    fn choose_move(&mut self, state: &State) -> Option<Move> {
        for symbol in state.symbols() {
            if self.rng.random_bool(self.config.branch_probability) {
                let next = self.pick(state.targets(symbol));
                return Some(Move::Consume(symbol, next));
            }
        }

        let epsilon = state.epsilon_targets();
        if !epsilon.is_empty() && self.rng.random_bool(self.config.branch_probability) {
            return Some(Move::Skip(self.pick(epsilon)));
        }
        None
    }

    fn pick(&mut self, targets: &[StateId]) -> StateId {
        targets[self.rng.random_range(0..targets.len())]
    }
}

impl Nfa {
    /// Generate one accepted string with the default configuration.
    ///
    /// The default step budget turns a walk that would not terminate into
    /// [`GenerateError::BudgetExceeded`].
    pub fn generate(&self) -> Result<Vec<Symbol>, GenerateError> {
        self.generate_with(GenerateConfig::default())
    }

    /// Generate one accepted string with `config`.
    pub fn generate_with(&self, config: GenerateConfig) -> Result<Vec<Symbol>, GenerateError> {
        Generator::new(config)?.generate(self)
    }
}
