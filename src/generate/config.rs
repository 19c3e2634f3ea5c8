//! Configuration for random string generation.

use crate::generate::error::GenerateError;
use serde::{Deserialize, Serialize};

/// Step budget applied when no other budget is configured.
pub const DEFAULT_MAX_STEPS: usize = 100_000;

/// Parameters of the random walk.
///
/// A step is one round at the current state: the stop coin (at final
/// states) followed by one coin per outgoing branch. Failed rounds count
/// as steps too, so the budget bounds walks that keep losing coin flips.
///
/// # Example
///
/// ```rust
/// use valgen::GenerateConfig;
///
/// let config = GenerateConfig::default().with_seed(7).with_max_steps(500);
/// assert!(config.validate().is_ok());
///
/// let json = serde_json::to_string(&config).unwrap();
/// let restored: GenerateConfig = serde_json::from_str(&json).unwrap();
/// assert_eq!(config, restored);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Maximum number of rounds before giving up. `None` walks until the
    /// automaton lets it stop, which may never happen.
    pub max_steps: Option<usize>,

    /// Probability of stopping at a final state that still has edges.
    pub stop_probability: f64,

    /// Probability that any single branch is taken during a round.
    pub branch_probability: f64,

    /// Seed for a reproducible walk; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            max_steps: Some(DEFAULT_MAX_STEPS),
            stop_probability: 0.5,
            branch_probability: 0.5,
            seed: None,
        }
    }
}

impl GenerateConfig {
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Remove the step budget.
    pub fn unbounded(mut self) -> Self {
        self.max_steps = None;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_stop_probability(mut self, probability: f64) -> Self {
        self.stop_probability = probability;
        self
    }

    pub fn with_branch_probability(mut self, probability: f64) -> Self {
        self.branch_probability = probability;
        self
    }

    /// Reject probabilities outside `[0, 1]`, and a branch probability of
    /// zero, which could never leave a state.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if !(0.0..=1.0).contains(&self.stop_probability) {
            return Err(GenerateError::InvalidConfig(format!(
                "stop_probability must be within [0, 1], got {}",
                self.stop_probability
            )));
        }
        if !(self.branch_probability > 0.0 && self.branch_probability <= 1.0) {
            return Err(GenerateError::InvalidConfig(format!(
                "branch_probability must be within (0, 1], got {}",
                self.branch_probability
            )));
        }
        Ok(())
    }
}
