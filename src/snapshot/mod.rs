//! Snapshots of built automata.
//!
//! A [`Snapshot`] records a fragment's arena as plain data so a built
//! automaton can be stored and reloaded without replaying the combinator
//! calls that produced it. Restoring validates the recorded graph first and
//! reports every structural problem at once.

use crate::core::{Nfa, State, StateId, Symbol};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::{SnapshotError, SnapshotViolation};

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Recorded edges and flag of one state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateRecord {
    pub is_final: bool,

    /// Epsilon targets in insertion order
    pub epsilon: Vec<StateId>,

    /// Symbols with edges, ascending, each with its targets in insertion order
    pub transitions: Vec<(Symbol, Vec<StateId>)>,
}

/// Serializable copy of an automaton fragment.
///
/// # Example
///
/// ```rust
/// use valgen::{Nfa, Snapshot};
///
/// let pattern = Nfa::from_string("ab").repeat();
/// let json = Snapshot::capture(&pattern).to_json().unwrap();
///
/// let restored = Snapshot::from_json(&json).unwrap().restore().unwrap();
/// assert!(restored.matches("abab"));
/// assert!(!restored.matches("aba"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was taken
    pub created_at: DateTime<Utc>,

    pub entry: StateId,

    pub exit: StateId,

    /// One record per arena slot, indexed by state id
    pub states: Vec<StateRecord>,
}

impl Snapshot {
    /// Record the current graph of `nfa`.
    pub fn capture(nfa: &Nfa) -> Self {
        let states = nfa
            .states()
            .iter()
            .map(|state| StateRecord {
                is_final: state.is_final(),
                epsilon: state.epsilon_targets().to_vec(),
                transitions: state
                    .symbols()
                    .map(|symbol| (symbol, state.targets(symbol).to_vec()))
                    .collect(),
            })
            .collect();

        let snapshot = Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            entry: nfa.entry(),
            exit: nfa.exit(),
            states,
        };
        debug!(id = %snapshot.id, states = snapshot.states.len(), "snapshot_captured");
        snapshot
    }

    /// Check the recorded graph, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<SnapshotViolation>> {
        let count = self.states.len();
        let in_range = |id: StateId| id.index() < count;
        let mut checks: Vec<Validation<(), NonEmptyVec<SnapshotViolation>>> = Vec::new();

        checks.push(check(in_range(self.entry), || {
            SnapshotViolation::EntryOutOfRange {
                entry: self.entry,
                count,
            }
        }));

        if in_range(self.exit) {
            checks.push(check(self.states[self.exit.index()].is_final, || {
                SnapshotViolation::ExitNotFinal { exit: self.exit }
            }));
        } else {
            checks.push(check(false, || SnapshotViolation::ExitOutOfRange {
                exit: self.exit,
                count,
            }));
        }

        for (index, record) in self.states.iter().enumerate() {
            let state = StateId(index);
            if record.is_final && state != self.exit {
                checks.push(check(false, || SnapshotViolation::StrayFinal { state }));
            }

            let targets = record
                .epsilon
                .iter()
                .chain(record.transitions.iter().flat_map(|(_, targets)| targets));
            for &target in targets {
                checks.push(check(in_range(target), || {
                    SnapshotViolation::TargetOutOfRange { state, target }
                }));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Rebuild the recorded fragment.
    pub fn restore(&self) -> Result<Nfa, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        if let Validation::Failure(violations) = self.validate() {
            return Err(SnapshotError::Invalid(violations.iter().cloned().collect()));
        }

        let states = self
            .states
            .iter()
            .map(|record| {
                let mut state = State::new();
                state.set_final(record.is_final);
                for &target in &record.epsilon {
                    state.add_epsilon_edge(target);
                }
                for (symbol, targets) in &record.transitions {
                    for &target in targets {
                        state.add_symbol_edge(*symbol, target);
                    }
                }
                state
            })
            .collect();

        debug!(id = %self.id, states = self.states.len(), "snapshot_restored");
        Ok(Nfa::from_parts(states, self.entry, self.exit))
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(text).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }
}

fn check(
    ok: bool,
    violation: impl FnOnce() -> SnapshotViolation,
) -> Validation<(), NonEmptyVec<SnapshotViolation>> {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}
