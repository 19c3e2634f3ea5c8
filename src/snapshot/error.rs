//! Snapshot error types.

use crate::core::StateId;
use thiserror::Error;

/// Errors that can occur while encoding, decoding or restoring snapshots
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Snapshot version is not supported by this version
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Snapshot does not describe a well-formed fragment
    #[error("Snapshot validation failed with {} violation(s)", .0.len())]
    Invalid(Vec<SnapshotViolation>),
}

/// A single structural problem found in a snapshot.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SnapshotViolation {
    #[error("Entry state {entry} is outside the {count} recorded states")]
    EntryOutOfRange { entry: StateId, count: usize },

    #[error("Exit state {exit} is outside the {count} recorded states")]
    ExitOutOfRange { exit: StateId, count: usize },

    #[error("State {state} has an edge to missing state {target}")]
    TargetOutOfRange { state: StateId, target: StateId },

    #[error("Exit state {exit} is not final")]
    ExitNotFinal { exit: StateId },

    #[error("State {state} is final but is not the exit")]
    StrayFinal { state: StateId },
}
