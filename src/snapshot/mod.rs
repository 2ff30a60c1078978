//! Versioned snapshots of automata.
//!
//! A snapshot stores an automaton together with the pipeline stage that
//! produced it, so intermediate results can be saved and restored later.
//! Restoring re-checks both the automaton's own invariants (through the
//! builder) and the guarantees of its stage.

use crate::core::{Automaton, State, Symbol};
use crate::ops::reachability::reachable_states;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Pipeline stage an automaton came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// Caller-provided description, no guarantees beyond well-formedness
    Source,
    /// Output of subset construction
    Determinized,
    /// Output of unreachable-state removal
    Trimmed,
    /// Output of minimization
    Minimized,
}

impl Stage {
    fn requires_determinism(self) -> bool {
        matches!(self, Self::Determinized | Self::Minimized)
    }

    fn requires_reachability(self) -> bool {
        !matches!(self, Self::Source)
    }
}

/// Serializable snapshot of an automaton.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(
    serialize = "S: Serialize, C: Serialize",
    deserialize = "S: Deserialize<'de>, C: Deserialize<'de>"
))]
pub struct Snapshot<S: State, C: Symbol> {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When snapshot was created
    pub created_at: DateTime<Utc>,

    /// Stage that produced the automaton
    pub stage: Stage,

    pub automaton: Automaton<S, C>,
}

impl<S: State, C: Symbol> Snapshot<S, C> {
    /// Capture an automaton produced by `stage`.
    pub fn new(stage: Stage, automaton: Automaton<S, C>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            stage,
            automaton,
        }
    }

    /// Check the version and the guarantees of the recorded stage.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        if self.stage.requires_determinism() && !self.automaton.is_deterministic() {
            return Err(SnapshotError::ValidationFailed(format!(
                "{:?} automaton is not deterministic",
                self.stage
            )));
        }

        if self.stage.requires_reachability() {
            let reachable = reachable_states(&self.automaton).len();
            let total = self.automaton.state_count();
            if reachable != total {
                return Err(SnapshotError::ValidationFailed(format!(
                    "{:?} automaton has {} unreachable state(s)",
                    self.stage,
                    total - reachable
                )));
            }
        }

        Ok(())
    }

    pub fn into_automaton(self) -> Automaton<S, C> {
        self.automaton
    }
}

impl<S, C> Snapshot<S, C>
where
    S: State + Serialize,
    C: Symbol + Serialize,
{
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }
}

impl<S, C> Snapshot<S, C>
where
    S: State + DeserializeOwned,
    C: Symbol + DeserializeOwned,
{
    /// Restore and validate a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Restore and validate a snapshot from its binary encoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}
