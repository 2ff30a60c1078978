//! Snapshot error types.

use thiserror::Error;

/// Why a snapshot could not be written or restored.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The encoder rejected the snapshot, e.g. JSON map keys that are not strings
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// The input is not a snapshot, or its automaton was refused by
    /// [`AutomatonBuilder`](crate::builder::AutomatonBuilder) (undeclared
    /// start, accepting or transition states, unknown symbols)
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// A determinized or minimized automaton that is nondeterministic, or a
    /// non-source automaton with unreachable states
    #[error("Snapshot failed its stage check: {0}")]
    ValidationFailed(String),
}
