//! Error types for the morph engine

use serde::{Deserialize, Serialize};

/// Which endpoint of a morph a snapshot was supplied for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotRole {
    From,
    To,
}

impl std::fmt::Display for SnapshotRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::From => f.write_str("from"),
            Self::To => f.write_str("to"),
        }
    }
}

/// Errors raised while building or retargeting a path animation
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MorphError {
    /// Snapshot does not have as many points as the subject polygon
    #[error("'{role}' path has {actual} points, subject has {expected}")]
    PointCountMismatch {
        role: SnapshotRole,
        expected: usize,
        actual: usize,
    },

    /// Working buffer could not be allocated
    #[error("could not allocate a working buffer of {points} points")]
    Allocation { points: usize },

    /// Curve name not recognised
    #[error("unknown easing curve: {name}")]
    UnknownCurve { name: String },

    /// Configuration could not be parsed
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl MorphError {
    /// Recoverable errors leave the animation usable in its previous state.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::PointCountMismatch { .. } | Self::UnknownCurve { .. }
        )
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::PointCountMismatch { .. } => "geometry",
            Self::Allocation { .. } => "memory",
            Self::UnknownCurve { .. } | Self::InvalidConfig { .. } => "config",
        }
    }
}

impl From<serde_json::Error> for MorphError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig {
            reason: err.to_string(),
        }
    }
}
