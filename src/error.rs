use crate::models::{LocomotiveId, StationId, WagonId};
use thiserror::Error;

/// Everything that can go wrong while loading or laying out a board.
///
/// Layout problems come in two severities. Gaps in hand-authored data
/// (dangling connections, unowned wagons, occupancy rows for unknown
/// stations) are skipped and only reported. An unowned locomotive is a
/// data-integrity error: the locomotive pass is abandoned.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("station {from} lists connection to unknown station {to}")]
    MissingStation { from: StationId, to: StationId },
    #[error("occupancy table references unknown station {station}")]
    UnknownStation { station: StationId },
    #[error("wagon {wagon} at station {station} has no owner")]
    UnassignedWagon { station: StationId, wagon: WagonId },
    #[error("locomotive {locomotive} at station {station} has no owner")]
    UnassignedLocomotive { station: StationId, locomotive: LocomotiveId },
    #[error("Failed to parse board snapshot: {0}")]
    InvalidSnapshot(#[source] serde_json::Error),
    #[error("Invalid color value: {0}")]
    InvalidColor(String),
    #[error("Failed to parse scene config: {0}")]
    InvalidConfig(#[source] serde_json::Error),
}

impl SceneError {
    /// Whether this error must be surfaced instead of silently skipped
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::MissingStation { .. } | Self::UnknownStation { .. } | Self::UnassignedWagon { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerated_gaps_are_not_fatal() {
        let missing = SceneError::MissingStation { from: StationId(1), to: StationId(99) };
        let unknown = SceneError::UnknownStation { station: StationId(42) };
        let wagon = SceneError::UnassignedWagon { station: StationId(1), wagon: WagonId(7) };

        assert!(!missing.is_fatal());
        assert!(!unknown.is_fatal());
        assert!(!wagon.is_fatal());
    }

    #[test]
    fn test_unassigned_locomotive_is_fatal() {
        let err = SceneError::UnassignedLocomotive { station: StationId(3), locomotive: LocomotiveId(9) };
        assert!(err.is_fatal());
        assert_eq!(err.to_string(), "locomotive 9 at station 3 has no owner");
    }
}
