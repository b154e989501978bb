use super::{LocomotiveId, PlayerId, StationId, WagonId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Tokens and players present at one station
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StationOccupancy {
    #[serde(default)]
    pub locomotives: Vec<LocomotiveId>,
    #[serde(default)]
    pub wagons: Vec<WagonId>,
    #[serde(default)]
    pub players: Vec<PlayerId>,
}

/// Per-station occupancy, kept in authoring order
pub type OccupancyTable = IndexMap<StationId, StationOccupancy>;
