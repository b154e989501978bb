use super::{LocomotiveId, PlayerId, WagonId};
use serde::{Deserialize, Serialize};

/// Which kind of token a player runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Locomotive,
    Wagon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PlayerKind,
    #[serde(default)]
    pub locomotives: Vec<LocomotiveId>,
    #[serde(default)]
    pub wagons: Vec<WagonId>,
}
