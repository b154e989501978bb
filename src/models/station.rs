use super::StationId;
use serde::{Deserialize, Serialize};

/// A node of the board's transport network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub x: f64,
    pub y: f64,
    pub name: String,
    /// Neighbors as authored; not required to be symmetric
    #[serde(default)]
    pub connections: Vec<StationId>,
}

impl Station {
    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}
