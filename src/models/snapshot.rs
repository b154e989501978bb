use super::{OccupancyTable, Player, Station, StationId, StationOccupancy};
use crate::error::SceneError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The fixed game state a board is drawn from
///
/// Built once by a loader and shared read-only with the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    players: Vec<Player>,
    stations: Vec<Station>,
    occupancy: OccupancyTable,
    station_lookup: HashMap<StationId, usize>,
}

/// Serialized form of a snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotData {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub stations: Vec<Station>,
    #[serde(default)]
    pub occupancy: OccupancyTable,
}

impl GameSnapshot {
    #[must_use]
    pub fn new(players: Vec<Player>, stations: Vec<Station>, occupancy: OccupancyTable) -> Self {
        let mut station_lookup = HashMap::with_capacity(stations.len());
        for (i, station) in stations.iter().enumerate() {
            // First definition wins, like a find over the list
            station_lookup.entry(station.id).or_insert(i);
        }

        Self {
            players,
            stations,
            occupancy,
            station_lookup,
        }
    }

    /// Parse a snapshot from JSON
    ///
    /// # Errors
    ///
    /// Returns `InvalidSnapshot` if the JSON does not describe a snapshot
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let data: SnapshotData = serde_json::from_str(json).map_err(SceneError::InvalidSnapshot)?;
        Ok(data.into())
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    #[must_use]
    pub fn occupancy(&self) -> &OccupancyTable {
        &self.occupancy
    }

    #[must_use]
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.station_lookup.get(&id).and_then(|&i| self.stations.get(i))
    }

    /// Occupancy of a station, `None` if the table has no row for it
    #[must_use]
    pub fn occupancy_at(&self, id: StationId) -> Option<&StationOccupancy> {
        self.occupancy.get(&id)
    }
}

impl From<SnapshotData> for GameSnapshot {
    fn from(data: SnapshotData) -> Self {
        Self::new(data.players, data.stations, data.occupancy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlayerKind, WagonId};

    const SMALL_BOARD: &str = r#"{
        "players": [
            { "id": 1, "name": "Loco", "type": "locomotive", "locomotives": [1] }
        ],
        "stations": [
            { "id": 1, "x": 10.0, "y": 20.0, "name": "A", "connections": [2] },
            { "id": 2, "x": 30.0, "y": 40.0, "name": "B" }
        ],
        "occupancy": {
            "2": { "wagons": [5] },
            "1": { "locomotives": [1], "players": [1] }
        }
    }"#;

    #[test]
    fn test_from_json() {
        let snapshot = GameSnapshot::from_json(SMALL_BOARD).expect("valid snapshot");

        assert_eq!(snapshot.players().len(), 1);
        assert_eq!(snapshot.players()[0].kind, PlayerKind::Locomotive);
        assert_eq!(snapshot.stations().len(), 2);
        assert_eq!(snapshot.station(StationId(2)).map(|s| s.name.as_str()), Some("B"));
        assert!(snapshot.station(StationId(3)).is_none());
        assert!(snapshot.station(StationId(2)).is_some_and(|s| s.connections.is_empty()));
    }

    #[test]
    fn test_occupancy_keeps_authoring_order() {
        let snapshot = GameSnapshot::from_json(SMALL_BOARD).expect("valid snapshot");
        let order: Vec<StationId> = snapshot.occupancy().keys().copied().collect();

        assert_eq!(order, vec![StationId(2), StationId(1)]);
        assert_eq!(snapshot.occupancy_at(StationId(2)).map(|o| o.wagons.clone()), Some(vec![WagonId(5)]));
        assert!(snapshot.occupancy_at(StationId(9)).is_none());
    }

    #[test]
    fn test_invalid_snapshot() {
        let err = GameSnapshot::from_json(r#"{ "stations": [{ "id": "one" }] }"#).unwrap_err();
        assert!(matches!(err, SceneError::InvalidSnapshot(_)));
    }
}
