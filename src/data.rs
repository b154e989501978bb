use crate::error::SceneError;
use crate::models::{ColorMap, GameSnapshot, SnapshotData};
use serde::Deserialize;

/// Snapshot and player colors as stored in a board file
#[derive(Debug, Deserialize)]
struct BoardFile {
    snapshot: SnapshotData,
    #[serde(default)]
    colors: ColorMap,
}

/// Parse the built-in board
///
/// # Errors
///
/// Returns an error if the embedded board file is malformed
pub fn load_default_board() -> Result<(GameSnapshot, ColorMap), SceneError> {
    let json = include_str!("../assets/board.json");
    parse_board(json)
}

/// Parse a board file into a snapshot and its color map
///
/// # Errors
///
/// Returns `InvalidSnapshot` if the JSON does not describe a board
pub fn parse_board(json: &str) -> Result<(GameSnapshot, ColorMap), SceneError> {
    let file: BoardFile = serde_json::from_str(json).map_err(SceneError::InvalidSnapshot)?;
    Ok((file.snapshot.into(), file.colors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Color, OwnershipIndex, PlayerId, StationId, WagonId};

    #[test]
    fn test_default_board_loads() {
        let (snapshot, colors) = load_default_board().expect("embedded board is valid");

        assert_eq!(snapshot.players().len(), 4);
        assert_eq!(snapshot.stations().len(), 10);
        assert_eq!(snapshot.occupancy().len(), 10);
        assert_eq!(colors.get(PlayerId(2)), Some(Color::from_rgb(0x1e_90_ff)));
    }

    #[test]
    fn test_default_board_first_station() {
        let (snapshot, _) = load_default_board().expect("embedded board is valid");
        let station = snapshot.station(StationId(1)).expect("station 1");

        assert_eq!(station.position(), (446.5, 80.5));
        assert_eq!(station.name, "14");
        assert_eq!(station.connections, vec![StationId(2)]);
    }

    #[test]
    fn test_default_board_wagon_owners() {
        let (snapshot, _) = load_default_board().expect("embedded board is valid");
        let index = OwnershipIndex::build(&snapshot);

        assert_eq!(index.wagon_owner(WagonId(3)), Some(PlayerId(3)));
        assert_eq!(index.wagon_owner(WagonId(20)), Some(PlayerId(4)));
    }

    #[test]
    fn test_board_without_colors() {
        let (snapshot, colors) = parse_board(r#"{ "snapshot": {} }"#).expect("minimal board");

        assert!(snapshot.stations().is_empty());
        assert_eq!(colors, ColorMap::default());
    }

    #[test]
    fn test_board_with_bad_color() {
        let err = parse_board(r#"{ "snapshot": {}, "colors": { "1": "red" } }"#).unwrap_err();
        assert!(matches!(err, SceneError::InvalidSnapshot(_)));
    }
}
