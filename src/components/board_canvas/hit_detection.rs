use crate::geometry::distance;
use crate::models::{GameSnapshot, Station};

const STATION_CLICK_THRESHOLD: f64 = 15.0;

/// First station whose center is within click range of a world position
#[must_use]
pub fn find_station_at_position(snapshot: &GameSnapshot, x: f64, y: f64) -> Option<&Station> {
    snapshot
        .stations()
        .iter()
        .find(|station| distance(station.position(), (x, y)) <= STATION_CLICK_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::load_default_board;
    use crate::models::StationId;

    #[test]
    fn test_find_station_near_center() {
        let (snapshot, _) = load_default_board().expect("embedded board is valid");

        let hit = find_station_at_position(&snapshot, 450.0, 85.0);
        assert_eq!(hit.map(|s| s.id), Some(StationId(1)));
    }

    #[test]
    fn test_miss_between_stations() {
        let (snapshot, _) = load_default_board().expect("embedded board is valid");

        assert!(find_station_at_position(&snapshot, 10.0, 10.0).is_none());
        assert!(find_station_at_position(&snapshot, 446.5 + 15.5, 80.5).is_none());
    }
}
