use crate::constants::{
    BACKGROUND_COLOR, CANVAS_HEIGHT, CANVAS_WIDTH, CONNECTION_CLEARANCE, MAP_ASSET_URL, MAX_ZOOM,
    STATION_RADIUS, WHEEL_ZOOM_SENSITIVITY,
};
use crate::error::SceneError;
use serde::{Deserialize, Serialize};

/// Display settings for a board scene
///
/// Every field falls back to its default, so a JSON override only needs to
/// name the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub background_color: String,
    pub map_asset_url: String,
    pub max_zoom: f64,
    pub wheel_zoom_sensitivity: f64,
    pub connection_clearance: f64,
    pub station_radius: f64,
    /// Draw station names next to their markers
    pub show_station_labels: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            background_color: BACKGROUND_COLOR.to_string(),
            map_asset_url: MAP_ASSET_URL.to_string(),
            max_zoom: MAX_ZOOM,
            wheel_zoom_sensitivity: WHEEL_ZOOM_SENSITIVITY,
            connection_clearance: CONNECTION_CLEARANCE,
            station_radius: STATION_RADIUS,
            show_station_labels: false,
        }
    }
}

impl SceneConfig {
    /// Parse a config, filling unspecified fields with defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a field has the wrong type
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        serde_json::from_str(json).map_err(SceneError::InvalidConfig)
    }

    #[must_use]
    pub fn canvas_size(&self) -> (f64, f64) {
        (self.canvas_width, self.canvas_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_board_constants() {
        let config = SceneConfig::default();
        assert_eq!(config.canvas_size(), (1250.0, 600.0));
        assert_eq!(config.max_zoom, 2.0);
        assert_eq!(config.background_color, "#87CEEB");
        assert!(!config.show_station_labels);
    }

    #[test]
    fn test_partial_override() {
        let config = SceneConfig::from_json(r#"{ "canvas_width": 800, "show_station_labels": true }"#)
            .expect("valid config");

        assert_eq!(config.canvas_width, 800.0);
        assert_eq!(config.canvas_height, 600.0);
        assert!(config.show_station_labels);
    }

    #[test]
    fn test_invalid_config() {
        let err = SceneConfig::from_json(r#"{ "max_zoom": "high" }"#).unwrap_err();
        assert!(matches!(err, SceneError::InvalidConfig(_)));
    }
}
