/// Canvas width in pixels
pub const CANVAS_WIDTH: f64 = 1250.0;

/// Canvas height in pixels
pub const CANVAS_HEIGHT: f64 = 600.0;

/// Color shown wherever the map image does not cover the canvas
pub const BACKGROUND_COLOR: &str = "#87CEEB";

/// Default location of the board map image, relative to the page
pub const MAP_ASSET_URL: &str = "images/guinea-map.jpg";

/// Upper bound for the camera zoom
pub const MAX_ZOOM: f64 = 2.0;

/// Zoom change per unit of wheel `deltaY`
pub const WHEEL_ZOOM_SENSITIVITY: f64 = 0.001;

/// Distance connection lines stop short of a station center
pub const CONNECTION_CLEARANCE: f64 = 15.0;

/// Outer radius of a station star
pub const STATION_RADIUS: f64 = 15.0;
