use crate::components::board_canvas::network_renderer::{self, ConnectionSegment, StationMarker};
use crate::components::board_canvas::occupancy_renderer::{self, BarChart, LocomotiveToken};
use crate::components::board_canvas::hit_detection;
use crate::components::canvas_viewport::{CameraBounds, CameraTransform, ViewportCommand, ViewportController};
use crate::config::SceneConfig;
use crate::error::SceneError;
use crate::models::{ColorMap, GameSnapshot, OwnershipIndex, Station, StationNetwork};
use std::rc::Rc;

/// Everything drawn on top of the map, computed once per scene
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneLayout {
    pub connections: Vec<ConnectionSegment>,
    pub stations: Vec<StationMarker>,
    pub bar_charts: Vec<BarChart>,
    pub locomotives: Vec<LocomotiveToken>,
}

/// A board ready to draw: snapshot, derived layout and camera
///
/// The snapshot and layout never change after construction. Only the
/// viewport reacts to input, and the scene keeps its scroll inside the map
/// bounds after every command.
#[derive(Debug)]
pub struct Scene {
    snapshot: Rc<GameSnapshot>,
    config: SceneConfig,
    network: StationNetwork,
    viewport: ViewportController,
    bounds: CameraBounds,
    layout: SceneLayout,
    diagnostics: Vec<SceneError>,
    locomotive_error: Option<SceneError>,
}

impl Scene {
    /// Set up a scene for a map image of `map_size` native pixels
    ///
    /// Data gaps found while laying out the board are kept as diagnostics. An
    /// unowned locomotive leaves the scene without locomotive tokens and is
    /// kept as [`Scene::locomotive_error`].
    #[must_use]
    pub fn new(snapshot: Rc<GameSnapshot>, colors: ColorMap, config: SceneConfig, map_size: (f64, f64)) -> Self {
        let ownership = OwnershipIndex::build(&snapshot);
        let (network, mut diagnostics) = StationNetwork::build(&snapshot);

        let mut viewport = ViewportController::for_map(config.canvas_size(), map_size, config.max_zoom)
            .with_wheel_sensitivity(config.wheel_zoom_sensitivity);
        let bounds = CameraBounds::from_size(map_size);
        viewport.sync_scroll(bounds.clamp(viewport.transform()).scroll);

        let connections = network_renderer::layout_connections(&snapshot, &network, config.connection_clearance);
        let stations = network_renderer::layout_stations(&snapshot, config.station_radius);
        let bar_charts = occupancy_renderer::layout_bar_charts(&snapshot, &ownership, &colors, &mut diagnostics);
        let (locomotives, locomotive_error) =
            match occupancy_renderer::layout_locomotives(&snapshot, &ownership, &colors, &mut diagnostics) {
                Ok(tokens) => (tokens, None),
                Err(err) => (Vec::new(), Some(err)),
            };

        Self {
            snapshot,
            config,
            network,
            viewport,
            bounds,
            layout: SceneLayout {
                connections,
                stations,
                bar_charts,
                locomotives,
            },
            diagnostics,
            locomotive_error,
        }
    }

    /// Feed one input command to the viewport
    ///
    /// The clamped scroll is written back to the controller, so a drag always
    /// starts from what is on screen. Returns `true` if the visible camera
    /// moved.
    pub fn dispatch(&mut self, command: ViewportCommand) -> bool {
        let before = self.camera();
        self.viewport.apply(command);

        let after = self.camera();
        self.viewport.sync_scroll(after.scroll);
        after != before
    }

    /// Camera for drawing, with scroll kept inside the map bounds
    #[must_use]
    pub fn camera(&self) -> CameraTransform {
        self.bounds.clamp(self.viewport.transform())
    }

    /// Station under a canvas position, if any
    #[must_use]
    pub fn station_at_screen(&self, point: (f64, f64)) -> Option<&Station> {
        let (x, y) = self.camera().screen_to_world(point);
        hit_detection::find_station_at_position(&self.snapshot, x, y)
    }

    /// Write diagnostics to the log
    pub fn report(&self) {
        for issue in &self.diagnostics {
            leptos::logging::warn!("{issue}");
        }
        if let Some(err) = &self.locomotive_error {
            leptos::logging::error!("Locomotives not drawn: {err}");
        }
        crate::log!(
            "Scene ready: {} stations, {} connections, min zoom {:.3}",
            self.snapshot.stations().len(),
            self.network.connection_count(),
            self.viewport.min_zoom()
        );
    }

    #[must_use]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    #[must_use]
    pub fn layout(&self) -> &SceneLayout {
        &self.layout
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[SceneError] {
        &self.diagnostics
    }

    #[must_use]
    pub fn locomotive_error(&self) -> Option<&SceneError> {
        self.locomotive_error.as_ref()
    }
}
