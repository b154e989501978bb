use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH, MAX_ZOOM, WHEEL_ZOOM_SENSITIVITY};

/// Input for the viewport, in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportCommand {
    DragStart { x: f64, y: f64 },
    DragMove { x: f64, y: f64 },
    DragEnd,
    Wheel { delta_y: f64 },
}

/// Smallest zoom at which the map still covers the canvas on both axes
///
/// Axes with a zero map dimension are ignored; with no usable axis the
/// result is `1.0`.
#[must_use]
pub fn compute_min_zoom((canvas_width, canvas_height): (f64, f64), (map_width, map_height): (f64, f64)) -> f64 {
    let ratios = [(canvas_width, map_width), (canvas_height, map_height)];
    ratios
        .iter()
        .filter(|(_, map)| *map > 0.0)
        .map(|(canvas, map)| canvas / map)
        .reduce(f64::max)
        .unwrap_or(1.0)
}

/// Camera scroll and zoom driven by drag and wheel input
///
/// Zoom is centered on the view, so the world point at the middle of the
/// canvas stays put while zooming (see [`CameraTransform`]). Dragging is
/// inverted: moving the pointer right moves the view left. Scroll is never
/// clamped here; the owner of the controller clamps it with [`CameraBounds`]
/// and writes the result back through [`ViewportController::sync_scroll`].
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportController {
    view_size: (f64, f64),
    scroll: (f64, f64),
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    wheel_sensitivity: f64,
    is_dragging: bool,
    drag_anchor: (f64, f64),
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(1.0, MAX_ZOOM)
    }
}

impl ViewportController {
    /// Controller for the default canvas size with no scroll
    ///
    /// `min_zoom` is capped at `max_zoom` so the zoom range is never empty.
    /// Zoom starts at 1.0, raised to `min_zoom` if that is larger.
    #[must_use]
    pub fn new(min_zoom: f64, max_zoom: f64) -> Self {
        let min_zoom = min_zoom.min(max_zoom);
        Self {
            view_size: (CANVAS_WIDTH, CANVAS_HEIGHT),
            scroll: (0.0, 0.0),
            zoom: 1.0_f64.clamp(min_zoom, max_zoom),
            min_zoom,
            max_zoom,
            wheel_sensitivity: WHEEL_ZOOM_SENSITIVITY,
            is_dragging: false,
            drag_anchor: (0.0, 0.0),
        }
    }

    /// Controller whose minimum zoom keeps the map covering the canvas
    #[must_use]
    pub fn for_map(canvas_size: (f64, f64), map_size: (f64, f64), max_zoom: f64) -> Self {
        Self {
            view_size: canvas_size,
            ..Self::new(compute_min_zoom(canvas_size, map_size), max_zoom)
        }
    }

    #[must_use]
    pub fn with_wheel_sensitivity(mut self, sensitivity: f64) -> Self {
        self.wheel_sensitivity = sensitivity;
        self
    }

    #[must_use]
    pub fn scroll(&self) -> (f64, f64) {
        self.scroll
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// Apply one input command. Returns `true` if scroll or zoom changed.
    pub fn apply(&mut self, command: ViewportCommand) -> bool {
        match command {
            ViewportCommand::DragStart { x, y } => {
                self.on_drag_start(x, y);
                false
            }
            ViewportCommand::DragMove { x, y } => self.on_drag_move(x, y),
            ViewportCommand::DragEnd => {
                self.on_drag_end();
                false
            }
            ViewportCommand::Wheel { delta_y } => self.on_wheel(delta_y),
        }
    }

    pub fn on_wheel(&mut self, delta_y: f64) -> bool {
        let old_zoom = self.zoom;
        self.zoom = (self.zoom - delta_y * self.wheel_sensitivity).clamp(self.min_zoom, self.max_zoom);
        self.zoom != old_zoom
    }

    pub fn on_drag_start(&mut self, x: f64, y: f64) {
        self.is_dragging = true;
        self.drag_anchor = (x + self.scroll.0, y + self.scroll.1);
    }

    pub fn on_drag_move(&mut self, x: f64, y: f64) -> bool {
        if !self.is_dragging {
            return false;
        }

        let new_scroll = (self.drag_anchor.0 - x, self.drag_anchor.1 - y);
        let changed = new_scroll != self.scroll;
        self.scroll = new_scroll;
        changed
    }

    pub fn on_drag_end(&mut self) {
        self.is_dragging = false;
    }

    /// Replace the scroll with the value the host actually displayed
    ///
    /// A drag in progress keeps its anchor.
    pub fn sync_scroll(&mut self, scroll: (f64, f64)) {
        self.scroll = scroll;
    }

    /// Transform with the raw controller scroll
    #[must_use]
    pub fn transform(&self) -> CameraTransform {
        CameraTransform {
            scroll: self.scroll,
            zoom: self.zoom,
            view_size: self.view_size,
        }
    }
}

/// Scroll and zoom used to draw one frame
///
/// Zoom scales around the center of the view:
/// `screen = (world - scroll - view / 2) * zoom + view / 2`. At zoom 1.0 the
/// scroll is the world point at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    pub scroll: (f64, f64),
    pub zoom: f64,
    pub view_size: (f64, f64),
}

impl CameraTransform {
    #[must_use]
    pub fn screen_to_world(&self, (x, y): (f64, f64)) -> (f64, f64) {
        let (half_w, half_h) = self.half_view();
        (
            (x - half_w) / self.zoom + half_w + self.scroll.0,
            (y - half_h) / self.zoom + half_h + self.scroll.1,
        )
    }

    #[must_use]
    pub fn world_to_screen(&self, (x, y): (f64, f64)) -> (f64, f64) {
        let (half_w, half_h) = self.half_view();
        (
            (x - self.scroll.0 - half_w) * self.zoom + half_w,
            (y - self.scroll.1 - half_h) * self.zoom + half_h,
        )
    }

    /// World point drawn at the center of the view
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        let (half_w, half_h) = self.half_view();
        (self.scroll.0 + half_w, self.scroll.1 + half_h)
    }

    fn half_view(&self) -> (f64, f64) {
        (self.view_size.0 / 2.0, self.view_size.1 / 2.0)
    }
}

/// World rectangle the camera may show
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CameraBounds {
    #[must_use]
    pub fn from_size((width, height): (f64, f64)) -> Self {
        Self { x: 0.0, y: 0.0, width, height }
    }

    /// Clamp a scroll so the visible area stays inside the bounds
    ///
    /// The scroll is interpreted like [`CameraTransform`], zooming around the
    /// view center. When the bounds are smaller than the visible area on an
    /// axis, the view is centered on the bounds along that axis.
    #[must_use]
    pub fn clamp_scroll(&self, scroll: (f64, f64), zoom: f64, (view_width, view_height): (f64, f64)) -> (f64, f64) {
        (
            clamp_axis(scroll.0, self.x, self.width, view_width, zoom),
            clamp_axis(scroll.1, self.y, self.height, view_height, zoom),
        )
    }

    /// Controller transform with the scroll clamped to these bounds
    #[must_use]
    pub fn clamp(&self, transform: CameraTransform) -> CameraTransform {
        CameraTransform {
            scroll: self.clamp_scroll(transform.scroll, transform.zoom, transform.view_size),
            ..transform
        }
    }
}

fn clamp_axis(scroll: f64, start: f64, length: f64, view: f64, zoom: f64) -> f64 {
    let visible = view / zoom;
    // Scroll at which the visible edge meets `start`
    let lower = start + (visible - view) / 2.0;

    if length <= visible {
        lower + (length - visible) / 2.0
    } else {
        scroll.clamp(lower, lower + length - visible)
    }
}
