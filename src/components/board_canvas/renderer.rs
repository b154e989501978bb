use super::{map_renderer, network_renderer, occupancy_renderer};
use crate::components::canvas_viewport::CameraTransform;
use crate::config::SceneConfig;
use crate::scene::{Scene, SceneLayout};
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

const STATUS_MESSAGE_COLOR: &str = "#333";
const STATUS_MESSAGE_FONT: &str = "16px sans-serif";
pub const LOADING_MESSAGE: &str = "Loading map...";
pub const MAP_ERROR_MESSAGE: &str = "Map image could not be loaded";

/// Draw one frame of a ready scene
pub fn draw_scene(ctx: &CanvasRenderingContext2d, scene: &Scene, map: Option<&HtmlImageElement>) {
    draw_board(ctx, scene.layout(), scene.camera(), map, scene.config());
}

/// Clear the canvas and draw the board through the camera
///
/// Order: map, connections, stations, bar charts, locomotives.
pub fn draw_board(
    ctx: &CanvasRenderingContext2d,
    layout: &SceneLayout,
    camera: CameraTransform,
    map: Option<&HtmlImageElement>,
    config: &SceneConfig,
) {
    let (width, height) = config.canvas_size();

    let _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    ctx.set_fill_style_str(&config.background_color);
    ctx.fill_rect(0.0, 0.0, width, height);

    // Zoom around the view center, then scroll
    let (half_w, half_h) = (camera.view_size.0 / 2.0, camera.view_size.1 / 2.0);
    ctx.save();
    let _ = ctx.translate(half_w, half_h);
    let _ = ctx.scale(camera.zoom, camera.zoom);
    let _ = ctx.translate(-camera.scroll.0 - half_w, -camera.scroll.1 - half_h);

    if let Some(image) = map {
        map_renderer::draw_map(ctx, image, (width, height));
    }

    network_renderer::draw_connections(ctx, &layout.connections);
    network_renderer::draw_stations(ctx, &layout.stations, config.show_station_labels);
    occupancy_renderer::draw_bar_charts(ctx, &layout.bar_charts);
    occupancy_renderer::draw_locomotives(ctx, &layout.locomotives);

    ctx.restore();
}

/// Background with a centered message, shown while no scene exists
pub fn draw_status(ctx: &CanvasRenderingContext2d, config: &SceneConfig, message: &str) {
    let (width, height) = config.canvas_size();

    ctx.set_fill_style_str(&config.background_color);
    ctx.fill_rect(0.0, 0.0, width, height);

    ctx.set_fill_style_str(STATUS_MESSAGE_COLOR);
    ctx.set_font(STATUS_MESSAGE_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let _ = ctx.fill_text(message, width / 2.0, height / 2.0);
}
