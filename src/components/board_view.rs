use crate::components::board_canvas::{map_renderer, renderer};
use crate::components::canvas_viewport::ViewportCommand;
use crate::config::SceneConfig;
use crate::models::{ColorMap, GameSnapshot};
use crate::scene::Scene;
use leptos::{
    component, create_effect, create_node_ref, create_signal, create_trigger, store_value, view, IntoView,
    NodeRef, ReadSignal, SignalGet, SignalGetUntracked, SignalSet, StoredValue, Trigger,
};
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlImageElement, MouseEvent, WheelEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MapStatus {
    Loading,
    Ready,
    Failed,
}

/// Start loading an image; exactly one of the callbacks runs later
fn load_image(
    url: &str,
    on_load: impl Fn(HtmlImageElement) + 'static,
    on_error: impl Fn() + 'static,
) -> Result<(), JsValue> {
    let image = HtmlImageElement::new()?;
    let loaded = image.clone();

    let onload = Closure::wrap(Box::new(move |_: web_sys::Event| {
        on_load(loaded.clone());
    }) as Box<dyn FnMut(_)>);
    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    let onerror = Closure::wrap(Box::new(move |_: web_sys::Event| {
        on_error();
    }) as Box<dyn FnMut(_)>);
    image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    image.set_src(url);
    Ok(())
}

fn canvas_context(canvas_ref: NodeRef<leptos::html::Canvas>) -> Option<CanvasRenderingContext2d> {
    let canvas = canvas_ref.get_untracked()?;
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn canvas_position(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
    let canvas_elem = canvas_ref.get_untracked()?;
    let canvas: &web_sys::HtmlCanvasElement = &canvas_elem;
    let rect = canvas.get_bounding_client_rect();
    Some((f64::from(ev.client_x()) - rect.left(), f64::from(ev.client_y()) - rect.top()))
}

fn setup_render_effect(
    canvas_ref: NodeRef<leptos::html::Canvas>,
    scene: StoredValue<Option<Scene>>,
    map_image: StoredValue<Option<HtmlImageElement>>,
    status: ReadSignal<MapStatus>,
    redraw: Trigger,
    config: SceneConfig,
) {
    let render_requested = store_value(false);
    let config = store_value(config);

    create_effect(move |_| {
        redraw.track();
        let _ = status.get();

        if render_requested.get_value() {
            return;
        }
        let Some(window) = web_sys::window() else { return };
        render_requested.set_value(true);

        let callback = Closure::once(move || {
            render_requested.set_value(false);
            let Some(ctx) = canvas_context(canvas_ref) else { return };

            match status.get_untracked() {
                MapStatus::Loading => {
                    config.with_value(|config| renderer::draw_status(&ctx, config, renderer::LOADING_MESSAGE));
                }
                MapStatus::Failed => {
                    config.with_value(|config| renderer::draw_status(&ctx, config, renderer::MAP_ERROR_MESSAGE));
                }
                MapStatus::Ready => scene.with_value(|scene| {
                    let Some(scene) = scene else { return };
                    map_image.with_value(|image| renderer::draw_scene(&ctx, scene, image.as_ref()));
                }),
            }
        });

        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
        callback.forget();
    });
}

/// Interactive board: map, network and occupancy on a pan/zoom canvas
#[component]
#[must_use]
pub fn BoardView(
    snapshot: Rc<GameSnapshot>,
    colors: ColorMap,
    #[prop(optional)] config: SceneConfig,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<leptos::html::Canvas>();
    let (status, set_status) = create_signal(MapStatus::Loading);
    let scene = store_value(None::<Scene>);
    let map_image = store_value(None::<HtmlImageElement>);
    let redraw = create_trigger();

    // Canvas size is fixed configuration
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (canvas_width, canvas_height) = (config.canvas_width as u32, config.canvas_height as u32);

    let map_url = config.map_asset_url.clone();
    let scene_config = config.clone();
    let on_load = move |image: HtmlImageElement| {
        let map_size = map_renderer::image_size(&image);
        let new_scene = Scene::new(Rc::clone(&snapshot), colors.clone(), scene_config.clone(), map_size);
        new_scene.report();

        scene.set_value(Some(new_scene));
        map_image.set_value(Some(image));
        set_status.set(MapStatus::Ready);
    };
    let failed_url = map_url.clone();
    let on_error = move || {
        leptos::logging::error!("Failed to load map image: {failed_url}");
        set_status.set(MapStatus::Failed);
    };
    if let Err(err) = load_image(&map_url, on_load, on_error) {
        leptos::logging::error!("Failed to create map image: {err:?}");
        set_status.set(MapStatus::Failed);
    }

    setup_render_effect(canvas_ref, scene, map_image, status, redraw, config);

    let dispatch = move |command: ViewportCommand| {
        let mut changed = false;
        scene.update_value(|scene| {
            if let Some(scene) = scene {
                changed = scene.dispatch(command);
            }
        });
        if changed {
            redraw.notify();
        }
    };

    let handle_mouse_down = move |ev: MouseEvent| {
        let Some((x, y)) = canvas_position(canvas_ref, &ev) else { return };

        scene.with_value(|scene| {
            let Some(scene) = scene else { return };
            let (world_x, world_y) = scene.camera().screen_to_world((x, y));
            crate::log!("Clicked at: x = {world_x}, y = {world_y}");
            if let Some(station) = scene.station_at_screen((x, y)) {
                crate::log!("Station {} ({})", station.id, station.name);
            }
        });

        dispatch(ViewportCommand::DragStart { x, y });
    };

    let handle_mouse_move = move |ev: MouseEvent| {
        let Some((x, y)) = canvas_position(canvas_ref, &ev) else { return };
        dispatch(ViewportCommand::DragMove { x, y });
    };

    let handle_mouse_up = move |_ev: MouseEvent| dispatch(ViewportCommand::DragEnd);
    let handle_mouse_leave = move |_ev: MouseEvent| dispatch(ViewportCommand::DragEnd);

    let handle_wheel = move |ev: WheelEvent| {
        ev.prevent_default();
        dispatch(ViewportCommand::Wheel { delta_y: ev.delta_y() });
    };

    view! {
        <div class="board-view">
            <canvas
                node_ref=canvas_ref
                class="board-canvas"
                width=canvas_width
                height=canvas_height
                on:mousedown=handle_mouse_down
                on:mousemove=handle_mouse_move
                on:mouseup=handle_mouse_up
                on:mouseleave=handle_mouse_leave
                on:wheel=handle_wheel
                on:contextmenu=|ev| ev.prevent_default()
            />
        </div>
    }
}
