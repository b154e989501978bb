pub mod app;
pub mod board_canvas;
pub mod board_view;
pub mod canvas_viewport;
