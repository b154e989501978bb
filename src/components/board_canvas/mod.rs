pub mod hit_detection;
pub mod map_renderer;
pub mod network_renderer;
pub mod occupancy_renderer;
pub mod renderer;
