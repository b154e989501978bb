#![allow(clippy::implicit_hasher)]

pub mod logging;
pub mod components;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod geometry;
pub mod models;
pub mod scene;

pub use components::app::App;
