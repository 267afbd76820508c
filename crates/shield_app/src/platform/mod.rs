pub mod app;
mod effects;
pub mod logging;
mod persistence;
mod render;
