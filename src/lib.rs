#![warn(clippy::all)]

mod config;
mod engine;
mod gui;
mod patterns;
pub mod simulation;

pub use config::{ConfigError, Settings};
pub use engine::{count, step, Grid};
pub use gui::{rasterize, App, Config, Palette};
pub use patterns::{find_preset, Pattern, PatternError, Preset, PRESETS};
pub use simulation::{
    pixel_to_cell, CancelToken, Frame, FrameLoop, PaintStroke, PointerSample, Simulation,
    SimulationError,
};
