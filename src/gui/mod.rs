mod app;
mod config;
mod draw;
mod raster;

pub use app::App;
pub use config::Config;
pub use raster::{rasterize, Palette};
