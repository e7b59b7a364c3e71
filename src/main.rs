#![warn(clippy::all)]

use conway_canvas::{App, Settings};
use std::path::Path;

const SETTINGS_FILE: &str = "conway_canvas.yaml";

fn load_settings() -> Settings {
    if !Path::new(SETTINGS_FILE).exists() {
        log::info!("Using default settings");
        return Settings::default();
    }
    match Settings::from_file(SETTINGS_FILE) {
        Ok(settings) => {
            log::info!("Loaded settings from: {}", SETTINGS_FILE);
            settings
        }
        Err(e) => {
            log::warn!("Ignoring {}: {}", SETTINGS_FILE, e);
            Settings::default()
        }
    }
}

fn main() -> eframe::Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = load_settings();
    log::info!(
        "Grid size: {}, cell size: {} px",
        settings.grid_size,
        settings.cell_size
    );

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(1280., 800.))
            .with_min_inner_size(vec2(640.0, 360.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, &settings)?))),
    )
}
