use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 320.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const SMALL_TEXT_SIZE: f32 = 12.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const MUTED_TEXT_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const PANEL_FILL_COLOR: Color32 = Color32::from_gray(230);

    pub const WIDGET_GAP: f32 = 20.;

    pub const SPEED_STEP_MS: f64 = 10.;
    pub const NOTICE_SECONDS: f64 = 3.;
    pub const WELCOME_SECONDS: f64 = 5.;

    pub const ALIVE_COLOR: Color32 = Color32::from_rgb(40, 110, 220);
    pub const DEAD_COLOR: Color32 = Color32::from_rgb(245, 245, 250);
    pub const GAP_COLOR: Color32 = Color32::from_rgb(220, 222, 230);

    pub const PREVIEW_CELL_SIZE: f32 = 4.;
    pub const PREVIEW_MAX_CELLS: usize = 10;
}
