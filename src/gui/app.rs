use super::{rasterize, Config, Palette};
use crate::{
    pixel_to_cell, Frame, FrameLoop, PaintStroke, Pattern, PointerSample, Settings, Simulation,
    SimulationError,
};
use eframe::egui::{
    CentralPanel, ColorImage, Context, Frame as PanelFrame, Key, Margin, Rect, TextureHandle,
    TextureOptions,
};

/// Status line shown under the controls until it expires.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Notice {
    pub(super) text: String,
    posted: f64,   // Input time in seconds.
    lifetime: f64, // Seconds the notice stays up.
}

impl Notice {
    pub(super) fn new(text: &str, posted: f64, lifetime: f64) -> Self {
        Self {
            text: text.to_string(),
            posted,
            lifetime,
        }
    }

    pub(super) fn is_expired(&self, now: f64) -> bool {
        now - self.posted > self.lifetime
    }
}

pub struct App {
    pub(super) simulation: Simulation,     // Owner of the field.
    pub(super) frame_loop: FrameLoop,      // Decides when the next generation is due.
    pub(super) stroke: Option<PaintStroke>, // Drag-paint in progress.
    pub(super) cell_size: usize,           // Side of a cell in pixels.
    pub(super) random_density: f64,        // Density used by "Random".
    pub(super) notice: Option<Notice>,     // Status message.
    pub(super) texture: TextureHandle,     // Texture of the rendered field.
    pub(super) drawn_revision: Option<u64>, // Field revision held by `texture`.
    pub(super) field_rect: Option<Rect>,   // Part of the window displaying the field.
}

impl App {
    pub fn new(ctx: &Context, settings: &Settings) -> Result<Self, SimulationError> {
        let pattern = settings
            .initial_pattern
            .as_deref()
            .and_then(crate::find_preset)
            .map(|p| p.pattern());
        let mut simulation = Simulation::new(settings.grid_size, pattern.as_ref())?;
        simulation.set_speed(settings.speed_ms);
        if let Some(seed) = settings.seed {
            simulation.reseed(seed);
        }

        let mut frame_loop = FrameLoop::default();
        frame_loop.start();
        Ok(Self {
            simulation,
            frame_loop,
            stroke: None,
            cell_size: settings.cell_size,
            random_density: settings.random_density,
            notice: Some(Notice::new(
                "Drag on the grid to add cells or pick a pattern.",
                ctx.input(|i| i.time),
                Config::WELCOME_SECONDS,
            )),
            texture: ctx.load_texture(
                "Game of Life field",
                ColorImage::default(),
                TextureOptions::NEAREST,
            ),
            drawn_revision: None,
            field_rect: None,
        })
    }

    pub(super) fn notify(&mut self, ctx: &Context, text: &str) {
        let now = ctx.input(|i| i.time);
        self.notice = Some(Notice::new(text, now, Config::NOTICE_SECONDS));
    }

    pub(super) fn clear(&mut self, ctx: &Context) {
        self.simulation.clear();
        self.notify(ctx, "Grid cleared");
    }

    pub(super) fn randomize(&mut self, ctx: &Context) {
        self.simulation.randomize(self.random_density);
        self.notify(ctx, "Random pattern generated");
    }

    pub(super) fn select_pattern(&mut self, ctx: &Context, pattern: &Pattern) {
        self.simulation.load_pattern(pattern);
        self.notify(ctx, "Pattern applied. Click play to see it evolve!");
    }

    pub(super) fn palette() -> Palette {
        Palette {
            alive: Config::ALIVE_COLOR,
            dead: Config::DEAD_COLOR,
            gap: Config::GAP_COLOR,
        }
    }

    /// Re-rasterizes the field if it changed since the last upload.
    pub(super) fn refresh_texture(&mut self) {
        let revision = self.simulation.revision();
        if self.drawn_revision == Some(revision) {
            return;
        }
        let image = rasterize(self.simulation.grid(), self.cell_size, &Self::palette());
        self.texture.set(image, TextureOptions::NEAREST);
        self.drawn_revision = Some(revision);
    }

    fn handle_pointer(&mut self, ctx: &Context, field_rect: Rect) {
        let cell_size = self.cell_size as f32;
        let sample = ctx.input(|input| {
            let pos = input.pointer.latest_pos().filter(|p| field_rect.contains(*p));
            PointerSample {
                pressed: input.pointer.primary_pressed(),
                down: input.pointer.primary_down(),
                cell: pos.map(|p| {
                    let offset = p - field_rect.left_top();
                    pixel_to_cell(offset.x, offset.y, cell_size)
                }),
            }
        });
        self.stroke = PaintStroke::follow(self.stroke.take(), &mut self.simulation, sample);
    }

    fn handle_keys(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(Key::Space)) {
            self.simulation.toggle_running();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now_ms = ctx.input(|i| i.time) * 1e3;
        // a stopped loop stops asking for frames; egui still repaints on input
        if self.frame_loop.on_frame(&mut self.simulation, now_ms) != Frame::Stopped {
            ctx.request_repaint();
        }

        if let Some(field_rect) = self.field_rect {
            self.handle_pointer(ctx, field_rect);
        }
        self.handle_keys(ctx);

        // full-window panel
        CentralPanel::default()
            .frame(
                PanelFrame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Config::PANEL_FILL_COLOR),
            )
            .show(ctx, |ui| {
                self.draw(ui);
            });
    }
}
