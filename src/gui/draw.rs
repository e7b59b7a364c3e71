use super::{App, Config};
use crate::{
    simulation::{MAX_SPEED_MS, MIN_SPEED_MS},
    Preset, PRESETS,
};
use eframe::egui::{
    load::SizedTexture, vec2, Button, Image, Rect, RichText, Sense, Slider, Stroke, Ui, Vec2,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_small_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::MUTED_TEXT_COLOR)
            .size(Config::SMALL_TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_simulation_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let text = if self.simulation.is_running() {
                "Pause"
            } else {
                "Play"
            };
            if ui.add(Self::new_button(text)).clicked() {
                self.simulation.toggle_running();
            }
            if ui.add(Self::new_button("Clear")).clicked() {
                self.clear(ui.ctx());
            }
            if ui.add(Self::new_button("Random")).clicked() {
                self.randomize(ui.ctx());
            }
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Speed (ms): "));
            let mut speed = self.simulation.speed();
            ui.add(
                Slider::new(&mut speed, MIN_SPEED_MS..=MAX_SPEED_MS)
                    .step_by(Config::SPEED_STEP_MS),
            );
            if speed != self.simulation.speed() {
                self.simulation.set_speed(speed);
            }
        });
    }

    fn draw_stats(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(Self::new_text(&format!(
                "Generation: {}",
                self.simulation.generation()
            )));
            ui.add_space(Config::WIDGET_GAP);
            ui.label(Self::new_text(&format!(
                "Population: {}",
                self.simulation.population()
            )));
        });
    }

    fn draw_notice(&mut self, ui: &mut Ui) {
        let now = ui.ctx().input(|i| i.time);
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
        }
        if let Some(notice) = &self.notice {
            ui.label(Self::new_small_text(&notice.text));
        }
    }

    /// Top left corner of `preset`, one small square per cell.
    fn draw_preview(ui: &mut Ui, preset: &Preset) {
        let pattern = preset.pattern();
        let cols = pattern.width().min(Config::PREVIEW_MAX_CELLS);
        let rows = pattern.height().min(Config::PREVIEW_MAX_CELLS);
        let step = Config::PREVIEW_CELL_SIZE + 1.;
        let (rect, _) = ui.allocate_exact_size(
            vec2(cols as f32 * step, rows as f32 * step),
            Sense::hover(),
        );
        let painter = ui.painter();
        for y in 0..rows {
            for x in 0..cols {
                let min = rect.left_top() + vec2(x as f32 * step, y as f32 * step);
                let cell = Rect::from_min_size(min, Vec2::splat(Config::PREVIEW_CELL_SIZE));
                let color = if pattern.get(x, y) {
                    Config::ALIVE_COLOR
                } else {
                    Config::GAP_COLOR
                };
                painter.rect_filled(cell, 1., color);
            }
        }
    }

    fn draw_patterns(&mut self, ui: &mut Ui) {
        ui.label(Self::new_text("Patterns"));
        for preset in PRESETS {
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    if ui.add(Self::new_button(preset.name)).clicked() {
                        self.select_pattern(ui.ctx(), &preset.pattern());
                    }
                    Self::draw_preview(ui, preset);
                });
                ui.label(Self::new_small_text(preset.description));
            });
        }
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            ui.set_width(Config::CONTROL_PANEL_WIDTH);

            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_simulation_controls(ui);
                    self.draw_notice(ui);
                });
            });

            ui.add_space(Config::WIDGET_GAP);

            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_patterns(ui);
                });
            });
        });
    }

    fn draw_field(&mut self, ui: &mut Ui) {
        self.refresh_texture();
        let side_px = (self.simulation.size() * self.cell_size) as f32;
        let source = SizedTexture::new(self.texture.id(), [side_px; 2]);
        let response = ui.add(Image::from_texture(source));
        self.field_rect.replace(response.rect);
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        ui.horizontal_top(|ui| {
            self.draw_controls(ui);

            ui.add_space(Config::WIDGET_GAP);

            ui.vertical(|ui| {
                self.draw_stats(ui);
                self.draw_field(ui);
            });
        });
    }
}
