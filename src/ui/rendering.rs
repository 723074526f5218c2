//! Canvas painting of a laid-out scene with the egui painter.

use super::state::ScatterApp;
use crate::constants::STROKE_WIDTH;
use crate::scene::{self, DrawCommand, Scene, TextAnchor};
use eframe::egui;
use eframe::epaint::StrokeKind;

impl ScatterApp {
    /// Lays out the plot and paints it onto a canvas allocated in `ui`.
    ///
    /// The scene is rebuilt on every call; only the loaded data is kept between frames.
    pub fn draw_canvas(&self, ui: &mut egui::Ui) {
        match scene::build(&self.plot, &self.config) {
            Ok(scene) => {
                let (response, painter) = ui.allocate_painter(
                    egui::vec2(scene.width, scene.height),
                    egui::Sense::hover(),
                );
                paint_scene(&painter, &scene, response.rect.min.to_vec2());
            }
            Err(err) => {
                log::error!("Cannot lay out plot: {err}");
                ui.colored_label(egui::Color32::RED, err.to_string());
            }
        }
    }
}

/// Paints every command of `scene`, shifted by `offset` into screen space.
pub fn paint_scene(painter: &egui::Painter, scene: &Scene, offset: egui::Vec2) {
    for command in &scene.commands {
        match command {
            DrawCommand::Line { from, to, color } => {
                painter.line_segment(
                    [*from + offset, *to + offset],
                    egui::Stroke::new(STROKE_WIDTH, *color),
                );
            }
            DrawCommand::Circle {
                center,
                radius,
                fill,
                outline,
            } => {
                painter.circle(
                    *center + offset,
                    *radius,
                    *fill,
                    egui::Stroke::new(STROKE_WIDTH, *outline),
                );
            }
            DrawCommand::Rect {
                rect,
                fill,
                outline,
            } => {
                painter.rect(
                    rect.translate(offset),
                    0.0,
                    *fill,
                    egui::Stroke::new(STROKE_WIDTH, *outline),
                    StrokeKind::Inside,
                );
            }
            DrawCommand::Text {
                pos,
                anchor,
                text,
                size,
                color,
            } => {
                // Positions are baselines; the bottom of the text row is the closest egui anchor.
                let align = match anchor {
                    TextAnchor::Start => egui::Align2::LEFT_BOTTOM,
                    TextAnchor::Middle => egui::Align2::CENTER_BOTTOM,
                };
                painter.text(
                    *pos + offset,
                    align,
                    text,
                    egui::FontId::proportional(*size),
                    (*color).into(),
                );
            }
        }
    }
}
