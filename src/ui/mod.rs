//! User interface for the scatter plot window.
//!
//! # Module Organization
//!
//! - `state` - The `ScatterApp` struct handed to eframe
//! - `rendering` - Painting scene draw commands with the egui painter

mod rendering;
mod state;

pub use rendering::paint_scene;
pub use state::ScatterApp;

use eframe::egui;

impl eframe::App for ScatterApp {
    /// Main update function called by egui for each frame.
    ///
    /// Lays out the plot from the stored state and paints it into the central panel.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The egui context
    /// * `_frame` - The eframe frame
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

impl ScatterApp {
    /// Draws one frame: a white central panel holding the plot canvas.
    pub fn show(&self, ctx: &egui::Context) {
        ctx.set_visuals(egui::Visuals::light());
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                self.draw_canvas(ui);
            });
    }
}

#[cfg(test)]
mod tests;
