//! Transient status messages.

use std::time::Duration;

use eframe::egui;

use crate::app::LingoPadApp;

impl LingoPadApp {
    /// Render the active status toast, centered above the bottom edge,
    /// until it expires
    pub fn render_toast(&mut self, ctx: &egui::Context) {
        let Some(toast) = &self.toast else {
            return;
        };

        if toast.expired() {
            self.toast = None;
            return;
        }

        egui::Area::new(egui::Id::new("status_toast"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -16.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(toast.severity.fill())
                    .stroke(egui::Stroke::new(1.0, egui::Color32::from_black_alpha(80)))
                    .corner_radius(6)
                    .inner_margin(egui::Margin::symmetric(14, 8))
                    .show(ui, |ui| {
                        ui.set_max_width(420.0);
                        ui.label(
                            egui::RichText::new(&toast.message).color(egui::Color32::WHITE),
                        );
                    });
            });

        // Wake up again so the toast clears even with no input events
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
