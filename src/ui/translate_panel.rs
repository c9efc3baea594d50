//! Central panel: the input form, the translate action and the results.

use eframe::egui;

use crate::app::{CatalogState, LingoPadApp};

impl LingoPadApp {
    /// Render the translation form and results
    pub fn render_translate_panel(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.heading("Text Translator");
            ui.label(
                egui::RichText::new("Translate text using the Google Cloud Translation API")
                    .size(13.0)
                    .color(egui::Color32::GRAY),
            );
        });
        ui.add_space(12.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.label("Enter text to translate");
                ui.add_space(4.0);
                ui.add(
                    egui::TextEdit::multiline(&mut self.input_text)
                        .desired_width(f32::INFINITY)
                        .desired_rows(8),
                );

                ui.add_space(8.0);

                let catalog_ready = matches!(self.catalog_state, CatalogState::Ready(_));
                let can_translate = catalog_ready && !self.translate_pending;

                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(can_translate, egui::Button::new("Translate"))
                        .clicked()
                    {
                        self.start_translation();
                    }

                    if self.translate_pending {
                        ui.spinner();
                        ui.label("Translating...");
                    }
                });

                ui.add_space(12.0);

                if let Some(error) = self.last_error.clone() {
                    ui.colored_label(egui::Color32::from_rgb(235, 100, 100), error);
                    ui.add_space(8.0);
                }

                self.render_results(ui);
            });
    }

    /// Render the results box: the recorded row plus the full translated text
    fn render_results(&mut self, ui: &mut egui::Ui) {
        let Some(result) = &self.last_result else {
            return;
        };

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(egui::RichText::new("Translation Results").strong().size(15.0));
            ui.add_space(8.0);

            egui::Grid::new("result_grid")
                .num_columns(2)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("Original Text").strong());
                    ui.label(&result.row.original_text);
                    ui.end_row();

                    ui.label(egui::RichText::new("Source Language").strong());
                    ui.label(&result.row.source_language);
                    ui.end_row();

                    ui.label(egui::RichText::new("Target Language").strong());
                    ui.label(&result.row.target_language);
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(8.0);

            ui.label(egui::RichText::new("Full Translated Text").strong());
            ui.add_space(4.0);
            ui.label(&result.full_text);
        });
    }

    /// Full-window error screen shown when credentials failed to load.
    /// Nothing else is reachable in this state.
    pub fn render_startup_error(&mut self, ctx: &egui::Context) {
        let message = self.startup_error.clone().unwrap_or_default();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.heading("LingoPad");
                ui.add_space(16.0);
                ui.colored_label(
                    egui::Color32::from_rgb(235, 100, 100),
                    "Failed to initialize the translation client",
                );
                ui.add_space(8.0);
                ui.label(message);
                ui.add_space(16.0);
                ui.label(
                    egui::RichText::new(
                        "Configure an API key and restart the application.",
                    )
                    .size(13.0)
                    .color(egui::Color32::GRAY),
                );
            });
        });
    }
}
