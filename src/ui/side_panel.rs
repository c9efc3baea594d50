//! Translation settings side panel: language pickers and the log location.

use eframe::egui;

use crate::app::{CatalogState, LingoPadApp, AUTO_DETECT_OPTION};

/// Default width of the side panel in pixels
pub const SIDE_PANEL_WIDTH: f32 = 280.0;

/// Minimum width of the side panel
pub const SIDE_PANEL_MIN_WIDTH: f32 = 220.0;

impl LingoPadApp {
    /// Render the side panel content
    pub fn render_side_panel(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Translation Settings");
        });
        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| match &self.catalog_state {
                CatalogState::Loading => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Fetching supported languages...");
                    });
                }
                CatalogState::Failed(message) => {
                    ui.colored_label(
                        egui::Color32::from_rgb(235, 100, 100),
                        "No languages available. Please check your API setup.",
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(message.clone())
                            .size(12.0)
                            .color(egui::Color32::GRAY),
                    );
                }
                CatalogState::Ready(_) => {
                    self.render_language_pickers(ui);
                }
            });
    }

    /// Render the source and target language pickers
    fn render_language_pickers(&mut self, ui: &mut egui::Ui) {
        let CatalogState::Ready(catalog) = &self.catalog_state else {
            return;
        };
        let names: Vec<String> = catalog.names().map(str::to_string).collect();

        let mut selection_changed = false;

        ui.label(egui::RichText::new("Source Language").strong());
        ui.add_space(4.0);
        egui::ComboBox::from_id_salt("source_language")
            .selected_text(self.source_selection.clone())
            .width(200.0)
            .show_ui(ui, |ui| {
                // Auto-detect comes first, like the pickers list it
                if ui
                    .selectable_value(
                        &mut self.source_selection,
                        AUTO_DETECT_OPTION.to_string(),
                        AUTO_DETECT_OPTION,
                    )
                    .changed()
                {
                    selection_changed = true;
                }
                for name in &names {
                    if ui
                        .selectable_value(&mut self.source_selection, name.clone(), name)
                        .changed()
                    {
                        selection_changed = true;
                    }
                }
            });

        ui.add_space(12.0);

        ui.label(egui::RichText::new("Target Language").strong());
        ui.add_space(4.0);
        let target_label = self
            .target_selection
            .clone()
            .unwrap_or_else(|| "Select...".to_string());
        egui::ComboBox::from_id_salt("target_language")
            .selected_text(target_label)
            .width(200.0)
            .show_ui(ui, |ui| {
                for name in &names {
                    if ui
                        .selectable_value(&mut self.target_selection, Some(name.clone()), name)
                        .changed()
                    {
                        selection_changed = true;
                    }
                }
            });

        if selection_changed {
            self.save_language_selections();
        }

        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);

        ui.label(egui::RichText::new("Translation Log").strong());
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new(self.recorder.path().display().to_string())
                .size(12.0)
                .color(egui::Color32::GRAY),
        );
    }
}
