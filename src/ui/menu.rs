//! Menu bar UI components (File, Help menus).

use eframe::egui;

use crate::app::LingoPadApp;

impl LingoPadApp {
    /// Render the application menu bar
    pub fn render_menu_bar(&mut self, ui: &mut egui::Ui) {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                ui.set_min_width(180.0);

                if ui.button("Set Log File...").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("CSV Files", &["csv"])
                        .set_file_name("translations.csv")
                        .save_file()
                    {
                        self.set_log_path(path);
                    }
                    ui.close();
                }

                let log_exists = self.recorder.path().exists();
                if ui
                    .add_enabled(log_exists, egui::Button::new("Open Translation Log"))
                    .clicked()
                {
                    if let Err(e) = open::that(self.recorder.path()) {
                        self.show_toast_error(&format!("Failed to open log: {}", e));
                    }
                    ui.close();
                }

                ui.separator();

                if ui.button("Quit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Help", |ui| {
                ui.set_min_width(180.0);

                if ui.button("Translation API Documentation").clicked() {
                    let _ = open::that("https://cloud.google.com/translate/docs");
                    ui.close();
                }

                ui.separator();
                ui.label(
                    egui::RichText::new(concat!("LingoPad ", env!("CARGO_PKG_VERSION")))
                        .size(12.0)
                        .color(egui::Color32::GRAY),
                );
            });
        });
    }
}
