//! LingoPad - A desktop text translator.
//!
//! LingoPad is a desktop application for translating text through the Google
//! Cloud Translation API: pick a source and target language, type text, and
//! translate. Every completed translation is appended to a CSV log.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use lingopad::app::LingoPadApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Configure native options
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("LingoPad - Text Translator")
            .with_app_id("LingoPad"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "LingoPad",
        native_options,
        Box::new(|cc| Ok(Box::new(LingoPadApp::new(cc)))),
    )
}
