use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::catalog::{CatalogCache, LanguageCatalog};
use crate::credentials::ApiCredentials;
use crate::provider::google::GoogleTranslate;
use crate::provider::{
    spawn_provider_worker, ProviderRequest, ProviderResponse, SourceLanguage, SubmittedTranslation,
    TranslationRequest,
};
use crate::translator::Translation;
use crate::recorder::{LogRow, ResultRecorder, DEFAULT_LOG_FILENAME};
use crate::settings::UserSettings;

/// Pseudo-entry shown first in the source language picker
pub const AUTO_DETECT_OPTION: &str = "Auto-detect";

/// Preferred default target when the catalog offers it
pub const DEFAULT_TARGET_LANGUAGE: &str = "Hindi";

/// Sample text pre-filled into the input field on startup
pub const DEFAULT_SAMPLE_TEXT: &str =
    "The quick brown fox jumps over the lazy dog. Translation turns this sentence into any \
     of more than a hundred languages.";

/// Severity of a status toast; picks the fill color
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Warning,
    Error,
}

impl ToastSeverity {
    pub fn fill(&self) -> egui::Color32 {
        match self {
            ToastSeverity::Success => egui::Color32::from_rgb(56, 118, 74),
            ToastSeverity::Warning => egui::Color32::from_rgb(150, 105, 20),
            ToastSeverity::Error => egui::Color32::from_rgb(168, 50, 44),
        }
    }
}

/// Transient status message raised after an action completes
pub struct Toast {
    pub message: String,
    pub severity: ToastSeverity,
    raised_at: Instant,
}

impl Toast {
    /// How long a toast stays on screen
    const DURATION: Duration = Duration::from_secs(4);

    fn new(message: &str, severity: ToastSeverity) -> Self {
        Self {
            message: message.to_string(),
            severity,
            raised_at: Instant::now(),
        }
    }

    /// True once the on-screen time is up
    pub fn expired(&self) -> bool {
        self.raised_at.elapsed() >= Self::DURATION
    }
}

/// State of the language catalog fetch
pub enum CatalogState {
    /// Fetch request sent, response pending
    Loading,
    /// Catalog available, pickers populated
    Ready(LanguageCatalog),
    /// Fetch failed; the translate flow is unreachable for this process
    Failed(String),
}

/// A finished translation held for display
pub struct CompletedTranslation {
    /// The row that was recorded to the log
    pub row: LogRow,
    /// Untruncated translated text for the result box
    pub full_text: String,
}

/// Main application state
pub struct LingoPadApp {
    /// Set when credentials could not be loaded; blocks the whole UI
    pub(crate) startup_error: Option<String>,
    /// Channel for sending requests to the provider worker
    request_tx: Option<Sender<ProviderRequest>>,
    /// Channel for receiving worker responses
    response_rx: Option<Receiver<ProviderResponse>>,
    /// Language catalog fetch state
    pub(crate) catalog_state: CatalogState,
    /// Text to translate
    pub(crate) input_text: String,
    /// Selected source language name (or the Auto-detect pseudo-entry)
    pub(crate) source_selection: String,
    /// Selected target language name; `None` until the catalog arrives
    pub(crate) target_selection: Option<String>,
    /// True while a translation request is in flight
    pub(crate) translate_pending: bool,
    /// Most recent successful translation
    pub(crate) last_result: Option<CompletedTranslation>,
    /// Most recent translation error, shown in the results area
    pub(crate) last_error: Option<String>,
    /// Status toast for user feedback
    pub(crate) toast: Option<Toast>,
    /// Translation log writer
    pub(crate) recorder: ResultRecorder,
    /// Persisted user preferences
    pub(crate) user_settings: UserSettings,
}

impl LingoPadApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let user_settings = UserSettings::load();
        let log_path = user_settings
            .log_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILENAME));

        let mut app = Self {
            startup_error: None,
            request_tx: None,
            response_rx: None,
            catalog_state: CatalogState::Loading,
            input_text: DEFAULT_SAMPLE_TEXT.to_string(),
            source_selection: AUTO_DETECT_OPTION.to_string(),
            target_selection: None,
            translate_pending: false,
            last_result: None,
            last_error: None,
            toast: None,
            recorder: ResultRecorder::new(log_path),
            user_settings,
        };

        match ApiCredentials::load() {
            Ok(credentials) => {
                let provider = Arc::new(GoogleTranslate::new(credentials));
                let (tx, rx) = spawn_provider_worker(provider, Arc::new(CatalogCache::new()));
                // Kick off the one-time catalog fetch immediately
                let _ = tx.send(ProviderRequest::FetchCatalog);
                app.request_tx = Some(tx);
                app.response_rx = Some(rx);
            }
            Err(e) => {
                tracing::error!("Startup failed: {}", e);
                app.startup_error = Some(e.to_string());
            }
        }

        app
    }

    // ========================================================================
    // Worker Responses
    // ========================================================================

    /// Drain completed worker responses (called once per frame)
    pub(crate) fn handle_provider_responses(&mut self) {
        let Some(receiver) = &self.response_rx else {
            return;
        };

        let mut responses = Vec::new();
        while let Ok(response) = receiver.try_recv() {
            responses.push(response);
        }

        for response in responses {
            match response {
                ProviderResponse::Catalog(Ok(catalog)) => {
                    tracing::info!(languages = catalog.len(), "language catalog loaded");
                    self.apply_default_selections(&catalog);
                    self.catalog_state = CatalogState::Ready(catalog);
                }
                ProviderResponse::Catalog(Err(e)) => {
                    self.catalog_state = CatalogState::Failed(e.to_string());
                }
                ProviderResponse::Translation { submitted, result } => {
                    self.translate_pending = false;
                    match result {
                        Ok(translation) => {
                            self.last_error = None;
                            self.finish_translation(submitted, translation);
                        }
                        Err(e) => {
                            tracing::warn!("translation failed: {}", e);
                            self.last_result = None;
                            self.last_error = Some(e.to_string());
                        }
                    }
                }
            }
        }
    }

    /// Restore the last-used languages where they still exist in the catalog
    fn apply_default_selections(&mut self, catalog: &LanguageCatalog) {
        if let Some(saved) = &self.user_settings.source_language {
            if saved == AUTO_DETECT_OPTION || catalog.code_for_name(saved).is_some() {
                self.source_selection = saved.clone();
            }
        }

        let saved_target = self
            .user_settings
            .target_language
            .as_deref()
            .filter(|name| catalog.code_for_name(name).is_some());

        self.target_selection = saved_target
            .map(str::to_string)
            .or_else(|| {
                catalog
                    .code_for_name(DEFAULT_TARGET_LANGUAGE)
                    .map(|_| DEFAULT_TARGET_LANGUAGE.to_string())
            })
            .or_else(|| catalog.names().next().map(str::to_string));
    }

    /// Record a completed translation and stage it for display.
    /// The row is built from the echoed submission, never from the current
    /// form state: the text field and pickers may have changed while the
    /// call was in flight.
    fn finish_translation(&mut self, submitted: SubmittedTranslation, translation: Translation) {
        let CatalogState::Ready(catalog) = &self.catalog_state else {
            return;
        };

        let row = LogRow::new(
            &submitted.request.text,
            translation.source_code.as_deref(),
            &submitted.target_name,
            &translation.translated_text,
            catalog,
        );

        match self.recorder.record(&row) {
            Ok(()) => {
                self.show_toast_success(&format!(
                    "Translation saved to {}",
                    self.recorder.path().display()
                ));
            }
            Err(e) => {
                // The translation itself succeeded; only the log write failed
                self.show_toast_error(&e.to_string());
            }
        }

        self.last_result = Some(CompletedTranslation {
            row,
            full_text: translation.translated_text,
        });
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Send the current form contents to the worker as one translation
    /// request. Input validation (empty text) happens in the invoker so even
    /// a blank request makes zero remote calls.
    pub(crate) fn start_translation(&mut self) {
        let CatalogState::Ready(catalog) = &self.catalog_state else {
            return;
        };
        let Some(target_name) = &self.target_selection else {
            self.show_toast_warning("Select a target language first");
            return;
        };
        let Some(target_code) = catalog.code_for_name(target_name).map(str::to_string) else {
            self.show_toast_error("Target language is no longer available");
            return;
        };

        // Both pickers fail the same way when their selection is stale
        let Some(source) = resolve_source_selection(catalog, &self.source_selection) else {
            self.show_toast_error("Source language is no longer available");
            return;
        };

        // Snapshot the form values now; the row is built from this submission
        // when the response arrives, not from whatever the form shows then
        let submitted = SubmittedTranslation {
            request: TranslationRequest {
                text: self.input_text.clone(),
                source,
                target: target_code,
            },
            target_name: target_name.clone(),
        };

        if let Some(tx) = &self.request_tx {
            if tx.send(ProviderRequest::Translate(submitted)).is_ok() {
                self.translate_pending = true;
                self.last_error = None;
            } else {
                self.show_toast_error("Translation worker is no longer running");
            }
        }
    }

    /// Persist the current language selections
    pub(crate) fn save_language_selections(&mut self) {
        self.user_settings.source_language = Some(self.source_selection.clone());
        self.user_settings.target_language = self.target_selection.clone();
        if let Err(e) = self.user_settings.save() {
            self.show_toast_error(&format!("Failed to save settings: {}", e));
        }
    }

    /// Move the translation log to a new location and persist the choice
    pub(crate) fn set_log_path(&mut self, path: PathBuf) {
        self.recorder.set_path(path.clone());
        self.user_settings.log_path = Some(path);
        if let Err(e) = self.user_settings.save() {
            self.show_toast_error(&format!("Failed to save settings: {}", e));
        }
    }

    // ========================================================================
    // Toasts
    // ========================================================================

    pub(crate) fn show_toast_success(&mut self, message: &str) {
        self.toast = Some(Toast::new(message, ToastSeverity::Success));
    }

    pub(crate) fn show_toast_warning(&mut self, message: &str) {
        self.toast = Some(Toast::new(message, ToastSeverity::Warning));
    }

    pub(crate) fn show_toast_error(&mut self, message: &str) {
        self.toast = Some(Toast::new(message, ToastSeverity::Error));
    }
}

/// Resolve the source picker selection against the catalog. `None` means the
/// selected name no longer exists in the catalog.
pub(crate) fn resolve_source_selection(
    catalog: &LanguageCatalog,
    selection: &str,
) -> Option<SourceLanguage> {
    if selection == AUTO_DETECT_OPTION {
        return Some(SourceLanguage::Auto);
    }
    catalog
        .code_for_name(selection)
        .map(|code| SourceLanguage::Code(code.to_string()))
}

impl eframe::App for LingoPadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // No credentials: nothing else is reachable
        if self.startup_error.is_some() {
            self.render_startup_error(ctx);
            return;
        }

        self.handle_provider_responses();

        // Keep polling while a worker call is in flight
        if self.translate_pending || matches!(self.catalog_state, CatalogState::Loading) {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.render_menu_bar(ui);
        });

        egui::SidePanel::left("side_panel")
            .default_width(crate::ui::side_panel::SIDE_PANEL_WIDTH)
            .min_width(crate::ui::side_panel::SIDE_PANEL_MIN_WIDTH)
            .show(ctx, |ui| {
                self.render_side_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_translate_panel(ui);
        });

        self.render_toast(ctx);
    }
}
