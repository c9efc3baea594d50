//! Translation log recorder.
//!
//! Appends one CSV row per completed translation to `translations.csv`:
//! the original text truncated to 100 characters, the resolved source and
//! target language names, and the translated text. The header row is written
//! when the file is created; the log accumulates history across sessions.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::catalog::LanguageCatalog;
use crate::error::TranslateError;

/// Maximum number of original-text characters recorded per row
pub const TRUNCATE_LEN: usize = 100;

/// Marker appended when the original text was truncated
pub const ELLIPSIS: &str = "...";

/// Default log filename, created in the working directory
pub const DEFAULT_LOG_FILENAME: &str = "translations.csv";

const CSV_HEADER: &str = "Original Text,Source Language,Target Language,Translated Text";

/// One persisted record summarizing a single translation action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    pub original_text: String,
    pub source_language: String,
    pub target_language: String,
    pub translated_text: String,
}

impl LogRow {
    /// Build a row from a completed translation. The source name resolves
    /// through the catalog ("Auto-detected" when the code is unknown); the
    /// target name is the picker label the user chose.
    pub fn new(
        original_text: &str,
        source_code: Option<&str>,
        target_language_name: &str,
        translated_text: &str,
        catalog: &LanguageCatalog,
    ) -> Self {
        Self {
            original_text: truncate_original(original_text),
            source_language: catalog.resolve_source_name(source_code),
            target_language: target_language_name.to_string(),
            translated_text: translated_text.to_string(),
        }
    }

    fn to_csv_line(&self) -> String {
        format!(
            "{},{},{},{}",
            csv_field(&self.original_text),
            csv_field(&self.source_language),
            csv_field(&self.target_language),
            csv_field(&self.translated_text)
        )
    }
}

/// Truncate original text for the log: anything longer than
/// [`TRUNCATE_LEN`] characters becomes exactly the first 100 characters
/// followed by the ellipsis marker. Character-based, not byte-based.
pub fn truncate_original(text: &str) -> String {
    let mut chars = text.char_indices();
    match chars.nth(TRUNCATE_LEN) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
        None => text.to_string(),
    }
}

/// Quote a CSV field when it contains a delimiter, quote or line break
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Appends translation records to a flat CSV file
#[derive(Debug, Clone)]
pub struct ResultRecorder {
    path: PathBuf,
}

impl ResultRecorder {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Change where records are written. The header will be created in the
    /// new file on the next record if it does not exist yet.
    pub fn set_path(&mut self, path: PathBuf) {
        self.path = path;
    }

    /// Append one row, writing the header first when the file is new or
    /// empty. Failures surface as [`TranslateError::RecordingFailed`].
    pub fn record(&self, row: &LogRow) -> Result<(), TranslateError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| TranslateError::RecordingFailed(e.to_string()))?;

        // Header decision comes from the open handle itself
        let needs_header = file
            .metadata()
            .map_err(|e| TranslateError::RecordingFailed(e.to_string()))?
            .len()
            == 0;

        if needs_header {
            writeln!(file, "{}", CSV_HEADER)
                .map_err(|e| TranslateError::RecordingFailed(e.to_string()))?;
        }

        writeln!(file, "{}", row.to_csv_line())
            .map_err(|e| TranslateError::RecordingFailed(e.to_string()))?;

        tracing::info!(path = %self.path.display(), "translation recorded");
        Ok(())
    }
}
