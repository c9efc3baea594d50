//! Google Cloud Translation v2 client.
//!
//! Thin blocking client over the two v2 REST endpoints the application
//! consumes: the language list and the translate call. Requests are
//! single-attempt with no retry or backoff; timeouts are whatever the
//! network stack defaults to.

use serde::{Deserialize, Serialize};

use crate::catalog::LanguageEntry;
use crate::credentials::ApiCredentials;
use crate::error::TranslateError;
use crate::provider::{TranslationProvider, TranslationResult};

const TRANSLATE_API_BASE: &str = "https://translation.googleapis.com/language/translate/v2";
const USER_AGENT: &str = concat!("LingoPad/", env!("CARGO_PKG_VERSION"));

/// Language used for the human-readable names in the language list
const CATALOG_DISPLAY_LANGUAGE: &str = "en";

// ============================================================================
// API Types
// ============================================================================

#[derive(Debug, Serialize)]
struct TranslateBody<'a> {
    q: &'a str,
    target: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    format: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslationsData,
}

#[derive(Debug, Deserialize)]
struct TranslationsData {
    translations: Vec<TranslationEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslationEntry {
    translated_text: String,
    #[serde(default)]
    detected_source_language: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LanguagesResponse {
    data: LanguagesData,
}

#[derive(Debug, Deserialize)]
struct LanguagesData {
    languages: Vec<LanguageItem>,
}

#[derive(Debug, Deserialize)]
struct LanguageItem {
    language: String,
    #[serde(default)]
    name: Option<String>,
}

// ============================================================================
// Client
// ============================================================================

/// Google Cloud Translation v2 provider, authenticated with an API key
pub struct GoogleTranslate {
    credentials: ApiCredentials,
}

impl GoogleTranslate {
    pub fn new(credentials: ApiCredentials) -> Self {
        Self { credentials }
    }

    fn translate_url(&self) -> String {
        format!("{}?key={}", TRANSLATE_API_BASE, self.credentials.api_key())
    }

    fn languages_url(&self) -> String {
        format!(
            "{}/languages?key={}&target={}",
            TRANSLATE_API_BASE,
            self.credentials.api_key(),
            CATALOG_DISPLAY_LANGUAGE
        )
    }

    fn map_request_error(e: ureq::Error) -> TranslateError {
        match e {
            ureq::Error::StatusCode(status) => {
                TranslateError::Provider(format!("HTTP {}: {}", status, status_hint(status)))
            }
            _ => TranslateError::Provider(format!("Network error: {}", e)),
        }
    }
}

/// Map common v2 status codes to something more actionable than a bare number
fn status_hint(status: u16) -> &'static str {
    match status {
        400 => "bad request (invalid language code?)",
        401 | 403 => "authentication failed (check your API key)",
        429 => "quota exceeded",
        500..=599 => "provider error",
        _ => "request rejected",
    }
}

impl TranslationProvider for GoogleTranslate {
    fn list_languages(&self) -> Result<Vec<LanguageEntry>, TranslateError> {
        let mut response = ureq::get(&self.languages_url())
            .header("User-Agent", USER_AGENT)
            .call()
            .map_err(Self::map_request_error)?;

        let parsed: LanguagesResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| TranslateError::Provider(format!("Failed to parse response: {}", e)))?;

        let entries = parsed
            .data
            .languages
            .into_iter()
            .map(|item| LanguageEntry {
                // Entries without a localized name fall back to the raw code
                name: item.name.unwrap_or_else(|| item.language.clone()),
                code: item.language,
            })
            .collect();

        Ok(entries)
    }

    fn translate(
        &self,
        text: &str,
        source: Option<&str>,
        target: &str,
    ) -> Result<TranslationResult, TranslateError> {
        let body = TranslateBody {
            q: text,
            target,
            source,
            format: "text",
        };

        let mut response = ureq::post(&self.translate_url())
            .header("User-Agent", USER_AGENT)
            .send_json(&body)
            .map_err(Self::map_request_error)?;

        let parsed: TranslateResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| TranslateError::Provider(format!("Failed to parse response: {}", e)))?;

        let entry = parsed
            .data
            .translations
            .into_iter()
            .next()
            .ok_or_else(|| TranslateError::Provider("Empty translation response".to_string()))?;

        Ok(TranslationResult {
            translated_text: entry.translated_text,
            detected_source_language: entry.detected_source_language,
        })
    }
}
