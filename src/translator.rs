//! Translation invoker.
//!
//! Validates input locally, issues a single remote call through the provider
//! seam and normalizes the response. Auto-detect requests omit the source
//! parameter; explicit source codes are passed through verbatim and echoed
//! back unchanged (the provider is never asked to detect in that case).

use std::sync::Arc;

use crate::error::TranslateError;
use crate::provider::{SourceLanguage, TranslationProvider, TranslationRequest};

/// Resolved result of one translation action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub translated_text: String,
    /// Provider code of the source language: the detected code for auto
    /// requests, the request's own code for explicit ones. `None` only when
    /// an auto request came back without a detection.
    pub source_code: Option<String>,
}

/// Issues translation requests against a provider.
///
/// Stateless apart from the provider handle; each call is an independent,
/// single-attempt operation with no retry and no side effects beyond the
/// network call.
pub struct Translator {
    provider: Arc<dyn TranslationProvider + Send + Sync>,
}

impl Translator {
    pub fn new(provider: Arc<dyn TranslationProvider + Send + Sync>) -> Self {
        Self { provider }
    }

    /// Translate one request. Empty (or all-whitespace) text fails with
    /// [`TranslateError::EmptyInput`] before any remote call is made.
    pub fn translate(&self, request: &TranslationRequest) -> Result<Translation, TranslateError> {
        let text = request.text.trim();
        if text.is_empty() {
            return Err(TranslateError::EmptyInput);
        }

        let source = request.source.as_remote_code();
        let result = self.provider.translate(text, source, &request.target)?;

        tracing::debug!(
            target_lang = %request.target,
            detected = ?result.detected_source_language,
            "translation completed"
        );

        let source_code = match &request.source {
            // Detection only happens for auto requests
            SourceLanguage::Auto => result.detected_source_language,
            SourceLanguage::Code(code) => Some(code.clone()),
        };

        Ok(Translation {
            translated_text: result.translated_text,
            source_code,
        })
    }
}
