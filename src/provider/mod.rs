//! Translation provider integration.
//!
//! This module defines the seam between the application and the remote
//! translation service: the [`TranslationProvider`] trait, the request and
//! response types that cross it, and a background worker that services
//! requests on a dedicated thread so the blocking HTTP call never stalls the
//! UI.
//!
//! The shipped implementation is the Google Cloud Translation v2 client in
//! [`google`]; tests substitute mock providers through the trait.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use crate::catalog::{CatalogCache, LanguageCatalog, LanguageEntry};
use crate::error::TranslateError;
use crate::translator::{Translation, Translator};

pub mod google;

// ============================================================================
// Request / Response Types
// ============================================================================

/// Source language selection for a translation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLanguage {
    /// Let the provider detect the source language
    Auto,
    /// An explicit provider language code, passed through verbatim and
    /// unvalidated against the catalog
    Code(String),
}

impl SourceLanguage {
    /// The code sent to the provider: `None` requests auto-detection
    pub fn as_remote_code(&self) -> Option<&str> {
        match self {
            SourceLanguage::Auto => None,
            SourceLanguage::Code(code) => Some(code),
        }
    }
}

/// One translation request, built per button press
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub text: String,
    pub source: SourceLanguage,
    /// Target provider language code
    pub target: String,
}

/// Raw provider response for a single translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub translated_text: String,
    /// Present when the provider performed auto-detection
    pub detected_source_language: Option<String>,
}

/// Remote translation service contract.
///
/// Both operations are blocking, single-attempt calls; callers run them on a
/// worker thread. Failures carry the provider's message verbatim.
pub trait TranslationProvider {
    /// Fetch the set of supported languages
    fn list_languages(&self) -> Result<Vec<LanguageEntry>, TranslateError>;

    /// Translate `text` into `target`. `source == None` requests provider
    /// auto-detection.
    fn translate(
        &self,
        text: &str,
        source: Option<&str>,
        target: &str,
    ) -> Result<TranslationResult, TranslateError>;
}

// ============================================================================
// Background Request Handler
// ============================================================================

/// One submitted translation: the provider-level request plus the form
/// values it was built from. The worker echoes it back with the response,
/// so the recorded row always describes this submission even when the form
/// changed while the call was in flight.
#[derive(Debug, Clone)]
pub struct SubmittedTranslation {
    pub request: TranslationRequest,
    /// Display name of the target language at submission time
    pub target_name: String,
}

/// Message to send to the provider worker thread
pub enum ProviderRequest {
    FetchCatalog,
    Translate(SubmittedTranslation),
}

/// Response from the provider worker thread
pub enum ProviderResponse {
    Catalog(Result<LanguageCatalog, TranslateError>),
    Translation {
        submitted: SubmittedTranslation,
        result: Result<Translation, TranslateError>,
    },
}

/// Spawn a background thread that services provider requests.
///
/// The worker owns the process-wide catalog cache, so repeated
/// `FetchCatalog` requests hit the provider at most once. Translation
/// requests go through the [`Translator`] so input validation happens before
/// any remote call.
pub fn spawn_provider_worker(
    provider: Arc<dyn TranslationProvider + Send + Sync>,
    catalog_cache: Arc<CatalogCache>,
) -> (Sender<ProviderRequest>, Receiver<ProviderResponse>) {
    let (request_tx, request_rx) = channel::<ProviderRequest>();
    let (response_tx, response_rx) = channel::<ProviderResponse>();

    thread::spawn(move || {
        let translator = Translator::new(provider.clone());

        while let Ok(request) = request_rx.recv() {
            let response = match request {
                ProviderRequest::FetchCatalog => {
                    let result = catalog_cache
                        .get_or_fetch(|| provider.list_languages())
                        .map(Clone::clone);
                    ProviderResponse::Catalog(result)
                }
                ProviderRequest::Translate(submitted) => {
                    let result = translator.translate(&submitted.request);
                    ProviderResponse::Translation { submitted, result }
                }
            };

            if response_tx.send(response).is_err() {
                break; // Main thread dropped the receiver
            }
        }
    });

    (request_tx, response_rx)
}
