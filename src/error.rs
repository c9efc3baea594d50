//! Error taxonomy for the translation workflow.
//!
//! Every failure is terminal for the action that produced it: there are no
//! retries, no partial results and no fallback provider. The UI surfaces the
//! message in the same request cycle.

use thiserror::Error;

/// Errors that can occur while fetching the catalog, translating text or
/// recording a result.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TranslateError {
    /// Input text was empty (or all whitespace) after trimming.
    /// No remote call is made for this case.
    #[error("Input text is empty")]
    EmptyInput,

    /// The provider's language list could not be fetched.
    /// The catalog stays empty for the rest of the process.
    #[error("Failed to fetch supported languages: {0}")]
    CatalogUnavailable(String),

    /// Any remote-call failure: network, auth, quota, invalid language code.
    /// The underlying message is passed through verbatim.
    #[error("Translation failed: {0}")]
    Provider(String),

    /// Writing the translation log failed. The translation itself succeeded.
    #[error("Failed to record translation: {0}")]
    RecordingFailed(String),
}
