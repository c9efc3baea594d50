//! Translation contract checks through the public API

use std::sync::Arc;

use lingopad::error::TranslateError;
use lingopad::provider::{SourceLanguage, TranslationRequest};
use lingopad::translator::Translator;

use super::support::ScriptedProvider;

fn request(text: &str, source: SourceLanguage, target: &str) -> TranslationRequest {
    TranslationRequest {
        text: text.to_string(),
        source,
        target: target.to_string(),
    }
}

#[test]
fn test_blank_text_is_rejected_without_a_remote_call() {
    let provider = Arc::new(ScriptedProvider::new());
    let translator = Translator::new(provider.clone());

    let err = translator
        .translate(&request("  \n ", SourceLanguage::Auto, "hi"))
        .unwrap_err();

    assert_eq!(err, TranslateError::EmptyInput);
    assert_eq!(provider.translate_call_count(), 0);
}

#[test]
fn test_auto_detection_fills_in_the_source_code() {
    let provider = Arc::new(ScriptedProvider::new().detecting("en").replying("नमस्ते"));
    let translator = Translator::new(provider.clone());

    let translation = translator
        .translate(&request("Hello", SourceLanguage::Auto, "hi"))
        .unwrap();

    assert_eq!(translation.translated_text, "नमस्ते");
    assert_eq!(translation.source_code.as_deref(), Some("en"));
    // Auto means the request itself carried no source parameter
    assert_eq!(*provider.last_source.lock().unwrap(), Some(None));
}

#[test]
fn test_explicit_source_is_forwarded_and_echoed() {
    let provider = Arc::new(ScriptedProvider::new());
    let translator = Translator::new(provider.clone());

    let translation = translator
        .translate(&request("Bonjour", SourceLanguage::Code("fr".into()), "en"))
        .unwrap();

    assert_eq!(
        *provider.last_source.lock().unwrap(),
        Some(Some("fr".to_string()))
    );
    assert_eq!(translation.source_code.as_deref(), Some("fr"));
}

#[test]
fn test_remote_failure_is_a_single_attempt() {
    let provider = Arc::new(ScriptedProvider::new().failing("HTTP 403: API key rejected"));
    let translator = Translator::new(provider.clone());

    let err = translator
        .translate(&request("Hello", SourceLanguage::Auto, "hi"))
        .unwrap_err();

    assert_eq!(
        err,
        TranslateError::Provider("HTTP 403: API key rejected".to_string())
    );
    assert_eq!(provider.translate_call_count(), 1);
}
