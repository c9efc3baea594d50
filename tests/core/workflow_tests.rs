//! End-to-end flows through the worker thread, catalog and log

use std::fs;
use std::sync::Arc;
use std::time::Duration;

use lingopad::catalog::CatalogCache;
use lingopad::provider::{
    spawn_provider_worker, ProviderRequest, ProviderResponse, SourceLanguage, SubmittedTranslation,
    TranslationRequest,
};
use lingopad::recorder::{LogRow, ResultRecorder};

use super::support::ScriptedProvider;

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

fn submission(text: &str, source: SourceLanguage, target: &str, target_name: &str) -> SubmittedTranslation {
    SubmittedTranslation {
        request: TranslationRequest {
            text: text.to_string(),
            source,
            target: target.to_string(),
        },
        target_name: target_name.to_string(),
    }
}

#[test]
fn test_hello_auto_to_hindi_lands_in_the_log() {
    let provider = Arc::new(ScriptedProvider::new().detecting("en").replying("नमस्ते"));
    let cache = Arc::new(CatalogCache::new());
    let (tx, rx) = spawn_provider_worker(provider.clone(), cache.clone());

    tx.send(ProviderRequest::FetchCatalog).unwrap();
    let catalog = match rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        ProviderResponse::Catalog(result) => result.unwrap(),
        ProviderResponse::Translation { .. } => panic!("expected a catalog response"),
    };

    let target_code = catalog.code_for_name("Hindi").unwrap();
    tx.send(ProviderRequest::Translate(submission(
        "Hello",
        SourceLanguage::Auto,
        target_code,
        "Hindi",
    )))
    .unwrap();
    let (submitted, translation) = match rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        ProviderResponse::Translation { submitted, result } => (submitted, result.unwrap()),
        ProviderResponse::Catalog(_) => panic!("expected a translation response"),
    };

    let row = LogRow::new(
        &submitted.request.text,
        translation.source_code.as_deref(),
        &submitted.target_name,
        &translation.translated_text,
        &catalog,
    );
    assert_eq!(row.source_language, "English");
    assert_eq!(row.target_language, "Hindi");
    assert_eq!(row.translated_text, "नमस्ते");

    let path = std::env::temp_dir().join(format!("lingopad-it-flow-{}.csv", std::process::id()));
    let _ = fs::remove_file(&path);
    ResultRecorder::new(path.clone()).record(&row).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.lines().any(|l| l == "Hello,English,Hindi,नमस्ते"));

    let _ = fs::remove_file(&path);
}

#[test]
fn test_row_is_built_from_the_echoed_submission_not_later_form_state() {
    let provider = Arc::new(ScriptedProvider::new().detecting("en").replying("नमस्ते"));
    let cache = Arc::new(CatalogCache::new());
    let (tx, rx) = spawn_provider_worker(provider.clone(), cache.clone());

    tx.send(ProviderRequest::FetchCatalog).unwrap();
    let catalog = match rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        ProviderResponse::Catalog(result) => result.unwrap(),
        ProviderResponse::Translation { .. } => panic!("expected a catalog response"),
    };

    tx.send(ProviderRequest::Translate(submission(
        "Hello",
        SourceLanguage::Auto,
        "hi",
        "Hindi",
    )))
    .unwrap();

    // Simulate the form changing while the call is in flight: the app
    // builds the row from what the worker echoes back, so these fields
    // must match the submission regardless of any later edits.
    let form_text_now = "Goodbye".to_string();
    let form_target_now = "German".to_string();

    let (submitted, translation) = match rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        ProviderResponse::Translation { submitted, result } => (submitted, result.unwrap()),
        ProviderResponse::Catalog(_) => panic!("expected a translation response"),
    };

    assert_eq!(submitted.request.text, "Hello");
    assert_eq!(submitted.target_name, "Hindi");

    let row = LogRow::new(
        &submitted.request.text,
        translation.source_code.as_deref(),
        &submitted.target_name,
        &translation.translated_text,
        &catalog,
    );
    assert_eq!(row.original_text, "Hello");
    assert_eq!(row.target_language, "Hindi");
    assert_ne!(row.original_text, form_text_now);
    assert_ne!(row.target_language, form_target_now);
}

#[test]
fn test_worker_serves_repeat_catalog_requests_from_cache() {
    let provider = Arc::new(ScriptedProvider::new());
    let cache = Arc::new(CatalogCache::new());
    let (tx, rx) = spawn_provider_worker(provider.clone(), cache);

    for _ in 0..3 {
        tx.send(ProviderRequest::FetchCatalog).unwrap();
        match rx.recv_timeout(RECV_TIMEOUT).unwrap() {
            ProviderResponse::Catalog(result) => assert!(result.is_ok()),
            ProviderResponse::Translation { .. } => panic!("expected a catalog response"),
        }
    }

    assert_eq!(provider.catalog_call_count(), 1);
}

#[test]
fn test_worker_rejects_empty_text_without_touching_the_provider() {
    let provider = Arc::new(ScriptedProvider::new());
    let cache = Arc::new(CatalogCache::new());
    let (tx, rx) = spawn_provider_worker(provider.clone(), cache);

    tx.send(ProviderRequest::Translate(submission(
        "   ",
        SourceLanguage::Auto,
        "hi",
        "Hindi",
    )))
    .unwrap();

    match rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        ProviderResponse::Translation { result, .. } => assert!(result.is_err()),
        ProviderResponse::Catalog(_) => panic!("expected a translation response"),
    }
    assert_eq!(provider.translate_call_count(), 0);
}
