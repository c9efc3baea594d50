//! Translation log behavior on a real filesystem

use std::fs;
use std::path::PathBuf;

use lingopad::recorder::{truncate_original, LogRow, ResultRecorder, ELLIPSIS, TRUNCATE_LEN};

use super::support::fixture_catalog;

fn temp_log_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("lingopad-it-{}-{}.csv", name, std::process::id()));
    let _ = fs::remove_file(&path);
    path
}

fn read_lines(path: &PathBuf) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_log_grows_by_one_row_per_record() {
    let path = temp_log_path("append");
    let recorder = ResultRecorder::new(path.clone());
    let catalog = fixture_catalog();

    recorder
        .record(&LogRow::new("Hello", Some("en"), "Hindi", "नमस्ते", &catalog))
        .unwrap();
    recorder
        .record(&LogRow::new("Bye", Some("en"), "German", "Tschüss", &catalog))
        .unwrap();

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 3, "header plus two data rows");
    assert_eq!(
        lines[0],
        "Original Text,Source Language,Target Language,Translated Text"
    );
    assert_eq!(lines[1], "Hello,English,Hindi,नमस्ते");
    assert_eq!(lines[2], "Bye,English,German,Tschüss");

    let _ = fs::remove_file(&path);
}

#[test]
fn test_header_is_not_repeated_across_recorders() {
    let path = temp_log_path("header");
    let catalog = fixture_catalog();

    // Two recorder instances, as if the app restarted between runs
    for text in ["first run", "second run"] {
        let recorder = ResultRecorder::new(path.clone());
        recorder
            .record(&LogRow::new(text, Some("en"), "French", "...", &catalog))
            .unwrap();
    }

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines.iter().filter(|l| l.starts_with("Original")).count(), 1);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_long_originals_are_cut_at_one_hundred_chars() {
    let long = "x".repeat(250);
    let cut = truncate_original(&long);

    assert_eq!(cut.chars().count(), TRUNCATE_LEN + ELLIPSIS.chars().count());
    assert!(cut.ends_with(ELLIPSIS));

    // Exactly at the limit there is nothing to cut
    let exact = "y".repeat(TRUNCATE_LEN);
    assert_eq!(truncate_original(&exact), exact);
}

#[test]
fn test_unknown_source_code_recorded_as_auto_detected() {
    let catalog = fixture_catalog();
    let row = LogRow::new("Hello", Some("zz"), "Hindi", "नमस्ते", &catalog);

    assert_eq!(row.source_language, "Auto-detected");
}

#[test]
fn test_fields_with_commas_survive_a_round_trip() {
    let path = temp_log_path("quoting");
    let recorder = ResultRecorder::new(path.clone());
    let catalog = fixture_catalog();

    recorder
        .record(&LogRow::new(
            "Hello, world",
            Some("en"),
            "German",
            "Hallo \"Welt\"",
            &catalog,
        ))
        .unwrap();

    let lines = read_lines(&path);
    assert_eq!(
        lines[1],
        "\"Hello, world\",English,German,\"Hallo \"\"Welt\"\"\""
    );

    let _ = fs::remove_file(&path);
}
