//! Supported-language catalog.
//!
//! The catalog maps human-readable language names (unique) to provider codes.
//! It is fetched from the provider once per process and memoized; there is no
//! expiry or invalidation. A failed fetch memoizes an empty catalog so the
//! provider is never asked again for the lifetime of the process.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::error::TranslateError;

/// Label recorded when a detected language code has no catalog entry
pub const AUTO_DETECTED_LABEL: &str = "Auto-detected";

/// One (name, code) pair reported by the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    pub name: String,
    pub code: String,
}

/// Mapping from language name to provider code.
///
/// Backed by a `BTreeMap` so picker lists come out in a stable alphabetical
/// order regardless of the order the provider returned them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageCatalog {
    by_name: BTreeMap<String, String>,
}

impl LanguageCatalog {
    /// Build a catalog from provider entries. Duplicate names keep the first
    /// entry seen.
    pub fn from_entries(entries: Vec<LanguageEntry>) -> Self {
        let mut by_name = BTreeMap::new();
        for entry in entries {
            by_name.entry(entry.name).or_insert(entry.code);
        }
        Self { by_name }
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Language names in alphabetical order (for the pickers)
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    /// Look up the provider code for a language name
    pub fn code_for_name(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }

    /// Look up the display name for a provider code (linear scan; the catalog
    /// is small and this only runs once per recorded translation)
    pub fn name_for_code(&self, code: &str) -> Option<&str> {
        self.by_name
            .iter()
            .find(|(_, c)| c.as_str() == code)
            .map(|(name, _)| name.as_str())
    }

    /// Resolve a detected source code for display in the log. Codes without a
    /// catalog entry fall back to the literal "Auto-detected" label, as do
    /// results where the provider reported no detection at all.
    pub fn resolve_source_name(&self, detected_code: Option<&str>) -> String {
        detected_code
            .and_then(|code| self.name_for_code(code))
            .map(str::to_string)
            .unwrap_or_else(|| AUTO_DETECTED_LABEL.to_string())
    }
}

/// Compute-once-on-first-access cache for the language catalog.
///
/// Guards the single fetch with `OnceLock` so concurrent first callers cannot
/// race it. Both outcomes are memoized: a successful fetch keeps the catalog
/// for the process lifetime, and a failure keeps an empty catalog plus the
/// provider's message. Restarting the application is the only retry.
#[derive(Debug, Default)]
pub struct CatalogCache {
    cell: OnceLock<Result<LanguageCatalog, String>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the memoized catalog, running `fetch` only on the first call.
    pub fn get_or_fetch<F>(&self, fetch: F) -> Result<&LanguageCatalog, TranslateError>
    where
        F: FnOnce() -> Result<Vec<LanguageEntry>, TranslateError>,
    {
        let state = self.cell.get_or_init(|| match fetch() {
            Ok(entries) => Ok(LanguageCatalog::from_entries(entries)),
            Err(e) => {
                tracing::warn!("Language catalog fetch failed: {}", e);
                Err(e.to_string())
            }
        });

        match state {
            Ok(catalog) => Ok(catalog),
            Err(message) => Err(TranslateError::CatalogUnavailable(message.clone())),
        }
    }

    /// The cached catalog, if the fetch has already happened and succeeded
    pub fn get(&self) -> Option<&LanguageCatalog> {
        match self.cell.get() {
            Some(Ok(catalog)) => Some(catalog),
            _ => None,
        }
    }
}
