//! Provider credential loading.
//!
//! The API key comes either directly from the `LINGOPAD_API_KEY` environment
//! variable or from a JSON credential file whose path is given by
//! `LINGOPAD_CREDENTIALS`. Startup fails fast when neither yields a key; the
//! application never runs in a degraded mode without a reachable provider.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Environment variable holding the API key directly
pub const API_KEY_ENV: &str = "LINGOPAD_API_KEY";

/// Environment variable holding the path to a JSON credential file
pub const CREDENTIALS_FILE_ENV: &str = "LINGOPAD_CREDENTIALS";

#[derive(Debug, Clone, Error)]
pub enum CredentialsError {
    #[error(
        "No API key configured. Set {API_KEY_ENV}, or point {CREDENTIALS_FILE_ENV} \
         at a JSON file containing an \"api_key\" field."
    )]
    Missing,

    #[error("Failed to read credential file {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("Credential file {path} is invalid: {message}")]
    Invalid { path: String, message: String },

    #[error("Credential file {path} has an empty api_key")]
    EmptyKey { path: String },
}

/// Shape of the JSON credential file
#[derive(Debug, Deserialize)]
struct CredentialFile {
    api_key: String,
}

/// Provider API credentials
#[derive(Debug, Clone)]
pub struct ApiCredentials {
    api_key: String,
}

impl ApiCredentials {
    /// Load credentials from the environment: a direct key wins over a
    /// credential file.
    pub fn load() -> Result<Self, CredentialsError> {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                return Ok(Self::from_key(key.trim().to_string()));
            }
        }

        if let Ok(path) = std::env::var(CREDENTIALS_FILE_ENV) {
            if !path.trim().is_empty() {
                return Self::load_from_file(Path::new(path.trim()));
            }
        }

        Err(CredentialsError::Missing)
    }

    /// Load credentials from a JSON file with an `api_key` field
    pub fn load_from_file(path: &Path) -> Result<Self, CredentialsError> {
        let display = path.display().to_string();

        let content =
            std::fs::read_to_string(path).map_err(|e| CredentialsError::Unreadable {
                path: display.clone(),
                message: e.to_string(),
            })?;

        let parsed: CredentialFile =
            serde_json::from_str(&content).map_err(|e| CredentialsError::Invalid {
                path: display.clone(),
                message: e.to_string(),
            })?;

        if parsed.api_key.trim().is_empty() {
            return Err(CredentialsError::EmptyKey { path: display });
        }

        Ok(Self::from_key(parsed.api_key.trim().to_string()))
    }

    pub fn from_key(api_key: String) -> Self {
        Self { api_key }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}
