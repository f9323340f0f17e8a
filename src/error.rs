//! Error types for backend round trips and local persistence.
//!
//! Three failure classes reach the command surface: transport (the request
//! never completed), HTTP (non-2xx, optionally carrying an `{ "error" }`
//! body), and decode (the body wasn't the expected shape). None are retried;
//! callers log and abort the operation.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// Message fit for the login screen's single error banner: the server's
    /// `error` string when one came back, a generic network line otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Api { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Api { .. } => "Unable to sign in. Check credentials.".to_string(),
            ApiError::Http(_) => {
                "Network error. Make sure the API server is running.".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Errors from the on-disk session store.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Could not find home directory")]
    NoHomeDir,

    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid stored record: {0}")]
    Invalid(#[from] serde_json::Error),
}
