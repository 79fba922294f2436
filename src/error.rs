// Error handling module
// Defines the error taxonomy surfaced by the client

use serde_json::Value;
use thiserror::Error;

/// Diagnostic payload of a non-success HTTP response
#[derive(Debug, Clone)]
pub struct UpstreamError {
    /// HTTP status code
    pub status: u16,

    /// Canonical reason phrase for the status, if known
    pub status_text: String,

    /// URL of the request that failed
    pub url: String,

    /// Response body as received
    pub raw_text: String,

    /// Response body parsed as JSON, when it is JSON
    pub raw: Option<Value>,
}

impl UpstreamError {
    /// Build from a status and raw body. JSON parsing is best-effort.
    pub fn new(status: reqwest::StatusCode, url: impl Into<String>, raw_text: String) -> Self {
        let raw = serde_json::from_str(&raw_text).ok();
        Self {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            url: url.into(),
            raw_text,
            raw,
        }
    }

    /// Upstream `errorCode` field, if the body carries one
    pub fn error_code(&self) -> Option<&str> {
        self.raw
            .as_ref()
            .and_then(|v| v.get("errorCode"))
            .and_then(Value::as_str)
    }
}

impl std::fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.status, self.status_text, self.url)
    }
}

/// Errors returned by the client
#[derive(Error, Debug)]
pub enum EpicError {
    /// No session has been established yet
    #[error("Not authenticated: {0}")]
    NotAuthenticated(&'static str),

    /// Access and refresh tokens have both expired and no recovery is configured
    #[error("The access token and refresh token have both expired. Please authenticate with new credentials.")]
    CredentialsExpired,

    /// Token endpoint rejected the grant
    #[error("Authentication failed: {0}")]
    UpstreamAuth(UpstreamError),

    /// Resource endpoint returned a non-success status
    #[error("Epic API error: {0}")]
    UpstreamApi(UpstreamError),

    /// Transport failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Success status but the body did not match the expected shape
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Caller input rejected before any request was made
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Token endpoint returned an expiry we could not parse
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

impl EpicError {
    /// Upstream diagnostics, for either upstream variant
    pub fn upstream(&self) -> Option<&UpstreamError> {
        match self {
            EpicError::UpstreamAuth(e) | EpicError::UpstreamApi(e) => Some(e),
            _ => None,
        }
    }

    /// HTTP status of an upstream failure
    pub fn status(&self) -> Option<u16> {
        self.upstream().map(|e| e.status)
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, EpicError>;
