use serde::{Deserialize, Serialize};
use std::fmt;

/// One URL as supplied by a caller.
///
/// Callers hand over JSON lists, so an entry is not guaranteed to be a
/// string at all. Non-string entries are kept verbatim so that the failure
/// record echoes exactly what was submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UrlInput {
    Text(String),
    Other(serde_json::Value),
}

impl UrlInput {
    /// Get the URL as a string slice, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            UrlInput::Text(url) => Some(url),
            UrlInput::Other(_) => None,
        }
    }
}

impl From<String> for UrlInput {
    fn from(url: String) -> Self {
        UrlInput::Text(url)
    }
}

impl From<&str> for UrlInput {
    fn from(url: &str) -> Self {
        UrlInput::Text(url.to_string())
    }
}

impl From<serde_json::Value> for UrlInput {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(url) => UrlInput::Text(url),
            other => UrlInput::Other(other),
        }
    }
}

impl fmt::Display for UrlInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlInput::Text(url) => write!(f, "{url}"),
            UrlInput::Other(value) => write!(f, "{value}"),
        }
    }
}

/// Result of validating a single URL.
///
/// Serializes to the failure record shape
/// `{"url": ..., "statusCode": ..., "error": ...}`; `statusCode` is only
/// present for status failures.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ValidationOutcome {
    /// Well-formed and answered with a success status
    Pass,
    /// Not a well-formed absolute HTTP(S) URL, no request was made
    FormatFailure { url: UrlInput, error: String },
    /// Reachable, but the status code is outside the success set
    StatusFailure {
        url: UrlInput,
        #[serde(rename = "statusCode")]
        status_code: u16,
        error: String,
    },
    /// The request failed without an interpretable status code
    TransportFailure { url: UrlInput, error: String },
}

impl ValidationOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, ValidationOutcome::Pass)
    }

    pub fn is_failure(&self) -> bool {
        !self.is_pass()
    }

    /// The URL this outcome is about, `None` for [`ValidationOutcome::Pass`].
    pub fn url(&self) -> Option<&UrlInput> {
        match self {
            ValidationOutcome::Pass => None,
            ValidationOutcome::FormatFailure { url, .. }
            | ValidationOutcome::StatusFailure { url, .. }
            | ValidationOutcome::TransportFailure { url, .. } => Some(url),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            ValidationOutcome::StatusFailure { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ValidationOutcome::Pass => None,
            ValidationOutcome::FormatFailure { error, .. }
            | ValidationOutcome::StatusFailure { error, .. }
            | ValidationOutcome::TransportFailure { error, .. } => Some(error),
        }
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationOutcome::Pass => write!(f, "OK"),
            ValidationOutcome::StatusFailure {
                url,
                status_code,
                error,
            } => write!(f, "{status_code} - {url} - {error}"),
            ValidationOutcome::FormatFailure { url, error }
            | ValidationOutcome::TransportFailure { url, error } => write!(f, "{url} - {error}"),
        }
    }
}

/// Every non-passing outcome of one batch, in completion order.
pub type BatchResult = Vec<ValidationOutcome>;
