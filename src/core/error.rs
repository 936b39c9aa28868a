use std::fmt;

/// Error types for linkvet operations.
///
/// Per-URL problems (bad format, failing status, transport failure) are not
/// errors; they are reported as [`crate::core::types::ValidationOutcome`]s.
/// A `LinkVetError` means the validation machinery itself could not run.
#[derive(Debug)]
pub enum LinkVetError {
    /// IO error (config files, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// HTTP client error
    Http(reqwest::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// JSON parsing error
    Json(serde_json::Error),

    /// Invalid argument error
    InvalidArgument(String),

    /// Failure inside the validation machinery, aborts the whole batch
    Internal(String),
}

impl fmt::Display for LinkVetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkVetError::Io(err) => write!(f, "IO error: {err}"),
            LinkVetError::Config(msg) => write!(f, "Configuration error: {msg}"),
            LinkVetError::Http(err) => write!(f, "HTTP error: {err}"),
            LinkVetError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            LinkVetError::Json(err) => write!(f, "JSON parsing error: {err}"),
            LinkVetError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            LinkVetError::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for LinkVetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LinkVetError::Io(err) => Some(err),
            LinkVetError::Http(err) => Some(err),
            LinkVetError::TomlParsing(err) => Some(err),
            LinkVetError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LinkVetError {
    fn from(err: std::io::Error) -> Self {
        LinkVetError::Io(err)
    }
}

impl From<reqwest::Error> for LinkVetError {
    fn from(err: reqwest::Error) -> Self {
        LinkVetError::Http(err)
    }
}

impl From<toml::de::Error> for LinkVetError {
    fn from(err: toml::de::Error) -> Self {
        LinkVetError::TomlParsing(err)
    }
}

impl From<serde_json::Error> for LinkVetError {
    fn from(err: serde_json::Error) -> Self {
        LinkVetError::Json(err)
    }
}

/// Type alias for Results using LinkVetError
pub type Result<T> = std::result::Result<T, LinkVetError>;
