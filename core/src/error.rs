use thiserror::Error;

/// Error types for the fallible surfaces of the crate.
///
/// Most of the crate deliberately does not fail: the scanner,
/// formatter, and validators are total functions, and both resolvers
/// contain every retrieval failure behind the fallback policy. These
/// variants exist for the one path that does surface errors, the
/// registry's remote-endpoint strategy.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("HTTP request to '{url}' failed: {reason}")]
    Fetch { url: String, reason: String },
    #[error("Unexpected status {status} from '{url}'")]
    UnexpectedStatus { url: String, status: u16 },
    #[error("Invalid response body: {0}")]
    InvalidResponse(String),
}

/// Result type alias for theme operations
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    pub(crate) fn fetch(url: impl Into<String>, err: impl std::fmt::Display) -> Self {
        ThemeError::Fetch {
            url: url.into(),
            reason: err.to_string(),
        }
    }
}
