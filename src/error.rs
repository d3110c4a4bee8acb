//! Error types for Pivnet API operations.

use thiserror::Error;

/// Errors that can occur during Pivnet API operations.
#[derive(Debug, Error)]
pub enum PivnetError {
    /// Configuration is missing or incomplete.
    #[error("Pivnet configuration required: {0}")]
    ConfigMissing(String),

    /// The caller supplied an argument the API cannot act on.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The server answered with a status other than the one the call expects.
    #[error(
        "Pivnet returned status code: {status_code} for the request - expected {expected_status_code}{}",
        server_message_suffix(.message)
    )]
    UnexpectedStatus {
        status_code: u16,
        expected_status_code: u16,
        message: Option<String>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    EncodeError(#[source] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Rendering CLI output failed.
    #[error("Failed to render output: {0}")]
    OutputError(String),
}

impl PivnetError {
    /// The HTTP status the server returned, if the error came from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status_code, .. } => Some(*status_code),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

fn server_message_suffix(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(": {m}"),
        None => String::new(),
    }
}

impl From<serde_yaml::Error> for PivnetError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::OutputError(err.to_string())
    }
}

impl From<std::io::Error> for PivnetError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError(err.to_string())
    }
}

/// Result type alias for Pivnet operations.
pub type Result<T> = core::result::Result<T, PivnetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_status_without_message() {
        let err = PivnetError::UnexpectedStatus {
            status_code: 418,
            expected_status_code: 204,
            message: None,
        };
        assert_eq!(
            err.to_string(),
            "Pivnet returned status code: 418 for the request - expected 204"
        );
        assert_eq!(err.status_code(), Some(418));
    }

    #[test]
    fn test_unexpected_status_with_message() {
        let err = PivnetError::UnexpectedStatus {
            status_code: 404,
            expected_status_code: 200,
            message: Some("release not found".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Pivnet returned status code: 404 for the request - expected 200: release not found"
        );
    }
}
