//! Error types for the echo journal.

use thiserror::Error;

/// Result type alias using echo's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for AI gateway invocations.
pub type AiResult<T> = std::result::Result<T, AiError>;

/// Core error type for echo operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Inference/generation failed
    #[error("Inference error: {0}")]
    Inference(String),

    /// Journal storage read or write failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Gateway configuration rejected
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<AiError> for Error {
    fn from(e: AiError) -> Self {
        Error::Inference(e.to_string())
    }
}

/// Failure of a single AI gateway invocation.
///
/// Neither variant escapes the entry processor or the insights aggregator;
/// both are resolved to documented fallback values at that boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    /// No API credential configured. The request was never sent.
    #[error("AI credential not configured")]
    CredentialMissing,

    /// The service answered with a non-success status, timed out, could not
    /// be reached, or returned a body that is not JSON.
    #[error("{}", upstream_message(.status, .message))]
    UpstreamFailure {
        status: Option<u16>,
        message: String,
    },
}

impl AiError {
    /// Upstream failure carrying the HTTP status the service answered with.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        AiError::UpstreamFailure {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Upstream failure with no HTTP status (timeout, transport, bad body).
    pub fn upstream(message: impl Into<String>) -> Self {
        AiError::UpstreamFailure {
            status: None,
            message: message.into(),
        }
    }

    /// True when the failure is the configuration-absent case.
    pub fn is_credential_missing(&self) -> bool {
        matches!(self, AiError::CredentialMissing)
    }
}

fn upstream_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("Upstream failure (status {}): {}", code, message),
        None => format!("Upstream failure: {}", message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_storage() {
        let err = Error::Storage("disk full".to_string());
        assert_eq!(err.to_string(), "Storage error: disk full");
    }

    #[test]
    fn test_error_display_invalid_input() {
        let err = Error::InvalidInput("Content is required".to_string());
        assert_eq!(err.to_string(), "Invalid input: Content is required");
    }

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("bad url".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad url");
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<i32>("not a number").unwrap_err();
        let err: Error = json_err.into();
        match err {
            Error::Serialization(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Serialization error"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("access denied"));
    }

    #[test]
    fn test_ai_error_display_with_status() {
        let err = AiError::status(503, "model loading");
        assert_eq!(err.to_string(), "Upstream failure (status 503): model loading");
    }

    #[test]
    fn test_ai_error_display_without_status() {
        let err = AiError::upstream("request timed out");
        assert_eq!(err.to_string(), "Upstream failure: request timed out");
    }

    #[test]
    fn test_ai_error_credential_missing() {
        let err = AiError::CredentialMissing;
        assert!(err.is_credential_missing());
        assert!(!AiError::upstream("x").is_credential_missing());
        assert_eq!(err.to_string(), "AI credential not configured");
    }

    #[test]
    fn test_ai_error_converts_to_inference_error() {
        let err: Error = AiError::status(500, "boom").into();
        assert!(matches!(err, Error::Inference(_)));
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
        assert_send::<AiError>();
        assert_sync::<AiError>();
    }
}
