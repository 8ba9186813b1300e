use std::io;

use thiserror::Error;

/// Library-wide error type for prompt-enhancer operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The request never produced an HTTP response (DNS, connect, timeout, reset).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The remote service answered with a non-success status.
    #[error("Service returned status {status}: {body}")]
    Service { status: u16, body: String },

    /// The remote service answered 2xx with a body of an unexpected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The clarification step did not return a `{"questions": [...]}` object.
    #[error("Failed to parse clarifying questions: {0}")]
    ClarificationParse(String),

    /// Answers supplied to `resume` do not line up with the questions asked.
    #[error("Expected {expected} answers but received {actual}")]
    AnswerCountMismatch { expected: usize, actual: usize },

    /// A required prompt component is empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Input validation failure.
    #[error("{0}")]
    Validation(String),

    /// A workflow operation was invoked from a state that does not allow it.
    #[error("Cannot {operation} while workflow is {state}")]
    InvalidTransition { state: &'static str, operation: &'static str },

    /// Configuration or environment issue.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Required environment variable is not set.
    #[error("Environment variable '{0}' is not set")]
    EnvironmentVariableMissing(String),

    /// Prompt template could not be loaded or rendered.
    #[error("Template '{template}' failed: {reason}")]
    Template { template: String, reason: String },

    /// A background workflow task ended without producing a result.
    #[error("Background task failed: {0}")]
    TaskFailed(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Whether repeating the same remote call may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::Transport(_) => true,
            AppError::Service { status, .. } => {
                *status == 408 || *status == 429 || *status >= 500
            }
            _ => false,
        }
    }

    /// HTTP status attached to the error, if the remote answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_errors_are_retryable() {
        assert!(AppError::Transport("connection reset".into()).is_retryable());
        assert!(AppError::Service { status: 429, body: String::new() }.is_retryable());
        assert!(AppError::Service { status: 503, body: String::new() }.is_retryable());
        assert!(AppError::Service { status: 408, body: String::new() }.is_retryable());
    }

    #[test]
    fn client_and_local_errors_are_not_retryable() {
        assert!(!AppError::Service { status: 401, body: String::new() }.is_retryable());
        assert!(!AppError::MalformedResponse("no choices".into()).is_retryable());
        assert!(!AppError::ClarificationParse("eof".into()).is_retryable());
        assert!(!AppError::AnswerCountMismatch { expected: 2, actual: 1 }.is_retryable());
    }

    #[test]
    fn service_error_message_carries_status_and_body() {
        let err = AppError::Service { status: 401, body: "invalid api key".into() };
        assert_eq!(err.to_string(), "Service returned status 401: invalid api key");
        assert_eq!(err.status(), Some(401));
    }
}
