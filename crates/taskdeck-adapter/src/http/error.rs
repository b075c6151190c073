/*
[INPUT]:  Transport failures and error responses from the task service
[OUTPUT]: Normalized, human-readable error types
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new operations or changing surfaced messages
*/

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

pub const TIMEOUT_MESSAGE: &str = "Request timed out. Please try again.";
pub const UNREACHABLE_MESSAGE: &str =
    "Cannot connect to the task service. Please ensure it is running.";

/// Main error type for the task client
#[derive(Error, Debug)]
pub enum TaskError {
    /// The call did not complete within the configured window
    #[error("Request timed out. Please try again.")]
    Timeout { source: reqwest::Error },

    /// No response was received at all
    #[error("Cannot connect to the task service. Please ensure it is running.")]
    Unreachable { source: reqwest::Error },

    /// The service answered with a failure status
    #[error("{message}")]
    Server { status: StatusCode, message: String },

    /// Anything not specially classified
    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),

    /// Base URL cannot carry path segments
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl TaskError {
    /// Classify a transport error raised while sending or reading a response.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TaskError::Timeout { source: err }
        } else if err.is_connect() || (err.is_request() && err.status().is_none()) {
            TaskError::Unreachable { source: err }
        } else {
            TaskError::Http(err)
        }
    }

    /// Build a server error from a failure response body.
    ///
    /// The body's `message` field is used verbatim when present and non-empty.
    pub fn from_response_body(status: StatusCode, body: &str, operation: Operation) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            message: Option<String>,
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| operation.fallback_message().to_string());

        TaskError::Server { status, message }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, TaskError::Timeout { .. })
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, TaskError::Unreachable { .. })
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TaskError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Client operations, used to pick the fallback message for server errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Search,
    Create,
    Execute,
    RecordExecution,
    Delete,
}

impl Operation {
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::List => "Failed to fetch tasks",
            Operation::Get => "Failed to fetch task",
            Operation::Search => "Failed to search tasks",
            Operation::Create => "Failed to create task",
            Operation::Execute => "Failed to execute task",
            Operation::RecordExecution => "Failed to record execution",
            Operation::Delete => "Failed to delete task",
        }
    }
}

/// Result type alias for task client operations
pub type Result<T> = std::result::Result<T, TaskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_prefers_body_message() {
        let err = TaskError::from_response_body(
            StatusCode::BAD_REQUEST,
            r#"{"message":"id already exists"}"#,
            Operation::Create,
        );
        assert_eq!(err.to_string(), "id already exists");
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn server_error_falls_back_per_operation() {
        let plain = TaskError::from_response_body(
            StatusCode::BAD_REQUEST,
            "Unsafe command detected",
            Operation::Create,
        );
        assert_eq!(plain.to_string(), "Failed to create task");

        let empty = TaskError::from_response_body(
            StatusCode::INTERNAL_SERVER_ERROR,
            "",
            Operation::List,
        );
        assert_eq!(empty.to_string(), "Failed to fetch tasks");

        let blank_message = TaskError::from_response_body(
            StatusCode::NOT_FOUND,
            r#"{"message":""}"#,
            Operation::Delete,
        );
        assert_eq!(blank_message.to_string(), "Failed to delete task");
    }

    #[test]
    fn fallback_messages_match_operations() {
        assert_eq!(Operation::Execute.fallback_message(), "Failed to execute task");
        assert_eq!(Operation::Delete.fallback_message(), "Failed to delete task");
    }
}
