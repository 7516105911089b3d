use std::fmt;

use async_trait::async_trait;

use super::types::{LoginRequest, LoginResponse, RegisterRequest};
use crate::core::content::Topic;
use crate::core::quiz::{Question, QuizMode, ResultSubmission};

/// Errors that can occur while talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport failure (timeout, DNS, connection refused).
    Network(String),
    /// The server rejected the request. `message` comes from its error body.
    Api { status: u16, message: String },
    /// The response body did not have the expected shape.
    Parse(String),
    /// The response was well-formed but held nothing usable.
    Empty(&'static str),
}

impl ApiError {
    /// Short text suitable for a notice shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Could not connect to server".to_string(),
            ApiError::Api { message, .. } => message.clone(),
            ApiError::Parse(_) => "The server sent an unexpected response".to_string(),
            ApiError::Empty(what) => format!("No {what} available"),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
            ApiError::Empty(what) => write!(f, "empty response: no {what}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Everything the app needs from the remote service.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Returns the name of the backend (for logs).
    fn name(&self) -> &str;

    async fn fetch_topics(&self) -> Result<Vec<Topic>, ApiError>;

    /// Fetch the question set for `mode`. An empty set is an error.
    async fn fetch_questions(&self, mode: QuizMode) -> Result<Vec<Question>, ApiError>;

    /// Upload a finished attempt; returns the server's acknowledgement id.
    async fn submit_result(
        &self,
        token: Option<&str>,
        submission: &ResultSubmission,
    ) -> Result<String, ApiError>;

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError>;
}
