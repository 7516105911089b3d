//! HTTP implementation of [`Backend`] using `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::backend::{ApiError, Backend};
use super::types::{
    ErrorBody, LoginRequest, LoginResponse, QuestionsEnvelope, RegisterRequest, SubmitEnvelope,
    TopicsEnvelope,
};
use crate::core::content::Topic;
use crate::core::quiz::{Question, QuizMode, ResultSubmission};

pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("Falling back to default HTTP client: {}", e);
                reqwest::Client::new()
            });
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and decode a JSON body, mapping non-2xx responses to
    /// `ApiError::Api` with the server's `error` text when it provides one.
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Backend response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| fallback.to_string());
            warn!("Backend error: {} - {}", status, body);
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

/// Query parameters selecting a question set.
fn question_query(mode: QuizMode) -> Vec<(&'static str, String)> {
    match mode {
        QuizMode::Quick { limit } => vec![("random", "true".to_string()), ("limit", limit.to_string())],
        QuizMode::Category(c) => vec![("category", c.as_str().to_string())],
    }
}

/// `success: false` with a 2xx status is still a rejection.
fn rejected(status: u16, error: Option<String>, fallback: &str) -> ApiError {
    ApiError::Api {
        status,
        message: error.unwrap_or_else(|| fallback.to_string()),
    }
}

#[async_trait]
impl Backend for HttpBackend {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_topics(&self) -> Result<Vec<Topic>, ApiError> {
        info!("Fetching topics from {}", self.base_url);
        let envelope: TopicsEnvelope = self
            .send_json(self.client.get(self.url("/api/topics")), "Failed to load topics")
            .await?;
        if !envelope.success {
            return Err(rejected(200, envelope.error, "Failed to load topics"));
        }
        info!("Fetched {} topics", envelope.topics.len());
        Ok(envelope.topics)
    }

    async fn fetch_questions(&self, mode: QuizMode) -> Result<Vec<Question>, ApiError> {
        info!("Fetching questions: mode={:?}", mode);
        let request = self
            .client
            .get(self.url("/api/questions"))
            .query(&question_query(mode));
        let envelope: QuestionsEnvelope = self.send_json(request, "Failed to load questions").await?;
        if !envelope.success {
            return Err(rejected(200, envelope.error, "Failed to load questions"));
        }
        if envelope.questions.is_empty() {
            return Err(ApiError::Empty("questions"));
        }
        info!("Fetched {} questions", envelope.questions.len());
        Ok(envelope.questions)
    }

    async fn submit_result(
        &self,
        token: Option<&str>,
        submission: &ResultSubmission,
    ) -> Result<String, ApiError> {
        info!(
            "Submitting result: quiz_type={}, score={}/{}",
            submission.quiz_type, submission.summary.correct, submission.summary.total_questions
        );
        let mut request = self.client.post(self.url("/api/quiz-attempts")).json(submission);
        if let Some(token) = token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }
        let envelope: SubmitEnvelope = self.send_json(request, "Failed to save result").await?;
        if !envelope.success {
            return Err(rejected(200, envelope.error, "Failed to save result"));
        }
        envelope
            .attempt_id
            .ok_or_else(|| ApiError::Parse("missing attemptId".to_string()))
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        info!("Logging in as {}", request.email);
        self.send_json(
            self.client.post(self.url("/api/user/login")).json(request),
            "Login failed",
        )
        .await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        info!("Registering {}", request.email);
        let _: serde_json::Value = self
            .send_json(
                self.client.post(self.url("/api/user/register")).json(request),
                "Registration failed",
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::quiz::Category;

    #[test]
    fn test_question_query_quick() {
        let q = question_query(QuizMode::Quick { limit: 20 });
        assert_eq!(
            q,
            vec![("random", "true".to_string()), ("limit", "20".to_string())]
        );
    }

    #[test]
    fn test_question_query_category() {
        let q = question_query(QuizMode::Category(Category::RulesOfRoad));
        assert_eq!(q, vec![("category", "rules_of_road".to_string())]);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let backend = HttpBackend::new("http://localhost:1/", Duration::from_secs(1));
        assert_eq!(backend.url("/api/topics"), "http://localhost:1/api/topics");
    }

    #[test]
    fn test_user_message_hides_transport_detail() {
        let err = ApiError::Network("dns failure for host".to_string());
        assert_eq!(err.user_message(), "Could not connect to server");
        let err = ApiError::Api {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.user_message(), "Invalid credentials");
    }
}
