//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{ApiError, Backend, LoginRequest, LoginResponse, RegisterRequest};
use crate::core::content::{ContentBlock, Topic};
use crate::core::identity::{AuthContext, User, UserStats};
use crate::core::quiz::{Question, QuizMode, ResultSubmission};
use crate::core::state::App;

/// A backend for tests that never touches the network.
pub struct NoopBackend;

#[async_trait]
impl Backend for NoopBackend {
    fn name(&self) -> &str {
        "noop"
    }

    async fn fetch_topics(&self) -> Result<Vec<Topic>, ApiError> {
        Ok(Vec::new())
    }

    async fn fetch_questions(&self, _mode: QuizMode) -> Result<Vec<Question>, ApiError> {
        Err(ApiError::Empty("questions"))
    }

    async fn submit_result(
        &self,
        _token: Option<&str>,
        _submission: &ResultSubmission,
    ) -> Result<String, ApiError> {
        Ok("noop".to_string())
    }

    async fn login(&self, _request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        Err(ApiError::Network("noop backend".to_string()))
    }

    async fn register(&self, _request: &RegisterRequest) -> Result<(), ApiError> {
        Ok(())
    }
}

pub fn test_user() -> User {
    User {
        id: "u1".to_string(),
        email: "jane@example.com".to_string(),
        name: "Jane Doe".to_string(),
        stats: UserStats {
            avg_score: 82.0,
            streak: 3,
            total_quizzes: 7,
            completed_quizzes: 6,
        },
    }
}

/// Creates a signed-out test App with a NoopBackend.
pub fn test_app() -> App {
    App::new(Arc::new(NoopBackend), AuthContext::default())
}

/// Creates a signed-in test App (token "tok", user from `test_user()`).
pub fn signed_in_app() -> App {
    let auth = AuthContext {
        token: Some("tok".to_string()),
        user: Some(test_user()),
    };
    App::new(Arc::new(NoopBackend), auth)
}

/// A four-option question whose answer is `correct`.
pub fn question(id: &str, correct: usize) -> Question {
    Question {
        id: id.to_string(),
        prompt: format!("Prompt for {id}?"),
        options: vec![
            "Option A".to_string(),
            "Option B".to_string(),
            "Option C".to_string(),
            "Option D".to_string(),
        ],
        correct_answer_index: correct,
        explanation: format!("Because {id}."),
        image: None,
        category: None,
    }
}

/// Questions `q1..qN` with the given correct indices.
pub fn questions(correct: &[usize]) -> Vec<Question> {
    correct
        .iter()
        .enumerate()
        .map(|(i, c)| question(&format!("q{}", i + 1), *c))
        .collect()
}

pub fn test_topic(id: &str, title: &str) -> Topic {
    Topic {
        id: id.to_string(),
        title: title.to_string(),
        img_url: None,
        count: "3 Lessons".to_string(),
        tag: "Beginner".to_string(),
        content_blocks: vec![ContentBlock::Text {
            text: format!("About {title}."),
        }],
        is_published: None,
    }
}

/// Render with a `TestBackend` and return the buffer's text, row by row.
pub fn render_text(width: u16, height: u16, draw: impl FnOnce(&mut ratatui::Frame)) -> String {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(draw).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(width as usize)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
