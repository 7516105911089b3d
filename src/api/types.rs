//! Wire types for the RoadReady backend.
//!
//! Domain types (`Topic`, `Question`, `User`, `ResultSubmission`) live in
//! `core`; this module only holds request bodies and response envelopes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::content::Topic;
use crate::core::identity::User;
use crate::core::quiz::Question;

/// Stands in for passwords and tokens in `Debug` output.
pub(crate) const REDACTED: &str = "***";

#[derive(Serialize, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Clone, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .finish()
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &REDACTED)
            .finish()
    }
}

impl fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginResponse")
            .field("token", &REDACTED)
            .field("user", &self.user)
            .finish()
    }
}

#[derive(Deserialize, Debug)]
pub struct TopicsEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub topics: Vec<Topic>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct QuestionsEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SubmitEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default, alias = "id")]
    pub attempt_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Error body returned with non-2xx responses: `{ "error": "..." }`.
#[derive(Deserialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}
