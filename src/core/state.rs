//! # Application State
//!
//! Core business state for RoadReady. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── backend: Arc<dyn Backend>   // remote service
//! ├── auth: AuthContext           // signed-in identity (explicit, not global)
//! ├── screen: Screen              // what is on screen
//! ├── previous_screen: Screen     // where a failed load returns to
//! ├── status_message: String      // status bar text
//! ├── is_loading: bool            // one fetch in flight
//! ├── notice: Option<Notice>      // blocking message overlay
//! ├── topics / topics_loaded      // learn content
//! ├── learn: LearnView            // list or detail
//! ├── search_query: String        // topic filter
//! ├── quiz: Option<QuizEngine>    // current attempt, if any
//! └── quiz_origin: Screen         // where the quiz returns to
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::api::Backend;
use crate::core::config::ResolvedConfig;
use crate::core::content::{Topic, filter_topics};
use crate::core::identity::AuthContext;
use crate::core::quiz::{QuizEngine, QuizMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Login,
    Register,
    Home,
    Learn,
    QuizSelector,
    Quiz,
    Profile,
}

impl Screen {
    /// Screens reachable only when signed in.
    pub fn requires_auth(self) -> bool {
        !matches!(self, Screen::Welcome | Screen::Login | Screen::Register)
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Welcome => "Welcome",
            Screen::Login => "Sign In",
            Screen::Register => "Create Account",
            Screen::Home => "Home",
            Screen::Learn => "Learn",
            Screen::QuizSelector => "Select Quiz Type",
            Screen::Quiz => "Quiz",
            Screen::Profile => "Profile",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LearnView {
    List,
    Detail(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Info,
}

/// A modal message the user must dismiss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn error(title: &str, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.to_string(),
            message: message.into(),
        }
    }

    pub fn info(title: &str, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.to_string(),
            message: message.into(),
        }
    }
}

pub struct App {
    pub backend: Arc<dyn Backend>,
    pub auth: AuthContext,
    pub screen: Screen,
    pub previous_screen: Screen,
    pub status_message: String,
    pub is_loading: bool,
    pub notice: Option<Notice>,
    /// Inline validation or rejection text for the current form.
    pub form_error: Option<String>,
    pub topics: Vec<Topic>,
    pub topics_loaded: bool,
    /// Topic to open once topics arrive (home shortcut before first load).
    pub pending_topic: Option<String>,
    pub learn: LearnView,
    pub search_query: String,
    pub quiz: Option<QuizEngine>,
    pub quiz_origin: Screen,
    pub quick_quiz_size: usize,
}

impl App {
    pub fn new(backend: Arc<dyn Backend>, auth: AuthContext) -> Self {
        let screen = if auth.is_signed_in() {
            Screen::Home
        } else {
            Screen::Welcome
        };
        Self {
            backend,
            auth,
            screen,
            previous_screen: screen,
            status_message: String::from("Welcome to RoadReady!"),
            is_loading: false,
            notice: None,
            form_error: None,
            topics: Vec::new(),
            topics_loaded: false,
            pending_topic: None,
            learn: LearnView::List,
            search_query: String::new(),
            quiz: None,
            quiz_origin: Screen::QuizSelector,
            quick_quiz_size: crate::core::quiz::QUICK_QUIZ_SIZE,
        }
    }

    pub fn from_config(backend: Arc<dyn Backend>, auth: AuthContext, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(backend, auth);
        app.quick_quiz_size = config.quick_quiz_size;
        app
    }

    pub fn quick_mode(&self) -> QuizMode {
        QuizMode::Quick {
            limit: self.quick_quiz_size,
        }
    }

    /// Topics matching the current search.
    pub fn visible_topics(&self) -> Vec<&Topic> {
        filter_topics(&self.topics, &self.search_query)
    }

    pub fn selected_topic(&self) -> Option<&Topic> {
        match &self.learn {
            LearnView::Detail(id) => self.topics.iter().find(|t| &t.id == id),
            LearnView::List => None,
        }
    }
}
