//! # Actions
//!
//! Everything that can happen in RoadReady becomes an `Action`.
//! User presses Enter on an answer? That's `Action::SubmitAnswer`.
//! Backend responds? That's `Action::QuestionsLoaded(result)`.
//!
//! `update()` takes the current state and an action, mutates the state, and
//! returns an `Effect` describing any I/O the adapter must perform. No I/O
//! happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use std::fmt;

use chrono::Utc;
use log::{debug, info, warn};

use crate::api::types::REDACTED;
use crate::api::{ApiError, LoginRequest, LoginResponse, RegisterRequest};
use crate::core::content::Topic;
use crate::core::identity::User;
use crate::core::quiz::{Advance, Question, QuizEngine, QuizError, QuizMode, ResultSubmission};
use crate::core::state::{App, LearnView, Notice, Screen};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(PartialEq)]
pub enum Action {
    Navigate(Screen),
    TopicsLoaded(Result<Vec<Topic>, ApiError>),
    SearchChanged(String),
    OpenTopic(String),
    CloseTopic,
    ChooseQuiz(QuizMode),
    QuestionsLoaded(Result<Vec<Question>, ApiError>),
    StartQuiz,
    SelectOption(usize),
    SubmitAnswer,
    NextQuestion,
    ResultSaved(Result<String, ApiError>),
    LeaveQuiz,
    Login { email: String, password: String },
    LoginFinished(Result<LoginResponse, ApiError>),
    Register { name: String, email: String, password: String },
    RegisterFinished(Result<(), ApiError>),
    Logout,
    DismissNotice,
    Quit,
}

// Actions are logged; passwords never reach the log file.
impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Navigate(screen) => f.debug_tuple("Navigate").field(screen).finish(),
            Action::TopicsLoaded(result) => f.debug_tuple("TopicsLoaded").field(result).finish(),
            Action::SearchChanged(query) => f.debug_tuple("SearchChanged").field(query).finish(),
            Action::OpenTopic(id) => f.debug_tuple("OpenTopic").field(id).finish(),
            Action::CloseTopic => f.write_str("CloseTopic"),
            Action::ChooseQuiz(mode) => f.debug_tuple("ChooseQuiz").field(mode).finish(),
            Action::QuestionsLoaded(result) => {
                f.debug_tuple("QuestionsLoaded").field(result).finish()
            }
            Action::StartQuiz => f.write_str("StartQuiz"),
            Action::SelectOption(index) => f.debug_tuple("SelectOption").field(index).finish(),
            Action::SubmitAnswer => f.write_str("SubmitAnswer"),
            Action::NextQuestion => f.write_str("NextQuestion"),
            Action::ResultSaved(result) => f.debug_tuple("ResultSaved").field(result).finish(),
            Action::LeaveQuiz => f.write_str("LeaveQuiz"),
            Action::Login { email, .. } => f
                .debug_struct("Login")
                .field("email", email)
                .field("password", &REDACTED)
                .finish(),
            Action::LoginFinished(result) => {
                f.debug_tuple("LoginFinished").field(result).finish()
            }
            Action::Register { name, email, .. } => f
                .debug_struct("Register")
                .field("name", name)
                .field("email", email)
                .field("password", &REDACTED)
                .finish(),
            Action::RegisterFinished(result) => {
                f.debug_tuple("RegisterFinished").field(result).finish()
            }
            Action::Logout => f.write_str("Logout"),
            Action::DismissNotice => f.write_str("DismissNotice"),
            Action::Quit => f.write_str("Quit"),
        }
    }
}

/// I/O requested by `update()`, executed by the adapter.
#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    Quit,
    FetchTopics,
    FetchQuestions(QuizMode),
    SubmitResult {
        token: Option<String>,
        submission: ResultSubmission,
    },
    Login(LoginRequest),
    Register(RegisterRequest),
    PersistLogin { token: String, user: User },
    ClearSession,
}

// ============================================================================
// Form validation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingFields,
    PasswordTooShort { min: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFields => write!(f, "Please fill in all fields"),
            ValidationError::PasswordTooShort { min } => {
                write!(f, "Password must be at least {min} characters")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, ValidationError> {
    if email.trim().is_empty() || password.trim().is_empty() {
        return Err(ValidationError::MissingFields);
    }
    Ok(LoginRequest {
        email: email.trim().to_lowercase(),
        password: password.to_string(),
    })
}

pub fn validate_register(
    name: &str,
    email: &str,
    password: &str,
) -> Result<RegisterRequest, ValidationError> {
    if name.trim().is_empty() || email.trim().is_empty() || password.trim().is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(RegisterRequest {
        name: name.trim().to_string(),
        email: email.trim().to_lowercase(),
        password: password.to_string(),
    })
}

// ============================================================================
// Reducer
// ============================================================================

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => Effect::Quit,
        Action::DismissNotice => {
            app.notice = None;
            Effect::None
        }
        Action::Navigate(screen) => navigate(app, screen),

        // Learn
        Action::TopicsLoaded(result) => topics_loaded(app, result),
        Action::SearchChanged(query) => {
            app.search_query = query;
            Effect::None
        }
        Action::OpenTopic(id) => open_topic(app, id),
        Action::CloseTopic => {
            app.learn = LearnView::List;
            Effect::None
        }

        // Quiz
        Action::ChooseQuiz(mode) => choose_quiz(app, mode),
        Action::QuestionsLoaded(result) => questions_loaded(app, result),
        Action::StartQuiz => {
            if let Some(engine) = app.quiz.as_mut() {
                match engine.start(Utc::now()) {
                    Ok(()) => app.status_message = String::from("Quiz started"),
                    Err(e) => debug!("StartQuiz ignored: {}", e),
                }
            }
            Effect::None
        }
        Action::SelectOption(index) => {
            if let Some(engine) = app.quiz.as_mut()
                && let Err(e) = engine.select(index)
            {
                debug!("SelectOption({}) ignored: {}", index, e);
            }
            Effect::None
        }
        Action::SubmitAnswer => submit_answer(app),
        Action::NextQuestion => next_question(app),
        Action::ResultSaved(result) => result_saved(app, result),
        Action::LeaveQuiz => leave_quiz(app),

        // Auth
        Action::Login { email, password } => {
            if app.is_loading {
                return Effect::None;
            }
            match validate_login(&email, &password) {
                Ok(request) => {
                    app.form_error = None;
                    app.is_loading = true;
                    app.status_message = String::from("Signing in...");
                    Effect::Login(request)
                }
                Err(e) => {
                    app.form_error = Some(e.to_string());
                    Effect::None
                }
            }
        }
        Action::LoginFinished(result) => {
            app.is_loading = false;
            match result {
                Ok(LoginResponse { token, user }) => {
                    app.form_error = None;
                    app.status_message = format!("Signed in as {}", user.email);
                    app.previous_screen = Screen::Home;
                    app.screen = Screen::Home;
                    Effect::PersistLogin { token, user }
                }
                Err(e) => {
                    warn!("Login failed: {}", e);
                    app.status_message = String::from("Login failed");
                    app.form_error = Some(e.user_message());
                    Effect::None
                }
            }
        }
        Action::Register {
            name,
            email,
            password,
        } => {
            if app.is_loading {
                return Effect::None;
            }
            match validate_register(&name, &email, &password) {
                Ok(request) => {
                    app.form_error = None;
                    app.is_loading = true;
                    app.status_message = String::from("Creating account...");
                    Effect::Register(request)
                }
                Err(e) => {
                    app.form_error = Some(e.to_string());
                    Effect::None
                }
            }
        }
        Action::RegisterFinished(result) => {
            app.is_loading = false;
            match result {
                Ok(()) => {
                    app.form_error = None;
                    app.screen = Screen::Login;
                    app.notice = Some(Notice::info(
                        "Success",
                        "Account created successfully! Please login to continue.",
                    ));
                }
                Err(e) => {
                    warn!("Registration failed: {}", e);
                    app.form_error = Some(e.user_message());
                }
            }
            Effect::None
        }
        Action::Logout => {
            app.auth = Default::default();
            app.quiz = None;
            app.topics.clear();
            app.topics_loaded = false;
            app.learn = LearnView::List;
            app.search_query.clear();
            app.screen = Screen::Welcome;
            app.previous_screen = Screen::Welcome;
            app.status_message = String::from("Logged out");
            Effect::ClearSession
        }
    }
}

fn navigate(app: &mut App, screen: Screen) -> Effect {
    // A fetch is in flight; its completion decides where we land.
    if app.is_loading {
        return Effect::None;
    }
    if screen.requires_auth() && !app.auth.is_signed_in() {
        debug!("Navigation to {:?} blocked: not signed in", screen);
        return Effect::None;
    }
    if app.screen == Screen::Quiz && screen != Screen::Quiz && app.quiz.take().is_some() {
        info!("Quiz session abandoned");
    }

    app.form_error = None;
    if app.screen != screen {
        app.previous_screen = app.screen;
    }
    app.screen = screen;

    if screen == Screen::Learn && !app.topics_loaded {
        app.is_loading = true;
        app.status_message = String::from("Loading topics...");
        return Effect::FetchTopics;
    }
    Effect::None
}

fn topics_loaded(app: &mut App, result: Result<Vec<Topic>, ApiError>) -> Effect {
    app.is_loading = false;
    match result {
        Ok(topics) => {
            info!("Loaded {} topics", topics.len());
            app.topics = topics;
            app.topics_loaded = true;
            app.status_message = String::new();
            if let Some(id) = app.pending_topic.take() {
                return open_topic(app, id);
            }
        }
        Err(e) => {
            warn!("Topic load failed: {}", e);
            app.pending_topic = None;
            app.notice = Some(Notice::error("Error", e.user_message()));
            app.status_message = String::from("Failed to load topics");
            if app.screen == Screen::Learn {
                app.screen = app.previous_screen;
            }
        }
    }
    Effect::None
}

fn open_topic(app: &mut App, id: String) -> Effect {
    if !app.topics_loaded {
        app.pending_topic = Some(id);
        return navigate(app, Screen::Learn);
    }
    if app.topics.iter().any(|t| t.id == id) {
        if app.screen != Screen::Learn {
            app.previous_screen = app.screen;
            app.screen = Screen::Learn;
        }
        app.learn = LearnView::Detail(id);
    } else {
        debug!("OpenTopic: unknown topic {}", id);
    }
    Effect::None
}

fn choose_quiz(app: &mut App, mode: QuizMode) -> Effect {
    if app.is_loading || !app.auth.is_signed_in() {
        return Effect::None;
    }
    info!("Starting {:?} quiz", mode);
    app.quiz_origin = if app.screen == Screen::Quiz {
        app.previous_screen
    } else {
        app.screen
    };
    app.quiz = Some(QuizEngine::new(mode).with_user_email(app.auth.email().map(str::to_string)));
    app.previous_screen = app.quiz_origin;
    app.screen = Screen::Quiz;
    app.is_loading = true;
    app.status_message = String::from("Loading questions...");
    Effect::FetchQuestions(mode)
}

fn abort_quiz(app: &mut App, message: String) {
    app.quiz = None;
    app.screen = app.quiz_origin;
    app.status_message = String::from("Quiz unavailable");
    app.notice = Some(Notice::error("Error", message));
}

fn questions_loaded(app: &mut App, result: Result<Vec<Question>, ApiError>) -> Effect {
    app.is_loading = false;
    let Some(engine) = app.quiz.as_mut() else {
        debug!("Questions arrived with no quiz session");
        return Effect::None;
    };
    match result {
        Ok(questions) => match engine.questions_loaded(questions) {
            Ok(()) => {
                app.status_message = format!("{} questions ready", engine.questions().len());
            }
            Err(e) => {
                warn!("Rejected question set: {}", e);
                let message = match e {
                    QuizError::EmptyQuestionSet => "No questions available for this quiz".to_string(),
                    other => other.to_string(),
                };
                abort_quiz(app, message);
            }
        },
        Err(e) => {
            warn!("Question load failed: {}", e);
            abort_quiz(app, e.user_message());
        }
    }
    Effect::None
}

fn submit_answer(app: &mut App) -> Effect {
    let Some(engine) = app.quiz.as_mut() else {
        return Effect::None;
    };
    match engine.submit() {
        Ok(record) => {
            debug!(
                "Answered {}: selected={}, correct={}",
                record.question_id, record.selected_index, record.correct_index
            );
            app.status_message = if record.is_correct {
                String::from("Correct!")
            } else {
                String::from("Incorrect")
            };
        }
        Err(QuizError::NoSelection) => {
            app.status_message = QuizError::NoSelection.to_string();
        }
        Err(e) => debug!("SubmitAnswer ignored: {}", e),
    }
    Effect::None
}

fn next_question(app: &mut App) -> Effect {
    let Some(engine) = app.quiz.as_mut() else {
        return Effect::None;
    };
    match engine.advance(Utc::now()) {
        Ok(Advance::NextQuestion(index)) => {
            app.status_message = format!("Question {}/{}", index + 1, engine.questions().len());
            Effect::None
        }
        Ok(Advance::Finished(submission)) => {
            info!(
                "Quiz finished: {}/{} ({}%), passed={}",
                submission.summary.correct,
                submission.summary.total_questions,
                submission.summary.percentage,
                submission.summary.passed
            );
            app.is_loading = true;
            app.status_message = String::from("Saving result...");
            Effect::SubmitResult {
                token: app.auth.token.clone(),
                submission,
            }
        }
        Err(e) => {
            debug!("NextQuestion ignored: {}", e);
            Effect::None
        }
    }
}

fn result_saved(app: &mut App, result: Result<String, ApiError>) -> Effect {
    app.is_loading = false;
    let Some(engine) = app.quiz.as_mut() else {
        return Effect::None;
    };
    let outcome = match result {
        Ok(id) => {
            info!("Result saved: {}", id);
            app.status_message = String::from("Result saved");
            Ok(id)
        }
        Err(e) => {
            warn!("Result save failed: {}", e);
            app.status_message = String::from("Warning: result could not be saved");
            Err(e.user_message())
        }
    };
    if let Err(e) = engine.save_finished(outcome) {
        debug!("ResultSaved ignored: {}", e);
    }
    Effect::None
}

fn leave_quiz(app: &mut App) -> Effect {
    if app.is_loading {
        return Effect::None;
    }
    if app.quiz.take().is_some() {
        debug!("Quiz session discarded");
    }
    app.screen = app.quiz_origin;
    Effect::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::quiz::{Category, QuizPhase, SaveStatus};
    use crate::test_support::{questions, signed_in_app, test_app, test_topic, test_user};

    fn quiz_ready(correct: &[usize]) -> App {
        let mut app = signed_in_app();
        update(&mut app, Action::Navigate(Screen::QuizSelector));
        update(&mut app, Action::ChooseQuiz(QuizMode::Category(Category::TrafficSigns)));
        update(&mut app, Action::QuestionsLoaded(Ok(questions(correct))));
        update(&mut app, Action::StartQuiz);
        app
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_tabs_blocked_when_signed_out() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Navigate(Screen::Home)), Effect::None);
        assert_eq!(app.screen, Screen::Welcome);
        update(&mut app, Action::Navigate(Screen::Login));
        assert_eq!(app.screen, Screen::Login);
    }

    #[test]
    fn test_learn_fetches_topics_once() {
        let mut app = signed_in_app();
        assert_eq!(update(&mut app, Action::Navigate(Screen::Learn)), Effect::FetchTopics);
        assert!(app.is_loading);
        // Second request while loading is ignored
        assert_eq!(update(&mut app, Action::Navigate(Screen::Learn)), Effect::None);
        update(&mut app, Action::TopicsLoaded(Ok(vec![test_topic("t1", "Signs")])));
        assert!(!app.is_loading);
        update(&mut app, Action::Navigate(Screen::Home));
        assert_eq!(update(&mut app, Action::Navigate(Screen::Learn)), Effect::None);
    }

    #[test]
    fn test_topic_load_failure_returns_to_previous_screen() {
        let mut app = signed_in_app();
        update(&mut app, Action::Navigate(Screen::Learn));
        update(
            &mut app,
            Action::TopicsLoaded(Err(ApiError::Network("refused".to_string()))),
        );
        assert_eq!(app.screen, Screen::Home);
        let notice = app.notice.clone().unwrap();
        assert_eq!(notice.message, "Could not connect to server");
        update(&mut app, Action::DismissNotice);
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_home_shortcut_opens_topic_after_load() {
        let mut app = signed_in_app();
        assert_eq!(update(&mut app, Action::OpenTopic("t2".to_string())), Effect::FetchTopics);
        update(
            &mut app,
            Action::TopicsLoaded(Ok(vec![test_topic("t1", "A"), test_topic("t2", "B")])),
        );
        assert_eq!(app.screen, Screen::Learn);
        assert_eq!(app.selected_topic().map(|t| t.title.as_str()), Some("B"));
        update(&mut app, Action::CloseTopic);
        assert_eq!(app.learn, LearnView::List);
    }

    #[test]
    fn test_choose_quiz_fetches_questions() {
        let mut app = signed_in_app();
        update(&mut app, Action::Navigate(Screen::QuizSelector));
        let mode = QuizMode::Quick { limit: 20 };
        assert_eq!(update(&mut app, Action::ChooseQuiz(mode)), Effect::FetchQuestions(mode));
        assert_eq!(app.screen, Screen::Quiz);
        assert_eq!(app.quiz.as_ref().unwrap().phase(), &QuizPhase::Loading);
        // Only one fetch at a time
        assert_eq!(update(&mut app, Action::ChooseQuiz(mode)), Effect::None);
    }

    #[test]
    fn test_question_load_failure_aborts_to_origin() {
        let mut app = signed_in_app();
        update(&mut app, Action::Navigate(Screen::QuizSelector));
        update(&mut app, Action::ChooseQuiz(QuizMode::default()));
        update(&mut app, Action::QuestionsLoaded(Err(ApiError::Empty("questions"))));
        assert!(app.quiz.is_none());
        assert_eq!(app.screen, Screen::QuizSelector);
        assert!(app.notice.is_some());
        assert!(!app.is_loading);
    }

    #[test]
    fn test_empty_question_set_aborts() {
        let mut app = signed_in_app();
        update(&mut app, Action::ChooseQuiz(QuizMode::default()));
        update(&mut app, Action::QuestionsLoaded(Ok(vec![])));
        assert!(app.quiz.is_none());
        assert_eq!(app.screen, Screen::Home);
        assert_eq!(
            app.notice.unwrap().message,
            "No questions available for this quiz"
        );
    }

    #[test]
    fn test_submit_without_selection_keeps_state() {
        let mut app = quiz_ready(&[1, 1]);
        assert_eq!(update(&mut app, Action::SubmitAnswer), Effect::None);
        let engine = app.quiz.as_ref().unwrap();
        assert_eq!(engine.phase().name(), "in_progress");
        assert!(engine.attempts().is_empty());
        assert_eq!(app.status_message, "select an answer first");
    }

    #[test]
    fn test_full_quiz_submits_result() {
        let mut app = quiz_ready(&[0, 1]);
        update(&mut app, Action::SelectOption(0));
        update(&mut app, Action::SubmitAnswer);
        update(&mut app, Action::NextQuestion);
        update(&mut app, Action::SelectOption(1));
        update(&mut app, Action::SubmitAnswer);
        let effect = update(&mut app, Action::NextQuestion);
        let Effect::SubmitResult { token, submission } = effect else {
            panic!("expected SubmitResult, got {effect:?}");
        };
        assert_eq!(token.as_deref(), Some("tok"));
        assert_eq!(submission.user_email.as_deref(), Some("jane@example.com"));
        assert_eq!(submission.quiz_type, "traffic_signs");
        assert_eq!(submission.summary.correct, 2);
        assert!(app.is_loading);

        update(&mut app, Action::ResultSaved(Ok("attempt-1".to_string())));
        let engine = app.quiz.as_ref().unwrap();
        assert_eq!(engine.phase(), &QuizPhase::Result);
        assert!(matches!(engine.save_status(), SaveStatus::Saved { .. }));
    }

    #[test]
    fn test_save_failure_is_soft() {
        let mut app = quiz_ready(&[1]);
        update(&mut app, Action::SelectOption(1));
        update(&mut app, Action::SubmitAnswer);
        update(&mut app, Action::NextQuestion);
        let before = *app.quiz.as_ref().unwrap().summary().unwrap();
        update(
            &mut app,
            Action::ResultSaved(Err(ApiError::Api {
                status: 500,
                message: "boom".to_string(),
            })),
        );
        let engine = app.quiz.as_ref().unwrap();
        assert_eq!(engine.phase(), &QuizPhase::Result);
        assert_eq!(engine.summary(), Some(&before));
        assert!(matches!(engine.save_status(), SaveStatus::Failed(_)));
        assert!(app.notice.is_none());
        assert_eq!(app.screen, Screen::Quiz);
    }

    #[test]
    fn test_leave_quiz_returns_to_origin() {
        let mut app = quiz_ready(&[1]);
        update(&mut app, Action::LeaveQuiz);
        assert!(app.quiz.is_none());
        assert_eq!(app.screen, Screen::QuizSelector);
    }

    #[test]
    fn test_leave_ignored_while_saving() {
        let mut app = quiz_ready(&[1]);
        update(&mut app, Action::SelectOption(1));
        update(&mut app, Action::SubmitAnswer);
        update(&mut app, Action::NextQuestion);
        update(&mut app, Action::LeaveQuiz);
        assert!(app.quiz.is_some());
    }

    #[test]
    fn test_validate_login() {
        assert_eq!(validate_login("  ", "pw"), Err(ValidationError::MissingFields));
        let req = validate_login("  Jane@Example.COM ", "secret").unwrap();
        assert_eq!(req.email, "jane@example.com");
        assert_eq!(req.password, "secret");
    }

    #[test]
    fn test_validate_register() {
        assert_eq!(
            validate_register("Jane", "a@b.c", ""),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_register("Jane", "a@b.c", "12345"),
            Err(ValidationError::PasswordTooShort { min: 6 })
        );
        let req = validate_register(" Jane ", "A@B.C", "123456").unwrap();
        assert_eq!(req.name, "Jane");
        assert_eq!(req.email, "a@b.c");
    }

    #[test]
    fn test_login_validation_error_is_inline() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Screen::Login));
        let effect = update(
            &mut app,
            Action::Login {
                email: String::new(),
                password: String::new(),
            },
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(app.form_error.as_deref(), Some("Please fill in all fields"));
        assert!(!app.is_loading);
    }

    #[test]
    fn test_login_success_persists_and_goes_home() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Screen::Login));
        let effect = update(
            &mut app,
            Action::Login {
                email: "jane@example.com".to_string(),
                password: "secret".to_string(),
            },
        );
        assert!(matches!(effect, Effect::Login(_)));
        let effect = update(
            &mut app,
            Action::LoginFinished(Ok(LoginResponse {
                token: "tok".to_string(),
                user: test_user(),
            })),
        );
        assert_eq!(
            effect,
            Effect::PersistLogin {
                token: "tok".to_string(),
                user: test_user()
            }
        );
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn test_login_rejection_shows_server_message() {
        let mut app = test_app();
        update(
            &mut app,
            Action::Login {
                email: "jane@example.com".to_string(),
                password: "wrong".to_string(),
            },
        );
        update(
            &mut app,
            Action::LoginFinished(Err(ApiError::Api {
                status: 401,
                message: "Invalid credentials".to_string(),
            })),
        );
        assert_eq!(app.form_error.as_deref(), Some("Invalid credentials"));
        assert!(!app.is_loading);
    }

    #[test]
    fn test_register_success_moves_to_login() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Screen::Register));
        update(&mut app, Action::RegisterFinished(Ok(())));
        assert_eq!(app.screen, Screen::Login);
        assert_eq!(app.notice.unwrap().title, "Success");
    }

    #[test]
    fn test_logout_clears_identity() {
        let mut app = quiz_ready(&[1]);
        assert_eq!(update(&mut app, Action::Logout), Effect::ClearSession);
        assert!(!app.auth.is_signed_in());
        assert!(app.quiz.is_none());
        assert_eq!(app.screen, Screen::Welcome);
    }

    #[test]
    fn test_logged_actions_hide_credentials() {
        let actions = [
            Action::Login {
                email: "a@b.c".to_string(),
                password: "hunter22".to_string(),
            },
            Action::Register {
                name: "Al".to_string(),
                email: "a@b.c".to_string(),
                password: "hunter22".to_string(),
            },
            Action::LoginFinished(Ok(LoginResponse {
                token: "secret-token".to_string(),
                user: test_user(),
            })),
        ];
        for action in actions {
            let line = format!("Dispatching {:?}", action);
            assert!(!line.contains("hunter22"), "{line}");
            assert!(!line.contains("secret-token"), "{line}");
            assert!(line.contains("***"), "{line}");
        }
    }
}
