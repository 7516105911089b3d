//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! translates keyboard events into core::Action values and executes the
//! Effects the reducer returns.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event flow
//!
//! ```text
//! crossterm event -> TuiEvent -> dispatch() -> Action -> update() -> Effect
//!                                                                    |
//!              Action <- mpsc channel <- tokio task (HTTP) <---------+
//! ```
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the title bar spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or when a
//!   background task reports back.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::future::Future;
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use tui_scrollview::ScrollViewState;

use crate::api::{Backend, HttpBackend};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::identity::{AuthContext, SessionStore};
use crate::core::quiz::{QuestionState, QuizPhase};
use crate::core::state::{App, LearnView, Screen};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    AuthEvent, AuthFormState, AuthKind, QUIZ_CHOICES, TABS, TopicListEvent, TopicListState,
    quiz_choices, shortcut_topics,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub login_form: AuthFormState,
    pub register_form: AuthFormState,
    pub topic_list: TopicListState,
    pub topic_scroll: ScrollViewState,
    /// Highlighted card on the quiz selector.
    pub quiz_choice: usize,
    pub confirm_logout: bool,
    last_screen: Option<Screen>,
    last_learn: LearnView,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            login_form: AuthFormState::new(AuthKind::Login),
            register_form: AuthFormState::new(AuthKind::Register),
            topic_list: TopicListState::new(),
            topic_scroll: ScrollViewState::default(),
            quiz_choice: 0,
            confirm_logout: false,
            last_screen: None,
            last_learn: LearnView::List,
        }
    }

    /// Reset per-screen presentation state when the core moves elsewhere.
    pub fn sync(&mut self, app: &App) {
        if self.last_screen != Some(app.screen) {
            match self.last_screen {
                Some(Screen::Login) => self.login_form.reset(),
                Some(Screen::Register) => self.register_form.reset(),
                _ => {}
            }
            self.confirm_logout = false;
            self.last_screen = Some(app.screen);
        }
        if self.last_learn != app.learn {
            self.topic_scroll = ScrollViewState::default();
            self.last_learn = app.learn.clone();
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste, Show)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

// ============================================================================
// Event dispatch
// ============================================================================

/// Translate a terminal event into an Action for the current screen.
/// Presentation-only keys (scrolling, list movement) update `tui` and
/// return None.
pub(crate) fn dispatch(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }
    // A notice blocks everything until dismissed
    if app.notice.is_some() {
        return matches!(event, TuiEvent::Submit | TuiEvent::Escape).then_some(Action::DismissNotice);
    }
    if let TuiEvent::SwitchTab(index) = event {
        if !app.auth.is_signed_in() {
            return None;
        }
        return TABS.get(*index).map(|(screen, _)| Action::Navigate(*screen));
    }

    match app.screen {
        Screen::Welcome => match event {
            TuiEvent::Submit | TuiEvent::InputChar('g') => Some(Action::Navigate(Screen::Register)),
            TuiEvent::InputChar('s') => Some(Action::Navigate(Screen::Login)),
            TuiEvent::InputChar('q') | TuiEvent::Escape => Some(Action::Quit),
            _ => None,
        },
        Screen::Login => auth_action(&mut tui.login_form, event),
        Screen::Register => auth_action(&mut tui.register_form, event),
        Screen::Home => match event {
            TuiEvent::Submit => Some(Action::ChooseQuiz(app.quick_mode())),
            TuiEvent::InputChar('l') => Some(Action::Navigate(Screen::Learn)),
            TuiEvent::InputChar('q') => Some(Action::Quit),
            TuiEvent::InputChar(c @ '1'..='9') => {
                let index = (*c as usize) - ('1' as usize);
                shortcut_topics(app)
                    .get(index)
                    .map(|topic| Action::OpenTopic(topic.id.clone()))
            }
            _ => None,
        },
        Screen::Learn => learn_action(app, tui, event),
        Screen::QuizSelector => {
            let choices = quiz_choices(app.quick_quiz_size);
            match event {
                TuiEvent::CursorUp => {
                    tui.quiz_choice = tui.quiz_choice.saturating_sub(1);
                    None
                }
                TuiEvent::CursorDown => {
                    tui.quiz_choice = (tui.quiz_choice + 1).min(QUIZ_CHOICES - 1);
                    None
                }
                TuiEvent::Submit => choices.get(tui.quiz_choice).map(|m| Action::ChooseQuiz(*m)),
                TuiEvent::InputChar(c @ '1'..='3') => {
                    let index = (*c as usize) - ('1' as usize);
                    tui.quiz_choice = index;
                    Some(Action::ChooseQuiz(choices[index]))
                }
                TuiEvent::Escape => Some(Action::Navigate(Screen::Home)),
                _ => None,
            }
        }
        Screen::Quiz => quiz_action(app, event),
        Screen::Profile if tui.confirm_logout => match event {
            TuiEvent::InputChar('y') | TuiEvent::Submit => {
                tui.confirm_logout = false;
                Some(Action::Logout)
            }
            TuiEvent::InputChar('n') | TuiEvent::Escape => {
                tui.confirm_logout = false;
                None
            }
            _ => None,
        },
        Screen::Profile => match event {
            TuiEvent::InputChar('o') => {
                tui.confirm_logout = true;
                None
            }
            TuiEvent::InputChar('q') => Some(Action::Quit),
            TuiEvent::Escape => Some(Action::Navigate(Screen::Home)),
            _ => None,
        },
    }
}

fn auth_action(form: &mut AuthFormState, event: &TuiEvent) -> Option<Action> {
    match form.handle_event(event)? {
        AuthEvent::Submit => Some(match form.kind {
            AuthKind::Login => Action::Login {
                email: form.field(0).to_string(),
                password: form.field(1).to_string(),
            },
            AuthKind::Register => Action::Register {
                name: form.field(0).to_string(),
                email: form.field(1).to_string(),
                password: form.field(2).to_string(),
            },
        }),
        AuthEvent::SwitchForm => Some(Action::Navigate(match form.kind {
            AuthKind::Login => Screen::Register,
            AuthKind::Register => Screen::Login,
        })),
        AuthEvent::Back => Some(Action::Navigate(Screen::Welcome)),
    }
}

fn learn_action(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match &app.learn {
        LearnView::List => {
            if !app.topics_loaded {
                return matches!(event, TuiEvent::Escape).then_some(Action::Navigate(Screen::Home));
            }
            let visible = app.visible_topics();
            match tui.topic_list.handle_event(event, &visible, &app.search_query)? {
                TopicListEvent::Open(id) => Some(Action::OpenTopic(id)),
                TopicListEvent::Search(query) => Some(Action::SearchChanged(query)),
                TopicListEvent::Back => Some(Action::Navigate(Screen::Home)),
            }
        }
        LearnView::Detail(_) => {
            match event {
                TuiEvent::CursorUp => tui.topic_scroll.scroll_up(),
                TuiEvent::CursorDown => tui.topic_scroll.scroll_down(),
                TuiEvent::ScrollPageUp => tui.topic_scroll.scroll_page_up(),
                TuiEvent::ScrollPageDown => tui.topic_scroll.scroll_page_down(),
                TuiEvent::Submit | TuiEvent::Escape => return Some(Action::CloseTopic),
                _ => {}
            }
            None
        }
    }
}

fn quiz_action(app: &App, event: &TuiEvent) -> Option<Action> {
    let Some(engine) = &app.quiz else {
        return matches!(event, TuiEvent::Escape).then_some(Action::LeaveQuiz);
    };
    match engine.phase() {
        QuizPhase::Loading | QuizPhase::Intro if matches!(event, TuiEvent::Escape) => {
            Some(Action::LeaveQuiz)
        }
        QuizPhase::Intro if matches!(event, TuiEvent::Submit) => Some(Action::StartQuiz),
        QuizPhase::InProgress(QuestionState::Choosing { selected }) => {
            let selected = *selected;
            let options = engine.current_question().map_or(0, |q| q.options.len());
            if options == 0 {
                return None;
            }
            match event {
                TuiEvent::CursorDown => Some(Action::SelectOption(
                    selected.map_or(0, |s| (s + 1) % options),
                )),
                TuiEvent::CursorUp => Some(Action::SelectOption(
                    selected.map_or(options - 1, |s| (s + options - 1) % options),
                )),
                TuiEvent::InputChar(c) => {
                    let index = match c.to_ascii_lowercase() {
                        l @ 'a'..='z' => (l as usize) - ('a' as usize),
                        d @ '1'..='9' => (d as usize) - ('1' as usize),
                        _ => return None,
                    };
                    (index < options).then_some(Action::SelectOption(index))
                }
                TuiEvent::Submit => Some(Action::SubmitAnswer),
                TuiEvent::Escape => Some(Action::LeaveQuiz),
                _ => None,
            }
        }
        QuizPhase::InProgress(QuestionState::Revealed { .. }) => match event {
            TuiEvent::Submit | TuiEvent::InputChar('n') => Some(Action::NextQuestion),
            TuiEvent::Escape => Some(Action::LeaveQuiz),
            _ => None,
        },
        QuizPhase::Result => match event {
            TuiEvent::Submit | TuiEvent::Escape => Some(Action::LeaveQuiz),
            TuiEvent::InputChar('r') => Some(Action::ChooseQuiz(engine.mode())),
            _ => None,
        },
        _ => None,
    }
}

// ============================================================================
// Effects
// ============================================================================

/// Run a backend call on the runtime and post its outcome back to the loop.
fn spawn_task<F>(tx: &mpsc::Sender<Action>, label: &'static str, task: F)
where
    F: Future<Output = Action> + Send + 'static,
{
    info!("Spawning {} request", label);
    let tx = tx.clone();
    tokio::spawn(async move {
        let action = task.await;
        if tx.send(action).is_err() {
            warn!("Failed to send {} result: receiver dropped", label);
        }
    });
}

/// Execute one Effect. Returns true when the app should exit.
fn run_effect(
    effect: Effect,
    app: &mut App,
    store: &mut Option<SessionStore>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    let backend = Arc::clone(&app.backend);
    match effect {
        Effect::None => {}
        Effect::Quit => return true,
        Effect::FetchTopics => spawn_task(tx, "topics", async move {
            Action::TopicsLoaded(backend.fetch_topics().await)
        }),
        Effect::FetchQuestions(mode) => spawn_task(tx, "questions", async move {
            Action::QuestionsLoaded(backend.fetch_questions(mode).await)
        }),
        Effect::SubmitResult { token, submission } => spawn_task(tx, "result", async move {
            Action::ResultSaved(backend.submit_result(token.as_deref(), &submission).await)
        }),
        Effect::Login(request) => spawn_task(tx, "login", async move {
            Action::LoginFinished(backend.login(&request).await)
        }),
        Effect::Register(request) => spawn_task(tx, "register", async move {
            Action::RegisterFinished(backend.register(&request).await)
        }),
        Effect::PersistLogin { token, user } => {
            let persisted = match store.as_mut() {
                Some(store) => match app.auth.login(store, token.clone(), user.clone()) {
                    Ok(()) => true,
                    Err(e) => {
                        warn!("Failed to persist login: {}", e);
                        false
                    }
                },
                None => false,
            };
            if !persisted {
                warn!("Session kept in memory only");
                app.auth = AuthContext {
                    token: Some(token),
                    user: Some(user),
                };
            }
        }
        Effect::ClearSession => {
            if let Some(store) = store.as_mut()
                && let Err(e) = app.auth.logout(store)
            {
                warn!("Failed to clear stored session: {}", e);
            }
        }
    }
    false
}

// ============================================================================
// Main loop
// ============================================================================

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut store = match SessionStore::open(&config.data_dir) {
        Ok(store) => Some(store),
        Err(e) => {
            warn!(
                "Session store unavailable at {}: {}",
                config.data_dir.display(),
                e
            );
            None
        }
    };
    let auth = store.as_mut().map(AuthContext::restore).unwrap_or_default();

    let backend: Arc<dyn Backend> = Arc::new(HttpBackend::new(
        config.base_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    ));
    info!("Using backend {} at {}", backend.name(), config.base_url);

    let mut app = App::from_config(backend, auth, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    let result = 'outer: loop {
        tui.sync(&app);
        if app.is_loading {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let timeout = if app.is_loading {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain pending events before the next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            let Some(action) = dispatch(&app, &mut tui, &event) else {
                continue;
            };
            debug!("Dispatching {:?}", action);
            let effect = update(&mut app, action);
            if run_effect(effect, &mut app, &mut store, &tx) {
                break 'outer Ok(());
            }
            // Screen may have changed; later keys must see fresh presentation state
            tui.sync(&app);
        }

        // Handle background task results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if run_effect(effect, &mut app, &mut store, &tx) {
                break 'outer Ok(());
            }
        }
    };

    ratatui::restore();
    info!("Exiting");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::quiz::{Category, QuizMode};
    use crate::core::state::Notice;
    use crate::test_support::{questions, signed_in_app, test_app, test_topic};

    fn press(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
        match dispatch(app, tui, &event) {
            Some(action) => {
                let effect = update(app, action);
                tui.sync(app);
                effect
            }
            None => Effect::None,
        }
    }

    fn type_text(app: &mut App, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            press(app, tui, TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut app = test_app();
        app.notice = Some(Notice::info("Hi", "there"));
        let mut tui = TuiState::new();
        assert_eq!(dispatch(&app, &mut tui, &TuiEvent::ForceQuit), Some(Action::Quit));
    }

    #[test]
    fn test_notice_swallows_keys_until_dismissed() {
        let mut app = signed_in_app();
        app.notice = Some(Notice::error("Error", "boom"));
        let mut tui = TuiState::new();
        assert_eq!(dispatch(&app, &mut tui, &TuiEvent::InputChar('l')), None);
        assert_eq!(
            dispatch(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::DismissNotice)
        );
    }

    #[test]
    fn test_tabs_need_sign_in() {
        let app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(dispatch(&app, &mut tui, &TuiEvent::SwitchTab(1)), None);

        let app = signed_in_app();
        assert_eq!(
            dispatch(&app, &mut tui, &TuiEvent::SwitchTab(3)),
            Some(Action::Navigate(Screen::Profile))
        );
    }

    #[test]
    fn test_login_form_submits_typed_credentials() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        press(&mut app, &mut tui, TuiEvent::InputChar('s'));
        assert_eq!(app.screen, Screen::Login);

        type_text(&mut app, &mut tui, " Jane@Example.com ");
        press(&mut app, &mut tui, TuiEvent::NextField);
        type_text(&mut app, &mut tui, "secret1");
        let effect = press(&mut app, &mut tui, TuiEvent::Submit);
        match effect {
            Effect::Login(request) => {
                assert_eq!(request.email, "jane@example.com");
                assert_eq!(request.password, "secret1");
            }
            other => panic!("expected login effect, got {:?}", other),
        }
    }

    #[test]
    fn test_login_form_empty_shows_error() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        press(&mut app, &mut tui, TuiEvent::InputChar('s'));
        press(&mut app, &mut tui, TuiEvent::NextField);
        assert_eq!(press(&mut app, &mut tui, TuiEvent::Submit), Effect::None);
        assert_eq!(app.form_error.as_deref(), Some("Please fill in all fields"));
    }

    #[test]
    fn test_leaving_login_clears_form() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        press(&mut app, &mut tui, TuiEvent::InputChar('s'));
        type_text(&mut app, &mut tui, "jane");
        press(&mut app, &mut tui, TuiEvent::Escape);
        assert_eq!(app.screen, Screen::Welcome);
        assert_eq!(tui.login_form.field(0), "");
    }

    #[test]
    fn test_home_enter_starts_quick_quiz() {
        let mut app = signed_in_app();
        let mut tui = TuiState::new();
        assert_eq!(
            press(&mut app, &mut tui, TuiEvent::Submit),
            Effect::FetchQuestions(QuizMode::Quick { limit: 20 })
        );
        assert_eq!(app.screen, Screen::Quiz);
    }

    #[test]
    fn test_home_shortcut_opens_topic() {
        let mut app = signed_in_app();
        app.topics = vec![test_topic("t1", "Signs"), test_topic("t2", "Parking")];
        app.topics_loaded = true;
        let mut tui = TuiState::new();
        press(&mut app, &mut tui, TuiEvent::InputChar('2'));
        assert_eq!(app.screen, Screen::Learn);
        assert_eq!(app.learn, LearnView::Detail("t2".to_string()));
        press(&mut app, &mut tui, TuiEvent::InputChar('9'));
        assert_eq!(app.learn, LearnView::Detail("t2".to_string()));
    }

    #[test]
    fn test_learn_search_and_open() {
        let mut app = signed_in_app();
        let mut tui = TuiState::new();
        assert_eq!(press(&mut app, &mut tui, TuiEvent::SwitchTab(1)), Effect::FetchTopics);
        update(
            &mut app,
            Action::TopicsLoaded(Ok(vec![test_topic("t1", "Signs"), test_topic("t2", "Parking")])),
        );
        type_text(&mut app, &mut tui, "PARK");
        assert_eq!(app.search_query, "PARK");
        assert_eq!(app.visible_topics().len(), 1);
        press(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(app.learn, LearnView::Detail("t2".to_string()));
        press(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(app.learn, LearnView::List);
    }

    #[test]
    fn test_selector_keys_choose_mode() {
        let mut app = signed_in_app();
        let mut tui = TuiState::new();
        press(&mut app, &mut tui, TuiEvent::SwitchTab(2));
        press(&mut app, &mut tui, TuiEvent::CursorDown);
        press(&mut app, &mut tui, TuiEvent::CursorDown);
        press(&mut app, &mut tui, TuiEvent::CursorDown);
        assert_eq!(tui.quiz_choice, 2);
        assert_eq!(
            press(&mut app, &mut tui, TuiEvent::Submit),
            Effect::FetchQuestions(QuizMode::Category(Category::RulesOfRoad))
        );
    }

    #[test]
    fn test_quiz_keyboard_flow() {
        let mut app = signed_in_app();
        let mut tui = TuiState::new();
        press(&mut app, &mut tui, TuiEvent::Submit); // quick quiz from home
        update(&mut app, Action::QuestionsLoaded(Ok(questions(&[0, 1]))));
        press(&mut app, &mut tui, TuiEvent::Submit); // start

        // Nothing selected: submit is a no-op
        press(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(app.quiz.as_ref().unwrap().attempts().len(), 0);

        // Down from nothing selects the first option (index 0)
        press(&mut app, &mut tui, TuiEvent::CursorDown);
        assert_eq!(app.quiz.as_ref().unwrap().selection(), Some(0));
        press(&mut app, &mut tui, TuiEvent::Submit);
        assert!(app.quiz.as_ref().unwrap().is_revealed());
        press(&mut app, &mut tui, TuiEvent::Submit); // next

        press(&mut app, &mut tui, TuiEvent::InputChar('b'));
        press(&mut app, &mut tui, TuiEvent::Submit);
        let effect = press(&mut app, &mut tui, TuiEvent::Submit);
        match effect {
            Effect::SubmitResult { token, submission } => {
                assert_eq!(token.as_deref(), Some("tok"));
                assert_eq!(submission.summary.correct, 2);
                assert!(submission.summary.passed);
            }
            other => panic!("expected result submission, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_letter_ignored() {
        let mut app = signed_in_app();
        let mut tui = TuiState::new();
        press(&mut app, &mut tui, TuiEvent::Submit);
        update(&mut app, Action::QuestionsLoaded(Ok(questions(&[0]))));
        press(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(dispatch(&app, &mut tui, &TuiEvent::InputChar('z')), None);
    }

    #[test]
    fn test_profile_logout_needs_confirmation() {
        let mut app = signed_in_app();
        let mut tui = TuiState::new();
        press(&mut app, &mut tui, TuiEvent::SwitchTab(3));
        press(&mut app, &mut tui, TuiEvent::InputChar('o'));
        assert!(tui.confirm_logout);
        press(&mut app, &mut tui, TuiEvent::InputChar('n'));
        assert!(app.auth.is_signed_in());

        press(&mut app, &mut tui, TuiEvent::InputChar('o'));
        assert_eq!(press(&mut app, &mut tui, TuiEvent::InputChar('y')), Effect::ClearSession);
        assert!(!app.auth.is_signed_in());
        assert_eq!(app.screen, Screen::Welcome);
    }

    #[test]
    fn test_persist_login_without_store_keeps_session_in_memory() {
        let mut app = test_app();
        let (tx, _rx) = mpsc::channel();
        let quit = run_effect(
            Effect::PersistLogin {
                token: "t".to_string(),
                user: crate::test_support::test_user(),
            },
            &mut app,
            &mut None,
            &tx,
        );
        assert!(!quit);
        assert!(app.auth.is_signed_in());
    }

    #[test]
    fn test_persist_login_and_clear_with_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Some(SessionStore::open(dir.path()).unwrap());
        let mut app = test_app();
        let (tx, _rx) = mpsc::channel();
        run_effect(
            Effect::PersistLogin {
                token: "t".to_string(),
                user: crate::test_support::test_user(),
            },
            &mut app,
            &mut store,
            &tx,
        );
        let mut reopened = SessionStore::open(dir.path()).unwrap();
        assert!(AuthContext::restore(&mut reopened).is_signed_in());

        run_effect(Effect::ClearSession, &mut app, &mut store, &tx);
        let mut reopened = SessionStore::open(dir.path()).unwrap();
        assert!(!AuthContext::restore(&mut reopened).is_signed_in());
    }
}
