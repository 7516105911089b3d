//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters and are rebuilt
//! every frame:
//! - `TitleBar`: top status bar (screen, status message, spinner)
//! - `TabBar`: bottom navigation and key hints
//! - `NoticeOverlay`: blocking message box
//! - `WelcomePage`, `HomePage`, `QuizSelector`, `QuizView`, `ProfilePage`
//!
//! ### Stateful Components (Persistent state + transient wrapper)
//!
//! The state struct lives in `TuiState`; the wrapper borrows it for one frame:
//! - `AuthFormState` / `AuthForm`: login and register fields
//! - `TopicListState` / `TopicList`: search box and topic list
//! - `ScrollViewState` / `TopicDetail`: scrollable lesson content
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, never by reaching into a
//! global. The core `App` is passed by reference where a screen needs most
//! of it.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file, shared layout helpers)
//! ├── title_bar.rs     (top status bar)
//! ├── tab_bar.rs       (bottom tabs)
//! ├── notice.rs        (modal notice)
//! ├── welcome.rs       (signed-out landing page)
//! ├── auth_form.rs     (login / register)
//! ├── home.rs          (dashboard)
//! ├── topic_list.rs    (learn: search + list)
//! ├── topic_detail.rs  (learn: content blocks)
//! ├── quiz_selector.rs (quiz type choice)
//! ├── quiz_view.rs     (intro, question, result)
//! └── profile.rs       (identity, stats, logout)
//! ```

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};

mod auth_form;
mod home;
mod notice;
mod profile;
mod quiz_selector;
mod quiz_view;
mod tab_bar;
mod title_bar;
mod topic_detail;
mod topic_list;
mod welcome;

pub use auth_form::{AuthEvent, AuthForm, AuthFormState, AuthKind};
pub use home::{HomePage, shortcut_topics};
pub use notice::NoticeOverlay;
pub use profile::ProfilePage;
pub use quiz_selector::{QUIZ_CHOICES, QuizSelector, quiz_choices};
pub use quiz_view::QuizView;
pub use tab_bar::{TABS, TabBar};
pub use title_bar::TitleBar;
pub use topic_detail::TopicDetail;
pub use topic_list::{TopicList, TopicListEvent, TopicListState};
pub use welcome::WelcomePage;

/// Compute a centered rect using percentage of the outer rect.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

/// Style for the highlighted row of a list.
pub(crate) fn highlight_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

/// Style for key hints.
pub(crate) fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
