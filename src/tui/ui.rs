use crate::core::state::{App, LearnView, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    AuthForm, HomePage, NoticeOverlay, ProfilePage, QuizSelector, QuizView, TabBar, TitleBar,
    TopicDetail, TopicList, WelcomePage, hint_style,
};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Key hints for the bottom bar on the current screen.
fn screen_hints(app: &App, tui: &TuiState) -> &'static str {
    match app.screen {
        Screen::Welcome | Screen::Login | Screen::Register => "Ctrl+C Quit",
        Screen::Home => "Enter Quick Quiz  1-3 Topic  l Learn  q Quit",
        Screen::Learn => match app.learn {
            LearnView::List => "Type Search  ↑/↓ Move  Enter Open  Esc Back",
            LearnView::Detail(_) => "↑/↓ PgUp/PgDn Scroll  Enter Complete  Esc Back",
        },
        Screen::QuizSelector => "Enter Start  Esc Home",
        Screen::Quiz => "Esc Leave quiz",
        Screen::Profile if tui.confirm_logout => "y Logout  n Cancel",
        Screen::Profile => "o Logout  q Quit",
    }
}

fn draw_placeholder(frame: &mut Frame, area: Rect, text: &str) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text.to_string(), hint_style()))).centered(),
        middle,
    );
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let [title_area, main_area, tab_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());
    let body = main_area.inner(Margin::new(1, 1));

    let spinner = app.is_loading.then_some(spinner_frame);
    TitleBar::new(app.screen.title(), &app.status_message, spinner).render(frame, title_area);

    match app.screen {
        Screen::Welcome => WelcomePage.render(frame, body),
        Screen::Login => {
            AuthForm::new(&tui.login_form, app.form_error.as_deref(), app.is_loading)
                .render(frame, body)
        }
        Screen::Register => {
            AuthForm::new(&tui.register_form, app.form_error.as_deref(), app.is_loading)
                .render(frame, body)
        }
        Screen::Home => HomePage::new(app).render(frame, body),
        Screen::Learn => match &app.learn {
            LearnView::List if !app.topics_loaded => draw_placeholder(frame, body, "Loading topics..."),
            LearnView::List => {
                TopicList::new(&mut tui.topic_list, app.visible_topics(), &app.search_query)
                    .render(frame, body)
            }
            LearnView::Detail(_) => match app.selected_topic() {
                Some(topic) => TopicDetail::new(topic, &mut tui.topic_scroll).render(frame, body),
                None => draw_placeholder(frame, body, "No content details available."),
            },
        },
        Screen::QuizSelector => QuizSelector::new(tui.quiz_choice, app.quick_quiz_size).render(frame, body),
        Screen::Quiz => match &app.quiz {
            Some(engine) => QuizView::new(engine).render(frame, body),
            None => draw_placeholder(frame, body, "No quiz in progress."),
        },
        Screen::Profile => ProfilePage::new(&app.auth, tui.confirm_logout).render(frame, body),
    }

    let hints = screen_hints(app, tui);
    if app.screen.requires_auth() && app.auth.is_signed_in() {
        TabBar::new(app.screen, hints).render(frame, tab_area);
    } else {
        frame.render_widget(Line::from(Span::styled(hints, hint_style())), tab_area);
    }

    if let Some(notice) = &app.notice {
        NoticeOverlay::new(notice).render(frame, frame.area());
    }
}
