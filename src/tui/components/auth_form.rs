//! # Auth Form Component
//!
//! Login and registration forms. One `AuthFormState` per form lives in
//! `TuiState` so typed values survive a redraw; `AuthForm` borrows it to
//! render.
//!
//! ## Focus order
//!
//! ```text
//! field 0 .. field n-1  ->  [ submit button ]  ->  switch link
//! ```
//!
//! Tab / Down move forward, Shift+Tab / Up move back (wrapping). Enter on a
//! field that is not the last one advances focus; Enter on the last field or
//! the button submits; Enter on the link switches form.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{centered_rect, hint_style};
use crate::tui::event::TuiEvent;

const MASK: char = '•';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthKind {
    Login,
    Register,
}

impl AuthKind {
    fn labels(self) -> &'static [&'static str] {
        match self {
            AuthKind::Login => &["Email", "Password"],
            AuthKind::Register => &["Full Name", "Email", "Password"],
        }
    }

    fn title(self) -> &'static str {
        match self {
            AuthKind::Login => "Sign In",
            AuthKind::Register => "Create Account",
        }
    }

    fn subtitle(self) -> &'static str {
        match self {
            AuthKind::Login => "Welcome back! Sign in to continue your practice.",
            AuthKind::Register => "Start your journey to your G1 license.",
        }
    }

    fn button(self) -> &'static str {
        match self {
            AuthKind::Login => "Login",
            AuthKind::Register => "Sign Up",
        }
    }

    fn switch_text(self) -> &'static str {
        match self {
            AuthKind::Login => "Don't have an account? Sign Up",
            AuthKind::Register => "Already have an account? Sign In",
        }
    }

    fn is_password(self, field: usize) -> bool {
        self.labels().get(field) == Some(&"Password")
    }
}

/// Events emitted by an auth form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    Submit,
    SwitchForm,
    Back,
}

/// Persistent state for one form.
#[derive(Debug, Clone)]
pub struct AuthFormState {
    pub kind: AuthKind,
    fields: Vec<String>,
    focus: usize,
}

impl AuthFormState {
    pub fn new(kind: AuthKind) -> Self {
        Self {
            kind,
            fields: vec![String::new(); kind.labels().len()],
            focus: 0,
        }
    }

    pub fn field(&self, index: usize) -> &str {
        self.fields.get(index).map_or("", String::as_str)
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Clear every field and return focus to the top.
    pub fn reset(&mut self) {
        *self = Self::new(self.kind);
    }

    fn button_slot(&self) -> usize {
        self.fields.len()
    }

    fn link_slot(&self) -> usize {
        self.fields.len() + 1
    }

    fn slot_count(&self) -> usize {
        self.fields.len() + 2
    }

    fn focused_field(&mut self) -> Option<&mut String> {
        self.fields.get_mut(self.focus)
    }

    /// Text shown for a field: passwords are masked.
    fn display_value(&self, index: usize) -> String {
        let value = self.field(index);
        if self.kind.is_password(index) {
            MASK.to_string().repeat(value.chars().count())
        } else {
            value.to_string()
        }
    }
}

impl EventHandler for AuthFormState {
    type Event = AuthEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AuthEvent> {
        match event {
            TuiEvent::Escape => Some(AuthEvent::Back),
            TuiEvent::NextField | TuiEvent::CursorDown => {
                self.focus = (self.focus + 1) % self.slot_count();
                None
            }
            TuiEvent::PrevField | TuiEvent::CursorUp => {
                self.focus = (self.focus + self.slot_count() - 1) % self.slot_count();
                None
            }
            TuiEvent::Submit => {
                if self.focus == self.link_slot() {
                    Some(AuthEvent::SwitchForm)
                } else if self.focus + 1 >= self.button_slot() {
                    Some(AuthEvent::Submit)
                } else {
                    self.focus += 1;
                    None
                }
            }
            TuiEvent::InputChar(c) => {
                if let Some(field) = self.focused_field() {
                    field.push(*c);
                }
                None
            }
            TuiEvent::Paste(text) => {
                if let Some(field) = self.focused_field() {
                    field.extend(text.chars().filter(|c| !c.is_control()));
                }
                None
            }
            TuiEvent::Backspace => {
                if let Some(field) = self.focused_field() {
                    field.pop();
                }
                None
            }
            _ => None,
        }
    }
}

/// Transient render wrapper.
pub struct AuthForm<'a> {
    state: &'a AuthFormState,
    error: Option<&'a str>,
    busy: bool,
}

impl<'a> AuthForm<'a> {
    pub fn new(state: &'a AuthFormState, error: Option<&'a str>, busy: bool) -> Self {
        Self { state, error, busy }
    }
}

impl Component for AuthForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let state = self.state;
        let kind = state.kind;
        let form_area = centered_rect(70, 100, area);

        let mut constraints = vec![Constraint::Length(2), Constraint::Length(1)];
        constraints.extend(state.fields.iter().map(|_| Constraint::Length(3)));
        constraints.extend([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
        ]);
        let rows = Layout::vertical(constraints).split(form_area);

        let heading = Paragraph::new(vec![
            Line::from(Span::styled(
                kind.title(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(kind.subtitle(), Style::default().fg(Color::Gray))),
        ]);
        frame.render_widget(heading, rows[0]);

        for (i, label) in kind.labels().iter().enumerate() {
            let focused = state.focus() == i;
            let border = if focused {
                Style::default().fg(Color::Blue)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let field_area = rows[2 + i];
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(format!(" {label} "));
            let value = state.display_value(i);
            let value_width = value.width() as u16;
            frame.render_widget(Paragraph::new(value).block(block), field_area);

            if focused {
                let max_x = field_area.right().saturating_sub(2);
                frame.set_cursor_position(Position::new(
                    (field_area.x + 1 + value_width).min(max_x),
                    field_area.y + 1,
                ));
            }
        }

        let after = 2 + state.fields.len();
        let button_label = if self.busy {
            format!("[ {}... ]", kind.button())
        } else {
            format!("[ {} ]", kind.button())
        };
        let button_style = if state.focus() == state.button_slot() {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(button_label, button_style))).centered(),
            rows[after + 1],
        );

        let link_style = if state.focus() == state.link_slot() {
            Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(kind.switch_text(), link_style))).centered(),
            rows[after + 3],
        );

        if let Some(error) = self.error {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(error, Style::default().fg(Color::Red))))
                    .centered(),
                rows[after + 4],
            );
        } else {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "Tab Next field  Enter Continue  Esc Back",
                    hint_style(),
                )))
                .centered(),
                rows[after + 4],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_text;

    fn type_text(state: &mut AuthFormState, text: &str) {
        for c in text.chars() {
            state.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut state = AuthFormState::new(AuthKind::Login);
        type_text(&mut state, "jane@example.com");
        state.handle_event(&TuiEvent::NextField);
        type_text(&mut state, "secret");
        state.handle_event(&TuiEvent::Backspace);
        assert_eq!(state.field(0), "jane@example.com");
        assert_eq!(state.field(1), "secre");
    }

    #[test]
    fn test_enter_advances_then_submits() {
        let mut state = AuthFormState::new(AuthKind::Register);
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        assert_eq!(state.focus(), 2);
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(AuthEvent::Submit));
    }

    #[test]
    fn test_focus_wraps_to_switch_link() {
        let mut state = AuthFormState::new(AuthKind::Login);
        state.handle_event(&TuiEvent::PrevField);
        assert_eq!(state.focus(), 3);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(AuthEvent::SwitchForm)
        );
        state.handle_event(&TuiEvent::NextField);
        assert_eq!(state.focus(), 0);
    }

    #[test]
    fn test_escape_goes_back() {
        let mut state = AuthFormState::new(AuthKind::Login);
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(AuthEvent::Back));
    }

    #[test]
    fn test_paste_drops_newlines() {
        let mut state = AuthFormState::new(AuthKind::Login);
        state.handle_event(&TuiEvent::Paste("a@b.c\n".to_string()));
        assert_eq!(state.field(0), "a@b.c");
    }

    #[test]
    fn test_reset_clears_fields() {
        let mut state = AuthFormState::new(AuthKind::Login);
        type_text(&mut state, "x");
        state.handle_event(&TuiEvent::NextField);
        state.reset();
        assert_eq!(state.field(0), "");
        assert_eq!(state.focus(), 0);
    }

    #[test]
    fn test_password_is_masked_on_screen() {
        let mut state = AuthFormState::new(AuthKind::Login);
        type_text(&mut state, "jane@example.com");
        state.handle_event(&TuiEvent::NextField);
        type_text(&mut state, "hunter22");
        let text = render_text(80, 24, |f| {
            AuthForm::new(&state, None, false).render(f, f.area());
        });
        assert!(text.contains("jane@example.com"));
        assert!(!text.contains("hunter22"));
        assert!(text.contains("••••••••"));
    }

    #[test]
    fn test_form_error_is_shown() {
        let state = AuthFormState::new(AuthKind::Register);
        let text = render_text(80, 24, |f| {
            AuthForm::new(&state, Some("Please fill in all fields"), false).render(f, f.area());
        });
        assert!(text.contains("Please fill in all fields"));
        assert!(text.contains("Already have an account? Sign In"));
    }
}
