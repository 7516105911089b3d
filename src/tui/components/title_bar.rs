//! # TitleBar Component
//!
//! Top status bar: app name, current screen, status message, and a spinner
//! while a fetch is in flight.
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(Screen::Learn.title(), "Loading topics...", Some(3));
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Loading**: `"RoadReady | Learn | ⠹ Loading topics..."`
//! 2. **Status message**: `"RoadReady | Learn | Loading topics..."`
//! 3. **Default**: `"RoadReady | Learn"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub struct TitleBar<'a> {
    pub screen_title: &'a str,
    pub status_message: &'a str,
    /// Spinner frame while loading; None when idle.
    pub spinner_frame: Option<usize>,
}

impl<'a> TitleBar<'a> {
    pub fn new(screen_title: &'a str, status_message: &'a str, spinner_frame: Option<usize>) -> Self {
        Self {
            screen_title,
            status_message,
            spinner_frame,
        }
    }

    fn status_text(&self) -> String {
        match self.spinner_frame {
            Some(frame) => format!("{} {}", SPINNER[frame % SPINNER.len()], self.status_message),
            None => self.status_message.to_string(),
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                "RoadReady",
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::raw(self.screen_title.to_string()),
        ];
        let status = self.status_text();
        if !status.trim().is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(status, Style::default().fg(Color::DarkGray)));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_text;

    #[test]
    fn test_title_bar_with_status_message() {
        let text = render_text(80, 1, |f| {
            TitleBar::new("Learn", "Loading topics...", None).render(f, f.area());
        });
        assert!(text.contains("RoadReady | Learn | Loading topics..."));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let text = render_text(80, 1, |f| {
            TitleBar::new("Home", "", None).render(f, f.area());
        });
        assert!(text.contains("RoadReady | Home"));
        assert_eq!(text.matches('|').count(), 1);
    }

    #[test]
    fn test_title_bar_spinner_when_loading() {
        let bar = TitleBar::new("Quiz", "Saving result...", Some(2));
        assert_eq!(bar.status_text(), "⠹ Saving result...");
    }
}
