//! Bottom tab bar: the four signed-in tabs plus the active screen's key hints.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::state::Screen;
use crate::tui::component::Component;
use crate::tui::components::hint_style;

/// Tab order; index matches the F-key (F1 = 0).
pub const TABS: [(Screen, &str); 4] = [
    (Screen::Home, "Home"),
    (Screen::Learn, "Learn"),
    (Screen::QuizSelector, "Quiz"),
    (Screen::Profile, "Profile"),
];

pub struct TabBar<'a> {
    pub active: Screen,
    pub hints: &'a str,
}

impl<'a> TabBar<'a> {
    pub fn new(active: Screen, hints: &'a str) -> Self {
        Self { active, hints }
    }

    fn is_active(&self, tab: Screen) -> bool {
        // The running quiz belongs to the Quiz tab.
        self.active == tab || (tab == Screen::QuizSelector && self.active == Screen::Quiz)
    }
}

impl Component for TabBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (i, (screen, label)) in TABS.iter().enumerate() {
            let style = if self.is_active(*screen) {
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" F{} {} ", i + 1, label), style));
        }
        if !self.hints.is_empty() {
            spans.push(Span::styled(format!("  {}", self.hints), hint_style()));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
