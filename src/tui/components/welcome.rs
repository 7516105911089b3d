//! # Welcome Page Component
//!
//! Signed-out landing page: wordmark, tagline and the two ways in.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::components::hint_style;

const WORDMARK: &[&str] = &[
    "╦═╗╔═╗╔═╗╔╦╗  ╦═╗╔═╗╔═╗╔╦╗╦ ╦",
    "╠╦╝║ ║╠═╣ ║║  ╠╦╝║╣ ╠═╣ ║║╚╦╝",
    "╩╚═╚═╝╩ ╩═╩╝  ╩╚═╚═╝╩ ╩═╩╝ ╩ ",
];

pub struct WelcomePage;

impl Component for WelcomePage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines: Vec<Line> = WORDMARK
            .iter()
            .map(|row| Line::from(Span::styled(*row, Style::default().fg(Color::Blue))))
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Road ready in Weeks, Not Months.",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            "Practice for the Ontario G1 knowledge test.",
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Get Started    "),
            Span::styled("s", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Sign In    "),
            Span::styled("q", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Quit"),
        ]));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            hint_style(),
        )));

        let height = lines.len() as u16;
        let [center] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_text;

    #[test]
    fn test_welcome_shows_tagline_and_actions() {
        let text = render_text(80, 20, |f| WelcomePage.render(f, f.area()));
        assert!(text.contains("Road ready in Weeks, Not Months."));
        assert!(text.contains("Get Started"));
        assert!(text.contains("Sign In"));
    }
}
