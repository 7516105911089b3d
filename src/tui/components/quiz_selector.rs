//! Quiz type picker: quick mixed quiz or one of the two test parts.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::core::quiz::{Category, QuizMode};
use crate::tui::component::Component;
use crate::tui::components::hint_style;

/// Number of choices on the selector.
pub const QUIZ_CHOICES: usize = 3;

/// The choices in display order, given the configured quick quiz size.
pub fn quiz_choices(quick_limit: usize) -> [QuizMode; QUIZ_CHOICES] {
    [
        QuizMode::Quick { limit: quick_limit },
        QuizMode::Category(Category::TrafficSigns),
        QuizMode::Category(Category::RulesOfRoad),
    ]
}

fn card_text(mode: QuizMode) -> (String, &'static str, Color) {
    match mode {
        QuizMode::Quick { limit } => (
            format!("{limit} random questions from all categories"),
            "Mixed",
            Color::Blue,
        ),
        QuizMode::Category(Category::TrafficSigns) => (
            "Test your knowledge of road signs".to_string(),
            Category::TrafficSigns.part(),
            Color::Red,
        ),
        QuizMode::Category(Category::RulesOfRoad) => (
            "Learn traffic laws and regulations".to_string(),
            Category::RulesOfRoad.part(),
            Color::Cyan,
        ),
    }
}

pub struct QuizSelector {
    pub selected: usize,
    pub quick_limit: usize,
}

impl QuizSelector {
    pub fn new(selected: usize, quick_limit: usize) -> Self {
        Self {
            selected,
            quick_limit,
        }
    }
}

impl Component for QuizSelector {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header, cards, hints] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(5 * QUIZ_CHOICES as u16),
            Constraint::Min(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Choose the type of quiz you want to take",
                Style::default().fg(Color::Gray),
            ))),
            header,
        );

        let rows = Layout::vertical([Constraint::Length(5); QUIZ_CHOICES]).split(cards);
        for (i, mode) in quiz_choices(self.quick_limit).into_iter().enumerate() {
            let (description, badge, color) = card_text(mode);
            let focused = i == self.selected;
            let border = if focused {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            } else {
                hint_style()
            };
            let title = if focused {
                format!("› {}", mode.title())
            } else {
                format!("  {}", mode.title())
            };
            let card = Paragraph::new(vec![
                Line::from(vec![
                    Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw("  "),
                    Span::styled(format!("[{badge}]"), Style::default().fg(color)),
                ]),
                Line::from(Span::styled(format!("  {description}"), Style::default().fg(Color::Gray))),
            ])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(format!(" {} ", i + 1))
                    .padding(Padding::horizontal(1)),
            );
            frame.render_widget(card, rows[i]);
        }

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "↑/↓ Choose  Enter Start  1-3 Quick pick  Esc Home",
                hint_style(),
            ))),
            hints,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_text;

    #[test]
    fn test_choices_in_display_order() {
        let choices = quiz_choices(20);
        assert_eq!(choices[0], QuizMode::Quick { limit: 20 });
        assert_eq!(choices[1], QuizMode::Category(Category::TrafficSigns));
        assert_eq!(choices[2], QuizMode::Category(Category::RulesOfRoad));
    }

    #[test]
    fn test_selector_shows_three_cards() {
        let text = render_text(80, 20, |f| QuizSelector::new(1, 20).render(f, f.area()));
        assert!(text.contains("Quick Quiz"));
        assert!(text.contains("20 random questions from all categories"));
        assert!(text.contains("› Traffic Signs Quiz"));
        assert!(text.contains("[Part 1A]"));
        assert!(text.contains("Rules of the Road"));
        assert!(text.contains("[Part 1B]"));
    }
}
