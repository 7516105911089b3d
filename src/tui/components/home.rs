//! # Home Page Component
//!
//! Dashboard: greeting, daily quick-quiz banner, stats row and topic
//! shortcuts. Stateless; everything comes from `App`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::core::content::{Topic, filter_topics};
use crate::core::identity::UserStats;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::hint_style;

/// Number of topic shortcuts (keys 1..=N).
pub const HOME_SHORTCUTS: usize = 3;

/// Topics reachable from the home shortcuts, ignoring the Learn search box.
pub fn shortcut_topics(app: &App) -> Vec<&Topic> {
    let mut topics = filter_topics(&app.topics, "");
    topics.truncate(HOME_SHORTCUTS);
    topics
}

pub struct HomePage<'a> {
    app: &'a App,
}

impl<'a> HomePage<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    fn stats(&self) -> UserStats {
        self.app
            .auth
            .user
            .as_ref()
            .map(|u| u.stats)
            .unwrap_or_default()
    }

    fn initials(&self) -> String {
        self.app
            .auth
            .user
            .as_ref()
            .map(|u| u.initials())
            .unwrap_or_else(|| "U".to_string())
    }
}

fn stat_card<'a>(label: &'a str, value: String, color: Color) -> Paragraph<'a> {
    Paragraph::new(vec![
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(label, hint_style())),
    ])
    .centered()
    .block(Block::default().borders(Borders::ALL).border_style(hint_style()))
}

impl Component for HomePage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header, banner, stats_row, topics] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .areas(area);

        let greeting = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    format!(" {} ", self.initials()),
                    Style::default().fg(Color::White).bg(Color::Blue),
                ),
                Span::raw("  "),
                Span::styled("WELCOME BACK", hint_style()),
            ]),
            Line::from(Span::styled(
                format!("{}!", self.app.auth.display_name()),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ]);
        frame.render_widget(greeting, header);

        let banner_text = Paragraph::new(vec![
            Line::from(Span::styled(
                "Daily Quick Quiz",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!(
                "{} mixed questions to keep you sharp.",
                self.app.quick_quiz_size
            )),
            Line::default(),
            Line::from(Span::styled(
                "▶ Enter Start Quiz",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(banner_text, banner);

        let stats = self.stats();
        let [avg, streak, total] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(stats_row);
        frame.render_widget(
            stat_card("AVG SCORE", format!("{:.0}%", stats.avg_score), Color::Green),
            avg,
        );
        frame.render_widget(
            stat_card("STREAK", format!("{} days", stats.streak), Color::Yellow),
            streak,
        );
        frame.render_widget(
            stat_card("QUIZZES", stats.total_quizzes.to_string(), Color::Magenta),
            total,
        );

        let mut lines = vec![Line::from(vec![
            Span::styled("Topics", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled("   l View All", hint_style()),
        ])];
        if self.app.topics_loaded {
            let shortcuts = shortcut_topics(self.app);
            if shortcuts.is_empty() {
                lines.push(Line::from(Span::styled("No topics found", hint_style())));
            }
            for (i, topic) in shortcuts.iter().enumerate() {
                lines.push(Line::from(vec![
                    Span::styled(format!(" {} ", i + 1), Style::default().fg(Color::Blue)),
                    Span::raw(topic.title.clone()),
                    Span::styled(format!("  {}", topic.count), hint_style()),
                ]));
            }
        } else {
            lines.push(Line::from(Span::styled(
                "Open Learn to load lesson topics.",
                hint_style(),
            )));
        }
        frame.render_widget(Paragraph::new(lines), topics);
    }
}
