//! Profile screen: avatar initials, identity, statistics and logout.
//!
//! Logout asks for confirmation; the pending confirmation is a flag in
//! `TuiState` passed in as a prop.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::identity::AuthContext;
use crate::tui::component::Component;
use crate::tui::components::{centered_rect, hint_style};

pub struct ProfilePage<'a> {
    auth: &'a AuthContext,
    confirm_logout: bool,
}

impl<'a> ProfilePage<'a> {
    pub fn new(auth: &'a AuthContext, confirm_logout: bool) -> Self {
        Self {
            auth,
            confirm_logout,
        }
    }

    fn render_confirm(&self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 40, area);
        frame.render_widget(Clear, overlay);
        let body = Paragraph::new(vec![
            Line::from("Are you sure you want to logout?"),
            Line::default(),
            Line::from(vec![
                Span::styled("y", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::raw(" Logout   "),
                Span::styled("n", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" Cancel"),
            ]),
        ])
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Logout ")
                .padding(Padding::uniform(1)),
        );
        frame.render_widget(body, overlay);
    }
}

impl Component for ProfilePage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let user = self.auth.user.as_ref();
        let initials = user.map(|u| u.initials()).unwrap_or_else(|| "U".to_string());
        let email = user.map_or("", |u| u.email.as_str());
        let stats = user.map(|u| u.stats).unwrap_or_default();

        let [identity, stats_area, actions] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(7),
            Constraint::Min(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    format!("  {initials}  "),
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Blue)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::default(),
                Line::from(Span::styled(
                    self.auth.display_name(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(email, hint_style())),
            ])
            .centered(),
            identity,
        );

        let row = |label: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("{label:<18}"), hint_style()),
                Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
            ])
        };
        frame.render_widget(
            Paragraph::new(vec![
                row("Average score", format!("{:.0}%", stats.avg_score)),
                row("Day streak", stats.streak.to_string()),
                row("Quizzes taken", stats.total_quizzes.to_string()),
                row("Quizzes completed", stats.completed_quizzes.to_string()),
            ])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(hint_style())
                    .title(" Statistics ")
                    .padding(Padding::horizontal(1)),
            ),
            stats_area,
        );

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("o", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::raw(" Logout"),
            ])),
            actions,
        );

        if self.confirm_logout {
            self.render_confirm(frame, area);
        }
    }
}
