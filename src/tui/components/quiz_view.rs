//! # Quiz View Component
//!
//! Renders a `QuizEngine` in whatever phase it is in:
//!
//! ```text
//! Loading   -> "Loading questions..."
//! Intro     -> title, question count, pass mark
//! Question  -> progress, prompt, options (marked once revealed), explanation
//! Saving    -> "Saving result..."
//! Result    -> score, pass message, save warning
//! ```
//!
//! Stateless: selection lives in the engine, so the highlighted option is
//! always the engine's current pick.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap};

use crate::core::quiz::{QuizEngine, QuizPhase, SaveStatus, pass_mark};
use crate::tui::component::Component;
use crate::tui::components::hint_style;

fn option_letter(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

pub struct QuizView<'a> {
    engine: &'a QuizEngine,
}

impl<'a> QuizView<'a> {
    pub fn new(engine: &'a QuizEngine) -> Self {
        Self { engine }
    }

    fn render_centered(&self, frame: &mut Frame, area: Rect, lines: Vec<Line>) {
        let height = lines.len() as u16;
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .areas(area);
        frame.render_widget(
            Paragraph::new(lines).centered().wrap(Wrap { trim: true }),
            middle,
        );
    }

    fn render_intro(&self, frame: &mut Frame, area: Rect) {
        let mode = self.engine.mode();
        let total = self.engine.questions().len();
        let lines = vec![
            Line::from(Span::styled(
                mode.title(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(mode.description(total)),
            Line::from(Span::styled(
                format!("Pass mark: {} of {} (80%)", pass_mark(total), total),
                Style::default().fg(Color::Gray),
            )),
            Line::default(),
            Line::from(Span::styled(
                "Enter Start Quiz   Esc Back",
                Style::default().fg(Color::Yellow),
            )),
        ];
        self.render_centered(frame, area, lines);
    }

    fn render_question(&self, frame: &mut Frame, area: Rect) {
        let Some(question) = self.engine.current_question() else {
            return;
        };
        let (position, total) = self.engine.progress();
        let revealed = self.engine.is_revealed();
        let selected = self.engine.selection();

        let explanation_height = if revealed { 5 } else { 0 };
        let [progress_area, gauge_area, prompt_area, options_area, explanation_area, hints_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(question.options.len() as u16 + 1),
                Constraint::Length(explanation_height),
                Constraint::Length(1),
            ])
            .areas(area);

        frame.render_widget(
            Line::from(vec![
                Span::styled(
                    format!("Question {position}/{total}"),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("   Score: {}", self.engine.score()), hint_style()),
            ]),
            progress_area,
        );
        let ratio = if total == 0 {
            0.0
        } else {
            position as f64 / total as f64
        };
        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(Color::Blue))
                .ratio(ratio.clamp(0.0, 1.0))
                .label(""),
            gauge_area,
        );

        let mut prompt = vec![
            Line::default(),
            Line::from(Span::styled(
                question.prompt.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];
        if let Some(image) = question.image.as_deref().filter(|i| !i.is_empty()) {
            prompt.push(Line::from(Span::styled(format!("[image] {image}"), hint_style())));
        }
        frame.render_widget(Paragraph::new(prompt).wrap(Wrap { trim: true }), prompt_area);

        let mut option_lines = vec![Line::default()];
        for (i, option) in question.options.iter().enumerate() {
            let is_selected = selected == Some(i);
            let is_correct = i == question.correct_answer_index;
            let (marker, style) = if revealed && is_correct {
                ("✓", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            } else if revealed && is_selected {
                ("✗", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            } else if is_selected {
                ("›", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
            } else if revealed {
                (" ", hint_style())
            } else {
                (" ", Style::default())
            };
            option_lines.push(Line::from(Span::styled(
                format!("{marker} {}. {option}", option_letter(i)),
                style,
            )));
        }
        frame.render_widget(Paragraph::new(option_lines), options_area);

        if revealed {
            let correct = selected == Some(question.correct_answer_index);
            let (title, color) = if correct {
                (" Correct! ", Color::Green)
            } else {
                (" Incorrect ", Color::Red)
            };
            let explanation = Paragraph::new(question.explanation.as_str())
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color))
                        .title(title)
                        .padding(Padding::horizontal(1)),
                );
            frame.render_widget(explanation, explanation_area);
        }

        let hints = if revealed && self.engine.is_last_question() {
            "Enter Finish Quiz   Esc Quit"
        } else if revealed {
            "Enter Next Question   Esc Quit"
        } else {
            "↑/↓ or A-D Choose   Enter Submit   Esc Quit"
        };
        frame.render_widget(Line::from(Span::styled(hints, hint_style())), hints_area);
    }

    fn render_result(&self, frame: &mut Frame, area: Rect) {
        let Some(summary) = self.engine.summary() else {
            return;
        };
        let (headline, color) = if summary.passed {
            ("Good Job!", Color::Green)
        } else {
            ("Keep Practicing", Color::Yellow)
        };
        let verdict = if summary.passed {
            "You passed! You're on your way to your G1."
        } else {
            "You need 80% to pass. Review the lessons and try again."
        };

        let mut lines = vec![
            Line::from(Span::styled(
                headline,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                format!("{} / {}", summary.correct, summary.total_questions),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("{}%", summary.percentage)),
            Line::default(),
            Line::from(vec![
                Span::styled(format!("Correct: {}", summary.correct), Style::default().fg(Color::Green)),
                Span::raw("   "),
                Span::styled(
                    format!("Incorrect: {}", summary.incorrect),
                    Style::default().fg(Color::Red),
                ),
            ]),
            Line::from(Span::styled(
                format!("Time: {}m {:02}s", summary.elapsed_secs / 60, summary.elapsed_secs % 60),
                hint_style(),
            )),
            Line::default(),
            Line::from(verdict),
        ];
        match self.engine.save_status() {
            SaveStatus::Failed(reason) => {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    format!("Warning: result could not be saved ({reason})"),
                    Style::default().fg(Color::Yellow),
                )));
            }
            SaveStatus::Saved { .. } => {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled("Result saved", hint_style())));
            }
            SaveStatus::Pending => {}
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Enter Done   r Retry",
            Style::default().fg(Color::Yellow),
        )));
        self.render_centered(frame, area, lines);
    }
}

impl Component for QuizView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self.engine.phase() {
            QuizPhase::Loading => self.render_centered(
                frame,
                area,
                vec![Line::from(Span::styled("Loading questions...", hint_style()))],
            ),
            QuizPhase::Intro => self.render_intro(frame, area),
            QuizPhase::InProgress(_) => self.render_question(frame, area),
            QuizPhase::Saving => self.render_centered(
                frame,
                area,
                vec![Line::from(Span::styled("Saving result...", hint_style()))],
            ),
            QuizPhase::Result => self.render_result(frame, area),
        }
    }
}
