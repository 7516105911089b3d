//! # Topic List Component
//!
//! Learn screen in list mode: a search box over the list of topics.
//! Typing always goes to the search box; Up/Down move the highlight.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TopicListState` lives in `TuiState`
//! - `TopicList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::content::{TagTheme, Topic};
use crate::tui::components::{highlight_style, hint_style};
use crate::tui::event::TuiEvent;

/// Colour for a topic's tag.
pub(crate) fn theme_color(theme: TagTheme) -> Color {
    match theme {
        TagTheme::Beginner => Color::Green,
        TagTheme::Advanced => Color::Magenta,
        TagTheme::Warning => Color::Yellow,
        TagTheme::Neutral => Color::Blue,
    }
}

/// Events emitted by the topic list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicListEvent {
    Open(String),
    Search(String),
    Back,
}

/// Persistent state for the topic list.
#[derive(Debug, Default)]
pub struct TopicListState {
    pub selected: usize,
    pub list_state: ListState,
}

impl TopicListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the highlight inside a list of `len` rows.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    /// Handle a key event against the currently visible topics.
    pub fn handle_event(
        &mut self,
        event: &TuiEvent,
        visible: &[&Topic],
        query: &str,
    ) -> Option<TopicListEvent> {
        match event {
            TuiEvent::Escape if !query.is_empty() => Some(TopicListEvent::Search(String::new())),
            TuiEvent::Escape => Some(TopicListEvent::Back),
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.clamp(visible.len());
                None
            }
            TuiEvent::CursorDown => {
                self.selected += 1;
                self.clamp(visible.len());
                None
            }
            TuiEvent::Submit => visible
                .get(self.selected)
                .map(|topic| TopicListEvent::Open(topic.id.clone())),
            TuiEvent::InputChar(c) => {
                self.selected = 0;
                Some(TopicListEvent::Search(format!("{query}{c}")))
            }
            TuiEvent::Paste(text) => {
                self.selected = 0;
                let clean: String = text.chars().filter(|c| !c.is_control()).collect();
                Some(TopicListEvent::Search(format!("{query}{clean}")))
            }
            TuiEvent::Backspace if !query.is_empty() => {
                let mut next = query.to_string();
                next.pop();
                self.selected = 0;
                Some(TopicListEvent::Search(next))
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the topic list.
pub struct TopicList<'a> {
    state: &'a mut TopicListState,
    topics: Vec<&'a Topic>,
    query: &'a str,
}

impl<'a> TopicList<'a> {
    pub fn new(state: &'a mut TopicListState, topics: Vec<&'a Topic>, query: &'a str) -> Self {
        Self {
            state,
            topics,
            query,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [search_area, list_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let search_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(" Search topics ");
        let search_text = if self.query.is_empty() {
            Line::from(Span::styled("Type to filter...", hint_style()))
        } else {
            Line::from(self.query)
        };
        frame.render_widget(Paragraph::new(search_text).block(search_block), search_area);
        frame.set_cursor_position(Position::new(
            (search_area.x + 1 + self.query.width() as u16).min(search_area.right().saturating_sub(2)),
            search_area.y + 1,
        ));

        if self.topics.is_empty() {
            frame.render_widget(
                Paragraph::new("No topics found").style(hint_style()).centered(),
                list_area,
            );
            return;
        }

        self.state.clamp(self.topics.len());
        let items: Vec<ListItem> = self
            .topics
            .iter()
            .map(|topic| {
                let color = theme_color(topic.theme());
                let mut header = vec![Span::styled(
                    topic.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )];
                if !topic.tag.is_empty() {
                    header.push(Span::raw("  "));
                    header.push(Span::styled(format!("[{}]", topic.tag), Style::default().fg(color)));
                }
                ListItem::new(vec![
                    Line::from(header),
                    Line::from(Span::styled(format!("  {}", topic.count), hint_style())),
                ])
            })
            .collect();

        let list = List::new(items)
            .highlight_style(highlight_style())
            .highlight_symbol("› ");
        frame.render_stateful_widget(list, list_area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{render_text, test_topic};

    fn topics() -> Vec<Topic> {
        vec![test_topic("t1", "Regulatory Signs"), test_topic("t2", "Parking")]
    }

    #[test]
    fn test_typing_extends_query() {
        let owned = topics();
        let visible: Vec<&Topic> = owned.iter().collect();
        let mut state = TopicListState::new();
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('k'), &visible, "par"),
            Some(TopicListEvent::Search("park".to_string()))
        );
        assert_eq!(
            state.handle_event(&TuiEvent::Backspace, &visible, "par"),
            Some(TopicListEvent::Search("pa".to_string()))
        );
    }

    #[test]
    fn test_escape_clears_query_then_goes_back() {
        let mut state = TopicListState::new();
        assert_eq!(
            state.handle_event(&TuiEvent::Escape, &[], "sig"),
            Some(TopicListEvent::Search(String::new()))
        );
        assert_eq!(
            state.handle_event(&TuiEvent::Escape, &[], ""),
            Some(TopicListEvent::Back)
        );
    }

    #[test]
    fn test_enter_opens_highlighted_topic() {
        let owned = topics();
        let visible: Vec<&Topic> = owned.iter().collect();
        let mut state = TopicListState::new();
        state.handle_event(&TuiEvent::CursorDown, &visible, "");
        state.handle_event(&TuiEvent::CursorDown, &visible, "");
        assert_eq!(state.selected, 1);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit, &visible, ""),
            Some(TopicListEvent::Open("t2".to_string()))
        );
    }

    #[test]
    fn test_enter_on_empty_list_does_nothing() {
        let mut state = TopicListState::new();
        assert_eq!(state.handle_event(&TuiEvent::Submit, &[], "zzz"), None);
    }

    #[test]
    fn test_empty_list_shows_placeholder() {
        let mut state = TopicListState::new();
        let text = render_text(60, 10, |f| {
            TopicList::new(&mut state, Vec::new(), "zzz").render(f, f.area());
        });
        assert!(text.contains("No topics found"));
    }

    #[test]
    fn test_renders_titles_and_tags() {
        let owned = topics();
        let mut state = TopicListState::new();
        let text = render_text(60, 10, |f| {
            TopicList::new(&mut state, owned.iter().collect(), "").render(f, f.area());
        });
        assert!(text.contains("Regulatory Signs"));
        assert!(text.contains("[Beginner]"));
        assert!(text.contains("3 Lessons"));
    }
}
