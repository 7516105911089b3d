//! # Topic Detail Component
//!
//! Learn screen in detail mode. The topic header and every content block are
//! flattened into pre-wrapped lines, then drawn into a `ScrollView` so long
//! lessons scroll with Up/Down and PageUp/PageDown.
//!
//! Wrapping is done with `textwrap` up front (rather than `Paragraph::wrap`)
//! so the canvas height is known before rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::content::{ContentBlock, NoteLevel, Topic};
use crate::tui::component::Component;
use crate::tui::components::hint_style;
use crate::tui::components::topic_list::theme_color;

const EMPTY_CONTENT: &str = "No content details available.";

fn wrap_styled(text: &str, width: usize, first: &str, rest: &str, style: Style) -> Vec<Line<'static>> {
    let options = textwrap::Options::new(width.max(1))
        .initial_indent(first)
        .subsequent_indent(rest);
    textwrap::wrap(text, options)
        .into_iter()
        .map(|l| Line::from(Span::styled(l.into_owned(), style)))
        .collect()
}

fn note_color(level: NoteLevel) -> Color {
    match level {
        NoteLevel::Info => Color::Cyan,
        NoteLevel::Warning => Color::Yellow,
        NoteLevel::Danger => Color::Red,
    }
}

/// Lines for one content block.
fn block_lines(block: &ContentBlock, width: usize) -> Vec<Line<'static>> {
    match block {
        ContentBlock::Text { text } => text
            .split('\n')
            .flat_map(|para| {
                if para.trim().is_empty() {
                    vec![Line::default()]
                } else {
                    wrap_styled(para, width, "", "", Style::default())
                }
            })
            .collect(),
        ContentBlock::Image { image_url, caption } => {
            let mut lines = wrap_styled(
                image_url,
                width,
                "[image] ",
                "        ",
                Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            );
            if let Some(caption) = caption.as_deref().filter(|c| !c.is_empty()) {
                lines.extend(wrap_styled(
                    caption,
                    width,
                    "        ",
                    "        ",
                    Style::default().add_modifier(Modifier::ITALIC).fg(Color::Gray),
                ));
            }
            lines
        }
        ContentBlock::Steps { steps } => {
            let mut lines = Vec::new();
            for (i, step) in steps.iter().enumerate() {
                let marker = format!("{:>2}. ", i + 1);
                lines.extend(wrap_styled(
                    &step.title,
                    width,
                    &marker,
                    "    ",
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                if !step.desc.is_empty() {
                    lines.extend(wrap_styled(&step.desc, width, "    ", "    ", Style::default()));
                }
            }
            lines
        }
        ContentBlock::Note { text, level } => {
            let style = Style::default().fg(note_color(*level));
            let mut lines = vec![Line::from(Span::styled(
                format!("┃ {}", level.label()),
                style.add_modifier(Modifier::BOLD),
            ))];
            lines.extend(wrap_styled(text, width, "┃ ", "┃ ", style));
            lines
        }
    }
}

/// The topic header followed by its content blocks, wrapped to `width`.
pub(crate) fn content_lines(topic: &Topic, width: usize) -> Vec<Line<'static>> {
    let mut lines = wrap_styled(
        &topic.title,
        width,
        "",
        "",
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
    );

    let mut meta = Vec::new();
    if !topic.tag.is_empty() {
        meta.push(Span::styled(
            format!("[{}]", topic.tag),
            Style::default().fg(theme_color(topic.theme())),
        ));
        meta.push(Span::raw("  "));
    }
    if !topic.count.is_empty() {
        meta.push(Span::styled(topic.count.clone(), hint_style()));
    }
    if !meta.is_empty() {
        lines.push(Line::from(meta));
    }
    if let Some(url) = &topic.img_url {
        lines.extend(wrap_styled(url, width, "[cover] ", "        ", hint_style()));
    }
    lines.push(Line::default());

    if topic.content_blocks.is_empty() {
        lines.push(Line::from(Span::styled(EMPTY_CONTENT, hint_style())));
        return lines;
    }
    for block in &topic.content_blocks {
        lines.extend(block_lines(block, width));
        lines.push(Line::default());
    }
    lines
}

pub struct TopicDetail<'a> {
    topic: &'a Topic,
    scroll: &'a mut ScrollViewState,
}

impl<'a> TopicDetail<'a> {
    pub fn new(topic: &'a Topic, scroll: &'a mut ScrollViewState) -> Self {
        Self { topic, scroll }
    }
}

impl Component for TopicDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [body, footer] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        // -1 column for the scrollbar
        let width = body.width.saturating_sub(1);
        let lines = content_lines(self.topic, width as usize);
        let height = lines.len() as u16;

        let mut scroll_view = ScrollView::new(Size::new(width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(Paragraph::new(lines), Rect::new(0, 0, width, height));
        frame.render_stateful_widget(scroll_view, body, &mut *self.scroll);

        let complete = Line::from(vec![
            Span::styled(
                "[ Complete Topic ]",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Enter", hint_style()),
        ]);
        frame.render_widget(Paragraph::new(complete).centered(), footer);
    }
}
