//! Modal notice drawn over the current screen until dismissed.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::core::state::{Notice, NoticeKind};
use crate::tui::component::Component;
use crate::tui::components::centered_rect;

pub struct NoticeOverlay<'a> {
    notice: &'a Notice,
}

impl<'a> NoticeOverlay<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }
}

impl Component for NoticeOverlay<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 40, area);
        frame.render_widget(Clear, overlay);

        let color = match self.notice.kind {
            NoticeKind::Error => Color::Red,
            NoticeKind::Info => Color::Green,
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", self.notice.title))
            .title_bottom(Line::from(" Enter OK ").centered())
            .padding(Padding::uniform(1));

        let body = Paragraph::new(self.notice.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(body, overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_text;

    #[test]
    fn test_notice_shows_title_and_message() {
        let notice = Notice::error("Error", "Could not connect to server");
        let text = render_text(80, 20, |f| {
            NoticeOverlay::new(&notice).render(f, f.area());
        });
        assert!(text.contains("Error"));
        assert!(text.contains("Could not connect to server"));
        assert!(text.contains("Enter OK"));
    }
}
