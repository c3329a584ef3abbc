//! Centered message for the failed and empty states.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

/// A bordered panel with one centered line of text.
pub struct MessagePanel<'a> {
    text: &'a str,
    style: Style,
    border_style: Style,
}

impl<'a> MessagePanel<'a> {
    /// Creates a message panel.
    #[must_use]
    pub const fn new(text: &'a str, style: Style, border_style: Style) -> Self {
        Self {
            text,
            style,
            border_style,
        }
    }
}

impl Widget for &MessagePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let row = Rect {
            y: inner.y + inner.height / 2,
            height: inner.height.min(1),
            ..inner
        };
        Paragraph::new(Line::from(Span::styled(self.text, self.style)))
            .alignment(Alignment::Center)
            .render(row, buf);
    }
}
