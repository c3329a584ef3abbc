//! Header bar component.
//!
//! Shows the dashboard title, the visible/total campaign count and a help hint.

use pw_core::ViewState;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::strings::Strings;
use crate::theme::Theme;

/// The header bar component.
pub struct HeaderBar<'a> {
    view: &'a ViewState,
    strings: &'a Strings,
    theme: &'a Theme,
}

impl<'a> HeaderBar<'a> {
    /// Creates a new header bar.
    #[must_use]
    pub const fn new(view: &'a ViewState, strings: &'a Strings, theme: &'a Theme) -> Self {
        Self {
            view,
            strings,
            theme,
        }
    }
}

impl Widget for &HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let count = if self.view.is_loading() {
            Span::styled(self.strings.loading, self.theme.dimmed_style())
        } else {
            Span::styled(
                self.strings
                    .count(self.view.visible_len(), self.view.records().len()),
                self.theme.accent_style(),
            )
        };

        let line = Line::from(vec![
            Span::styled(self.strings.title, self.theme.header_style),
            Span::raw(" │ "),
            count,
            Span::raw(" │ "),
            Span::styled("?", self.theme.accent_style()),
        ]);

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(self.theme.border_style);

        Paragraph::new(line).block(block).render(area, buf);
    }
}
