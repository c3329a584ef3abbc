//! Status bar component.
//!
//! Displays the mode badge, the latest status message and key hints.

use pw_core::ViewPhase;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::app::{App, AppMode};
use crate::text::columns;
use crate::theme::Theme;

/// The status bar component.
pub struct StatusBar<'a> {
    app: &'a App,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Creates a new status bar.
    #[must_use]
    pub const fn new(app: &'a App, theme: &'a Theme) -> Self {
        Self { app, theme }
    }

    fn build_line(&self) -> Line<'a> {
        let mut spans = Vec::new();

        let mode_text = match self.app.mode {
            AppMode::Normal => "NORMAL",
            AppMode::Searching => "SEARCH",
            AppMode::Help => "HELP",
        };
        spans.push(Span::styled(
            format!(" {mode_text} "),
            Style::default()
                .fg(Color::Black)
                .bg(self.theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));

        if let Some(status) = &self.app.status {
            let style = if status.is_error {
                self.theme.error_style()
            } else {
                self.theme.base_style()
            };
            spans.push(Span::styled(status.text.clone(), style));
        }

        Line::from(spans)
    }

    fn hint(&self) -> &'static str {
        if self.app.mode == AppMode::Searching {
            self.app.strings.search_hint
        } else if self.app.view.phase() == ViewPhase::Failed {
            self.app.strings.failed_hint
        } else {
            self.app.strings.key_hint
        }
    }
}

impl Widget for &StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = self.build_line();
        let message_width = line.width();
        Paragraph::new(line)
            .style(self.theme.status_bar_style)
            .render(area, buf);

        let hint = Line::from(Span::styled(self.hint(), self.theme.dimmed_style()));
        // The hint only shows when it does not cover the message.
        if columns(message_width + hint.width() + 1) <= area.width {
            hint.alignment(Alignment::Right).render(area, buf);
        }
    }
}
