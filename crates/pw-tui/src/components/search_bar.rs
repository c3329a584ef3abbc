//! Search field and filter selectors.
//!
//! One bordered row: the search input on the left, the category and
//! time-range selectors on the right.

use pw_core::FilterCriteria;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Widget};

use crate::strings::Strings;
use crate::text::{columns, truncate_to_width};
use crate::theme::Theme;

/// The search bar widget.
pub struct SearchBar<'a> {
    criteria: &'a FilterCriteria,
    editing: bool,
    strings: &'a Strings,
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    /// Creates a new search bar.
    #[must_use]
    pub const fn new(
        criteria: &'a FilterCriteria,
        editing: bool,
        strings: &'a Strings,
        theme: &'a Theme,
    ) -> Self {
        Self {
            criteria,
            editing,
            strings,
            theme,
        }
    }

    fn selectors(&self) -> Line<'a> {
        Line::from(vec![
            Span::styled("c ", self.theme.dimmed_style()),
            Span::styled(
                format!("[{}]", self.strings.category(self.criteria.category)),
                self.selector_style(self.criteria.category.is_some()),
            ),
            Span::raw(" "),
            Span::styled("t ", self.theme.dimmed_style()),
            Span::styled(
                format!("[{}]", self.strings.range(self.criteria.range)),
                self.selector_style(self.criteria.range.is_bounded()),
            ),
        ])
    }

    fn selector_style(&self, active: bool) -> Style {
        if active {
            self.theme.accent_style().add_modifier(Modifier::BOLD)
        } else {
            self.theme.base_style()
        }
    }

    fn input(&self, max_width: usize) -> Line<'a> {
        let cursor = Span::styled("▌", self.theme.accent_style());
        let term = self.criteria.search.as_str();

        let mut spans = vec![Span::styled("/ ", self.theme.dimmed_style())];
        if term.is_empty() {
            spans.push(Span::styled(
                self.strings.search_placeholder,
                self.theme.dimmed_style().add_modifier(Modifier::ITALIC),
            ));
        } else {
            let shown = truncate_to_width(term, max_width.saturating_sub(3));
            spans.push(Span::styled(shown.into_owned(), self.theme.base_style()));
        }
        if self.editing {
            spans.push(cursor);
        }
        Line::from(spans)
    }
}

impl Widget for &SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.editing {
            self.theme.focused_border_style
        } else {
            self.theme.border_style
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                format!(" {} ", self.strings.search_title),
                self.theme.header_style,
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        let selectors = self.selectors();
        let selectors_width = columns(selectors.width()).min(inner.width);
        let input_width = usize::from(inner.width.saturating_sub(selectors_width + 1));

        // Selectors win when the row is too narrow for both.
        if input_width > 2 {
            let input_area = Rect {
                width: columns(input_width),
                ..inner
            };
            self.input(input_width).render(input_area, buf);
        }
        selectors.alignment(Alignment::Right).render(inner, buf);
    }
}
