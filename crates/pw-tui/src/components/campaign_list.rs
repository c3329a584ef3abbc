//! Campaign card list.
//!
//! Each visible record is drawn as a three-line card:
//!
//! ```text
//! ● Amazon プライム会員登録                       2,000P
//!   最終更新: 2025/3/1 [サービス登録]               ↑ 200P
//!                                   最高値: 2,000P  最安値: 1,500P
//! ```

use pw_core::{format_points, CampaignRecord, Selection, ViewState};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, StatefulWidget, Widget};

use crate::app::CardListState;
use crate::strings::Strings;
use crate::text::{columns, truncate_to_width};
use crate::theme::Theme;

/// Rows per card, including the blank spacer row.
pub const CARD_HEIGHT: u16 = 4;

/// A stateful list of campaign cards.
///
/// Uses [`StatefulWidget`] so the number of cards that fit is written back
/// to [`CardListState::visible_height`] for paging.
pub struct CampaignListView<'a> {
    view: &'a ViewState,
    strings: &'a Strings,
    theme: &'a Theme,
}

impl<'a> CampaignListView<'a> {
    /// Creates a new campaign list view.
    #[must_use]
    pub const fn new(view: &'a ViewState, strings: &'a Strings, theme: &'a Theme) -> Self {
        Self {
            view,
            strings,
            theme,
        }
    }

    fn render_card(
        &self,
        record: &CampaignRecord,
        area: Rect,
        buf: &mut Buffer,
        selection: Selection,
        under_cursor: bool,
    ) {
        let summary = record.summary();
        let rows = area.rows().take(3).collect::<Vec<_>>();
        if under_cursor {
            buf.set_style(area, self.theme.highlight_style);
        }

        // Line 1: marker, name, current points.
        if let Some(&row) = rows.first() {
            let marker = if selection.is_selected(record.id) {
                Span::styled("● ", self.theme.accent_style())
            } else {
                Span::raw("  ")
            };
            let points = Span::styled(
                format_points(summary.current),
                self.theme.base_style().add_modifier(Modifier::BOLD),
            );
            let name_width = usize::from(row.width).saturating_sub(2 + points.width() + 1);
            let name = truncate_to_width(&record.name, name_width).into_owned();
            let name_style = if under_cursor {
                self.theme.base_style().add_modifier(Modifier::BOLD)
            } else {
                self.theme.base_style()
            };
            render_split(
                Line::from(vec![marker, Span::styled(name, name_style)]),
                Line::from(points),
                row,
                buf,
            );
        }

        // Line 2: last updated, category, trend.
        if let Some(&row) = rows.get(1) {
            let left = Line::from(vec![
                Span::styled(
                    format!(
                        "  {}: {} ",
                        self.strings.last_updated,
                        self.strings.date(record.last_updated)
                    ),
                    self.theme.dimmed_style(),
                ),
                Span::styled(
                    format!("[{}]", self.strings.category(Some(record.category))),
                    self.theme.category_style(record.category),
                ),
            ]);
            let right = Line::from(Span::styled(
                format!("{} {}", summary.trend.arrow(), format_points(summary.magnitude)),
                self.theme.trend_style(summary.trend),
            ));
            render_split(left, right, row, buf);
        }

        // Line 3: peak and trough.
        if let (Some(&row), Some(peak), Some(trough)) = (rows.get(2), summary.peak, summary.trough) {
            let text = format!(
                "{}: {}  {}: {}",
                self.strings.peak,
                format_points(peak),
                self.strings.trough,
                format_points(trough)
            );
            Line::from(Span::styled(text, self.theme.dimmed_style()))
                .alignment(Alignment::Right)
                .render(row, buf);
        }
    }
}

impl StatefulWidget for &CampaignListView<'_> {
    type State = CardListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let title = format!(
            " {} ({}) ",
            self.strings.list_title,
            self.strings
                .count(self.view.visible_len(), self.view.records().len())
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style)
            .title(Span::styled(title, self.theme.header_style));
        let inner = block.inner(area);
        block.render(area, buf);

        state.visible_height = usize::from(inner.height / CARD_HEIGHT).max(1);
        state.ensure_visible();

        let selection = self.view.selection();
        let mut y = inner.y;
        for (n, record) in self
            .view
            .visible_records()
            .enumerate()
            .skip(state.scroll_offset)
        {
            let remaining = inner.bottom().saturating_sub(y);
            if remaining == 0 {
                break;
            }
            let card = Rect {
                x: inner.x,
                y,
                width: inner.width,
                height: remaining.min(CARD_HEIGHT - 1),
            };
            self.render_card(record, card, buf, selection, state.cursor == Some(n));
            y = y.saturating_add(CARD_HEIGHT);
        }
    }
}

/// Draws `left` at the start of `row` and `right` against its end.
fn render_split(left: Line<'_>, right: Line<'_>, row: Rect, buf: &mut Buffer) {
    let right_width = columns(right.width()).min(row.width);
    let left_area = Rect {
        width: row.width.saturating_sub(right_width + 1),
        ..row
    };
    left.render(left_area, buf);
    right.alignment(Alignment::Right).render(row, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pw_core::validate_campaigns;
    use pw_source::builtin_campaigns;
    use crate::text::display_width;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn loaded_view() -> ViewState {
        let mut view = ViewState::new();
        let records = validate_campaigns(builtin_campaigns()).unwrap();
        view.complete_load::<std::convert::Infallible>(Ok(records));
        view
    }

    fn render(view: &ViewState, state: &mut CardListState, width: u16, height: u16) -> String {
        let strings = Strings::en();
        let theme = Theme::dark();
        let widget = CampaignListView::new(view, &strings, &theme);
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| frame.render_stateful_widget(&widget, frame.area(), state))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_cards_show_summary_values() {
        let view = loaded_view();
        let mut state = CardListState::new();
        state.reset(view.visible_len());
        let out = render(&view, &mut state, 70, 12);

        assert!(out.contains("2,000P"));
        assert!(out.contains("↑ 200P"));
        assert!(out.contains("↓ 1,000P"));
        assert!(out.contains("High: 15,000P  Low: 13,000P"));
        assert!(out.contains("Updated: 2025-03-01"));
        assert!(out.contains("[Credit cards]"));
        assert!(out.contains("Campaigns (2/2)"));
    }

    #[test]
    fn test_visible_height_counts_cards() {
        let view = loaded_view();
        let mut state = CardListState::new();
        render(&view, &mut state, 70, 10);
        assert_eq!(state.visible_height, 2);

        render(&view, &mut state, 70, 4);
        assert_eq!(state.visible_height, 1);
    }

    #[test]
    fn test_scrolls_to_cursor() {
        let view = loaded_view();
        let mut state = CardListState::new();
        state.cursor = Some(1);
        let out = render(&view, &mut state, 70, 6);
        assert_eq!(state.scroll_offset, 1);
        assert!(out.contains("13,000P"));
        assert!(!out.contains("Amazon"));
    }

    #[test]
    fn test_selected_marker() {
        let mut view = loaded_view();
        let id = view.visible_record(0).unwrap().id;
        view.toggle_selection(id);
        let mut state = CardListState::new();
        let out = render(&view, &mut state, 70, 12);
        assert!(out.contains("● "));
    }

    #[test]
    fn test_narrow_width_truncates_name() {
        let view = loaded_view();
        let record = view.visible_record(0).unwrap();
        // Marker, name, gap and points exactly; the borders take two more.
        let full = 2 + display_width(&record.name) + 1 + "2,000P".len();
        let width = u16::try_from(full).unwrap();
        let mut state = CardListState::new();

        let out = render(&view, &mut state, width, 6);
        assert!(out.contains('…'));
        assert!(out.contains("2,000P"));
    }
}
