//! Point history panel for the selected campaign.
//!
//! Bars come from [`trend_layout`]; each is labelled with its point value
//! above and its date below.

use pw_core::{format_points, trend_layout, CampaignRecord, TrendSegment};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::strings::Strings;
use crate::text::truncate_to_width;
use crate::theme::Theme;

const BAR: &str = "█";

/// The trend panel component.
pub struct TrendPanel<'a> {
    record: Option<&'a CampaignRecord>,
    strings: &'a Strings,
    theme: &'a Theme,
}

impl<'a> TrendPanel<'a> {
    /// Creates a trend panel for the selected record, if any.
    #[must_use]
    pub const fn new(
        record: Option<&'a CampaignRecord>,
        strings: &'a Strings,
        theme: &'a Theme,
    ) -> Self {
        Self {
            record,
            strings,
            theme,
        }
    }

    fn render_note(&self, text: String, area: Rect, buf: &mut Buffer) {
        let y = area.y + area.height / 2;
        let row = Rect {
            y,
            height: u16::from(area.height > 0),
            ..area
        };
        Paragraph::new(Line::from(Span::styled(text, self.theme.dimmed_style())))
            .alignment(Alignment::Center)
            .render(row, buf);
    }

    fn render_bars(&self, segments: &[TrendSegment], area: Rect, buf: &mut Buffer) {
        // Bottom row holds the dates, one row above the tallest bar holds its label.
        let bars_bottom = area.bottom().saturating_sub(1);
        let bar_style = self.theme.base_style().fg(self.theme.bar_fg);

        for segment in segments {
            let x = area.x + segment.x;
            let bar_width = if segment.width > 1 {
                segment.width - 1
            } else {
                segment.width
            };
            let top = bars_bottom.saturating_sub(segment.height);

            for y in top..bars_bottom {
                for dx in 0..bar_width {
                    buf[(x + dx, y)].set_symbol(BAR).set_style(bar_style);
                }
            }

            let label_width = usize::from(segment.width);
            if top > area.y {
                let value = format_points(segment.point.points);
                buf.set_stringn(
                    x,
                    top - 1,
                    truncate_to_width(&value, label_width),
                    label_width,
                    self.theme.accent_style(),
                );
            }

            let date = segment.point.date.format("%m/%d").to_string();
            buf.set_stringn(
                x,
                bars_bottom,
                truncate_to_width(&date, label_width),
                label_width,
                self.theme.dimmed_style(),
            );
        }
    }
}

impl Widget for &TrendPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = self.record.map_or_else(
            || format!(" {} ", self.strings.chart_title),
            |record| format!(" {}: {} ", self.strings.chart_title, record.name),
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style)
            .title(Span::styled(title, self.theme.header_style));
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(record) = self.record else {
            self.render_note(self.strings.chart_hint.to_owned(), inner, buf);
            return;
        };

        // Two rows go to the value and date labels.
        let segments = trend_layout(&record.history, inner.width, inner.height.saturating_sub(2));
        if segments.is_empty() {
            let note = format!(
                "{} ({})",
                self.strings.chart_single_point,
                format_points(record.current_points)
            );
            self.render_note(note, inner, buf);
            return;
        }

        self.render_bars(&segments, inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pw_core::validate_campaigns;
    use pw_source::builtin_campaigns;

    fn rakuten() -> CampaignRecord {
        validate_campaigns(builtin_campaigns()).unwrap().remove(1)
    }

    fn render(record: Option<&CampaignRecord>, width: u16, height: u16) -> Buffer {
        let strings = Strings::en();
        let theme = Theme::dark();
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        (&TrendPanel::new(record, &strings, &theme)).render(area, &mut buf);
        buf
    }

    fn text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_hint_without_selection() {
        let buf = render(None, 40, 8);
        assert!(text(&buf).contains("Select a campaign"));
    }

    #[test]
    fn test_bars_and_labels() {
        let record = rakuten();
        let buf = render(Some(&record), 42, 12);
        let out = text(&buf);

        assert!(out.contains("Point History: "));
        assert!(out.contains("15,000P"));
        assert!(out.contains("14,000P"));
        assert!(out.contains("01/01"));
        assert!(out.contains("02/01"));
        assert!(out.contains(BAR));
    }

    #[test]
    fn test_first_bar_is_tallest() {
        let record = rakuten();
        let buf = render(Some(&record), 42, 12);
        let column_height = |x: u16| (0..12).filter(|&y| buf[(x, y)].symbol() == BAR).count();

        // Inner area starts at column 1; segments are 20 columns wide.
        let first = column_height(1);
        let second = column_height(21);
        assert_eq!(first, 8);
        assert!(second < first);
        assert!(second >= 1);
    }

    #[test]
    fn test_single_point_note() {
        let mut record = rakuten();
        record.history.truncate(1);
        let buf = render(Some(&record), 50, 8);
        assert!(text(&buf).contains("Only one observation (13,000P)"));
    }
}
