//! Loading placeholder shaped like the campaign list.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Widget};

use super::campaign_list::CARD_HEIGHT;
use crate::theme::Theme;

/// Placeholder cards drawn while loading.
pub const SKELETON_CARDS: u16 = 3;

/// Pulsing placeholder cards. The shade alternates with the tick count.
pub struct Skeleton<'a> {
    tick: u64,
    theme: &'a Theme,
}

impl<'a> Skeleton<'a> {
    /// Creates a skeleton for the given animation tick.
    #[must_use]
    pub const fn new(tick: u64, theme: &'a Theme) -> Self {
        Self { tick, theme }
    }

    const fn shade(&self) -> &'static str {
        if self.tick % 2 == 0 { "░" } else { "▒" }
    }
}

impl Widget for &Skeleton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let style = self.theme.base_style().fg(self.theme.skeleton_fg);
        let shade = self.shade();

        for card in 0..SKELETON_CARDS {
            let top = inner.y + card * CARD_HEIGHT;
            // Name bar, detail bar, short figure bar.
            let rows = [
                (2, inner.width.saturating_sub(4) * 2 / 3),
                (2, inner.width.saturating_sub(4) / 2),
                (inner.width.saturating_sub(16), 12),
            ];
            for (offset, (x, width)) in (0u16..).zip(rows) {
                let y = top + offset;
                if y >= inner.bottom() {
                    return;
                }
                let width = width.min(inner.width.saturating_sub(x));
                for dx in 0..width {
                    buf[(inner.x + x + dx, y)].set_symbol(shade).set_style(style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shaded_rows(buf: &Buffer, symbol: &str) -> usize {
        (0..buf.area.height)
            .filter(|&y| (0..buf.area.width).any(|x| buf[(x, y)].symbol() == symbol))
            .count()
    }

    #[test]
    fn test_three_cards() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);
        (&Skeleton::new(0, &theme)).render(area, &mut buf);
        assert_eq!(shaded_rows(&buf, "░"), 9);
    }

    #[test]
    fn test_shade_alternates() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);
        (&Skeleton::new(1, &theme)).render(area, &mut buf);
        assert_eq!(shaded_rows(&buf, "░"), 0);
        assert_eq!(shaded_rows(&buf, "▒"), 9);
    }

    #[test]
    fn test_small_area_is_clipped() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        (&Skeleton::new(0, &theme)).render(area, &mut buf);
        assert_eq!(shaded_rows(&buf, "░"), 2);
    }
}
