//! Help panel component.
//!
//! Displays a modal overlay with key bindings.

use pw_core::Locale;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Clear, Row, Table, Widget};

use crate::strings::Strings;
use crate::theme::Theme;

/// Key binding definition for the help panel.
struct KeyBinding {
    /// The key(s) to press.
    key: &'static str,
    ja: &'static str,
    en: &'static str,
}

impl KeyBinding {
    const fn description(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ja => self.ja,
            Locale::En => self.en,
        }
    }
}

/// Static list of key bindings to display.
const KEY_BINDINGS: &[KeyBinding] = &[
    // Navigation
    KeyBinding {
        key: "j / ↓",
        ja: "次の案件",
        en: "Next campaign",
    },
    KeyBinding {
        key: "k / ↑",
        ja: "前の案件",
        en: "Previous campaign",
    },
    KeyBinding {
        key: "g / G",
        ja: "先頭 / 末尾",
        en: "First / last campaign",
    },
    KeyBinding {
        key: "PgDn / PgUp",
        ja: "ページ送り",
        en: "Page down / up",
    },
    // Selection
    KeyBinding {
        key: "Enter / Space",
        ja: "選択 / 選択解除",
        en: "Select / deselect",
    },
    // Filters
    KeyBinding {
        key: "/",
        ja: "検索",
        en: "Search by name",
    },
    KeyBinding {
        key: "c",
        ja: "カテゴリー切替",
        en: "Cycle category",
    },
    KeyBinding {
        key: "t",
        ja: "期間切替",
        en: "Cycle time range",
    },
    KeyBinding {
        key: "Esc",
        ja: "選択解除 / 絞り込み解除",
        en: "Clear selection, then filters",
    },
    KeyBinding {
        key: "?",
        ja: "ヘルプ表示切替",
        en: "Toggle help",
    },
    KeyBinding {
        key: "q / Ctrl+c",
        ja: "終了",
        en: "Quit",
    },
];

/// A help panel overlay widget.
pub struct HelpPanel<'a> {
    strings: &'a Strings,
    theme: &'a Theme,
}

impl<'a> HelpPanel<'a> {
    /// Creates a new help panel.
    #[must_use]
    pub const fn new(strings: &'a Strings, theme: &'a Theme) -> Self {
        Self { strings, theme }
    }

    fn build_rows(&self) -> Vec<Row<'static>> {
        let key_style = self.theme.accent_style().add_modifier(Modifier::BOLD);
        KEY_BINDINGS
            .iter()
            .map(|binding| {
                Row::new(vec![
                    Cell::from(Span::styled(binding.key, key_style)),
                    Cell::from(Span::styled(
                        binding.description(self.strings.locale),
                        self.theme.base_style(),
                    )),
                ])
            })
            .collect()
    }
}

impl Widget for &HelpPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style)
            .title(Span::styled(
                format!(" {} ", self.strings.help_title),
                self.theme.header_style,
            ))
            .style(Style::default().bg(self.theme.overlay_bg));

        let widths = [Constraint::Length(15), Constraint::Min(20)];
        Table::new(self.build_rows(), widths)
            .block(block)
            .column_spacing(2)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_binding_is_translated() {
        for binding in KEY_BINDINGS {
            assert!(!binding.description(Locale::Ja).is_empty(), "{}", binding.key);
            assert!(!binding.description(Locale::En).is_empty(), "{}", binding.key);
        }
    }

    #[test]
    fn test_renders_english_bindings() {
        let strings = Strings::en();
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 50, 16);
        let mut buf = Buffer::empty(area);
        (&HelpPanel::new(&strings, &theme)).render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Help"));
        assert!(text.contains("Cycle time range"));
    }
}
