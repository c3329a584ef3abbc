//! Display-width helpers for mixed Japanese and ASCII text.

use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Terminal columns a string occupies.
pub(crate) fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Shortens `s` to at most `max` columns, ending with `…` when cut.
pub(crate) fn truncate_to_width(s: &str, max: usize) -> Cow<'_, str> {
    if display_width(s) <= max {
        return Cow::Borrowed(s);
    }
    if max == 0 {
        return Cow::Borrowed("");
    }

    let budget = max - 1;
    let mut used = 0;
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    Cow::Owned(out)
}

/// Converts a column count to `u16`, saturating.
pub(crate) fn columns(width: usize) -> u16 {
    u16::try_from(width).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_counts_wide_chars() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("楽天"), 4);
        assert_eq!(display_width("Amazon プライム"), 15);
    }

    #[test]
    fn test_truncate_short_is_borrowed() {
        assert!(matches!(truncate_to_width("楽天", 4), Cow::Borrowed("楽天")));
    }

    #[test]
    fn test_truncate_wide() {
        assert_eq!(truncate_to_width("楽天カード発行", 7), "楽天カ…");
        assert_eq!(truncate_to_width("楽天カード発行", 8), "楽天カ…");
        assert!(display_width(&truncate_to_width("楽天カード発行", 8)) <= 8);
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_to_width("campaign", 5), "camp…");
        assert_eq!(truncate_to_width("campaign", 0), "");
        assert_eq!(truncate_to_width("campaign", 1), "…");
    }
}
