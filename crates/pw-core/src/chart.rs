//! Trend panel geometry.
//!
//! Turns a point history into bar segments that tile a fixed-width area.
//! History of N points gives N-1 segments; segment `i` shows point `i`.
//! Heights are scaled between the history's own minimum and maximum, with
//! the lowest bar kept at [`MIN_RATIO`] so it stays visible.

use crate::types::HistoryPoint;

/// Height ratio of the lowest bar.
pub const MIN_RATIO: f64 = 0.1;

/// Linear scale from a point value to a height ratio in `MIN_RATIO..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendScale {
    min: u64,
    max: u64,
}

impl TrendScale {
    /// Builds a scale spanning the given values. `None` for no values.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = u64>) -> Option<Self> {
        points.into_iter().fold(None, |scale, p| {
            Some(match scale {
                None => Self { min: p, max: p },
                Some(Self { min, max }) => Self {
                    min: min.min(p),
                    max: max.max(p),
                },
            })
        })
    }

    /// Returns the height ratio for a point value.
    ///
    /// A flat scale (min == max) maps everything to `1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self, points: u64) -> f64 {
        if self.max == self.min {
            return 1.0;
        }
        let clamped = points.clamp(self.min, self.max);
        let span = (self.max - self.min) as f64;
        MIN_RATIO + (1.0 - MIN_RATIO) * ((clamped - self.min) as f64 / span)
    }
}

/// One bar of the trend panel, in cell coordinates relative to the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendSegment {
    /// Column offset of the bar's left edge.
    pub x: u16,
    /// Width in columns.
    pub width: u16,
    /// Height in rows, at least 1 when the panel has any height.
    pub height: u16,
    /// Scaled height ratio in `MIN_RATIO..=1.0`.
    pub ratio: f64,
    /// The observation this bar shows.
    pub point: HistoryPoint,
}

/// Lays out the trend segments for a history inside a `width` x `height` area.
///
/// Returns nothing for histories of fewer than two points or an empty area.
/// Segment `i` spans `i*width/(N-1)` up to the start of the next one; the
/// last segment runs to the right edge.
#[must_use]
pub fn trend_layout(history: &[HistoryPoint], width: u16, height: u16) -> Vec<TrendSegment> {
    let n = history.len();
    if n <= 1 || width == 0 || height == 0 {
        return Vec::new();
    }
    let Some(scale) = TrendScale::from_points(history.iter().map(|p| p.points)) else {
        return Vec::new();
    };

    let count = n - 1;
    let edge = |i: usize| -> u16 {
        let offset = i * usize::from(width) / count;
        u16::try_from(offset).unwrap_or(width)
    };

    history[..count]
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = edge(i);
            let end = if i + 1 == count { width } else { edge(i + 1) };
            let ratio = scale.ratio(point.points);
            TrendSegment {
                x,
                width: end - x,
                height: scaled_height(ratio, height),
                ratio,
                point: *point,
            }
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled_height(ratio: f64, height: u16) -> u16 {
    let rows = (ratio * f64::from(height)).round();
    (rows as u16).clamp(1, height)
}
