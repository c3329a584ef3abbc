//! Per-campaign summary values shown on each list card.
//!
//! All values are derived on demand from a [`CampaignRecord`]; nothing is cached.

use serde::Serialize;

use crate::types::CampaignRecord;

/// Direction of the latest point change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// Points stayed the same or increased.
    Up,
    /// Points decreased.
    Down,
}

impl Trend {
    /// Classifies a signed change. Zero counts as [`Up`](Self::Up).
    #[inline]
    #[must_use]
    pub const fn from_delta(delta: i64) -> Self {
        if delta >= 0 { Self::Up } else { Self::Down }
    }

    /// Arrow glyph for display.
    #[inline]
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
        }
    }
}

/// Derived point figures for one campaign.
///
/// # Examples
///
/// ```
/// use pw_core::{PointSummary, Trend};
///
/// let summary = PointSummary::compute(1800, 2000, &[1500, 1800, 2000]);
/// assert_eq!(summary.trend, Trend::Up);
/// assert_eq!(summary.magnitude, 200);
/// assert_eq!(summary.peak, Some(2000));
/// assert_eq!(summary.trough, Some(1500));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PointSummary {
    /// Points currently offered.
    pub current: u64,
    /// Signed change from the previous observation.
    pub delta: i64,
    /// Direction of the change.
    pub trend: Trend,
    /// Absolute size of the change.
    pub magnitude: u64,
    /// Highest point value in the history.
    pub peak: Option<u64>,
    /// Lowest point value in the history.
    pub trough: Option<u64>,
}

impl PointSummary {
    /// Computes a summary from raw figures.
    ///
    /// `peak` and `trough` are `None` only for an empty history, which a
    /// validated record never has.
    #[must_use]
    pub fn compute(previous: u64, current: u64, history: &[u64]) -> Self {
        let delta = signed_difference(current, previous);
        Self {
            current,
            delta,
            trend: Trend::from_delta(delta),
            magnitude: current.abs_diff(previous),
            peak: history.iter().copied().max(),
            trough: history.iter().copied().min(),
        }
    }

    /// Computes the summary for a campaign record.
    #[must_use]
    pub fn of(record: &CampaignRecord) -> Self {
        let history: Vec<u64> = record.history.iter().map(|p| p.points).collect();
        Self::compute(record.previous_points, record.current_points, &history)
    }
}

impl CampaignRecord {
    /// Shorthand for [`PointSummary::of`].
    #[inline]
    #[must_use]
    pub fn summary(&self) -> PointSummary {
        PointSummary::of(self)
    }
}

/// `current - previous`, saturating at the `i64` range.
fn signed_difference(current: u64, previous: u64) -> i64 {
    let magnitude = i64::try_from(current.abs_diff(previous)).unwrap_or(i64::MAX);
    if current >= previous {
        magnitude
    } else {
        -magnitude
    }
}

/// Formats a point value with thousands separators and a `P` suffix.
///
/// # Examples
///
/// ```
/// use pw_core::format_points;
///
/// assert_eq!(format_points(2000), "2,000P");
/// assert_eq!(format_points(999), "999P");
/// assert_eq!(format_points(1_234_567), "1,234,567P");
/// ```
#[must_use]
pub fn format_points(points: u64) -> String {
    let mut out = group_thousands(points);
    out.push('P');
    out
}

/// Formats an integer with `,` every three digits.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
