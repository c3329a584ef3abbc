//! The filter engine: derives the displayed campaign list.
//!
//! Three predicates, all conjunctive:
//!
//! - **search** - case-insensitive substring match on the campaign name
//!   (Unicode lowercase, so `amazon` finds `Amazon プライム会員登録`)
//! - **category** - exact category, or all when unset
//! - **time range** - `last_updated` at most N days before the reference
//!   date (day N included), or all
//!
//! The engine is pure: identical inputs give identical, order-stable output.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{CampaignRecord, Category};

/// Time-range selector values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    /// Updated within the last 7 days.
    Week,
    /// Updated within the last 30 days.
    Month,
    /// Updated within the last 90 days.
    Quarter,
    /// No restriction.
    #[default]
    All,
}

impl TimeRange {
    /// Window length in days, or `None` for [`All`](Self::All).
    #[inline]
    #[must_use]
    pub const fn days(self) -> Option<i64> {
        match self {
            Self::Week => Some(7),
            Self::Month => Some(30),
            Self::Quarter => Some(90),
            Self::All => None,
        }
    }

    /// Cycles the selector: all → 7 → 30 → 90 → all.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Week,
            Self::Week => Self::Month,
            Self::Month => Self::Quarter,
            Self::Quarter => Self::All,
        }
    }

    /// Returns `true` if this range restricts anything.
    #[inline]
    #[must_use]
    pub const fn is_bounded(self) -> bool {
        !matches!(self, Self::All)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.days() {
            Some(days) => write!(f, "{days}"),
            None => f.write_str("all"),
        }
    }
}

/// Error returned when a string is not a known time range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown time range '{0}' (expected 7, 30, 90 or all)")]
pub struct UnknownTimeRange(pub String);

impl FromStr for TimeRange {
    type Err = UnknownTimeRange;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "7" | "week" => Ok(Self::Week),
            "30" | "month" => Ok(Self::Month),
            "90" | "quarter" => Ok(Self::Quarter),
            "all" => Ok(Self::All),
            _ => Err(UnknownTimeRange(s.to_owned())),
        }
    }
}

/// User-chosen filter inputs.
///
/// # Examples
///
/// ```
/// use pw_core::FilterCriteria;
///
/// let criteria = FilterCriteria::search("プライム");
/// assert!(criteria.is_active());
/// assert!(!FilterCriteria::default().is_active());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Name substring, matched case-insensitively. Empty matches everything.
    pub search: String,

    /// Category to keep. `None` keeps all categories.
    pub category: Option<Category>,

    /// Recency window.
    pub range: TimeRange,

    /// Anchor date for [`range`](Self::range).
    ///
    /// When `None`, the latest `last_updated` date of the filtered slice is used.
    pub as_of: Option<NaiveDate>,
}

impl FilterCriteria {
    /// Criteria with only a search term.
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: term.into(),
            ..Self::default()
        }
    }

    /// Returns `true` if any predicate narrows the list.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.category.is_some() || self.range.is_bounded()
    }

    /// Resets search, category and range. The anchor date is kept.
    pub fn clear(&mut self) {
        self.search.clear();
        self.category = None;
        self.range = TimeRange::All;
    }
}

/// Returns the latest `last_updated` date in a collection.
///
/// This is the anchor for time-range filtering: ranges are relative to the
/// freshest data, not the wall clock.
#[must_use]
pub fn reference_date(records: &[CampaignRecord]) -> Option<NaiveDate> {
    records.iter().map(CampaignRecord::last_updated_date).max()
}

/// A compiled set of predicates.
#[derive(Debug, Clone)]
pub struct CampaignMatcher {
    needle: String,
    category: Option<Category>,
    cutoff: Option<(NaiveDate, i64)>,
}

impl CampaignMatcher {
    /// Compiles criteria against an explicit anchor date.
    #[must_use]
    pub fn new(criteria: &FilterCriteria, as_of: Option<NaiveDate>) -> Self {
        let cutoff = criteria
            .range
            .days()
            .and_then(|days| as_of.map(|anchor| (anchor, days)));
        Self {
            needle: criteria.search.to_lowercase(),
            category: criteria.category,
            cutoff,
        }
    }

    /// Returns `true` if the record passes every predicate.
    #[must_use]
    pub fn matches(&self, record: &CampaignRecord) -> bool {
        self.matches_name(&record.name)
            && self.category.is_none_or(|c| record.category == c)
            && self.matches_date(record.last_updated_date())
    }

    fn matches_name(&self, name: &str) -> bool {
        self.needle.is_empty() || name.to_lowercase().contains(&self.needle)
    }

    fn matches_date(&self, date: NaiveDate) -> bool {
        match self.cutoff {
            // Day `days` itself is inside the window. Records dated after the
            // anchor have a negative age and are kept.
            Some((anchor, days)) => (anchor - date).num_days() <= days,
            None => true,
        }
    }
}

/// Returns the positions of the records that pass the criteria, in order.
#[must_use]
pub fn filter_indices(records: &[CampaignRecord], criteria: &FilterCriteria) -> Vec<usize> {
    let as_of = criteria.as_of.or_else(|| reference_date(records));
    let matcher = CampaignMatcher::new(criteria, as_of);
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matcher.matches(record))
        .map(|(i, _)| i)
        .collect()
}

/// Returns the records that pass the criteria, preserving their order.
///
/// # Examples
///
/// ```
/// # use pw_core::{filter_campaigns, FilterCriteria, validate_campaigns, RawCampaign, RawHistoryPoint};
/// # let raw = |id: i64, name: &str| RawCampaign {
/// #     id,
/// #     name: name.to_owned(),
/// #     current_points: 1,
/// #     previous_points: 1,
/// #     category: "service".to_owned(),
/// #     history: vec![RawHistoryPoint::new("2025-03-01", 1)],
/// #     last_updated: "2025-03-01T12:00:00".to_owned(),
/// # };
/// let records = validate_campaigns(vec![
///     raw(1, "Amazon プライム会員登録"),
///     raw(2, "楽天カード発行"),
/// ]).unwrap();
///
/// let found = filter_campaigns(&records, &FilterCriteria::search("AMAZON"));
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].id.as_u64(), 1);
///
/// let all = filter_campaigns(&records, &FilterCriteria::default());
/// assert_eq!(all.len(), 2);
/// ```
#[must_use]
pub fn filter_campaigns<'a>(
    records: &'a [CampaignRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a CampaignRecord> {
    filter_indices(records, criteria)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}
