//! Validated campaign records.
//!
//! Sources hand records to the view only through the validation boundary
//! (see [`crate::validate`]), which guarantees a non-empty name, a known
//! category and a non-empty, chronologically ordered history. The fields are
//! public, so a record built by hand carries no such guarantee; records are
//! serialized for output but never deserialized.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::category::Category;

/// An opaque identifier for a campaign.
///
/// Newtype over the source's integer id so ids cannot be confused with
/// point values or list indices.
///
/// # Examples
///
/// ```
/// use pw_core::CampaignId;
///
/// let id = CampaignId::new(42);
/// assert_eq!(id.as_u64(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampaignId(pub u64);

impl CampaignId {
    /// Creates a new campaign id.
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the inner value.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for CampaignId {
    #[inline]
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for CampaignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One observation of a campaign's point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HistoryPoint {
    /// Day of the observation.
    pub date: NaiveDate,
    /// Points offered on that day.
    pub points: u64,
}

impl HistoryPoint {
    /// Creates a new history point.
    #[inline]
    #[must_use]
    pub const fn new(date: NaiveDate, points: u64) -> Self {
        Self { date, points }
    }
}

/// A tracked point-reward offer.
///
/// Uses [`SmallVec`] for the history; most campaigns carry a handful of
/// monthly observations.
///
/// Serializes with the same camelCase keys the sources use, so the output of
/// `pointwatch list --json` can be fed back in as a data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRecord {
    /// Unique identifier.
    pub id: CampaignId,

    /// Human-readable title.
    pub name: String,

    /// Points currently offered.
    pub current_points: u64,

    /// Points offered at the previous observation.
    pub previous_points: u64,

    /// Offer category.
    pub category: Category,

    /// Point observations, oldest first. Never empty.
    pub history: SmallVec<[HistoryPoint; 8]>,

    /// Timestamp of the most recent observation.
    pub last_updated: NaiveDateTime,
}

impl CampaignRecord {
    /// Returns the most recent history observation.
    #[inline]
    #[must_use]
    pub fn latest_point(&self) -> Option<&HistoryPoint> {
        self.history.last()
    }

    /// Returns the calendar day of [`last_updated`](Self::last_updated).
    #[inline]
    #[must_use]
    pub fn last_updated_date(&self) -> NaiveDate {
        self.last_updated.date()
    }

    /// Returns `true` if the current points disagree with the latest history entry.
    ///
    /// Sources are expected to keep these in sync, but nothing enforces it.
    #[must_use]
    pub fn is_out_of_sync(&self) -> bool {
        self.latest_point()
            .is_some_and(|point| point.points != self.current_points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::amazon_prime;

    #[test]
    fn test_campaign_id_conversions() {
        let id: CampaignId = 7u64.into();
        assert_eq!(id, CampaignId::new(7));
        assert_eq!(id.as_u64(), 7);
    }

    #[test]
    fn test_latest_point() {
        let record = amazon_prime();
        let latest = record.latest_point().unwrap();
        assert_eq!(latest.points, 2000);
        assert_eq!(latest.date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    }

    #[test]
    fn test_is_out_of_sync() {
        let mut record = amazon_prime();
        assert!(!record.is_out_of_sync());

        record.current_points = 2100;
        assert!(record.is_out_of_sync());
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = amazon_prime();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["currentPoints"], 2000);
        assert_eq!(json["previousPoints"], 1800);
        assert_eq!(json["lastUpdated"], "2025-03-01T12:00:00");
        assert_eq!(json["history"][0]["date"], "2025-01-01");
    }
}
