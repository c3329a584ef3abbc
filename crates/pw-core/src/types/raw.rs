//! Unvalidated campaign records as delivered by a data source.
//!
//! The field names match the JSON the point-site scraper produces
//! (`currentPoints`, `lastUpdated`, ...). Numbers are signed and dates are
//! plain strings: rejecting bad values is the job of [`crate::validate`],
//! which reports them as a typed [`ValidationError`](crate::ValidationError).
//! Sources reading JSON go through
//! [`decode_campaigns`](crate::decode_campaigns) so that entries of the wrong
//! shape are reported the same way.

use serde::{Deserialize, Serialize};

/// A campaign record before validation.
///
/// # Examples
///
/// ```
/// use pw_core::RawCampaign;
///
/// let json = r#"{
///     "id": 1,
///     "name": "Amazon プライム会員登録",
///     "currentPoints": 2000,
///     "previousPoints": 1800,
///     "category": "service",
///     "history": [{"date": "2025-03-01", "points": 2000}],
///     "lastUpdated": "2025-03-01T12:00:00"
/// }"#;
///
/// let raw: RawCampaign = serde_json::from_str(json).unwrap();
/// assert_eq!(raw.current_points, 2000);
/// assert_eq!(raw.history.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCampaign {
    /// Source identifier.
    pub id: i64,

    /// Campaign title.
    pub name: String,

    /// Points currently offered.
    pub current_points: i64,

    /// Points offered at the previous observation.
    pub previous_points: i64,

    /// Category name (`credit`, `shopping`, `service`).
    pub category: String,

    /// Point observations, expected oldest first.
    #[serde(default)]
    pub history: Vec<RawHistoryPoint>,

    /// Timestamp of the most recent observation.
    pub last_updated: String,
}

/// A single history observation before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawHistoryPoint {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Points offered on that date.
    pub points: i64,
}

impl RawHistoryPoint {
    /// Creates a new raw history point.
    pub fn new(date: impl Into<String>, points: i64) -> Self {
        Self {
            date: date.into(),
            points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode_campaigns, ValidationError};

    #[test]
    fn test_missing_history_defaults_to_empty() {
        let json = r#"{
            "id": 3,
            "name": "x",
            "currentPoints": 1,
            "previousPoints": 1,
            "category": "credit",
            "lastUpdated": "2025-03-01T12:00:00"
        }"#;
        let raw: RawCampaign = serde_json::from_str(json).unwrap();
        assert!(raw.history.is_empty());
    }

    #[test]
    fn test_non_numeric_points_are_a_validation_error() {
        let json = r#"[{
            "id": 3,
            "name": "x",
            "currentPoints": "lots",
            "previousPoints": 1,
            "category": "credit",
            "lastUpdated": "2025-03-01T12:00:00"
        }]"#;
        let entries = serde_json::from_str(json).unwrap();
        let err = decode_campaigns(entries).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Malformed { index: 0, id: Some(3), .. }
        ));
    }
}
