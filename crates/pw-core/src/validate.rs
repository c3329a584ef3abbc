//! Validation boundary between data sources and the view.
//!
//! Untyped JSON entries are decoded into [`RawCampaign`]s by
//! [`decode_campaigns`], and every [`RawCampaign`] is turned into a
//! [`CampaignRecord`] here or rejected with a [`ValidationError`]. A whole
//! collection fails on its first bad record; the view never sees partially
//! valid data.
//!
//! # Examples
//!
//! ```
//! use pw_core::{validate_campaigns, RawCampaign, RawHistoryPoint};
//!
//! let raw = RawCampaign {
//!     id: 1,
//!     name: "楽天カード発行".to_owned(),
//!     current_points: 13000,
//!     previous_points: 14000,
//!     category: "credit".to_owned(),
//!     history: vec![RawHistoryPoint::new("2025-03-01", 13000)],
//!     last_updated: "2025-03-01T12:00:00".to_owned(),
//! };
//!
//! let records = validate_campaigns(vec![raw]).unwrap();
//! assert_eq!(records[0].current_points, 13000);
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rustc_hash::FxHashSet;
use serde_json::Value;
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::error::ValidationError;
use crate::types::{CampaignId, CampaignRecord, Category, HistoryPoint, RawCampaign};

/// Date format for history entries.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Decodes JSON entries into raw records, preserving order.
///
/// An entry of the wrong shape (a missing `name`, non-numeric points, ...)
/// is rejected here as [`ValidationError::Malformed`] with its position and,
/// when readable, its id.
///
/// # Examples
///
/// ```
/// use pw_core::{decode_campaigns, ValidationError};
///
/// let entries = serde_json::from_str(r#"[{"id": 4, "currentPoints": "lots"}]"#).unwrap();
/// let err = decode_campaigns(entries).unwrap_err();
/// assert!(matches!(err, ValidationError::Malformed { index: 0, id: Some(4), .. }));
/// ```
pub fn decode_campaigns(entries: Vec<Value>) -> Result<Vec<RawCampaign>, ValidationError> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let id = entry.get("id").and_then(Value::as_u64);
            serde_json::from_value(entry).map_err(|err| ValidationError::Malformed {
                index,
                id,
                reason: err.to_string(),
            })
        })
        .collect()
}

/// Validates a whole collection, preserving order.
///
/// Fails on the first invalid record or on a repeated id.
pub fn validate_campaigns(raw: Vec<RawCampaign>) -> Result<Vec<CampaignRecord>, ValidationError> {
    let mut seen = FxHashSet::default();
    let mut records = Vec::with_capacity(raw.len());

    for campaign in raw {
        let record = CampaignRecord::try_from(campaign)?;
        if !seen.insert(record.id) {
            return Err(ValidationError::DuplicateId(record.id.as_u64()));
        }
        records.push(record);
    }

    debug!(count = records.len(), "Validated campaign records");
    Ok(records)
}

impl TryFrom<RawCampaign> for CampaignRecord {
    type Error = ValidationError;

    fn try_from(raw: RawCampaign) -> Result<Self, Self::Error> {
        let id = u64::try_from(raw.id).map_err(|_| ValidationError::InvalidId(raw.id))?;

        let name = raw.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName { id });
        }

        let current_points = non_negative(id, "currentPoints", raw.current_points)?;
        let previous_points = non_negative(id, "previousPoints", raw.previous_points)?;

        let category = raw
            .category
            .parse::<Category>()
            .map_err(|_| ValidationError::UnknownCategory {
                id,
                value: raw.category.clone(),
            })?;

        if raw.history.is_empty() {
            return Err(ValidationError::EmptyHistory { id });
        }

        let mut history: SmallVec<[HistoryPoint; 8]> = SmallVec::with_capacity(raw.history.len());
        for (index, entry) in raw.history.iter().enumerate() {
            let date = NaiveDate::parse_from_str(entry.date.trim(), DATE_FORMAT).map_err(|_| {
                ValidationError::InvalidDate {
                    id,
                    value: entry.date.clone(),
                }
            })?;
            if history.last().is_some_and(|prev| prev.date > date) {
                return Err(ValidationError::HistoryOutOfOrder { id, index });
            }
            let points = non_negative(id, "history.points", entry.points)?;
            history.push(HistoryPoint::new(date, points));
        }

        let last_updated =
            parse_timestamp(&raw.last_updated).ok_or_else(|| ValidationError::InvalidTimestamp {
                id,
                value: raw.last_updated.clone(),
            })?;

        let record = Self {
            id: CampaignId::new(id),
            name: name.to_owned(),
            current_points,
            previous_points,
            category,
            history,
            last_updated,
        };

        if record.is_out_of_sync() {
            warn!(
                id,
                current = record.current_points,
                latest = record.latest_point().map(|p| p.points),
                "Current points differ from latest history entry"
            );
        }

        Ok(record)
    }
}

fn non_negative(id: u64, field: &'static str, value: i64) -> Result<u64, ValidationError> {
    u64::try_from(value).map_err(|_| ValidationError::negative_points(id, field, value))
}

/// Parses a last-updated timestamp.
///
/// Accepts a local `YYYY-MM-DDTHH:MM:SS` timestamp (fractional seconds
/// allowed), RFC 3339 with an offset (kept as local wall time), or a bare date
/// (midnight).
fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    value
        .parse::<NaiveDateTime>()
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.naive_local())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
