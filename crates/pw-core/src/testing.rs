//! Shared fixtures for unit tests.

use chrono::{NaiveDate, NaiveDateTime};
use smallvec::smallvec;

use crate::types::{CampaignId, CampaignRecord, Category, HistoryPoint};

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

fn timestamp(value: &str) -> NaiveDateTime {
    value.parse().unwrap()
}

/// Rising offer: 1500 → 1800 → 2000.
pub(crate) fn amazon_prime() -> CampaignRecord {
    CampaignRecord {
        id: CampaignId::new(1),
        name: "Amazon プライム会員登録".to_owned(),
        current_points: 2000,
        previous_points: 1800,
        category: Category::Service,
        history: smallvec![
            HistoryPoint::new(date("2025-01-01"), 1500),
            HistoryPoint::new(date("2025-02-01"), 1800),
            HistoryPoint::new(date("2025-03-01"), 2000),
        ],
        last_updated: timestamp("2025-03-01T12:00:00"),
    }
}

/// Falling offer: 15000 → 14000 → 13000.
pub(crate) fn rakuten_card() -> CampaignRecord {
    CampaignRecord {
        id: CampaignId::new(2),
        name: "楽天カード発行".to_owned(),
        current_points: 13000,
        previous_points: 14000,
        category: Category::Credit,
        history: smallvec![
            HistoryPoint::new(date("2025-01-01"), 15000),
            HistoryPoint::new(date("2025-02-01"), 14000),
            HistoryPoint::new(date("2025-03-01"), 13000),
        ],
        last_updated: timestamp("2025-03-01T12:00:00"),
    }
}

/// A single-observation record updated at `last_updated`.
pub(crate) fn record(id: u64, name: &str, category: Category, last_updated: &str) -> CampaignRecord {
    let last_updated = timestamp(last_updated);
    CampaignRecord {
        id: CampaignId::new(id),
        name: name.to_owned(),
        current_points: 100,
        previous_points: 100,
        category,
        history: smallvec![HistoryPoint::new(last_updated.date(), 100)],
        last_updated,
    }
}
