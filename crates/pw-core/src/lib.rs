//! Core types, validation and view logic for pointwatch.
//!
//! This crate provides the foundational pieces used across the workspace:
//!
//! - Domain types ([`CampaignRecord`], [`Category`], [`RawCampaign`])
//! - The validation boundary ([`validate_campaigns`])
//! - The filter engine ([`filter_campaigns`], [`FilterCriteria`])
//! - Summary and trend computations ([`PointSummary`], [`trend_layout`])
//! - The dashboard view model ([`ViewState`], [`Selection`])
//! - Error types and configuration structures
//!
//! Nothing here does I/O apart from [`Config::from_file`].

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod chart;
mod config;
mod error;
pub mod filter;
pub mod selection;
pub mod summary;
pub mod types;
pub mod validate;
pub mod view;

#[cfg(test)]
mod testing;

pub use chart::{trend_layout, TrendScale, TrendSegment, MIN_RATIO};
pub use config::{ColorScheme, Config, Locale, SourceConfig, TuiConfig};
pub use error::{ConfigError, ValidationError};
pub use filter::{
    filter_campaigns, filter_indices, reference_date, CampaignMatcher, FilterCriteria, TimeRange,
    UnknownTimeRange,
};
pub use selection::Selection;
pub use summary::{format_points, group_thousands, PointSummary, Trend};
pub use types::{
    CampaignId, CampaignRecord, Category, HistoryPoint, RawCampaign, RawHistoryPoint,
    UnknownCategory,
};
pub use validate::{decode_campaigns, validate_campaigns};
pub use view::{ViewPhase, ViewState};
