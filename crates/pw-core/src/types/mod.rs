//! Domain types for pointwatch.
//!
//! # Module Organization
//!
//! - [`campaign`] - Validated campaign records, ids and history points
//! - [`category`] - Campaign categories
//! - [`raw`] - Unvalidated records as delivered by a data source
//!
//! All public types are re-exported here and at the crate root:
//!
//! ```
//! use pw_core::{CampaignId, CampaignRecord, Category, RawCampaign};
//! ```

mod campaign;
mod category;
mod raw;

pub use campaign::{CampaignId, CampaignRecord, HistoryPoint};
pub use category::{Category, UnknownCategory};
pub use raw::{RawCampaign, RawHistoryPoint};
