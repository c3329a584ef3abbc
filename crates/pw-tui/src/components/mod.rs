//! UI components for the TUI.
//!
//! # Component Types
//!
//! - **Widgets** (`Widget` trait): `HeaderBar`, `SearchBar`, `TrendPanel`,
//!   `Skeleton`, `MessagePanel`, `StatusBar`
//! - **Stateful Widgets** (`StatefulWidget` trait): `CampaignListView`
//! - **Overlays**: `HelpPanel`
//!
//! # Usage
//!
//! ```ignore
//! use pw_tui::components::{CampaignListView, HeaderBar};
//! ```

mod campaign_list;
mod header;
mod help;
mod message_panel;
mod search_bar;
mod skeleton;
mod status_bar;
mod trend_panel;

pub use campaign_list::{CampaignListView, CARD_HEIGHT};
pub use header::HeaderBar;
pub use help::HelpPanel;
pub use message_panel::MessagePanel;
pub use search_bar::SearchBar;
pub use skeleton::{Skeleton, SKELETON_CARDS};
pub use status_bar::StatusBar;
pub use trend_panel::TrendPanel;
