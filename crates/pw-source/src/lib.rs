//! Campaign data sources and the load sequencer.
//!
//! # Overview
//!
//! - [`CampaignSource`] - the injectable fetch seam
//! - [`MockSource`] - built-in sample data behind a simulated delay
//! - [`JsonFileSource`] - a JSON array of campaigns on disk
//! - [`LoadHandle`] - runs one load in a background task, cancellable
//!
//! # Crate Dependencies
//!
//! ```text
//! pw-cli ──► pw-tui ──► pw-source ──► pw-core
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use pw_core::{SourceConfig, ViewState};
//! use pw_source::{source_from_config, LoadHandle};
//!
//! # async fn example() {
//! let mut view = ViewState::new();
//! let mut handle = LoadHandle::spawn(source_from_config(&SourceConfig::default()));
//!
//! if let Some(outcome) = handle.recv().await {
//!     view.complete_load(outcome);
//! }
//! # }
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

mod error;
mod file;
mod loader;
mod mock;
mod source;

pub use error::{LoadError, SourceError};
pub use file::JsonFileSource;
pub use loader::{load_campaigns, LoadHandle, LoadOutcome};
pub use mock::{builtin_campaigns, MockSource, DEFAULT_DELAY};
pub use source::{source_from_config, CampaignSource};
