//! The campaign data source seam.

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::BoxFuture;
use pw_core::{RawCampaign, SourceConfig};
use tracing::debug;

use crate::error::SourceError;
use crate::file::JsonFileSource;
use crate::mock::MockSource;

/// Something that can deliver raw campaign records.
///
/// Implementations do not validate; the loader runs every batch through
/// [`pw_core::validate_campaigns`] before the view sees it.
///
/// # Examples
///
/// ```
/// use futures_util::future::{BoxFuture, FutureExt};
/// use pw_core::RawCampaign;
/// use pw_source::{CampaignSource, SourceError};
///
/// struct Empty;
///
/// impl CampaignSource for Empty {
///     fn name(&self) -> &str {
///         "empty"
///     }
///
///     fn fetch(&self) -> BoxFuture<'_, Result<Vec<RawCampaign>, SourceError>> {
///         async { Ok(Vec::new()) }.boxed()
///     }
/// }
/// ```
pub trait CampaignSource: Send + Sync {
    /// Short description for logs and the status bar.
    fn name(&self) -> &str;

    /// Fetches every campaign the source knows about.
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<RawCampaign>, SourceError>>;
}

/// Builds the source described by the configuration.
///
/// A configured `data_path` selects a [`JsonFileSource`]; otherwise the
/// built-in [`MockSource`] is used with the configured delay and failure flag.
#[must_use]
pub fn source_from_config(config: &SourceConfig) -> Arc<dyn CampaignSource> {
    match &config.data_path {
        Some(path) => {
            debug!(%path, "Using JSON file campaign source");
            Arc::new(JsonFileSource::new(path.clone()))
        }
        None => {
            debug!(
                delay_ms = config.load_delay_ms,
                simulate_failure = config.simulate_failure,
                "Using built-in mock campaign source"
            );
            Arc::new(
                MockSource::new()
                    .with_delay(Duration::from_millis(config.load_delay_ms))
                    .with_failure(config.simulate_failure),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_from_config_defaults_to_mock() {
        let source = source_from_config(&SourceConfig::default());
        assert_eq!(source.name(), "mock");
    }

    #[test]
    fn test_source_from_config_with_path() {
        let config = SourceConfig {
            data_path: Some("campaigns.json".into()),
            ..SourceConfig::default()
        };
        let source = source_from_config(&config);
        assert_eq!(source.name(), "campaigns.json");
    }
}
