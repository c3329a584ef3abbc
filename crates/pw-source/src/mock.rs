//! Built-in campaign data with simulated latency.

use std::time::Duration;

use futures_util::future::{BoxFuture, FutureExt};
use pw_core::{RawCampaign, RawHistoryPoint};
use tracing::debug;

use crate::error::SourceError;
use crate::source::CampaignSource;

/// Default simulated latency.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// An in-memory source that waits before answering.
///
/// Serves [`builtin_campaigns`] unless given its own records, and can be told
/// to fail so the error path can be exercised without a broken data file.
#[derive(Debug, Clone)]
pub struct MockSource {
    campaigns: Vec<RawCampaign>,
    delay: Duration,
    fail: bool,
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// Creates a mock serving the built-in campaigns after [`DEFAULT_DELAY`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            campaigns: builtin_campaigns(),
            delay: DEFAULT_DELAY,
            fail: false,
        }
    }

    /// Replaces the served campaigns.
    #[must_use]
    pub fn with_campaigns(mut self, campaigns: Vec<RawCampaign>) -> Self {
        self.campaigns = campaigns;
        self
    }

    /// Sets the simulated latency.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Makes every fetch fail with [`SourceError::SimulatedFailure`].
    #[must_use]
    pub const fn with_failure(mut self, fail: bool) -> Self {
        self.fail = fail;
        self
    }

    /// Returns the simulated latency.
    #[inline]
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl CampaignSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    fn fetch(&self) -> BoxFuture<'_, Result<Vec<RawCampaign>, SourceError>> {
        async move {
            tokio::time::sleep(self.delay).await;
            if self.fail {
                debug!("Mock source failing on request");
                return Err(SourceError::SimulatedFailure);
            }
            Ok(self.campaigns.clone())
        }
        .boxed()
    }
}

/// The two sample campaigns served by default.
#[must_use]
pub fn builtin_campaigns() -> Vec<RawCampaign> {
    vec![
        RawCampaign {
            id: 1,
            name: "Amazon プライム会員登録".to_owned(),
            current_points: 2000,
            previous_points: 1800,
            category: "service".to_owned(),
            history: vec![
                RawHistoryPoint::new("2025-01-01", 1500),
                RawHistoryPoint::new("2025-02-01", 1800),
                RawHistoryPoint::new("2025-03-01", 2000),
            ],
            last_updated: "2025-03-01T12:00:00".to_owned(),
        },
        RawCampaign {
            id: 2,
            name: "楽天カード発行".to_owned(),
            current_points: 13000,
            previous_points: 14000,
            category: "credit".to_owned(),
            history: vec![
                RawHistoryPoint::new("2025-01-01", 15000),
                RawHistoryPoint::new("2025-02-01", 14000),
                RawHistoryPoint::new("2025-03-01", 13000),
            ],
            last_updated: "2025-03-01T12:00:00".to_owned(),
        },
    ]
}
