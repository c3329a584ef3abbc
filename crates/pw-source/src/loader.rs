//! The cancellable load sequencer.
//!
//! A load runs in its own tokio task and reports exactly once through a
//! oneshot channel. The [`LoadHandle`] owns the task's cancellation token:
//! cancelling or dropping the handle stops the load, and a cancelled load
//! never delivers an outcome.
//!
//! ```text
//! LoadHandle::spawn ──► tokio task ──► fetch ──► validate ──► oneshot
//!        │                   ▲
//!        └── cancel / drop ──┘ (CancellationToken)
//! ```

use std::sync::Arc;

use pw_core::{validate_campaigns, CampaignRecord};
use tokio::sync::oneshot;
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, error, info, warn};

use crate::error::LoadError;
use crate::source::CampaignSource;

/// Result of one campaign load.
pub type LoadOutcome = Result<Vec<CampaignRecord>, LoadError>;

/// Fetches from a source and validates the result.
pub async fn load_campaigns(source: &dyn CampaignSource) -> LoadOutcome {
    let raw = source.fetch().await?;
    let records = validate_campaigns(raw)?;
    Ok(records)
}

/// Owner of an in-flight campaign load.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use pw_source::{LoadHandle, MockSource};
///
/// # async fn example() {
/// let mut handle = LoadHandle::spawn(Arc::new(MockSource::new()));
/// if let Some(outcome) = handle.recv().await {
///     println!("loaded: {}", outcome.is_ok());
/// }
/// # }
/// ```
#[derive(Debug)]
pub struct LoadHandle {
    outcome_rx: Option<oneshot::Receiver<LoadOutcome>>,
    token: CancellationToken,
    _guard: DropGuard,
}

impl LoadHandle {
    /// Starts loading from `source` on the current tokio runtime.
    #[must_use]
    pub fn spawn(source: Arc<dyn CampaignSource>) -> Self {
        let token = CancellationToken::new();
        let task_token = token.clone();
        let (outcome_tx, outcome_rx) = oneshot::channel();

        info!(source = source.name(), "Loading campaigns");
        tokio::spawn(async move {
            tokio::select! {
                () = task_token.cancelled() => {
                    debug!(source = source.name(), "Campaign load cancelled");
                }
                outcome = load_campaigns(source.as_ref()) => {
                    match &outcome {
                        Ok(records) => debug!(count = records.len(), "Campaign load finished"),
                        Err(LoadError::Source(err)) if err.is_simulated() => {
                            warn!("Simulated campaign load failure");
                        }
                        Err(LoadError::Validation(invalid)) => error!(
                            campaign = ?invalid.campaign_id(),
                            error = %invalid,
                            "Campaign data rejected"
                        ),
                        Err(err) => error!(error = %err, "Campaign load failed"),
                    }
                    // The handle may already be gone.
                    let _ = outcome_tx.send(outcome);
                }
            }
        });

        Self {
            outcome_rx: Some(outcome_rx),
            _guard: token.clone().drop_guard(),
            token,
        }
    }

    /// Waits for the outcome.
    ///
    /// Returns `None` if the load was cancelled or the outcome was already
    /// taken.
    pub async fn recv(&mut self) -> Option<LoadOutcome> {
        let rx = self.outcome_rx.as_mut()?;
        let outcome = rx.await.ok();
        self.outcome_rx = None;
        outcome
    }

    /// Stops the load. No outcome is delivered afterwards.
    pub fn cancel(&mut self) {
        self.token.cancel();
        self.outcome_rx = None;
    }

    /// Returns `true` while an outcome may still arrive.
    #[inline]
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.outcome_rx.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    use futures_util::future::{BoxFuture, FutureExt};
    use pw_core::{RawCampaign, ViewState};

    use crate::error::SourceError;
    use crate::mock::{builtin_campaigns, MockSource, DEFAULT_DELAY};

    /// Records whether a fetch ran to completion.
    struct Tracked {
        finished: Arc<AtomicBool>,
    }

    impl CampaignSource for Tracked {
        fn name(&self) -> &str {
            "tracked"
        }

        fn fetch(&self) -> BoxFuture<'_, Result<Vec<RawCampaign>, SourceError>> {
            async move {
                tokio::time::sleep(DEFAULT_DELAY).await;
                self.finished.store(true, Ordering::SeqCst);
                Ok(builtin_campaigns())
            }
            .boxed()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_view_is_loading_before_delay() {
        let mut view = ViewState::new();
        let mut handle = LoadHandle::spawn(Arc::new(MockSource::new()));

        tokio::time::sleep(DEFAULT_DELAY - Duration::from_millis(1)).await;
        let early = tokio::time::timeout(Duration::ZERO, handle.recv()).await;
        assert!(early.is_err());
        assert!(handle.is_pending());
        assert!(view.is_loading());
        assert!(view.records().is_empty());

        let outcome = handle.recv().await.unwrap();
        assert!(view.complete_load(outcome));
        assert!(!view.is_loading());
        assert_eq!(view.records().len(), 2);
        assert_eq!(view.load_error(), None);
        assert!(!handle.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_failure_reaches_view() {
        let mut view = ViewState::new();
        let mut handle = LoadHandle::spawn(Arc::new(MockSource::new().with_failure(true)));

        let outcome = handle.recv().await.unwrap();
        assert!(matches!(
            outcome,
            Err(LoadError::Source(SourceError::SimulatedFailure))
        ));
        view.complete_load(outcome);
        assert!(!view.is_loading());
        assert!(view.records().is_empty());
        assert!(view.load_error().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_records_fail_validation() {
        let mut bad = builtin_campaigns();
        bad[1].history.clear();
        let source = MockSource::new().with_campaigns(bad);

        let err = load_campaigns(&source).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_load_never_delivers() {
        let finished = Arc::new(AtomicBool::new(false));
        let mut handle = LoadHandle::spawn(Arc::new(Tracked {
            finished: Arc::clone(&finished),
        }));

        tokio::time::sleep(Duration::from_millis(10)).await;
        handle.cancel();
        assert!(!handle.is_pending());
        assert!(handle.recv().await.is_none());

        tokio::time::sleep(DEFAULT_DELAY * 2).await;
        assert!(!finished.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_cancels() {
        let finished = Arc::new(AtomicBool::new(false));
        let handle = LoadHandle::spawn(Arc::new(Tracked {
            finished: Arc::clone(&finished),
        }));

        tokio::time::sleep(Duration::from_millis(10)).await;
        drop(handle);

        tokio::time::sleep(DEFAULT_DELAY * 2).await;
        assert!(!finished.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_outcome_is_taken_once() {
        let mut handle = LoadHandle::spawn(Arc::new(MockSource::new()));
        assert!(handle.recv().await.is_some());
        assert!(handle.recv().await.is_none());
    }
}
