//! Campaign records read from a JSON file.

use camino::{Utf8Path, Utf8PathBuf};
use futures_util::future::{BoxFuture, FutureExt};
use pw_core::{decode_campaigns, RawCampaign};
use tracing::debug;

use crate::error::SourceError;
use crate::source::CampaignSource;

/// Reads a JSON array of campaigns from disk on every fetch.
///
/// The file uses the same camelCase keys as `pointwatch list --json`. A file
/// that is not a JSON array is a parse error; an array entry that is not a
/// campaign is reported as malformed.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: Utf8PathBuf,
}

impl JsonFileSource {
    /// Creates a source for the given file. The file is not touched until
    /// the first fetch.
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the data file path.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl CampaignSource for JsonFileSource {
    fn name(&self) -> &str {
        self.path.as_str()
    }

    fn fetch(&self) -> BoxFuture<'_, Result<Vec<RawCampaign>, SourceError>> {
        async move {
            let content = tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|e| SourceError::io(self.path.clone(), e))?;
            let entries: Vec<serde_json::Value> = serde_json::from_str(&content)
                .map_err(|e| SourceError::parse(self.path.clone(), e))?;
            let campaigns = decode_campaigns(entries)
                .map_err(|e| SourceError::malformed(self.path.clone(), e))?;
            debug!(path = %self.path, count = campaigns.len(), "Read campaign file");
            Ok(campaigns)
        }
        .boxed()
    }
}
