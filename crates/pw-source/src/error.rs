//! Error types for the pw-source crate.
//!
//! - [`SourceError`] for failures while fetching raw records
//! - [`LoadError`] for the whole load: fetch plus validation

use camino::Utf8PathBuf;
use pw_core::ValidationError;
use tracing::debug;

/// Errors a campaign source can report.
///
/// # Examples
///
/// ```
/// use pw_source::SourceError;
///
/// let err = SourceError::SimulatedFailure;
/// assert!(err.is_simulated());
/// assert!(err.path().is_none());
/// ```
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SourceError {
    /// The data file could not be read.
    #[error("failed to read campaign data from {path}: {source}")]
    Io {
        /// The file that failed to read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The data file is not a JSON array of campaigns.
    #[error("failed to parse campaign data from {path}: {source}")]
    Parse {
        /// The file that failed to parse.
        path: Utf8PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The data file holds an entry that is not a campaign record.
    #[error("malformed campaign data in {path}: {source}")]
    Malformed {
        /// The file holding the entry.
        path: Utf8PathBuf,
        /// Which entry was rejected and why.
        #[source]
        source: ValidationError,
    },

    /// The mock source was configured to fail.
    #[error("simulated data source failure")]
    SimulatedFailure,
}

impl SourceError {
    /// Creates a new [`SourceError::Io`] error.
    #[inline]
    pub fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a new [`SourceError::Parse`] error.
    #[inline]
    pub fn parse(path: impl Into<Utf8PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Creates a new [`SourceError::Malformed`] error.
    #[inline]
    pub fn malformed(path: impl Into<Utf8PathBuf>, source: ValidationError) -> Self {
        Self::Malformed {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this is an injected failure from the mock source.
    #[inline]
    #[must_use]
    pub const fn is_simulated(&self) -> bool {
        matches!(self, Self::SimulatedFailure)
    }

    /// Returns the data file associated with this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8PathBuf> {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } | Self::Malformed { path, .. } => {
                Some(path)
            }
            Self::SimulatedFailure => None,
        }
    }
}

/// A failed campaign load.
///
/// The dashboard shows every variant as the same load-failure message; the
/// detail goes to the log and the status bar.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source could not deliver raw records.
    #[error(transparent)]
    Source(SourceError),

    /// The source delivered records that failed validation.
    #[error("invalid campaign data: {0}")]
    Validation(#[from] ValidationError),
}

impl From<SourceError> for LoadError {
    /// A malformed entry is a validation failure, whoever detected it.
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Malformed { path, source } => {
                debug!(%path, "Malformed entry in campaign data");
                Self::Validation(source)
            }
            other => Self::Source(other),
        }
    }
}

impl LoadError {
    /// Returns `true` if the records were fetched but rejected.
    #[inline]
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
