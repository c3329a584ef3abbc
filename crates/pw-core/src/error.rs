//! Error types for the pw-core crate.
//!
//! This module provides:
//!
//! - [`ConfigError`] for configuration loading failures
//! - [`ValidationError`] for campaign records rejected at the data-source boundary

use camino::Utf8PathBuf;

/// Errors that can occur during configuration loading and validation.
///
/// # Examples
///
/// ```
/// use pw_core::ConfigError;
/// use camino::Utf8PathBuf;
///
/// let error = ConfigError::MissingFile(Utf8PathBuf::from("/etc/pointwatch.json"));
/// assert!(error.to_string().contains("/etc/pointwatch.json"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("configuration file not found: {0}")]
    MissingFile(Utf8PathBuf),

    /// A configuration option has an invalid value.
    #[error("invalid configuration option '{option}': {reason}")]
    InvalidOption {
        /// The name of the invalid option.
        option: String,
        /// Explanation of why the option is invalid.
        reason: String,
    },

    /// An I/O error occurred while reading configuration.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    /// Creates a new [`ConfigError::InvalidOption`] error.
    pub fn invalid_option(option: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
            reason: reason.into(),
        }
    }
}

/// A campaign record that failed validation.
///
/// Raw records coming from a campaign source are checked once, before
/// they reach the view. The first problem found is reported and the load
/// as a whole fails fast.
///
/// # Examples
///
/// ```
/// use pw_core::ValidationError;
///
/// let err = ValidationError::EmptyHistory { id: 7 };
/// assert_eq!(err.campaign_id(), Some(7));
/// assert_eq!(err.to_string(), "campaign 7: history is empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// The campaign id is negative.
    #[error("campaign id must be non-negative, got {0}")]
    InvalidId(i64),

    /// Two records share the same id.
    #[error("duplicate campaign id {0}")]
    DuplicateId(u64),

    /// The campaign name is empty or whitespace.
    #[error("campaign {id}: name is empty")]
    EmptyName {
        /// Offending campaign id.
        id: u64,
    },

    /// A point value is negative.
    #[error("campaign {id}: {field} must be non-negative, got {value}")]
    NegativePoints {
        /// Offending campaign id.
        id: u64,
        /// Which field carried the value.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// The category is not one of the known categories.
    #[error("campaign {id}: unknown category '{value}'")]
    UnknownCategory {
        /// Offending campaign id.
        id: u64,
        /// The rejected category string.
        value: String,
    },

    /// The point history has no entries.
    #[error("campaign {id}: history is empty")]
    EmptyHistory {
        /// Offending campaign id.
        id: u64,
    },

    /// A history date is not a `YYYY-MM-DD` calendar date.
    #[error("campaign {id}: invalid date '{value}'")]
    InvalidDate {
        /// Offending campaign id.
        id: u64,
        /// The rejected date string.
        value: String,
    },

    /// The last-updated timestamp could not be parsed.
    #[error("campaign {id}: invalid timestamp '{value}'")]
    InvalidTimestamp {
        /// Offending campaign id.
        id: u64,
        /// The rejected timestamp string.
        value: String,
    },

    /// An entry does not have the shape of a campaign record: a required
    /// field is missing or a value has the wrong type.
    #[error("campaign entry {index} is malformed: {reason}")]
    Malformed {
        /// Position of the entry in the source data.
        index: usize,
        /// The entry's id, if it carries a usable one.
        id: Option<u64>,
        /// What was wrong with the entry.
        reason: String,
    },

    /// A history entry is dated before its predecessor.
    #[error("campaign {id}: history entry {index} is dated before the previous entry")]
    HistoryOutOfOrder {
        /// Offending campaign id.
        id: u64,
        /// Index of the out-of-order entry.
        index: usize,
    },
}

impl ValidationError {
    /// Creates a new [`ValidationError::NegativePoints`] error.
    #[inline]
    #[must_use]
    pub const fn negative_points(id: u64, field: &'static str, value: i64) -> Self {
        Self::NegativePoints { id, field, value }
    }

    /// Returns the id of the campaign that failed validation, if known.
    ///
    /// [`InvalidId`](Self::InvalidId) carries no usable id, and a
    /// [`Malformed`](Self::Malformed) entry may not have one.
    #[must_use]
    pub const fn campaign_id(&self) -> Option<u64> {
        match self {
            Self::InvalidId(_) => None,
            Self::Malformed { id, .. } => *id,
            Self::DuplicateId(id)
            | Self::EmptyName { id }
            | Self::NegativePoints { id, .. }
            | Self::UnknownCategory { id, .. }
            | Self::EmptyHistory { id }
            | Self::InvalidDate { id, .. }
            | Self::InvalidTimestamp { id, .. }
            | Self::HistoryOutOfOrder { id, .. } => Some(*id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_display() {
        let error = ConfigError::MissingFile(Utf8PathBuf::from("/missing/config.json"));
        assert!(error.to_string().contains("/missing/config.json"));
    }

    #[test]
    fn test_invalid_option_display() {
        let error = ConfigError::invalid_option("tick_rate_ms", "must be positive");
        let msg = error.to_string();
        assert!(msg.contains("tick_rate_ms"));
        assert!(msg.contains("must be positive"));
    }

    #[test]
    fn test_negative_points_display() {
        let err = ValidationError::negative_points(2, "currentPoints", -5);
        assert_eq!(
            err.to_string(),
            "campaign 2: currentPoints must be non-negative, got -5"
        );
    }

    #[test]
    fn test_campaign_id() {
        assert_eq!(ValidationError::InvalidId(-1).campaign_id(), None);
        assert_eq!(ValidationError::DuplicateId(3).campaign_id(), Some(3));
        assert_eq!(
            ValidationError::HistoryOutOfOrder { id: 9, index: 2 }.campaign_id(),
            Some(9)
        );
    }

    #[test]
    fn test_malformed_display() {
        let err = ValidationError::Malformed {
            index: 1,
            id: Some(3),
            reason: "missing field `name`".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "campaign entry 1 is malformed: missing field `name`"
        );
        assert_eq!(err.campaign_id(), Some(3));
    }
}
