//! Configuration structures for pointwatch.
//!
//! - [`SourceConfig`] - Where campaign data comes from and how the mock behaves
//! - [`TuiConfig`] - Terminal UI settings (tick rate, colors, language)
//! - [`Config`] - Root configuration combining all settings
//!
//! All configuration types implement [`Default`]; missing fields in a
//! configuration file fall back to these defaults.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Color scheme for the TUI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ColorScheme {
    /// Automatically detect based on terminal settings.
    #[default]
    Auto,
    /// Light color scheme (dark text on light background).
    Light,
    /// Dark color scheme (light text on dark background).
    Dark,
}

/// Language used for user-facing labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// Japanese labels, matching the point site the data comes from.
    #[default]
    Ja,
    /// English labels.
    En,
}

/// Configuration for the campaign data source.
///
/// # Examples
///
/// ```
/// use pw_core::SourceConfig;
///
/// let config = SourceConfig::default();
/// assert!(config.data_path.is_none());
/// assert_eq!(config.load_delay_ms, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// JSON file with campaign records. The built-in mock is used when unset.
    pub data_path: Option<Utf8PathBuf>,

    /// Simulated latency of the built-in mock source, in milliseconds.
    pub load_delay_ms: u64,

    /// Make the built-in mock source fail instead of returning data.
    pub simulate_failure: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            load_delay_ms: 1000,
            simulate_failure: false,
        }
    }
}

/// Configuration for the terminal user interface.
///
/// # Examples
///
/// ```
/// use pw_core::{TuiConfig, ColorScheme, Locale};
///
/// let config = TuiConfig::default();
/// assert_eq!(config.tick_rate_ms, 250);
/// assert_eq!(config.color_scheme, ColorScheme::Auto);
/// assert_eq!(config.locale, Locale::Ja);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// UI refresh rate in milliseconds.
    ///
    /// Also drives the loading skeleton animation.
    pub tick_rate_ms: u64,

    /// Render rate in frames per second.
    pub frame_rate: u32,

    /// Color scheme for the interface.
    pub color_scheme: ColorScheme,

    /// Language for labels and messages.
    pub locale: Locale,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            frame_rate: 30,
            color_scheme: ColorScheme::Auto,
            locale: Locale::Ja,
        }
    }
}

/// Root configuration for pointwatch.
///
/// # Examples
///
/// ```
/// use pw_core::Config;
///
/// let config = Config::default();
/// let json = serde_json::to_string_pretty(&config).unwrap();
/// assert!(json.contains("load_delay_ms"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Data source configuration.
    pub source: SourceConfig,

    /// Terminal UI configuration.
    pub tui: TuiConfig,
}

impl Config {
    /// Loads configuration from a JSON file.
    ///
    /// Missing sections and fields take their default values.
    pub fn from_file(path: &Utf8Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingFile(path.to_owned()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks option values that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tui.tick_rate_ms == 0 {
            return Err(ConfigError::invalid_option(
                "tui.tick_rate_ms",
                "must be greater than zero",
            ));
        }
        if self.tui.frame_rate == 0 {
            return Err(ConfigError::invalid_option(
                "tui.frame_rate",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}
