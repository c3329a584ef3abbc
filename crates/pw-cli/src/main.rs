//! CLI entry point for pointwatch.
//!
//! Tracks point-reward campaigns and how their point values move over time.
//!
//! # Usage
//!
//! ```bash
//! pointwatch [OPTIONS] [COMMAND]
//!
//! # Interactive dashboard with the built-in sample data
//! pointwatch
//!
//! # Dashboard over a JSON data file, English labels
//! pointwatch --data campaigns.json --locale en
//!
//! # Credit card campaigns updated in the last 30 days
//! pointwatch list --category credit --range 30
//!
//! # One campaign with its full history, as JSON
//! pointwatch show 2 --json
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

mod output;

use std::io::Write;
use std::sync::Mutex;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{eyre, WrapErr};
use pw_core::{
    filter_campaigns, CampaignId, CampaignRecord, Category, Config, FilterCriteria, Locale,
    TimeRange,
};
use pw_source::{load_campaigns, source_from_config, CampaignSource};
use pw_tui::Strings;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Dashboard for point-reward campaigns and their point history.
///
/// Runs the interactive dashboard by default. Without `--data`, a built-in
/// sample collection is served after a short simulated delay.
#[derive(Parser)]
#[command(name = "pointwatch", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Command to execute (defaults to `tui`).
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON file with campaign records. Uses the built-in sample data if unset.
    #[arg(short, long, global = true, env = "POINTWATCH_DATA")]
    data: Option<Utf8PathBuf>,

    /// JSON configuration file. Command-line flags override its values.
    #[arg(long, global = true, env = "POINTWATCH_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Simulated latency of the built-in sample data, in milliseconds.
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    /// Make the built-in sample data fail to load.
    #[arg(long, global = true)]
    simulate_failure: bool,

    /// Language of labels and messages.
    #[arg(long, global = true, value_enum, env = "POINTWATCH_LOCALE")]
    locale: Option<LocaleArg>,

    /// Write logs to this file. The dashboard logs nowhere otherwise.
    #[arg(long, global = true)]
    log_file: Option<Utf8PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

/// Available subcommands.
#[derive(Clone, Subcommand)]
enum Commands {
    /// Start the interactive dashboard.
    Tui,

    /// Load, filter and print campaign summaries.
    List {
        /// Keep campaigns whose name contains this text (case-insensitive).
        #[arg(short, long)]
        search: Option<String>,

        /// Keep one category: credit, shopping or service.
        #[arg(short, long)]
        category: Option<Category>,

        /// Keep campaigns updated within this window: 7, 30, 90 or all.
        #[arg(short, long, default_value_t = TimeRange::All)]
        range: TimeRange,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print one campaign with its full history.
    Show {
        /// Campaign id.
        id: u64,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

/// Label language.
#[derive(Clone, Copy, ValueEnum)]
enum LocaleArg {
    /// Japanese.
    Ja,
    /// English.
    En,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Ja => Self::Ja,
            LocaleArg::En => Self::En,
        }
    }
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects `RUST_LOG` if set; otherwise `debug` with `--verbose` and `info`
/// by default. With `--log-file` logs are appended there. Without it, the
/// dashboard logs nothing and the other commands log to stderr.
fn init_tracing(cli: &Cli, interactive: bool) -> color_eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if cli.verbose { "debug" } else { "info" };
        EnvFilter::new(level)
    });

    if let Some(path) = &cli.log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .wrap_err_with(|| format!("Failed to open log file: {path}"))?;
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .with(filter)
            .init();
        return Ok(());
    }

    // Anything written to the terminal would corrupt the alternate screen.
    if interactive {
        return Ok(());
    }

    let use_ansi = !cli.no_color && std::env::var("NO_COLOR").is_err();
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(use_ansi)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
    Ok(())
}

/// Builds a [`Config`] from the optional config file and CLI overrides.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or holds invalid values.
fn build_config(cli: &Cli) -> color_eyre::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .wrap_err_with(|| format!("Failed to load config: {path}"))?,
        None => Config::default(),
    };

    if let Some(data) = &cli.data {
        config.source.data_path = Some(data.clone());
    }
    if let Some(delay) = cli.delay_ms {
        config.source.load_delay_ms = delay;
    }
    if cli.simulate_failure {
        config.source.simulate_failure = true;
    }
    if let Some(locale) = cli.locale {
        config.tui.locale = locale.into();
    }

    config.validate()?;
    Ok(config)
}

/// Loads and validates every campaign from the configured source.
async fn load(source: &dyn CampaignSource) -> color_eyre::Result<Vec<CampaignRecord>> {
    let records = load_campaigns(source)
        .await
        .wrap_err_with(|| format!("Failed to load campaigns from {}", source.name()))?;
    info!(count = records.len(), "Campaigns loaded");
    Ok(records)
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

/// Runs the interactive dashboard.
///
/// # Errors
///
/// Returns an error if the terminal fails.
async fn run_tui(config: &Config) -> color_eyre::Result<()> {
    let source = source_from_config(&config.source);
    info!(source = source.name(), "Starting dashboard");

    // Handle SIGTERM for graceful shutdown on Unix
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = signal(SignalKind::terminate())?;

        tokio::select! {
            result = pw_tui::run(&config.tui, source) => {
                result.wrap_err("Dashboard error")?;
            }
            _ = sigterm.recv() => {
                info!("Received SIGTERM, shutting down");
            }
        }
    }

    #[cfg(not(unix))]
    {
        pw_tui::run(&config.tui, source)
            .await
            .wrap_err("Dashboard error")?;
    }

    Ok(())
}

/// Prints the campaigns that pass the given filter.
///
/// # Errors
///
/// Returns an error if loading fails or stdout cannot be written.
async fn run_list(
    config: &Config,
    criteria: &FilterCriteria,
    json: bool,
) -> color_eyre::Result<()> {
    let source = source_from_config(&config.source);
    let records = load(source.as_ref()).await?;
    let visible = filter_campaigns(&records, criteria);
    info!(visible = visible.len(), total = records.len(), "Filter applied");

    let strings = Strings::for_locale(config.tui.locale);
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    if json {
        output::write_json(&mut handle, &visible)?;
    } else {
        output::write_list(&mut handle, &visible, &strings)?;
    }
    handle.flush()?;
    Ok(())
}

/// Prints one campaign.
///
/// # Errors
///
/// Returns an error if loading fails or no campaign has the id.
async fn run_show(config: &Config, id: u64, json: bool) -> color_eyre::Result<()> {
    let source = source_from_config(&config.source);
    let records = load(source.as_ref()).await?;
    let id = CampaignId::new(id);
    let record = records
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| eyre!("No campaign with id {id}"))?;

    let strings = Strings::for_locale(config.tui.locale);
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    if json {
        output::write_detail_json(&mut handle, record)?;
    } else {
        output::write_detail(&mut handle, record, &strings)?;
    }
    handle.flush()?;
    Ok(())
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    // 1. Install color-eyre FIRST (before any potential panics)
    color_eyre::install()?;

    // 2. Parse CLI arguments
    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or(Commands::Tui);

    // 3. Initialize tracing (the dashboard owns the terminal)
    init_tracing(&cli, matches!(command, Commands::Tui))?;

    // 4. Merge config file and flags
    let config = build_config(&cli)?;
    if let Some(path) = config.source.data_path.as_deref() {
        check_data_path(path)?;
    }

    // 5. Route to the command
    match command {
        Commands::Tui => run_tui(&config).await,
        Commands::List {
            search,
            category,
            range,
            json,
        } => {
            let criteria = FilterCriteria {
                search: search.unwrap_or_default(),
                category,
                range,
                as_of: None,
            };
            run_list(&config, &criteria, json).await
        }
        Commands::Show { id, json } => run_show(&config, id, json).await,
    }
}

/// Rejects a data path that is missing or a directory before anything loads.
fn check_data_path(path: &Utf8Path) -> color_eyre::Result<()> {
    if !path.exists() {
        return Err(eyre!("Data file does not exist: {path}"));
    }
    if path.is_dir() {
        return Err(eyre!("Data path is a directory: {path}"));
    }
    Ok(())
}
