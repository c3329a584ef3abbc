//! Terminal dashboard for campaign point trends using Ratatui.
//!
//! The dashboard loads campaigns once from a [`CampaignSource`], then lets
//! the user search, filter by category and time range, and select a
//! campaign to see its point history.
//!
//! # Architecture
//!
//! ```text
//! crates/pw-tui/src/
//!   lib.rs           # Public API exports and the event loop
//!   app.rs           # Application state, key handling, list cursor
//!   event.rs         # Event types (Key, Mouse, Loaded, Tick, Render)
//!   tui.rs           # Terminal wrapper with async event streaming
//!   action.rs        # User actions (commands from key bindings)
//!   ui.rs            # Main layout rendering orchestration
//!   theme.rs         # Color scheme and styling constants
//!   strings.rs       # Japanese and English labels
//!   text.rs          # Display-width helpers
//!   error.rs         # TUI-specific error types
//!   components/
//!     campaign_list.rs # CampaignListView (stateful card list)
//!     trend_panel.rs   # TrendPanel for the selected campaign
//!     search_bar.rs    # Search input and filter selectors
//!     skeleton.rs      # Loading placeholder
//!     message_panel.rs # Failure and empty-state message
//!     header.rs        # HeaderBar component
//!     status_bar.rs    # StatusBar component
//!     help.rs          # HelpPanel modal overlay
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use pw_core::TuiConfig;
//! use pw_source::MockSource;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pw_tui::TuiError> {
//!     pw_tui::run(&TuiConfig::default(), Arc::new(MockSource::new())).await
//! }
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod action;
pub mod app;
pub mod components;
pub mod error;
pub mod event;
pub mod strings;
pub mod theme;
pub mod tui;
pub mod ui;

mod text;

use std::sync::Arc;
use std::time::Duration;

use pw_core::TuiConfig;
use pw_source::{CampaignSource, LoadHandle};
use tracing::{debug, error, info};

// Public re-exports
pub use action::Action;
pub use app::{App, AppMode, CardListState, StatusMessage};
pub use error::TuiError;
pub use event::Event;
pub use strings::Strings;
pub use theme::Theme;
pub use tui::Tui;

/// Runs the dashboard until the user quits.
///
/// 1. Starts loading from `source` in the background
/// 2. Enters the terminal
/// 3. Runs the event loop, feeding the load outcome in as an event
/// 4. Restores the terminal
///
/// Quitting before the load finishes cancels it.
///
/// # Errors
///
/// Returns an error if the configuration is unusable or the terminal cannot
/// be initialized, drawn to, or restored.
pub async fn run(config: &TuiConfig, source: Arc<dyn CampaignSource>) -> Result<(), TuiError> {
    let mut tui = Tui::new(Duration::from_millis(config.tick_rate_ms), config.frame_rate)?;
    let mut app = App::new(Strings::for_locale(config.locale));
    let theme = Theme::from_scheme(config.color_scheme);

    let mut load = LoadHandle::spawn(source);

    tui.enter()?;

    info!("Entering main event loop");
    let result = run_event_loop(&mut tui, &mut app, &mut load, &theme).await;

    if load.is_pending() {
        debug!("Cancelling unfinished load");
        load.cancel();
    }

    tui.exit()?;
    result
}

/// Runs the main event loop.
async fn run_event_loop(
    tui: &mut Tui,
    app: &mut App,
    load: &mut LoadHandle,
    theme: &Theme,
) -> Result<(), TuiError> {
    let mut dirty = true;
    loop {
        if dirty {
            tui.draw(|frame| ui::render(app, frame, theme))?;
        }

        let event = tokio::select! {
            event = tui.next_event() => {
                let Some(event) = event else {
                    error!("Terminal event channel closed");
                    return Err(TuiError::ChannelClosed);
                };
                event
            }

            outcome = load.recv(), if load.is_pending() => {
                // No outcome means the load was cancelled.
                let Some(outcome) = outcome else { continue };
                Event::Loaded(outcome)
            }
        };

        let action = dispatch(app, event);
        dirty = action.needs_render();
        if action.modifies_filter() {
            debug!(?action, "Filter changed");
        }
        app.update(action);

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Routes one event to the app and returns the action to apply.
fn dispatch(app: &mut App, event: Event) -> Action {
    match event {
        Event::Key(key) => app.handle_key(key),
        Event::Mouse(mouse) => app.handle_mouse(mouse),
        Event::Loaded(outcome) => {
            app.handle_loaded(outcome);
            Action::Render
        }
        Event::Tick => {
            app.tick();
            Action::None
        }
        Event::Resize { .. } | Event::Render => Action::Render,
        Event::FocusGained | Event::FocusLost => Action::None,
    }
}
