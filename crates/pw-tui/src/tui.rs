//! Terminal wrapper with async event streaming.
//!
//! [`Tui`] owns the Ratatui terminal and a background task that merges
//! crossterm's [`EventStream`] with tick and render timers into one mpsc
//! channel.
//!
//! ```text
//! tokio task: EventStream + tick interval + render interval
//!        │ mpsc (capacity 100)
//!        ▼
//! Tui::next_event() ──► application loop
//! ```

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture, EventStream, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use futures_util::StreamExt;
use ratatui::prelude::*;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, trace, warn};

use crate::error::TuiError;
use crate::event::Event;

/// Default channel capacity for events.
const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Terminal wrapper with async event streaming.
///
/// Call [`enter`](Self::enter) before drawing. The terminal is restored on
/// [`exit`](Self::exit) or drop.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_rx: mpsc::Receiver<Event>,
    event_tx: mpsc::Sender<Event>,
    task: Option<JoinHandle<()>>,
    cancellation_token: CancellationToken,
    tick_delay: Duration,
    render_delay: Duration,
    entered: bool,
}

impl Tui {
    /// Creates a new TUI.
    ///
    /// `tick_rate` is the interval between tick events; `frame_rate` the
    /// number of render events per second.
    pub fn new(tick_rate: Duration, frame_rate: u32) -> Result<Self, TuiError> {
        if tick_rate.is_zero() || frame_rate == 0 {
            return Err(TuiError::config("tick rate and frame rate must be positive"));
        }

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let render_delay = Duration::from_secs(1) / frame_rate;

        debug!(
            tick_ms = tick_rate.as_millis(),
            render_ms = render_delay.as_millis(),
            "Created TUI"
        );

        Ok(Self {
            terminal,
            event_rx,
            event_tx,
            task: None,
            cancellation_token: CancellationToken::new(),
            tick_delay: tick_rate,
            render_delay,
            entered: false,
        })
    }

    /// Enters raw mode and the alternate screen, and starts reading events.
    pub fn enter(&mut self) -> Result<(), TuiError> {
        debug!("Entering terminal");

        enable_raw_mode()?;
        io::stdout().execute(EnterAlternateScreen)?;
        io::stdout().execute(EnableMouseCapture)?;
        self.entered = true;

        self.terminal.hide_cursor()?;
        self.terminal.clear()?;

        self.start_event_loop();
        Ok(())
    }

    /// Stops reading events and restores the terminal.
    pub fn exit(&mut self) -> Result<(), TuiError> {
        self.stop_event_loop();
        if !self.entered {
            return Ok(());
        }
        debug!("Exiting terminal");
        self.entered = false;

        self.terminal.show_cursor()?;
        io::stdout().execute(DisableMouseCapture)?;
        io::stdout().execute(LeaveAlternateScreen)?;
        disable_raw_mode()?;
        Ok(())
    }

    /// Draws one frame.
    pub fn draw<F>(&mut self, f: F) -> Result<(), TuiError>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Waits for the next event. `None` once the channel is closed.
    pub async fn next_event(&mut self) -> Option<Event> {
        self.event_rx.recv().await
    }

    fn start_event_loop(&mut self) {
        let event_tx = self.event_tx.clone();
        let token = self.cancellation_token.clone();
        let tick_delay = self.tick_delay;
        let render_delay = self.render_delay;

        let task = tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut tick_interval = tokio::time::interval(tick_delay);
            let mut render_interval = tokio::time::interval(render_delay);
            tick_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            render_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                let event = tokio::select! {
                    () = token.cancelled() => break,
                    _ = tick_interval.tick() => Some(Event::Tick),
                    _ = render_interval.tick() => Some(Event::Render),
                    event = reader.next() => match event {
                        Some(Ok(event)) => convert_crossterm_event(&event),
                        Some(Err(e)) => {
                            warn!(error = %e, "Error reading terminal event");
                            None
                        }
                        None => break,
                    },
                };

                if let Some(event) = event {
                    trace!(?event, "Sending event");
                    if event_tx.send(event).await.is_err() {
                        error!("Event channel closed");
                        break;
                    }
                }
            }
            debug!("Event loop ended");
        });

        self.task = Some(task);
    }

    fn stop_event_loop(&mut self) {
        self.cancellation_token.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Maps crossterm events to [`Event`]. Key releases and pastes are dropped.
fn convert_crossterm_event(event: &crossterm::event::Event) -> Option<Event> {
    use crossterm::event::Event as CrosstermEvent;

    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(*key)),
        CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(*mouse)),
        CrosstermEvent::Resize(width, height) => Some(Event::Resize {
            width: *width,
            height: *height,
        }),
        CrosstermEvent::FocusGained => Some(Event::FocusGained),
        CrosstermEvent::FocusLost => Some(Event::FocusLost),
        CrosstermEvent::Key(_) | CrosstermEvent::Paste(_) => None,
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if let Err(e) = self.exit() {
            error!(error = %e, "Failed to restore terminal on drop");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_key_release_is_dropped() {
        let press = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let release = KeyEvent {
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
            ..press
        };
        assert!(convert_crossterm_event(&crossterm::event::Event::Key(press)).is_some());
        assert!(convert_crossterm_event(&crossterm::event::Event::Key(release)).is_none());
    }

    #[test]
    fn test_resize_is_forwarded() {
        let event = convert_crossterm_event(&crossterm::event::Event::Resize(80, 24));
        assert!(matches!(
            event,
            Some(Event::Resize {
                width: 80,
                height: 24
            })
        ));
    }

    #[test]
    fn test_zero_rates_rejected() {
        assert!(matches!(
            Tui::new(Duration::ZERO, 30),
            Err(TuiError::Config(_))
        ));
        assert!(matches!(
            Tui::new(Duration::from_millis(250), 0),
            Err(TuiError::Config(_))
        ));
    }
}
