//! Event types for the TUI event loop.
//!
//! Terminal input and timer events arrive from the [`Tui`](crate::Tui)
//! background task; the load outcome arrives from the
//! [`LoadHandle`](pw_source::LoadHandle). Both are folded into [`Event`]
//! before the application sees them.

use crossterm::event::{KeyEvent, MouseEvent};
use pw_source::LoadOutcome;

/// Events that can be processed by the TUI.
#[derive(Debug)]
#[non_exhaustive]
pub enum Event {
    /// A key press event from the terminal.
    Key(KeyEvent),

    /// A mouse event from the terminal.
    Mouse(MouseEvent),

    /// Terminal window was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// The campaign load finished.
    Loaded(LoadOutcome),

    /// Periodic tick, drives the loading animation and status expiry.
    Tick,

    /// Signal to render a new frame.
    Render,

    /// Focus gained by the terminal window.
    FocusGained,

    /// Focus lost by the terminal window.
    FocusLost,
}
