//! User actions for the TUI.
//!
//! Input events are mapped to an [`Action`] first; only
//! [`App::update`](crate::App::update) changes state.
//!
//! ```text
//! Key/Mouse Event → App::handle_key → Action → App::update
//! ```

/// User-initiated actions in the TUI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Action {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// Move the cursor to the next card.
    NextItem,

    /// Move the cursor to the previous card.
    PreviousItem,

    /// Move the cursor to the first card.
    FirstItem,

    /// Move the cursor to the last card.
    LastItem,

    /// Move the cursor down by one page.
    PageDown,

    /// Move the cursor up by one page.
    PageUp,

    // =========================================================================
    // Selection
    // =========================================================================
    /// Select the card under the cursor, or deselect it if already selected.
    ToggleSelection,

    /// Clear the selection.
    ClearSelection,

    // =========================================================================
    // Filtering
    // =========================================================================
    /// Start editing the search field.
    EnterSearchMode,

    /// Stop editing the search field, keeping the term.
    ExitSearchMode,

    /// Stop editing the search field and restore the previous term.
    CancelSearch,

    /// Replace the search term.
    SetSearch(String),

    /// Advance the category selector.
    CycleCategory,

    /// Advance the time-range selector.
    CycleRange,

    /// Reset search, category and range.
    ClearFilters,

    // =========================================================================
    // UI State
    // =========================================================================
    /// Toggle the help panel.
    ToggleHelp,

    /// Hide the help panel.
    HideHelp,

    // =========================================================================
    // Application Control
    // =========================================================================
    /// Quit the application.
    Quit,

    /// Render the UI.
    Render,

    /// No operation.
    #[default]
    None,
}

impl Action {
    /// Returns `true` if this action requires a re-render.
    #[must_use]
    pub const fn needs_render(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns `true` if this action changes which campaigns are visible.
    #[must_use]
    pub const fn modifies_filter(&self) -> bool {
        matches!(
            self,
            Self::SetSearch(_)
                | Self::CancelSearch
                | Self::CycleCategory
                | Self::CycleRange
                | Self::ClearFilters
        )
    }
}
