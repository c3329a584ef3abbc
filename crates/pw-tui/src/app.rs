//! Application state and lifecycle management.
//!
//! ```text
//! App
//!  ├── view: ViewState           # Records, filters, load status, selection
//!  ├── strings: Strings          # Localized labels
//!  ├── mode: AppMode             # Normal / Searching / Help
//!  ├── list_state: CardListState # Cursor and scroll position
//!  └── status: Option<StatusMessage>
//! ```

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use pw_core::{CampaignRecord, ViewPhase, ViewState};
use pw_source::LoadOutcome;
use tracing::{debug, info, warn};

use crate::action::Action;
use crate::strings::Strings;

/// The current mode of the application UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Browsing the campaign list.
    #[default]
    Normal,

    /// Typing in the search field.
    Searching,

    /// Help panel is displayed.
    Help,
}

/// Cursor and scroll position of the campaign list.
///
/// Positions index the *visible* records. The list length is passed in by
/// the caller because it changes with the filter.
#[derive(Debug, Clone, Default)]
pub struct CardListState {
    /// Card under the cursor.
    pub cursor: Option<usize>,

    /// First card drawn.
    pub scroll_offset: usize,

    /// Number of cards that fit on screen, set while rendering.
    pub visible_height: usize,
}

impl CardListState {
    /// Creates a new list state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor to the next card, wrapping at the end.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.cursor = None;
            return;
        }
        self.cursor = Some(match self.cursor {
            Some(i) if i + 1 < len => i + 1,
            Some(_) | None => 0,
        });
        self.ensure_visible();
    }

    /// Moves the cursor to the previous card, wrapping at the start.
    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            self.cursor = None;
            return;
        }
        self.cursor = Some(match self.cursor {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
        self.ensure_visible();
    }

    /// Moves the cursor to the first card.
    pub fn select_first(&mut self, len: usize) {
        self.cursor = (len > 0).then_some(0);
        self.scroll_offset = 0;
    }

    /// Moves the cursor to the last card.
    pub fn select_last(&mut self, len: usize) {
        self.cursor = len.checked_sub(1);
        self.ensure_visible();
    }

    /// Moves the cursor down by one page.
    pub fn page_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let page = self.visible_height.max(1);
        self.cursor = Some(self.cursor.map_or(0, |i| i + page).min(len - 1));
        self.ensure_visible();
    }

    /// Moves the cursor up by one page.
    pub fn page_up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let page = self.visible_height.max(1);
        self.cursor = Some(self.cursor.map_or(0, |i| i.saturating_sub(page)));
        self.ensure_visible();
    }

    /// Puts the cursor on the first card after the list contents changed.
    pub fn reset(&mut self, len: usize) {
        self.cursor = (len > 0).then_some(0);
        self.scroll_offset = 0;
    }

    /// Scrolls so the cursor is on screen.
    pub fn ensure_visible(&mut self) {
        let Some(cursor) = self.cursor else {
            return;
        };
        let height = self.visible_height.max(1);
        if cursor < self.scroll_offset {
            self.scroll_offset = cursor;
        } else if cursor >= self.scroll_offset + height {
            self.scroll_offset = cursor + 1 - height;
        }
    }
}

/// Status message to display in the status bar.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text.
    pub text: String,

    /// When the message was created.
    pub timestamp: Instant,

    /// Whether this is an error message.
    pub is_error: bool,
}

impl StatusMessage {
    /// Creates a new info message.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: Instant::now(),
            is_error: false,
        }
    }

    /// Creates a new error message.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: Instant::now(),
            is_error: true,
        }
    }

    /// Returns `true` once an info message is older than 5 seconds.
    ///
    /// Error messages stay until replaced.
    #[must_use]
    pub fn should_hide(&self) -> bool {
        !self.is_error && self.timestamp.elapsed().as_secs() > 5
    }
}

/// The main application state.
#[derive(Debug)]
pub struct App {
    /// Records, filters, load status and selection.
    pub view: ViewState,

    /// Localized labels.
    pub strings: Strings,

    /// Current UI mode.
    pub mode: AppMode,

    /// Campaign list cursor.
    pub list_state: CardListState,

    /// Search term when editing started, restored on cancel.
    search_backup: String,

    /// Status message to display.
    pub status: Option<StatusMessage>,

    /// Ticks since start, drives the loading animation.
    pub tick_count: u64,

    /// Whether the application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates an application waiting for its first load.
    #[must_use]
    pub fn new(strings: Strings) -> Self {
        Self {
            view: ViewState::new(),
            strings,
            mode: AppMode::Normal,
            list_state: CardListState::new(),
            search_backup: String::new(),
            status: None,
            tick_count: 0,
            should_quit: false,
        }
    }

    /// Applies the load outcome.
    ///
    /// The failure detail goes to the status bar; the body shows only the
    /// static load-failure message.
    pub fn handle_loaded(&mut self, outcome: LoadOutcome) {
        let status = match &outcome {
            Ok(records) => StatusMessage::info(self.strings.loaded(records.len())),
            Err(e) => StatusMessage::error(e.to_string()),
        };
        if self.view.complete_load(outcome) {
            self.status = Some(status);
            self.list_state.reset(self.view.visible_len());
        } else {
            warn!("Dropped a second load outcome");
        }
    }

    /// Handles a key event and returns the resulting action.
    #[must_use]
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.mode {
            AppMode::Normal => self.handle_normal_key(key),
            AppMode::Searching => self.handle_search_key(key),
            AppMode::Help => Self::handle_help_key(key),
        }
    }

    fn handle_normal_key(&self, key: KeyEvent) -> Action {
        // Nothing but the failure message is left to interact with.
        if self.view.phase() == ViewPhase::Failed {
            return match key.code {
                KeyCode::Char('q') => Action::Quit,
                KeyCode::Char('?') => Action::ToggleHelp,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') => Action::ToggleHelp,
            KeyCode::Char('j') | KeyCode::Down => Action::NextItem,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousItem,
            KeyCode::Char('g') | KeyCode::Home => Action::FirstItem,
            KeyCode::Char('G') | KeyCode::End => Action::LastItem,
            KeyCode::PageDown => Action::PageDown,
            KeyCode::PageUp => Action::PageUp,
            KeyCode::Char('/') => Action::EnterSearchMode,
            KeyCode::Char('c') => Action::CycleCategory,
            KeyCode::Char('t') => Action::CycleRange,
            KeyCode::Enter | KeyCode::Char(' ') => Action::ToggleSelection,
            KeyCode::Esc => {
                if self.view.selection().id().is_some() {
                    Action::ClearSelection
                } else if self.view.criteria().is_active() {
                    Action::ClearFilters
                } else {
                    Action::None
                }
            }
            _ => Action::None,
        }
    }

    fn handle_search_key(&self, key: KeyEvent) -> Action {
        let mut term = self.view.criteria().search.clone();
        match key.code {
            KeyCode::Esc => Action::CancelSearch,
            KeyCode::Enter | KeyCode::Down | KeyCode::Up => Action::ExitSearchMode,
            KeyCode::Backspace => {
                term.pop();
                Action::SetSearch(term)
            }
            KeyCode::Char(c) => {
                term.push(c);
                Action::SetSearch(term)
            }
            _ => Action::None,
        }
    }

    fn handle_help_key(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | '?') => Action::HideHelp,
            _ => Action::None,
        }
    }

    /// Handles a mouse event: the wheel moves the cursor.
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent) -> Action {
        if self.mode != AppMode::Normal {
            return Action::None;
        }
        match event.kind {
            MouseEventKind::ScrollDown => Action::NextItem,
            MouseEventKind::ScrollUp => Action::PreviousItem,
            _ => Action::None,
        }
    }

    /// Updates the application state based on an action.
    pub fn update(&mut self, action: Action) {
        let len = self.view.visible_len();
        match action {
            Action::Quit => self.quit(),

            Action::NextItem => self.list_state.select_next(len),
            Action::PreviousItem => self.list_state.select_previous(len),
            Action::FirstItem => self.list_state.select_first(len),
            Action::LastItem => self.list_state.select_last(len),
            Action::PageDown => self.list_state.page_down(len),
            Action::PageUp => self.list_state.page_up(len),

            Action::ToggleSelection => {
                if let Some(id) = self.cursor_record().map(|r| r.id) {
                    self.view.toggle_selection(id);
                }
            }
            Action::ClearSelection => self.view.clear_selection(),

            Action::EnterSearchMode => {
                self.search_backup.clone_from(&self.view.criteria().search);
                self.mode = AppMode::Searching;
            }
            Action::ExitSearchMode => self.mode = AppMode::Normal,
            Action::CancelSearch => {
                let previous = std::mem::take(&mut self.search_backup);
                self.view.set_search(previous);
                self.mode = AppMode::Normal;
                self.list_state.reset(self.view.visible_len());
            }
            Action::SetSearch(term) => {
                self.view.set_search(term);
                self.list_state.reset(self.view.visible_len());
            }
            Action::CycleCategory => {
                let category = self.view.cycle_category();
                debug!(category = ?category, "Category filter changed");
                self.list_state.reset(self.view.visible_len());
            }
            Action::CycleRange => {
                let range = self.view.cycle_range();
                debug!(%range, "Time range filter changed");
                self.list_state.reset(self.view.visible_len());
            }
            Action::ClearFilters => {
                self.view.clear_filters();
                self.list_state.reset(self.view.visible_len());
            }

            Action::ToggleHelp => {
                self.mode = if self.mode == AppMode::Help {
                    AppMode::Normal
                } else {
                    AppMode::Help
                };
            }
            Action::HideHelp => self.mode = AppMode::Normal,

            Action::Render | Action::None => {}
        }
    }

    /// Handles a tick event.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.status.as_ref().is_some_and(StatusMessage::should_hide) {
            self.status = None;
        }
    }

    /// Marks the application for exit.
    pub fn quit(&mut self) {
        info!("Quit requested");
        self.should_quit = true;
    }

    /// The visible record under the cursor.
    #[must_use]
    pub fn cursor_record(&self) -> Option<&CampaignRecord> {
        self.list_state
            .cursor
            .and_then(|i| self.view.visible_record(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pw_core::{validate_campaigns, CampaignId, Category, TimeRange};
    use pw_source::{builtin_campaigns, LoadError, SourceError};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded_app() -> App {
        let mut app = App::new(Strings::en());
        app.handle_loaded(Ok(validate_campaigns(builtin_campaigns()).unwrap()));
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        let action = app.handle_key(key(code));
        app.update(action);
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_app_starts_loading() {
        let app = App::new(Strings::ja());
        assert_eq!(app.view.phase(), ViewPhase::Loading);
        assert_eq!(app.mode, AppMode::Normal);
        assert!(app.list_state.cursor.is_none());
    }

    #[test]
    fn test_loaded_sets_cursor_and_status() {
        let app = loaded_app();
        assert_eq!(app.list_state.cursor, Some(0));
        let status = app.status.as_ref().unwrap();
        assert_eq!(status.text, "Loaded 2 campaigns");
        assert!(!status.is_error);
    }

    #[test]
    fn test_failed_load_shows_detail_in_status() {
        let mut app = App::new(Strings::en());
        app.handle_loaded(Err(LoadError::Source(SourceError::SimulatedFailure)));
        assert_eq!(app.view.phase(), ViewPhase::Failed);
        let status = app.status.as_ref().unwrap();
        assert!(status.is_error);
        assert_eq!(status.text, "simulated data source failure");
    }

    #[test]
    fn test_failed_load_ignores_filter_keys() {
        let mut app = App::new(Strings::en());
        app.handle_loaded(Err(LoadError::Source(SourceError::SimulatedFailure)));

        for code in ['/', 'c', 't', 'j'] {
            assert_eq!(app.handle_key(key(KeyCode::Char(code))), Action::None, "{code}");
        }
        assert_eq!(app.handle_key(key(KeyCode::Enter)), Action::None);
        assert_eq!(app.mode, AppMode::Normal);
        assert!(!app.view.criteria().is_active());

        assert_eq!(app.handle_key(key(KeyCode::Char('?'))), Action::ToggleHelp);
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Action::Quit);
    }

    #[test]
    fn test_second_outcome_ignored() {
        let mut app = loaded_app();
        app.handle_loaded(Err(LoadError::Source(SourceError::SimulatedFailure)));
        assert_eq!(app.view.phase(), ViewPhase::Ready);
        assert!(!app.status.as_ref().unwrap().is_error);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = loaded_app();
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Action::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(ctrl_c), Action::Quit);
        app.update(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.list_state.cursor, Some(1));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.list_state.cursor, Some(0));
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.list_state.cursor, Some(1));
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.list_state.cursor, Some(0));
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.list_state.cursor, Some(1));
    }

    #[test]
    fn test_enter_toggles_selection() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view.selection().id(), Some(CampaignId::new(1)));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view.selection().id(), Some(CampaignId::new(2)));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view.selection().id(), None);
    }

    #[test]
    fn test_escape_clears_selection_then_filters() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Enter);
        assert!(app.view.selection().id().is_some());

        press(&mut app, KeyCode::Esc);
        assert!(app.view.selection().id().is_none());
        assert!(app.view.criteria().is_active());

        press(&mut app, KeyCode::Esc);
        assert!(!app.view.criteria().is_active());
        assert_eq!(app.view.visible_len(), 2);
    }

    #[test]
    fn test_search_mode_filters_live() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.mode, AppMode::Searching);

        // 'q' and 'c' are text here, not commands.
        type_text(&mut app, "rakuten");
        assert_eq!(app.view.visible_len(), 0);
        assert!(!app.should_quit);

        for _ in 0.."rakuten".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "楽天");
        assert_eq!(app.view.visible_len(), 1);
        assert_eq!(app.list_state.cursor, Some(0));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.view.criteria().search, "楽天");
    }

    #[test]
    fn test_search_cancel_restores_term() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "amazon");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "xyz");
        assert_eq!(app.view.visible_len(), 0);
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.view.criteria().search, "amazon");
        assert_eq!(app.view.visible_len(), 1);
    }

    #[test]
    fn test_category_and_range_keys() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.view.criteria().category, Some(Category::Credit));
        assert_eq!(app.cursor_record().map(|r| r.id.as_u64()), Some(2));

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.view.criteria().range, TimeRange::Week);
        assert_eq!(app.view.visible_len(), 1);
    }

    #[test]
    fn test_filter_to_empty_clears_cursor() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.view.visible_len(), 0);
        assert!(app.list_state.cursor.is_none());

        press(&mut app, KeyCode::Enter);
        assert!(app.view.selection().id().is_none());
    }

    #[test]
    fn test_help_mode() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.mode, AppMode::Help);
        assert_eq!(app.handle_key(key(KeyCode::Char('j'))), Action::None);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_mouse_wheel() {
        let app = loaded_app();
        let scroll = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(app.handle_mouse(scroll), Action::NextItem);
    }

    #[test]
    fn test_card_list_paging() {
        let mut state = CardListState::new();
        state.visible_height = 3;

        state.page_down(10);
        assert_eq!(state.cursor, Some(0));
        state.page_down(10);
        assert_eq!(state.cursor, Some(3));
        assert_eq!(state.scroll_offset, 1);

        state.select_last(10);
        assert_eq!(state.cursor, Some(9));
        assert_eq!(state.scroll_offset, 7);

        state.page_up(10);
        assert_eq!(state.cursor, Some(6));
        state.select_first(10);
        assert_eq!((state.cursor, state.scroll_offset), (Some(0), 0));

        state.select_next(0);
        assert!(state.cursor.is_none());
    }

    #[test]
    fn test_status_message_expiry() {
        let msg = StatusMessage::info("saved");
        assert!(!msg.should_hide());
        let err = StatusMessage::error("failed");
        assert!(err.is_error);
        assert!(!err.should_hide());
    }
}
