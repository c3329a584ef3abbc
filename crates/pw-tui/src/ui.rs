//! Main UI layout and rendering orchestration.
//!
//! # Layout Structure
//!
//! ```text
//! +------------------------------------------------------------------+
//! | ハピタス案件価格推移 │ 2/2件 │ ?                                   |
//! +------------------------------------------------------------------+
//! | / 案件を検索...            c [全てのカテゴリー] t [全期間]        |
//! +------------------------------------------------------------------+
//! | 価格推移グラフ: 楽天カード発行                                    |
//! |  15,000P                                                          |
//! |  ██████████████  14,000P                                          |
//! |  01/01           02/01                                            |
//! +------------------------------------------------------------------+
//! | 案件一覧 (2/2件)                                                  |
//! |   Amazon プライム会員登録                              2,000P     |
//! |   ...                                                             |
//! +------------------------------------------------------------------+
//! | NORMAL  2件の案件を読み込みました           / 検索  c カテゴリー  |
//! +------------------------------------------------------------------+
//! ```
//!
//! The body depends on [`ViewPhase`]: placeholder cards while loading, the
//! no-results message when the filter leaves nothing, the trend panel above
//! the list otherwise. A failed load replaces the whole screen with the
//! failure message above the status bar.

use pw_core::ViewPhase;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::app::{App, AppMode};
use crate::components::{
    CampaignListView, HeaderBar, HelpPanel, MessagePanel, SearchBar, Skeleton, StatusBar,
    TrendPanel,
};
use crate::theme::Theme;

/// Rows given to the trend panel when the body is tall enough.
const TREND_PANEL_HEIGHT: u16 = 12;

/// Renders the entire UI based on the current application state.
///
/// Takes the app mutably so the list can record how many cards fit.
pub fn render(app: &mut App, frame: &mut Frame, theme: &Theme) {
    let area = frame.area();

    if app.view.phase() == ViewPhase::Failed {
        render_failed(app, frame, area, theme);
    } else {
        render_dashboard(app, frame, area, theme);
    }

    if app.mode == AppMode::Help {
        let help_panel = HelpPanel::new(&app.strings, theme);
        let help_area = centered_rect(60, 70, area);
        frame.render_widget(&help_panel, help_area);
    }
}

/// A failed load replaces everything but the status bar, which carries the
/// failure detail.
fn render_failed(app: &App, frame: &mut Frame, area: Rect, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let message =
        MessagePanel::new(app.strings.load_failed, theme.error_style(), theme.border_style);
    frame.render_widget(&message, chunks[0]);

    let status_bar = StatusBar::new(app, theme);
    frame.render_widget(&status_bar, chunks[1]);
}

fn render_dashboard(app: &mut App, frame: &mut Frame, area: Rect, theme: &Theme) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Search and filters
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let header = HeaderBar::new(&app.view, &app.strings, theme);
    frame.render_widget(&header, main_chunks[0]);

    let search = SearchBar::new(
        app.view.criteria(),
        app.mode == AppMode::Searching,
        &app.strings,
        theme,
    );
    frame.render_widget(&search, main_chunks[1]);

    render_body(app, frame, main_chunks[2], theme);

    let status_bar = StatusBar::new(app, theme);
    frame.render_widget(&status_bar, main_chunks[3]);
}

fn render_body(app: &mut App, frame: &mut Frame, area: Rect, theme: &Theme) {
    match app.view.phase() {
        ViewPhase::Loading => {
            let skeleton = Skeleton::new(app.tick_count, theme);
            frame.render_widget(&skeleton, area);
        }
        // No graph without any visible record.
        ViewPhase::Empty => {
            let message =
                MessagePanel::new(app.strings.no_results, theme.dimmed_style(), theme.border_style);
            frame.render_widget(&message, area);
        }
        ViewPhase::Ready => {
            let trend_height = if area.height >= TREND_PANEL_HEIGHT * 2 {
                TREND_PANEL_HEIGHT
            } else {
                area.height / 2
            };
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(trend_height), Constraint::Min(0)])
                .split(area);

            let trend = TrendPanel::new(app.view.selected_record(), &app.strings, theme);
            frame.render_widget(&trend, chunks[0]);

            let list = CampaignListView::new(&app.view, &app.strings, theme);
            frame.render_stateful_widget(&list, chunks[1], &mut app.list_state);
        }
        ViewPhase::Failed => {}
    }
}

/// Creates a centered rectangle with the given percentage width and height.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::strings::Strings;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pw_core::validate_campaigns;
    use pw_source::{builtin_campaigns, LoadError, SourceError};
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn buffer_to_string(buffer: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let theme = Theme::dark();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| render(app, frame, &theme))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn loaded_app() -> App {
        let mut app = App::new(Strings::en());
        app.handle_loaded(Ok(validate_campaigns(builtin_campaigns()).unwrap()));
        app
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 100);
        let centered = centered_rect(50, 50, area);

        assert!(centered.x > 0);
        assert!(centered.y > 0);
        assert!(centered.width < area.width);
        assert!(centered.height < area.height);
    }

    #[test]
    fn test_loading_shows_skeleton() {
        let mut app = App::new(Strings::en());
        let out = draw(&mut app, 80, 30);
        assert!(out.contains("Loading..."));
        assert!(out.contains('░'));
        assert!(!out.contains("Campaigns ("));
    }

    #[test]
    fn test_failed_shows_static_message() {
        let mut app = App::new(Strings::en());
        app.handle_loaded(Err(LoadError::from(SourceError::SimulatedFailure)));
        let out = draw(&mut app, 80, 30);
        assert!(out.contains("Failed to load campaign data"));
        assert!(out.contains("simulated data source failure"));
        assert!(!out.contains('░'));
    }

    #[test]
    fn test_failed_replaces_entire_view() {
        let mut app = App::new(Strings::en());
        app.handle_loaded(Err(LoadError::from(SourceError::SimulatedFailure)));
        for code in ['c', 't', '/'] {
            let action = app.handle_key(KeyEvent::new(KeyCode::Char(code), KeyModifiers::NONE));
            app.update(action);
        }

        let out = draw(&mut app, 80, 30);
        assert!(out.contains("Failed to load campaign data"));
        assert!(!out.contains("Search campaigns"));
        assert!(!out.contains("[All categories]"));
        assert!(!out.contains("[Credit cards]"));
        assert!(!out.contains("[All time]"));
        assert!(!out.contains("0/0"));
    }

    #[test]
    fn test_empty_shows_no_results() {
        let mut app = loaded_app();
        app.update(Action::SetSearch("zzz".to_owned()));
        let out = draw(&mut app, 80, 30);
        assert!(out.contains("No campaigns found"));
        assert!(out.contains("0/2"));
        assert!(!out.contains("Select a campaign"));
    }

    #[test]
    fn test_empty_hides_selected_trend() {
        let mut app = loaded_app();
        app.update(Action::ToggleSelection);
        app.update(Action::SetSearch("zzz".to_owned()));
        let out = draw(&mut app, 80, 40);
        assert!(out.contains("No campaigns found"));
        assert!(!out.contains("Point History: "));
        assert!(!out.contains("1,500P"));
    }

    #[test]
    fn test_ready_shows_list_and_hint() {
        let mut app = loaded_app();
        let out = draw(&mut app, 80, 40);
        assert!(out.contains("Campaigns (2/2)"));
        assert!(out.contains("Select a campaign"));
        assert!(out.contains("13,000P"));
        assert!(out.contains("[All categories]"));
        assert!(out.contains("[All time]"));
    }

    #[test]
    fn test_render_records_visible_height() {
        let mut app = loaded_app();
        assert_eq!(app.list_state.visible_height, 0);
        draw(&mut app, 80, 40);
        assert!(app.list_state.visible_height >= 2);
    }

    #[test]
    fn test_selection_draws_trend() {
        let mut app = loaded_app();
        app.update(Action::ToggleSelection);
        let out = draw(&mut app, 80, 40);
        assert!(out.contains("Point History: "));
        assert!(out.contains("1,500P"));
        assert!(out.contains("01/01"));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = loaded_app();
        app.update(Action::ToggleHelp);
        let out = draw(&mut app, 100, 40);
        assert!(out.contains("Cycle category"));
        assert!(out.contains("HELP"));
    }

    #[test]
    fn test_search_mode_badge() {
        let mut app = loaded_app();
        app.update(Action::EnterSearchMode);
        app.update(Action::SetSearch("Amazon".to_owned()));
        let out = draw(&mut app, 80, 30);
        assert!(out.contains("SEARCH"));
        assert!(out.contains("Amazon"));
        assert!(out.contains("1/2"));
    }
}
