//! Theme and styling for the TUI.
//!
//! [`Theme`] holds every color the dashboard uses, in a dark and a light
//! variant.
//!
//! # Example
//!
//! ```
//! use pw_core::Trend;
//! use pw_tui::Theme;
//!
//! let theme = Theme::dark();
//! let style = theme.trend_style(Trend::Down);
//! assert_eq!(style.fg, Some(theme.down_fg));
//! ```

use pw_core::{Category, ColorScheme, Trend};
use ratatui::style::{Color, Modifier, Style};

/// Colors and styles used throughout the interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // =========================================================================
    // Trend Colors
    // =========================================================================
    /// Points went up or stayed the same.
    pub up_fg: Color,

    /// Points went down.
    pub down_fg: Color,

    // =========================================================================
    // Chart Colors
    // =========================================================================
    /// Trend bar color.
    pub bar_fg: Color,

    /// Loading placeholder color.
    pub skeleton_fg: Color,

    // =========================================================================
    // Base Colors
    // =========================================================================
    /// Primary foreground color.
    pub fg: Color,

    /// Dimmed/secondary text color.
    pub dimmed_fg: Color,

    /// Accent color for highlights.
    pub accent: Color,

    /// Error color.
    pub error_fg: Color,

    /// Overlay background.
    pub overlay_bg: Color,

    // =========================================================================
    // Component Styles
    // =========================================================================
    /// Style for normal borders.
    pub border_style: Style,

    /// Style for the border of the active input.
    pub focused_border_style: Style,

    /// Style for the card under the cursor.
    pub highlight_style: Style,

    /// Style for panel titles.
    pub header_style: Style,

    /// Style for the status bar.
    pub status_bar_style: Style,
}

impl Theme {
    /// Creates a dark theme (light text on dark background).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            up_fg: Color::Rgb(100, 220, 120),
            down_fg: Color::Rgb(255, 90, 90),

            bar_fg: Color::Rgb(90, 140, 255),
            skeleton_fg: Color::Rgb(70, 70, 85),

            fg: Color::Rgb(220, 220, 220),
            dimmed_fg: Color::Rgb(128, 128, 128),
            accent: Color::Rgb(100, 150, 255),
            error_fg: Color::Rgb(255, 80, 80),
            overlay_bg: Color::Rgb(25, 25, 35),

            border_style: Style::default().fg(Color::Rgb(80, 80, 100)),
            focused_border_style: Style::default().fg(Color::Rgb(100, 150, 255)),
            highlight_style: Style::default()
                .bg(Color::Rgb(50, 50, 70))
                .add_modifier(Modifier::BOLD),
            header_style: Style::default()
                .fg(Color::Rgb(100, 150, 255))
                .add_modifier(Modifier::BOLD),
            status_bar_style: Style::default()
                .fg(Color::Rgb(180, 180, 180))
                .bg(Color::Rgb(40, 40, 50)),
        }
    }

    /// Creates a light theme (dark text on light background).
    #[must_use]
    pub fn light() -> Self {
        Self {
            up_fg: Color::Rgb(30, 140, 60),
            down_fg: Color::Rgb(190, 40, 40),

            bar_fg: Color::Rgb(40, 90, 200),
            skeleton_fg: Color::Rgb(210, 210, 220),

            fg: Color::Rgb(30, 30, 30),
            dimmed_fg: Color::Rgb(100, 100, 100),
            accent: Color::Rgb(50, 100, 200),
            error_fg: Color::Rgb(180, 50, 50),
            overlay_bg: Color::Rgb(240, 240, 245),

            border_style: Style::default().fg(Color::Rgb(150, 150, 170)),
            focused_border_style: Style::default().fg(Color::Rgb(50, 100, 200)),
            highlight_style: Style::default()
                .bg(Color::Rgb(215, 220, 235))
                .add_modifier(Modifier::BOLD),
            header_style: Style::default()
                .fg(Color::Rgb(50, 100, 200))
                .add_modifier(Modifier::BOLD),
            status_bar_style: Style::default()
                .fg(Color::Rgb(60, 60, 60))
                .bg(Color::Rgb(220, 220, 230)),
        }
    }

    /// Creates a theme from a [`ColorScheme`] configuration.
    ///
    /// [`ColorScheme::Auto`] uses the dark theme.
    #[must_use]
    pub fn from_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark | ColorScheme::Auto | _ => Self::dark(),
        }
    }

    /// Returns the color for a trend direction.
    #[must_use]
    pub const fn trend_color(&self, trend: Trend) -> Color {
        match trend {
            Trend::Up => self.up_fg,
            Trend::Down => self.down_fg,
        }
    }

    /// Returns the style for a trend direction.
    #[must_use]
    pub fn trend_style(&self, trend: Trend) -> Style {
        Style::default().fg(self.trend_color(trend))
    }

    /// Returns the badge style for a category.
    #[must_use]
    pub fn category_style(&self, category: Category) -> Style {
        let color = match category {
            Category::Credit => Color::Rgb(230, 170, 60),
            Category::Shopping => Color::Rgb(200, 120, 220),
            Category::Service => Color::Rgb(80, 190, 200),
        };
        Style::default().fg(color)
    }

    /// Returns the base style for normal text.
    #[must_use]
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Returns a style for dimmed text.
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed_fg)
    }

    /// Returns a style for accent text.
    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Returns a style for error text.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error_fg)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
