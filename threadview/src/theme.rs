//! Color theme system for threadview.
//!
//! A `Theme` holds named `ratatui::style::Color` fields for every surface the
//! thread view draws. Two built-in themes are provided:
//!
//! - `dark` — ANSI 16 colors, works on any terminal including 256-color SSH
//!   sessions with no truecolor support.
//! - `catppuccin_mocha` — Catppuccin Mocha palette in RGB; requires truecolor.

use ratatui::style::Color;
use tracing::warn;

/// All color values used across threadview's UI surfaces.
#[derive(Debug, Clone)]
pub struct Theme {
    // Panel borders
    /// Border color for the thread panel and modal overlays.
    pub border_active: Color,
    /// Border color for the reply box.
    pub border_inactive: Color,

    // Thread
    /// Comment body text.
    pub comment_text: Color,
    /// Tree guide characters drawn before nested replies.
    pub thread_guide: Color,
    /// `[r] Reply` / `[c] Collapse` affordance hints.
    pub affordance: Color,
    /// Marker shown on collapsed comments (`+N hidden`).
    pub collapsed_marker: Color,
    /// Background of the selected row.
    pub selection_bg: Color,

    // Reply box
    /// Typed draft text.
    pub reply_input: Color,
    /// Placeholder shown while the draft is empty.
    pub reply_placeholder: Color,

    // Status bar
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    /// Mode indicator color when in NORMAL mode.
    pub status_mode_normal: Color,
    /// Mode indicator color when in INSERT mode.
    pub status_mode_insert: Color,

    // General
    /// Application background (used for clearing areas).
    pub background: Color,
}

impl Theme {
    /// Returns the built-in dark theme using ANSI 16 colors.
    pub fn dark() -> Self {
        Self {
            border_active: Color::Cyan,
            border_inactive: Color::DarkGray,

            comment_text: Color::Reset,
            thread_guide: Color::DarkGray,
            affordance: Color::Blue,
            collapsed_marker: Color::Yellow,
            selection_bg: Color::DarkGray,

            reply_input: Color::White,
            reply_placeholder: Color::DarkGray,

            status_bar_bg: Color::DarkGray,
            status_bar_fg: Color::White,
            status_mode_normal: Color::Cyan,
            status_mode_insert: Color::Green,

            background: Color::Reset,
        }
    }

    /// Returns the Catppuccin Mocha theme using RGB truecolor values.
    ///
    /// Palette source: <https://github.com/catppuccin/catppuccin> Mocha variant.
    pub fn catppuccin_mocha() -> Self {
        let green = Color::Rgb(166, 227, 161); // #a6e3a1
        let yellow = Color::Rgb(249, 226, 175); // #f9e2af
        let blue = Color::Rgb(137, 180, 250); // #89b4fa
        let lavender = Color::Rgb(180, 190, 254); // #b4befe
        let overlay1 = Color::Rgb(127, 132, 156); // #7f849c
        let surface0 = Color::Rgb(49, 50, 68); // #313244
        let surface1 = Color::Rgb(69, 71, 90); // #45475a
        let base = Color::Rgb(30, 30, 46); // #1e1e2e
        let text = Color::Rgb(205, 214, 244); // #cdd6f4

        Self {
            border_active: lavender,
            border_inactive: overlay1,

            comment_text: text,
            thread_guide: surface1,
            affordance: blue,
            collapsed_marker: yellow,
            selection_bg: surface0,

            reply_input: text,
            reply_placeholder: overlay1,

            status_bar_bg: surface1,
            status_bar_fg: text,
            status_mode_normal: lavender,
            status_mode_insert: green,

            background: base,
        }
    }

    /// Resolves a theme name string to the corresponding built-in theme.
    ///
    /// Unknown names fall back to `dark()` so a typo in config never prevents
    /// startup.
    pub fn from_name(name: &str) -> Self {
        match name {
            "catppuccin-mocha" | "catppuccin_mocha" => Self::catppuccin_mocha(),
            "dark" => Self::dark(),
            other => {
                warn!(theme = other, "unknown theme, falling back to 'dark'");
                Self::dark()
            }
        }
    }
}
