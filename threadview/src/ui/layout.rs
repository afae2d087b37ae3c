//! Screen layout for threadview.
//!
//! Pure layout arithmetic plus the shared panel chrome. Called inside
//! `terminal.draw()` on every render, so each frame reflects the live
//! terminal size.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};

use crate::app::{AppState, Mode};
use crate::theme::Theme;

/// Returns `[thread, status_bar]` for the current frame.
///
/// The thread panel fills the height above a 1-row status bar. The returned
/// rects are valid only for the current draw closure.
pub fn compute_layout(frame: &Frame) -> [Rect; 2] {
    frame
        .area()
        .layout(&Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]))
}

/// Returns the inner `Rect` of a panel after removing the 1-cell border.
pub fn inner_rect(area: Rect) -> Rect {
    area.inner(Margin { vertical: 1, horizontal: 1 })
}

/// Builds the bordered `Block` framing the thread panel.
pub fn panel_block<'a>(title: impl Into<Line<'a>>, theme: &Theme) -> Block<'a> {
    Block::bordered()
        .title(title)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_active))
}

/// Renders the 1-row status bar: mode indicator, comment count, key hint.
///
/// `HelpOverlay` and `ConfirmQuit` show the mode they were entered from,
/// since both are transient layers over it.
pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let shown_mode = match state.mode {
        Mode::ConfirmQuit => state.resume_mode,
        other => other,
    };
    let (mode_text, mode_fg) = match shown_mode {
        Mode::Insert => (" INSERT ", theme.status_mode_insert),
        Mode::Normal | Mode::ConfirmQuit | Mode::HelpOverlay => {
            (" NORMAL ", theme.status_mode_normal)
        }
    };

    let mode_span = Span::styled(
        mode_text,
        Style::default().fg(mode_fg).add_modifier(Modifier::BOLD),
    );
    let total = state.total_comments();
    let count_span = Span::raw(format!(
        " {} comment{} ",
        total,
        if total == 1 { "" } else { "s" }
    ));
    let hint = match shown_mode {
        Mode::Insert => " Enter submit · Esc cancel",
        _ => " r reply · c collapse · ? help · q quit",
    };
    let status_line = Line::from(vec![mode_span, count_span, Span::raw(hint)]);

    frame.render_widget(
        Paragraph::new(status_line)
            .style(Style::default().bg(theme.status_bar_bg).fg(theme.status_bar_fg)),
        area,
    );
}
