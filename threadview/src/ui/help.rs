//! Modal overlays for threadview: the help screen and the quit confirmation.
//!
//! Both are drawn inside the same `terminal.draw()` closure as the thread
//! panel. `Clear` erases the area first so the modal sits on top.

use ratatui::{
    Frame,
    layout::Constraint,
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Paragraph, Wrap},
};

use crate::theme::Theme;

/// Renders the help overlay as a centred modal, scrolled by `help_scroll`.
///
/// Skipped on terminals narrower than 40 columns to avoid a zero-size area.
pub fn render_help_overlay(frame: &mut Frame, theme: &Theme, help_scroll: u16) {
    if frame.area().width < 40 {
        return;
    }

    let overlay_area = frame
        .area()
        .centered(Constraint::Percentage(80), Constraint::Percentage(80));

    frame.render_widget(Clear, overlay_area);

    let block = Block::bordered()
        .title(" Help  — j/k scroll, ? or Esc to dismiss ")
        .border_style(Style::default().fg(theme.border_active));

    frame.render_widget(
        Paragraph::new(build_help_text())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((help_scroll, 0)),
        overlay_area,
    );
}

fn build_help_text() -> Text<'static> {
    Text::from(vec![
        Line::from("Navigation"),
        Line::from("  j / k  ↓ / ↑  Select next / previous comment"),
        Line::from("  g / G         Jump to first / last comment"),
        Line::from("  Ctrl-d / u    Move half a page down / up"),
        Line::from(""),
        Line::from("Thread"),
        Line::from("  r             Reply to the selected comment"),
        Line::from("  c / Space     Collapse or expand its replies"),
        Line::from(""),
        Line::from("Reply box"),
        Line::from("  Enter         Submit the reply (ignored while empty)"),
        Line::from("  Esc           Cancel and close the reply box"),
        Line::from("  Backspace     Delete the last character"),
        Line::from(""),
        Line::from("General"),
        Line::from("  ?             Open / close this help overlay"),
        Line::from("  q / Esc       Quit"),
        Line::from("  Ctrl-c        Quit (confirms if a reply is being typed)"),
    ])
}

/// Renders the "discard draft and quit?" dialog.
pub fn render_confirm_quit(frame: &mut Frame, theme: &Theme) {
    let area = frame
        .area()
        .centered(Constraint::Length(44), Constraint::Length(5));

    frame.render_widget(Clear, area);

    let block = Block::bordered()
        .title(" Quit ")
        .border_style(Style::default().fg(theme.border_active));

    frame.render_widget(
        Paragraph::new(Text::from(vec![
            Line::from("Your reply has not been submitted."),
            Line::from("Discard it and quit?  y / n"),
        ]))
        .block(block)
        .style(Style::default().bg(theme.background)),
        area,
    );
}
