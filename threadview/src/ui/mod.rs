//! UI rendering module for threadview.
//!
//! `render()` is the single entry point called by the event loop's
//! `terminal.draw()` closure. Layout arithmetic lives in `layout.rs`, the
//! thread panel in `comment_tree.rs`, and the modal overlays in `help.rs`.

mod layout;
pub mod comment_tree;
pub mod help;
pub mod keybindings;

use ratatui::Frame;

use crate::app::{AppState, Mode};
use crate::theme::Theme;
use layout::{compute_layout, inner_rect, render_status_bar};

/// Renders one complete frame: thread panel, status bar, and any overlay.
///
/// The thread panel's inner height is cached into `state` first so half-page
/// moves triggered by the next keypress know the page size.
pub fn render(frame: &mut Frame, state: &mut AppState, theme: &Theme) {
    let [thread, status_bar] = compute_layout(frame);

    state.viewport_height = inner_rect(thread).height;

    comment_tree::render_thread(frame, thread, state, theme);
    render_status_bar(frame, status_bar, state, theme);

    match state.mode {
        Mode::HelpOverlay => help::render_help_overlay(frame, theme, state.help_scroll),
        Mode::ConfirmQuit => help::render_confirm_quit(frame, theme),
        Mode::Normal | Mode::Insert => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use threadview_core::{CommentNode, SequentialIds};

    fn draw(state: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        let theme = Theme::dark();
        terminal.draw(|frame| render(frame, state, &theme)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn renders_comment_with_affordance() {
        let mut state = AppState::with_ids(
            vec![CommentNode::new("1", "Hello")],
            Box::new(SequentialIds::new("r")),
        );
        let screen = draw(&mut state);
        assert!(screen.contains("Hello"), "{screen}");
        assert!(screen.contains("[r] Reply"), "{screen}");
        assert!(screen.contains("NORMAL"), "{screen}");
        assert!(state.viewport_height > 0);
    }

    #[test]
    fn renders_reply_box_placeholder() {
        let mut state = AppState::with_ids(
            vec![CommentNode::new("1", "Hello")],
            Box::new(SequentialIds::new("r")),
        );
        state.open_reply();
        let screen = draw(&mut state);
        assert!(screen.contains(comment_tree::REPLY_PLACEHOLDER), "{screen}");
        assert!(screen.contains("[Enter] Submit"), "{screen}");
        assert!(!screen.contains("[r] Reply"), "{screen}");
        assert!(screen.contains("INSERT"), "{screen}");
    }
}
