//! Keybinding dispatcher for threadview.
//!
//! Translates raw crossterm `KeyEvent`s into `AppState` actions and returns a
//! `KeyAction` telling the event loop whether to continue or quit. The
//! dispatcher branches first on `state.mode` so each mode has an isolated
//! handler.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::app::{AppState, Mode};

/// Control-flow signal returned from the key dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Keep running; the next render shows the new state.
    Continue,
    /// Exit cleanly.
    Quit,
}

/// Dispatches a key event to the handler matching the current mode.
///
/// `Ctrl-c` is handled before the mode switch so it works everywhere; with a
/// non-empty draft it opens the quit confirmation instead of quitting.
pub fn handle_key(key: KeyEvent, state: &mut AppState) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return match state.mode {
            Mode::ConfirmQuit => KeyAction::Quit,
            _ if state.has_draft() => {
                state.request_quit_confirmation();
                KeyAction::Continue
            }
            _ => KeyAction::Quit,
        };
    }

    match state.mode {
        Mode::HelpOverlay => handle_help(key, state),
        Mode::ConfirmQuit => handle_confirm_quit(key, state),
        Mode::Normal => handle_normal(key, state),
        Mode::Insert => handle_insert(key, state),
    }
}

// ---------------------------------------------------------------------------
// Normal mode
// ---------------------------------------------------------------------------

fn handle_normal(key: KeyEvent, state: &mut AppState) -> KeyAction {
    if let Some(action) = handle_navigation_key(key, state) {
        return action;
    }

    match key.code {
        KeyCode::Char('r') => state.open_reply(),
        KeyCode::Char('c') | KeyCode::Char(' ') => state.toggle_collapse_selected(),
        KeyCode::Char('?') => {
            state.help_scroll = 0;
            state.mode = Mode::HelpOverlay;
        }
        KeyCode::Char('q') | KeyCode::Esc => return KeyAction::Quit,
        _ => {}
    }
    KeyAction::Continue
}

/// Selection movement: j / k / arrows / g / G / Ctrl-d / Ctrl-u.
///
/// Returns `None` when the key is not a navigation key.
fn handle_navigation_key(key: KeyEvent, state: &mut AppState) -> Option<KeyAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('d') if ctrl => state.half_page_down(),
        KeyCode::Char('u') if ctrl => state.half_page_up(),
        KeyCode::Char('j') | KeyCode::Down => state.select_down(1),
        KeyCode::Char('k') | KeyCode::Up => state.select_up(1),
        KeyCode::Char('g') | KeyCode::Home => state.select_top(),
        KeyCode::Char('G') | KeyCode::End => state.select_bottom(),
        _ => return None,
    }
    Some(KeyAction::Continue)
}

// ---------------------------------------------------------------------------
// Insert mode
// ---------------------------------------------------------------------------

/// Edits the draft. `Enter` submits, `Esc` cancels via the reply toggle.
fn handle_insert(key: KeyEvent, state: &mut AppState) -> KeyAction {
    match key.code {
        KeyCode::Esc => state.cancel_reply(),
        KeyCode::Enter => {
            state.submit_reply();
        }
        KeyCode::Backspace => {
            state.draft.pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.draft.push(c);
        }
        _ => {}
    }
    KeyAction::Continue
}

// ---------------------------------------------------------------------------
// HelpOverlay mode
// ---------------------------------------------------------------------------

fn handle_help(key: KeyEvent, state: &mut AppState) -> KeyAction {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            state.help_scroll = state.help_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.help_scroll = state.help_scroll.saturating_sub(1);
        }
        KeyCode::Char('g') => state.help_scroll = 0,
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => state.mode = Mode::Normal,
        _ => {}
    }
    KeyAction::Continue
}

// ---------------------------------------------------------------------------
// ConfirmQuit mode
// ---------------------------------------------------------------------------

/// `y` quits; `n` / `Esc` return to the mode the dialog was opened from.
fn handle_confirm_quit(key: KeyEvent, state: &mut AppState) -> KeyAction {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => KeyAction::Quit,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            state.mode = state.resume_mode;
            KeyAction::Continue
        }
        _ => KeyAction::Continue,
    }
}

// ---------------------------------------------------------------------------
// Mouse events
// ---------------------------------------------------------------------------

/// Scroll wheel moves the selection by 3 rows, or scrolls the help overlay.
pub fn handle_mouse(mouse: MouseEvent, state: &mut AppState) {
    let help = state.mode == Mode::HelpOverlay;
    match mouse.kind {
        MouseEventKind::ScrollUp if help => {
            state.help_scroll = state.help_scroll.saturating_sub(3);
        }
        MouseEventKind::ScrollDown if help => {
            state.help_scroll = state.help_scroll.saturating_add(3);
        }
        MouseEventKind::ScrollUp if state.mode == Mode::Normal => state.select_up(3),
        MouseEventKind::ScrollDown if state.mode == Mode::Normal => state.select_down(3),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use threadview_core::{CommentNode, SequentialIds};

    fn press(state: &mut AppState, code: KeyCode) -> KeyAction {
        handle_key(KeyEvent::new(code, KeyModifiers::NONE), state)
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    fn ctrl_c(state: &mut AppState) -> KeyAction {
        handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), state)
    }

    fn scroll(state: &mut AppState, kind: MouseEventKind) {
        let mouse = MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(mouse, state);
    }

    fn hello() -> AppState {
        AppState::with_ids(
            vec![CommentNode::new("1", "Hello")],
            Box::new(SequentialIds::new("r")),
        )
    }

    /// Ten root comments, ids "1" through "10".
    fn long_thread() -> AppState {
        let roots = (1..=10)
            .map(|i| CommentNode::new(i.to_string(), format!("comment {i}")))
            .collect();
        AppState::with_ids(roots, Box::new(SequentialIds::new("r")))
    }

    #[test]
    fn reply_typed_and_submitted() {
        let mut state = hello();
        press(&mut state, KeyCode::Char('r'));
        assert_eq!(state.mode, Mode::Insert);

        // 'q' and 'j' are text while typing.
        type_text(&mut state, "Hi qj");
        press(&mut state, KeyCode::Backspace);
        press(&mut state, KeyCode::Backspace);
        type_text(&mut state, "there");
        assert_eq!(press(&mut state, KeyCode::Enter), KeyAction::Continue);

        assert_eq!(state.mode, Mode::Normal);
        let root = &state.comments[0];
        assert!(!root.is_reply_box_open);
        assert_eq!(root.children[0].text, "Hi there");
    }

    #[test]
    fn escape_cancels_reply() {
        let mut state = hello();
        press(&mut state, KeyCode::Char('r'));
        type_text(&mut state, "draft");
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.mode, Mode::Normal);
        assert!(!state.comments[0].is_reply_box_open);
        assert!(state.comments[0].is_leaf());
    }

    #[test]
    fn collapse_key_toggles_after_reply() {
        let mut state = hello();
        press(&mut state, KeyCode::Char('r'));
        type_text(&mut state, "x");
        press(&mut state, KeyCode::Enter);

        press(&mut state, KeyCode::Char('c'));
        assert!(state.comments[0].is_collapsed);
        press(&mut state, KeyCode::Char(' '));
        assert!(!state.comments[0].is_collapsed);
    }

    #[test]
    fn ctrl_c_with_draft_asks_first() {
        let mut state = hello();
        press(&mut state, KeyCode::Char('r'));
        type_text(&mut state, "unsent");

        assert_eq!(ctrl_c(&mut state), KeyAction::Continue);
        assert_eq!(state.mode, Mode::ConfirmQuit);
        assert_eq!(press(&mut state, KeyCode::Char('n')), KeyAction::Continue);
        assert_eq!(state.mode, Mode::Insert);
        assert_eq!(state.draft, "unsent");

        ctrl_c(&mut state);
        assert_eq!(press(&mut state, KeyCode::Char('y')), KeyAction::Quit);
    }

    #[test]
    fn quit_keys_in_normal_mode() {
        let mut state = hello();
        assert_eq!(ctrl_c(&mut state), KeyAction::Quit);
        assert_eq!(press(&mut state, KeyCode::Char('q')), KeyAction::Quit);
    }

    #[test]
    fn help_overlay_opens_and_closes() {
        let mut state = hello();
        press(&mut state, KeyCode::Char('?'));
        assert_eq!(state.mode, Mode::HelpOverlay);
        press(&mut state, KeyCode::Char('j'));
        assert_eq!(state.help_scroll, 1);
        assert_eq!(press(&mut state, KeyCode::Char('q')), KeyAction::Continue);
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn wheel_moves_selection_in_normal_mode() {
        let mut state = long_thread();
        scroll(&mut state, MouseEventKind::ScrollDown);
        assert_eq!(state.list_state.selected(), Some(3));
        scroll(&mut state, MouseEventKind::ScrollDown);
        scroll(&mut state, MouseEventKind::ScrollDown);
        scroll(&mut state, MouseEventKind::ScrollDown);
        assert_eq!(state.list_state.selected(), Some(9));

        scroll(&mut state, MouseEventKind::ScrollUp);
        assert_eq!(state.list_state.selected(), Some(6));
        for _ in 0..3 {
            scroll(&mut state, MouseEventKind::ScrollUp);
        }
        assert_eq!(state.list_state.selected(), Some(0));
        assert_eq!(state.help_scroll, 0);
    }

    #[test]
    fn wheel_scrolls_help_not_selection() {
        let mut state = long_thread();
        press(&mut state, KeyCode::Char('?'));
        scroll(&mut state, MouseEventKind::ScrollDown);
        scroll(&mut state, MouseEventKind::ScrollDown);
        assert_eq!(state.help_scroll, 6);
        assert_eq!(state.list_state.selected(), Some(0));

        scroll(&mut state, MouseEventKind::ScrollUp);
        assert_eq!(state.help_scroll, 3);
        scroll(&mut state, MouseEventKind::ScrollUp);
        scroll(&mut state, MouseEventKind::ScrollUp);
        assert_eq!(state.help_scroll, 0);
    }

    #[test]
    fn wheel_ignored_while_typing() {
        let mut state = long_thread();
        press(&mut state, KeyCode::Char('r'));
        scroll(&mut state, MouseEventKind::ScrollDown);
        assert_eq!(state.mode, Mode::Insert);
        assert_eq!(state.list_state.selected(), Some(0));
    }

    #[test]
    fn half_page_moves_by_half_the_viewport() {
        let mut state = long_thread();
        state.viewport_height = 4;
        let ctrl = |code| KeyEvent::new(code, KeyModifiers::CONTROL);

        handle_key(ctrl(KeyCode::Char('d')), &mut state);
        assert_eq!(state.list_state.selected(), Some(2));
        for _ in 0..5 {
            handle_key(ctrl(KeyCode::Char('d')), &mut state);
        }
        assert_eq!(state.list_state.selected(), Some(9));

        handle_key(ctrl(KeyCode::Char('u')), &mut state);
        assert_eq!(state.list_state.selected(), Some(7));
        for _ in 0..5 {
            handle_key(ctrl(KeyCode::Char('u')), &mut state);
        }
        assert_eq!(state.list_state.selected(), Some(0));
    }

    #[test]
    fn half_page_steps_one_row_before_first_render() {
        let mut state = long_thread();
        assert_eq!(state.viewport_height, 0);
        handle_key(
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL),
            &mut state,
        );
        assert_eq!(state.list_state.selected(), Some(1));
    }
}
