//! Central application state for threadview.
//!
//! `AppState` owns the comment forest on behalf of the UI: every thread action
//! hands the current forest to one of the `threadview_core` rebuild functions
//! and replaces it wholesale with the result. It also owns the draft reply
//! text, the current mode, and the list selection. No ratatui rendering logic
//! lives here.

use std::path::Path;

use ratatui::widgets::ListState;
use threadview_core::seed::{default_seed, load_seed};
use threadview_core::{
    count_nodes, find, insert_reply, open_reply_target, toggle_collapse, toggle_reply,
    visible_rows, CommentId, CommentNode, IdGenerator, ReplyText, UuidIds, VisibleRow,
};
use tracing::{debug, info, warn};

/// Editor mode controlling which keybinding set is active.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Navigating the thread (default).
    #[default]
    Normal,
    /// Typing into the open reply box.
    Insert,
    /// Full-screen help overlay is shown above the thread.
    HelpOverlay,
    /// Quit-confirmation dialog shown when a draft reply would be lost.
    ConfirmQuit,
}

/// Returns the initial forest: the seed file if one is given and valid,
/// otherwise the built-in thread.
pub fn initial_comments(seed: Option<&Path>) -> Vec<CommentNode> {
    let Some(path) = seed else {
        return default_seed();
    };
    match load_seed(path, &UuidIds) {
        Ok(tree) => tree,
        Err(e) => {
            warn!(error = %e, "seed file rejected, using built-in thread");
            default_seed()
        }
    }
}

/// All mutable UI state passed through every render cycle.
pub struct AppState {
    pub mode: Mode,
    /// Mode to return to when the quit dialog is dismissed.
    pub resume_mode: Mode,

    /// The root comment sequence. Only ever replaced, never edited in place.
    pub comments: Vec<CommentNode>,
    ids: Box<dyn IdGenerator>,

    /// Selection over the visible rows of the thread panel.
    pub list_state: ListState,
    /// Text typed into the open reply box.
    pub draft: String,

    pub help_scroll: u16,
    /// Inner height of the thread panel after borders, cached after each render.
    pub viewport_height: u16,
}

impl AppState {
    /// Builds state around an initial forest, selecting the first comment.
    pub fn new(comments: Vec<CommentNode>) -> Self {
        Self::with_ids(comments, Box::new(UuidIds))
    }

    /// Like [`AppState::new`] with a caller-supplied id source.
    pub fn with_ids(comments: Vec<CommentNode>, ids: Box<dyn IdGenerator>) -> Self {
        let mut list_state = ListState::default();
        if !comments.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            mode: Mode::default(),
            resume_mode: Mode::default(),
            comments,
            ids,
            list_state,
            draft: String::new(),
            help_scroll: 0,
            viewport_height: 0,
        }
    }

    /// Rows currently shown in the thread panel, in display order.
    pub fn rows(&self) -> Vec<VisibleRow<'_>> {
        visible_rows(&self.comments)
    }

    pub fn total_comments(&self) -> usize {
        count_nodes(&self.comments)
    }

    /// The comment under the selection cursor, if any.
    pub fn selected(&self) -> Option<&CommentNode> {
        let idx = self.list_state.selected()?;
        let rows = self.rows();
        rows.get(idx).map(|row| row.node)
    }

    #[cfg(test)]
    fn selected_id(&self) -> Option<CommentId> {
        self.selected().map(|node| node.id.clone())
    }

    pub fn has_draft(&self) -> bool {
        !self.draft.is_empty()
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// Moves the selection down by `n` rows, stopping at the last row.
    pub fn select_down(&mut self, n: usize) {
        let len = self.rows().len();
        if len == 0 {
            return;
        }
        let next = self
            .list_state
            .selected()
            .map_or(0, |i| i.saturating_add(n));
        self.list_state.select(Some(next.min(len - 1)));
    }

    /// Moves the selection up by `n` rows, stopping at the first row.
    pub fn select_up(&mut self, n: usize) {
        if self.rows().is_empty() {
            return;
        }
        let next = self
            .list_state
            .selected()
            .map_or(0, |i| i.saturating_sub(n));
        self.list_state.select(Some(next));
    }

    pub fn select_top(&mut self) {
        if !self.rows().is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_bottom(&mut self) {
        let len = self.rows().len();
        if len > 0 {
            self.list_state.select(Some(len - 1));
        }
    }

    /// Moves by half the viewport, or one row before the first render.
    pub fn half_page_down(&mut self) {
        self.select_down((self.viewport_height / 2).max(1) as usize);
    }

    pub fn half_page_up(&mut self) {
        self.select_up((self.viewport_height / 2).max(1) as usize);
    }

    /// Points the selection at `id` if it is visible, else clamps it.
    fn reselect(&mut self, id: &CommentId) {
        let rows = self.rows();
        let idx = rows.iter().position(|row| row.node.id == *id);
        let len = rows.len();
        match idx {
            Some(i) => self.list_state.select(Some(i)),
            None if len == 0 => self.list_state.select(None),
            None => {
                let clamped = self.list_state.selected().unwrap_or(0).min(len - 1);
                self.list_state.select(Some(clamped));
            }
        }
    }

    /// Installs a rebuilt forest and keeps the cursor on `keep`.
    fn replace_comments(&mut self, next: Vec<CommentNode>, keep: &CommentId) {
        self.comments = next;
        self.reselect(keep);
    }

    // -----------------------------------------------------------------------
    // Thread actions
    // -----------------------------------------------------------------------

    /// Opens the reply box on the selected comment and enters Insert mode.
    ///
    /// Does nothing when the comment cannot be replied to or its box is
    /// already open, matching when the `Reply` affordance is shown. Clears any
    /// leftover draft.
    pub fn open_reply(&mut self) {
        let Some(node) = self.selected() else { return };
        if !node.can_reply || node.is_reply_box_open {
            return;
        }
        let id = node.id.clone();
        self.draft.clear();
        let next = toggle_reply(&self.comments, &id);
        self.replace_comments(next, &id);
        self.mode = Mode::Insert;
        debug!(%id, "reply box opened");
    }

    /// Closes the open reply box by toggling it again and returns to Normal.
    pub fn cancel_reply(&mut self) {
        if let Some(id) = open_reply_target(&self.comments).map(|n| n.id.clone()) {
            let next = toggle_reply(&self.comments, &id);
            self.replace_comments(next, &id);
            debug!(%id, "reply cancelled");
        }
        self.draft.clear();
        self.mode = Mode::Normal;
    }

    /// Inserts the draft as a reply under the comment whose box is open.
    ///
    /// An empty draft is ignored and Insert mode stays active. Returns the id
    /// of the new reply when one was inserted.
    pub fn submit_reply(&mut self) -> Option<CommentId> {
        let Ok(text) = ReplyText::new(self.draft.as_str()) else {
            return None;
        };
        let Some(target) = open_reply_target(&self.comments).map(|n| n.id.clone()) else {
            // Box vanished underneath us; nothing to attach to.
            self.mode = Mode::Normal;
            return None;
        };
        let next = insert_reply(&self.comments, &target, &text, self.ids.as_ref());
        let new_id = find(&next, &target)
            .and_then(|parent| parent.children.last())
            .map(|child| child.id.clone());
        self.replace_comments(next, &target);
        self.draft.clear();
        self.mode = Mode::Normal;
        info!(%target, reply = ?new_id, total = self.total_comments(), "reply inserted");
        new_id
    }

    /// Toggles collapse on the selected comment.
    ///
    /// Only acts where the `Collapse`/`Expand` affordance is shown: the comment
    /// has replies, can be replied to, and its reply box is closed.
    pub fn toggle_collapse_selected(&mut self) {
        let Some(node) = self.selected() else { return };
        if node.is_leaf() || !node.can_reply || node.is_reply_box_open {
            return;
        }
        let id = node.id.clone();
        let next = toggle_collapse(&self.comments, &id);
        self.replace_comments(next, &id);
        debug!(%id, "collapse toggled");
    }

    /// Enters the quit dialog, remembering the mode to resume on cancel.
    pub fn request_quit_confirmation(&mut self) {
        self.resume_mode = self.mode;
        self.mode = Mode::ConfirmQuit;
    }

    #[cfg(test)]
    pub(crate) fn select_id(&mut self, id: &str) {
        self.reselect(&CommentId::from(id));
        assert_eq!(self.selected_id(), Some(CommentId::from(id)), "{id} not visible");
    }
}
