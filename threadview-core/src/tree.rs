//! Immutable rebuild operations on the comment forest.
//!
//! Each public function walks the whole forest once and returns a brand-new
//! `Vec<CommentNode>`; the input slice is never modified. Every node is
//! visited:
//!
//! - the node whose id equals the target gets the operation's transform;
//! - every other node gets the operation's reset, which forces its flag to
//!   `false`.
//!
//! The reset is what keeps at most one reply box open: opening one anywhere
//! closes every other box in the same pass. The collapse toggle uses the same
//! reset, so collapsing one comment expands all others.
//!
//! A target that matches nothing is not an error. The walk still runs and only
//! the resets take effect.

use tracing::debug;

use crate::id::IdGenerator;
use crate::types::{CommentId, CommentNode, ReplyText};

/// Flips the reply box of `target` and closes every other reply box.
///
/// Used both to open a reply box and to cancel one: cancelling calls this
/// again on the same, currently open, node.
pub fn toggle_reply(tree: &[CommentNode], target: &CommentId) -> Vec<CommentNode> {
    rebuild_forest(tree, target, &Update::ToggleReply)
}

/// Flips `is_collapsed` on `target` and clears it on every other node.
pub fn toggle_collapse(tree: &[CommentNode], target: &CommentId) -> Vec<CommentNode> {
    rebuild_forest(tree, target, &Update::ToggleCollapse)
}

/// Appends a new reply under `target` and closes every reply box.
///
/// The reply is a repliable leaf with a fresh id from `ids`, placed after the
/// target's existing children. The target's own reply box is closed along
/// with all others.
pub fn insert_reply(
    tree: &[CommentNode],
    target: &CommentId,
    text: &ReplyText,
    ids: &dyn IdGenerator,
) -> Vec<CommentNode> {
    rebuild_forest(tree, target, &Update::InsertReply { text, ids })
}

/// The three rebuild operations. They differ only in what happens to the
/// matched node and which flag the reset clears.
enum Update<'a> {
    ToggleReply,
    ToggleCollapse,
    InsertReply {
        text: &'a ReplyText,
        ids: &'a dyn IdGenerator,
    },
}

impl Update<'_> {
    fn name(&self) -> &'static str {
        match self {
            Update::ToggleReply => "toggle_reply",
            Update::ToggleCollapse => "toggle_collapse",
            Update::InsertReply { .. } => "insert_reply",
        }
    }

    fn apply(&self, node: &mut CommentNode) {
        match self {
            Update::ToggleReply => node.is_reply_box_open = !node.is_reply_box_open,
            Update::ToggleCollapse => node.is_collapsed = !node.is_collapsed,
            Update::InsertReply { text, ids } => {
                node.is_reply_box_open = false;
                node.children.push(CommentNode::new(ids.next_id(), text.as_str()));
            }
        }
    }

    fn reset(&self, node: &mut CommentNode) {
        match self {
            Update::ToggleCollapse => node.is_collapsed = false,
            Update::ToggleReply | Update::InsertReply { .. } => {
                node.is_reply_box_open = false
            }
        }
    }
}

fn rebuild_forest(
    tree: &[CommentNode],
    target: &CommentId,
    update: &Update<'_>,
) -> Vec<CommentNode> {
    let mut matched = 0usize;
    let rebuilt = rebuild(tree, target, update, &mut matched);
    if matched == 0 {
        debug!(op = update.name(), %target, "target not found; only resets applied");
    } else {
        debug!(op = update.name(), %target, matched, "comment tree rebuilt");
    }
    rebuilt
}

/// Rebuilds one level of siblings.
///
/// Children are rebuilt before the node itself is decided, so the subtree of a
/// matched node is also normalised by the reset. Inserted replies are pushed
/// after that and are never touched by it.
fn rebuild(
    nodes: &[CommentNode],
    target: &CommentId,
    update: &Update<'_>,
    matched: &mut usize,
) -> Vec<CommentNode> {
    nodes
        .iter()
        .map(|node| {
            let mut next = CommentNode {
                id: node.id.clone(),
                text: node.text.clone(),
                can_reply: node.can_reply,
                is_reply_box_open: node.is_reply_box_open,
                is_collapsed: node.is_collapsed,
                children: rebuild(&node.children, target, update, matched),
            };
            if node.id == *target {
                *matched += 1;
                update.apply(&mut next);
            } else {
                update.reset(&mut next);
            }
            next
        })
        .collect()
}
