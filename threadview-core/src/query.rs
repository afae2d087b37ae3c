//! Read-only views over the comment forest.

use std::collections::HashSet;

use crate::error::CoreError;
use crate::types::{CommentId, CommentNode};

/// A comment reached by [`visible_rows`], with its nesting depth (roots are 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRow<'a> {
    pub depth: usize,
    pub node: &'a CommentNode,
}

/// Total number of comments in the forest, replies included.
pub fn count_nodes(tree: &[CommentNode]) -> usize {
    tree.iter().map(|node| 1 + count_nodes(&node.children)).sum()
}

/// Finds the comment with `id` anywhere in the forest (pre-order, first hit).
pub fn find<'a>(tree: &'a [CommentNode], id: &CommentId) -> Option<&'a CommentNode> {
    tree.iter().find_map(|node| {
        if node.id == *id {
            Some(node)
        } else {
            find(&node.children, id)
        }
    })
}

/// Returns the comment whose reply box is open, if any.
pub fn open_reply_target(tree: &[CommentNode]) -> Option<&CommentNode> {
    tree.iter().find_map(|node| {
        if node.is_reply_box_open {
            Some(node)
        } else {
            open_reply_target(&node.children)
        }
    })
}

/// Flattens the forest into display order.
///
/// Depth-first pre-order. The replies of a collapsed comment are skipped, the
/// comment itself is still listed.
pub fn visible_rows(tree: &[CommentNode]) -> Vec<VisibleRow<'_>> {
    let mut rows = Vec::new();
    push_visible(tree, 0, &mut rows);
    rows
}

fn push_visible<'a>(nodes: &'a [CommentNode], depth: usize, rows: &mut Vec<VisibleRow<'a>>) {
    for node in nodes {
        rows.push(VisibleRow { depth, node });
        if !node.is_collapsed {
            push_visible(&node.children, depth + 1, rows);
        }
    }
}

/// Checks that every comment id in the forest is unique.
///
/// # Errors
///
/// Returns [`CoreError::DuplicateId`] naming the first repeated id in
/// pre-order.
pub fn has_unique_ids(tree: &[CommentNode]) -> Result<(), CoreError> {
    fn walk<'a>(
        nodes: &'a [CommentNode],
        seen: &mut HashSet<&'a CommentId>,
    ) -> Result<(), CoreError> {
        for node in nodes {
            if !seen.insert(&node.id) {
                return Err(CoreError::DuplicateId(node.id.clone()));
            }
            walk(&node.children, seen)?;
        }
        Ok(())
    }

    walk(tree, &mut HashSet::new())
}
