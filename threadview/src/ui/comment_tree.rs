//! Thread panel renderer for threadview.
//!
//! Each visible comment becomes one multi-line `ListItem`: the body, then the
//! affordance hints, then the reply box when it is open on that comment.
//! Which hints appear follows the comment's flags:
//!
//! - `[r] Reply` only when the comment can be replied to and its box is closed;
//! - `[c] Collapse` / `[c] Expand` alongside it when the comment has replies;
//! - the reply box (draft or placeholder, then submit/cancel hints) when open.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{List, ListItem},
};
use threadview_core::{count_nodes, visible_rows, CommentNode, VisibleRow};

use crate::app::AppState;
use crate::theme::Theme;
use crate::ui::layout::panel_block;

pub const REPLY_PLACEHOLDER: &str = "Type comment here....";

/// Renders the thread panel from `state.comments`.
///
/// Uses `render_stateful_widget` so the `ListState` selection highlight and
/// scroll offset are applied.
pub fn render_thread(frame: &mut Frame, area: Rect, state: &mut AppState, theme: &Theme) {
    let total = count_nodes(&state.comments);
    let title = if total > 0 {
        format!(" Comments ({total}) ")
    } else {
        " Comments ".to_owned()
    };
    let block = panel_block(title, theme);

    let items: Vec<ListItem> = if state.comments.is_empty() {
        vec![ListItem::new(Line::styled(
            "No comments",
            Style::default().fg(theme.reply_placeholder),
        ))]
    } else {
        visible_rows(&state.comments)
            .into_iter()
            .map(|row| comment_item(row, &state.draft, theme))
            .collect()
    };

    let list = List::new(items)
        .block(block)
        .style(Style::default().bg(theme.background))
        .highlight_style(Style::default().bg(theme.selection_bg));

    frame.render_stateful_widget(list, area, &mut state.list_state);
}

/// Builds the lines for one visible comment.
fn comment_item(row: VisibleRow<'_>, draft: &str, theme: &Theme) -> ListItem<'static> {
    let node = row.node;
    let guide = "│ ".repeat(row.depth);
    let guide_style = Style::default().fg(theme.thread_guide);

    let mut body = vec![
        Span::styled(guide.clone(), guide_style),
        Span::styled(
            node.text.clone(),
            Style::default()
                .fg(theme.comment_text)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if node.is_collapsed && !node.is_leaf() {
        body.push(Span::styled(
            format!("  (+{} hidden)", count_nodes(&node.children)),
            Style::default().fg(theme.collapsed_marker),
        ));
    }
    let mut lines = vec![Line::from(body)];

    if let Some(hints) = affordances(node) {
        lines.push(Line::from(vec![
            Span::styled(guide.clone(), guide_style),
            Span::styled(hints, Style::default().fg(theme.affordance)),
        ]));
    }

    if node.is_reply_box_open {
        let input = if draft.is_empty() {
            Span::styled(
                REPLY_PLACEHOLDER,
                Style::default().fg(theme.reply_placeholder),
            )
        } else {
            Span::styled(format!("{draft}▏"), Style::default().fg(theme.reply_input))
        };
        lines.push(Line::from(vec![
            Span::styled(guide.clone(), guide_style),
            Span::styled("┃ > ", Style::default().fg(theme.border_inactive)),
            input,
        ]));
        lines.push(Line::from(vec![
            Span::styled(guide, guide_style),
            Span::styled(
                "[Enter] Submit  [Esc] Cancel",
                Style::default().fg(theme.affordance),
            ),
        ]));
    }

    ListItem::new(Text::from(lines))
}

/// Hint text shown under a comment, or `None` when no action is offered.
pub fn affordances(node: &CommentNode) -> Option<String> {
    if !node.can_reply || node.is_reply_box_open {
        return None;
    }
    let mut hints = String::from("[r] Reply");
    if !node.is_leaf() {
        hints.push_str(if node.is_collapsed {
            "  [c] Expand"
        } else {
            "  [c] Collapse"
        });
    }
    Some(hints)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_offers_reply_only() {
        let node = CommentNode::new("1", "Hello");
        assert_eq!(affordances(&node).as_deref(), Some("[r] Reply"));
    }

    #[test]
    fn collapse_label_tracks_flag() {
        let mut node =
            CommentNode::new("1", "Hello").with_children(vec![CommentNode::new("2", "Hi")]);
        assert_eq!(affordances(&node).as_deref(), Some("[r] Reply  [c] Collapse"));
        node.is_collapsed = true;
        assert_eq!(affordances(&node).as_deref(), Some("[r] Reply  [c] Expand"));
    }

    #[test]
    fn no_hints_while_replying_or_locked() {
        let mut open = CommentNode::new("1", "Hello");
        open.is_reply_box_open = true;
        assert_eq!(affordances(&open), None);

        let locked = CommentNode::new("2", "Locked")
            .with_can_reply(false)
            .with_children(vec![CommentNode::new("3", "Hi")]);
        assert_eq!(affordances(&locked), None);
    }
}
