use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Opaque identifier of a comment.
///
/// Assigned once when the comment is created and never changed. Only equality
/// is meaningful; the text form is whatever the [`IdGenerator`](crate::id::IdGenerator)
/// or seed file produced (UUID v4 text for replies typed at runtime).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(String);

impl CommentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CommentId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for CommentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Body of a reply about to be inserted.
///
/// Cannot be empty, so [`insert_reply`](crate::tree::insert_reply) never sees
/// an empty body. Whitespace-only text is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyText(String);

impl ReplyText {
    /// Wraps `text`, rejecting the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyReply`] when `text` is empty.
    pub fn new(text: impl Into<String>) -> Result<Self, CoreError> {
        let text = text.into();
        if text.is_empty() {
            return Err(CoreError::EmptyReply);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for ReplyText {
    type Error = CoreError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

/// One comment in the thread together with its nested replies.
///
/// `is_reply_box_open` and `is_collapsed` are transient view flags. They are
/// only ever changed by the rebuild operations in [`crate::tree`], which also
/// keep at most one reply box open across the whole forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentNode {
    pub id: CommentId,
    pub text: String,
    /// When `false` the view never offers a reply affordance for this comment.
    pub can_reply: bool,
    pub is_reply_box_open: bool,
    /// Hides this comment's own replies; ancestors and siblings are unaffected.
    pub is_collapsed: bool,
    /// Replies in display order. Append-only.
    pub children: Vec<CommentNode>,
}

impl CommentNode {
    /// Creates a repliable leaf comment with both view flags cleared.
    ///
    /// This is also the exact shape of a freshly inserted reply.
    pub fn new(id: impl Into<CommentId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            can_reply: true,
            is_reply_box_open: false,
            is_collapsed: false,
            children: Vec::new(),
        }
    }

    pub fn with_can_reply(mut self, can_reply: bool) -> Self {
        self.can_reply = can_reply;
        self
    }

    pub fn with_children(mut self, children: Vec<CommentNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
