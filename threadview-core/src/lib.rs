//! Core of threadview: the comment tree model and the pure operations the
//! view applies to it.
//!
//! The view owns the root `Vec<CommentNode>`. On every user action it calls one
//! of [`toggle_reply`], [`toggle_collapse`] or [`insert_reply`] and replaces its
//! held forest with the returned one. Nothing in this crate keeps state between
//! calls.

pub mod error;
pub mod id;
pub mod query;
pub mod seed;
pub mod tree;
pub mod types;

pub use error::CoreError;
pub use id::{IdGenerator, SequentialIds, UuidIds};
pub use query::{count_nodes, find, has_unique_ids, open_reply_target, visible_rows, VisibleRow};
pub use tree::{insert_reply, toggle_collapse, toggle_reply};
pub use types::{CommentId, CommentNode, ReplyText};
