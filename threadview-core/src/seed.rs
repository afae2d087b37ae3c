//! Initial comment data.
//!
//! A seed file is TOML with one `[[comment]]` table per root comment and
//! `[[comment.reply]]` tables nested to any depth:
//!
//! ```toml
//! [[comment]]
//! id = "welcome"          # optional, generated when absent
//! text = "Hello"
//!
//! [[comment.reply]]
//! text = "Read-only note"
//! can_reply = false       # optional, defaults to true
//! ```
//!
//! View flags are never read from the file; every seeded comment starts
//! expanded with its reply box closed.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::CoreError;
use crate::id::IdGenerator;
use crate::query::{count_nodes, has_unique_ids};
use crate::types::{CommentId, CommentNode};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedFile {
    #[serde(default)]
    comment: Vec<SeedComment>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedComment {
    id: Option<String>,
    text: String,
    #[serde(default = "default_can_reply")]
    can_reply: bool,
    #[serde(default)]
    reply: Vec<SeedComment>,
}

fn default_can_reply() -> bool {
    true
}

impl SeedComment {
    fn into_node(self, ids: &dyn IdGenerator) -> CommentNode {
        let id = match self.id {
            Some(id) => CommentId::new(id),
            None => ids.next_id(),
        };
        let children = self.reply.into_iter().map(|r| r.into_node(ids)).collect();
        CommentNode::new(id, self.text)
            .with_can_reply(self.can_reply)
            .with_children(children)
    }
}

/// The built-in thread shown when no seed file is configured: a single
/// repliable root comment `"Hello"` with id `"1"`.
pub fn default_seed() -> Vec<CommentNode> {
    vec![CommentNode::new("1", "Hello")]
}

/// Parses seed TOML from a string. `ids` fills in comments without an `id`.
///
/// # Errors
///
/// Returns [`CoreError::SeedParse`] (reported against `origin`) for malformed
/// TOML or unknown keys, and [`CoreError::DuplicateId`] when two comments
/// share an id.
pub fn parse_seed(
    raw: &str,
    origin: &Path,
    ids: &dyn IdGenerator,
) -> Result<Vec<CommentNode>, CoreError> {
    let file: SeedFile = toml::from_str(raw).map_err(|source| CoreError::SeedParse {
        path: origin.to_path_buf(),
        source,
    })?;
    let tree: Vec<CommentNode> = file.comment.into_iter().map(|c| c.into_node(ids)).collect();
    has_unique_ids(&tree)?;
    Ok(tree)
}

/// Reads and parses the seed file at `path`.
///
/// # Errors
///
/// [`CoreError::SeedIo`] when the file cannot be read, otherwise as
/// [`parse_seed`].
pub fn load_seed(path: &Path, ids: &dyn IdGenerator) -> Result<Vec<CommentNode>, CoreError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CoreError::SeedIo {
        path: path.to_path_buf(),
        source,
    })?;
    let tree = parse_seed(&raw, path, ids)?;
    info!(path = %path.display(), comments = count_nodes(&tree), "loaded seed file");
    Ok(tree)
}
