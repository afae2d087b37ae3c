use std::path::PathBuf;

use crate::types::CommentId;

/// Errors produced by the comment core.
///
/// None of the tree operations return these: an unknown target is a silent
/// no-op. They surface only when building inputs (reply text, seed data).
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A reply body was empty.
    #[error("reply text must not be empty")]
    EmptyReply,

    /// The same id appears on more than one comment.
    #[error("duplicate comment id `{0}`")]
    DuplicateId(CommentId),

    #[error("failed to read seed file {path:?}: {source}")]
    SeedIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file {path:?}: {source}")]
    SeedParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
