//! Comment id generation.
//!
//! The tree operations never invent ids themselves; [`insert_reply`] asks an
//! [`IdGenerator`] for one per created comment. The binary uses [`UuidIds`];
//! tests and seed fixtures use [`SequentialIds`] for predictable output.
//!
//! [`insert_reply`]: crate::tree::insert_reply

use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::CommentId;

/// Source of fresh comment ids.
///
/// Every id returned must be unique for the lifetime of the process and must
/// not collide with ids already present in the tree.
pub trait IdGenerator {
    fn next_id(&self) -> CommentId;
}

impl<G: IdGenerator + ?Sized> IdGenerator for &G {
    fn next_id(&self) -> CommentId {
        (**self).next_id()
    }
}

/// Random UUID v4 ids in hyphenated text form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> CommentId {
        CommentId::new(uuid::Uuid::new_v4().to_string())
    }
}

/// Deterministic ids of the form `{prefix}{n}`, counting up from 1.
///
/// Uses an atomic counter so a shared reference can hand out ids.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> CommentId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        CommentId::new(format!("{}{}", self.prefix, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_count_up_with_prefix() {
        let ids = SequentialIds::new("c-");
        assert_eq!(ids.next_id().as_str(), "c-1");
        assert_eq!(ids.next_id().as_str(), "c-2");
        assert_eq!((&ids).next_id().as_str(), "c-3");
    }

    #[test]
    fn uuid_ids_are_distinct_v4_text() {
        let a = UuidIds.next_id();
        let b = UuidIds.next_id();
        assert_ne!(a, b);
        let parsed = uuid::Uuid::parse_str(a.as_str()).expect("uuid text");
        assert_eq!(parsed.get_version_num(), 4);
    }
}
