//! Immutable comment record supplied by the persistence layer.
//!
//! A `Comment` is one reply within a topic. The record is opaque to the tree
//! builder except for its identity and parent reference; its position within
//! the supplied snapshot (which the persistence layer orders by creation)
//! stays implicit as the slice index and is never re-sorted here.

use crate::comment::types::CommentId;
use serde::{Deserialize, Serialize};

/// One comment within a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique identifier within the topic.
    pub id: CommentId,
    /// The comment this one replies to, or `None` for a direct reply to
    /// the topic itself.
    pub reply_to: Option<CommentId>,
    /// Creation timestamp in milliseconds since Unix epoch.
    pub posted_at: u64,
}

impl Comment {
    /// Creates a comment record.
    pub fn new(id: CommentId, reply_to: Option<CommentId>, posted_at: u64) -> Self {
        Self {
            id,
            reply_to,
            posted_at,
        }
    }

    /// Returns true if this comment replies to the topic itself rather
    /// than to another comment.
    pub fn is_top_level(&self) -> bool {
        self.reply_to.is_none()
    }
}
