//! # comment-tree
//!
//! Comment-tree builder and page indexer for a discussion-forum backend.
//!
//! Given the flat, ordered snapshot of one topic's comments — each comment
//! optionally replying to another comment in the same topic — this crate
//! reconstructs the reply hierarchy, builds an identity index over it, and
//! answers pagination and visibility-filtering queries for rendering.
//!
//! ## Design
//!
//! - **Immutable after construction**: a [`CommentList`](comment::CommentList)
//!   is built once per snapshot and never mutated. Any change to a topic's
//!   comments produces a brand-new instance; concurrent readers never see a
//!   partially rebuilt tree or index.
//! - **Total over all inputs**: orphaned replies (parent removed by
//!   moderation, parent outside the topic, forward references) attach under
//!   the synthetic root instead of failing, so no comment is ever dropped
//!   from display.
//! - **Flat-order pagination**: pages are contiguous ranges of the snapshot,
//!   not of the tree — replies are paginated by overall arrival order, with
//!   a caller-supplied exclusion set suppressing hidden comments without
//!   shifting page boundaries.
//!
//! ## Example
//!
//! ```rust
//! use comment_tree::comment::{Comment, CommentId, CommentList};
//! use std::collections::HashSet;
//!
//! let snapshot = vec![
//!     Comment::new(CommentId::new(1), None, 1_000),
//!     Comment::new(CommentId::new(2), Some(CommentId::new(1)), 2_000),
//!     Comment::new(CommentId::new(3), None, 3_000),
//! ];
//!
//! let list = CommentList::new(snapshot, 3_000);
//!
//! // Reply 2 hangs under comment 1 in the tree.
//! let node = list.node(CommentId::new(1)).unwrap();
//! assert_eq!(node.children().len(), 1);
//!
//! // Pagination follows flat snapshot order, not nesting.
//! assert_eq!(list.page_of(CommentId::new(3), 2), Some(1));
//! let page = list.comments_for_page(false, Some(0), 2, &HashSet::new());
//! assert_eq!(page.len(), 2);
//! ```

pub mod comment;
pub mod error;

pub use comment::{
    current_timestamp_millis, Comment, CommentId, CommentList, CommentNode, CommentTree,
    DisplayProfile, NodeId, TopicCache, TopicId,
};
pub use error::{CommentError, Result};
