//! Comment-tree builder and page indexer for discussion topics.
//!
//! Given the flat, ordered snapshot of one topic's comments, this module
//! rebuilds the reply hierarchy, indexes it by comment identity, and answers
//! pagination queries for rendering:
//!
//! ```text
//! topic (synthetic root)
//!     ├── comment           (reply_to = none)
//!     │       ├── comment   (reply_to = parent id)
//!     │       └── comment
//!     └── comment
//! ```
//!
//! Everything is built once, at [`CommentList`] construction, and is
//! immutable afterwards; reads need no synchronization. A topic's list is
//! rebuilt wholesale whenever its comments change, typically behind a
//! [`TopicCache`] that swaps the cached instance atomically.

mod cache;
mod list;
mod node;
mod profile;
mod record;
mod tree;
pub mod types;

pub use cache::TopicCache;
pub use list::CommentList;
pub use node::{CommentNode, NodeId};
pub use profile::{DisplayProfile, DEFAULT_MESSAGES_PER_PAGE};
pub use record::Comment;
pub use tree::CommentTree;
pub use types::{current_timestamp_millis, CommentId, TopicId};
