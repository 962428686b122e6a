//! Immutable per-topic comment list: snapshot, reply tree, and pagination.
//!
//! `CommentList` is the read facade the rest of the backend queries. It owns
//! the ordered snapshot, the tree built from it, and the topic's
//! last-modification timestamp. It is never mutated: when a topic's comments
//! change, the caller builds a fresh list and swaps it in wholesale (see
//! [`TopicCache`](crate::comment::TopicCache)), so concurrent readers never
//! observe a partially rebuilt tree or index.
//!
//! Pagination operates on the flat snapshot order, not the tree: replies are
//! paginated by overall arrival order regardless of nesting depth. Page
//! windows are always evaluated against forward-oriented snapshot indices,
//! even under reverse display order — "page 0 reversed" is still the first
//! `messages_per_page` comments of the snapshot, visited back-to-front.

use crate::comment::node::CommentNode;
use crate::comment::profile::DisplayProfile;
use crate::comment::record::Comment;
use crate::comment::tree::CommentTree;
use crate::comment::types::CommentId;
use std::collections::HashSet;

/// Immutable aggregate of one topic's comments.
#[derive(Debug, Clone)]
pub struct CommentList {
    comments: Vec<Comment>,
    tree: CommentTree,
    last_modified: u64,
}

impl CommentList {
    /// Builds the list, tree, and identity index from an ordered snapshot
    /// plus the topic's last-modification timestamp.
    pub fn new(comments: Vec<Comment>, last_modified: u64) -> Self {
        let tree = CommentTree::build(&comments);

        Self {
            comments,
            tree,
            last_modified,
        }
    }

    /// The flat snapshot, in the order it was supplied.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// The reply hierarchy built from the snapshot.
    pub fn tree(&self) -> &CommentTree {
        &self.tree
    }

    /// Looks up a comment's tree node by identity. O(1).
    ///
    /// Returns `None` if the identifier is unknown in this snapshot.
    pub fn node(&self, id: CommentId) -> Option<&CommentNode> {
        self.tree.node(id)
    }

    /// Timestamp captured at construction, in milliseconds since Unix epoch.
    pub fn last_modified(&self) -> u64 {
        self.last_modified
    }

    /// Returns the zero-based display page a comment's permalink lands on:
    /// `floor(flat_index / messages_per_page)`.
    ///
    /// Depends only on the comment's position in the flat snapshot, never on
    /// tree depth. Returns `None` when the identifier is unknown or when
    /// `messages_per_page` is zero.
    pub fn page_of(&self, id: CommentId, messages_per_page: usize) -> Option<usize> {
        if messages_per_page == 0 {
            return None;
        }

        let index = self.comments.iter().position(|c| c.id == id)?;

        Some(index / messages_per_page)
    }

    /// [`page_of`](Self::page_of) with the page size sourced from a display
    /// profile.
    pub fn page_for_profile(&self, id: CommentId, profile: &DisplayProfile) -> Option<usize> {
        self.page_of(id, profile.messages_per_page())
    }

    /// Returns the comments of one display page, visibility-filtered.
    ///
    /// With `page == None` there is no windowing: every comment not in
    /// `hidden` is returned, in snapshot order (or reversed). Otherwise the
    /// window is `[page * messages_per_page, page * messages_per_page +
    /// messages_per_page)` over forward-oriented snapshot indices; a comment
    /// is included only when its forward index falls inside the window and
    /// its id is not hidden. `reverse` flips visit order only — the window
    /// itself is never re-based on reverse position, so page numbers mean
    /// the same index range in both directions.
    ///
    /// Hidden comments are skipped entirely: they are never emitted and do
    /// not shrink the window for other comments, keeping page boundaries
    /// stable relative to the full snapshot.
    ///
    /// A zero `messages_per_page` with a concrete `page` yields an empty
    /// result; the window arithmetic saturates rather than overflowing.
    pub fn comments_for_page(
        &self,
        reverse: bool,
        page: Option<usize>,
        messages_per_page: usize,
        hidden: &HashSet<CommentId>,
    ) -> Vec<&Comment> {
        let window = page.map(|p| {
            let offset = p.saturating_mul(messages_per_page);
            (offset, offset.saturating_add(messages_per_page))
        });

        let mut out = Vec::new();

        if reverse {
            for (index, comment) in self.comments.iter().enumerate().rev() {
                if Self::selected(index, comment, window, hidden) {
                    out.push(comment);
                }
            }
        } else {
            for (index, comment) in self.comments.iter().enumerate() {
                if Self::selected(index, comment, window, hidden) {
                    out.push(comment);
                }
            }
        }

        out
    }

    /// Window membership is judged on the forward-oriented index in both
    /// visit directions.
    fn selected(
        index: usize,
        comment: &Comment,
        window: Option<(usize, usize)>,
        hidden: &HashSet<CommentId>,
    ) -> bool {
        if let Some((start, end)) = window {
            if index < start || index >= end {
                return false;
            }
        }

        !hidden.contains(&comment.id)
    }
}
