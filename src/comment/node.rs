//! Nodes of the reply hierarchy.
//!
//! A `CommentNode` wraps at most one comment record plus the ordered list of
//! its replies. The synthetic root node wraps no record and represents the
//! direct replies to the topic itself. Nodes live in the tree's arena and
//! reference each other by [`NodeId`]; there are no parent back-references
//! and therefore no cyclic ownership.

use crate::comment::record::Comment;

/// Index of a node within a [`CommentTree`](crate::comment::CommentTree)
/// arena.
///
/// Node ids are only minted by the tree that owns the arena and are always
/// valid within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// A node in the reply hierarchy.
#[derive(Debug, Clone)]
pub struct CommentNode {
    comment: Option<Comment>,
    pub(crate) children: Vec<NodeId>,
}

impl CommentNode {
    /// Creates the synthetic root node.
    pub(crate) fn root() -> Self {
        Self {
            comment: None,
            children: Vec::new(),
        }
    }

    /// Creates a node wrapping one comment record.
    pub(crate) fn wrapping(comment: Comment) -> Self {
        Self {
            comment: Some(comment),
            children: Vec::new(),
        }
    }

    /// Returns the wrapped comment, or `None` for the synthetic root.
    pub fn comment(&self) -> Option<&Comment> {
        self.comment.as_ref()
    }

    /// Returns the ids of this node's children, in the order the replies
    /// were encountered in the snapshot.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Returns true if this is the synthetic root node.
    pub fn is_root(&self) -> bool {
        self.comment.is_none()
    }
}
