//! Reply-tree construction from a flat comment snapshot.
//!
//! The builder consumes the ordered snapshot in one linear pass. Comments
//! attach to their parent when the parent appears *earlier* in the snapshot;
//! any other parent reference (absent, not yet seen, or self-referential)
//! falls back to attachment under the synthetic root. That fallback is the
//! designed policy, not an error: a snapshot may contain orphaned replies
//! whose parent was removed by moderation, and those must still render.
//!
//! Because a node only ever attaches to an already-created arena slot or to
//! the root, no cycle can form regardless of input order. A reply whose
//! parent appears later in the scan is attributed to the root; that
//! misattribution is accepted and not corrected by a second pass.
//!
//! After the scan, a pre-order depth-first traversal of the frozen tree
//! populates the identity index mapping each comment id to its node.

use crate::comment::node::{CommentNode, NodeId};
use crate::comment::record::Comment;
use crate::comment::types::CommentId;
use std::collections::HashMap;
use tracing::debug;

/// Arena slot of the synthetic root node.
const ROOT: NodeId = NodeId(0);

/// The reply hierarchy of one topic, plus an identity index over it.
///
/// Immutable once built; all reads are safe for unsynchronized concurrent
/// access.
#[derive(Debug, Clone)]
pub struct CommentTree {
    /// Arena of nodes; slot 0 is the synthetic root.
    nodes: Vec<CommentNode>,
    /// Identity index: comment id -> arena slot of its node.
    index: HashMap<CommentId, NodeId>,
}

impl CommentTree {
    /// Builds the reply tree and identity index from an ordered snapshot.
    ///
    /// Runs in O(n): one pass to attach nodes, one traversal to index them.
    /// Total over all inputs; malformed parent references degrade to root
    /// attachment.
    pub fn build(comments: &[Comment]) -> Self {
        let mut nodes = Vec::with_capacity(comments.len() + 1);
        nodes.push(CommentNode::root());

        // Parent lookup among comments already scanned. Registering an id
        // only after resolving its own parent keeps self-references out of
        // the tree: they fall back to the root like any unseen parent.
        let mut seen: HashMap<CommentId, NodeId> = HashMap::with_capacity(comments.len());

        for comment in comments {
            let node_id = NodeId(nodes.len());

            let parent = comment
                .reply_to
                .and_then(|parent_id| seen.get(&parent_id).copied())
                .unwrap_or(ROOT);

            nodes.push(CommentNode::wrapping(comment.clone()));
            nodes[parent.0].children.push(node_id);
            seen.insert(comment.id, node_id);
        }

        let index = build_index(&nodes);

        debug!(
            comments = comments.len(),
            top_level = nodes[ROOT.0].children().len(),
            "built comment tree"
        );

        Self { nodes, index }
    }

    /// Returns the synthetic root node.
    pub fn root(&self) -> &CommentNode {
        &self.nodes[ROOT.0]
    }

    /// Returns the arena slot of the synthetic root node.
    pub fn root_id(&self) -> NodeId {
        ROOT
    }

    /// Returns the node at an arena slot.
    ///
    /// Node ids are only minted by this tree, so the slot is always valid.
    pub fn get(&self, id: NodeId) -> &CommentNode {
        &self.nodes[id.0]
    }

    /// Looks up a comment's node by identity.
    ///
    /// Returns `None` if the identifier is unknown in this snapshot.
    pub fn node(&self, id: CommentId) -> Option<&CommentNode> {
        self.index.get(&id).map(|&node_id| &self.nodes[node_id.0])
    }

    /// Looks up a comment's arena slot by identity.
    pub fn node_id(&self, id: CommentId) -> Option<NodeId> {
        self.index.get(&id).copied()
    }

    /// Returns the child nodes of an arena slot, in snapshot order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &CommentNode> {
        self.nodes[id.0]
            .children()
            .iter()
            .map(move |&child| &self.nodes[child.0])
    }

    /// Number of comments in the tree (the root is not counted).
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Returns true if the tree holds no comments.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }
}

/// Walks the frozen tree pre-order and maps every wrapped comment id to
/// its node's arena slot.
fn build_index(nodes: &[CommentNode]) -> HashMap<CommentId, NodeId> {
    let mut index = HashMap::with_capacity(nodes.len().saturating_sub(1));
    let mut stack = vec![ROOT];

    while let Some(node_id) = stack.pop() {
        let node = &nodes[node_id.0];

        if let Some(comment) = node.comment() {
            index.insert(comment.id, node_id);
        }

        // Reverse push keeps pre-order visitation in child order.
        for &child in node.children().iter().rev() {
            stack.push(child);
        }
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: u32, reply_to: u32) -> Comment {
        Comment::new(
            CommentId::new(id),
            CommentId::from_raw(reply_to),
            1_000 + id as u64,
        )
    }

    fn child_ids(tree: &CommentTree, node: &CommentNode) -> Vec<u32> {
        node.children()
            .iter()
            .map(|&c| tree.get(c).comment().unwrap().id.get())
            .collect()
    }

    #[test]
    fn test_empty_snapshot() {
        let tree = CommentTree::build(&[]);
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(tree.root().children().is_empty());
    }

    #[test]
    fn test_flat_snapshot_all_top_level() {
        let comments = vec![comment(1, 0), comment(2, 0), comment(3, 0)];
        let tree = CommentTree::build(&comments);

        assert_eq!(tree.len(), 3);
        assert_eq!(child_ids(&tree, tree.root()), vec![1, 2, 3]);
    }

    #[test]
    fn test_nested_replies() {
        // 1 <- 2 <- 4, 1 <- 3
        let comments = vec![comment(1, 0), comment(2, 1), comment(3, 1), comment(4, 2)];
        let tree = CommentTree::build(&comments);

        assert_eq!(child_ids(&tree, tree.root()), vec![1]);

        let node1 = tree.node(CommentId::new(1)).unwrap();
        assert_eq!(child_ids(&tree, node1), vec![2, 3]);

        let node2 = tree.node(CommentId::new(2)).unwrap();
        assert_eq!(child_ids(&tree, node2), vec![4]);
    }

    #[test]
    fn test_orphan_attaches_to_root() {
        // Parent 99 is absent from the snapshot.
        let comments = vec![comment(1, 0), comment(10, 99)];
        let tree = CommentTree::build(&comments);

        assert_eq!(child_ids(&tree, tree.root()), vec![1, 10]);
    }

    #[test]
    fn test_forward_reference_attaches_to_root() {
        // 5 replies to 6, but 6 appears later in the scan.
        let comments = vec![comment(5, 6), comment(6, 0)];
        let tree = CommentTree::build(&comments);

        assert_eq!(child_ids(&tree, tree.root()), vec![5, 6]);
        let node6 = tree.node(CommentId::new(6)).unwrap();
        assert!(node6.children().is_empty());
    }

    #[test]
    fn test_self_reference_attaches_to_root() {
        let comments = vec![comment(7, 7)];
        let tree = CommentTree::build(&comments);

        assert_eq!(child_ids(&tree, tree.root()), vec![7]);
    }

    #[test]
    fn test_index_covers_every_comment() {
        let comments = vec![
            comment(1, 0),
            comment(2, 1),
            comment(3, 99),
            comment(4, 2),
            comment(5, 4),
        ];
        let tree = CommentTree::build(&comments);

        for c in &comments {
            let node = tree.node(c.id).expect("every comment must be indexed");
            assert_eq!(node.comment().unwrap().id, c.id);
        }
        assert!(tree.node(CommentId::new(42)).is_none());
    }

    #[test]
    fn test_unknown_lookup_is_none() {
        let tree = CommentTree::build(&[comment(1, 0)]);
        assert!(tree.node(CommentId::new(2)).is_none());
        assert!(tree.node_id(CommentId::new(2)).is_none());
    }

    #[test]
    fn test_every_comment_reachable_from_root() {
        let comments = vec![comment(1, 0), comment(2, 1), comment(3, 5), comment(4, 3)];
        let tree = CommentTree::build(&comments);

        let mut reached = Vec::new();
        let mut stack = vec![tree.root_id()];
        while let Some(id) = stack.pop() {
            let node = tree.get(id);
            if let Some(c) = node.comment() {
                reached.push(c.id);
            }
            stack.extend(node.children().iter().copied());
        }

        reached.sort();
        let mut expected: Vec<_> = comments.iter().map(|c| c.id).collect();
        expected.sort();
        assert_eq!(reached, expected);
    }
}
