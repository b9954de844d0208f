use std::fmt::Display;

use crate::rbtree::{NodeId, Side};

/// Why a rotation was refused. The tree is left untouched in either case.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateError {
    /// The id doesn't name a live node (it was never allocated, or has been deleted).
    VacantNode(NodeId),
    /// The child that would have taken the node's place is absent.
    MissingChild { node: NodeId, side: Side },
}

impl Display for RotateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RotateError::VacantNode(id) => write!(f, "no live node at index {}", id.index()),
            RotateError::MissingChild { node, side } => {
                write!(f, "cannot rotate node {}: its {side:?} child is absent", node.index())
            }
        }
    }
}

impl std::error::Error for RotateError {}

/// The first broken red-black (or bookkeeping) property found by
/// [`RBTree::check_invariants`](crate::RBTree::check_invariants).
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The root of a non-empty tree is red.
    RedRoot,
    /// A red node has a red child.
    RedRedEdge { parent: NodeId, child: NodeId },
    /// The two subtrees of `node` have different black-heights.
    BlackHeightMismatch { node: NodeId, left: usize, right: usize },
    /// `node`'s key is not strictly between the keys bounding its subtree.
    OutOfOrder { node: NodeId },
    /// A child's parent link doesn't point back at its parent (or the root has a parent).
    BrokenParentLink { node: NodeId },
    /// The recorded length disagrees with the number of reachable nodes.
    LengthMismatch { counted: usize, recorded: usize },
}

impl Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            InvariantViolation::RedRoot => f.write_str("the root is red"),
            InvariantViolation::RedRedEdge { parent, child } => {
                write!(f, "red node {} has red child {}", parent.index(), child.index())
            }
            InvariantViolation::BlackHeightMismatch { node, left, right } => write!(
                f, "node {} has black-height {left} on the left but {right} on the right", node.index()
            ),
            InvariantViolation::OutOfOrder { node } => write!(f, "node {} breaks the search order", node.index()),
            InvariantViolation::BrokenParentLink { node } => write!(f, "node {} has a wrong parent link", node.index()),
            InvariantViolation::LengthMismatch { counted, recorded } => {
                write!(f, "found {counted} nodes but the tree records {recorded}")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}
