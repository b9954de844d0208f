use std::fmt::Debug;

use super::RBTree;

/// The two-valued color tag of a red-black tree node.
///
/// Absent children are treated as [`Color::Black`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// Which child slot of a node something lives in.
///
/// Every fixup case has a mirror image, so the tree code is written once in
/// terms of a `Side` and its [`opposite`](Side::opposite).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Stable index of a node in the tree's arena.
///
/// An id stays valid until the node it names is deleted. After that the slot
/// may be handed to a newer node, so ids should not be held across deletions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The raw arena index.
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone)]
pub(super) struct Node<K> {
    pub(super) key: K,
    pub(super) color: Color,
    pub(super) left: Option<NodeId>,
    pub(super) right: Option<NodeId>,
    pub(super) parent: Option<NodeId>,
}

impl<K> Node<K> {
    /// Fresh nodes are red and unlinked.
    pub(super) const fn new(key: K) -> Self {
        Self {
            key,
            color: Color::Red,
            left: None,
            right: None,
            parent: None,
        }
    }

    pub(super) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(super) fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Read-only view of a node, for inspecting the shape of a tree.
///
/// The handle borrows the tree, so it cannot outlive the next mutation.
pub struct NodeRef<'a, K> {
    tree: &'a RBTree<K>,
    id: NodeId,
}

impl<K> Copy for NodeRef<'_, K> {}
impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self { *self }
}

impl<'a, K> NodeRef<'a, K> {
    pub(super) fn new(tree: &'a RBTree<K>, id: NodeId) -> Self {
        Self { tree, id }
    }

    fn node(&self) -> &'a Node<K> {
        self.tree.get_node(self.id)
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn key(&self) -> &'a K {
        &self.node().key
    }

    pub fn color(&self) -> Color {
        self.node().color
    }

    pub fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    pub fn is_black(&self) -> bool {
        self.color() == Color::Black
    }

    pub fn child(&self, side: Side) -> Option<NodeRef<'a, K>> {
        self.node().child(side).map(|id| NodeRef::new(self.tree, id))
    }

    pub fn left(&self) -> Option<NodeRef<'a, K>> {
        self.child(Side::Left)
    }

    pub fn right(&self) -> Option<NodeRef<'a, K>> {
        self.child(Side::Right)
    }

    /// `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'a, K>> {
        self.node().parent.map(|id| NodeRef::new(self.tree, id))
    }
}

impl<K> PartialEq for NodeRef<'_, K> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}
impl<K> Eq for NodeRef<'_, K> {}

impl<K: Debug> Debug for NodeRef<'_, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id.0)
            .field("key", self.key())
            .field("color", &self.color())
            .finish()
    }
}
