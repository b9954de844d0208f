//! An ordered set backed by a red-black tree.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`], so the
//! parent/child links don't form an ownership cycle. Rotations and
//! transplants are just index reassignments.
//!
//! Operations:
//!   - [`insert`](RBTree::insert), [`delete`](RBTree::delete), [`search`](RBTree::search): O(log(n))
//!   - [`iter`](RBTree::iter), [`in_order_traversal`](RBTree::in_order_traversal): O(n)
//!   - [`rotate_left`](RBTree::rotate_left), [`rotate_right`](RBTree::rotate_right): O(1)

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::Debug;

use log::debug;

mod delete;
mod insert;
mod iter;
mod node;
mod rotate;
mod verify;

pub use iter::Iter;
pub use node::{Color, NodeId, NodeRef, Side};

use node::Node;

// PROVE: any node with height `h` has black height at least `h/2`
// PROVE: the subtree located at any node `x` contains at least `2^bh(x) - 1` nodes (use induction)
// LEMMA: An RBTree with `n` internal nodes has height at most `2*log₂(n+1)`

/// A red-black tree of unique keys.
///
/// Keys only need a total order. An [`Ord`] implementation that isn't one
/// (inconsistent or non-transitive) won't cause memory unsafety, but the
/// contents of the tree are unspecified after that.
#[derive(Clone)]
pub struct RBTree<K> {
    slots: Vec<Option<Node<K>>>,
    free: Vec<NodeId>,
    root: Option<NodeId>,
    len: usize,
}

impl<K> RBTree<K> {
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    /// Creates an empty tree with room for `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every key, dropping the arena.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.root = None;
        self.len = 0;
    }

    /// The root of the tree, if it has any nodes.
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        self.root.map(|id| NodeRef::new(self, id))
    }

    /// Looks up a node by id. Returns `None` if the id doesn't name a live node.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, K>> {
        match self.slots.get(id.0) {
            Some(Some(_)) => Some(NodeRef::new(self, id)),
            _ => None,
        }
    }

    /// Complexity: O(log(n))
    pub fn search<Q>(&self, key: &Q) -> Option<NodeRef<'_, K>>
    where
        K : Borrow<Q>,
        Q : ?Sized + Ord
    {
        self.find(key).map(|id| NodeRef::new(self, id))
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        K : Borrow<Q>,
        Q : ?Sized + Ord
    {
        self.find(key).map(|id| &self.get_node(id).key)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K : Borrow<Q>,
        Q : ?Sized + Ord
    {
        self.find(key).is_some()
    }

    /// The smallest key.
    pub fn min(&self) -> Option<&K> {
        self.root.map(|r| &self.get_node(self.extreme(r, Side::Left)).key)
    }

    /// The largest key.
    pub fn max(&self) -> Option<&K> {
        self.root.map(|r| &self.get_node(self.extreme(r, Side::Right)).key)
    }

    fn find<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K : Borrow<Q>,
        Q : ?Sized + Ord
    {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.get_node(id);
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    // ---- arena bookkeeping ----

    fn get_node(&self, id: NodeId) -> &Node<K> {
        self.slots[id.0].as_ref().expect("links only ever point at occupied slots")
    }

    fn get_node_mut(&mut self, id: NodeId) -> &mut Node<K> {
        self.slots[id.0].as_mut().expect("links only ever point at occupied slots")
    }

    /// Puts a new (red, unlinked) node into the arena, reusing a vacated slot if there is one.
    fn allocate(&mut self, key: K) -> NodeId {
        let node = Some(Node::new(key));
        self.len += 1;
        match self.free.pop() {
            Some(id) => {
                debug!("Reusing vacated slot {}", id.0);
                self.slots[id.0] = node;
                id
            }
            None => {
                self.slots.push(node);
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Vacates a slot that is no longer linked into the tree, handing back its key.
    fn release(&mut self, id: NodeId) -> K {
        let node = self.slots[id.0].take().expect("a node is only released once");
        self.free.push(id);
        self.len -= 1;
        node.key
    }

    // ---- link helpers shared by the rotation, insertion and deletion paths ----

    /// Absent nodes are black.
    fn color_of(&self, id: Option<NodeId>) -> Color {
        id.map_or(Color::Black, |id| self.get_node(id).color)
    }

    fn is_red(&self, id: Option<NodeId>) -> bool {
        self.color_of(id) == Color::Red
    }

    fn set_color(&mut self, id: NodeId, color: Color) {
        self.get_node_mut(id).color = color;
    }

    fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.get_node(id).parent
    }

    fn child_of(&self, id: NodeId, side: Side) -> Option<NodeId> {
        self.get_node(id).child(side)
    }

    fn set_child(&mut self, id: NodeId, side: Side, child: Option<NodeId>) {
        *self.get_node_mut(id).child_mut(side) = child;
    }

    fn set_parent(&mut self, id: Option<NodeId>, parent: Option<NodeId>) {
        if let Some(id) = id {
            self.get_node_mut(id).parent = parent;
        }
    }

    /// Which child of `parent` the node `id` is.
    fn side_in(&self, parent: NodeId, id: NodeId) -> Side {
        if self.get_node(parent).left == Some(id) { Side::Left } else { Side::Right }
    }

    /// Points whatever referred to `old` (its parent's child slot, or the root) at `new`.
    ///
    /// `new`'s own parent link is left alone.
    fn replace_in_parent(&mut self, old: NodeId, new: Option<NodeId>) {
        match self.parent_of(old) {
            None => self.root = new,
            Some(parent) => {
                let side = self.side_in(parent, old);
                self.set_child(parent, side, new);
            }
        }
    }

    /// Follows `side` links from `id` as far as they go (the minimum for `Side::Left`).
    fn extreme(&self, mut id: NodeId, side: Side) -> NodeId {
        while let Some(next) = self.child_of(id, side) {
            id = next;
        }
        id
    }
}

impl<K> Default for RBTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Debug> Debug for RBTree<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Ord> FromIterator<K> for RBTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for RBTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a RBTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree() {
        let tree = RBTree::<i32>::new();
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert!(tree.search(&1).is_none());
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
        assert_eq!(tree.check_invariants(), Ok(1));
    }

    #[test]
    fn search_hits_and_misses() {
        let tree: RBTree<i32> = [10, 20, 30, 15, 25].into_iter().collect();

        let found = tree.search(&20).expect("20 was inserted");
        assert_eq!(*found.key(), 20);
        assert!(tree.search(&40).is_none());

        assert!(tree.contains(&15));
        assert_eq!(tree.get(&25), Some(&25));
        assert_eq!(tree.get(&26), None);
    }

    #[test]
    fn borrowed_lookups() {
        let tree: RBTree<String> = ["pear", "apple", "fig"].into_iter().map(String::from).collect();
        assert!(tree.contains("fig"));
        assert_eq!(tree.search("apple").map(|n| n.key().as_str()), Some("apple"));
        assert!(!tree.contains("kiwi"));
    }

    #[test]
    fn min_and_max() {
        let tree: RBTree<i32> = [7, -3, 12, 0, 5].into_iter().collect();
        assert_eq!(tree.min(), Some(&-3));
        assert_eq!(tree.max(), Some(&12));
    }

    #[test]
    fn deleted_slots_get_reused() {
        let mut tree: RBTree<i32> = (0..8).collect();
        let arena_size = tree.slots.len();

        assert!(tree.delete(&3));
        assert!(tree.delete(&6));
        tree.insert(100);
        tree.insert(101);

        assert_eq!(tree.slots.len(), arena_size);
        assert_eq!(tree.len(), 8);
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn node_lookup_by_id() {
        let mut tree: RBTree<i32> = [1, 2, 3].into_iter().collect();
        let id = tree.search(&3).map(|n| n.id()).expect("3 was inserted");
        assert_eq!(tree.node(id).map(|n| *n.key()), Some(3));

        tree.delete(&3);
        assert!(tree.node(id).is_none());
        assert!(tree.node(NodeId(1000)).is_none());
    }

    #[test]
    fn clear_resets_everything() {
        let mut tree: RBTree<i32> = (0..50).collect();
        tree.clear();
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        tree.insert(1);
        assert_eq!(tree.in_order_traversal(), vec![1]);
    }

    #[test]
    fn debug_formats_as_a_set() {
        let tree: RBTree<i32> = [3, 1, 2].into_iter().collect();
        assert_eq!(format!("{tree:?}"), "{1, 2, 3}");
    }

    #[test]
    fn clones_are_independent() {
        let mut a: RBTree<i32> = (0..10).collect();
        let b = a.clone();
        a.delete(&4);
        assert!(!a.contains(&4));
        assert!(b.contains(&4));
        assert!(b.check_invariants().is_ok());
    }
}
