use log::trace;

use crate::error::RotateError;
use super::{NodeId, RBTree, Side};

impl<K> RBTree<K> {
    /// Rotates `x` down to the left, lifting its right child into its place.
    ///
    /// The in-order sequence is preserved, but colors are not touched, so this
    /// can leave the red-black invariants broken. It fails without changing
    /// anything if `x` isn't a live node or has no right child.
    ///
    /// Complexity: O(1)
    pub fn rotate_left(&mut self, x: NodeId) -> Result<(), RotateError> {
        self.checked_rotate(x, Side::Left)
    }

    /// Mirror image of [`rotate_left`](RBTree::rotate_left): lifts `x`'s left child.
    pub fn rotate_right(&mut self, x: NodeId) -> Result<(), RotateError> {
        self.checked_rotate(x, Side::Right)
    }

    fn checked_rotate(&mut self, x: NodeId, dir: Side) -> Result<(), RotateError> {
        if self.node(x).is_none() {
            return Err(RotateError::VacantNode(x))
        }
        let rising = dir.opposite();
        let y = self.child_of(x, rising).ok_or(RotateError::MissingChild { node: x, side: rising })?;
        self.rotate(x, y, dir);
        Ok(())
    }

    /// Moves `x` down towards `dir` and `y` up into its position.
    ///
    /// `y` must be `x`'s child on the `dir.opposite()` side. The fixups always
    /// have it in hand already, which is why it's passed in.
    pub(super) fn rotate(&mut self, x: NodeId, y: NodeId, dir: Side) {
        debug_assert_eq!(self.child_of(x, dir.opposite()), Some(y));
        trace!("rotate {dir:?} at {} (lifting {})", x.0, y.0);

        // y's inner subtree switches over to x
        let inner = self.child_of(y, dir);
        self.set_child(x, dir.opposite(), inner);
        self.set_parent(inner, Some(x));

        let parent = self.parent_of(x);
        self.replace_in_parent(x, Some(y));
        self.set_parent(Some(y), parent);

        self.set_child(y, dir, Some(x));
        self.set_parent(Some(x), Some(y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id_of(tree: &RBTree<i32>, key: i32) -> NodeId {
        tree.search(&key).expect("key should be in the tree").id()
    }

    #[test]
    fn rotate_left_at_root() {
        let mut tree = RBTree::new();
        tree.insert(1);
        tree.insert(2);
        let x = id_of(&tree, 1);
        let y = id_of(&tree, 2);
        assert_eq!(tree.root().map(|r| r.id()), Some(x));

        tree.rotate_left(x).unwrap();

        let root = tree.root().unwrap();
        assert_eq!(root.id(), y);
        assert!(root.parent().is_none());
        let left = root.left().unwrap();
        assert_eq!(left.id(), x);
        assert!(left.right().is_none());
        assert_eq!(left.parent().map(|p| p.id()), Some(y));
        assert_eq!(tree.in_order_traversal(), vec![1, 2]);
    }

    #[test]
    fn rotate_right_at_root() {
        let mut tree = RBTree::new();
        tree.insert(2);
        tree.insert(1);
        let x = id_of(&tree, 2);
        let y = id_of(&tree, 1);

        tree.rotate_right(x).unwrap();

        let root = tree.root().unwrap();
        assert_eq!(root.id(), y);
        assert!(root.parent().is_none());
        let right = root.right().unwrap();
        assert_eq!(right.id(), x);
        assert!(right.left().is_none());
        assert_eq!(right.parent().map(|p| p.id()), Some(y));
        assert_eq!(tree.in_order_traversal(), vec![1, 2]);
    }

    #[test]
    fn inner_subtree_changes_sides() {
        // no rebalancing happens for this order: 4 at the root, 2 and 6 below it
        let mut tree: RBTree<i32> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
        let four = id_of(&tree, 4);
        let five = id_of(&tree, 5);
        let six = id_of(&tree, 6);

        tree.rotate_left(four).unwrap();

        assert_eq!(tree.root().map(|r| r.id()), Some(six));
        let four_ref = tree.node(four).unwrap();
        assert_eq!(four_ref.right().map(|n| n.id()), Some(five));
        assert_eq!(tree.node(five).unwrap().parent().map(|p| p.id()), Some(four));
        assert_eq!(tree.in_order_traversal(), (1..=7).collect::<Vec<_>>());

        // and back again
        tree.rotate_right(six).unwrap();
        assert_eq!(tree.root().map(|r| r.id()), Some(four));
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn rotation_below_the_root() {
        let mut tree: RBTree<i32> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
        let two = id_of(&tree, 2);
        let three = id_of(&tree, 3);

        tree.rotate_left(two).unwrap();

        let root = tree.root().unwrap();
        assert_eq!(root.left().map(|n| n.id()), Some(three));
        assert_eq!(tree.node(three).unwrap().parent().map(|p| *p.key()), Some(4));
        assert_eq!(tree.in_order_traversal(), (1..=7).collect::<Vec<_>>());
    }

    #[test]
    fn missing_child_is_an_error() {
        let mut tree = RBTree::new();
        tree.insert(1);
        tree.insert(2);
        let two = id_of(&tree, 2);

        assert_eq!(
            tree.rotate_left(two),
            Err(RotateError::MissingChild { node: two, side: Side::Right })
        );
        assert_eq!(
            tree.rotate_right(two),
            Err(RotateError::MissingChild { node: two, side: Side::Left })
        );
        assert_eq!(tree.root().map(|r| *r.key()), Some(1));
        assert_eq!(tree.in_order_traversal(), vec![1, 2]);
    }

    #[test]
    fn vacant_node_is_an_error() {
        let mut tree: RBTree<i32> = [1, 2, 3].into_iter().collect();
        let three = id_of(&tree, 3);
        tree.delete(&3);
        assert_eq!(tree.rotate_left(three), Err(RotateError::VacantNode(three)));
        assert_eq!(tree.rotate_right(NodeId(99)), Err(RotateError::VacantNode(NodeId(99))));
    }
}
