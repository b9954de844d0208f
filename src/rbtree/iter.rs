use std::iter::FusedIterator;

use super::{NodeId, RBTree, Side};

/// In-order iterator over the keys of an [`RBTree`].
///
/// Uses an explicit stack of the nodes whose left subtrees are being walked,
/// so it never recurses. The stack holds at most one entry per level.
pub struct Iter<'a, K> {
    tree: &'a RBTree<K>,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    fn new(tree: &'a RBTree<K>) -> Self {
        let mut iter = Self { tree, stack: Vec::new(), remaining: tree.len() };
        iter.descend_left(tree.root);
        iter
    }

    fn descend_left(&mut self, mut current: Option<NodeId>) {
        while let Some(id) = current {
            self.stack.push(id);
            current = self.tree.child_of(id, Side::Left);
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.descend_left(self.tree.child_of(id, Side::Right));
        self.remaining -= 1;
        Some(&self.tree.get_node(id).key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}
impl<K> FusedIterator for Iter<'_, K> {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self { tree: self.tree, stack: self.stack.clone(), remaining: self.remaining }
    }
}

impl<K> RBTree<K> {
    /// Iterates over the keys in ascending order.
    ///
    /// Each call starts a fresh walk from the smallest key.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self)
    }

    /// Collects every key, in ascending order.
    ///
    /// Complexity: O(n)
    pub fn in_order_traversal(&self) -> Vec<K>
    where
        K : Clone
    {
        self.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traversal_is_sorted() {
        let tree: RBTree<i32> = [10, 20, 30, 15, 25, 5, 35].into_iter().collect();
        assert_eq!(tree.in_order_traversal(), vec![5, 10, 15, 20, 25, 30, 35]);
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut tree = RBTree::new();
        tree.insert(10);
        tree.insert(20);
        tree.insert(10);
        assert_eq!(tree.in_order_traversal(), vec![10, 20]);
    }

    #[test]
    fn iteration_restarts_on_each_call() {
        let tree: RBTree<i32> = (0..100).rev().collect();
        let mut first = tree.iter();
        assert_eq!(first.next(), Some(&0));
        assert_eq!(first.next(), Some(&1));

        assert_eq!(tree.iter().next(), Some(&0));
        assert_eq!(tree.iter().count(), 100);
    }

    #[test]
    fn exact_size() {
        let tree: RBTree<i32> = (0..37).collect();
        let mut iter = tree.iter();
        assert_eq!(iter.len(), 37);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 35);
        assert_eq!(iter.by_ref().count(), 35);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn for_loop_over_reference() {
        let tree: RBTree<char> = "hello world".chars().collect();
        let mut out = String::new();
        for c in &tree {
            out.push(*c);
        }
        assert_eq!(out, " dehlorw");
    }

    #[test]
    fn empty_iteration() {
        let tree = RBTree::<u8>::new();
        assert_eq!(tree.iter().next(), None);
        assert!(tree.in_order_traversal().is_empty());
    }
}
