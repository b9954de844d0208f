use std::cmp::Ordering;

use log::trace;

use super::{Color, NodeId, RBTree, Side};

impl<K: Ord> RBTree<K> {
    /// Adds `key` to the tree, returning whether it was new.
    ///
    /// If an equal key is already present the tree is left exactly as it was.
    ///
    /// Complexity: O(log(n))
    pub fn insert(&mut self, key: K) -> bool {
        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.get_node(id);
            side = match key.cmp(&node.key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return false,
            };
            parent = Some(id);
            current = node.child(side);
        }

        let z = self.allocate(key);
        self.set_parent(Some(z), parent);
        match parent {
            None => self.root = Some(z),
            Some(parent) => self.set_child(parent, side, Some(z)),
        }

        self.insert_fixup(z);
        true
    }

    /// Repairs a red-red violation between `z` and its parent, working upwards.
    fn insert_fixup(&mut self, mut z: NodeId) {
        while let Some(mut parent) = self.parent_of(z).filter(|&p| self.is_red(Some(p))) {
            // the root is black, so a red parent always has a parent of its own
            let grandparent = self.parent_of(parent).expect("a red node is never the root");
            let side = self.side_in(grandparent, parent);
            let uncle = self.child_of(grandparent, side.opposite());

            if let Some(uncle) = uncle.filter(|&u| self.is_red(Some(u))) {
                trace!("insert fixup: red uncle {}, recoloring and moving up to {}", uncle.0, grandparent.0);
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                z = grandparent;
                continue
            }

            if self.child_of(parent, side.opposite()) == Some(z) {
                trace!("insert fixup: inner grandchild {}, rotating {side:?} at {}", z.0, parent.0);
                self.rotate(parent, z, side);
                (z, parent) = (parent, z);
            }

            trace!("insert fixup: outer grandchild {}, rotating {:?} at {}", z.0, side.opposite(), grandparent.0);
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate(grandparent, parent, side.opposite());
            break
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }
}
