use std::borrow::Borrow;

use log::trace;

use super::{Color, NodeId, RBTree, Side};

impl<K: Ord> RBTree<K> {
    /// Removes `key` from the tree, returning whether it was present.
    ///
    /// Complexity: O(log(n))
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K : Borrow<Q>,
        Q : ?Sized + Ord
    {
        self.take(key).is_some()
    }

    /// Removes `key` from the tree and hands back the stored key, if there was one.
    pub fn take<Q>(&mut self, key: &Q) -> Option<K>
    where
        K : Borrow<Q>,
        Q : ?Sized + Ord
    {
        let z = self.find(key)?;
        Some(self.remove_node(z))
    }
}

impl<K> RBTree<K> {
    fn remove_node(&mut self, z: NodeId) -> K {
        let (z_left, z_right, z_color) = {
            let node = self.get_node(z);
            (node.left, node.right, node.color)
        };

        // `x` is whatever moves into the position that lost a node, and `slot`
        // is that position as (parent, side). `x` may well be absent, which is
        // why the slot is tracked separately. `slot` is `None` at the root.
        let x;
        let slot;
        let removed_color;

        match (z_left, z_right) {
            (None, child) | (child, None) => {
                x = child;
                slot = self.parent_of(z).map(|p| (p, self.side_in(p, z)));
                removed_color = z_color;
                self.transplant(z, child);
            }
            (Some(left), Some(right)) => {
                // z's successor takes over z's position and color
                let y = self.extreme(right, Side::Left);
                removed_color = self.get_node(y).color;
                x = self.child_of(y, Side::Right);

                if y == right {
                    slot = Some((y, Side::Right));
                } else {
                    slot = self.parent_of(y).map(|p| (p, Side::Left));
                    self.transplant(y, x);
                    self.set_child(y, Side::Right, Some(right));
                    self.set_parent(Some(right), Some(y));
                }

                self.transplant(z, Some(y));
                self.set_child(y, Side::Left, Some(left));
                self.set_parent(Some(left), Some(y));
                self.set_color(y, z_color);
            }
        }

        if removed_color == Color::Black {
            self.delete_fixup(x, slot);
        }

        self.release(z)
    }

    /// Puts `v` where `u` was in `u`'s parent (or at the root). Children are untouched.
    fn transplant(&mut self, u: NodeId, v: Option<NodeId>) {
        let parent = self.parent_of(u);
        self.replace_in_parent(u, v);
        self.set_parent(v, parent);
    }

    /// Restores equal black-heights after a black node was spliced out above `x`.
    ///
    /// Paths through `x` (which may be an empty child slot) are one black node short.
    fn delete_fixup(&mut self, mut x: Option<NodeId>, mut slot: Option<(NodeId, Side)>) {
        while let Some((parent, side)) = slot {
            if self.is_red(x) {
                break
            }

            let far_side = side.opposite();
            let mut w = self.child_of(parent, far_side).expect("the sibling of a short path holds a black node");

            if self.is_red(Some(w)) {
                trace!("delete fixup: red sibling {}, rotating {side:?} at {}", w.0, parent.0);
                self.set_color(w, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, w, side);
                w = self.child_of(parent, far_side).expect("the sibling of a short path holds a black node");
            }

            let near = self.child_of(w, side);
            let mut far = self.child_of(w, far_side);

            if !self.is_red(near) && !self.is_red(far) {
                trace!("delete fixup: black nephews, moving the deficit up to {}", parent.0);
                self.set_color(w, Color::Red);
                x = Some(parent);
                slot = self.parent_of(parent).map(|p| (p, self.side_in(p, parent)));
                continue
            }

            if !self.is_red(far) {
                // so `near` is the red one
                if let Some(near) = near {
                    trace!("delete fixup: red near nephew {}, rotating {far_side:?} at {}", near.0, w.0);
                    self.set_color(near, Color::Black);
                    self.set_color(w, Color::Red);
                    self.rotate(w, near, far_side);
                    far = Some(w);
                    w = near;
                }
            }

            trace!("delete fixup: red far nephew, rotating {side:?} at {}", parent.0);
            let parent_color = self.get_node(parent).color;
            self.set_color(w, parent_color);
            self.set_color(parent, Color::Black);
            if let Some(far) = far {
                self.set_color(far, Color::Black);
            }
            self.rotate(parent, w, side);
            x = self.root;
            break
        }

        if let Some(x) = x {
            self.set_color(x, Color::Black);
        }
    }
}
