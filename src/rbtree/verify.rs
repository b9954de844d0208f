use crate::error::InvariantViolation;
use super::{Color, NodeId, RBTree, Side};

impl<K: Ord> RBTree<K> {
    /// Walks the whole tree checking the red-black properties, the search
    /// order, the parent links and the recorded length.
    ///
    /// On success returns the black-height of the root, counting the absent
    /// leaves (so an empty tree has black-height 1).
    ///
    /// Complexity: O(n)
    pub fn check_invariants(&self) -> Result<usize, InvariantViolation> {
        let Some(root) = self.root else {
            return match self.len {
                0 => Ok(1),
                recorded => Err(InvariantViolation::LengthMismatch { counted: 0, recorded }),
            }
        };

        if self.parent_of(root).is_some() {
            return Err(InvariantViolation::BrokenParentLink { node: root })
        }
        if self.is_red(Some(root)) {
            return Err(InvariantViolation::RedRoot)
        }

        let mut counted = 0;
        let black_height = self.check_subtree(root, None, None, &mut counted)?;
        if counted != self.len {
            return Err(InvariantViolation::LengthMismatch { counted, recorded: self.len })
        }
        Ok(black_height)
    }

    /// Every key below `id` has to lie strictly between `lower` and `upper`.
    fn check_subtree(
        &self,
        id: NodeId,
        lower: Option<&K>,
        upper: Option<&K>,
        counted: &mut usize,
    ) -> Result<usize, InvariantViolation> {
        *counted += 1;
        if *counted > self.len {
            // also stops us going round in circles if the links form a cycle
            return Err(InvariantViolation::LengthMismatch { counted: *counted, recorded: self.len })
        }

        let node = self.get_node(id);
        if lower.is_some_and(|l| node.key <= *l) || upper.is_some_and(|u| node.key >= *u) {
            return Err(InvariantViolation::OutOfOrder { node: id })
        }

        let mut heights = [1; 2];
        for (height, side) in heights.iter_mut().zip([Side::Left, Side::Right]) {
            let Some(child) = node.child(side) else { continue };

            if self.parent_of(child) != Some(id) {
                return Err(InvariantViolation::BrokenParentLink { node: child })
            }
            if node.color == Color::Red && self.is_red(Some(child)) {
                return Err(InvariantViolation::RedRedEdge { parent: id, child })
            }

            let (lo, hi) = match side {
                Side::Left => (lower, Some(&node.key)),
                Side::Right => (Some(&node.key), upper),
            };
            *height = self.check_subtree(child, lo, hi, counted)?;
        }

        let [left, right] = heights;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch { node: id, left, right })
        }
        Ok(left + usize::from(node.color == Color::Black))
    }
}
