//! A red-black tree whose nodes live in an arena.
//!
//! ```
//! use rbtree::RBTree;
//!
//! let mut tree = RBTree::new();
//! for key in [10, 20, 30, 15, 25, 5, 35] {
//!     tree.insert(key);
//! }
//! tree.delete(&20);
//!
//! assert!(tree.search(&20).is_none());
//! assert_eq!(tree.in_order_traversal(), vec![5, 10, 15, 25, 30, 35]);
//! assert!(tree.root().unwrap().is_black());
//! ```
//!
//! Not concurrent: every mutation takes `&mut self`. Wrap the tree in a lock
//! to share it between threads.

pub mod error;
pub mod logging;
pub mod rbtree;

pub use error::{InvariantViolation, RotateError};
pub use rbtree::{Color, Iter, NodeId, NodeRef, RBTree, Side};
