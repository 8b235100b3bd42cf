//! Height measurement and explicit rebalancing. The tree never balances itself on insert or
//! remove; [`Tree::rebalance`] rebuilds it from its sorted contents when asked.
//!
//! # Examples
//!
//! ```
//! use linked_bst::linked::Tree;
//!
//! // Sorted input degrades the tree into a chain.
//! let mut tree: Tree<_> = (1..=15).collect();
//! assert_eq!(tree.height(), 14);
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert_eq!(tree.height(), 3);
//! assert!(tree.is_balanced());
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), (1..=15).collect::<Vec<_>>());
//! ```

use log::{log_enabled, trace, Level};

use crate::linked::Tree;
use crate::node::Node;

impl<T> Tree<T> {
    /// Returns the number of edges on the longest path from the root down to a leaf. A lone
    /// root has height 0, and so does the empty tree.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|root| (root, 0)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }

        height
    }

    /// Returns `true` unless the whole tree has degenerated, i.e. when
    /// `height < 2 * log2(len + 1) - 1`. This doesn't look at individual nodes so a tree that
    /// passes may still have lopsided subtrees. The empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        if self.is_empty() {
            return true;
        }
        let limit = 2.0 * ((self.len + 1) as f64).log2() - 1.0;
        (self.height() as f64) < limit
    }

    /// Rebuilds the tree with minimum height, keeping the same items in the same order. The
    /// middle item becomes the root and each half is rebuilt the same way below it.
    pub fn rebalance(&mut self) {
        let before = if log_enabled!(Level::Trace) {
            Some(self.height())
        } else {
            None
        };

        let items = Node::drain_in_order(self.root.take(), self.len);
        let len = items.len();
        self.root = Node::build_balanced(&mut items.into_iter(), len);

        if let Some(before) = before {
            trace!(
                "rebalanced {} items: height {} -> {}",
                len,
                before,
                self.height()
            );
        }
    }
}
