//! Borrowing traversals over a [`Tree`]. Each one keeps its own explicit stack (or queue) so it is
//! restartable, works on degenerate trees of any height and never recurses.
//!
//! Iterating `&Tree` directly walks the tree in pre-order.
//!
//! # Examples
//!
//! ```
//! use linked_bst::linked::Tree;
//!
//! //     5
//! //    / \
//! //   3   8
//! //  /
//! // 1
//! let tree: Tree<_> = vec![5, 3, 8, 1].into_iter().collect();
//!
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![1, 3, 5, 8]);
//! assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), vec![5, 3, 1, 8]);
//! assert_eq!(tree.post_order().copied().collect::<Vec<_>>(), vec![1, 3, 8, 5]);
//! assert_eq!(tree.level_order().copied().collect::<Vec<_>>(), vec![5, 3, 8, 1]);
//!
//! let default_order: Vec<_> = (&tree).into_iter().copied().collect();
//! assert_eq!(default_order, vec![5, 3, 1, 8]);
//! ```

use std::collections::VecDeque;

use crate::linked::Tree;
use crate::node::Node;

impl<T> Tree<T> {
    /// Visits items in ascending order (left, self, right).
    pub fn in_order(&self) -> InOrder<'_, T> {
        let mut iter = InOrder {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Visits each node before its children, left child before right child.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder {
            stack: self.root.as_deref().into_iter().collect(),
            remaining: self.len,
        }
    }

    /// Visits each node after both of its children, left child before right child.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder {
            stack: self
                .root
                .as_deref()
                .map(|root| (root, false))
                .into_iter()
                .collect(),
        }
    }

    /// Visits nodes level by level from the root, left to right within a level.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder {
            queue: self.root.as_deref().into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = PreOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.pre_order()
    }
}

/// Iterator returned by [`Tree::in_order`].
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> InOrder<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for InOrder<'_, T> {}

/// Iterator returned by [`Tree::pre_order`].
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on the stack first so the left subtree comes off first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for PreOrder<'_, T> {}

/// Iterator returned by [`Tree::post_order`].
pub struct PostOrder<'a, T> {
    /// Nodes paired with whether their children have already been pushed.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.item);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right.as_deref().map(|n| (n, false)));
            self.stack.extend(node.left.as_deref().map(|n| (n, false)));
        }
    }
}

/// Iterator returned by [`Tree::level_order`].
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left.as_deref());
        self.queue.extend(node.right.as_deref());
        Some(&node.item)
    }
}
