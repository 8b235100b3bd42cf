//! A link-based, unbalanced BST. Each node owns its children through an `Option<Box<_>>` so the
//! tree is freed automatically and can never contain a cycle. Equal items are stored, not
//! rejected, and are routed to the right so they stay in insertion order.
//!
//! The tree never rotates: inserting sorted input degrades it into a linked list. Call
//! [`Tree::rebalance`] to rebuild it with minimum height.
//!
//! # Examples
//!
//! ```
//! use linked_bst::linked::Tree;
//! use linked_bst::Error;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.insert(5);
//! tree.insert(3);
//! tree.insert(8);
//! assert!(tree.contains(&3));
//! assert_eq!(tree.len(), 3);
//!
//! // Removing an item returns it.
//! assert_eq!(tree.remove(&5), Ok(5));
//! assert_eq!(tree.find(&5), None);
//!
//! // Removing something that isn't there is an error.
//! assert_eq!(tree.remove(&5), Err(Error::NotFound));
//!
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![3, 8]);
//! ```

use std::iter::FromIterator;
use std::mem;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::node::{Link, Node};

/// An unbalanced Binary Search Tree of single comparable items. Every item in a node's left
/// subtree is less than the node's item and every item in its right subtree is greater than or
/// equal to it.
pub struct Tree<T> {
    pub(crate) root: Link<T>,
    pub(crate) len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        Node::dismantle(self.root.take());
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: Node::clone_link(&self.root),
            len: self.len,
        }
    }
}

/// Two trees are equal when they hold the same items, regardless of their shape.
impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.in_order().eq(other.in_order())
    }
}

impl<T> Eq for Tree<T> where T: Eq {}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns the number of items stored, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every item from the tree.
    pub fn clear(&mut self) {
        trace!("clearing tree of {} items", self.len);
        Node::dismantle(self.root.take());
        self.len = 0;
    }

    /// Consumes the tree and returns its items in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<_> = vec![3, 1, 2, 1].into_iter().collect();
    /// assert_eq!(tree.into_sorted_vec(), vec![1, 1, 2, 3]);
    /// ```
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        Node::drain_in_order(self.root.take(), self.len)
    }

    /// Inserts `item` as a new leaf. Items equal to an existing item are placed in its right
    /// subtree so the tree may hold duplicates.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, item: T)
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if item < node.item {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Node::new_boxed(item));
        self.len += 1;
    }

    /// Potentially finds the stored item equal to `item`. This is useful when equality of items
    /// doesn't imply equality of everything they carry. If nothing matches, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if *item == node.item {
                return Some(&node.item);
            }
            current = if *item < node.item {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }

        None
    }

    /// Returns `true` if an item equal to `item` is stored.
    pub fn contains(&self, item: &T) -> bool
    where
        T: Ord,
    {
        self.find(item).is_some()
    }

    /// Removes the first stored item equal to `item` (the one closest to the root) and returns
    /// it. Returns [`Error::NotFound`] if there is no such item, leaving the tree untouched.
    ///
    /// A node with two children keeps its place: it takes the largest item of its left subtree
    /// and that item's node is spliced out instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    /// use linked_bst::Error;
    ///
    /// let mut tree: Tree<_> = vec![5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&5), Ok(5));
    /// assert_eq!(tree.remove(&5), Err(Error::NotFound));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<T>
    where
        T: Ord,
    {
        let Some(slot) = Self::slot_of(&mut self.root, item) else {
            debug!("remove missed: item not in tree of {} items", self.len);
            return Err(Error::NotFound);
        };
        let mut target = slot.take().expect("`slot_of` only returns occupied slots");

        let removed = match (target.left.take(), target.right.take()) {
            (Some(mut left), Some(right)) => {
                let lifted = if left.right.is_none() {
                    // The left child is the largest item on the left so its own left subtree
                    // moves straight up into `target`.
                    let Node {
                        item,
                        left: grandchild,
                        ..
                    } = *left;
                    target.left = grandchild;
                    item
                } else {
                    let item = Node::detach_max(&mut left);
                    target.left = Some(left);
                    item
                };
                target.right = Some(right);
                let removed = mem::replace(&mut target.item, lifted);
                *slot = Some(target);
                removed
            }
            (Some(child), None) | (None, Some(child)) => {
                *slot = Some(child);
                target.item
            }
            (None, None) => target.item,
        };

        self.len -= 1;
        Ok(removed)
    }

    /// Overwrites the first stored item equal to `item` with `new_item`, returning the old item.
    /// Returns `None` and leaves the tree untouched if nothing matches.
    ///
    /// The tree's shape isn't changed, so `new_item` must sort into the same position as `item`.
    /// Otherwise later lookups may miss items.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.replace(&3, 3), Some(3));
    /// assert_eq!(tree.replace(&4, 4), None);
    /// ```
    pub fn replace(&mut self, item: &T, new_item: T) -> Option<T>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            if node.item == *item {
                return Some(mem::replace(&mut node.item, new_item));
            }
            current = if node.item > *item {
                node.left.as_deref_mut()
            } else {
                node.right.as_deref_mut()
            };
        }

        None
    }

    /// Walks down from `slot` and returns the slot holding the first node equal to `item`.
    fn slot_of<'a>(mut slot: &'a mut Link<T>, item: &T) -> Option<&'a mut Link<T>>
    where
        T: Ord,
    {
        loop {
            let go_left = match slot.as_deref() {
                None => return None,
                Some(node) if node.item == *item => None,
                Some(node) => Some(node.item > *item),
            };
            let Some(go_left) = go_left else {
                return Some(slot);
            };
            let node = slot.as_mut()?;
            slot = if go_left {
                &mut node.left
            } else {
                &mut node.right
            };
        }
    }
}
