//! Neighbor and range queries.
//!
//! [`Tree::successor`] and [`Tree::predecessor`] scan the whole in-order sequence rather than
//! walking a single root-to-leaf path, so they take `O(N)` instead of `O(height)`.

use std::ops::RangeInclusive;

use crate::linked::Tree;

impl<T> Tree<T> {
    /// Returns the smallest stored item strictly greater than `item`, or `None` if there is no
    /// such item. `item` doesn't need to be in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<_> = vec![2, 4, 4, 6].into_iter().collect();
    ///
    /// assert_eq!(tree.successor(&4), Some(&6));
    /// assert_eq!(tree.successor(&5), Some(&6));
    /// assert_eq!(tree.successor(&6), None);
    /// ```
    pub fn successor(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.in_order().find(|stored| *stored > item)
    }

    /// Returns the largest stored item strictly less than `item`, or `None` if there is no such
    /// item. `item` doesn't need to be in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<_> = vec![2, 4, 4, 6].into_iter().collect();
    ///
    /// assert_eq!(tree.predecessor(&4), Some(&2));
    /// assert_eq!(tree.predecessor(&3), Some(&2));
    /// assert_eq!(tree.predecessor(&2), None);
    /// ```
    pub fn predecessor(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.in_order().take_while(|stored| *stored < item).last()
    }

    /// Looks up every value in `low..=high` and returns, in ascending order, the
    /// values that are present. Each value is reported once even if it is stored several times.
    ///
    /// Only available for items that can be stepped through, such as integers and `char`. Use
    /// [`Tree::range`] for other item types.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<_> = vec![2, 4, 6, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.range_find(3, 7), vec![4, 6]);
    /// assert!(tree.range_find(7, 3).is_empty());
    /// ```
    pub fn range_find(&self, low: T, high: T) -> Vec<T>
    where
        T: Ord,
        RangeInclusive<T>: Iterator<Item = T>,
    {
        (low..=high).filter(|value| self.contains(value)).collect()
    }

    /// Returns every stored item in `low..=high` in ascending order, duplicates included.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<_> = vec!["pear", "apple", "fig", "kiwi"].into_iter().collect();
    ///
    /// assert_eq!(tree.range(&"b", &"kiwi"), vec![&"fig", &"kiwi"]);
    /// ```
    pub fn range(&self, low: &T, high: &T) -> Vec<&T>
    where
        T: Ord,
    {
        self.in_order()
            .skip_while(|stored| *stored < low)
            .take_while(|stored| *stored <= high)
            .collect()
    }
}
