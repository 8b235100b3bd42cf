//! Text renderings of a [`Tree`].
//!
//! `Display` draws the tree rotated 90 degrees counter-clockwise: one item per line, indented by
//! `"| "` once per level of depth, with each right subtree printed above its node and each left
//! subtree below it. The output is for people to read and isn't meant to be parsed.
//!
//! # Examples
//!
//! ```
//! use linked_bst::linked::Tree;
//!
//! let tree: Tree<_> = vec![5, 3, 8, 1].into_iter().collect();
//!
//! assert_eq!(tree.to_string(), "| 8\n5\n| 3\n| | 1\n");
//! ```

use std::fmt;

use crate::linked::Tree;
use crate::node::Node;

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<(&Node<T>, usize)> = Vec::new();
        let mut current = self.root.as_deref().map(|root| (root, 0));
        loop {
            while let Some((node, depth)) = current {
                stack.push((node, depth));
                current = node.right.as_deref().map(|n| (n, depth + 1));
            }
            let Some((node, depth)) = stack.pop() else {
                break;
            };
            for _ in 0..depth {
                f.write_str("| ")?;
            }
            writeln!(f, "{}", node.item)?;
            current = node.left.as_deref().map(|n| (n, depth + 1));
        }

        Ok(())
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("items", &self.in_order().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_renders_nothing() {
        assert_eq!(Tree::<i32>::new().to_string(), "");
    }

    #[test]
    fn full_tree_rendering() {
        let tree: Tree<_> = vec![5, 3, 8, 1, 4, 7, 9].into_iter().collect();

        let expected = "\
| | 9
| 8
| | 7
5
| | 4
| 3
| | 1
";
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn chain_rendering_indents_each_level() {
        let tree: Tree<_> = vec!["a", "b", "c"].into_iter().collect();

        assert_eq!(tree.to_string(), "| | c\n| b\na\n");
    }

    #[test]
    fn debug_lists_sorted_items() {
        let tree: Tree<_> = vec![2, 1, 3].into_iter().collect();

        assert_eq!(
            format!("{:?}", tree),
            "Tree { len: 3, items: [1, 2, 3] }"
        );
    }
}
