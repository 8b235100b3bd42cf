//! This crate exposes a link-based Binary Search Tree (BST) of single comparable items that is
//! only rebalanced when asked to.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored items. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the item that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    item less than its own item.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    item greater than or equal to its own item.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! items in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the right subtree.
//!
//! Nothing keeps the height of [`linked::Tree`] down while it is modified. Inserting
//! sorted items gives a tree of height `N - 1`, which is no better than a list.
//! [`linked::Tree::rebalance`] rebuilds it with a height of `O(lg N)`.
//!
//! Trees aren't synchronized. Share one between threads behind a lock.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod balance;
mod display;
pub mod error;
pub mod linked;
mod node;
mod query;
pub mod traverse;

#[cfg(test)]
mod test;

pub use error::{Error, Result};
