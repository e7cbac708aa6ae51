//! This crate exposes a Binary Search Tree (BST) of unique values that is built balanced and can
//! be rebalanced on demand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`. A [`Tree`] is built from a collection by picking the middle value
//! as the root and recursing on each half, which gives the minimal height of `floor(lg N)`.
//! Inserting and deleting don't restructure anything beyond the path they walk, so after enough of
//! them the tree can skew towards a linked list. [`Tree::is_balanced`] detects this and
//! [`Tree::rebalance`] rebuilds the tree from its sorted values in `O(N)`.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree = Tree::from(vec![1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 6345, 324]);
//! assert_eq!(tree.len(), 11);
//! assert!(tree.is_balanced());
//!
//! for x in 7000..7010 {
//!     tree.insert(x);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.height(), 4);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod display;
mod error;
mod node;
pub mod sample;
mod traverse;
mod tree;

#[cfg(test)]
mod test;

pub use error::{SampleError, TreeError};
pub use node::Node;
pub use traverse::Order;
pub use tree::Tree;
