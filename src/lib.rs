//! This crate exposes a small family of binary trees, mostly for educational purposes: a plain
//! Binary Search Tree, an AVL tree that keeps itself balanced on insertion, and a min-heap kept
//! as an explicit tree. All of them are built out of the same [`Node`] and share the
//! [`BinaryTree`] helpers for height, size and traversal.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and remove stored values. BSTs are defined
//! recursively using the notion of a `Node`. A `Node` stores
//! a value and may have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). Inserting values in sorted order makes a plain
//! [`Bst`] as tall as it is long. An [`AvlTree`] rotates nodes on the way back up from each
//! insertion so that no `Node`'s subtrees differ in height by more than one, which limits the
//! height to `O(lg N)`. BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree.
//!
//! # Examples
//!
//! ```
//! use bintrees::{AvlTree, BinaryTree, Bst, Order};
//!
//! let values = [5, 3, 8, 1, 4, 7, 9];
//! let bst: Bst<_> = values.into_iter().collect();
//! let avl: AvlTree<_> = values.into_iter().collect();
//!
//! assert_eq!(bst.to_vec(Order::InOrder), vec![1, 3, 4, 5, 7, 8, 9]);
//! assert_eq!(bst, avl);
//! assert!(avl.is_avl_satisfied());
//! ```
//!
//! ## Logging
//!
//! Rebalancing decisions are logged at `debug` level and individual operations at `trace` level
//! through the [`log`](https://docs.rs/log) facade. Nothing is printed unless the application
//! installs a logger.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod binary_tree;
pub mod bst;
pub mod error;
pub mod heap;


pub use avl::AvlTree;
pub use binary_tree::{BinaryTree, Node, Order};
pub use bst::Bst;
pub use error::{EmptyTreeError, ParseOrderError};
pub use heap::Heap;
