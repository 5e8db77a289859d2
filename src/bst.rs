//! A plain Binary Search Tree. Values act as their own keys, duplicates are ignored and nothing
//! is done to keep the tree balanced, so inserting values in sorted order produces a tree shaped
//! like a linked list.
//!
//! # Examples
//!
//! ```
//! use bintrees::{BinaryTree, Bst};
//!
//! let mut tree: Bst<_> = [5, 3, 8].into_iter().collect();
//!
//! assert!(tree.find(&3));
//! assert!(!tree.find(&4));
//!
//! // Inserting a value that is already present does nothing.
//! assert!(!tree.insert(5));
//!
//! // Removing a node with two children promotes its in-order successor.
//! assert!(tree.remove(&5));
//! assert_eq!(tree.root().map(|n| *n.value()), Some(8));
//! assert!(tree.is_bst_satisfied());
//! assert_eq!(tree.to_string(), "Bst([3, 8])");
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::trace;

use crate::binary_tree::{self, BinaryTree, Link, Node};
use crate::error::EmptyTreeError;

/// A Binary Search Tree. For every node, everything in its left subtree is smaller than its
/// value and everything in its right subtree is larger.
#[derive(Clone, Debug)]
pub struct Bst<T> {
    pub(crate) root: Link<T>,
}

impl<T> Default for Bst<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinaryTree<T> for Bst<T> {
    fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T> Bst<T> {
    /// Generates a new, empty `Bst`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Wraps an existing node shape. Nothing about the shape is checked; use
    /// [`is_bst_satisfied`](Self::is_bst_satisfied) to find out whether it is a valid search
    /// tree.
    pub fn from_root(root: Link<T>) -> Self {
        Self { root }
    }

    /// Gives up the tree's nodes.
    pub fn into_root(self) -> Link<T> {
        self.root
    }

    /// Returns whether `value` is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintrees::Bst;
    ///
    /// let tree: Bst<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.find(&1));
    /// assert!(!tree.find(&42));
    /// ```
    pub fn find(&self, value: &T) -> bool
    where
        T: Ord,
    {
        find(self.root.as_deref(), value)
    }

    /// Same as [`find`](Self::find).
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value)
    }

    /// Inserts `value` and returns `true`, or returns `false` without touching the tree if the
    /// value is already present.
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let (root, inserted) = insert(self.root.take(), value);
        self.root = Some(root);

        if !inserted {
            trace!("insert ignored a value already in the tree");
        }
        inserted
    }

    /// Removes `value` and returns `true`, or returns `false` if it wasn't in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintrees::Bst;
    ///
    /// let mut tree: Bst<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.remove(&2));
    /// assert!(!tree.remove(&2));
    /// assert!(!tree.find(&2));
    /// assert!(tree.find(&1) && tree.find(&3));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        let (root, removed) = remove(self.root.take(), value);
        self.root = root;

        if !removed {
            trace!("remove found nothing to remove");
        }
        removed
    }

    /// Removes each of `values` in turn. Values that aren't present are skipped.
    pub fn remove_all<'a, I>(&mut self, values: I)
    where
        I: IntoIterator<Item = &'a T>,
        T: Ord + 'a,
    {
        for value in values {
            self.remove(value);
        }
    }

    /// The smallest value in the tree.
    pub fn find_smallest(&self) -> Result<&T, EmptyTreeError> {
        self.root.as_deref().map(smallest).ok_or(EmptyTreeError)
    }

    /// The largest value in the tree.
    pub fn find_largest(&self) -> Result<&T, EmptyTreeError> {
        self.root.as_deref().map(largest).ok_or(EmptyTreeError)
    }

    /// Checks the search order over the whole tree: every value in a node's left subtree must
    /// be smaller than it and every value in its right subtree larger, not just its children.
    pub fn is_bst_satisfied(&self) -> bool
    where
        T: Ord,
    {
        is_bst(self.root.as_deref(), None, None)
    }
}

impl<T: Ord> FromIterator<T> for Bst<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Bst<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// Two trees are equal when they hold the same values, whatever their shapes.
impl<T: PartialEq> PartialEq for Bst<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Bst<T> {}

impl<T: fmt::Display> fmt::Display for Bst<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        binary_tree::fmt_named(self, "Bst", f)
    }
}

fn find<T: Ord>(node: Option<&Node<T>>, value: &T) -> bool {
    match node {
        None => false,
        Some(n) => match value.cmp(&n.value) {
            Ordering::Less => find(n.left(), value),
            Ordering::Equal => true,
            Ordering::Greater => find(n.right(), value),
        },
    }
}

/// Inserts `value` below `node` and hands back the subtree root so the caller can reattach it,
/// along with whether anything was inserted.
fn insert<T: Ord>(node: Link<T>, value: T) -> (Box<Node<T>>, bool) {
    let Some(mut node) = node else {
        return (Node::new_boxed(value), true);
    };

    let inserted = match value.cmp(&node.value) {
        Ordering::Less => {
            let (left, inserted) = insert(node.left.take(), value);
            node.left = Some(left);
            inserted
        }
        Ordering::Equal => false,
        Ordering::Greater => {
            let (right, inserted) = insert(node.right.take(), value);
            node.right = Some(right);
            inserted
        }
    };

    node.fix_height();
    (node, inserted)
}

fn remove<T: Ord>(node: Link<T>, value: &T) -> (Link<T>, bool) {
    let Some(mut node) = node else {
        return (None, false);
    };

    let removed = match value.cmp(&node.value) {
        Ordering::Less => {
            let (left, removed) = remove(node.left.take(), value);
            node.left = left;
            removed
        }
        Ordering::Greater => {
            let (right, removed) = remove(node.right.take(), value);
            node.right = right;
            removed
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => return (right, true),
            (left, None) => return (left, true),

            // With two children the node stays where it is and takes over the value of its
            // in-order successor, which is spliced out of the right subtree.
            (Some(left), Some(right)) => {
                let (successor, right) = take_smallest(right);
                node.value = successor;
                node.left = Some(left);
                node.right = right;
                true
            }
        },
    };

    node.fix_height();
    (Some(node), removed)
}

/// Detaches the smallest node of a subtree. Returns its value and what is left of the subtree.
fn take_smallest<T>(mut node: Box<Node<T>>) -> (T, Link<T>) {
    match node.left.take() {
        None => {
            let (value, _, right) = node.into_parts();
            (value, right)
        }
        Some(left) => {
            let (smallest, left) = take_smallest(left);
            node.left = left;
            node.fix_height();
            (smallest, Some(node))
        }
    }
}

fn smallest<T>(node: &Node<T>) -> &T {
    match node.left() {
        None => &node.value,
        Some(left) => smallest(left),
    }
}

fn largest<T>(node: &Node<T>) -> &T {
    match node.right() {
        None => &node.value,
        Some(right) => largest(right),
    }
}

/// Checks that every value under `node` lies strictly between `lower` and `upper`, which are
/// the tightest bounds imposed by the node's ancestors.
fn is_bst<T: Ord>(node: Option<&Node<T>>, lower: Option<&T>, upper: Option<&T>) -> bool {
    let Some(node) = node else {
        return true;
    };

    lower.map_or(true, |lower| *lower < node.value)
        && upper.map_or(true, |upper| node.value < *upper)
        && is_bst(node.left(), lower, Some(&node.value))
        && is_bst(node.right(), Some(&node.value), upper)
}
