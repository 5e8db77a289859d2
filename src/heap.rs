//! A min-heap stored as an explicit binary tree rather than the usual array.
//!
//! The tree is kept complete: numbering nodes `1, 2, 3, ...` in level order, node `k` always
//! lives where the bits of `k` below its leading one say to go, reading each `0` as a step left
//! and each `1` as a step right. Node 6 (`0b110`) is therefore right then left of the root. This
//! lets `insert` find the next free slot and `remove_min` find the last occupied one in
//! `O(lg N)` without parent pointers.
//!
//! # Examples
//!
//! ```
//! use bintrees::Heap;
//!
//! let mut heap: Heap<_> = [5, 3, 8, 1].into_iter().collect();
//!
//! assert_eq!(heap.find_smallest(), Ok(&1));
//! assert_eq!(heap.remove_min(), Some(1));
//! assert_eq!(heap.remove_min(), Some(3));
//! assert_eq!(heap.len(), 2);
//! assert!(heap.is_heap_satisfied());
//! ```

use std::fmt;
use std::mem;

use log::trace;

use crate::binary_tree::{self, BinaryTree, Link, Node};
use crate::error::EmptyTreeError;

/// A min-heap: every node's value is no larger than its children's. Unlike the search trees,
/// equal values are all kept.
#[derive(Clone, Debug)]
pub struct Heap<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Heap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinaryTree<T> for Heap<T> {
    fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    fn size(&self) -> usize {
        self.len
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// The steps from the root down to node number `position` (1-based, level order).
fn path_to(position: usize) -> Vec<Side> {
    let depth = usize::BITS - 1 - position.leading_zeros();
    (0..depth)
        .rev()
        .map(|bit| match (position >> bit) & 1 {
            0 => Side::Left,
            _ => Side::Right,
        })
        .collect()
}

fn child<T>(node: &mut Node<T>, side: Side) -> &mut Link<T> {
    match side {
        Side::Left => &mut node.left,
        Side::Right => &mut node.right,
    }
}

impl<T> Heap<T> {
    /// Generates a new, empty `Heap`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of values in the heap.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the heap holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The smallest value, if any.
    pub fn peek(&self) -> Option<&T> {
        self.root.as_deref().map(Node::value)
    }

    /// The smallest value in the heap.
    pub fn find_smallest(&self) -> Result<&T, EmptyTreeError> {
        self.peek().ok_or(EmptyTreeError)
    }

    /// Adds `value` in the next free slot and swaps it upwards until its parent is no larger.
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        self.len += 1;
        sift_up(&mut self.root, value, &path_to(self.len));
        trace!("heap grew to {} values", self.len);
    }

    /// Removes and returns the smallest value, or `None` if the heap is empty.
    ///
    /// The last node in level order is detached, its value moved into the root, and that value
    /// then swapped downwards with its smaller child until both children are no smaller.
    pub fn remove_min(&mut self) -> Option<T>
    where
        T: Ord,
    {
        let last = take_at(&mut self.root, &path_to(self.len.max(1)))?;
        self.len -= 1;
        trace!("heap shrank to {} values", self.len);

        // If the last node was the root there is nothing left to fix up.
        let Some(root) = self.root.as_deref_mut() else {
            return Some(last);
        };
        let min = mem::replace(&mut root.value, last);
        trickle_down(root);
        Some(min)
    }

    /// Checks that no node holds a value larger than either of its children's.
    pub fn is_heap_satisfied(&self) -> bool
    where
        T: Ord,
    {
        is_heap(self.root.as_deref())
    }
}

fn sift_up<T: Ord>(slot: &mut Link<T>, value: T, path: &[Side]) {
    match slot {
        None => *slot = Some(Node::new_boxed(value)),
        Some(node) => {
            let Some((&side, rest)) = path.split_first() else {
                unreachable!("heap path ended at an occupied slot");
            };

            let Node {
                value: parent,
                left,
                right,
                ..
            } = &mut **node;
            let next = match side {
                Side::Left => left,
                Side::Right => right,
            };
            sift_up(next, value, rest);

            if let Some(next) = next {
                if next.value < *parent {
                    mem::swap(parent, &mut next.value);
                }
            }
            node.fix_height();
        }
    }
}

/// Detaches the node at the end of `path` and returns its value.
fn take_at<T>(slot: &mut Link<T>, path: &[Side]) -> Option<T> {
    match path.split_first() {
        None => slot.take().map(|node| node.value),
        Some((&side, rest)) => {
            let node = slot.as_deref_mut()?;
            let value = take_at(child(node, side), rest);
            node.fix_height();
            value
        }
    }
}

fn trickle_down<T: Ord>(node: &mut Node<T>) {
    let Node {
        value, left, right, ..
    } = node;

    let smaller = match (left.as_deref_mut(), right.as_deref_mut()) {
        (Some(l), Some(r)) => {
            if r.value < l.value {
                r
            } else {
                l
            }
        }
        (Some(only), None) | (None, Some(only)) => only,
        (None, None) => return,
    };

    if smaller.value < *value {
        mem::swap(value, &mut smaller.value);
        trickle_down(smaller);
    }
}

fn is_heap<T: Ord>(node: Option<&Node<T>>) -> bool {
    let Some(node) = node else {
        return true;
    };

    [node.left(), node.right()]
        .into_iter()
        .flatten()
        .all(|below| node.value <= below.value && is_heap(Some(below)))
}

impl<T: Ord> FromIterator<T> for Heap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord> Extend<T> for Heap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: fmt::Display> fmt::Display for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        binary_tree::fmt_named(self, "Heap", f)
    }
}
