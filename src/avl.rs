//! A self-balancing Binary Search Tree (specifically, an AVL tree). It wraps a [`Bst`] and shares
//! its searching, removal and ordering checks but inserts differently: on the way back up from
//! every insertion, each ancestor checks its balance factor and rotates if one side has become
//! two levels taller than the other.
//!
//! Removal is the plain [`Bst`] removal and does **not** rebalance, so after removing values
//! [`AvlTree::is_avl_satisfied`] may be `false`.
//!
//! # Examples
//!
//! ```
//! use bintrees::{AvlTree, BinaryTree, Bst};
//!
//! // Sorted insertion turns a plain BST into a linked list...
//! let bst: Bst<_> = (1..=7).collect();
//! assert_eq!(bst.height(), 6);
//!
//! // ...but not an AVL tree.
//! let avl: AvlTree<_> = (1..=7).collect();
//! assert_eq!(avl.height(), 2);
//! assert!(avl.is_avl_satisfied());
//!
//! // Same values, so the two trees are equal.
//! assert_eq!(avl, bst);
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::binary_tree::{self, BinaryTree, Link, Node};
use crate::bst::Bst;
use crate::error::EmptyTreeError;

/// A Binary Search Tree that keeps the heights of every node's two subtrees within one of each
/// other as values are inserted.
#[derive(Clone, Debug)]
pub struct AvlTree<T> {
    bst: Bst<T>,
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinaryTree<T> for AvlTree<T> {
    fn root(&self) -> Option<&Node<T>> {
        self.bst.root()
    }
}

impl<T> AvlTree<T> {
    /// Generates a new, empty `AvlTree`.
    pub fn new() -> Self {
        Self { bst: Bst::new() }
    }

    /// The underlying search tree.
    pub fn as_bst(&self) -> &Bst<T> {
        &self.bst
    }

    /// Gives up the balancing and keeps the values as a plain search tree.
    pub fn into_bst(self) -> Bst<T> {
        self.bst
    }

    /// Returns whether `value` is in the tree.
    pub fn find(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.bst.find(value)
    }

    /// Same as [`find`](Self::find).
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.bst.find(value)
    }

    /// Inserts `value`, rebalancing every ancestor of the new node that needs it. Returns `false`
    /// without touching the tree if the value is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintrees::{AvlTree, BinaryTree};
    ///
    /// let mut tree = AvlTree::new();
    /// for value in [3, 2, 1] {
    ///     assert!(tree.insert(value));
    /// }
    ///
    /// // The left-left case was fixed with a single right rotation.
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(2));
    /// assert!(!tree.insert(2));
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let (root, trail) = insert(self.bst.root.take(), value);
        self.bst.root = Some(root);

        let inserted = trail.is_some();

        if !inserted {
            trace!("insert ignored a value already in the tree");
        }
        inserted
    }

    /// Removes `value` like [`Bst::remove`]. The tree is **not** rebalanced afterwards.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        self.bst.remove(value)
    }

    /// Removes each of `values` in turn without rebalancing.
    pub fn remove_all<'a, I>(&mut self, values: I)
    where
        I: IntoIterator<Item = &'a T>,
        T: Ord + 'a,
    {
        self.bst.remove_all(values);
    }

    /// The smallest value in the tree.
    pub fn find_smallest(&self) -> Result<&T, EmptyTreeError> {
        self.bst.find_smallest()
    }

    /// The largest value in the tree.
    pub fn find_largest(&self) -> Result<&T, EmptyTreeError> {
        self.bst.find_largest()
    }

    /// See [`Bst::is_bst_satisfied`].
    pub fn is_bst_satisfied(&self) -> bool
    where
        T: Ord,
    {
        self.bst.is_bst_satisfied()
    }

    /// The balance factor of the root, `0` for an empty tree.
    pub fn balance_factor(&self) -> isize {
        self.root().map_or(0, balance_factor)
    }

    /// Whether every node in the tree, not just the root, has a balance factor of -1, 0 or 1.
    /// Heights are measured from the tree's actual shape.
    pub fn is_avl_satisfied(&self) -> bool {
        balanced_height(self.root()).is_some()
    }
}

/// `height(left) - height(right)` for `node`. Positive when the left side is taller.
pub fn balance_factor<T>(node: &Node<T>) -> isize {
    binary_tree::height(node.left()) - binary_tree::height(node.right())
}

/// The height of `node` if every node beneath it is balanced.
fn balanced_height<T>(node: Option<&Node<T>>) -> Option<isize> {
    let Some(node) = node else {
        return Some(-1);
    };

    let left = balanced_height(node.left())?;
    let right = balanced_height(node.right())?;
    ((left - right).abs() <= 1).then(|| 1 + left.max(right))
}

/// Rotate `root` to the left. This moves the right child up vertically and `root` down
/// vertically, keeping the in-order sequence of the subtree. A node without a right child is
/// returned untouched.
///
/// # Diagram
///
/// ```text
///   old_root                  new_root
///    /    \                    /    \
///   x   new_root   rotate -> old_root  z
///        /  \                 /  \
///       y    z               x    y
/// ```
pub fn rotate_left<T>(mut root: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut new_root) = root.right.take() else {
        return root;
    };

    root.right = new_root.left.take();
    root.fix_height();

    new_root.left = Some(root);
    new_root.fix_height();

    trace!("rotated left, subtree height is now {}", new_root.height);
    new_root
}

/// Rotate `root` to the right. This moves the left child up vertically and `root` down
/// vertically, keeping the in-order sequence of the subtree. A node without a left child is
/// returned untouched.
///
/// # Diagram
///
/// ```text
///      old_root                new_root
///       /   \                   /   \
///   new_root  z    rotate ->   x   old_root
///    / \                            /  \
///   x   y                          y    z
/// ```
pub fn rotate_right<T>(mut root: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut new_root) = root.left.take() else {
        return root;
    };

    root.left = new_root.right.take();
    root.fix_height();

    new_root.right = Some(root);
    new_root.fix_height();

    trace!("rotated right, subtree height is now {}", new_root.height);
    new_root
}

/// How the inserted value compares to the root of the subtree it went into, and then to that
/// root's child on the same side. The second is `None` exactly when the value is the root.
type Trail = (Ordering, Option<Ordering>);

/// Inserts `value` below `node`, returning the new subtree root and, if the value wasn't already
/// there, its [`Trail`] from that root.
fn insert<T: Ord>(node: Link<T>, value: T) -> (Box<Node<T>>, Option<Trail>) {
    let Some(mut node) = node else {
        return (Node::new_boxed(value), Some((Ordering::Equal, None)));
    };

    let side = value.cmp(&node.value);
    let slot = match side {
        Ordering::Equal => return (node, None),
        Ordering::Less => &mut node.left,
        Ordering::Greater => &mut node.right,
    };
    let (child, below) = insert(slot.take(), value);
    *slot = Some(child);

    match below {
        Some(below) => {
            node.fix_height();
            let (node, trail) = rebalance(node, side, below);
            (node, Some(trail))
        }
        None => (node, None),
    }
}

/// Restores the balance of `node` after a value went into its child on `side`, `below` being the
/// value's trail inside that child. The rotation case is picked by comparing the inserted value
/// with the heavy child as it is after the insertion, rotations below included.
///
/// See <https://en.wikipedia.org/wiki/AVL_tree#Rebalancing> for terminology.
fn rebalance<T>(mut node: Box<Node<T>>, side: Ordering, below: Trail) -> (Box<Node<T>>, Trail) {
    let factor = balance_factor(&node);
    let heavy = if factor < -1 {
        Ordering::Greater
    } else if factor > 1 {
        Ordering::Less
    } else {
        return (node, (side, Some(below.0)));
    };

    // A value that went to the light side is on the far side of the heavy child too.
    let outer = if side == heavy { below.0 } else { side };
    let inner_present = match heavy {
        Ordering::Greater => node.right().map_or(false, |r| r.left.is_some()),
        _ => node.left().map_or(false, |l| l.right.is_some()),
    };

    let balanced = if heavy == Ordering::Greater {
        if outer == Ordering::Greater {
            debug!("rebalancing right-right with a left rotation");
        } else {
            debug!("rebalancing right-left with a right-left double rotation");
            node.right = node.right.take().map(rotate_right);
        }
        rotate_left(node)
    } else {
        if outer == Ordering::Less {
            debug!("rebalancing left-left with a right rotation");
        } else {
            debug!("rebalancing left-right with a left-right double rotation");
            node.left = node.left.take().map(rotate_left);
        }
        rotate_right(node)
    };

    // The balance factor can still be off after a removal, the cached height can't.
    if cfg!(debug_assertions) {
        let left_height = binary_tree::height(balanced.left());
        let right_height = binary_tree::height(balanced.right());
        assert_eq!(balanced.height, left_height.max(right_height) + 1);
    }
    (balanced, rotated_trail(heavy, side, below, inner_present))
}

/// The inserted value's trail from the new root once a subtree heavy on `heavy` was rotated.
/// `inner_present` tells whether the heavy child had a child on the inner side, which a double
/// rotation promotes.
fn rotated_trail(heavy: Ordering, side: Ordering, below: Trail, inner_present: bool) -> Trail {
    // Worked out as if the left side was heavy.
    let flip = |ord: Ordering| match heavy {
        Ordering::Greater => ord.reverse(),
        _ => ord,
    };

    let trail = match (flip(side), flip(below.0), below.1.map(flip)) {
        // The old root ends up right of the new one, with the value still beyond it.
        (Ordering::Greater, _, _) => (Ordering::Greater, Some(Ordering::Greater)),
        // Single rotation, the heavy child is the new root.
        (_, Ordering::Less, grandchild) => (Ordering::Less, grandchild),
        // Only the outer rotation moved anything.
        (_, child, grandchild) if !inner_present => (child, grandchild),
        // The heavy child is the value and goes left of the promoted grandchild.
        (_, Ordering::Equal, _) => (Ordering::Less, Some(Ordering::Equal)),
        // Otherwise the grandchild is promoted with the heavy child on its left and the old root
        // on its right.
        (_, _, Some(Ordering::Less)) => (Ordering::Less, Some(Ordering::Greater)),
        (_, _, Some(Ordering::Greater)) => (Ordering::Greater, Some(Ordering::Less)),
        _ => (Ordering::Equal, None),
    };
    (flip(trail.0), trail.1.map(flip))
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for AvlTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> From<AvlTree<T>> for Bst<T> {
    fn from(tree: AvlTree<T>) -> Self {
        tree.into_bst()
    }
}

impl<T: PartialEq> PartialEq for AvlTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.bst == other.bst
    }
}

impl<T: Eq> Eq for AvlTree<T> {}

impl<T: PartialEq> PartialEq<Bst<T>> for AvlTree<T> {
    fn eq(&self, other: &Bst<T>) -> bool {
        self.bst == *other
    }
}

impl<T: PartialEq> PartialEq<AvlTree<T>> for Bst<T> {
    fn eq(&self, other: &AvlTree<T>) -> bool {
        *self == other.bst
    }
}

impl<T: fmt::Display> fmt::Display for AvlTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        binary_tree::fmt_named(self, "AvlTree", f)
    }
}
