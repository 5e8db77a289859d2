//! The shape every tree in this crate is built from: a [`Node`] owning a value and two optional
//! children, plus the [`BinaryTree`] capability that gives any tree exposing its root the usual
//! height, size, traversal and iteration helpers.
//!
//! Heights use `-1` for an absent node so that a leaf has height `0`.
//!
//! # Examples
//!
//! ```
//! use bintrees::binary_tree::{self, Node, Order};
//!
//! let root = Node::with_children(
//!     2,
//!     Some(Box::new(Node::new(1))),
//!     Some(Box::new(Node::new(3))),
//! );
//!
//! assert_eq!(root.height(), 1);
//! assert_eq!(binary_tree::size(Some(&root)), 3);
//! assert_eq!(binary_tree::traverse(Some(&root), Order::PreOrder), vec![&2, &1, &3]);
//! assert_eq!(root.to_string(), "(2 - (1) - (3))");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ParseOrderError;

/// An owned, possibly empty, subtree.
pub type Link<T> = Option<Box<Node<T>>>;

/// A value with two owned child slots. The node caches the height of the subtree rooted at it so
/// rebalancing never has to walk a subtree to measure it.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,

    /// How many edges are on the longest path from this node down to a leaf. A node with no
    /// children has a height of 0.
    pub(crate) height: isize,
}

impl<T> Node<T> {
    /// Construct a leaf holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 0,
        }
    }

    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self::new(value))
    }

    /// Construct a node with the given children. No ordering is checked so this can describe
    /// any shape at all, valid or not.
    pub fn with_children(value: T, left: Link<T>, right: Link<T>) -> Self {
        let mut node = Self {
            value,
            left,
            right,
            height: 0,
        };
        node.fix_height();
        node
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Height of the subtree rooted at this node.
    pub fn height(&self) -> isize {
        self.height
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Breaks the node into its value and its two subtrees.
    pub fn into_parts(self) -> (T, Link<T>, Link<T>) {
        (self.value, self.left, self.right)
    }

    /// Recomputes the cached height from the children. Must be called after any change to
    /// `left` or `right`.
    pub(crate) fn fix_height(&mut self) {
        self.height = 1 + height(self.left()).max(height(self.right()));
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.value)?;
        if !self.is_leaf() {
            for child in [self.left(), self.right()] {
                match child {
                    Some(child) => write!(f, " - {child}")?,
                    None => f.write_str(" - ()")?,
                }
            }
        }
        f.write_str(")")
    }
}

/// Height of the subtree rooted at `node`: `-1` when there is no node.
pub fn height<T>(node: Option<&Node<T>>) -> isize {
    node.map_or(-1, Node::height)
}

/// Number of nodes in the subtree rooted at `node`.
pub fn size<T>(node: Option<&Node<T>>) -> usize {
    match node {
        None => 0,
        Some(n) => 1 + size(n.left()) + size(n.right()),
    }
}

/// The order in which [`traverse`] visits a node relative to its subtrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Node, then left subtree, then right subtree.
    PreOrder,
    /// Left subtree, then node, then right subtree. Sorted order for a search tree.
    InOrder,
    /// Left subtree, then right subtree, then node.
    PostOrder,
}

impl FromStr for Order {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "preorder" => Ok(Self::PreOrder),
            "inorder" => Ok(Self::InOrder),
            "postorder" => Ok(Self::PostOrder),
            _ => Err(ParseOrderError(s.to_owned())),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PreOrder => "preorder",
            Self::InOrder => "inorder",
            Self::PostOrder => "postorder",
        })
    }
}

/// Collects references to every value under `node` in the given order.
pub fn traverse<T>(node: Option<&Node<T>>, order: Order) -> Vec<&T> {
    let mut values = Vec::new();
    traverse_into(node, order, &mut values);
    values
}

fn traverse_into<'a, T>(node: Option<&'a Node<T>>, order: Order, values: &mut Vec<&'a T>) {
    let Some(node) = node else {
        return;
    };

    if order == Order::PreOrder {
        values.push(&node.value);
    }
    traverse_into(node.left(), order, values);
    if order == Order::InOrder {
        values.push(&node.value);
    }
    traverse_into(node.right(), order, values);
    if order == Order::PostOrder {
        values.push(&node.value);
    }
}

/// A lazy in-order iterator over the values of a tree.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.value)
    }
}

/// Anything built out of [`Node`]s. Implementors only expose their root; everything else is
/// derived from it.
pub trait BinaryTree<T> {
    /// The root node, or `None` for an empty tree.
    fn root(&self) -> Option<&Node<T>>;

    /// Height of the whole tree: `-1` when empty, `0` for a single node.
    fn height(&self) -> isize {
        height(self.root())
    }

    /// Number of values in the tree.
    fn size(&self) -> usize {
        size(self.root())
    }

    /// Whether the tree holds no values.
    fn is_empty(&self) -> bool {
        self.root().is_none()
    }

    /// References to every value in the given order.
    fn traverse(&self, order: Order) -> Vec<&T> {
        traverse(self.root(), order)
    }

    /// Copies every value out in the given order.
    fn to_vec(&self, order: Order) -> Vec<T>
    where
        T: Clone,
    {
        self.traverse(order).into_iter().cloned().collect()
    }

    /// Iterates the values in order.
    fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root())
    }
}

/// Writes `name([a, b, c])` using the in-order values of `tree`.
pub(crate) fn fmt_named<T, B>(tree: &B, name: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: fmt::Display,
    B: BinaryTree<T> + ?Sized,
{
    write!(f, "{name}([")?;
    for (i, value) in tree.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{value}")?;
    }
    f.write_str("])")
}
