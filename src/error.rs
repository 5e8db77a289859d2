//! Errors surfaced by the trees in this crate.

use thiserror::Error;

/// Returned when asking an empty tree for its smallest or largest value.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("nothing in tree")]
pub struct EmptyTreeError;

/// Returned when a traversal order name isn't one of `preorder`, `inorder` or `postorder`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown traversal order `{0}`, expected `preorder`, `inorder` or `postorder`")]
pub struct ParseOrderError(
    /// The name that wasn't recognised.
    pub String,
);
