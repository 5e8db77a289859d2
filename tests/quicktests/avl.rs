use bintrees::avl::{balance_factor, rotate_left, rotate_right};
use bintrees::binary_tree::{self, Link, Node};
use bintrees::{AvlTree, BinaryTree, Bst, Order};
use pretty_assertions::assert_eq;

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::{init_logging, Op};

#[quickcheck]
fn insertions_keep_both_invariants(xs: Vec<i32>) -> bool {
    init_logging();
    let tree: AvlTree<_> = xs.into_iter().collect();

    tree.is_avl_satisfied() && tree.is_bst_satisfied()
}

#[quickcheck]
fn ascending_insertions_stay_short(n: u16) -> bool {
    let n = n % 2048;
    let tree: AvlTree<_> = (0..n).collect();

    tree.is_avl_satisfied() && (tree.height() as f64) <= 1.45 * (f64::from(n) + 2.0).log2()
}

#[quickcheck]
fn same_values_as_bst(xs: Vec<i8>) -> bool {
    let avl: AvlTree<_> = xs.iter().copied().collect();
    let bst: Bst<_> = xs.into_iter().collect();

    avl == bst && avl.size() == bst.size()
}

#[quickcheck]
fn removal_keeps_order(ops: Vec<Op<i8>>) -> bool {
    let mut tree = AvlTree::new();
    let mut set = BTreeSet::new();

    for op in ops {
        match op {
            Op::Insert(v) => {
                tree.insert(v);
                set.insert(v);
            }
            Op::Remove(v) => {
                tree.remove(&v);
                set.remove(&v);
            }
        }
    }

    tree.is_bst_satisfied() && tree.iter().eq(set.iter())
}

/// Textbook recursive AVL insert built from the public rotations: at every ancestor the rotation
/// case comes from comparing the value with the heavy child once the insertion below is done.
fn textbook_insert(node: Link<i8>, value: i8) -> Box<Node<i8>> {
    let Some(node) = node else {
        return Box::new(Node::new(value));
    };

    let (v, left, right) = node.into_parts();
    let (left, right) = match value.cmp(&v) {
        Ordering::Less => (Some(textbook_insert(left, value)), right),
        _ => (left, Some(textbook_insert(right, value))),
    };
    let node = Box::new(Node::with_children(v, left, right));

    if balance_factor(&node) < -1 {
        let (v, left, right) = node.into_parts();
        let right = right.map(|r| if value > *r.value() { r } else { rotate_right(r) });
        return rotate_left(Box::new(Node::with_children(v, left, right)));
    }
    if balance_factor(&node) > 1 {
        let (v, left, right) = node.into_parts();
        let left = left.map(|l| if value < *l.value() { l } else { rotate_left(l) });
        return rotate_right(Box::new(Node::with_children(v, left, right)));
    }
    node
}

#[quickcheck]
fn shape_after_mixed_operations(ops: Vec<Op<i8>>) -> bool {
    let mut tree = AvlTree::new();
    let mut textbook = Bst::new();

    for op in ops {
        match op {
            Op::Insert(v) => {
                tree.insert(v);
                if !textbook.contains(&v) {
                    textbook = Bst::from_root(Some(textbook_insert(textbook.into_root(), v)));
                }
            }
            Op::Remove(v) => {
                tree.remove(&v);
                textbook.remove(&v);
            }
        }
    }

    tree.to_vec(Order::PreOrder) == textbook.to_vec(Order::PreOrder)
}

#[test]
fn removal_then_insert_shape() {
    init_logging();

    let mut tree: AvlTree<_> = [-10, -5, 0, -14].into_iter().collect();
    tree.remove(&-5);
    tree.insert(-13);

    assert_eq!(tree.to_vec(Order::PreOrder), vec![-10, -13, -14, 0]);
    assert!(tree.is_avl_satisfied());
}

#[quickcheck]
fn rotation_round_trip(xs: Vec<i8>) -> bool {
    let Some(root) = xs.into_iter().collect::<AvlTree<_>>().into_bst().into_root() else {
        return true;
    };
    if root.right().is_none() {
        return true;
    }

    let before = binary_tree::traverse(Some(&*root), Order::PreOrder)
        .into_iter()
        .copied()
        .collect::<Vec<_>>();
    let after = rotate_right(rotate_left(root));

    binary_tree::traverse(Some(&*after), Order::PreOrder)
        .into_iter()
        .eq(before.iter())
}

#[test]
fn scenario_shapes() {
    init_logging();
    let balanced: AvlTree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    let sorted: AvlTree<_> = (1..=7).collect();

    assert_eq!(balanced.to_vec(Order::InOrder), vec![1, 3, 4, 5, 7, 8, 9]);
    assert!(balanced.is_avl_satisfied());
    assert_eq!(sorted.height(), 2);
    assert_eq!(sorted.to_vec(Order::InOrder), (1..=7).collect::<Vec<_>>());
    assert!(sorted.is_avl_satisfied());
}

#[test]
fn thousand_sorted_insertions() {
    let tree: AvlTree<_> = (0..1000).collect();

    assert_eq!(tree.size(), 1000);
    assert!((9..=10).contains(&tree.height()));
    assert!(tree.is_avl_satisfied());
}

#[test]
fn display_and_conversion() {
    let tree: AvlTree<_> = [2, 1, 3].into_iter().collect();
    assert_eq!(tree.to_string(), "AvlTree([1, 2, 3])");

    let bst = Bst::from(tree);
    assert_eq!(bst.to_string(), "Bst([1, 2, 3])");
}
