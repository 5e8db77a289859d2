use bintrees::{BinaryTree, Bst, EmptyTreeError, Order};
use pretty_assertions::assert_eq;

use std::collections::{BTreeSet, HashSet};

use crate::{init_logging, Op};

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Bst<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                bst.insert(v.clone());
                set.insert(v.clone());
            }
            Op::Remove(v) => {
                bst.remove(v);
                set.remove(v);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logging();
    let mut tree = Bst::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.is_bst_satisfied() && tree.to_vec(Order::InOrder) == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Bst<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Bst<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.find(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Bst<_> = xs.iter().copied().collect();
    tree.remove_all(&deletes);

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.find(x))
        && still_present.iter().all(|x| tree.find(x))
        && tree.is_bst_satisfied()
}

#[quickcheck]
fn in_order_is_sorted_and_distinct(xs: Vec<i32>) -> bool {
    let tree: Bst<_> = xs.iter().copied().collect();
    let distinct: BTreeSet<_> = xs.into_iter().collect();

    tree.size() == distinct.len() && tree.iter().eq(distinct.iter())
}

#[quickcheck]
fn equality_ignores_insertion_order(xs: Vec<i8>) -> bool {
    let forwards: Bst<_> = xs.iter().copied().collect();
    let backwards: Bst<_> = xs.iter().rev().copied().collect();

    forwards == backwards
}

#[test]
fn scenario_shapes() {
    init_logging();
    let balanced: Bst<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    let degenerate: Bst<_> = (1..=7).collect();

    assert_eq!(balanced.to_vec(Order::InOrder), vec![1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(balanced.to_vec(Order::PreOrder), vec![5, 3, 1, 4, 8, 7, 9]);
    assert_eq!(balanced.to_vec(Order::PostOrder), vec![1, 4, 3, 7, 9, 8, 5]);
    assert_eq!(balanced.height(), 2);
    assert_eq!(degenerate.height(), 6);
}

#[test]
fn scenario_remove_root_with_two_children() {
    init_logging();
    let mut tree: Bst<_> = [5, 3, 8].into_iter().collect();

    assert!(tree.remove(&5));
    assert_eq!(tree.root().map(|n| *n.value()), Some(8));
    assert_eq!(tree.to_vec(Order::InOrder), vec![3, 8]);
    assert!(tree.is_bst_satisfied());
}

#[test]
fn empty_tree_reports_errors() {
    let tree = Bst::<i32>::new();

    assert_eq!(tree.find_smallest(), Err(EmptyTreeError));
    assert_eq!(tree.find_largest(), Err(EmptyTreeError));
    assert_eq!(EmptyTreeError.to_string(), "nothing in tree");
}

#[test]
fn traversal_order_by_name() {
    let tree: Bst<_> = [2, 1, 3].into_iter().collect();

    let order: Order = "postorder".parse().unwrap();
    assert_eq!(tree.to_vec(order), vec![1, 3, 2]);
    assert!("sideways".parse::<Order>().is_err());
}
