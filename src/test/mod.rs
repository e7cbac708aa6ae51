
use std::collections::BTreeSet;

use quickcheck_macros::quickcheck;

use crate::node::{self, Node};
use crate::Tree;
use quick::Op;

/// Checks the ordering invariant on every node using the bounds inherited from its ancestors and
/// returns how many nodes there are.
fn assert_bst<T: Ord>(node: Option<&Node<T>>, low: Option<&T>, high: Option<&T>) -> usize {
    let Some(node) = node else {
        return 0;
    };
    if let Some(low) = low {
        assert!(node.value() > low);
    }
    if let Some(high) = high {
        assert!(node.value() < high);
    }

    1 + assert_bst(node.left(), low, Some(node.value()))
        + assert_bst(node.right(), Some(node.value()), high)
}

fn minimal_height(len: usize) -> isize {
    match len {
        0 => -1,
        n => n.ilog2() as isize,
    }
}

/// Applies random operations to a tree and a `BTreeSet` side by side, checking the tree against
/// the set after every step.
#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    for op in ops {
        match op {
            Op::Insert(x) => assert_eq!(tree.insert(x), set.insert(x)),
            Op::Delete(x) => assert_eq!(tree.delete(&x), set.remove(&x)),
            Op::Find(x) => {
                assert_eq!(tree.find(&x).map(|n| *n.value()), set.get(&x).copied());
            }
            Op::Rebalance => {
                tree.rebalance();
                assert!(tree.is_balanced());
                assert_eq!(tree.height(), minimal_height(set.len()));
            }
        }

        assert_eq!(assert_bst(tree.root(), None, None), set.len());
        assert_eq!(tree.len(), set.len());
    }

    tree.values().into_iter().eq(set.iter())
}

#[quickcheck]
fn depth_never_exceeds_height(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(x);
    }

    let height = tree.height();
    let mut depths = Vec::new();
    tree.pre_order(|n| depths.push(tree.depth(n)));

    depths
        .into_iter()
        .all(|depth| depth.is_some_and(|d| d as isize <= height))
}

#[quickcheck]
fn balanced_matches_per_node_heights(xs: Vec<u8>) -> bool {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(x);
    }

    // Every node's own children must differ by at most one for the tree to be balanced.
    let mut all_local = true;
    tree.post_order(|n| {
        let diff = node::height(n.left()) - node::height(n.right());
        all_local &= diff.abs() <= 1;
    });

    tree.is_balanced() == all_local
}
