use balanced_bst::{Order, Tree};

use std::collections::{BTreeSet, HashSet};

use quickcheck_macros::quickcheck;

/// Builds a tree by inserting each value in turn, so the shape follows the insertion order
/// instead of being balanced up front.
fn grow(xs: &[i16]) -> Tree<i16> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x);
    }
    tree
}

fn in_order(tree: &Tree<i16>) -> Vec<i16> {
    let mut values = Vec::new();
    tree.in_order(|n| values.push(*n.value()));
    values
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i16>, deletes: Vec<i16>) -> bool {
    let mut tree = grow(&xs);
    for delete in &deletes {
        tree.delete(delete);
    }

    in_order(&tree).windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn construction_matches_sorted_set(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let set: BTreeSet<_> = xs.into_iter().collect();

    tree.len() == set.len() && in_order(&tree).into_iter().eq(set)
}

#[quickcheck]
fn construction_is_minimal_height(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let expected = match tree.len() {
        0 => -1,
        n => n.ilog2() as isize,
    };

    tree.height() == expected && tree.is_balanced()
}

#[quickcheck]
fn duplicate_insert_changes_nothing(xs: Vec<i16>) -> bool {
    let mut tree = grow(&xs);
    let before = in_order(&tree);

    let all_rejected = xs.iter().all(|x| !tree.insert(*x));

    all_rejected && in_order(&tree) == before && tree.len() == before.len()
}

#[quickcheck]
fn rebalance_keeps_values(xs: Vec<i16>) -> bool {
    let mut tree = grow(&xs);
    let before = in_order(&tree);

    tree.rebalance();

    let expected = match before.len() {
        0 => -1,
        n => n.ilog2() as isize,
    };
    in_order(&tree) == before && tree.height() == expected && tree.is_balanced()
}

#[quickcheck]
fn delete_removes_exactly_one(xs: Vec<i16>, x: i16) -> bool {
    let mut tree = grow(&xs);
    let mut expected = in_order(&tree);
    let present = expected.contains(&x);
    expected.retain(|v| *v != x);

    tree.delete(&x) == present && in_order(&tree) == expected
}

#[quickcheck]
fn find_hits_and_misses(xs: Vec<i16>, nots: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.iter().copied().collect();

    let hits = xs.iter().all(|x| tree.find(x).map(|n| n.value()) == Some(x));
    let misses = nots
        .iter()
        .filter(|x| !added.contains(*x))
        .all(|x| tree.find(x).is_none());

    hits && misses
}

#[quickcheck]
fn every_order_visits_every_node(xs: Vec<i16>) -> bool {
    let tree = grow(&xs);
    let expected: BTreeSet<_> = xs.into_iter().collect();

    Order::ALL.into_iter().all(|order| {
        let mut seen = Vec::new();
        let mut visit = |n: &balanced_bst::Node<i16>| seen.push(*n.value());
        tree.traverse(order, Some(&mut visit)).is_ok()
            && seen.len() == expected.len()
            && seen.into_iter().collect::<BTreeSet<_>>() == expected
    })
}

#[test]
fn seven_value_fixture() {
    let tree: Tree<_> = (1..=7).collect();

    let mut level = Vec::new();
    tree.level_order(|n| level.push(*n.value()));

    let mut sorted = Vec::new();
    tree.in_order(|n| sorted.push(*n.value()));

    assert_eq!(level, [4, 2, 6, 1, 3, 5, 7]);
    assert_eq!(sorted, [1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(tree.depth(tree.root().unwrap()), Some(0));
}
