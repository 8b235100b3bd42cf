use linked_bst::linked::Tree;
use linked_bst::Error;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a multiset of counts.
/// This way we can ensure that after a random smattering of inserts,
/// removes and rebalances we have the same items in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, counts: &mut BTreeMap<T, usize>)
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(item) => {
                bst.insert(item.clone());
                *counts.entry(item.clone()).or_insert(0) += 1;
            }
            Op::Remove(item) => match counts.get_mut(item) {
                Some(count) => {
                    assert_eq!(bst.remove(item), Ok(item.clone()));
                    *count -= 1;
                    if *count == 0 {
                        counts.remove(item);
                    }
                }
                None => assert_eq!(bst.remove(item), Err(Error::NotFound)),
            },
            Op::Rebalance => bst.rebalance(),
        }
    }
}

/// Expands counts back into the sorted sequence they describe.
fn expand<T: Clone>(counts: &BTreeMap<T, usize>) -> Vec<T> {
    counts
        .iter()
        .flat_map(|(item, count)| std::iter::repeat(item.clone()).take(*count))
        .collect()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut counts = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut counts);
    let expected = expand(&counts);

    tree.len() == expected.len() && tree.in_order().eq(expected.iter())
}

#[quickcheck]
fn in_order_is_sorted_input(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut sorted = xs.clone();
    sorted.sort();

    tree.len() == xs.len() && tree.in_order().eq(sorted.iter())
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let mut still_present = xs;
    for remove in &removes {
        let expected = still_present
            .iter()
            .position(|x| x == remove)
            .map(|pos| still_present.swap_remove(pos));
        if tree.remove(remove).ok() != expected {
            return false;
        }
    }

    still_present.iter().all(|x| tree.find(x).is_some()) && tree.len() == still_present.len()
}

#[quickcheck]
fn traversals_visit_every_item(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut sorted = xs.clone();
    sorted.sort();

    let by_order = |mut items: Vec<i8>| {
        items.sort();
        items == sorted
    };

    by_order(tree.pre_order().copied().collect())
        && by_order(tree.post_order().copied().collect())
        && by_order(tree.level_order().copied().collect())
        && by_order((&tree).into_iter().copied().collect())
}

#[quickcheck]
fn rebalance_keeps_equality(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut rebalanced = tree.clone();
    rebalanced.rebalance();

    tree == rebalanced && rebalanced.is_balanced()
}
