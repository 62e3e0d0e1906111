mod common;

use common::{cmp_to, init_tracing, insert_sorted, to_vec, verify_size, Fuzzer};
use proptest::prelude::*;
use proptest::sample::Index;
use wb_tree::Tree;

/// Height bound for Δ = 3: every child carries at most 3/4 of its parent's
/// weight (size + 1), and a leaf has weight 2.
fn max_height(size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    let levels = ((size + 1) as f64 / 2.0).ln() / (4.0f64 / 3.0).ln();
    1 + levels.floor() as usize
}

fn assert_ascending(tree: &Tree<f32>) {
    let values = to_vec(tree);
    assert_eq!(values.len(), tree.size());
    assert!(values.windows(2).all(|w| w[0] <= w[1]), "not ascending");
}

fn walk_backwards(tree: &Tree<f32>) -> Vec<f32> {
    let mut out = Vec::with_capacity(tree.size());
    let mut c = tree.prev(tree.end());
    while c != tree.end() {
        out.push(tree[c]);
        c = tree.prev(c);
    }
    out.reverse();
    out
}

#[test]
fn random_float_workload_matrix() {
    init_tracing();
    let mut fuzzer = Fuzzer::from_u64(0x5eed);
    let mut tree: Tree<f32> = Tree::new();

    for round in 0..8 {
        for _ in 0..4096 {
            insert_sorted(&mut tree, fuzzer.unit());
        }
        assert_ascending(&tree);
        assert!(tree.height() <= max_height(tree.size()));

        let a = fuzzer.unit();
        let b = fuzzer.unit();
        let (l, r) = if a <= b { (a, b) } else { (b, a) };
        let expected: Vec<f32> = to_vec(&tree)
            .into_iter()
            .filter(|v| *v < l || *v > r)
            .collect();

        let (mut it, hi) = tree.range_between(cmp_to(l), cmp_to(r));
        while it != hi {
            assert!((l..=r).contains(&tree[it]));
            it = tree.erase(it);
        }

        assert_eq!(to_vec(&tree), expected, "round {round}");
        assert_eq!(walk_backwards(&tree), expected);
        verify_size(&tree).unwrap();
        tree.assert_valid().unwrap();
    }
}

#[test]
fn monotone_insertion_stays_within_height_bound() {
    init_tracing();
    let mut front: Tree<u32> = Tree::new();
    let mut back: Tree<u32> = Tree::new();
    for n in 0..5000u32 {
        front.push_front(n);
        back.push_back(n);
        if n.is_power_of_two() {
            let size = n as usize + 1;
            assert!(front.height() <= max_height(size), "front, size {size}");
            assert!(back.height() <= max_height(size), "back, size {size}");
        }
    }
    front.assert_valid().unwrap();
    back.assert_valid().unwrap();
    assert!(front.iter().copied().eq((0..5000).rev()));
    assert!(back.iter().copied().eq(0..5000));
}

#[test]
fn drain_from_both_ends_matrix() {
    let mut fuzzer = Fuzzer::from_u64(11);
    let mut values: Vec<u32> = (0..2048).collect();
    fuzzer.shuffle(&mut values);
    let mut tree: Tree<u32> = Tree::new();
    for v in values {
        insert_sorted(&mut tree, v);
    }
    let mut expected: std::collections::VecDeque<u32> = (0..2048).collect();
    while !tree.is_empty() {
        if fuzzer.unit() < 0.5 {
            assert_eq!(tree.remove(tree.begin()), expected.pop_front().unwrap());
        } else {
            let last = tree.prev(tree.end());
            assert_eq!(tree.remove(last), expected.pop_back().unwrap());
        }
        if tree.size() % 128 == 0 {
            tree.assert_valid().unwrap();
        }
    }
    assert!(expected.is_empty());
    assert_eq!(tree.begin(), tree.end());
}

#[derive(Debug, Clone)]
enum Op {
    Insert(Index, i16),
    Erase(Index),
    Exchange(Index, Index),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (any::<Index>(), any::<i16>()).prop_map(|(at, v)| Op::Insert(at, v)),
        3 => any::<Index>().prop_map(Op::Erase),
        3 => (any::<Index>(), any::<Index>()).prop_map(|(i, j)| Op::Exchange(i, j)),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn prop_matches_vec_model(ops in prop::collection::vec(op(), 1..200)) {
        let mut tree: Tree<i16> = Tree::new();
        let mut model: Vec<i16> = Vec::new();
        for op in ops {
            match op {
                Op::Insert(at, v) => {
                    let p = at.index(model.len() + 1);
                    let c = tree.insert(tree.nth(p), v);
                    model.insert(p, v);
                    prop_assert_eq!(tree.position(c), p);
                }
                Op::Erase(at) if !model.is_empty() => {
                    let p = at.index(model.len());
                    let after = tree.erase(tree.nth(p));
                    model.remove(p);
                    prop_assert_eq!(tree.position(after), p);
                }
                Op::Exchange(i, j) if !model.is_empty() => {
                    let (p, q) = (i.index(model.len()), j.index(model.len()));
                    let (a, b) = (tree.nth(p), tree.nth(q));
                    tree.exchange_elements(a, b);
                    model.swap(p, q);
                    prop_assert_eq!(tree.position(a), q);
                    prop_assert_eq!(tree.position(b), p);
                }
                Op::Clear => {
                    tree.clear();
                    model.clear();
                }
                _ => {}
            }
            prop_assert_eq!(tree.size(), model.len());
            prop_assert!(tree.assert_valid().is_ok());
        }
        prop_assert_eq!(to_vec(&tree), model.clone());
        prop_assert!(tree.into_iter().rev().eq(model.into_iter().rev()));
    }

    #[test]
    fn prop_bounds_on_sorted_input(
        mut values in prop::collection::vec(-50i32..50, 0..120),
        target in -60i32..60,
    ) {
        let tree: Tree<i32> = {
            values.sort_unstable();
            values.iter().copied().collect()
        };
        let lower = values.partition_point(|&v| v < target);
        let upper = values.partition_point(|&v| v <= target);
        prop_assert_eq!(tree.position(tree.lower_bound(cmp_to(target))), lower);
        prop_assert_eq!(tree.position(tree.upper_bound(cmp_to(target))), upper);
    }
}
