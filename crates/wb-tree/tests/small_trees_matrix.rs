mod common;

use common::{to_vec, verify_size};
use wb_tree::Tree;

/// Builds a tree of `size` elements `0..size`, element `l` pushed to the
/// back when bit `l` of `pattern` is set and to the front otherwise.
fn build(size: usize, pattern: u32) -> (Tree<usize>, Vec<usize>) {
    let mut tree = Tree::new();
    let mut model = Vec::new();
    for l in 0..size {
        if (pattern >> l) & 1 == 1 {
            tree.insert(tree.end(), l);
            model.push(l);
        } else {
            tree.insert(tree.begin(), l);
            model.insert(0, l);
        }
    }
    (tree, model)
}

#[test]
fn build_iterate_exchange_erase_small_trees_matrix() {
    for size in 1..=6usize {
        for pattern in 0..(1u32 << size) {
            for i in 0..size {
                for j in 0..size {
                    if size != 1 && i == j {
                        continue;
                    }
                    for k in 0..size {
                        let (mut tree, mut model) = build(size, pattern);
                        verify_size(&tree).unwrap_or_else(|e| {
                            panic!("size {size} pattern {pattern}: {e}")
                        });
                        assert_eq!(to_vec(&tree), model);

                        if size > 1 {
                            let iter = tree.nth(i);
                            let jter = tree.nth(j);
                            tree.exchange_elements(iter, jter);
                            model.swap(i, j);
                            assert_eq!(tree.nth(j), iter);
                            assert_eq!(tree.nth(i), jter);
                        }

                        let kter = tree.nth(k);
                        let after = tree.erase(kter);
                        model.remove(k);
                        assert_eq!(after, tree.nth(k));

                        verify_size(&tree).unwrap_or_else(|e| {
                            panic!(
                                "size {size} pattern {pattern}, after exchanging {i}, {j} \
                                 and erasing {k}: {e}"
                            )
                        });
                        assert_eq!(to_vec(&tree), model);
                        tree.assert_valid().unwrap();
                    }
                }
            }
        }
    }
}

#[test]
fn exchange_keeps_other_cursors_on_their_values() {
    for size in 2..=6usize {
        for i in 0..size {
            for j in 0..size {
                let (mut tree, _) = build(size, 0b10_1010);
                let cursors: Vec<_> = (0..size).map(|p| tree.nth(p)).collect();
                let values: Vec<_> = cursors.iter().map(|&c| tree[c]).collect();
                tree.exchange_elements(cursors[i], cursors[j]);
                for (c, v) in cursors.iter().zip(&values) {
                    assert_eq!(tree[*c], *v);
                }
                let mut expected = values.clone();
                expected.swap(i, j);
                assert_eq!(to_vec(&tree), expected);
                tree.assert_valid().unwrap();
            }
        }
    }
}

#[test]
fn erase_every_position_keeps_remaining_order() {
    for size in 1..=12usize {
        for k in 0..size {
            let mut tree: Tree<usize> = (0..size).collect();
            let cursors: Vec<_> = (0..size).map(|p| tree.nth(p)).collect();
            assert_eq!(tree.remove(cursors[k]), k);
            assert_eq!(tree.size(), size - 1);
            for (p, c) in cursors.iter().enumerate() {
                if p != k {
                    assert_eq!(tree[*c], p, "cursor {p} survives erasing {k}");
                }
            }
            let expected: Vec<_> = (0..size).filter(|&v| v != k).collect();
            assert_eq!(to_vec(&tree), expected);
            tree.assert_valid().unwrap();
        }
    }
}
