//! Positional insert and erase.
//!
//! Both operations only relink nodes: no value moves between slots, so the
//! index of every node other than the erased one keeps denoting the same
//! value.

use crate::types::SizedNode;

use super::balance::{balance_above, balance_left, balance_right, SizeChange};
use super::{
    get_l, get_r, is_anchor, leftmost, parent, replace_child, rightmost, set_l, set_p, set_r, size,
};

/// Links the unlinked singleton `node` immediately before `pos` in in-order
/// sequence and rebalances. `pos` may be the anchor (append).
pub fn insert_before<N: SizedNode>(arena: &mut [N], pos: u32, node: u32) {
    match get_l(arena, pos) {
        Some(l) => {
            let last = rightmost(arena, l);
            set_r(arena, last, Some(node));
            set_p(arena, node, Some(last));
        }
        None => {
            set_l(arena, pos, Some(node));
            set_p(arena, node, Some(pos));
        }
    }
    balance_above(arena, node, SizeChange::Grow);
}

/// Unlinks `node` from the tree and rebalances. The caller owns the slot
/// afterwards; its links are cleared.
///
/// When `node` has two children its in-order successor is spliced into its
/// position, keeping the successor's own slot.
pub fn erase<N: SizedNode>(arena: &mut [N], node: u32) {
    debug_assert!(!is_anchor(arena, node), "the anchor cannot be erased");
    let p = parent(arena, node);
    match (get_l(arena, node), get_r(arena, node)) {
        (Some(l), Some(r)) => {
            let succ = leftmost(arena, r);
            if succ != r {
                let q = parent(arena, succ);
                let sr = get_r(arena, succ);
                set_l(arena, q, sr);
                if let Some(sr) = sr {
                    set_p(arena, sr, Some(q));
                }
                set_r(arena, succ, Some(r));
                set_p(arena, r, Some(succ));
                set_l(arena, succ, Some(l));
                set_p(arena, l, Some(succ));
                replace_child(arena, p, node, Some(succ));
                set_p(arena, succ, Some(p));
                let s = arena[node as usize].size();
                arena[succ as usize].set_size(s);
                let qs = arena[q as usize].size();
                arena[q as usize].set_size(qs - 1);
                let q = balance_left(arena, q);
                balance_above(arena, q, SizeChange::Shrink);
            } else {
                replace_child(arena, p, node, Some(succ));
                set_p(arena, succ, Some(p));
                set_l(arena, succ, Some(l));
                set_p(arena, l, Some(succ));
                let s = arena[node as usize].size();
                arena[succ as usize].set_size(s - 1);
                let succ = balance_right(arena, succ);
                balance_above(arena, succ, SizeChange::Shrink);
            }
        }
        (l, r) => {
            let child = l.or(r);
            if let Some(c) = child {
                set_p(arena, c, Some(p));
            }
            if get_l(arena, p) == Some(node) {
                set_l(arena, p, child);
                if !is_anchor(arena, p) {
                    shrink(arena, p);
                    let q = balance_left(arena, p);
                    balance_above(arena, q, SizeChange::Shrink);
                }
            } else {
                set_r(arena, p, child);
                shrink(arena, p);
                let q = balance_right(arena, p);
                balance_above(arena, q, SizeChange::Shrink);
            }
        }
    }
    set_p(arena, node, None);
    set_l(arena, node, None);
    set_r(arena, node, None);
}

#[inline]
fn shrink<N: SizedNode>(arena: &mut [N], idx: u32) {
    let s = size(arena, Some(idx));
    arena[idx as usize].set_size(s - 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ANCHOR;
    use crate::node::WbNode;
    use crate::util::tests::{build, in_order};

    fn push(arena: &mut Vec<WbNode<usize>>, v: usize) -> u32 {
        arena.push(WbNode::new(v));
        (arena.len() - 1) as u32
    }

    #[test]
    fn insert_before_anchor_appends() {
        let mut arena = build(0);
        for v in 0..20 {
            let n = push(&mut arena, v);
            insert_before(&mut arena, ANCHOR, n);
        }
        assert_eq!(in_order(&arena), (0..20).collect::<Vec<_>>());
        assert_eq!(size(&arena, arena[ANCHOR as usize].l), 20);
    }

    #[test]
    fn insert_before_element_with_left_subtree() {
        let mut arena = build(7);
        // Slot 4 holds value 3 and is the root of the perfect tree.
        let n = push(&mut arena, 100);
        insert_before(&mut arena, 4, n);
        assert_eq!(in_order(&arena), vec![0, 1, 2, 100, 3, 4, 5, 6]);
    }

    #[test]
    fn erase_covers_leaf_inner_and_root() {
        for victim in 1..=15u32 {
            let mut arena = build(15);
            erase(&mut arena, victim);
            let expected: Vec<usize> = (0..15).filter(|&v| v + 1 != victim as usize).collect();
            assert_eq!(in_order(&arena), expected, "erasing slot {victim}");
            assert_eq!(size(&arena, arena[ANCHOR as usize].l), 14);
            assert_eq!(arena[victim as usize].p, None);
        }
    }

    #[test]
    fn erase_last_node_empties_tree() {
        let mut arena = build(1);
        erase(&mut arena, 1);
        assert_eq!(arena[ANCHOR as usize].l, None);
        assert!(in_order(&arena).is_empty());
    }
}
