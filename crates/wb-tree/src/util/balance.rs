//! Weight-balance maintenance (Hirai–Yamamoto, Δ = 3, Γ = 2).
//!
//! A node with children `light` and `heavy` is balanced while
//! `Δ·(size(light) + 1) >= size(heavy) + 1`. A single rotation restores
//! balance while `size(inner) + 1 < Γ·(size(outer) + 1)` for the heavy
//! child's inner and outer grandchildren; otherwise a double rotation does.
//! The comparison is strict: on a tie a single rotation would leave the
//! demoted node out of balance after an erase.

use tracing::trace;

use crate::constants::{DELTA, GAMMA};
use crate::types::SizedNode;

use super::{get_l, get_r, is_anchor, parent, replace_child, set_l, set_p, set_r, size, update_size};

/// Direction of a `±1` subtree size change propagated by [`balance_above`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeChange {
    Grow,
    Shrink,
}

#[inline]
fn is_balanced(light: usize, heavy: usize) -> bool {
    // Δ·(light + 1) >= heavy + 1
    DELTA * (light + 1) > heavy
}

#[inline]
fn is_single(inner: usize, outer: usize) -> bool {
    inner + 1 < GAMMA * (outer + 1)
}

/// Restores balance at `a` when its right subtree is too heavy.
///
/// Returns the root of the rebalanced subtree, which sits in `a`'s former
/// slot.
pub fn balance_left<N: SizedNode>(arena: &mut [N], a: u32) -> u32 {
    let r = get_r(arena, a);
    if is_balanced(size(arena, get_l(arena, a)), size(arena, r)) {
        return a;
    }
    let b = r.expect("right-heavy node has a right child");
    let p = parent(arena, a);
    let c = get_l(arena, b);
    if is_single(size(arena, c), size(arena, get_r(arena, b))) {
        trace!(node = a, pivot = b, "single left rotation");
        replace_child(arena, p, a, Some(b));
        set_p(arena, b, Some(p));
        set_r(arena, a, c);
        if let Some(c) = c {
            set_p(arena, c, Some(a));
        }
        set_l(arena, b, Some(a));
        set_p(arena, a, Some(b));
        update_size(arena, a);
        update_size(arena, b);
        b
    } else {
        let c = c.expect("double rotation pivot exists");
        trace!(node = a, pivot = c, "double left rotation");
        let d = get_l(arena, c);
        let e = get_r(arena, c);
        replace_child(arena, p, a, Some(c));
        set_p(arena, c, Some(p));
        set_r(arena, a, d);
        if let Some(d) = d {
            set_p(arena, d, Some(a));
        }
        set_l(arena, b, e);
        if let Some(e) = e {
            set_p(arena, e, Some(b));
        }
        set_l(arena, c, Some(a));
        set_p(arena, a, Some(c));
        set_r(arena, c, Some(b));
        set_p(arena, b, Some(c));
        update_size(arena, a);
        update_size(arena, b);
        update_size(arena, c);
        c
    }
}

/// Mirror of [`balance_left`] for a left-heavy `a`.
pub fn balance_right<N: SizedNode>(arena: &mut [N], a: u32) -> u32 {
    let l = get_l(arena, a);
    if is_balanced(size(arena, get_r(arena, a)), size(arena, l)) {
        return a;
    }
    let b = l.expect("left-heavy node has a left child");
    let p = parent(arena, a);
    let c = get_r(arena, b);
    if is_single(size(arena, c), size(arena, get_l(arena, b))) {
        trace!(node = a, pivot = b, "single right rotation");
        replace_child(arena, p, a, Some(b));
        set_p(arena, b, Some(p));
        set_l(arena, a, c);
        if let Some(c) = c {
            set_p(arena, c, Some(a));
        }
        set_r(arena, b, Some(a));
        set_p(arena, a, Some(b));
        update_size(arena, a);
        update_size(arena, b);
        b
    } else {
        let c = c.expect("double rotation pivot exists");
        trace!(node = a, pivot = c, "double right rotation");
        let d = get_r(arena, c);
        let e = get_l(arena, c);
        replace_child(arena, p, a, Some(c));
        set_p(arena, c, Some(p));
        set_l(arena, a, d);
        if let Some(d) = d {
            set_p(arena, d, Some(a));
        }
        set_r(arena, b, e);
        if let Some(e) = e {
            set_p(arena, e, Some(b));
        }
        set_r(arena, c, Some(a));
        set_p(arena, a, Some(c));
        set_l(arena, c, Some(b));
        set_p(arena, b, Some(c));
        update_size(arena, a);
        update_size(arena, b);
        update_size(arena, c);
        c
    }
}

/// Propagates a `±1` size change at `node` up to the root, rebalancing each
/// ancestor on the way.
///
/// `node`'s own size must already be correct.
pub fn balance_above<N: SizedNode>(arena: &mut [N], node: u32, change: SizeChange) {
    let mut curr = node;
    loop {
        let p = parent(arena, curr);
        if is_anchor(arena, p) {
            break;
        }
        let from_right = get_r(arena, p) == Some(curr);
        let s = arena[p as usize].size();
        arena[p as usize].set_size(match change {
            SizeChange::Grow => s + 1,
            SizeChange::Shrink => s - 1,
        });
        curr = if from_right == (change == SizeChange::Grow) {
            balance_left(arena, p)
        } else {
            balance_right(arena, p)
        };
    }
}
