//! Node engine over an index-linked arena.
//!
//! All functions take the arena as a slice and work with `u32` slot
//! indices. The anchor is recognised by its self-referential parent link;
//! its left child is the root and its right link is always `None`.
//!
//! - [`balance`]: weight-balance rotations and upward propagation
//! - [`splice`]: positional insert and erase
//! - [`swap`]: exchange of two nodes' positions
//! - [`search`]: bound descents driven by a partition predicate

pub mod balance;
pub mod search;
pub mod splice;
pub mod swap;

use crate::types::{Node, SizedNode};

pub use balance::{balance_above, balance_left, balance_right, SizeChange};
pub use search::{bounds, lower_bound, partition_point, upper_bound};
pub use splice::{erase, insert_before};
pub use swap::exchange;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Parent of a linked node (the anchor's parent is itself).
#[inline]
pub(crate) fn parent<N: Node>(arena: &[N], idx: u32) -> u32 {
    get_p(arena, idx).expect("linked node has a parent")
}

/// Subtree size, `0` for an absent child.
#[inline]
pub fn size<N: SizedNode>(arena: &[N], idx: Option<u32>) -> usize {
    idx.map_or(0, |i| arena[i as usize].size())
}

#[inline]
pub(crate) fn update_size<N: SizedNode>(arena: &mut [N], idx: u32) {
    let s = size(arena, get_l(arena, idx)) + size(arena, get_r(arena, idx)) + 1;
    arena[idx as usize].set_size(s);
}

pub fn is_anchor<N: Node>(arena: &[N], idx: u32) -> bool {
    get_p(arena, idx) == Some(idx)
}

/// Points whichever child slot of `p` currently holds `old` at `new`.
///
/// The slot is located by comparing against both of `p`'s child links; the
/// anchor only ever owns through its left slot.
pub(crate) fn replace_child<N: Node>(arena: &mut [N], p: u32, old: u32, new: Option<u32>) {
    if get_l(arena, p) == Some(old) {
        set_l(arena, p, new);
    } else {
        set_r(arena, p, new);
    }
}

/// Leftmost node of the subtree rooted at `idx`.
pub fn leftmost<N: Node>(arena: &[N], mut idx: u32) -> u32 {
    while let Some(l) = get_l(arena, idx) {
        idx = l;
    }
    idx
}

/// Rightmost node of the subtree rooted at `idx`.
pub fn rightmost<N: Node>(arena: &[N], mut idx: u32) -> u32 {
    while let Some(r) = get_r(arena, idx) {
        idx = r;
    }
    idx
}

/// In-order successor. Returns the anchor after the last node; the anchor
/// is its own successor.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> u32 {
    if let Some(r) = get_r(arena, curr) {
        return leftmost(arena, r);
    }
    let mut p = parent(arena, curr);
    while get_r(arena, p) == Some(curr) {
        curr = p;
        p = parent(arena, p);
    }
    p
}

/// In-order predecessor. Returns the anchor before the first node, and the
/// last node before the anchor.
pub fn prev<N: Node>(arena: &[N], mut curr: u32) -> u32 {
    if let Some(l) = get_l(arena, curr) {
        return rightmost(arena, l);
    }
    let mut p = parent(arena, curr);
    while !is_anchor(arena, p) && get_l(arena, p) == Some(curr) {
        curr = p;
        p = parent(arena, p);
    }
    p
}

/// Post-order successor of a node whose left descendants have all been
/// visited.
///
/// Only valid during a teardown walk that started at the leftmost node of
/// the subtree.
pub fn postorder_next<N: Node>(arena: &[N], curr: u32) -> u32 {
    let mut q = parent(arena, curr);
    if get_l(arena, q) == Some(curr) {
        if let Some(r) = get_r(arena, q) {
            q = r;
            loop {
                match (get_l(arena, q), get_r(arena, q)) {
                    (Some(l), _) => q = l,
                    (None, Some(r)) => q = r,
                    (None, None) => break,
                }
            }
        }
    }
    q
}

/// Visits every node of the subtree rooted at `root` in post-order, handing
/// each index to `release` after its successor has been computed.
///
/// Runs in O(n) time without recursion; `release` may clear the links of the
/// node it receives.
pub fn delete_subtree<N, F>(arena: &mut [N], root: u32, mut release: F)
where
    N: Node,
    F: FnMut(&mut [N], u32),
{
    let mut curr = leftmost(arena, root);
    while curr != root {
        let succ = postorder_next(arena, curr);
        release(arena, curr);
        curr = succ;
    }
    release(arena, root);
}

/// Zero-based in-order position of `idx`. The anchor ranks after every
/// element.
pub fn rank<N: SizedNode>(arena: &[N], idx: u32) -> usize {
    if is_anchor(arena, idx) {
        return size(arena, get_l(arena, idx));
    }
    let mut pos = size(arena, get_l(arena, idx));
    let mut curr = idx;
    let mut p = parent(arena, curr);
    while !is_anchor(arena, p) {
        if get_r(arena, p) == Some(curr) {
            pos += size(arena, get_l(arena, p)) + 1;
        }
        curr = p;
        p = parent(arena, p);
    }
    pos
}

/// Node at zero-based in-order position `pos` under `root`.
pub fn select<N: SizedNode>(arena: &[N], root: Option<u32>, mut pos: usize) -> Option<u32> {
    let mut curr = root;
    while let Some(i) = curr {
        let ls = size(arena, get_l(arena, i));
        if pos < ls {
            curr = get_l(arena, i);
        } else if pos == ls {
            return Some(i);
        } else {
            pos -= ls + 1;
            curr = get_r(arena, i);
        }
    }
    None
}

/// Number of nodes on the longest root-to-leaf path.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let Some(root) = root else {
        return 0;
    };
    let mut stack = vec![(root, 1usize)];
    let mut max = 0;
    while let Some((i, depth)) = stack.pop() {
        max = max.max(depth);
        if let Some(l) = get_l(arena, i) {
            stack.push((l, depth + 1));
        }
        if let Some(r) = get_r(arena, i) {
            stack.push((r, depth + 1));
        }
    }
    max
}
