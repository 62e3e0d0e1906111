//! Binary search against a caller-maintained partition.
//!
//! The descents never compare against a fixed key. Instead a predicate says,
//! for the node under inspection, whether the boundary lies to its right.
//! When the in-order sequence is partitioned so that the predicate holds on
//! a prefix and fails on the rest, the descent lands on the first node of
//! the suffix (or the anchor when the suffix is empty). If the sequence is
//! not partitioned the result is an arbitrary node, but the tree is only
//! read.

use crate::types::Node;

use super::{get_l, get_r, next};

enum Step {
    Down(u32),
    Done(u32),
}

#[inline]
fn step<N: Node>(arena: &[N], curr: u32, right: bool) -> Step {
    if right {
        match get_r(arena, curr) {
            Some(r) => Step::Down(r),
            None => Step::Done(next(arena, curr)),
        }
    } else {
        match get_l(arena, curr) {
            Some(l) => Step::Down(l),
            None => Step::Done(curr),
        }
    }
}

/// Continues a descent at `curr` whose direction has already been decided.
fn resume<N, F>(arena: &[N], curr: u32, right: bool, mut go_right: F) -> u32
where
    N: Node,
    F: FnMut(u32) -> bool,
{
    let mut dir = right;
    let mut curr = curr;
    loop {
        match step(arena, curr, dir) {
            Step::Down(child) => {
                curr = child;
                dir = go_right(curr);
            }
            Step::Done(found) => return found,
        }
    }
}

/// First node in `root`'s subtree (or its in-order successor) for which
/// `go_right` is false.
pub fn partition_point<N, F>(arena: &[N], root: u32, mut go_right: F) -> u32
where
    N: Node,
    F: FnMut(u32) -> bool,
{
    let right = go_right(root);
    resume(arena, root, right, go_right)
}

/// First node whose value does not compare `Less`.
pub fn lower_bound<N, F>(arena: &[N], root: u32, mut cmp: F) -> u32
where
    N: Node,
    F: FnMut(u32) -> std::cmp::Ordering,
{
    partition_point(arena, root, |i| cmp(i).is_lt())
}

/// First node whose value compares `Greater`.
pub fn upper_bound<N, F>(arena: &[N], root: u32, mut cmp: F) -> u32
where
    N: Node,
    F: FnMut(u32) -> std::cmp::Ordering,
{
    partition_point(arena, root, |i| cmp(i).is_le())
}

/// Runs two partition descents at once.
///
/// `classify` returns the pair of `go_right` decisions for the lower and the
/// upper boundary. Both descents share a path from the root until the
/// decisions first differ, then each finishes on its own.
pub fn bounds<N, F>(arena: &[N], root: u32, mut classify: F) -> (u32, u32)
where
    N: Node,
    F: FnMut(u32) -> (bool, bool),
{
    let mut curr = root;
    loop {
        let (lo, hi) = classify(curr);
        if lo != hi {
            let lower = resume(arena, curr, lo, |i| classify(i).0);
            let upper = resume(arena, curr, hi, |i| classify(i).1);
            return (lower, upper);
        }
        match step(arena, curr, lo) {
            Step::Down(child) => curr = child,
            Step::Done(found) => return (found, found),
        }
    }
}
