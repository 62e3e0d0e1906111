use crate::types::SizedNode;

use super::{get_l, get_r, parent, set_l, set_p, set_r};

#[inline]
fn set_child<N: SizedNode>(arena: &mut [N], p: u32, left: bool, v: Option<u32>) {
    if left {
        set_l(arena, p, v);
    } else {
        set_r(arena, p, v);
    }
}

/// Swaps the structural positions of nodes `x` and `y`.
///
/// Every other node keeps its place, so in-order sequence sees the two
/// values trade positions. Subtree sizes belong to positions and are swapped
/// along with the links; no rebalancing is needed.
pub fn exchange<N: SizedNode>(arena: &mut [N], x: u32, y: u32) {
    if x == y {
        return;
    }

    let xs = arena[x as usize].size();
    let ys = arena[y as usize].size();
    arena[x as usize].set_size(ys);
    arena[y as usize].set_size(xs);

    let xp = parent(arena, x);
    let xl = get_l(arena, x);
    let xr = get_r(arena, x);
    let x_is_left = get_l(arena, xp) == Some(x);

    let yp = parent(arena, y);
    let yl = get_l(arena, y);
    let yr = get_r(arena, y);
    let y_is_left = get_l(arena, yp) == Some(y);

    if yl == Some(x) {
        set_l(arena, x, Some(y));
        set_p(arena, y, Some(x));
    } else {
        set_l(arena, x, yl);
        if let Some(yl) = yl {
            set_p(arena, yl, Some(x));
        }
    }

    if yr == Some(x) {
        set_r(arena, x, Some(y));
        set_p(arena, y, Some(x));
    } else {
        set_r(arena, x, yr);
        if let Some(yr) = yr {
            set_p(arena, yr, Some(x));
        }
    }

    if xl == Some(y) {
        set_l(arena, y, Some(x));
        set_p(arena, x, Some(y));
    } else {
        set_l(arena, y, xl);
        if let Some(xl) = xl {
            set_p(arena, xl, Some(y));
        }
    }

    if xr == Some(y) {
        set_r(arena, y, Some(x));
        set_p(arena, x, Some(y));
    } else {
        set_r(arena, y, xr);
        if let Some(xr) = xr {
            set_p(arena, xr, Some(y));
        }
    }

    // Owner slots were located before any link moved: when `x` and `y` are
    // siblings both live in the same parent.
    if xp != y {
        set_p(arena, y, Some(xp));
        set_child(arena, xp, x_is_left, Some(y));
    }
    if yp != x {
        set_p(arena, x, Some(yp));
        set_child(arena, yp, y_is_left, Some(x));
    }
}
