/// Weight-balance parameter Δ: a node is balanced while
/// `DELTA * (size(light) + 1) >= size(heavy) + 1`.
pub const DELTA: usize = 3;

/// Rotation parameter Γ: a single rotation suffices while
/// `size(inner) + 1 < GAMMA * (size(outer) + 1)`.
pub const GAMMA: usize = 2;

/// Arena slot of the anchor node. The anchor is its own parent and its left
/// child is the root.
pub const ANCHOR: u32 = 0;

/// Index value carried by a singular cursor. Never a valid slot.
pub(crate) const NIL: u32 = u32::MAX;
