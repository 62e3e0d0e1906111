//! Node trait definitions.
//!
//! Every "pointer" in the tree is an `Option<u32>` index into a
//! [`Vec`]-backed arena. The engine functions in [`crate::util`] take the
//! arena as a slice of nodes and work purely with indices, so the same
//! algorithms run over any node layout that implements these traits.

/// Binary tree links (`p`, `l`, `r`).
///
/// The parent link is navigational only: ownership of a node is the single
/// child slot (or the anchor's root slot) that refers to it.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Subtree size bookkeeping used by the weight-balance rules.
///
/// Invariant: `size == size(l) + size(r) + 1` for every linked node once an
/// engine operation returns.
pub trait SizedNode: Node {
    fn size(&self) -> usize;
    fn set_size(&mut self, size: usize);
}
