//! Slot storage for tree nodes.
//!
//! Slot [`ANCHOR`] always holds the anchor. Released slots go on a free list
//! and are handed out again by later allocations; an index issued to a live
//! node stays valid until that node is released.

use crate::constants::{ANCHOR, NIL};
use crate::error::Error;
use crate::node::WbNode;

#[derive(Clone, Debug)]
pub struct Arena<T> {
    nodes: Vec<WbNode<T>>,
    free: Vec<u32>,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.saturating_add(1));
        nodes.push(WbNode::anchor(ANCHOR));
        Self {
            nodes,
            free: Vec::new(),
        }
    }

    #[inline]
    pub fn nodes(&self) -> &[WbNode<T>] {
        &self.nodes
    }

    #[inline]
    pub fn nodes_mut(&mut self) -> &mut [WbNode<T>] {
        &mut self.nodes
    }

    /// Number of slots holding an element (linked or not).
    pub fn live(&self) -> usize {
        self.nodes.len() - 1 - self.free.len()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional.saturating_sub(self.free.len()));
    }

    /// Stores `v` as an unlinked singleton and returns its slot.
    pub fn alloc(&mut self, v: T) -> u32 {
        if let Some(idx) = self.free.pop() {
            self.nodes[idx as usize] = WbNode::new(v);
            return idx;
        }
        let idx = next_index(self.nodes.len()).expect("arena index space exhausted");
        self.nodes.push(WbNode::new(v));
        idx
    }

    /// Fallible [`Arena::alloc`]: on error nothing has been stored.
    pub fn try_alloc(&mut self, v: T) -> Result<u32, Error> {
        if let Some(idx) = self.free.pop() {
            self.nodes[idx as usize] = WbNode::new(v);
            return Ok(idx);
        }
        let idx = next_index(self.nodes.len())?;
        self.nodes.try_reserve(1)?;
        self.nodes.push(WbNode::new(v));
        Ok(idx)
    }

    /// Vacates slot `idx` and returns the value it held.
    pub fn release(&mut self, idx: u32) -> Option<T> {
        debug_assert_ne!(idx, ANCHOR, "the anchor is never released");
        let node = &mut self.nodes[idx as usize];
        node.p = None;
        node.l = None;
        node.r = None;
        node.size = 0;
        let v = node.v.take();
        self.free.push(idx);
        v
    }

    /// Drops every slot except the anchor, which is reset to an empty tree.
    pub fn reset(&mut self) {
        self.nodes.truncate(1);
        self.nodes[ANCHOR as usize] = WbNode::anchor(ANCHOR);
        self.free.clear();
    }

    pub(crate) fn into_nodes(self) -> Vec<WbNode<T>> {
        self.nodes
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn next_index(len: usize) -> Result<u32, Error> {
    match u32::try_from(len) {
        Ok(idx) if idx != NIL => Ok(idx),
        _ => Err(Error::IndexSpaceExhausted),
    }
}
