use crate::types::{Node, SizedNode};

/// Arena slot of a weight-balanced tree.
///
/// `v` is `None` for the anchor and for vacant slots waiting on the free
/// list; every linked element node holds `Some`.
#[derive(Clone, Debug)]
pub struct WbNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    /// Number of nodes in the subtree rooted here, including this one.
    pub size: usize,
    pub v: Option<T>,
}

impl<T> WbNode<T> {
    /// Unlinked singleton holding `v`.
    pub fn new(v: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            size: 1,
            v: Some(v),
        }
    }

    /// Value of a linked element node.
    ///
    /// # Panics
    ///
    /// Panics on the anchor or a vacant slot.
    #[inline]
    pub fn value(&self) -> &T {
        self.v.as_ref().expect("node holds a value")
    }

    /// Anchor node living in slot `index`: holds no value and is its own
    /// parent.
    pub fn anchor(index: u32) -> Self {
        Self {
            p: Some(index),
            l: None,
            r: None,
            size: 0,
            v: None,
        }
    }
}

impl<T> Node for WbNode<T> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<T> SizedNode for WbNode<T> {
    fn size(&self) -> usize {
        self.size
    }

    fn set_size(&mut self, size: usize) {
        self.size = size;
    }
}
