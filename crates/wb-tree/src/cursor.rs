use std::iter::FusedIterator;

use crate::constants::NIL;
use crate::node::WbNode;
use crate::util;

/// Identity of a position in a [`Tree`](crate::Tree): an element node or the
/// anchor (`end()`).
///
/// A cursor is a plain slot index and stays valid across inserts, erases of
/// other elements and exchanges; it is only invalidated by erasing the
/// element it denotes. Equality is node identity.
///
/// `Cursor::default()` is singular: it denotes nothing and may only be
/// compared. Passing it to any tree operation panics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor {
    node: u32,
}

impl Cursor {
    #[inline]
    pub(crate) fn new(node: u32) -> Self {
        Self { node }
    }

    #[inline]
    pub(crate) fn node(self) -> u32 {
        self.node
    }

    #[inline]
    pub fn is_singular(self) -> bool {
        self.node == NIL
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self { node: NIL }
    }
}

/// Borrowing in-order iterator over `[front, back)`.
pub struct Iter<'a, T> {
    nodes: &'a [WbNode<T>],
    front: u32,
    back: u32,
    len: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(nodes: &'a [WbNode<T>], front: u32, back: u32, len: usize) -> Self {
        Self {
            nodes,
            front,
            back,
            len,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self::new(self.nodes, self.front, self.back, self.len)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        let curr = self.front;
        self.front = util::next(self.nodes, curr);
        self.len -= 1;
        Some(self.nodes[curr as usize].value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        self.back = util::prev(self.nodes, self.back);
        self.len -= 1;
        Some(self.nodes[self.back as usize].value())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning in-order iterator.
pub struct IntoIter<T> {
    nodes: Vec<WbNode<T>>,
    front: u32,
    back: u32,
    len: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(nodes: Vec<WbNode<T>>, front: u32, back: u32, len: usize) -> Self {
        Self {
            nodes,
            front,
            back,
            len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let curr = self.front;
        // Taking the value leaves the links intact for the walk.
        self.front = util::next(&self.nodes, curr);
        self.len -= 1;
        self.nodes[curr as usize].v.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.back = util::prev(&self.nodes, self.back);
        self.len -= 1;
        self.nodes[self.back as usize].v.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
