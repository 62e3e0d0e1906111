use std::cmp::Ordering;
use std::fmt;
use std::ops::{Index, IndexMut};

use tracing::{debug, warn};

use crate::arena::Arena;
use crate::constants::{ANCHOR, DELTA};
use crate::cursor::{Cursor, IntoIter, Iter};
use crate::error::Error;
use crate::node::WbNode;
use crate::types::Node;
use crate::{print, util};

/// Ordered sequence backed by a weight-balanced tree.
///
/// Order is positional: the tree never compares elements on its own. Binary
/// search takes a caller-supplied three-way comparator per call and assumes
/// the sequence is partitioned by it at that moment, which lets the
/// relative order of elements change between searches (sweep-line status
/// structures).
///
/// # Time Complexity
///
/// | Operation                                   | Complexity |
/// |---------------------------------------------|------------|
/// | `size` / `is_empty` / `end`                 | O(1)       |
/// | `begin` / `next` / `prev`                   | O(log N)   |
/// | `insert` / `erase` / `exchange_elements`    | O(log N)   |
/// | `lower_bound` / `upper_bound`               | O(log N)   |
/// | `equal_range` / `range_between`             | O(log N)   |
/// | `nth` / `position`                          | O(log N)   |
///
/// # Examples
///
/// ```rust
/// use wb_tree::Tree;
///
/// let mut tree = Tree::new();
/// for v in [5, 1, 3] {
///     let pos = tree.lower_bound(|x: &i32| x.cmp(&v));
///     tree.insert(pos, v);
/// }
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
///
/// let (from, to) = tree.equal_range(|x| x.cmp(&3));
/// assert_eq!(tree.range(from, to).collect::<Vec<_>>(), vec![&3]);
/// ```
#[derive(Clone)]
pub struct Tree<T> {
    arena: Arena<T>,
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    /// Creates an empty tree with room for `capacity` elements before the
    /// node storage grows.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
        }
    }

    pub fn reserve(&mut self, additional: usize) {
        self.arena.reserve(additional);
    }

    #[inline]
    fn nodes(&self) -> &[WbNode<T>] {
        self.arena.nodes()
    }

    #[inline]
    fn root(&self) -> Option<u32> {
        self.nodes()[ANCHOR as usize].l()
    }

    /// Panics unless `c` denotes a linked node of this tree (element or
    /// anchor).
    fn check(&self, c: Cursor) -> u32 {
        assert!(!c.is_singular(), "singular cursor used on a tree");
        let idx = c.node();
        let linked = self
            .nodes()
            .get(idx as usize)
            .is_some_and(|n| n.p().is_some());
        assert!(linked, "cursor {idx} does not denote a live node");
        idx
    }

    /// Like [`Tree::check`], additionally rejecting `end()`.
    fn check_element(&self, c: Cursor) -> u32 {
        let idx = self.check(c);
        assert_ne!(idx, ANCHOR, "end() does not denote an element");
        idx
    }

    #[inline]
    pub fn size(&self) -> usize {
        util::size(self.nodes(), self.root())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root().is_none()
    }

    /// Cursor to the first element, or `end()` when empty.
    pub fn begin(&self) -> Cursor {
        Cursor::new(util::leftmost(self.nodes(), ANCHOR))
    }

    /// Cursor one past the last element. Also the position before the first
    /// element: `prev(begin()) == end()`.
    #[inline]
    pub fn end(&self) -> Cursor {
        Cursor::new(ANCHOR)
    }

    pub fn first(&self) -> Option<&T> {
        self.get(self.begin())
    }

    pub fn last(&self) -> Option<&T> {
        self.get(self.prev(self.end()))
    }

    /// Element at `c`, or `None` for `end()` and singular or stale cursors.
    pub fn get(&self, c: Cursor) -> Option<&T> {
        self.nodes().get(c.node() as usize)?.v.as_ref()
    }

    pub fn get_mut(&mut self, c: Cursor) -> Option<&mut T> {
        self.arena.nodes_mut().get_mut(c.node() as usize)?.v.as_mut()
    }

    /// In-order successor. `next(end())` is `end()`.
    pub fn next(&self, c: Cursor) -> Cursor {
        let idx = self.check(c);
        Cursor::new(util::next(self.nodes(), idx))
    }

    /// In-order predecessor. `prev(begin())` is `end()` and `prev(end())` is
    /// the last element.
    pub fn prev(&self, c: Cursor) -> Cursor {
        let idx = self.check(c);
        Cursor::new(util::prev(self.nodes(), idx))
    }

    /// Inserts `value` immediately before `pos` (an element or `end()`) and
    /// returns its cursor. No existing cursor is invalidated.
    pub fn insert(&mut self, pos: Cursor, value: T) -> Cursor {
        let pos = self.check(pos);
        let node = self.arena.alloc(value);
        util::insert_before(self.arena.nodes_mut(), pos, node);
        Cursor::new(node)
    }

    /// Fallible [`Tree::insert`]. When node storage cannot grow the error is
    /// returned and the tree is left untouched.
    pub fn try_insert(&mut self, pos: Cursor, value: T) -> Result<Cursor, Error> {
        let pos = self.check(pos);
        let node = self.arena.try_alloc(value).inspect_err(|err| {
            warn!(size = self.size(), %err, "node allocation failed");
        })?;
        util::insert_before(self.arena.nodes_mut(), pos, node);
        Ok(Cursor::new(node))
    }

    pub fn push_front(&mut self, value: T) -> Cursor {
        let pos = self.begin();
        self.insert(pos, value)
    }

    pub fn push_back(&mut self, value: T) -> Cursor {
        self.insert(self.end(), value)
    }

    /// Removes the element at `pos` and returns the cursor of the element
    /// that followed it. Only cursors equal to `pos` are invalidated.
    pub fn erase(&mut self, pos: Cursor) -> Cursor {
        self.unlink(pos).1
    }

    /// Removes the element at `pos` and returns it.
    pub fn remove(&mut self, pos: Cursor) -> T {
        self.unlink(pos).0
    }

    fn unlink(&mut self, pos: Cursor) -> (T, Cursor) {
        let node = self.check_element(pos);
        let following = util::next(self.nodes(), node);
        util::erase(self.arena.nodes_mut(), node);
        let value = self
            .arena
            .release(node)
            .expect("erased element holds a value");
        (value, Cursor::new(following))
    }

    /// Swaps the sequence positions of the elements at `i` and `j` without
    /// moving any other element. Both cursors keep denoting their element,
    /// now found at the other's former position.
    pub fn exchange_elements(&mut self, i: Cursor, j: Cursor) {
        let i = self.check_element(i);
        let j = self.check_element(j);
        util::exchange(self.arena.nodes_mut(), i, j);
    }

    /// First element `x` with `cmp(x) != Less`, or `end()`.
    ///
    /// The sequence must be partitioned by `cmp`: `Less` on a prefix,
    /// `Equal` on a middle run, `Greater` on the rest. Otherwise the result
    /// is unspecified (but the tree is not modified).
    pub fn lower_bound<F>(&self, mut cmp: F) -> Cursor
    where
        F: FnMut(&T) -> Ordering,
    {
        let Some(root) = self.root() else {
            return self.end();
        };
        let nodes = self.nodes();
        Cursor::new(util::lower_bound(nodes, root, |i| {
            cmp(nodes[i as usize].value())
        }))
    }

    /// First element `x` with `cmp(x) == Greater`, or `end()`. Same
    /// precondition as [`Tree::lower_bound`].
    pub fn upper_bound<F>(&self, mut cmp: F) -> Cursor
    where
        F: FnMut(&T) -> Ordering,
    {
        let Some(root) = self.root() else {
            return self.end();
        };
        let nodes = self.nodes();
        Cursor::new(util::upper_bound(nodes, root, |i| {
            cmp(nodes[i as usize].value())
        }))
    }

    /// `(lower_bound(cmp), upper_bound(cmp))`: the run of elements comparing
    /// `Equal`.
    pub fn equal_range<F>(&self, mut cmp: F) -> (Cursor, Cursor)
    where
        F: FnMut(&T) -> Ordering,
    {
        let Some(root) = self.root() else {
            return (self.end(), self.end());
        };
        let nodes = self.nodes();
        let (lo, hi) = util::bounds(nodes, root, |i| {
            let ord = cmp(nodes[i as usize].value());
            (ord.is_lt(), ord.is_le())
        });
        (Cursor::new(lo), Cursor::new(hi))
    }

    /// `(lower_bound(lcmp), upper_bound(rcmp))`: the elements from the first
    /// one not below `lcmp`'s target to the last one not above `rcmp`'s.
    ///
    /// The sequence must be partitioned by both comparators, and the lower
    /// boundary must not come after the upper one.
    pub fn range_between<L, R>(&self, mut lcmp: L, mut rcmp: R) -> (Cursor, Cursor)
    where
        L: FnMut(&T) -> Ordering,
        R: FnMut(&T) -> Ordering,
    {
        let Some(root) = self.root() else {
            return (self.end(), self.end());
        };
        let nodes = self.nodes();
        let (lo, hi) = util::bounds(nodes, root, |i| {
            let v = nodes[i as usize].value();
            (lcmp(v).is_lt(), rcmp(v).is_le())
        });
        (Cursor::new(lo), Cursor::new(hi))
    }

    /// Cursor to the element at zero-based position `index`, or `end()`.
    pub fn nth(&self, index: usize) -> Cursor {
        util::select(self.nodes(), self.root(), index).map_or(self.end(), Cursor::new)
    }

    /// Zero-based position of `c`; `size()` for `end()`.
    pub fn position(&self, c: Cursor) -> usize {
        let idx = self.check(c);
        util::rank(self.nodes(), idx)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.nodes(), self.begin().node(), ANCHOR, self.size())
    }

    /// Elements in `[from, to)`. `to` must not precede `from`.
    pub fn range(&self, from: Cursor, to: Cursor) -> Iter<'_, T> {
        let len = self.position(to).saturating_sub(self.position(from));
        Iter::new(self.nodes(), from.node(), to.node(), len)
    }

    pub fn for_each_mut<F: FnMut(&mut T)>(&mut self, mut f: F) {
        let mut curr = util::leftmost(self.nodes(), ANCHOR);
        while curr != ANCHOR {
            let succ = util::next(self.nodes(), curr);
            if let Some(v) = self.arena.nodes_mut()[curr as usize].v.as_mut() {
                f(v);
            }
            curr = succ;
        }
    }

    /// Drops every element in post-order and resets the node storage.
    pub fn clear(&mut self) {
        if let Some(root) = self.root() {
            let mut released = 0usize;
            util::delete_subtree(self.arena.nodes_mut(), root, |nodes, i| {
                nodes[i as usize].v = None;
                released += 1;
            });
            debug!(released, "cleared tree");
        }
        self.arena.reset();
    }

    /// Number of nodes on the longest root-to-leaf path; `0` when empty.
    pub fn height(&self) -> usize {
        util::height(self.nodes(), self.root())
    }

    /// Checks parent links, subtree sizes and weight balance of every node,
    /// and that every stored element is reachable from the root.
    pub fn assert_valid(&self) -> Result<(), Error> {
        let nodes = self.nodes();
        let anchor = &nodes[ANCHOR as usize];
        if anchor.p() != Some(ANCHOR) || anchor.r().is_some() {
            return Err(Error::BrokenLink {
                node: ANCHOR,
                reason: "anchor must be its own parent with no right child",
            });
        }
        let Some(root) = anchor.l() else {
            return match self.arena.live() {
                0 => Ok(()),
                stored => Err(Error::LengthMismatch { counted: 0, stored }),
            };
        };
        if nodes[root as usize].p() != Some(ANCHOR) {
            return Err(Error::BrokenLink {
                node: root,
                reason: "root is not linked to the anchor",
            });
        }

        // Post-order over an explicit stack so sizes of both children are
        // known when a node is checked.
        let mut reached = 0usize;
        let mut stack = vec![(root, false)];
        while let Some((i, expanded)) = stack.pop() {
            let node = &nodes[i as usize];
            if node.v.is_none() {
                return Err(Error::BrokenLink {
                    node: i,
                    reason: "linked node holds no value",
                });
            }
            if !expanded {
                reached += 1;
                stack.push((i, true));
                for child in [node.l(), node.r()].into_iter().flatten() {
                    if nodes[child as usize].p() != Some(i) {
                        return Err(Error::BrokenLink {
                            node: child,
                            reason: "parent link does not point back",
                        });
                    }
                    stack.push((child, false));
                }
                continue;
            }
            let left = util::size(nodes, node.l());
            let right = util::size(nodes, node.r());
            if node.size != left + right + 1 {
                return Err(Error::SizeMismatch {
                    node: i,
                    stored: node.size,
                    actual: left + right + 1,
                });
            }
            let heavy = left.max(right);
            let light = left.min(right);
            if DELTA * (light + 1) < heavy + 1 {
                return Err(Error::Unbalanced { node: i, left, right });
            }
        }

        if reached != self.arena.live() {
            return Err(Error::LengthMismatch {
                counted: reached,
                stored: self.arena.live(),
            });
        }
        Ok(())
    }
}

impl<T: fmt::Debug> Tree<T> {
    /// Indented dump of the tree shape, one `value [subtree size]` per line.
    pub fn print(&self) -> String {
        match self.root() {
            Some(root) => print::print_node(self.nodes(), root, ""),
            None => "∅".to_string(),
        }
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T> Index<Cursor> for Tree<T> {
    type Output = T;

    fn index(&self, c: Cursor) -> &T {
        self.get(c).expect("cursor does not denote an element")
    }
}

impl<T> IndexMut<Cursor> for Tree<T> {
    fn index_mut(&mut self, c: Cursor) -> &mut T {
        self.get_mut(c).expect("cursor does not denote an element")
    }
}

impl<T> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.push_back(v);
        }
    }
}

impl<T> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut tree = Self::with_capacity(iter.size_hint().0);
        tree.extend(iter);
        tree
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let front = self.begin().node();
        let len = self.size();
        IntoIter::new(self.arena.into_nodes(), front, ANCHOR, len)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
