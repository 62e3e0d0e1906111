//! Weight-balanced sequence tree with partition-driven binary search.
//!
//! [`Tree`] is an ordered, mutable sequence: elements sit where they were
//! inserted, not where a key order would put them. Binary search takes a
//! three-way comparator per call and only assumes that, at that instant, the
//! sequence is partitioned by it (`Less` prefix, `Equal` run, `Greater`
//! suffix). This suits sweep-line algorithms such as Bentley–Ottmann, whose
//! status structure reorders as the sweep advances but is always a valid
//! partition when queried.
//!
//! Balance follows Hirai and Yamamoto, *Balancing weight-balanced trees*
//! (JFP 21(3), 2011) with Δ = 3, Γ = 2, giving O(log n) height, insertion,
//! erasure, position exchange and search.
//!
//! Nodes live in an arena and link to each other through `Option<u32>`
//! indices. A [`Cursor`] is such an index, so it stays valid across every
//! operation except erasing the element it denotes.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] and [`SizedNode`] link traits |
//! | [`util`] | node engine: traversal, rotations, splice, exchange, search |
//! | [`arena`] | slot storage with a free list |
//! | [`tree`] | the public [`Tree`] container |
//! | [`cursor`] | [`Cursor`], [`Iter`], [`IntoIter`] |
//! | [`print`] | structural dump used by [`Tree::print`] |

pub mod arena;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod node;
pub mod print;
pub mod tree;
pub mod types;
pub mod util;

pub use cursor::{Cursor, IntoIter, Iter};
pub use error::Error;
pub use node::WbNode;
pub use tree::Tree;
pub use types::{Node, SizedNode};
