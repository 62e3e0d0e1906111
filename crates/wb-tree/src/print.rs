//! Structural dump of a tree for debugging.
//!
//! ```text
//! 3 [7]
//! ├─ 1 [3]
//! │  ├─ 0 [1]
//! │  └─ 2 [1]
//! └─ 5 [3]
//!    ├─ 4 [1]
//!    └─ 6 [1]
//! ```

use std::fmt::Debug;

use crate::node::WbNode;

pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;

/// Renders `children` as branches below a parent line, each child callback
/// receiving the indentation prefix for its own descendants.
pub fn print_tree(tab: &str, children: &[Option<&PrintChild<'_>>]) -> String {
    let mut out = String::new();
    let Some(last) = children.iter().rposition(Option::is_some) else {
        return out;
    };

    for (i, child_fn) in children.iter().enumerate().take(last + 1) {
        let Some(child_fn) = child_fn else {
            continue;
        };

        let is_last = i == last;
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        let child = child_fn(&child_tab);
        let branch = if is_last { "└─" } else { "├─" };

        out.push('\n');
        out.push_str(tab);
        out.push_str(branch);
        out.push(' ');
        out.push_str(&child);
    }

    out
}

/// One line per node: `value [subtree size]`, children indented below. An
/// absent child next to a present one is shown as `∅`.
pub fn print_node<T: Debug>(nodes: &[WbNode<T>], idx: u32, tab: &str) -> String {
    let node = &nodes[idx as usize];
    let head = format!("{:?} [{}]", node.value(), node.size);
    if node.l.is_none() && node.r.is_none() {
        return head;
    }
    let child = |link: Option<u32>| {
        move |tab: &str| match link {
            Some(i) => print_node(nodes, i, tab),
            None => "∅".to_string(),
        }
    };
    let left: &PrintChild<'_> = &child(node.l);
    let right: &PrintChild<'_> = &child(node.r);
    head + &print_tree(tab, &[Some(left), Some(right)])
}
