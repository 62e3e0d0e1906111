use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("node storage could not grow: {0}")]
    Alloc(#[from] TryReserveError),
    #[error("arena index space exhausted")]
    IndexSpaceExhausted,
    #[error("node {node}: {reason}")]
    BrokenLink { node: u32, reason: &'static str },
    #[error("node {node}: stored size {stored}, subtree holds {actual}")]
    SizeMismatch {
        node: u32,
        stored: usize,
        actual: usize,
    },
    #[error("node {node}: subtree sizes {left}/{right} violate weight balance")]
    Unbalanced { node: u32, left: usize, right: usize },
    #[error("tree reaches {counted} nodes, node storage holds {stored} elements")]
    LengthMismatch { counted: usize, stored: usize },
}
