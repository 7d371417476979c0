//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::entities::{Edge, NodeId};

/// Domain errors represent malformed trees and failed consistency checks.
/// They carry enough context for an adapter to print a useful diagnostic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("edge #{index} {edge} references a node outside 0..{node_count}")]
    OutOfRangeNode {
        index: usize,
        edge: Edge,
        node_count: usize,
    },

    #[error("edge #{index} is a self-loop on node {node}")]
    SelfLoop { index: usize, node: NodeId },

    #[error("expected {expected} edges, got {actual}")]
    WrongEdgeCount { expected: usize, actual: usize },

    #[error("a tree needs at least one node")]
    EmptyTree,

    #[error("node count {node_count} exceeds the supported maximum of {max}")]
    NodeCountTooLarge { node_count: usize, max: usize },

    #[error("root {root} is not a node of a tree with {node_count} nodes")]
    InvalidRoot { root: NodeId, node_count: usize },

    #[error("graph is disconnected or cyclic: reached {visited} of {node_count} nodes")]
    DisconnectedOrCyclicGraph { visited: usize, node_count: usize },

    #[error("distance sums total {total}, edge identity expects {expected}")]
    IdentityViolated { total: u64, expected: u64 },

    #[error("node {node}: brute force gives {expected}, aggregator gives {actual}")]
    BruteForceMismatch {
        node: NodeId,
        expected: u64,
        actual: u64,
    },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
