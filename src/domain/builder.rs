//! Tree builder: validates an edge list and turns it into adjacency lists.

use tracing::{debug, instrument};

use crate::domain::adjacency::Adjacency;
use crate::domain::entities::{Edge, NodeId};
use crate::domain::error::{DomainError, DomainResult};

/// Largest node count for which `N * N` is guaranteed to fit in a `u64`.
pub const MAX_NODE_COUNT: usize = u32::MAX as usize;

/// Constructs adjacency lists from a flat edge list.
///
/// Checks bounds, self-loops and the edge count. Connectivity and acyclicity
/// are a precondition; the aggregator detects their violation while
/// traversing.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    max_nodes: usize,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            max_nodes: MAX_NODE_COUNT,
        }
    }

    /// Lower the accepted node count. Values above [`MAX_NODE_COUNT`] are clamped.
    pub fn with_max_nodes(max_nodes: usize) -> Self {
        Self {
            max_nodes: max_nodes.min(MAX_NODE_COUNT),
        }
    }

    pub fn max_nodes(&self) -> usize {
        self.max_nodes
    }

    /// Build the adjacency of a tree with `node_count` nodes.
    ///
    /// Edges are checked in order: each endpoint must lie in `0..node_count`,
    /// then the endpoints must differ. The list length is checked last.
    #[instrument(level = "debug", skip(self, edges), fields(edge_count = edges.len()))]
    pub fn build(&self, node_count: usize, edges: &[Edge]) -> DomainResult<Adjacency> {
        if node_count == 0 {
            return Err(DomainError::EmptyTree);
        }
        if node_count > self.max_nodes {
            return Err(DomainError::NodeCountTooLarge {
                node_count,
                max: self.max_nodes,
            });
        }

        let endpoints = edges
            .iter()
            .enumerate()
            .map(|(index, edge)| -> DomainResult<(NodeId, NodeId)> {
                let (a, b) = Self::checked_endpoints(index, edge, node_count)?;
                if a == b {
                    return Err(DomainError::SelfLoop { index, node: a });
                }
                Ok((a, b))
            })
            .collect::<DomainResult<Vec<_>>>()?;

        let expected = node_count - 1;
        if edges.len() != expected {
            return Err(DomainError::WrongEdgeCount {
                expected,
                actual: edges.len(),
            });
        }

        // per-node storage only after the edge count matches
        let mut adjacency = Adjacency::with_nodes(node_count);
        for (a, b) in endpoints {
            adjacency.insert_edge(a, b);
        }

        debug!("adjacency built: {} nodes, {} edges", node_count, expected);
        Ok(adjacency)
    }

    fn checked_endpoints(
        index: usize,
        edge: &Edge,
        node_count: usize,
    ) -> DomainResult<(NodeId, NodeId)> {
        let in_range = |label: i64| {
            usize::try_from(label)
                .ok()
                .filter(|&node| node < node_count)
        };
        let (a, b) = edge.endpoints();
        match (in_range(a), in_range(b)) {
            (Some(a), Some(b)) => Ok((a, b)),
            _ => Err(DomainError::OutOfRangeNode {
                index,
                edge: *edge,
                node_count,
            }),
        }
    }
}
