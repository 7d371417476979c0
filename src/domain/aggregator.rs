//! Distance aggregator: sum of distances from every node in linear time.
//!
//! Pass 1 walks the tree in post-order from the root. Every node adds its
//! depth to the root's sum and its subtree size to its parent's.
//!
//! Pass 2 walks in pre-order and moves the reference point across each edge
//! `u -> v`. The `size(v)` nodes below `v` get one step closer and the other
//! `N - size(v)` get one step further away:
//!
//! ```text
//! sum(v) = sum(u) - size(v) + (N - size(v))
//! ```
//!
//! Both passes use explicit stacks, so path-shaped trees cannot exhaust the
//! call stack.

use tracing::{debug, instrument, trace};

use crate::domain::adjacency::Adjacency;
use crate::domain::entities::{Aggregation, DistanceSum, NodeId};
use crate::domain::error::{DomainError, DomainResult};

/// Runs both passes from a fixed root.
///
/// The root only affects the internal visiting order; the per-node results
/// are the same for every choice.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceAggregator {
    root: NodeId,
}

impl DistanceAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(root: NodeId) -> Self {
        Self { root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    #[instrument(level = "debug", skip(adjacency), fields(nodes = adjacency.node_count()))]
    pub fn aggregate(&self, adjacency: &Adjacency) -> DomainResult<Aggregation> {
        let node_count = adjacency.node_count();
        if node_count == 0 {
            return Err(DomainError::EmptyTree);
        }
        if self.root >= node_count {
            return Err(DomainError::InvalidRoot {
                root: self.root,
                node_count,
            });
        }

        let mut aggregation = Aggregation {
            root: self.root,
            parents: vec![None; node_count],
            subtree_sizes: vec![1; node_count],
            distance_sums: vec![0; node_count],
        };
        if node_count == 1 {
            return Ok(aggregation);
        }

        self.accumulate_subtrees(adjacency, &mut aggregation)?;
        self.reroot(adjacency, &mut aggregation)?;

        debug!(
            "aggregated {} nodes, root sum {}",
            node_count, aggregation.distance_sums[self.root]
        );
        Ok(aggregation)
    }

    /// Post-order pass: subtree sizes, parents and the root's distance sum.
    fn accumulate_subtrees(
        &self,
        adjacency: &Adjacency,
        aggregation: &mut Aggregation,
    ) -> DomainResult<()> {
        let mut visited = 0;
        let mut root_sum: DistanceSum = 0;

        for visit in adjacency.iter_postorder(self.root) {
            visited += 1;
            root_sum += visit.depth as DistanceSum;
            if let Some(parent) = visit.parent {
                aggregation.parents[visit.node] = Some(parent);
                aggregation.subtree_sizes[parent] += aggregation.subtree_sizes[visit.node];
            }
        }

        Self::ensure_spanning(visited, adjacency.node_count())?;
        aggregation.distance_sums[self.root] = root_sum;
        trace!("pass 1 done: root sum {}", root_sum);
        Ok(())
    }

    /// Pre-order pass: derive each child's sum from its finalized parent.
    fn reroot(&self, adjacency: &Adjacency, aggregation: &mut Aggregation) -> DomainResult<()> {
        let n = adjacency.node_count() as DistanceSum;
        let mut visited = 0;

        for visit in adjacency.iter_preorder(self.root) {
            visited += 1;
            if let Some(parent) = visit.parent {
                let size = aggregation.subtree_sizes[visit.node] as DistanceSum;
                // (sum(u) + N) >= 2 * size(v) because sum(v) is non-negative.
                aggregation.distance_sums[visit.node] =
                    aggregation.distance_sums[parent] + n - 2 * size;
            }
        }

        Self::ensure_spanning(visited, adjacency.node_count())
    }

    fn ensure_spanning(visited: usize, node_count: usize) -> DomainResult<()> {
        if visited != node_count {
            return Err(DomainError::DisconnectedOrCyclicGraph {
                visited,
                node_count,
            });
        }
        Ok(())
    }
}
