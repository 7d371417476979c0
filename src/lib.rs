//! Sum of distances in a tree.
//!
//! For a tree on nodes `0..n`, [`compute_distance_sums`] returns, for every
//! node, the total number of edges on the paths from it to all other nodes.
//! Runs in `O(n)` using a subtree-size pass followed by a rerooting pass.
//!
//! ```
//! use treedist::{compute_distance_sums, Edge};
//!
//! let edges = [Edge(0, 1), Edge(0, 2), Edge(2, 3), Edge(2, 4), Edge(2, 5)];
//! assert_eq!(compute_distance_sums(6, &edges)?, vec![8, 12, 6, 10, 10, 10]);
//! # Ok::<(), treedist::DomainError>(())
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{DistanceSum, DomainError, DomainResult, Edge, NodeId};

use domain::{DistanceAggregator, TreeBuilder};

/// Sum of distances from every node to all others.
///
/// Requires `node_count >= 1`, exactly `node_count - 1` edges, endpoints in
/// `0..node_count` and no self-loops; violations are returned as
/// [`DomainError`]. Inputs that pass these checks but are not a tree yield
/// [`DomainError::DisconnectedOrCyclicGraph`].
pub fn compute_distance_sums(
    node_count: usize,
    edges: &[Edge],
) -> DomainResult<Vec<DistanceSum>> {
    let adjacency = TreeBuilder::new().build(node_count, edges)?;
    let aggregation = DistanceAggregator::new().aggregate(&adjacency)?;
    Ok(aggregation.into_distance_sums())
}
