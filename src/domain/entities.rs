//! Domain entities: core data structures

use std::fmt;

use serde::{Deserialize, Serialize};

/// Node label, `0..node_count`.
pub type NodeId = usize;

/// Sum of edge counts from one node to every other node.
pub type DistanceSum = u64;

/// Undirected edge as handed over by an input adapter.
///
/// Endpoints are signed so that negative labels survive parsing and can be
/// rejected with a proper diagnostic by the tree builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge(pub i64, pub i64);

impl Edge {
    pub fn new(a: i64, b: i64) -> Self {
        Self(a, b)
    }

    pub fn endpoints(&self) -> (i64, i64) {
        (self.0, self.1)
    }
}

impl From<(i64, i64)> for Edge {
    fn from((a, b): (i64, i64)) -> Self {
        Self(a, b)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.0, self.1)
    }
}

/// Outcome of both aggregation passes over a tree rooted at `root`.
///
/// All vectors are indexed by node and have length `node_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregation {
    pub(crate) root: NodeId,
    pub(crate) parents: Vec<Option<NodeId>>,
    pub(crate) subtree_sizes: Vec<usize>,
    pub(crate) distance_sums: Vec<DistanceSum>,
}

impl Aggregation {
    pub fn node_count(&self) -> usize {
        self.distance_sums.len()
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Parent of `node` in the rooted tree, `None` for the root.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parents.get(node).copied().flatten()
    }

    pub fn subtree_size(&self, node: NodeId) -> Option<usize> {
        self.subtree_sizes.get(node).copied()
    }

    pub fn distance_sum(&self, node: NodeId) -> Option<DistanceSum> {
        self.distance_sums.get(node).copied()
    }

    pub fn subtree_sizes(&self) -> &[usize] {
        &self.subtree_sizes
    }

    pub fn distance_sums(&self) -> &[DistanceSum] {
        &self.distance_sums
    }

    pub fn into_distance_sums(self) -> Vec<DistanceSum> {
        self.distance_sums
    }

    /// Sum over all nodes of their distance sums.
    pub fn total(&self) -> u64 {
        self.distance_sums.iter().sum()
    }

    /// Twice the sum, over every edge `(parent, v)`, of `size(v) * (N - size(v))`.
    ///
    /// Each edge lies on the path of exactly those pairs it separates, so this
    /// must equal [`Aggregation::total`].
    pub fn edge_identity_total(&self) -> u64 {
        let n = self.node_count() as u64;
        let cut_pairs: u64 = self
            .parents
            .iter()
            .zip(&self.subtree_sizes)
            .filter(|(parent, _)| parent.is_some())
            .map(|(_, &size)| size as u64 * (n - size as u64))
            .sum();
        2 * cut_pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_edge_when_displayed_then_uses_bracket_literal() {
        assert_eq!(Edge::new(3, -1).to_string(), "[3,-1]");
    }

    #[test]
    fn given_single_node_aggregation_when_totalling_then_both_sides_are_zero() {
        let agg = Aggregation {
            root: 0,
            parents: vec![None],
            subtree_sizes: vec![1],
            distance_sums: vec![0],
        };
        assert_eq!(agg.total(), 0);
        assert_eq!(agg.edge_identity_total(), 0);
        assert_eq!(agg.parent(0), None);
        assert_eq!(agg.distance_sum(1), None);
    }
}
