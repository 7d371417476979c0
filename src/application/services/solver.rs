//! Solver service
//!
//! Runs a [`Problem`] through the tree builder and the distance aggregator,
//! applying the configured limits and checks.

use termtree::Tree;
use tracing::{debug, info, instrument};

use crate::application::problem::Problem;
use crate::application::render::render_tree;
use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::{
    check_against_brute_force, check_edge_identity, Adjacency, Aggregation, DistanceAggregator,
    DistanceSum, NodeId, TreeBuilder,
};

/// Distance sums for one problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub distance_sums: Vec<DistanceSum>,
    pub root: NodeId,
    /// Whether the edge identity was checked
    pub verified: bool,
}

/// Result of `check`: both checks passed, numbers kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub node_count: usize,
    pub total: u64,
    pub identity_total: u64,
}

/// Service for solving sum-of-distances queries.
pub struct SolverService {
    settings: Settings,
    root: NodeId,
}

impl SolverService {
    /// Create a new solver service rooted at node 0.
    pub fn new(settings: Settings) -> Self {
        Self { settings, root: 0 }
    }

    /// Use `root` for the internal traversal. Results do not depend on it.
    pub fn with_root(mut self, root: NodeId) -> Self {
        self.root = root;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[instrument(level = "debug", skip_all, fields(n = problem.node_count))]
    pub fn solve(&self, problem: &Problem) -> ApplicationResult<Solution> {
        let (_, aggregation) = self.aggregate(problem)?;
        if self.settings.verify {
            check_edge_identity(&aggregation)?;
            debug!("edge identity holds");
        }
        info!("solved n={}", problem.node_count);
        Ok(Solution {
            root: aggregation.root(),
            distance_sums: aggregation.into_distance_sums(),
            verified: self.settings.verify,
        })
    }

    /// Solve, then compare with the O(N²) reference and the edge identity.
    #[instrument(level = "debug", skip_all, fields(n = problem.node_count))]
    pub fn check(&self, problem: &Problem) -> ApplicationResult<CheckReport> {
        let (adjacency, aggregation) = self.aggregate(problem)?;
        check_edge_identity(&aggregation)?;
        check_against_brute_force(&adjacency, &aggregation)?;
        Ok(CheckReport {
            node_count: aggregation.node_count(),
            total: aggregation.total(),
            identity_total: aggregation.edge_identity_total(),
        })
    }

    /// Tree view labeled with subtree sizes and distance sums.
    #[instrument(level = "debug", skip_all, fields(n = problem.node_count))]
    pub fn render(&self, problem: &Problem) -> ApplicationResult<Tree<String>> {
        if problem.node_count > self.settings.render_limit {
            return Err(ApplicationError::TooLargeToRender {
                node_count: problem.node_count,
                limit: self.settings.render_limit,
            });
        }
        let (adjacency, aggregation) = self.aggregate(problem)?;
        Ok(render_tree(&adjacency, &aggregation))
    }

    fn aggregate(&self, problem: &Problem) -> ApplicationResult<(Adjacency, Aggregation)> {
        self.check_node_count(problem.node_count)?;
        let adjacency = TreeBuilder::with_max_nodes(self.settings.max_nodes)
            .build(problem.node_count, &problem.edges)?;
        let aggregation = DistanceAggregator::with_root(self.root).aggregate(&adjacency)?;
        Ok((adjacency, aggregation))
    }

    fn check_node_count(&self, node_count: usize) -> ApplicationResult<()> {
        if node_count < 1 || node_count > self.settings.max_nodes {
            return Err(ApplicationError::NodeCountOutOfRange {
                node_count,
                max: self.settings.max_nodes,
            });
        }
        Ok(())
    }
}
