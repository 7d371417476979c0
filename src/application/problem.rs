//! A single sum-of-distances query, from literals or a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::parser::{parse_edges, parse_node_count};
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::Edge;

/// Node count plus edge list, exactly as supplied by the user.
///
/// File form:
/// ```toml
/// node_count = 6
/// edges = [[0, 1], [0, 2], [2, 3], [2, 4], [2, 5]]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub node_count: usize,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Problem {
    pub fn new(node_count: usize, edges: Vec<Edge>) -> Self {
        Self { node_count, edges }
    }

    /// Build from the two textual inputs the interactive prompt asks for.
    pub fn from_literals(node_count: &str, edges: &str) -> ApplicationResult<Self> {
        Ok(Self {
            node_count: parse_node_count(node_count)?,
            edges: parse_edges(edges)?,
        })
    }

    #[instrument(level = "debug")]
    pub fn load(path: &Path) -> ApplicationResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ApplicationError::OperationFailed {
                context: format!("read problem file {}", path.display()),
                source: Box::new(e),
            })?;
        let problem: Self = toml::from_str(&content).map_err(|e| ApplicationError::InvalidProblem {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;
        debug!(
            "loaded problem: n={}, {} edges",
            problem.node_count,
            problem.edges.len()
        );
        Ok(problem)
    }

    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string(self).map_err(|e| ApplicationError::OperationFailed {
            context: "serialize problem".to_string(),
            source: Box::new(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_literals_when_building_problem_then_parses_both() {
        let problem = Problem::from_literals("2", "[[0,1]]").unwrap();
        assert_eq!(problem, Problem::new(2, vec![Edge(0, 1)]));
    }

    #[test]
    fn given_problem_when_serialized_then_reads_back() {
        let problem = Problem::new(3, vec![Edge(0, 1), Edge(1, 2)]);
        let text = problem.to_toml().unwrap();
        assert!(text.contains("node_count = 3"));
        assert_eq!(toml::from_str::<Problem>(&text).unwrap(), problem);
    }
}
