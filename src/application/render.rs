//! Output sink: text forms of a result.

use std::fmt;

use clap::ValueEnum;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use termtree::Tree;
use tracing::instrument;

use crate::domain::{Adjacency, Aggregation, DistanceSum};

/// How distance sums are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// `Output: [8 12 6 10 10 10]`
    #[default]
    Plain,
    /// `[8, 12, 6, 10, 10, 10]`
    List,
    /// one `node<TAB>sum` line per node
    Table,
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputStyle::Plain => "plain",
            OutputStyle::List => "list",
            OutputStyle::Table => "table",
        };
        f.write_str(name)
    }
}

pub fn format_distance_sums(style: OutputStyle, sums: &[DistanceSum]) -> String {
    match style {
        OutputStyle::Plain => format!("Output: [{}]", sums.iter().join(" ")),
        OutputStyle::List => format!("[{}]", sums.iter().join(", ")),
        OutputStyle::Table => sums
            .iter()
            .enumerate()
            .map(|(node, sum)| format!("{node}\t{sum}"))
            .join("\n"),
    }
}

/// Rooted tree view, one label per node: `node (size=.., sum=..)`.
///
/// Built bottom-up from the post-order traversal so deep trees do not recurse
/// here. Children keep adjacency order.
#[instrument(level = "debug", skip_all)]
pub fn render_tree(adjacency: &Adjacency, aggregation: &Aggregation) -> Tree<String> {
    let label = |node: usize| {
        format!(
            "{} (size={}, sum={})",
            node,
            aggregation.subtree_size(node).unwrap_or_default(),
            aggregation.distance_sum(node).unwrap_or_default()
        )
    };

    let mut pending: Vec<Vec<Tree<String>>> = vec![Vec::new(); adjacency.node_count()];
    for visit in adjacency.iter_postorder(aggregation.root()) {
        let leaves = std::mem::take(&mut pending[visit.node]);
        let subtree = Tree::new(label(visit.node)).with_leaves(leaves);
        match visit.parent {
            Some(parent) => pending[parent].push(subtree),
            None => return subtree,
        }
    }
    Tree::new("empty tree".to_string())
}
