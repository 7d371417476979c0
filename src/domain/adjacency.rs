//! Undirected adjacency lists and explicit-stack traversals over them.

use tracing::instrument;

use crate::domain::entities::NodeId;

/// Neighbor lists of an undirected graph on `0..node_count`.
///
/// Built once by [`crate::domain::TreeBuilder`], immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency {
    neighbors: Vec<Vec<NodeId>>,
    edge_count: usize,
}

impl Adjacency {
    pub(crate) fn with_nodes(node_count: usize) -> Self {
        Self {
            neighbors: vec![Vec::new(); node_count],
            edge_count: 0,
        }
    }

    /// Callers guarantee `a != b` and both are in range.
    pub(crate) fn insert_edge(&mut self, a: NodeId, b: NodeId) {
        self.neighbors[a].push(b);
        self.neighbors[b].push(a);
        self.edge_count += 1;
    }

    pub fn node_count(&self) -> usize {
        self.neighbors.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Neighbors of `node` in insertion order; empty for unknown nodes.
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.neighbors.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter_preorder(&self, root: NodeId) -> PreOrderIterator<'_> {
        PreOrderIterator::new(self, root)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter_postorder(&self, root: NodeId) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self, root)
    }
}

/// A node reached by a traversal, with its parent and depth in the rooted tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    pub node: NodeId,
    pub parent: Option<NodeId>,
    pub depth: usize,
}

/// Parent-before-child traversal.
///
/// Nodes are marked when pushed, so every node is yielded at most once even if
/// the graph has cycles; unreachable nodes are never yielded.
pub struct PreOrderIterator<'a> {
    adjacency: &'a Adjacency,
    stack: Vec<Visit>,
    visited: Vec<bool>,
}

impl<'a> PreOrderIterator<'a> {
    fn new(adjacency: &'a Adjacency, root: NodeId) -> Self {
        let mut visited = vec![false; adjacency.node_count()];
        let mut stack = Vec::new();
        if let Some(mark) = visited.get_mut(root) {
            *mark = true;
            stack.push(Visit {
                node: root,
                parent: None,
                depth: 0,
            });
        }
        Self {
            adjacency,
            stack,
            visited,
        }
    }
}

impl Iterator for PreOrderIterator<'_> {
    type Item = Visit;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for &child in self.adjacency.neighbors(current.node).iter().rev() {
            if !self.visited[child] {
                self.visited[child] = true;
                self.stack.push(Visit {
                    node: child,
                    parent: Some(current.node),
                    depth: current.depth + 1,
                });
            }
        }
        Some(current)
    }
}

/// Child-before-parent traversal.
///
/// Each frame is popped twice: first to expand its children, then, once every
/// child frame above it has been completed, to yield it.
pub struct PostOrderIterator<'a> {
    adjacency: &'a Adjacency,
    stack: Vec<(Visit, bool)>,
    visited: Vec<bool>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(adjacency: &'a Adjacency, root: NodeId) -> Self {
        let mut visited = vec![false; adjacency.node_count()];
        let mut stack = Vec::new();
        if let Some(mark) = visited.get_mut(root) {
            *mark = true;
            let visit = Visit {
                node: root,
                parent: None,
                depth: 0,
            };
            stack.push((visit, false));
        }
        Self {
            adjacency,
            stack,
            visited,
        }
    }
}

impl Iterator for PostOrderIterator<'_> {
    type Item = Visit;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, expanded)) = self.stack.pop() {
            if expanded {
                return Some(current);
            }
            self.stack.push((current, true));
            for &child in self.adjacency.neighbors(current.node).iter().rev() {
                if !self.visited[child] {
                    self.visited[child] = true;
                    let visit = Visit {
                        node: child,
                        parent: Some(current.node),
                        depth: current.depth + 1,
                    };
                    self.stack.push((visit, false));
                }
            }
        }
        None
    }
}
