//! Cycle reporting shared by both classifiers.

use super::{Graph, NodeId};

/// A closed walk through the graph: the first and last labels are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclePath {
    pub path: Vec<String>,
}

impl CyclePath {
    pub fn new(path: Vec<String>) -> Self {
        Self { path }
    }

    /// Format the cycle as `A → B → A`.
    pub fn format(&self) -> String {
        self.path.join(" → ")
    }
}

/// Turn `[v, .., u]`, where `u -> v` closes the loop, into `v → .. → u → v`.
pub(crate) fn close_cycle(graph: &Graph, members: &[NodeId]) -> CyclePath {
    let mut path = graph.labels_of(members);
    if let Some(first) = path.first().cloned() {
        path.push(first);
    }
    CyclePath::new(path)
}

/// Find a cycle among the nodes a Kahn sweep could not release.
///
/// Every node with positive residual in-degree has at least one
/// predecessor that is also unreleased, so walking predecessors from any
/// such node must revisit a node.
pub(crate) fn find_residual_cycle(graph: &Graph, in_degree: &[usize]) -> Option<Vec<NodeId>> {
    let start = in_degree.iter().position(|&d| d > 0)?;

    let mut position: Vec<Option<usize>> = vec![None; in_degree.len()];
    let mut trail = Vec::new();
    let mut current = start;

    loop {
        if let Some(i) = position[current] {
            // trail[i..] runs against the edges; flip it and rotate so the
            // repeated node leads.
            let mut cycle: Vec<NodeId> = trail[i..].iter().rev().copied().collect();
            cycle.rotate_right(1);
            return Some(cycle);
        }
        position[current] = Some(trail.len());
        trail.push(current);
        current = *graph
            .incoming(current)
            .iter()
            .find(|&&pred| in_degree[pred] > 0)?;
    }
}
