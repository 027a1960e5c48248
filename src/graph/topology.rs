//! Topological sorting using Kahn's algorithm.

use super::cycle::{close_cycle, find_residual_cycle};
use super::{CyclePath, Graph};
use crate::error::{Error, Result};
use std::collections::VecDeque;
use tracing::debug;

/// Order all nodes so every edge's source precedes its target.
///
/// Ready nodes are released in first-seen order, and a node's targets are
/// visited in edge insertion order, so the result is deterministic.
/// Fails with [`Error::Cycle`] if any node never reaches in-degree zero;
/// `unresolved` then lists every such node in first-seen order.
pub fn top_sort(graph: &Graph) -> Result<Vec<String>> {
    let n = graph.node_count();
    let mut in_degree: Vec<usize> = (0..n).map(|id| graph.incoming(id).len()).collect();

    // Seed queue with in-degree 0 nodes
    let mut queue: VecDeque<usize> = (0..n).filter(|&id| in_degree[id] == 0).collect();
    let mut order = Vec::with_capacity(n);

    while let Some(id) = queue.pop_front() {
        order.push(id);
        for &target in graph.outgoing(id) {
            in_degree[target] -= 1;
            if in_degree[target] == 0 {
                queue.push_back(target);
            }
        }
    }

    if order.len() < n {
        let unresolved: Vec<usize> = (0..n).filter(|&id| in_degree[id] > 0).collect();
        let path = find_residual_cycle(graph, &in_degree)
            .map(|cycle| close_cycle(graph, &cycle))
            .unwrap_or_else(|| CyclePath::new(graph.labels_of(&unresolved)));
        debug!(unresolved = unresolved.len(), cycle = %path.format(), "top sort found a cycle");
        return Err(Error::cycle(path, graph.labels_of(&unresolved)));
    }

    debug!(nodes = n, "top sort complete");
    Ok(graph.labels_of(&order))
}
