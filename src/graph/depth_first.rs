//! Depth-first (postorder) classifier.

use super::cycle::close_cycle;
use super::{Graph, NodeId};
use crate::error::{Error, Result};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unvisited,
    InProgress,
    Done,
}

/// Order all nodes by a postorder depth-first walk.
///
/// Roots are taken in first-seen order and outgoing edges in insertion
/// order. A node is emitted once all of its targets are emitted, so every
/// edge's target precedes its source. Uses an explicit stack, so deep
/// chains do not grow the call stack.
///
/// Fails on the first back edge with the cycle it closes.
pub fn depth_first(graph: &Graph) -> Result<Vec<String>> {
    let n = graph.node_count();
    let mut state = vec![Visit::Unvisited; n];
    let mut order: Vec<NodeId> = Vec::with_capacity(n);
    // (node, index of the next outgoing edge to follow)
    let mut stack: Vec<(NodeId, usize)> = Vec::new();

    for root in 0..n {
        if state[root] != Visit::Unvisited {
            continue;
        }
        state[root] = Visit::InProgress;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (id, next) = *frame;
            let Some(&target) = graph.outgoing(id).get(next) else {
                stack.pop();
                state[id] = Visit::Done;
                order.push(id);
                continue;
            };
            frame.1 += 1;

            match state[target] {
                Visit::Unvisited => {
                    state[target] = Visit::InProgress;
                    stack.push((target, 0));
                }
                Visit::InProgress => {
                    let start = stack
                        .iter()
                        .position(|&(node, _)| node == target)
                        .unwrap_or(0);
                    let members: Vec<NodeId> =
                        stack[start..].iter().map(|&(node, _)| node).collect();
                    let path = close_cycle(graph, &members);
                    debug!(cycle = %path.format(), "depth-first found a back edge");
                    return Err(Error::cycle(path, graph.labels_of(&members)));
                }
                Visit::Done => {}
            }
        }
    }

    debug!(nodes = n, "depth-first complete");
    Ok(graph.labels_of(&order))
}
