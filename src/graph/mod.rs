//! Graph engine: node/edge storage plus the two ordering algorithms.

pub mod cycle;
pub mod depth_first;
pub mod parse;
pub mod topology;

pub use cycle::CyclePath;
pub use depth_first::depth_first;
pub use parse::parse_lines;
pub use topology::top_sort;

use crate::config::Separators;
use crate::Result;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Dense index of a node, assigned in first-seen order.
pub type NodeId = usize;

/// Which ordering algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Kahn-style in-degree sweep.
    TopSort,
    /// Postorder depth-first walk.
    DepthFirst,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::TopSort => write!(f, "top sort"),
            Algorithm::DepthFirst => write!(f, "depth-first"),
        }
    }
}

/// A directed graph over string labels.
///
/// Nodes keep their first-seen order, which every traversal uses to break
/// ties. Outgoing and incoming adjacency lists keep edge insertion order
/// and always mirror each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    labels: Vec<String>,
    index: HashMap<String, NodeId>,
    outgoing: Vec<Vec<NodeId>>,
    incoming: Vec<Vec<NodeId>>,
    edges: Vec<(NodeId, NodeId)>,
    edge_set: HashSet<(NodeId, NodeId)>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from in-memory text.
    pub fn parse_str(text: &str, separators: &Separators) -> Result<Self> {
        let mut graph = Self::new();
        let mut lines = text.lines().map(str::to_string);
        parse_lines(&mut graph, separators, || Ok(lines.next()))?;
        Ok(graph)
    }

    /// Return the id for `label`, creating the node on first sight.
    pub fn ensure_node(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), id);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        id
    }

    /// Insert `source -> target`, creating both endpoints as needed.
    ///
    /// Returns false if the edge was already present.
    pub fn add_edge(&mut self, source: &str, target: &str) -> bool {
        let from = self.ensure_node(source);
        let to = self.ensure_node(target);
        if !self.edge_set.insert((from, to)) {
            return false;
        }
        self.outgoing[from].push(to);
        self.incoming[to].push(from);
        self.edges.push((from, to));
        true
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        match (self.index.get(source), self.index.get(target)) {
            (Some(&from), Some(&to)) => self.edge_set.contains(&(from, to)),
            _ => false,
        }
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in first-seen order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.edges
            .iter()
            .map(|&(from, to)| (self.label(from), self.label(to)))
    }

    /// Targets of `label`'s outgoing edges. Empty for unknown labels.
    pub fn successors<'a>(&'a self, label: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.neighbours(label, &self.outgoing)
    }

    /// Sources of `label`'s incoming edges. Empty for unknown labels.
    pub fn predecessors<'a>(&'a self, label: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.neighbours(label, &self.incoming)
    }

    /// Run the selected ordering algorithm.
    pub fn sort(&self, algorithm: Algorithm) -> Result<Vec<String>> {
        match algorithm {
            Algorithm::TopSort => top_sort(self),
            Algorithm::DepthFirst => depth_first(self),
        }
    }

    fn neighbours<'a>(
        &'a self,
        label: &str,
        adjacency: &'a [Vec<NodeId>],
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.index
            .get(label)
            .into_iter()
            .flat_map(move |&id| adjacency[id].iter().map(move |&n| self.label(n)))
    }

    pub(crate) fn label(&self, id: NodeId) -> &str {
        &self.labels[id]
    }

    pub(crate) fn outgoing(&self, id: NodeId) -> &[NodeId] {
        &self.outgoing[id]
    }

    pub(crate) fn incoming(&self, id: NodeId) -> &[NodeId] {
        &self.incoming[id]
    }

    pub(crate) fn labels_of(&self, ids: &[NodeId]) -> Vec<String> {
        ids.iter().map(|&id| self.label(id).to_string()).collect()
    }
}
