//! Co-occurrence graph construction
//!
//! [`GraphBuilder`] folds over adjacent token pairs, counting each unordered
//! pair of distinct tokens once per adjacency. [`GraphBuilder::build`] then
//! materializes an immutable [`WordGraph`]: the node set is every token that
//! appears in some edge, in order of first appearance.

use crate::errors::{Result, WordRankError};
use crate::types::TokenSequence;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::cmp::Ordering;

/// Unordered pair of two distinct tokens, stored in lexical order
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeKey {
    first: String,
    second: String,
}

impl EdgeKey {
    /// Canonicalize a pair. Returns `None` for a self-pair.
    pub fn new(a: &str, b: &str) -> Option<Self> {
        let (first, second) = match a.cmp(b) {
            Ordering::Less => (a, b),
            Ordering::Greater => (b, a),
            Ordering::Equal => return None,
        };
        Some(Self {
            first: first.to_string(),
            second: second.to_string(),
        })
    }

    /// The lexically smaller token
    pub fn first(&self) -> &str {
        &self.first
    }

    /// The lexically larger token
    pub fn second(&self) -> &str {
        &self.second
    }

    /// Check if the key touches the given token
    pub fn contains(&self, token: &str) -> bool {
        self.first == token || self.second == token
    }
}

/// An edge and its co-occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightedEdge {
    pub key: EdgeKey,
    pub weight: u32,
}

/// Accumulates adjacent-pair counts
#[derive(Debug, Default)]
pub struct GraphBuilder {
    /// Maps edge key -> position in `edges`
    edge_index: FxHashMap<EdgeKey, usize>,
    /// Edges in order of first occurrence
    edges: Vec<WeightedEdge>,
}

impl GraphBuilder {
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph builder with pre-allocated capacity
    pub fn with_capacity(edge_capacity: usize) -> Self {
        Self {
            edge_index: FxHashMap::with_capacity_and_hasher(edge_capacity, Default::default()),
            edges: Vec::with_capacity(edge_capacity),
        }
    }

    /// Record one adjacency between `a` and `b`
    ///
    /// Inserts the edge with weight 1 if absent, otherwise increments it.
    /// The count saturates at `u32::MAX`.
    /// Returns `false` (and records nothing) when `a == b`.
    pub fn increment_edge(&mut self, a: &str, b: &str) -> bool {
        let Some(key) = EdgeKey::new(a, b) else {
            return false; // No self-loops
        };

        match self.edge_index.get(&key) {
            Some(&idx) => {
                let edge = &mut self.edges[idx];
                edge.weight = edge.weight.saturating_add(1);
            }
            None => {
                self.edge_index.insert(key.clone(), self.edges.len());
                self.edges.push(WeightedEdge { key, weight: 1 });
            }
        }
        true
    }

    /// Build the graph for a token sequence
    pub fn from_tokens(tokens: &TokenSequence) -> WordGraph {
        let mut builder = Self::with_capacity(tokens.len().saturating_sub(1));
        for (a, b) in tokens.adjacent_pairs() {
            builder.increment_edge(a, b);
        }
        builder.build()
    }

    /// Number of distinct edges recorded so far
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Materialize the node set and freeze the graph
    pub fn build(self) -> WordGraph {
        let mut graph = WordGraph::with_capacity(self.edges.len());
        graph.edge_index = self.edge_index;
        for edge in self.edges {
            let source = graph.get_or_create_node(edge.key.first());
            let target = graph.get_or_create_node(edge.key.second());
            graph.endpoints.push((source, target));
            graph.edges.push(edge);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built co-occurrence graph"
        );

        graph
    }
}

/// Immutable weighted undirected co-occurrence graph
///
/// Simple by construction: no self-loops, no parallel edges, every weight is
/// at least 1, and every edge endpoint is in the node set.
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    /// Node labels indexed by node ID
    nodes: Vec<String>,
    /// Maps label -> node ID
    node_index: FxHashMap<String, u32>,
    /// Edges in insertion order
    edges: Vec<WeightedEdge>,
    /// Maps edge key -> position in `edges`
    edge_index: FxHashMap<EdgeKey, usize>,
    /// `(first, second)` node IDs for each entry in `edges`
    endpoints: Vec<(u32, u32)>,
}

impl WordGraph {
    fn with_capacity(edge_capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(edge_capacity + 1),
            node_index: FxHashMap::with_capacity_and_hasher(edge_capacity + 1, Default::default()),
            edges: Vec::with_capacity(edge_capacity),
            edge_index: FxHashMap::with_capacity_and_hasher(edge_capacity, Default::default()),
            endpoints: Vec::with_capacity(edge_capacity),
        }
    }

    fn get_or_create_node(&mut self, label: &str) -> u32 {
        if let Some(&id) = self.node_index.get(label) {
            return id;
        }

        let id = self.nodes.len() as u32;
        self.node_index.insert(label.to_string(), id);
        self.nodes.push(label.to_string());
        id
    }

    /// Assemble a graph from an explicit node list and weighted edges
    ///
    /// Used by callers that build graphs outside [`GraphBuilder`]. Every edge
    /// is checked: both endpoints must be listed nodes, the endpoints must
    /// differ, the weight must be at least 1, and each pair may appear once.
    /// Listed nodes without edges are kept and become dangling nodes.
    pub fn from_parts<N, S>(nodes: N, edges: &[(&str, &str, u32)]) -> Result<Self>
    where
        N: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = Self::with_capacity(edges.len());
        for node in nodes {
            graph.get_or_create_node(node.as_ref());
        }

        for &(a, b, weight) in edges {
            let source = graph.node_id(a).ok_or_else(|| WordRankError::unknown_node(a))?;
            let target = graph.node_id(b).ok_or_else(|| WordRankError::unknown_node(b))?;
            let key = EdgeKey::new(a, b).ok_or_else(|| WordRankError::self_loop(a))?;
            if weight == 0 {
                return Err(WordRankError::invalid_weight(a, b, 0.0));
            }
            if graph.edge_index.contains_key(&key) {
                return Err(WordRankError::duplicate_edge(key.first(), key.second()));
            }

            let ids = if a < b { (source, target) } else { (target, source) };
            graph.endpoints.push(ids);
            graph.edge_index.insert(key.clone(), graph.edges.len());
            graph.edges.push(WeightedEdge { key, weight });
        }

        Ok(graph)
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node labels in node-ID order
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Edges in insertion order
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Edges as `(first_id, second_id, weight)`
    pub fn edge_ids(&self) -> impl Iterator<Item = (u32, u32, u32)> + '_ {
        self.endpoints
            .iter()
            .zip(self.edges.iter())
            .map(|(&(a, b), edge)| (a, b, edge.weight))
    }

    /// Get a node ID by label
    pub fn node_id(&self, label: &str) -> Option<u32> {
        self.node_index.get(label).copied()
    }

    /// Get the label for a node ID
    pub fn label(&self, id: u32) -> Option<&str> {
        self.nodes.get(id as usize).map(String::as_str)
    }

    /// Check if a label is in the node set
    pub fn contains_node(&self, label: &str) -> bool {
        self.node_index.contains_key(label)
    }

    /// Weight of the edge between two tokens (in either order)
    pub fn weight(&self, a: &str, b: &str) -> Option<u32> {
        let key = EdgeKey::new(a, b)?;
        self.edge_index.get(&key).map(|&idx| self.edges[idx].weight)
    }
}
