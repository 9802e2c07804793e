//! PageRank over the co-occurrence graph
//!
//! [`standard::StandardPageRank`] runs the weighted power iteration and
//! returns a [`PageRankResult`] indexed by node ID. [`ScoreMap`] pairs those
//! scores back up with their terms.

pub mod standard;

use crate::graph::csr::CsrGraph;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Result of a PageRank computation
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta (L1 change of the last iteration)
    pub delta: f64,
    /// Whether the algorithm converged before hitting the iteration cap
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Get the score for a specific node
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }
}

/// One scored term
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreEntry {
    pub term: String,
    pub score: f64,
}

/// Term -> score mapping, one entry per graph node, in node-ID order
///
/// Scores are non-negative and sum to 1.0 for a non-empty graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScoreMap {
    entries: Vec<ScoreEntry>,
    /// Maps term -> position in `entries`
    #[serde(skip)]
    index: FxHashMap<String, usize>,
}

impl ScoreMap {
    /// Pair PageRank scores with the graph's node labels
    pub fn from_result(graph: &CsrGraph, result: &PageRankResult) -> Self {
        let entries: Vec<ScoreEntry> = graph
            .labels()
            .iter()
            .zip(result.scores.iter())
            .map(|(term, &score)| ScoreEntry {
                term: term.clone(),
                score,
            })
            .collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.term.clone(), i))
            .collect();
        Self { entries, index }
    }

    /// Score for a term, if it is a graph node
    pub fn get(&self, term: &str) -> Option<f64> {
        self.index.get(term).map(|&i| self.entries[i].score)
    }

    /// Entries in node-ID order
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Iterate over `(term, score)` pairs in node-ID order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|e| (e.term.as_str(), e.score))
    }

    /// Number of scored terms
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no terms are scored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all scores
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.score).sum()
    }
}
