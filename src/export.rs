//! Ranked output and graph hand-off
//!
//! [`RankExporter`] is a read-only view over a [`ScoreMap`]: it sorts terms
//! for top-N reporting and passes through the corpus counts computed
//! upstream. [`GraphExport`] is the serializable node/edge/score bundle
//! handed to whatever draws the graph.

use crate::graph::builder::WordGraph;
use crate::pagerank::ScoreMap;
use serde::Serialize;
use std::cmp::Ordering;

/// A term with its 1-based rank
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTerm {
    pub rank: usize,
    pub term: String,
    pub score: f64,
}

/// Ranking order: score descending, then term ascending.
///
/// Scores are compared exactly (`f64::total_cmp`), so the order is total and
/// the lexical tie-break only applies to bit-identical scores.
pub fn rank_cmp(a: (&str, f64), b: (&str, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

/// Summary counts of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CorpusCounts {
    /// Tokens surviving normalization (duplicates included)
    pub total_tokens: usize,
    /// Distinct graph nodes
    pub total_nodes: usize,
    /// Distinct undirected edges
    pub total_edges: usize,
}

impl CorpusCounts {
    /// Read the counts off a token count and a built graph
    pub fn new(total_tokens: usize, graph: &WordGraph) -> Self {
        Self {
            total_tokens,
            total_nodes: graph.node_count(),
            total_edges: graph.edge_count(),
        }
    }
}

/// Read-only ranking view over a score map
#[derive(Debug, Clone)]
pub struct RankExporter<'a> {
    scores: &'a ScoreMap,
    counts: CorpusCounts,
}

impl<'a> RankExporter<'a> {
    /// Create an exporter over a score map and its upstream counts
    pub fn new(scores: &'a ScoreMap, counts: CorpusCounts) -> Self {
        Self { scores, counts }
    }

    /// Every term, sorted by [`rank_cmp`]
    pub fn ranked(&self) -> Vec<RankedTerm> {
        let mut entries: Vec<(&str, f64)> = self.scores.iter().collect();
        entries.sort_by(|a, b| rank_cmp(*a, *b));

        entries
            .into_iter()
            .enumerate()
            .map(|(i, (term, score))| RankedTerm {
                rank: i + 1,
                term: term.to_string(),
                score,
            })
            .collect()
    }

    /// The best `top_n` terms (0 = all)
    ///
    /// Asking for more terms than there are nodes returns every node.
    pub fn top_n(&self, top_n: usize) -> Vec<RankedTerm> {
        let mut ranked = self.ranked();
        if top_n > 0 {
            ranked.truncate(top_n);
        }
        ranked
    }

    /// Summary counts
    pub fn counts(&self) -> CorpusCounts {
        self.counts
    }
}

/// A node as handed to a renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub term: String,
    pub score: f64,
}

/// An undirected edge as handed to a renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub weight: u32,
}

/// Nodes with scores plus weighted edges, in graph order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphExport {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphExport {
    /// Pair a graph with its scores
    ///
    /// A score map built from this graph shares its node order and is zipped
    /// directly. Otherwise terms are looked up, and nodes missing from
    /// `scores` get 0.0.
    pub fn new(graph: &WordGraph, scores: &ScoreMap) -> Self {
        let same_order = graph.node_count() == scores.len()
            && graph
                .nodes()
                .iter()
                .zip(scores.entries())
                .all(|(term, entry)| *term == entry.term);

        let nodes = if same_order {
            scores
                .entries()
                .iter()
                .map(|entry| GraphNode {
                    term: entry.term.clone(),
                    score: entry.score,
                })
                .collect()
        } else {
            graph
                .nodes()
                .iter()
                .map(|term| GraphNode {
                    term: term.clone(),
                    score: scores.get(term).unwrap_or(0.0),
                })
                .collect()
        };

        let edges = graph
            .edges()
            .iter()
            .map(|edge| GraphEdge {
                source: edge.key.first().to_string(),
                target: edge.key.second().to_string(),
                weight: edge.weight,
            })
            .collect();

        Self { nodes, edges }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;
    use crate::graph::csr::CsrGraph;
    use crate::pagerank::PageRankResult;
    use crate::types::TokenSequence;

    fn score_map(graph: &WordGraph, scores: Vec<f64>) -> ScoreMap {
        let csr = CsrGraph::from_graph(graph);
        ScoreMap::from_result(&csr, &PageRankResult::new(scores, 1, 0.0, true))
    }

    fn chain() -> WordGraph {
        WordGraph::from_parts(
            ["gamma", "beta", "alpha"],
            &[("alpha", "beta", 1), ("beta", "gamma", 1)],
        )
        .unwrap()
    }

    #[test]
    fn test_ranked_sorted_with_lexical_tie_break() {
        let graph = chain();
        let scores = score_map(&graph, vec![0.25, 0.5, 0.25]);
        let exporter = RankExporter::new(&scores, CorpusCounts::new(3, &graph));

        let ranked = exporter.ranked();
        let terms: Vec<_> = ranked.iter().map(|r| r.term.as_str()).collect();
        assert_eq!(terms, vec!["beta", "alpha", "gamma"]);
        let ranks: Vec<_> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_top_n_truncates_and_overflows() {
        let graph = chain();
        let scores = score_map(&graph, vec![0.25, 0.5, 0.25]);
        let exporter = RankExporter::new(&scores, CorpusCounts::new(3, &graph));

        assert_eq!(exporter.top_n(1).len(), 1);
        assert_eq!(exporter.top_n(1)[0].term, "beta");
        assert_eq!(exporter.top_n(50).len(), 3);
        assert_eq!(exporter.top_n(0).len(), 3);
    }

    #[test]
    fn test_counts_pass_through() {
        let graph = chain();
        let scores = score_map(&graph, vec![0.25, 0.5, 0.25]);
        let exporter = RankExporter::new(&scores, CorpusCounts::new(7, &graph));

        assert_eq!(
            exporter.counts(),
            CorpusCounts {
                total_tokens: 7,
                total_nodes: 3,
                total_edges: 2
            }
        );
    }

    #[test]
    fn test_empty_scores() {
        let scores = ScoreMap::default();
        let exporter = RankExporter::new(&scores, CorpusCounts::default());

        assert!(exporter.ranked().is_empty());
        assert!(exporter.top_n(10).is_empty());
        assert_eq!(exporter.counts(), CorpusCounts::default());
    }

    #[test]
    fn test_rank_cmp() {
        assert_eq!(rank_cmp(("a", 0.6), ("b", 0.4)), Ordering::Less);
        assert_eq!(rank_cmp(("b", 0.5), ("a", 0.5)), Ordering::Greater);
        assert_eq!(rank_cmp(("a", 0.5), ("a", 0.5)), Ordering::Equal);
    }

    #[test]
    fn test_graph_export() {
        let graph = chain();
        let scores = score_map(&graph, vec![0.25, 0.5, 0.25]);
        let export = GraphExport::new(&graph, &scores);

        assert_eq!(export.nodes.len(), 3);
        assert_eq!(export.nodes[1], GraphNode { term: "beta".into(), score: 0.5 });
        assert_eq!(
            export.edges[0],
            GraphEdge {
                source: "alpha".into(),
                target: "beta".into(),
                weight: 1
            }
        );

        let json = serde_json::to_value(&export).unwrap();
        assert_eq!(json["edges"][1]["target"], "gamma");
    }

    #[test]
    fn test_graph_export_mismatched_scores() {
        let graph = chain();
        let other = WordGraph::from_parts(["beta", "zeta"], &[("beta", "zeta", 1)]).unwrap();
        let scores = score_map(&other, vec![0.75, 0.25]);
        let export = GraphExport::new(&graph, &scores);

        let scored: Vec<_> = export.nodes.iter().map(|n| (n.term.as_str(), n.score)).collect();
        assert_eq!(scored, vec![("gamma", 0.0), ("beta", 0.75), ("alpha", 0.0)]);
    }

    #[test]
    fn test_graph_export_long_chain() {
        let words: Vec<String> = (0..20_000).map(|i| format!("w{}", i)).collect();
        let graph = GraphBuilder::from_tokens(&TokenSequence::from(words));
        let scores = score_map(&graph, vec![1.0 / 20_000.0; 20_000]);
        let export = GraphExport::new(&graph, &scores);

        assert_eq!(export.nodes.len(), 20_000);
        assert_eq!(export.edges.len(), 19_999);
        assert_eq!(export.nodes[19_999].term, "w19999");
    }
}
