//! End-to-end keyword ranking
//!
//! [`KeywordRanker`] runs the four stages in order (normalize, build graph,
//! PageRank, rank) and returns a [`KeywordReport`]. Each stage completes
//! before the next begins, and nothing is shared between runs.

use crate::errors::Result;
use crate::export::{CorpusCounts, GraphExport, RankExporter, RankedTerm};
use crate::graph::builder::{GraphBuilder, WordGraph};
use crate::graph::csr::CsrGraph;
use crate::nlp::normalizer::Normalizer;
use crate::pagerank::standard::StandardPageRank;
use crate::pagerank::ScoreMap;
use crate::types::WordRankConfig;
use serde::Serialize;

/// Stage names used in tracing spans
pub const STAGE_NORMALIZE: &str = "normalize";
pub const STAGE_GRAPH: &str = "graph";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_EXPORT: &str = "export";

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// A configured normalizer + PageRank pair
#[derive(Debug, Clone)]
pub struct KeywordRanker {
    normalizer: Normalizer,
    pagerank: StandardPageRank,
    top_n: usize,
}

impl Default for KeywordRanker {
    fn default() -> Self {
        Self::from_valid_config(&WordRankConfig::default())
    }
}

impl KeywordRanker {
    /// Create a ranker from a config, validating it first
    pub fn new(config: &WordRankConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: &WordRankConfig) -> Self {
        Self {
            normalizer: Normalizer::from_config(config),
            pagerank: StandardPageRank::from_config(config),
            top_n: config.top_n,
        }
    }

    /// Rank the terms of one text
    ///
    /// Empty or stopword-only text yields an empty report, not an error.
    pub fn run(&self, text: &str) -> KeywordReport {
        let tokens = {
            trace_stage!(STAGE_NORMALIZE);
            self.normalizer.normalize(text)
        };

        let graph = {
            trace_stage!(STAGE_GRAPH);
            GraphBuilder::from_tokens(&tokens)
        };

        let counts = CorpusCounts::new(tokens.len(), &graph);
        drop(tokens);

        let (scores, converged, iterations) = {
            trace_stage!(STAGE_RANK);
            let csr = CsrGraph::from_graph(&graph);
            let result = self.pagerank.run(&csr);
            (
                ScoreMap::from_result(&csr, &result),
                result.converged,
                result.iterations,
            )
        };

        let top_terms = {
            trace_stage!(STAGE_EXPORT);
            RankExporter::new(&scores, counts).top_n(self.top_n)
        };

        KeywordReport {
            graph,
            scores,
            counts,
            top_terms,
            converged,
            iterations,
        }
    }
}

/// Everything one run produces
#[derive(Debug, Clone)]
pub struct KeywordReport {
    /// The co-occurrence graph
    pub graph: WordGraph,
    /// One score per graph node
    pub scores: ScoreMap,
    /// Token, node, and edge counts
    pub counts: CorpusCounts,
    /// The configured top-N terms, best first
    pub top_terms: Vec<RankedTerm>,
    /// Whether PageRank converged before its iteration cap
    pub converged: bool,
    /// PageRank iterations performed
    pub iterations: usize,
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    counts: CorpusCounts,
    converged: bool,
    iterations: usize,
    top_terms: &'a [RankedTerm],
    graph: GraphExport,
}

impl KeywordReport {
    /// A ranking view over this report's scores
    pub fn exporter(&self) -> RankExporter<'_> {
        RankExporter::new(&self.scores, self.counts)
    }

    /// Nodes, edges and scores for a renderer
    pub fn graph_export(&self) -> GraphExport {
        GraphExport::new(&self.graph, &self.scores)
    }

    /// Serialize counts, top terms, and the graph to JSON
    pub fn to_json(&self) -> Result<String> {
        let doc = ReportDocument {
            counts: self.counts,
            converged: self.converged,
            iterations: self.iterations,
            top_terms: &self.top_terms,
            graph: self.graph_export(),
        };
        Ok(serde_json::to_string(&doc)?)
    }
}

/// Rank the terms of `text` with the given config
pub fn extract_keywords(text: &str, config: &WordRankConfig) -> Result<KeywordReport> {
    Ok(KeywordRanker::new(config)?.run(text))
}
