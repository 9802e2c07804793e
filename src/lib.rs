//! # wordrank
//!
//! Ranks the salient terms of a text with PageRank over a word
//! co-occurrence graph.
//!
//! The pipeline has four stages, each usable on its own:
//!
//! 1. [`Normalizer`] turns raw text into a [`TokenSequence`]
//! 2. [`GraphBuilder`] counts adjacent token pairs into a [`WordGraph`]
//! 3. [`StandardPageRank`] scores every node
//! 4. [`RankExporter`] sorts the scores for top-N reporting
//!
//! [`extract_keywords`] runs all four.
//!
//! ```
//! use wordrank::{extract_keywords, WordRankConfig};
//!
//! let report = extract_keywords("alpha beta gamma", &WordRankConfig::default()).unwrap();
//! assert_eq!(report.top_terms[0].term, "beta");
//! ```
//!
//! Text extraction, settings UIs, and graph rendering live outside this
//! crate; [`KeywordReport::to_json`] is the hand-off to a renderer.

pub mod errors;
pub mod export;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, WordRankError};
pub use types::{Token, TokenSequence, WordRankConfig};

// Re-export main functionality
pub use export::{CorpusCounts, GraphExport, RankExporter, RankedTerm};
pub use graph::{
    builder::{EdgeKey, GraphBuilder, WeightedEdge, WordGraph},
    csr::CsrGraph,
};
pub use nlp::{normalizer::Normalizer, stopwords::StopwordFilter};
pub use pagerank::{standard::StandardPageRank, PageRankResult, ScoreMap};
pub use pipeline::{extract_keywords, KeywordRanker, KeywordReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
