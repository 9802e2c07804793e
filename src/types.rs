//! Core types for wordrank
//!
//! This module defines the token types that flow out of the normalizer and
//! the configuration shared by every stage.

use crate::errors::{Result, WordRankError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Token
// ============================================================================

/// A normalized word: lowercase ASCII letters only, not a stopword, and at
/// least `min_token_length` bytes long.
pub type Token = String;

/// Ordered sequence of tokens in document order.
///
/// Tokens are not deduplicated; adjacency in this sequence is what the graph
/// builder counts. Produced once per input text and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

impl TokenSequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tokens (duplicates included)
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over tokens in document order
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Borrow the tokens as a slice
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterate over adjacent pairs `(tokens[i], tokens[i + 1])`
    pub fn adjacent_pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.tokens
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}

impl From<Vec<Token>> for TokenSequence {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for keyword ranking
///
/// Unknown fields are ignored on deserialization, so a settings layer can pass
/// its own presentation parameters (layout density and the like) alongside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordRankConfig {
    /// Damping factor for PageRank (typically 0.85)
    pub damping: f64,
    /// Maximum iterations for PageRank convergence
    pub max_iterations: usize,
    /// Convergence threshold on the L1 change between iterations
    pub convergence_threshold: f64,
    /// Number of ranked terms to report (0 = all)
    pub top_n: usize,
    /// Minimum token length in characters; shorter tokens are dropped
    pub min_token_length: usize,
    /// Additional stopwords (extends the built-in list)
    pub stopwords: Vec<String>,
    /// Compute per-node PageRank updates on the rayon pool
    pub parallel: bool,
}

impl Default for WordRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-6,
            top_n: 20,
            min_token_length: 3,
            stopwords: Vec::new(),
            parallel: false,
        }
    }
}

impl WordRankConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(WordRankError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(WordRankError::invalid_config("max_iterations must be > 0"));
        }

        if !self.convergence_threshold.is_finite() || self.convergence_threshold <= 0.0 {
            return Err(WordRankError::invalid_config(
                "convergence_threshold must be a finite value > 0",
            ));
        }

        if self.min_token_length == 0 {
            return Err(WordRankError::invalid_config("min_token_length must be > 0"));
        }

        Ok(())
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set top N terms to report
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Builder method: set minimum token length
    pub fn with_min_token_length(mut self, min_token_length: usize) -> Self {
        self.min_token_length = min_token_length;
        self
    }

    /// Builder method: add extra stopwords
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Builder method: enable parallel PageRank updates
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
