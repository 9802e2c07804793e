//! Text normalization
//!
//! Turns raw extracted text into the ordered token sequence the graph builder
//! consumes. Normalization is total: any string, including an empty one,
//! yields a (possibly empty) sequence.

use crate::nlp::stopwords::StopwordFilter;
use crate::types::{Token, TokenSequence, WordRankConfig};

/// Lowercases text, keeps only `[a-z]` runs, and drops stopwords and short words
#[derive(Debug, Clone)]
pub struct Normalizer {
    stopwords: StopwordFilter,
    /// Minimum token length; tokens shorter than this are dropped
    min_token_length: usize,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            stopwords: StopwordFilter::default(),
            min_token_length: 3,
        }
    }
}

impl Normalizer {
    /// Create a normalizer with the built-in stopwords and a minimum length of 3
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a normalizer from a config (built-in stopwords plus `config.stopwords`)
    pub fn from_config(config: &WordRankConfig) -> Self {
        let mut stopwords = StopwordFilter::default();
        stopwords.add_stopwords(&config.stopwords);
        Self {
            stopwords,
            min_token_length: config.min_token_length,
        }
    }

    /// Replace the stopword filter
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Set minimum token length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length;
        self
    }

    /// Normalize text into a token sequence
    ///
    /// Every character outside `[a-z]` (after lowercasing) acts as a
    /// separator, which is the same as replacing it with a space, collapsing
    /// whitespace runs, and splitting on whitespace.
    pub fn normalize(&self, text: &str) -> TokenSequence {
        let lower = text.to_lowercase();

        let tokens: Vec<Token> = lower
            .split(|c: char| !c.is_ascii_lowercase())
            .filter(|word| self.keep(word))
            .map(str::to_string)
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(tokens = tokens.len(), "normalized text");

        TokenSequence::from(tokens)
    }

    /// Filter predicate applied to each candidate word
    fn keep(&self, word: &str) -> bool {
        // Words are ASCII here, so byte length equals character count
        word.len() >= self.min_token_length && !self.stopwords.is_stopword(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(text: &str) -> Vec<String> {
        Normalizer::new().normalize(text).as_slice().to_vec()
    }

    #[test]
    fn test_basic_normalization() {
        assert_eq!(normalize("Cat dog CAT dog cat"), vec!["cat", "dog", "cat", "dog", "cat"]);
    }

    #[test]
    fn test_stopwords_and_short_words_dropped() {
        assert!(normalize("is of to as by").is_empty());
        assert_eq!(
            normalize("the analysis of data dan metode yang baru"),
            vec!["analysis", "data", "metode", "baru"]
        );
        assert_eq!(normalize("an ox ran far"), vec!["ran", "far"]);
    }

    #[test]
    fn test_non_letters_split_words() {
        assert_eq!(normalize("graph-based"), vec!["graph", "based"]);
        assert_eq!(normalize("rank2vec model"), vec!["rank", "vec", "model"]);
        assert_eq!(normalize("café network"), vec!["caf", "network"]);
        assert_eq!(normalize("line\n\tbreaks\r\nhere"), vec!["line", "breaks", "here"]);
    }

    #[test]
    fn test_non_ascii_case_mapping() {
        // 'İ' lowercases to 'i' plus a combining dot, which splits the word
        assert_eq!(normalize("İstanbul Straße 東京 naïve"), vec!["stanbul", "stra"]);
        // The Kelvin sign lowercases to an ASCII 'k'
        assert_eq!(normalize("\u{212A}ey word"), vec!["key", "word"]);
        assert!(normalize("ĞÜNEŞ ½ \u{1F600}").is_empty());
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(normalize("").is_empty());
        assert!(normalize("   \n\t  ").is_empty());
        assert!(normalize("123 456 !!!").is_empty());
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        assert_eq!(normalize("beta alpha beta"), vec!["beta", "alpha", "beta"]);
    }

    #[test]
    fn test_from_config() {
        let config = WordRankConfig::new()
            .with_stopwords(["Model"])
            .with_min_token_length(5);
        let normalizer = Normalizer::from_config(&config);
        let tokens = normalizer.normalize("model ranks words with pagerank");
        assert_eq!(tokens.as_slice(), ["ranks", "words", "pagerank"]);
    }

    #[test]
    fn test_every_token_satisfies_filter() {
        let normalizer = Normalizer::new();
        let stopwords = StopwordFilter::new();
        let tokens = normalizer.normalize("The quick brown fox, is it 42? Dari sini ke sana!");
        for token in &tokens {
            assert!(token.len() > 2);
            assert!(token.chars().all(|c| c.is_ascii_lowercase()));
            assert!(!stopwords.is_stopword(token));
        }
    }
}
