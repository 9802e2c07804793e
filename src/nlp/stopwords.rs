//! Stopword filtering
//!
//! The built-in list is a small mixed Indonesian/English set of function
//! words. Callers can extend it with their own words.

use rustc_hash::FxHashSet;

/// Built-in stopwords (Indonesian first, then English)
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "dan", "yang", "dari", "ke", "di", "pada", "untuk", "dengan", "adalah", "the", "of", "to",
    "in", "for", "is", "are", "that", "this", "as", "by",
];

/// A filter for removing stopwords from normalized text
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::from_list(DEFAULT_STOPWORDS)
    }
}

impl StopwordFilter {
    /// Create a filter with the built-in list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords: FxHashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.remove(&word.to_lowercase());
        }
    }

    /// Check if a word is a stopword
    ///
    /// Input is expected to be lowercase already; the normalizer guarantees it.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stopwords() {
        let filter = StopwordFilter::new();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("yang"));
        assert!(filter.is_stopword("adalah"));
        assert!(!filter.is_stopword("graph"));
        assert!(!filter.is_stopword("jaringan"));
        assert_eq!(filter.len(), DEFAULT_STOPWORDS.len());
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["custom", "Words"]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("words"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(["extra"]);
        assert!(filter.is_stopword("extra"));

        filter.remove_stopwords(&["custom"]);
        assert!(!filter.is_stopword("custom"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }
}
