//! Natural language processing utilities
//!
//! This module provides text normalization and stopword filtering.

pub mod normalizer;
pub mod stopwords;
