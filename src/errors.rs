//! Error types for wordrank
//!
//! The core is a pure computation, so the taxonomy is narrow: bad
//! configuration, malformed graphs (which indicate a construction bug), and
//! serialization failures at the JSON hand-off. Empty input and PageRank
//! non-convergence are not errors.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, WordRankError>;

/// Main error type for wordrank
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WordRankError {
    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// An edge references a node that is not part of the node set
    #[error("Edge references unknown node '{node}'")]
    UnknownNode { node: String },

    /// An edge carries a weight that cannot occur in a co-occurrence graph
    #[error("Invalid weight {weight} on edge '{source_node}'-'{target_node}'")]
    InvalidWeight {
        source_node: String,
        target_node: String,
        weight: f64,
    },

    /// An edge connects a node to itself
    #[error("Self-loop on node '{node}'")]
    SelfLoop { node: String },

    /// The same unordered pair was listed twice
    #[error("Duplicate edge '{first}'-'{second}'")]
    DuplicateEdge { first: String, second: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl WordRankError {
    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an unknown node error
    pub fn unknown_node(node: impl Into<String>) -> Self {
        Self::UnknownNode { node: node.into() }
    }

    /// Create an invalid weight error
    pub fn invalid_weight(
        source_node: impl Into<String>,
        target_node: impl Into<String>,
        weight: f64,
    ) -> Self {
        Self::InvalidWeight {
            source_node: source_node.into(),
            target_node: target_node.into(),
            weight,
        }
    }

    /// Create a self-loop error
    pub fn self_loop(node: impl Into<String>) -> Self {
        Self::SelfLoop { node: node.into() }
    }

    /// Create a duplicate edge error
    pub fn duplicate_edge(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::DuplicateEdge {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error indicates a malformed graph
    /// (a bug in whatever produced the graph, not in the input text)
    pub fn is_graph_invariant_violation(&self) -> bool {
        matches!(
            self,
            Self::UnknownNode { .. }
                | Self::InvalidWeight { .. }
                | Self::SelfLoop { .. }
                | Self::DuplicateEdge { .. }
        )
    }
}

impl From<serde_json::Error> for WordRankError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
