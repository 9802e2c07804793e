//! Graph construction and representation
//!
//! This module provides the co-occurrence graph builder and the CSR layout
//! used by PageRank.

pub mod builder;
pub mod csr;
