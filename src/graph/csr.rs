//! Compressed Sparse Row (CSR) graph representation
//!
//! CSR is optimized for iteration over neighbors, which is exactly what
//! PageRank needs during power iteration. Each undirected edge is stored once
//! per endpoint, and each node's neighbors are sorted by node ID so iteration
//! order is fixed for a given [`WordGraph`].

use super::builder::WordGraph;

/// A graph in Compressed Sparse Row format
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes
    num_nodes: usize,
    /// Row pointers: node i's edges are at indices row_ptr[i]..row_ptr[i+1]
    row_ptr: Vec<usize>,
    /// Column indices (neighbor nodes) for each edge
    col_idx: Vec<u32>,
    /// Edge weights
    weights: Vec<f64>,
    /// Weighted degree for each node
    total_weight: Vec<f64>,
    /// Label for each node
    labels: Vec<String>,
}

impl CsrGraph {
    /// Convert a [`WordGraph`] into CSR format
    ///
    /// `WordGraph` only exists in validated form, so every endpoint is a
    /// known node and every weight is positive.
    pub fn from_graph(graph: &WordGraph) -> Self {
        let num_nodes = graph.node_count();

        let mut adjacency: Vec<Vec<(u32, f64)>> = vec![Vec::new(); num_nodes];
        for (a, b, weight) in graph.edge_ids() {
            let weight = f64::from(weight);
            adjacency[a as usize].push((b, weight));
            adjacency[b as usize].push((a, weight));
        }

        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::with_capacity(graph.edge_count() * 2);
        let mut weights = Vec::with_capacity(graph.edge_count() * 2);
        let mut total_weight = Vec::with_capacity(num_nodes);

        row_ptr.push(0);

        for mut edges in adjacency {
            // Sort edges for deterministic iteration
            edges.sort_by_key(|(k, _)| *k);

            total_weight.push(edges.iter().map(|(_, w)| w).sum());

            for (target, weight) in edges {
                col_idx.push(target);
                weights.push(weight);
            }

            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            total_weight,
            labels: graph.nodes().to_vec(),
        }
    }

    /// Number of nodes
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Iterate over neighbors of a node
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Get the number of distinct neighbors of a node
    pub fn degree(&self, node: u32) -> usize {
        self.row_ptr[node as usize + 1] - self.row_ptr[node as usize]
    }

    /// Get the weighted degree of a node (sum of incident edge weights)
    pub fn weighted_degree(&self, node: u32) -> f64 {
        self.total_weight[node as usize]
    }

    /// Weighted degree of every node, indexed by node ID
    pub fn weighted_degrees(&self) -> &[f64] {
        &self.total_weight
    }

    /// Get the label for a node
    pub fn label(&self, node: u32) -> &str {
        &self.labels[node as usize]
    }

    /// Node labels indexed by node ID
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Get the total number of stored edge entries (each undirected edge twice)
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    /// Find dangling nodes (nodes with zero weighted degree)
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.total_weight[n as usize] == 0.0)
            .collect()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            total_weight: Vec::new(),
            labels: Vec::new(),
        }
    }
}

impl From<&WordGraph> for CsrGraph {
    fn from(graph: &WordGraph) -> Self {
        Self::from_graph(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_test_graph() -> WordGraph {
        WordGraph::from_parts(["a", "b", "c"], &[("a", "b", 1), ("b", "c", 2), ("a", "c", 3)])
            .unwrap()
    }

    #[test]
    fn test_csr_conversion() {
        let csr = CsrGraph::from_graph(&build_test_graph());

        assert_eq!(csr.num_nodes(), 3);
        assert_eq!(csr.labels(), ["a", "b", "c"]);
        assert_eq!(csr.num_edges(), 6);
    }

    #[test]
    fn test_neighbor_iteration_sorted() {
        let csr = CsrGraph::from_graph(&build_test_graph());

        let neighbors: Vec<_> = csr.neighbors(2).collect();
        assert_eq!(neighbors, vec![(0, 3.0), (1, 2.0)]);
    }

    #[test]
    fn test_degree_and_weight() {
        let csr = CsrGraph::from_graph(&build_test_graph());

        assert_eq!(csr.degree(0), 2);
        assert!((csr.weighted_degree(0) - 4.0).abs() < 1e-10);
        assert!((csr.weighted_degree(1) - 3.0).abs() < 1e-10);
        assert!((csr.weighted_degree(2) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_graph() {
        let csr = CsrGraph::from_graph(&WordGraph::default());

        assert!(csr.is_empty());
        assert_eq!(csr.num_edges(), 0);
        assert!(csr.dangling_nodes().is_empty());
    }

    #[test]
    fn test_dangling_nodes() {
        let graph = WordGraph::from_parts(["a", "b", "c"], &[("a", "b", 1)]).unwrap();
        let csr = CsrGraph::from_graph(&graph);

        assert_eq!(csr.dangling_nodes(), vec![2]);
        assert_eq!(csr.label(2), "c");
    }
}
