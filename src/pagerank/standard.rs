//! Standard PageRank algorithm
//!
//! Weighted power iteration on the undirected co-occurrence graph with
//! uniform redistribution of dangling-node mass.
//!
//! Each iteration is a synchronous update: every new score is computed from
//! the previous vector only. Updates are written in pull form (a node sums
//! what its neighbors send it), so the sequential and the rayon path perform
//! the same floating-point operations in the same order and produce
//! bit-identical results.
//!
//! If `max_iterations` is reached before the L1 change drops below the
//! threshold, the last vector is returned with `converged = false`. That is a
//! best-effort result, not an error.

use super::PageRankResult;
use crate::graph::csr::CsrGraph;
use crate::types::WordRankConfig;
use rayon::prelude::*;

/// Standard PageRank implementation
///
/// The builders do not validate. `damping` must lie in `[0, 1]` and
/// `threshold` must be finite and non-negative; [`WordRankConfig::validate`]
/// checks both before [`StandardPageRank::from_config`] is used. Debug builds
/// assert the ranges in [`StandardPageRank::run`].
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold on the L1 change between iterations
    pub threshold: f64,
    /// Compute per-node updates on the rayon pool
    pub parallel: bool,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
            parallel: false,
        }
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from the ranking fields of a config
    pub fn from_config(config: &WordRankConfig) -> Self {
        Self {
            damping: config.damping,
            max_iterations: config.max_iterations,
            threshold: config.convergence_threshold,
            parallel: config.parallel,
        }
    }

    /// Set the damping factor, in `[0, 1]`
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold (finite, `>= 0`)
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Enable or disable parallel per-node updates
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Run PageRank on a graph
    ///
    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        debug_assert!(
            (0.0..=1.0).contains(&self.damping),
            "damping must be in [0, 1], got {}",
            self.damping
        );
        debug_assert!(
            self.threshold.is_finite() && self.threshold >= 0.0,
            "threshold must be finite and non-negative, got {}",
            self.threshold
        );

        let n = graph.num_nodes();
        if n == 0 {
            return PageRankResult::new(vec![], 0, 0.0, true);
        }

        // Initialize scores uniformly
        let initial_score = 1.0 / n as f64;
        let mut scores = vec![initial_score; n];
        let mut new_scores = vec![0.0; n];

        let degrees = graph.weighted_degrees();
        let dangling_nodes = graph.dangling_nodes();

        let teleport = (1.0 - self.damping) / n as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;
        let mut converged = false;

        while iterations < self.max_iterations {
            iterations += 1;

            let dangling_mass: f64 = dangling_nodes.iter().map(|&d| scores[d as usize]).sum();
            let base = teleport + self.damping * dangling_mass / n as f64;

            if self.parallel {
                new_scores.par_iter_mut().enumerate().for_each(|(node, slot)| {
                    *slot = self.pull(graph, degrees, &scores, base, node);
                });
            } else {
                for (node, slot) in new_scores.iter_mut().enumerate() {
                    *slot = self.pull(graph, degrees, &scores, base, node);
                }
            }

            // Calculate convergence delta (L1 norm)
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);

            if delta < self.threshold {
                converged = true;
                break;
            }
        }

        // Normalize scores (they should already sum to ~1, but ensure numerical stability)
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(nodes = n, iterations, delta, converged, "pagerank finished");
            if !converged {
                tracing::warn!(
                    max_iterations = self.max_iterations,
                    delta,
                    "pagerank hit the iteration cap; returning best-effort scores"
                );
            }
        }

        PageRankResult::new(scores, iterations, delta, converged)
    }

    /// New score of one node, computed from the previous vector
    #[inline]
    fn pull(
        &self,
        graph: &CsrGraph,
        degrees: &[f64],
        scores: &[f64],
        base: f64,
        node: usize,
    ) -> f64 {
        let incoming: f64 = graph
            .neighbors(node as u32)
            .map(|(neighbor, weight)| {
                let neighbor = neighbor as usize;
                scores[neighbor] * weight / degrees[neighbor]
            })
            .sum();
        base + self.damping * incoming
    }
}
