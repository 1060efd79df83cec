//! Edge betweenness centrality.
//!
//! Raw scores are the Brandes dependencies accumulated on each arc.
//! Normalization divides by the number of pairs an edge could carry:
//! `n(n - 1)` ordered pairs for directed graphs, `n(n - 1) / 2` for
//! undirected ones. Pairs that are not edges score `0.0`.

use std::hash::Hash;

use socnet_graph::Graph;

use crate::config::MetricsConfig;
use crate::distance::DistanceCalculator;
use crate::metrics::PairMetric;

#[derive(Debug)]
pub struct EdgeBetweenness<'a, V> {
    calculator: &'a DistanceCalculator<V>,
    normalize: bool,
}

impl<'a, V> EdgeBetweenness<'a, V> {
    /// Normalized edge betweenness.
    #[must_use]
    pub const fn new(calculator: &'a DistanceCalculator<V>) -> Self {
        Self::with_normalization(calculator, true)
    }

    #[must_use]
    pub const fn with_normalization(calculator: &'a DistanceCalculator<V>, normalize: bool) -> Self {
        Self {
            calculator,
            normalize,
        }
    }

    #[must_use]
    pub const fn from_config(calculator: &'a DistanceCalculator<V>, config: &MetricsConfig) -> Self {
        Self::with_normalization(calculator, config.betweenness.normalize)
    }
}

impl<V> PairMetric<V> for EdgeBetweenness<'_, V>
where
    V: Clone + Eq + Hash,
{
    #[allow(clippy::cast_precision_loss)]
    fn compute<G>(&self, graph: &G, orig: &V, dest: &V) -> f64
    where
        G: Graph<V> + ?Sized,
    {
        if !graph.contains_edge(orig, dest) {
            return 0.0;
        }
        let raw = self
            .calculator
            .edge_betweenness(orig, dest)
            .unwrap_or(0.0);
        if !self.normalize {
            return raw;
        }

        let n = self.calculator.vertex_count();
        if n < 2 {
            return 0.0;
        }
        let mut pairs = (n * (n - 1)) as f64;
        if !self.calculator.is_directed() {
            pairs /= 2.0;
        }
        raw / pairs
    }
}
