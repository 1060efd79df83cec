//! Node betweenness centrality.
//!
//! Raw scores come from the calculator's Brandes pass, which counts every
//! ordered pair `(s, t)`. Normalization divides by the number of pairs a
//! node could lie between:
//!
//! - directed: `(n - 1)(n - 2)`
//! - undirected: `(n - 1)(n - 2) / 2`
//!
//! Undirected raw scores still count both `(s, t)` and `(t, s)`, so the
//! undirected normalized score of a node ranges over `[0, 2]`. Graphs with
//! fewer than three nodes have no intermediate nodes and normalize to
//! `0.0`.

use std::hash::Hash;

use socnet_graph::Graph;

use crate::config::MetricsConfig;
use crate::distance::DistanceCalculator;
use crate::metrics::VertexMetric;

#[derive(Debug)]
pub struct NodeBetweenness<'a, V> {
    calculator: &'a DistanceCalculator<V>,
    normalize: bool,
}

impl<'a, V> NodeBetweenness<'a, V> {
    /// Normalized node betweenness.
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

impl<V> VertexMetric<V> for NodeBetweenness<'_, V>
where
    V: Clone + Eq + Hash,
{
    #[allow(clippy::cast_precision_loss)]
    fn compute<G>(&self, _graph: &G, node: &V) -> f64
    where
        G: Graph<V> + ?Sized,
    {
        let raw = self.calculator.node_betweenness(node);
        if !self.normalize {
            return raw;
        }

        let n = self.calculator.vertex_count();
        if n < 3 {
            return 0.0;
        }
        let mut pairs = ((n - 1) * (n - 2)) as f64;
        if !self.calculator.is_directed() {
            pairs /= 2.0;
        }
        raw / pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use socnet_graph::SocialGraph;

    fn path(directed: bool) -> SocialGraph<u32> {
        // 1 - 2 - 3
        let mut g = SocialGraph::new(directed, false);
        g.add_edge(1, 2).expect("edge");
        g.add_edge(2, 3).expect("edge");
        g
    }

    #[test]
    fn directed_path_middle() {
        let g = path(true);
        let mut dc = DistanceCalculator::new();
        dc.compute_distances(&g);
        let raw = NodeBetweenness::with_normalization(&dc, false);
        assert!((raw.compute(&g, &2) - 1.0).abs() < 1e-10);
        // 1 of 2 ordered pairs
        assert!((NodeBetweenness::new(&dc).compute(&g, &2) - 0.5).abs() < 1e-10);
    }

    #[test]
    fn undirected_path_middle_counts_both_directions() {
        let g = path(false);
        let mut dc = DistanceCalculator::new();
        dc.compute_distances(&g);
        let raw = NodeBetweenness::with_normalization(&dc, false);
        // (1, 3) and (3, 1)
        assert!((raw.compute(&g, &2) - 2.0).abs() < 1e-10);
        // over the single unordered pair
        assert!((NodeBetweenness::new(&dc).compute(&g, &2) - 2.0).abs() < 1e-10);
        assert!(NodeBetweenness::new(&dc).compute(&g, &1).abs() < 1e-10);
    }

    #[test]
    fn config_controls_normalization() {
        let g = path(true);
        let mut dc = DistanceCalculator::new();
        dc.compute_distances(&g);
        let mut cfg = MetricsConfig::default();
        cfg.betweenness.normalize = false;
        let nb = NodeBetweenness::from_config(&dc, &cfg);
        assert!((nb.compute(&g, &2) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn two_nodes_normalize_to_zero() {
        let mut g = SocialGraph::directed();
        g.add_edge(1, 2).expect("edge");
        let mut dc = DistanceCalculator::new();
        dc.compute_distances(&g);
        assert!(NodeBetweenness::new(&dc).compute(&g, &1).abs() < 1e-10);
    }
}
