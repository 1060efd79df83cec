//! Harmonic centrality: `Σ_{v ≠ u} 1 / d(u, v)` over reachable `v`,
//! divided by `n - 1`. Unreachable nodes contribute nothing.

use std::hash::Hash;

use socnet_graph::Graph;

use crate::distance::{DistanceCalculator, UNREACHABLE};
use crate::metrics::VertexMetric;

#[derive(Debug)]
pub struct HarmonicCentrality<'a, V> {
    calculator: &'a DistanceCalculator<V>,
}

impl<'a, V> HarmonicCentrality<'a, V> {
    #[must_use]
    pub const fn new(calculator: &'a DistanceCalculator<V>) -> Self {
        Self { calculator }
    }
}

impl<V> VertexMetric<V> for HarmonicCentrality<'_, V>
where
    V: Clone + Eq + Hash,
{
    #[allow(clippy::cast_precision_loss)]
    fn compute<G>(&self, _graph: &G, node: &V) -> f64
    where
        G: Graph<V> + ?Sized,
    {
        let Some(state) = self.calculator.state() else {
            return 0.0;
        };
        let Some(u) = state.slot(node) else {
            return 0.0;
        };
        let n = state.node_count();
        if n < 2 {
            return 0.0;
        }

        let sum: f64 = state
            .row(u)
            .iter()
            .filter(|&&d| d != 0 && d != UNREACHABLE)
            .map(|&d| 1.0 / f64::from(d))
            .sum();

        sum / (n - 1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use socnet_graph::SocialGraph;

    #[test]
    fn path_from_head() {
        // 1 -> 2 -> 3: 1/1 + 1/2 over 2
        let mut g = SocialGraph::directed();
        g.add_edge(1, 2).expect("edge");
        g.add_edge(2, 3).expect("edge");
        let mut dc = DistanceCalculator::new();
        dc.compute_distances(&g);
        let h = HarmonicCentrality::new(&dc);
        assert!((h.compute(&g, &1) - 0.75).abs() < 1e-10);
        assert!(h.compute(&g, &3).abs() < 1e-10);
    }

    #[test]
    fn single_node_scores_zero() {
        let mut g = SocialGraph::undirected();
        g.add_node(1);
        let mut dc = DistanceCalculator::new();
        dc.compute_distances(&g);
        assert!(HarmonicCentrality::new(&dc).compute(&g, &1).abs() < 1e-10);
    }
}
