//! Eccentricity: the largest finite distance from a node. Nodes that
//! reach nothing score `0.0`.

use std::hash::Hash;

use socnet_graph::Graph;

use crate::distance::{DistanceCalculator, UNREACHABLE};
use crate::metrics::VertexMetric;

#[derive(Debug)]
pub struct Eccentricity<'a, V> {
    calculator: &'a DistanceCalculator<V>,
}

impl<'a, V> Eccentricity<'a, V> {
    #[must_use]
    pub const fn new(calculator: &'a DistanceCalculator<V>) -> Self {
        Self { calculator }
    }
}

impl<V> VertexMetric<V> for Eccentricity<'_, V>
where
    V: Clone + Eq + Hash,
{
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
        state
            .row(u)
            .iter()
            .copied()
            .filter(|&d| d != UNREACHABLE)
            .max()
            .map_or(0.0, f64::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use socnet_graph::SocialGraph;

    #[test]
    fn ignores_unreachable_nodes() {
        // 1 -> 2 -> 3, isolated 4
        let mut g = SocialGraph::directed();
        g.add_edge(1, 2).expect("edge");
        g.add_edge(2, 3).expect("edge");
        g.add_node(4);
        let mut dc = DistanceCalculator::new();
        dc.compute_distances(&g);
        let e = Eccentricity::new(&dc);
        assert!((e.compute(&g, &1) - 2.0).abs() < 1e-10);
        assert!((e.compute(&g, &2) - 1.0).abs() < 1e-10);
        assert!(e.compute(&g, &4).abs() < 1e-10);
        assert!((e.average_value(&g) - 0.75).abs() < 1e-10);
    }
}
