//! Number of shortest paths between two nodes.
//!
//! `σ(u, u) = 1` and unreachable pairs count `0`, so the pair average over a
//! graph with unreachable pairs is pulled towards zero.

use std::hash::Hash;

use socnet_graph::Graph;

use crate::distance::DistanceCalculator;
use crate::metrics::PairMetric;

#[derive(Debug)]
pub struct Geodesics<'a, V> {
    calculator: &'a DistanceCalculator<V>,
}

impl<'a, V> Geodesics<'a, V> {
    #[must_use]
    pub const fn new(calculator: &'a DistanceCalculator<V>) -> Self {
        Self { calculator }
    }
}

impl<V> PairMetric<V> for Geodesics<'_, V>
where
    V: Clone + Eq + Hash,
{
    fn compute<G>(&self, _graph: &G, orig: &V, dest: &V) -> f64
    where
        G: Graph<V> + ?Sized,
    {
        self.calculator.num_paths(orig, dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use socnet_graph::SocialGraph;

    #[test]
    fn square_has_two_geodesics_across() {
        // 1 - 2 - 3 - 4 - 1
        let mut g = SocialGraph::undirected();
        for (a, b) in [(1, 2), (2, 3), (3, 4), (4, 1)] {
            g.add_edge(a, b).expect("edge");
        }
        let mut dc = DistanceCalculator::new();
        dc.compute_distances(&g);
        let geo = Geodesics::new(&dc);
        assert!((geo.compute(&g, &1, &3) - 2.0).abs() < 1e-10);
        assert!((geo.compute(&g, &1, &2) - 1.0).abs() < 1e-10);
        // 8 adjacent ordered pairs with 1 path, 4 opposite with 2
        assert!((geo.average_value(&g) - 16.0 / 12.0).abs() < 1e-10);
        assert!((geo.average_value_only_links(&g) - 1.0).abs() < 1e-10);
    }
}
