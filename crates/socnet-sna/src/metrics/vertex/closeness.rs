//! Closeness centrality restricted to the node's strongly connected
//! component.
//!
//! For a node `u` in component `C`:
//!
//! ```text
//! closeness(u) = (|C| - 1) / Σ_{v ∈ C} d(u, v)
//! ```
//!
//! Nodes whose component is a singleton score `0.0`. Restricting the sum to
//! `C` keeps every term finite, so disconnected graphs still get a
//! meaningful value per component.

use std::hash::Hash;

use socnet_graph::Graph;

use crate::distance::DistanceCalculator;
use crate::metrics::VertexMetric;

#[derive(Debug)]
pub struct Closeness<'a, V> {
    calculator: &'a DistanceCalculator<V>,
}

impl<'a, V> Closeness<'a, V> {
    #[must_use]
    pub const fn new(calculator: &'a DistanceCalculator<V>) -> Self {
        Self { calculator }
    }
}

impl<V> VertexMetric<V> for Closeness<'_, V>
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

        let members = state.component_members(u);
        let total: u64 = members
            .iter()
            .map(|&v| u64::from(state.distance_at(u, v)))
            .sum();

        if total == 0 {
            0.0
        } else {
            (members.len() - 1) as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use socnet_graph::SocialGraph;

    #[test]
    fn cycle_of_three() {
        // every node reaches the others at distances 1 and 2
        let mut g = SocialGraph::directed();
        for (a, b) in [(1, 2), (2, 3), (3, 1)] {
            g.add_edge(a, b).expect("edge");
        }
        let mut dc = DistanceCalculator::new();
        dc.compute_distances(&g);
        let c = Closeness::new(&dc);
        assert!((c.compute(&g, &1) - 2.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn singleton_component_scores_zero() {
        // 1 -> 2 has two singleton components
        let mut g = SocialGraph::directed();
        g.add_edge(1, 2).expect("edge");
        let mut dc = DistanceCalculator::new();
        dc.compute_distances(&g);
        let c = Closeness::new(&dc);
        assert!(c.compute(&g, &1).abs() < 1e-10);
        assert!(c.average_value(&g).abs() < 1e-10);
    }

    #[test]
    fn unknown_node_scores_zero() {
        let g: SocialGraph<u32> = SocialGraph::undirected();
        let mut dc = DistanceCalculator::new();
        dc.compute_distances(&g);
        assert!(Closeness::new(&dc).compute(&g, &9).abs() < 1e-10);
    }
}
