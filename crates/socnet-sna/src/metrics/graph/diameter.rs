//! Diameter: the largest finite distance between any two nodes, `0.0`
//! when no pair is connected.

use std::hash::Hash;

use socnet_graph::Graph;

use crate::distance::{DistanceCalculator, UNREACHABLE};
use crate::metrics::GraphMetric;

#[derive(Debug)]
pub struct Diameter<'a, V> {
    calculator: &'a DistanceCalculator<V>,
}

impl<'a, V> Diameter<'a, V> {
    #[must_use]
    pub const fn new(calculator: &'a DistanceCalculator<V>) -> Self {
        Self { calculator }
    }
}

impl<V> GraphMetric<V> for Diameter<'_, V>
where
    V: Clone + Eq + Hash,
{
    fn compute<G>(&self, _graph: &G) -> f64
    where
        G: Graph<V> + ?Sized,
    {
        let Some(state) = self.calculator.state() else {
            return 0.0;
        };
        (0..state.node_count())
            .flat_map(|u| state.row(u).iter().copied())
            .filter(|&d| d != UNREACHABLE)
            .max()
            .map_or(0.0, f64::from)
    }
}
