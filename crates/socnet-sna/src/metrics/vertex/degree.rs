//! Degree centrality: number of distinct neighbours under an orientation.

use std::hash::Hash;

use socnet_graph::{EdgeOrientation, Graph};

use crate::metrics::VertexMetric;

#[derive(Debug, Clone, Copy, Default)]
pub struct Degree {
    orientation: EdgeOrientation,
}

impl Degree {
    #[must_use]
    pub const fn new(orientation: EdgeOrientation) -> Self {
        Self { orientation }
    }
}

impl<V> VertexMetric<V> for Degree
where
    V: Clone + Eq + Hash,
{
    #[allow(clippy::cast_precision_loss)]
    fn compute<G>(&self, graph: &G, node: &V) -> f64
    where
        G: Graph<V> + ?Sized,
    {
        graph.degree(node, self.orientation) as f64
    }
}
