//! Edge density and edge count.

use std::hash::Hash;

use socnet_graph::Graph;

use crate::metrics::GraphMetric;

/// Share of possible links that exist: `e / (n(n - 1))` for directed
/// graphs, `2e / (n(n - 1))` for undirected ones, `0.0` below two nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Density;

impl Density {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl<V> GraphMetric<V> for Density
where
    V: Clone + Eq + Hash,
{
    #[allow(clippy::cast_precision_loss)]
    fn compute<G>(&self, graph: &G) -> f64
    where
        G: Graph<V> + ?Sized,
    {
        let n = graph.vertex_count();
        if n < 2 {
            return 0.0;
        }
        let possible = (n * (n - 1)) as f64;
        let edges = graph.edge_count() as f64;
        if graph.is_directed() {
            edges / possible
        } else {
            2.0 * edges / possible
        }
    }
}

/// Number of edges, parallel edges included.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumEdges;

impl NumEdges {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl<V> GraphMetric<V> for NumEdges
where
    V: Clone + Eq + Hash,
{
    #[allow(clippy::cast_precision_loss)]
    fn compute<G>(&self, graph: &G) -> f64
    where
        G: Graph<V> + ?Sized,
    {
        graph.edge_count() as f64
    }
}
