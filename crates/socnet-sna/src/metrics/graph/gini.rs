//! Gini-based evenness of degrees and of edge multiplicities.
//!
//! Both metrics report `1 - G` (the Gini complement), so `1.0` means the
//! quantity is spread evenly and values near `0.0` mean it is concentrated.

use std::hash::Hash;

use socnet_graph::{EdgeOrientation, Graph};

use crate::gini::gini_index_with;
use crate::metrics::GraphMetric;

/// Evenness of node degrees under an orientation. Graphs without nodes
/// score `NaN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DegreeGini {
    orientation: EdgeOrientation,
}

impl DegreeGini {
    #[must_use]
    pub const fn new(orientation: EdgeOrientation) -> Self {
        Self { orientation }
    }
}

impl<V> GraphMetric<V> for DegreeGini
where
    V: Clone + Eq + Hash,
{
    #[allow(clippy::cast_precision_loss)]
    fn compute<G>(&self, graph: &G) -> f64
    where
        G: Graph<V> + ?Sized,
    {
        let degrees: Vec<f64> = graph
            .nodes()
            .map(|u| graph.degree(u, self.orientation) as f64)
            .collect();
        if degrees.is_empty() {
            return f64::NAN;
        }
        let sum = degrees.iter().sum();
        1.0 - gini_index_with(&degrees, degrees.len(), sum)
    }
}

/// Which node pairs take part in [`EdgeGini`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EdgeGiniMode {
    /// Pairs of distinct nodes only; self-loops are ignored.
    #[default]
    Interlinks,
    /// Pairs of distinct nodes plus one bucket holding every self-loop.
    SemiComplete,
    /// Pairs of distinct nodes plus one bucket per node for its self-loops.
    Complete,
}

/// Evenness of edge multiplicities across node pairs.
///
/// Directed graphs use ordered pairs, undirected graphs unordered ones.
/// Only multigraphs can have uneven multiplicities; simple graphs score
/// `NaN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeGini {
    mode: EdgeGiniMode,
}

impl EdgeGini {
    #[must_use]
    pub const fn new(mode: EdgeGiniMode) -> Self {
        Self { mode }
    }
}

impl<V> GraphMetric<V> for EdgeGini
where
    V: Clone + Eq + Hash,
{
    #[allow(clippy::cast_precision_loss)]
    fn compute<G>(&self, graph: &G) -> f64
    where
        G: Graph<V> + ?Sized,
    {
        if !graph.is_multigraph() {
            return f64::NAN;
        }

        let nodes: Vec<&V> = graph.nodes().collect();
        let mut counts: Vec<f64> = Vec::new();
        for (i, &u) in nodes.iter().enumerate() {
            for (j, &v) in nodes.iter().enumerate() {
                let wanted = if graph.is_directed() { i != j } else { i < j };
                if wanted {
                    counts.push(graph.num_edges(u, v) as f64);
                }
            }
        }

        let loops = nodes.iter().map(|&u| graph.num_edges(u, u) as f64);
        match self.mode {
            EdgeGiniMode::Interlinks => {}
            EdgeGiniMode::SemiComplete => counts.push(loops.sum()),
            EdgeGiniMode::Complete => counts.extend(loops),
        }

        let sum = counts.iter().sum();
        1.0 - gini_index_with(&counts, counts.len(), sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use socnet_graph::SocialGraph;

    fn value<M: GraphMetric<u32>>(metric: &M, g: &SocialGraph<u32>) -> f64 {
        metric.compute(g)
    }

    #[test]
    fn regular_graph_has_even_degrees() {
        let mut g = SocialGraph::undirected();
        for (a, b) in [(1, 2), (2, 3), (3, 1)] {
            g.add_edge(a, b).expect("edge");
        }
        let dg = DegreeGini::new(EdgeOrientation::Und);
        assert!((value(&dg, &g) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn star_in_degrees_are_concentrated() {
        // 1, 2, 3 -> 0: in-degrees [0, 0, 0, 3]
        let mut g = SocialGraph::directed();
        for leaf in 1..=3 {
            g.add_edge(leaf, 0).expect("edge");
        }
        let dg = DegreeGini::new(EdgeOrientation::In);
        assert!(value(&dg, &g).abs() < 1e-10);
    }

    #[test]
    fn degree_gini_of_graph_without_nodes_is_nan() {
        let g = SocialGraph::directed();
        assert!(value(&DegreeGini::default(), &g).is_nan());
    }

    #[test]
    fn edge_gini_requires_multigraph() {
        let mut g = SocialGraph::directed();
        g.add_edge(1, 2).expect("edge");
        assert!(value(&EdgeGini::default(), &g).is_nan());
    }

    #[test]
    fn edge_gini_modes_on_directed_multigraph() {
        // pairs over {1, 2}: (1,2) x2, (2,1) x0; loops: 1 x2
        let mut g = SocialGraph::directed_multigraph();
        g.add_edge(1, 2).expect("edge");
        g.add_edge(1, 2).expect("edge");
        g.add_edge(1, 1).expect("edge");
        g.add_edge(1, 1).expect("edge");

        // [0, 2]: G = 1
        let inter = value(&EdgeGini::new(EdgeGiniMode::Interlinks), &g);
        assert!(inter.abs() < 1e-10);
        // [0, 2, 2]: G = (0 + 0 + 2*2) / (2 * 4) = 0.5
        let semi = value(&EdgeGini::new(EdgeGiniMode::SemiComplete), &g);
        assert!((semi - 0.5).abs() < 1e-10);
        // [0, 0, 2, 2]: G = (-3*0 - 0 + 2 + 3*2) / (3 * 4) = 2/3
        let complete = value(&EdgeGini::new(EdgeGiniMode::Complete), &g);
        assert!((complete - 1.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn undirected_pairs_are_unordered() {
        // K3 with each edge doubled is perfectly even
        let mut g = SocialGraph::undirected_multigraph();
        for (a, b) in [(1, 2), (2, 3), (3, 1)] {
            g.add_edge(a, b).expect("edge");
            g.add_edge(b, a).expect("edge");
        }
        let eg = EdgeGini::new(EdgeGiniMode::Interlinks);
        assert!((value(&eg, &g) - 1.0).abs() < 1e-10);
    }
}
