//! Structural metrics over a [`Graph`].
//!
//! # Overview
//!
//! Metrics come in three shapes, one trait each:
//!
//! - [`VertexMetric`]: one value per node (closeness, betweenness, degree).
//! - [`PairMetric`]: one value per ordered pair of nodes (distance,
//!   geodesic count, edge betweenness).
//! - [`GraphMetric`]: one value for the whole graph (ASL, diameter,
//!   density, Gini indices).
//!
//! Distance-based metrics borrow a computed
//! [`DistanceCalculator`](crate::DistanceCalculator) and never mutate it, so
//! any number of them can share one set of tables. Metric values for nodes
//! outside the computed graph fall back to `0.0`.
//!
//! ```rust,ignore
//! let mut dc = DistanceCalculator::new();
//! dc.compute_distances(&graph);
//!
//! let closeness = Closeness::new(&dc).average_value(&graph);
//! let diameter = Diameter::new(&dc).compute(&graph);
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use socnet_graph::Graph;

pub mod graph;
pub mod pair;
pub mod vertex;

/// A value attached to every node.
pub trait VertexMetric<V>
where
    V: Clone + Eq + Hash,
{
    /// Value for a single node.
    fn compute<G>(&self, graph: &G, node: &V) -> f64
    where
        G: Graph<V> + ?Sized;

    /// Value for every node of `graph`.
    fn compute_all<G>(&self, graph: &G) -> HashMap<V, f64>
    where
        G: Graph<V> + ?Sized,
    {
        graph
            .nodes()
            .map(|node| (node.clone(), self.compute(graph, node)))
            .collect()
    }

    /// Mean over all nodes; `0.0` for a graph without nodes.
    #[allow(clippy::cast_precision_loss)]
    fn average_value<G>(&self, graph: &G) -> f64
    where
        G: Graph<V> + ?Sized,
    {
        let (sum, count) = graph
            .nodes()
            .fold((0.0, 0_usize), |(sum, count), node| {
                (sum + self.compute(graph, node), count + 1)
            });
        if count == 0 { 0.0 } else { sum / count as f64 }
    }
}

/// A value attached to every ordered pair of nodes.
pub trait PairMetric<V>
where
    V: Clone + Eq + Hash,
{
    /// Value for the ordered pair `orig -> dest`.
    fn compute<G>(&self, graph: &G, orig: &V, dest: &V) -> f64
    where
        G: Graph<V> + ?Sized;

    /// Value for every ordered pair of distinct nodes.
    fn compute_all<G>(&self, graph: &G) -> HashMap<(V, V), f64>
    where
        G: Graph<V> + ?Sized,
    {
        let mut values = HashMap::new();
        for u in graph.nodes() {
            for v in graph.nodes() {
                if u != v {
                    values.insert((u.clone(), v.clone()), self.compute(graph, u, v));
                }
            }
        }
        values
    }

    /// Value for every edge. An undirected edge appears once, in the
    /// orientation met first during node enumeration.
    fn compute_only_links<G>(&self, graph: &G) -> HashMap<(V, V), f64>
    where
        G: Graph<V> + ?Sized,
    {
        let mut values = HashMap::new();
        for u in graph.nodes() {
            for v in graph.adjacent_nodes(u) {
                if !graph.is_directed() && values.contains_key(&(v.clone(), u.clone())) {
                    continue;
                }
                let value = self.compute(graph, u, &v);
                values.insert((u.clone(), v), value);
            }
        }
        values
    }

    /// Mean over ordered pairs of distinct nodes; `0.0` if there are none.
    #[allow(clippy::cast_precision_loss)]
    fn average_value<G>(&self, graph: &G) -> f64
    where
        G: Graph<V> + ?Sized,
    {
        let mut sum = 0.0;
        let mut count = 0_usize;
        for u in graph.nodes() {
            for v in graph.nodes() {
                if u != v {
                    sum += self.compute(graph, u, v);
                    count += 1;
                }
            }
        }
        if count == 0 { 0.0 } else { sum / count as f64 }
    }

    /// Mean over the links of `graph`; `0.0` if there are none.
    ///
    /// Parallel edges of a multigraph form one link, so the denominator is
    /// the number of distinct pairs from [`Self::compute_only_links`], not
    /// [`Graph::edge_count`].
    #[allow(clippy::cast_precision_loss)]
    fn average_value_only_links<G>(&self, graph: &G) -> f64
    where
        G: Graph<V> + ?Sized,
    {
        let values = self.compute_only_links(graph);
        if values.is_empty() {
            0.0
        } else {
            values.values().sum::<f64>() / values.len() as f64
        }
    }
}

/// A single value describing the whole graph.
pub trait GraphMetric<V>
where
    V: Clone + Eq + Hash,
{
    fn compute<G>(&self, graph: &G) -> f64
    where
        G: Graph<V> + ?Sized;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use socnet_graph::SocialGraph;

    /// Out-degree as a vertex metric, sum of ids as a pair metric.
    struct Probe;

    impl VertexMetric<u32> for Probe {
        #[allow(clippy::cast_precision_loss)]
        fn compute<G>(&self, graph: &G, node: &u32) -> f64
        where
            G: Graph<u32> + ?Sized,
        {
            graph.adjacent_nodes(node).len() as f64
        }
    }

    impl PairMetric<u32> for Probe {
        fn compute<G>(&self, _graph: &G, orig: &u32, dest: &u32) -> f64
        where
            G: Graph<u32> + ?Sized,
        {
            f64::from(orig + dest)
        }
    }

    #[test]
    fn vertex_average_over_nodes() {
        let mut g = SocialGraph::directed();
        g.add_edge(1, 2).expect("edge");
        g.add_edge(1, 3).expect("edge");
        let avg = VertexMetric::average_value(&Probe, &g);
        assert!((avg - 2.0 / 3.0).abs() < 1e-10);
        let all = VertexMetric::compute_all(&Probe, &g);
        assert_eq!(all.len(), 3);
        assert!((all[&1] - 2.0).abs() < 1e-10);
    }

    #[test]
    fn averages_of_empty_graph_are_zero() {
        let g: SocialGraph<u32> = SocialGraph::undirected();
        assert!(VertexMetric::average_value(&Probe, &g).abs() < 1e-10);
        assert!(PairMetric::average_value(&Probe, &g).abs() < 1e-10);
        assert!(Probe.average_value_only_links(&g).abs() < 1e-10);
    }

    #[test]
    fn pair_average_skips_self_pairs() {
        let mut g = SocialGraph::directed();
        g.add_node(1);
        g.add_node(2);
        // (1,2) and (2,1) both sum to 3
        assert!((PairMetric::average_value(&Probe, &g) - 3.0).abs() < 1e-10);
        assert_eq!(PairMetric::compute_all(&Probe, &g).len(), 2);
    }

    #[test]
    fn undirected_links_are_counted_once() {
        let mut g = SocialGraph::undirected();
        g.add_edge(1, 2).expect("edge");
        g.add_edge(2, 3).expect("edge");
        let links = Probe.compute_only_links(&g);
        assert_eq!(links.len(), 2);
        assert!((Probe.average_value_only_links(&g) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn directed_links_follow_edges() {
        let mut g = SocialGraph::directed();
        g.add_edge(1, 2).expect("edge");
        g.add_edge(2, 1).expect("edge");
        assert_eq!(Probe.compute_only_links(&g).len(), 2);
    }

    #[test]
    fn parallel_edges_count_as_one_link() {
        let mut g = SocialGraph::directed_multigraph();
        g.add_edge(1, 2).expect("edge");
        g.add_edge(1, 2).expect("edge");
        g.add_edge(2, 3).expect("edge");
        assert_eq!(g.edge_count(), 3);
        assert_eq!(Probe.compute_only_links(&g).len(), 2);
        // (3 + 5) / 2 distinct links
        assert!((Probe.average_value_only_links(&g) - 4.0).abs() < 1e-10);
    }
}
