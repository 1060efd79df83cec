//! Global clustering coefficient.
//!
//! Counts ordered triplets `a → b → c` with three distinct nodes and
//! reports the share that is closed by an edge `a → c`. Undirected edges
//! are followed both ways, so each undirected triangle contributes six
//! closed triplets. Graphs without triplets score `0.0`.

use std::hash::Hash;

use socnet_graph::Graph;
use tracing::trace;

use crate::metrics::GraphMetric;

#[derive(Debug, Clone, Copy, Default)]
pub struct ClusteringCoefficient;

impl ClusteringCoefficient {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl<V> GraphMetric<V> for ClusteringCoefficient
where
    V: Clone + Eq + Hash,
{
    #[allow(clippy::cast_precision_loss)]
    fn compute<G>(&self, graph: &G) -> f64
    where
        G: Graph<V> + ?Sized,
    {
        let mut triplets = 0_u64;
        let mut closed = 0_u64;

        for b in graph.nodes() {
            let ins: Vec<V> = graph
                .incident_nodes(b)
                .into_iter()
                .filter(|a| a != b)
                .collect();
            let outs: Vec<V> = graph
                .adjacent_nodes(b)
                .into_iter()
                .filter(|c| c != b)
                .collect();

            for a in &ins {
                for c in outs.iter().filter(|&c| c != a) {
                    triplets += 1;
                    if graph.contains_edge(a, c) {
                        closed += 1;
                    }
                }
            }
        }

        trace!(triplets, closed, "clustering triplets counted");
        if triplets == 0 {
            0.0
        } else {
            closed as f64 / triplets as f64
        }
    }
}
