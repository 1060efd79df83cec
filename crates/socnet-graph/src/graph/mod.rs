//! Graph capability trait and its petgraph-backed implementation.
//!
//! # Overview
//!
//! The metrics engine never depends on a concrete graph container. It only
//! needs a handful of capabilities, captured by [`Graph`]:
//!
//! - node enumeration and membership,
//! - outgoing (`adjacent`) and incoming (`incident`) neighbour enumeration,
//! - directedness and multigraph flags,
//! - vertex/edge counts and edge multiplicity.
//!
//! [`SocialGraph`] is the implementation shipped with this crate. Anything
//! else (a CSR snapshot, a database view) can implement the trait and be
//! handed to the distance calculator.
//!
//! ## Undirected graphs
//!
//! For undirected graphs `adjacent_nodes`, `incident_nodes` and the `Und`
//! neighbourhood all coincide, and `contains_edge(u, v) == contains_edge(v, u)`.

pub mod social;

pub use social::SocialGraph;

use std::hash::Hash;

/// Which neighbourhood of a node a query refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeOrientation {
    /// Targets of outgoing edges.
    #[default]
    Out,
    /// Sources of incoming edges.
    In,
    /// Union of incoming and outgoing neighbours.
    Und,
    /// Neighbours linked in both directions.
    Mutual,
}

impl EdgeOrientation {
    /// The orientation seen from the other endpoint of an edge.
    #[must_use]
    pub const fn invert(self) -> Self {
        match self {
            Self::Out => Self::In,
            Self::In => Self::Out,
            Self::Und => Self::Und,
            Self::Mutual => Self::Mutual,
        }
    }
}

/// Read-only view of a graph, as consumed by the metrics engine.
///
/// Implementations must be stable for the duration of any computation that
/// borrows them: node enumeration order and adjacency must not change while
/// a borrow is alive.
pub trait Graph<V>
where
    V: Clone + Eq + Hash,
{
    /// Whether edges have a direction.
    fn is_directed(&self) -> bool;

    /// Whether parallel edges between the same pair of nodes are allowed.
    fn is_multigraph(&self) -> bool {
        false
    }

    /// Number of nodes.
    fn vertex_count(&self) -> usize;

    /// Number of edges (an undirected edge counts once, parallel edges count
    /// individually).
    fn edge_count(&self) -> usize;

    /// All nodes, in a stable order.
    fn nodes(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Whether `node` belongs to the graph.
    fn contains_node(&self, node: &V) -> bool;

    /// Distinct targets of edges leaving `node` (all neighbours if undirected).
    fn adjacent_nodes(&self, node: &V) -> Vec<V>;

    /// Distinct sources of edges entering `node` (all neighbours if undirected).
    fn incident_nodes(&self, node: &V) -> Vec<V>;

    /// Whether at least one edge `from -> to` exists.
    fn contains_edge(&self, from: &V, to: &V) -> bool;

    /// Number of parallel edges `from -> to`.
    fn num_edges(&self, from: &V, to: &V) -> usize {
        usize::from(self.contains_edge(from, to))
    }

    /// Distinct neighbours of `node` under `orientation`.
    fn neighbour_nodes(&self, node: &V, orientation: EdgeOrientation) -> Vec<V> {
        match orientation {
            EdgeOrientation::Out => self.adjacent_nodes(node),
            EdgeOrientation::In => self.incident_nodes(node),
            EdgeOrientation::Und => {
                let mut all = self.adjacent_nodes(node);
                for v in self.incident_nodes(node) {
                    if !all.contains(&v) {
                        all.push(v);
                    }
                }
                all
            }
            EdgeOrientation::Mutual => {
                let incident = self.incident_nodes(node);
                self.adjacent_nodes(node)
                    .into_iter()
                    .filter(|v| incident.contains(v))
                    .collect()
            }
        }
    }

    /// Fingerprint of the graph contents, if the implementation tracks one.
    ///
    /// Distance structures record it so a later call can tell whether the
    /// graph changed since they were computed.
    fn content_hash(&self) -> Option<String> {
        None
    }

    /// Number of distinct neighbours of `node` under `orientation`.
    fn degree(&self, node: &V, orientation: EdgeOrientation) -> usize {
        self.neighbour_nodes(node, orientation).len()
    }
}
