//! Petgraph-backed social graph.
//!
//! # Overview
//!
//! [`SocialGraph`] stores nodes of any hashable identifier type in a
//! `petgraph` [`DiGraph`] and keeps a side map from identifier to
//! [`NodeIndex`]. Directedness and multigraph support are decided at
//! construction time:
//!
//! - **Directed**: an edge `A → B` is only visible from `A` as adjacent and
//!   from `B` as incident.
//! - **Undirected**: each edge is stored once; neighbour queries follow it in
//!   both directions.
//! - **Simple vs multigraph**: simple graphs reject a second `A → B` edge
//!   with [`GraphError::DuplicateEdge`]; multigraphs keep parallel edges and
//!   report their multiplicity through [`Graph::num_edges`].
//!
//! ## Cache Invalidation
//!
//! [`SocialGraph::fingerprint`] is a BLAKE3 fingerprint of the flags, node
//! order and edge set. Distance structures computed from this graph record
//! the same fingerprint so callers can detect when a recomputation is due.

use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

use petgraph::{
    Direction,
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};
use tracing::instrument;

use crate::error::GraphError;
use crate::graph::Graph;

// ---------------------------------------------------------------------------
// SocialGraph
// ---------------------------------------------------------------------------

/// A directed or undirected, simple or multi, unweighted graph.
#[derive(Debug, Clone)]
pub struct SocialGraph<V> {
    graph: DiGraph<V, ()>,
    node_map: HashMap<V, NodeIndex>,
    directed: bool,
    multigraph: bool,
}

impl<V> SocialGraph<V>
where
    V: Clone + Eq + Hash,
{
    /// Create an empty graph with the given flags.
    #[must_use]
    pub fn new(directed: bool, multigraph: bool) -> Self {
        Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
            directed,
            multigraph,
        }
    }

    /// Empty directed simple graph.
    #[must_use]
    pub fn directed() -> Self {
        Self::new(true, false)
    }

    /// Empty undirected simple graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(false, false)
    }

    /// Empty directed multigraph.
    #[must_use]
    pub fn directed_multigraph() -> Self {
        Self::new(true, true)
    }

    /// Empty undirected multigraph.
    #[must_use]
    pub fn undirected_multigraph() -> Self {
        Self::new(false, true)
    }

    /// Add a node. Returns `false` if it was already present.
    pub fn add_node(&mut self, node: V) -> bool {
        if self.node_map.contains_key(&node) {
            return false;
        }
        let idx = self.graph.add_node(node.clone());
        self.node_map.insert(node, idx);
        true
    }

    /// Add an edge, inserting missing endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateEdge`] if the graph is simple and the
    /// edge already exists (in either direction for undirected graphs).
    pub fn add_edge(&mut self, from: V, to: V) -> Result<(), GraphError>
    where
        V: std::fmt::Debug,
    {
        if !self.multigraph && self.contains_edge(&from, &to) {
            return Err(GraphError::duplicate_edge(&from, &to));
        }
        let a = self.ensure_node(from);
        let b = self.ensure_node(to);
        self.graph.add_edge(a, b, ());
        Ok(())
    }

    /// Remove one `from -> to` edge. Returns whether an edge was removed.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is absent.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> Result<bool, GraphError>
    where
        V: std::fmt::Debug,
    {
        let a = self
            .node_index(from)
            .ok_or_else(|| GraphError::node_not_found(from))?;
        let b = self
            .node_index(to)
            .ok_or_else(|| GraphError::node_not_found(to))?;

        let found = self.graph.find_edge(a, b).or_else(|| {
            if self.directed {
                None
            } else {
                self.graph.find_edge(b, a)
            }
        });

        Ok(found.and_then(|e| self.graph.remove_edge(e)).is_some())
    }

    /// Look up the petgraph index of a node.
    #[must_use]
    pub fn node_index(&self, node: &V) -> Option<NodeIndex> {
        self.node_map.get(node).copied()
    }

    /// BLAKE3 fingerprint of flags, node order and edge set.
    ///
    /// Stable for the lifetime of a build; node identifiers are fed through
    /// their [`Hash`] implementation.
    #[must_use]
    #[instrument(skip(self))]
    pub fn fingerprint(&self) -> String {
        let mut hasher = ContentHasher(blake3::Hasher::new());
        hasher.0.update(&[u8::from(self.directed), u8::from(self.multigraph)]);

        for node in self.graph.node_weights() {
            node.hash(&mut hasher);
            hasher.0.update(b"\x00");
        }

        let mut edges: Vec<(usize, usize)> = self
            .graph
            .edge_references()
            .map(|e| {
                let (a, b) = (e.source().index(), e.target().index());
                if self.directed { (a, b) } else { (a.min(b), a.max(b)) }
            })
            .collect();
        edges.sort_unstable();

        for (a, b) in edges {
            hasher.0.update(&(a as u64).to_le_bytes());
            hasher.0.update(&(b as u64).to_le_bytes());
        }

        format!("blake3:{}", hasher.0.finalize())
    }

    fn ensure_node(&mut self, node: V) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(&node) {
            return idx;
        }
        let idx = self.graph.add_node(node.clone());
        self.node_map.insert(node, idx);
        idx
    }

    fn distinct_neighbours(&self, node: &V, direction: Option<Direction>) -> Vec<V> {
        let Some(idx) = self.node_index(node) else {
            return Vec::new();
        };

        let mut seen = HashSet::new();
        let iter: Box<dyn Iterator<Item = NodeIndex> + '_> = match direction {
            Some(dir) => Box::new(self.graph.neighbors_directed(idx, dir)),
            None => Box::new(self.graph.neighbors_undirected(idx)),
        };

        iter.filter(|n| seen.insert(*n))
            .filter_map(|n| self.graph.node_weight(n).cloned())
            .collect()
    }
}

impl<V> Graph<V> for SocialGraph<V>
where
    V: Clone + Eq + Hash,
{
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn is_multigraph(&self) -> bool {
        self.multigraph
    }

    fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.graph.node_weights())
    }

    fn contains_node(&self, node: &V) -> bool {
        self.node_map.contains_key(node)
    }

    fn adjacent_nodes(&self, node: &V) -> Vec<V> {
        if self.directed {
            self.distinct_neighbours(node, Some(Direction::Outgoing))
        } else {
            self.distinct_neighbours(node, None)
        }
    }

    fn incident_nodes(&self, node: &V) -> Vec<V> {
        if self.directed {
            self.distinct_neighbours(node, Some(Direction::Incoming))
        } else {
            self.distinct_neighbours(node, None)
        }
    }

    fn contains_edge(&self, from: &V, to: &V) -> bool {
        self.num_edges(from, to) > 0
    }

    fn content_hash(&self) -> Option<String> {
        Some(self.fingerprint())
    }

    fn num_edges(&self, from: &V, to: &V) -> usize {
        let (Some(a), Some(b)) = (self.node_index(from), self.node_index(to)) else {
            return 0;
        };

        let forward = self.graph.edges_connecting(a, b).count();
        if self.directed || a == b {
            forward
        } else {
            forward + self.graph.edges_connecting(b, a).count()
        }
    }
}

/// Feeds `Hash` output into a BLAKE3 hasher.
struct ContentHasher(blake3::Hasher);

impl Hasher for ContentHasher {
    fn finish(&self) -> u64 {
        let digest = self.0.finalize();
        let mut head = [0u8; 8];
        head.copy_from_slice(&digest.as_bytes()[..8]);
        u64::from_le_bytes(head)
    }

    fn write(&mut self, bytes: &[u8]) {
        self.0.update(bytes);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
