//! Dense snapshot of a [`Graph`] used by the distance calculator.
//!
//! # Overview
//!
//! Brandes' algorithm touches every arc once per source, so the calculator
//! works on a compact CSR copy instead of calling back into the graph trait:
//!
//! - [`NodeIndexer`] assigns each node a dense slot `0..n` in the graph's
//!   enumeration order.
//! - [`Projection`] stores the distinct out-neighbours of every slot in one
//!   flat `targets` array, sorted per slot. Parallel edges collapse to a
//!   single arc; an undirected edge becomes two arcs.
//!
//! Arc positions in `targets` double as edge identifiers, so per-edge
//! accumulators are plain `Vec<f64>` indexed by arc.

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Range;

use petgraph::graph::{DiGraph, NodeIndex};
use socnet_graph::Graph;

// ---------------------------------------------------------------------------
// NodeIndexer
// ---------------------------------------------------------------------------

/// Bidirectional mapping between node identifiers and dense slots.
#[derive(Debug, Clone)]
pub struct NodeIndexer<V> {
    slot_to_node: Vec<V>,
    node_to_slot: HashMap<V, usize>,
}

impl<V> NodeIndexer<V>
where
    V: Clone + Eq + Hash,
{
    /// Index every node of `graph` in enumeration order.
    pub fn from_graph<G>(graph: &G) -> Self
    where
        G: Graph<V> + ?Sized,
    {
        let mut slot_to_node = Vec::with_capacity(graph.vertex_count());
        let mut node_to_slot = HashMap::with_capacity(graph.vertex_count());
        for node in graph.nodes() {
            if !node_to_slot.contains_key(node) {
                node_to_slot.insert(node.clone(), slot_to_node.len());
                slot_to_node.push(node.clone());
            }
        }
        Self {
            slot_to_node,
            node_to_slot,
        }
    }

    pub fn slot(&self, node: &V) -> Option<usize> {
        self.node_to_slot.get(node).copied()
    }

    pub fn node(&self, slot: usize) -> &V {
        &self.slot_to_node[slot]
    }

    pub fn nodes(&self) -> &[V] {
        &self.slot_to_node
    }

    pub fn len(&self) -> usize {
        self.slot_to_node.len()
    }
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Compressed sparse row adjacency over dense slots.
#[derive(Debug, Clone, Default)]
pub struct Projection {
    offsets: Vec<usize>,
    targets: Vec<usize>,
}

impl Projection {
    /// Build the CSR adjacency of `graph` over the slots of `indexer`.
    ///
    /// Neighbours the indexer does not know about are skipped.
    pub fn from_graph<V, G>(graph: &G, indexer: &NodeIndexer<V>) -> Self
    where
        V: Clone + Eq + Hash,
        G: Graph<V> + ?Sized,
    {
        let n = indexer.len();
        let mut offsets = Vec::with_capacity(n + 1);
        let mut targets = Vec::new();
        offsets.push(0);

        for node in indexer.nodes() {
            let mut row: Vec<usize> = graph
                .adjacent_nodes(node)
                .iter()
                .filter_map(|w| indexer.slot(w))
                .collect();
            row.sort_unstable();
            row.dedup();
            targets.extend(row);
            offsets.push(targets.len());
        }

        Self { offsets, targets }
    }

    pub fn node_count(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    pub fn arc_count(&self) -> usize {
        self.targets.len()
    }

    /// Arc identifiers leaving `slot`.
    pub fn arcs(&self, slot: usize) -> Range<usize> {
        self.offsets[slot]..self.offsets[slot + 1]
    }

    pub fn target(&self, arc: usize) -> usize {
        self.targets[arc]
    }

    pub fn out_neighbours(&self, slot: usize) -> &[usize] {
        &self.targets[self.arcs(slot)]
    }

    /// Identifier of the arc `from -> to`, if present.
    pub fn arc_index(&self, from: usize, to: usize) -> Option<usize> {
        let range = self.arcs(from);
        let start = range.start;
        self.targets[range]
            .binary_search(&to)
            .ok()
            .map(|offset| start + offset)
    }

    /// Petgraph view used for component detection.
    pub fn to_petgraph(&self) -> DiGraph<(), ()> {
        let n = self.node_count();
        let mut g = DiGraph::with_capacity(n, self.arc_count());
        for _ in 0..n {
            g.add_node(());
        }
        for from in 0..n {
            for &to in self.out_neighbours(from) {
                g.add_edge(NodeIndex::new(from), NodeIndex::new(to), ());
            }
        }
        g
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
