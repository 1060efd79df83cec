//! All-pairs distances, path counts and betweenness via Brandes' algorithm.
//!
//! # Overview
//!
//! [`DistanceCalculator::compute_distances`] runs one breadth-first search
//! per source node and, on the way back, accumulates Brandes dependencies.
//! A single pass therefore yields:
//!
//! - `d(s, t)`: hop distance, [`UNREACHABLE`] when `t` cannot be reached,
//! - `σ(s, t)`: number of distinct shortest paths (`f64`, exact up to 2^53),
//! - raw node betweenness (pairs counted once per ordered `(s, t)`),
//! - raw edge betweenness per arc.
//!
//! Strongly connected components, the average shortest path length over
//! finite pairs and the number of unreachable pairs are derived from the
//! same tables.
//!
//! # Algorithm
//!
//! For each source `s`:
//!
//! 1. BFS over the CSR [`Projection`]. A node is pushed onto the visit order
//!    when first discovered; every arc `v → w` with `d(w) = d(v) + 1` adds
//!    `σ(v)` to `σ(w)`.
//! 2. Walk the visit order backwards. For each `v` and each successor `w`
//!    one level further, `c = σ(v)/σ(w) · (1 + δ(w))` is added to `δ(v)` and
//!    to the arc `v → w`. Every successor of `v` has been finalized by then,
//!    so no predecessor lists are needed.
//! 3. `δ(v)` is added to the betweenness of every `v ≠ s`.
//!
//! Complexity: O(V · E) time, O(V²) memory for the distance and path tables.
//!
//! # Parallelism
//!
//! Sources are independent. Above [`DistanceConfig::parallel_threshold`]
//! nodes the per-source rows are filled with rayon's `fold`/`reduce`:
//! each worker writes disjoint rows of the tables and keeps its own
//! betweenness accumulators, which are summed at the end. Below the
//! threshold the same code runs sequentially.

use std::hash::Hash;
use std::time::Instant;

use rayon::prelude::*;
use socnet_graph::Graph;
use tracing::{debug, instrument, warn};

use super::components::Components;
use super::projection::{NodeIndexer, Projection};
use crate::config::{DistanceConfig, MetricsConfig};

/// Distance recorded for pairs with no connecting path.
pub const UNREACHABLE: u32 = u32::MAX;

// ---------------------------------------------------------------------------
// DistanceCalculator
// ---------------------------------------------------------------------------

/// Shared distance structure consumed by the metrics in [`crate::metrics`].
///
/// The calculator is built empty, filled by
/// [`compute_distances`](Self::compute_distances), and afterwards only
/// read. Queries on an empty calculator, or about nodes that were not part
/// of the computed graph, return the "nothing known" value of their type
/// (`None`, `0.0`, an empty list).
#[derive(Debug, Clone)]
pub struct DistanceCalculator<V> {
    config: DistanceConfig,
    state: Option<DistanceState<V>>,
}

impl<V> Default for DistanceCalculator<V> {
    fn default() -> Self {
        Self {
            config: DistanceConfig::default(),
            state: None,
        }
    }
}

impl<V> DistanceCalculator<V>
where
    V: Clone + Eq + Hash,
{
    /// Empty calculator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DistanceConfig::default())
    }

    #[must_use]
    pub const fn with_config(config: DistanceConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }

    #[must_use]
    pub const fn from_config(config: &MetricsConfig) -> Self {
        Self::with_config(config.distance)
    }

    #[must_use]
    pub const fn config(&self) -> DistanceConfig {
        self.config
    }

    /// Recompute every table from `graph`, replacing any previous result.
    #[instrument(skip(self, graph), fields(nodes = graph.vertex_count(), edges = graph.edge_count()))]
    pub fn compute_distances<G>(&mut self, graph: &G)
    where
        G: Graph<V> + ?Sized,
    {
        let started = Instant::now();

        let indexer = NodeIndexer::from_graph(graph);
        let projection = Projection::from_graph(graph, &indexer);
        let n = indexer.len();

        let mut distances = vec![UNREACHABLE; n * n];
        let mut geodesics = vec![0.0; n * n];
        let totals = if n == 0 {
            Accumulator::new(0, 0)
        } else if n < self.config.parallel_threshold {
            run_sequential(&projection, &mut distances, &mut geodesics)
        } else {
            self.run_pooled(&projection, &mut distances, &mut geodesics)
        };

        let components = Components::of(&projection);

        debug!(
            arcs = projection.arc_count(),
            components = components.count(),
            unreachable = (n * n.saturating_sub(1)).saturating_sub(totals.reachable_pairs),
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "distance tables computed"
        );

        self.state = Some(DistanceState {
            directed: graph.is_directed(),
            edge_count: graph.edge_count(),
            content_hash: graph.content_hash(),
            indexer,
            projection,
            components,
            distances,
            geodesics,
            node_betweenness: totals.node,
            edge_betweenness: totals.edge,
            reachable_pairs: totals.reachable_pairs,
            distance_sum: totals.distance_sum,
        });
    }

    fn run_pooled(
        &self,
        projection: &Projection,
        distances: &mut [u32],
        geodesics: &mut [f64],
    ) -> Accumulator {
        if self.config.threads == 0 {
            return run_parallel(projection, distances, geodesics);
        }
        match rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.threads)
            .build()
        {
            Ok(pool) => pool.install(|| run_parallel(projection, distances, geodesics)),
            Err(err) => {
                warn!(%err, threads = self.config.threads, "falling back to the global rayon pool");
                run_parallel(projection, distances, geodesics)
            }
        }
    }

    /// Whether [`compute_distances`](Self::compute_distances) has run.
    #[must_use]
    pub const fn is_computed(&self) -> bool {
        self.state.is_some()
    }

    /// Content hash of the graph the tables were computed from.
    #[must_use]
    pub fn content_hash(&self) -> Option<&str> {
        self.state.as_ref()?.content_hash.as_deref()
    }

    /// Whether the tables were computed from a graph with the same content
    /// hash as `graph`. Graphs that do not track a hash are never current.
    pub fn is_current_for<G>(&self, graph: &G) -> bool
    where
        G: Graph<V> + ?Sized,
    {
        match (self.content_hash(), graph.content_hash()) {
            (Some(ours), Some(theirs)) => ours == theirs,
            _ => false,
        }
    }

    /// Node count of the computed graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.state.as_ref().map_or(0, |s| s.indexer.len())
    }

    /// Edge count of the computed graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.state.as_ref().map_or(0, |s| s.edge_count)
    }

    /// Directedness of the computed graph.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.directed)
    }

    /// Hop distance `from -> to`, or `None` if unreachable or unknown.
    #[must_use]
    pub fn distance(&self, from: &V, to: &V) -> Option<u32> {
        let state = self.state.as_ref()?;
        let d = state.distance_at(state.slot(from)?, state.slot(to)?);
        (d != UNREACHABLE).then_some(d)
    }

    /// Number of shortest paths `from -> to` (`1` for a node to itself,
    /// `0` when unreachable).
    #[must_use]
    pub fn num_paths(&self, from: &V, to: &V) -> f64 {
        self.state
            .as_ref()
            .and_then(|s| Some(s.geodesics_at(s.slot(from)?, s.slot(to)?)))
            .unwrap_or(0.0)
    }

    /// Every node reachable from `from`, with its distance.
    #[must_use]
    pub fn distances_from(&self, from: &V) -> Vec<(&V, u32)> {
        let Some(state) = self.state.as_ref() else {
            return Vec::new();
        };
        let Some(s) = state.slot(from) else {
            return Vec::new();
        };
        state
            .row(s)
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d != UNREACHABLE)
            .map(|(t, &d)| (state.indexer.node(t), d))
            .collect()
    }

    /// Every node that reaches `to`, with its distance.
    #[must_use]
    pub fn distances_to(&self, to: &V) -> Vec<(&V, u32)> {
        let Some(state) = self.state.as_ref() else {
            return Vec::new();
        };
        let Some(t) = state.slot(to) else {
            return Vec::new();
        };
        (0..state.indexer.len())
            .filter_map(|s| {
                let d = state.distance_at(s, t);
                (d != UNREACHABLE).then_some((state.indexer.node(s), d))
            })
            .collect()
    }

    /// Raw (unnormalized) betweenness of `node`.
    #[must_use]
    pub fn node_betweenness(&self, node: &V) -> f64 {
        self.state
            .as_ref()
            .and_then(|s| s.slot(node).map(|slot| s.node_betweenness[slot]))
            .unwrap_or(0.0)
    }

    /// Raw betweenness of the edge `from -> to`, or `None` if there is no
    /// such edge. Undirected edges answer in both orientations.
    #[must_use]
    pub fn edge_betweenness(&self, from: &V, to: &V) -> Option<f64> {
        let state = self.state.as_ref()?;
        let arc = state
            .projection
            .arc_index(state.slot(from)?, state.slot(to)?)?;
        Some(state.edge_betweenness[arc])
    }

    /// Identifier of the strongly connected component containing `node`.
    ///
    /// Identifiers are dense and ordered by the first member in node
    /// enumeration order.
    #[must_use]
    pub fn scc_of(&self, node: &V) -> Option<usize> {
        let state = self.state.as_ref()?;
        Some(state.components.component_of(state.slot(node)?))
    }

    #[must_use]
    pub fn scc_count(&self) -> usize {
        self.state.as_ref().map_or(0, |s| s.components.count())
    }

    /// Members of every strongly connected component.
    #[must_use]
    pub fn sccs(&self) -> Vec<Vec<&V>> {
        let Some(state) = self.state.as_ref() else {
            return Vec::new();
        };
        state
            .components
            .iter()
            .map(|members| members.iter().map(|&s| state.indexer.node(s)).collect())
            .collect()
    }

    /// Mean distance over ordered pairs `u ≠ v` with a finite distance;
    /// `0.0` when there is none.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn asl(&self) -> f64 {
        match self.state.as_ref() {
            Some(s) if s.reachable_pairs > 0 => s.distance_sum as f64 / s.reachable_pairs as f64,
            _ => 0.0,
        }
    }

    /// Number of ordered pairs `u ≠ v` with no connecting path.
    #[must_use]
    pub fn unreachable_pairs(&self) -> usize {
        self.state.as_ref().map_or(0, |s| {
            let n = s.indexer.len();
            (n * n.saturating_sub(1)).saturating_sub(s.reachable_pairs)
        })
    }

    pub(crate) const fn state(&self) -> Option<&DistanceState<V>> {
        self.state.as_ref()
    }
}

// ---------------------------------------------------------------------------
// DistanceState
// ---------------------------------------------------------------------------

/// Tables produced by one computation, addressed by dense slot.
#[derive(Debug, Clone)]
pub(crate) struct DistanceState<V> {
    directed: bool,
    edge_count: usize,
    content_hash: Option<String>,
    indexer: NodeIndexer<V>,
    projection: Projection,
    components: Components,
    /// Row-major `n × n`.
    distances: Vec<u32>,
    /// Row-major `n × n`.
    geodesics: Vec<f64>,
    node_betweenness: Vec<f64>,
    edge_betweenness: Vec<f64>,
    reachable_pairs: usize,
    distance_sum: u64,
}

impl<V> DistanceState<V>
where
    V: Clone + Eq + Hash,
{
    pub(crate) fn slot(&self, node: &V) -> Option<usize> {
        self.indexer.slot(node)
    }

    pub(crate) fn node_count(&self) -> usize {
        self.indexer.len()
    }

    pub(crate) fn distance_at(&self, from: usize, to: usize) -> u32 {
        self.distances[from * self.indexer.len() + to]
    }

    pub(crate) fn geodesics_at(&self, from: usize, to: usize) -> f64 {
        self.geodesics[from * self.indexer.len() + to]
    }

    /// Distances from `from` to every slot.
    pub(crate) fn row(&self, from: usize) -> &[u32] {
        let n = self.indexer.len();
        &self.distances[from * n..(from + 1) * n]
    }

    pub(crate) const fn components(&self) -> &Components {
        &self.components
    }

    /// Slots sharing a strongly connected component with `slot`.
    pub(crate) fn component_members(&self, slot: usize) -> &[usize] {
        self.components
            .members(self.components.component_of(slot))
    }
}

// ---------------------------------------------------------------------------
// Brandes pass
// ---------------------------------------------------------------------------

/// Per-worker betweenness totals plus reusable scratch buffers.
struct Accumulator {
    node: Vec<f64>,
    edge: Vec<f64>,
    reachable_pairs: usize,
    distance_sum: u64,
    order: Vec<usize>,
    delta: Vec<f64>,
}

impl Accumulator {
    fn new(nodes: usize, arcs: usize) -> Self {
        Self {
            node: vec![0.0; nodes],
            edge: vec![0.0; arcs],
            reachable_pairs: 0,
            distance_sum: 0,
            order: Vec::with_capacity(nodes),
            delta: vec![0.0; nodes],
        }
    }

    fn merge(mut self, other: Self) -> Self {
        for (x, y) in self.node.iter_mut().zip(&other.node) {
            *x += y;
        }
        for (x, y) in self.edge.iter_mut().zip(&other.edge) {
            *x += y;
        }
        self.reachable_pairs += other.reachable_pairs;
        self.distance_sum += other.distance_sum;
        self
    }
}

fn run_sequential(
    projection: &Projection,
    distances: &mut [u32],
    geodesics: &mut [f64],
) -> Accumulator {
    let n = projection.node_count();
    distances
        .chunks_mut(n)
        .zip(geodesics.chunks_mut(n))
        .enumerate()
        .fold(
            Accumulator::new(n, projection.arc_count()),
            |mut acc, (s, (dist, sigma))| {
                single_source(projection, s, dist, sigma, &mut acc);
                acc
            },
        )
}

fn run_parallel(
    projection: &Projection,
    distances: &mut [u32],
    geodesics: &mut [f64],
) -> Accumulator {
    let n = projection.node_count();
    let arcs = projection.arc_count();
    distances
        .par_chunks_mut(n)
        .zip(geodesics.par_chunks_mut(n))
        .enumerate()
        .fold(
            || Accumulator::new(n, arcs),
            |mut acc, (s, (dist, sigma))| {
                single_source(projection, s, dist, sigma, &mut acc);
                acc
            },
        )
        .reduce(|| Accumulator::new(n, arcs), Accumulator::merge)
}

/// BFS from `s` into the row slices `dist`/`sigma`, then dependency
/// accumulation into `acc`. Rows must arrive filled with
/// [`UNREACHABLE`] and `0.0`.
fn single_source(
    projection: &Projection,
    s: usize,
    dist: &mut [u32],
    sigma: &mut [f64],
    acc: &mut Accumulator,
) {
    let order = &mut acc.order;
    order.clear();

    dist[s] = 0;
    sigma[s] = 1.0;
    order.push(s);

    let mut head = 0;
    while head < order.len() {
        let v = order[head];
        head += 1;
        let next = dist[v] + 1;
        for &w in projection.out_neighbours(v) {
            if dist[w] == UNREACHABLE {
                dist[w] = next;
                order.push(w);
            }
            if dist[w] == next {
                sigma[w] += sigma[v];
            }
        }
    }

    let delta = &mut acc.delta;
    for &v in order.iter() {
        delta[v] = 0.0;
    }

    for &v in order.iter().rev() {
        let next = dist[v] + 1;
        for arc in projection.arcs(v) {
            let w = projection.target(arc);
            if dist[w] == next {
                let c = sigma[v] / sigma[w] * (1.0 + delta[w]);
                delta[v] += c;
                acc.edge[arc] += c;
            }
        }
        if v != s {
            acc.node[v] += delta[v];
            acc.distance_sum += u64::from(dist[v]);
        }
    }

    acc.reachable_pairs += order.len() - 1;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
