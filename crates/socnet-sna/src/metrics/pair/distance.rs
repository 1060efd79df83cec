//! Hop distance as a pair metric.
//!
//! Unreachable pairs are `f64::INFINITY`. The pair average never includes
//! them; [`AslMode`] picks which finite pairs count:
//!
//! - [`AslMode::NonInfinite`]: every pair with a path.
//! - [`AslMode::Components`]: only pairs inside one strongly connected
//!   component, pooled across components.

use std::hash::Hash;

use socnet_graph::Graph;

use crate::config::MetricsConfig;
use crate::distance::DistanceCalculator;
use crate::metrics::PairMetric;
use crate::metrics::graph::AslMode;

#[derive(Debug)]
pub struct Distance<'a, V> {
    calculator: &'a DistanceCalculator<V>,
    mode: AslMode,
}

impl<'a, V> Distance<'a, V> {
    #[must_use]
    pub const fn new(calculator: &'a DistanceCalculator<V>) -> Self {
        Self::with_mode(calculator, AslMode::NonInfinite)
    }

    #[must_use]
    pub const fn with_mode(calculator: &'a DistanceCalculator<V>, mode: AslMode) -> Self {
        Self { calculator, mode }
    }

    #[must_use]
    pub const fn from_config(calculator: &'a DistanceCalculator<V>, config: &MetricsConfig) -> Self {
        Self::with_mode(calculator, config.asl.mode)
    }
}

impl<V> PairMetric<V> for Distance<'_, V>
where
    V: Clone + Eq + Hash,
{
    fn compute<G>(&self, _graph: &G, orig: &V, dest: &V) -> f64
    where
        G: Graph<V> + ?Sized,
    {
        self.calculator
            .distance(orig, dest)
            .map_or(f64::INFINITY, f64::from)
    }

    #[allow(clippy::cast_precision_loss)]
    fn average_value<G>(&self, graph: &G) -> f64
    where
        G: Graph<V> + ?Sized,
    {
        let mut sum = 0_u64;
        let mut count = 0_usize;
        for u in graph.nodes() {
            for v in graph.nodes() {
                if u == v {
                    continue;
                }
                if self.mode == AslMode::Components
                    && self.calculator.scc_of(u) != self.calculator.scc_of(v)
                {
                    continue;
                }
                if let Some(d) = self.calculator.distance(u, v) {
                    sum += u64::from(d);
                    count += 1;
                }
            }
        }
        if count == 0 {
            0.0
        } else {
            sum as f64 / count as f64
        }
    }
}
