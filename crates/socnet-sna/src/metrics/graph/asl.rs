//! Average shortest path length.
//!
//! Two ways of dealing with unreachable pairs, chosen by [`AslMode`]:
//!
//! - [`AslMode::NonInfinite`]: mean distance over every ordered pair
//!   `u ≠ v` that has a path.
//! - [`AslMode::Components`]: mean, over strongly connected components, of
//!   each component's own mean internal distance. Singleton components
//!   contribute `0.0`.
//!
//! Both modes return `0.0` when nothing qualifies.

use std::hash::Hash;

use serde::{Deserialize, Serialize};
use socnet_graph::Graph;

use crate::config::MetricsConfig;
use crate::distance::DistanceCalculator;
use crate::metrics::GraphMetric;

/// Which node pairs an average distance is taken over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AslMode {
    /// Every pair with a finite distance.
    #[default]
    NonInfinite,
    /// Pairs inside one strongly connected component.
    Components,
}

#[derive(Debug)]
pub struct Asl<'a, V> {
    calculator: &'a DistanceCalculator<V>,
    mode: AslMode,
}

impl<'a, V> Asl<'a, V> {
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

impl<V> GraphMetric<V> for Asl<'_, V>
where
    V: Clone + Eq + Hash,
{
    #[allow(clippy::cast_precision_loss)]
    fn compute<G>(&self, _graph: &G) -> f64
    where
        G: Graph<V> + ?Sized,
    {
        match self.mode {
            AslMode::NonInfinite => self.calculator.asl(),
            AslMode::Components => {
                let Some(state) = self.calculator.state() else {
                    return 0.0;
                };
                let components = state.components();
                if components.count() == 0 {
                    return 0.0;
                }

                let total: f64 = components
                    .iter()
                    .filter(|members| members.len() > 1)
                    .map(|members| {
                        let sum: u64 = members
                            .iter()
                            .flat_map(|&u| members.iter().map(move |&v| (u, v)))
                            .map(|(u, v)| u64::from(state.distance_at(u, v)))
                            .sum();
                        let pairs = members.len() * (members.len() - 1);
                        sum as f64 / pairs as f64
                    })
                    .sum();

                total / components.count() as f64
            }
        }
    }
}
