#![forbid(unsafe_code)]
//! socnet-sna library.
//!
//! Distance-based structural analysis of social networks. A
//! [`DistanceCalculator`] runs Brandes' algorithm once over a
//! [`socnet_graph::Graph`] and caches distances, shortest-path counts,
//! node and edge betweenness and strongly connected components. The
//! metrics in [`metrics`] read from those tables.
//!
//! # Conventions
//!
//! - **Errors**: Configuration loading returns `anyhow::Result` with file
//!   context. Metric computations are infallible; degenerate inputs map to
//!   documented sentinel values (`0.0`, `NaN`, `f64::INFINITY`).
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).
//! - **Parallelism**: Large graphs are processed on rayon; see
//!   [`config::DistanceConfig`].

pub mod config;
pub mod distance;
pub mod gini;
pub mod metrics;

pub use config::{MetricsConfig, load_metrics_config, load_user_metrics_config};
pub use distance::{DistanceCalculator, UNREACHABLE};
pub use metrics::{GraphMetric, PairMetric, VertexMetric};
