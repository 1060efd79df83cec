//! Per-pair metrics.

mod distance;
mod edge_betweenness;
mod geodesics;

pub use distance::Distance;
pub use edge_betweenness::EdgeBetweenness;
pub use geodesics::Geodesics;
