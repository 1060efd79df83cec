//! Whole-graph metrics.

mod asl;
mod clustering;
mod density;
mod diameter;
mod gini;

pub use asl::{Asl, AslMode};
pub use clustering::ClusteringCoefficient;
pub use density::{Density, NumEdges};
pub use diameter::Diameter;
pub use gini::{DegreeGini, EdgeGini, EdgeGiniMode};
