//! Per-node metrics.

mod betweenness;
mod closeness;
mod degree;
mod eccentricity;
mod harmonic;

pub use betweenness::NodeBetweenness;
pub use closeness::Closeness;
pub use degree::Degree;
pub use eccentricity::Eccentricity;
pub use harmonic::HarmonicCentrality;
