//! Distance engine: dense projection, component detection and the
//! Brandes-based [`DistanceCalculator`].

mod calculator;
mod components;
mod projection;

pub use calculator::{DistanceCalculator, UNREACHABLE};
