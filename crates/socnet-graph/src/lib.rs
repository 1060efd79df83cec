#![forbid(unsafe_code)]
//! socnet-graph library.
//!
//! The graph collaborator consumed by the metrics engine in `socnet-sna`:
//! a small capability trait ([`Graph`]) plus one concrete, petgraph-backed
//! implementation ([`SocialGraph`]).
//!
//! # Conventions
//!
//! - **Errors**: Typed with `thiserror` ([`GraphError`]).
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod error;
pub mod graph;

pub use error::GraphError;
pub use graph::{EdgeOrientation, Graph, SocialGraph};
