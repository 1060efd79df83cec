//! Errors raised while building a graph.

/// Errors that can occur when mutating a [`crate::SocialGraph`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The edge already exists and the graph does not allow parallel edges.
    #[error("edge {from} -> {to} already exists in a simple graph")]
    DuplicateEdge {
        /// Debug rendering of the origin node.
        from: String,
        /// Debug rendering of the destination node.
        to: String,
    },

    /// The node is not part of the graph.
    #[error("node not found: {0}")]
    NodeNotFound(String),
}

impl GraphError {
    pub(crate) fn duplicate_edge<V: std::fmt::Debug>(from: &V, to: &V) -> Self {
        Self::DuplicateEdge {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub(crate) fn node_not_found<V: std::fmt::Debug>(node: &V) -> Self {
        Self::NodeNotFound(format!("{node:?}"))
    }
}
