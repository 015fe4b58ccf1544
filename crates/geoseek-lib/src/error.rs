use thiserror::Error;

use crate::node::NodeKey;

/// Convenient result alias for the geoseek library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a latitude/longitude pair is non-finite or out of range.
    #[error("invalid coordinate: lat {lat}, lng {lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },

    /// Raised when a node key string is not a `lat,lng` pair.
    #[error("invalid node key '{input}'; expected 'lat,lng'")]
    InvalidKey { input: String },

    /// Raised when an edge weight is negative or non-finite.
    #[error("invalid edge weight: {weight}")]
    InvalidWeight { weight: f64 },

    /// Raised when a requested location has no node in the graph.
    #[error("no graph node at {key}")]
    UnknownNode { key: NodeKey },

    /// Raised when no route could be found between two nodes.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: NodeKey, goal: NodeKey },

    /// Raised when a computed route plan lacks any nodes.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Raised when snapping is requested against a graph without nodes.
    #[error("graph contains no nodes")]
    EmptyGraph,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
