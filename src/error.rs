//! Error types for graph construction and algorithm runs.

use thiserror::Error;

/// Error type for all fallible graph operations.
///
/// Every variant is raised synchronously at the API boundary, before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum GraphError {
    /// Label is empty or contains non-alphabetic characters.
    #[error("invalid label '{0}': labels must be non-empty and alphabetic")]
    InvalidLabel(String),
    /// A vertex with this label is already registered.
    #[error("vertex '{0}' already exists")]
    DuplicateLabel(String),
    /// No vertex with this label is registered.
    #[error("vertex '{0}' not found")]
    UnknownVertex(String),
    /// Edge weights must be positive integers.
    #[error("invalid weight {0}: weights must be positive 64-bit integers")]
    InvalidWeight(i128),
    /// Tag does not name an algorithm (or an attribute group that can be reset).
    #[error("unknown algorithm '{0}'")]
    UnknownAlgorithm(String),
    /// Every assignable [`VertexId`](crate::vertex::VertexId) is taken.
    #[error("graph is full: at most {0} vertices can be registered")]
    TooManyVertices(u64),
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;
