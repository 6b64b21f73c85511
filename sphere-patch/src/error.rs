//! Error types for the sphere-patch crate.

use thiserror::Error;

/// Main error type for sphere-patch operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Caller-supplied vertex buffer does not match the descriptor's derived
    /// vertex count.
    #[error("invalid vertex buffer size: expected {expected}, got {actual}")]
    VertexBufferSize { expected: usize, actual: usize },

    /// Caller-supplied triangle buffer does not match the descriptor's
    /// derived triangle count.
    #[error("invalid triangle buffer size: expected {expected}, got {actual}")]
    TriangleBufferSize { expected: usize, actual: usize },

    /// IO error for export operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
