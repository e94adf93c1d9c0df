//! Error types for rs-outliner.
//!
//! This module defines the error types returned by outlining operations.

/// Error type for outlining operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A text node had no parent to anchor the wrapper insertion.
    ///
    /// Traversal only yields attached nodes, so this means the tree was
    /// mutated between traversal and transformation.
    #[error("text node is detached from the tree; no insertion anchor")]
    DetachedNode,

    /// The root selector failed to parse or matched nothing.
    #[error("selector matched no roots: {0}")]
    InvalidSelector(String),

    /// Options could not be read as a JSON object.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// Reading input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for outlining operations.
pub type Result<T> = std::result::Result<T, Error>;
