//! Builder errors (no external dependencies)

use thiserror::Error;

/// Builder errors represent structural misuse of the chaining API.
/// These are programmer errors, not recoverable conditions: they propagate
/// immediately and terminate the current chain construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    #[error("no element appended yet at the current level: {op}")]
    NoLastChild { op: &'static str },

    #[error("attribute merge requires at least 2 sources, got {given}")]
    MergeArity { given: usize },
}

/// Result type for builder operations.
pub type DomResult<T> = Result<T, DomError>;
