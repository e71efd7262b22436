//! Clustering errors.

/// Errors raised when obtaining or validating a cluster assignment.
#[derive(Debug, thiserror::Error)]
pub enum ClusterError {
    #[error("cluster label count {got} does not match column count {expected}")]
    LabelCount { expected: usize, got: usize },

    #[error("clustering input is degenerate: {0}")]
    Degenerate(String),
}
