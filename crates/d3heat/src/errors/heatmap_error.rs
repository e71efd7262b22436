//! Top-level error for the rendering pipelines.

use super::{ClusterError, MatrixError, PathError, RenderError};

/// Errors that can occur during a pipeline run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum HeatmapError {
    #[error("Path error: {0}")]
    Path(#[from] PathError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Cluster error: {0}")]
    Cluster(#[from] ClusterError),

    #[error("Matrix error: {0}")]
    Matrix(#[from] MatrixError),
}
