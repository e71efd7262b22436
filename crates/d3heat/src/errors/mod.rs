//! Error handling for d3heat.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod cluster_error;
pub mod heatmap_error;
pub mod matrix_error;
pub mod path_error;
pub mod render_error;

pub use cluster_error::ClusterError;
pub use heatmap_error::HeatmapError;
pub use matrix_error::MatrixError;
pub use path_error::PathError;
pub use render_error::RenderError;
