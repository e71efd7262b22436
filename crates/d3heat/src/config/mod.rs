//! Per-call configuration objects.
//! No module-level defaults and no shared state: every pipeline call gets an
//! explicit config value.

pub mod heatmap_config;
pub mod matrix_config;

pub use heatmap_config::HeatmapConfig;
pub use matrix_config::MatrixConfig;
