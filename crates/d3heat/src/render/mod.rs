//! Template rendering: placeholder substitution and the embedded
//! template/asset table.

pub mod assets;
pub mod context;
pub mod template;

pub use assets::{TemplateAssets, HEATMAP_ASSETS, MATRIX_ASSETS};
pub use context::RenderContext;
pub use template::substitute;
