//! Configuration for the heat-grid pipeline.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::ColorScheme;

/// Options for [`crate::pipeline::matrix`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixConfig {
    /// Output location. `None` renders to `index.html` in the platform temp
    /// directory.
    pub path: Option<PathBuf>,
    /// Page title.
    pub title: String,
    /// Description paragraph shown under the title.
    pub description: String,
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    /// Axis label font size in pixels.
    pub fontsize: u32,
    /// Color scheme for the cells.
    pub cmap: ColorScheme,
    /// Rescale values to 0-100 (rounded) before rendering.
    pub scale: bool,
    /// Lower bound of the color domain. `None` uses the data minimum.
    pub vmin: Option<f64>,
    /// Upper bound of the color domain. `None` uses the data maximum.
    pub vmax: Option<f64>,
    /// Hover-highlight color name for the cell outline.
    pub stroke: String,
    /// Open the rendered page in the default browser.
    pub showfig: bool,
    /// Logging verbosity, 0 (off) to 5 (trace).
    pub verbose: u8,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            path: None,
            title: "d3heat".to_string(),
            description: "Heatmap description".to_string(),
            width: 500,
            height: 500,
            fontsize: 10,
            cmap: ColorScheme::default(),
            scale: false,
            vmin: None,
            vmax: None,
            stroke: "red".to_string(),
            showfig: false,
            verbose: 3,
        }
    }
}
