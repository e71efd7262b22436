//! Configuration for the node-link heatmap pipeline.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default description embedded when the caller supplies none.
/// Explains the adjacency-matrix view to the reader of the page.
pub const DEFAULT_DESCRIPTION: &str = "A network can be represented by an \
adjacency matrix, where each cell ij represents an edge from vertex i to \
vertex j.\n\nGiven this two-dimensional representation of a graph, a natural \
visualization is to show the matrix. The effectiveness of a matrix diagram \
is heavily dependent on the order of rows and columns: if related nodes are \
placed close to each other, it is easier to identify clusters and bridges.\n\n\
While path-following is harder in a matrix view than in a node-link diagram, \
matrices have other advantages. As networks get large and highly connected, \
node-link diagrams often devolve into giant hairballs of line crossings. \
Line crossings are impossible with matrix views. Matrix cells can also be \
encoded to show additional data; here color depicts clusters computed by a \
community-detection algorithm.";

/// Options for [`crate::pipeline::heatmap`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapConfig {
    /// Output location. `None` renders to `index.html` in the platform temp
    /// directory; a bare filename lands in the temp directory too.
    pub path: Option<PathBuf>,
    /// Page title.
    pub title: String,
    /// Description paragraph. `None` uses [`DEFAULT_DESCRIPTION`].
    pub description: Option<String>,
    /// When set, values are rescaled so the table maximum equals `vmax`
    /// before rendering. `None` leaves values untouched.
    pub vmax: Option<f64>,
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    /// Hover-highlight color name for the cell outline.
    pub stroke: String,
    /// Open the rendered page in the default browser.
    pub showfig: bool,
    /// Logging verbosity, 0 (off) to 5 (trace).
    pub verbose: u8,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            path: None,
            title: "d3heat".to_string(),
            description: None,
            vmax: None,
            width: 720,
            height: 720,
            stroke: "red".to_string(),
            showfig: false,
            verbose: 3,
        }
    }
}

impl HeatmapConfig {
    /// The description to embed, falling back to the default text.
    pub fn effective_description(&self) -> &str {
        self.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION)
    }
}
