//! Embedded templates and companion scripts.
//!
//! Everything the rendered page needs ships inside the binary via
//! `include_str!`. On each run the variant's companion scripts are copied
//! unmodified into the output directory so the HTML's relative
//! `<script src>` references resolve when the file is opened directly.

use std::path::Path;

use tracing::trace;

use crate::errors::RenderError;

/// A template document plus the sibling script files it references.
#[derive(Debug, Clone, Copy)]
pub struct TemplateAssets {
    /// The HTML document containing `$KEY$` placeholders.
    pub template: &'static str,
    /// `(filename, contents)` pairs copied next to the rendered HTML.
    pub companions: &'static [(&'static str, &'static str)],
}

/// Node-link adjacency view: template plus its renderer script.
pub const HEATMAP_ASSETS: TemplateAssets = TemplateAssets {
    template: include_str!("../../assets/heatmap.html"),
    companions: &[("heatmap.js", include_str!("../../assets/heatmap.js"))],
};

/// Heat-grid view: template plus renderer and color-scale scripts.
pub const MATRIX_ASSETS: TemplateAssets = TemplateAssets {
    template: include_str!("../../assets/matrix.html"),
    companions: &[
        ("matrix.js", include_str!("../../assets/matrix.js")),
        ("colorscales.js", include_str!("../../assets/colorscales.js")),
    ],
};

impl TemplateAssets {
    /// Copy every companion script into `directory`, overwriting stale
    /// copies from earlier runs.
    pub fn copy_companions(&self, directory: &Path) -> Result<(), RenderError> {
        for (name, contents) in self.companions {
            let dest = directory.join(name);
            trace!(dest = %dest.display(), "copying companion asset");
            std::fs::write(&dest, contents).map_err(|e| RenderError::io(&dest, e))?;
        }
        Ok(())
    }
}

/// Write the substituted document to its resolved path.
pub fn write_html(path: &Path, contents: &str) -> Result<(), RenderError> {
    std::fs::write(path, contents).map_err(|e| RenderError::io(path, e))
}
