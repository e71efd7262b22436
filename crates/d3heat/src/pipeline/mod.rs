//! The two rendering pipelines.
//!
//! Both follow the same skeleton: warn on duplicate labels, optionally
//! rescale, resolve the output path, copy companion assets, convert the
//! table, write the diagnostic CSV, build the render context, substitute the
//! template, write the HTML, optionally open a browser. Each call is
//! independent and synchronous; parallel callers only need distinct output
//! paths.

pub mod heatmap;
pub mod matrix;

pub use heatmap::{heatmap, heatmap_with_model};
pub use matrix::matrix;

use std::path::Path;

use tracing::{info, warn};

use crate::types::DataMatrix;

/// Warn (never fail) when labels repeat. Duplicate labels degrade the
/// rendered view because the browser side keys cells by label.
pub(crate) fn warn_on_duplicate_labels(m: &DataMatrix) {
    if m.has_duplicate_col_labels() {
        warn!("input has duplicate column labels; the rendered view may drop cells");
    }
    if m.has_duplicate_row_labels() {
        warn!("input has duplicate row labels; the rendered view may drop cells");
    }
}

/// Open the rendered page in the default browser. Failures are logged and
/// swallowed: a missing browser must not fail the render.
pub(crate) fn open_in_browser(path: &Path) {
    match webbrowser::open(&path.to_string_lossy()) {
        Ok(()) => info!(path = %path.display(), "opened in browser"),
        Err(e) => warn!(path = %path.display(), error = %e, "could not open browser"),
    }
}
