//! Files produced by a pipeline run.

use std::path::PathBuf;

/// Paths written by one pipeline invocation.
///
/// The filesystem is the only persistence layer: nothing is retained
/// in-process between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifacts {
    /// HTML filename, e.g. `index.html`.
    pub filename: String,
    /// Directory holding the HTML and its copied companion assets.
    pub directory: PathBuf,
    /// Absolute path of the rendered HTML document.
    pub path: PathBuf,
    /// Sibling CSV with the edge-list form of the input (diagnostic only;
    /// the rendered page reads its data from the inlined literal).
    pub csv_path: PathBuf,
}
