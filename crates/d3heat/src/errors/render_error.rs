//! Template rendering and artifact writing errors.

use std::path::PathBuf;

/// Errors raised while writing the HTML, CSV, or companion assets.
///
/// Filesystem failures (permissions, disk full) propagate here unhandled:
/// rendering is a one-shot, all-or-nothing transform with no retry and no
/// partial-failure recovery.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize embedded data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to build placeholder automaton: {0}")]
    Automaton(#[from] aho_corasick::BuildError),
}

impl RenderError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
