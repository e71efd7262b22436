//! Output path resolution errors.

use std::path::PathBuf;

/// Errors raised while resolving the output location.
///
/// `MissingHtmlExtension` is the single hard validation error in the crate:
/// everything else the resolver does (defaulting, directory creation)
/// degrades with a warning instead of failing.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("output filename {0:?} is missing the required \".html\" extension")]
    MissingHtmlExtension(PathBuf),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
