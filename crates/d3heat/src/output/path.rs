//! Output path resolution.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::errors::PathError;

/// A validated output location, split for caller convenience.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// The HTML filename, e.g. `index.html`.
    pub filename: String,
    /// Absolute owning directory.
    pub directory: PathBuf,
    /// Absolute path of the HTML file (`directory` joined with `filename`).
    pub path: PathBuf,
}

impl ResolvedPath {
    /// Sibling path with the same basename and a `.csv` extension.
    pub fn csv_path(&self) -> PathBuf {
        self.path.with_extension("csv")
    }
}

/// Resolve an optional destination into a validated absolute location.
///
/// - `None` defaults to `index.html` in the platform temp directory.
/// - A bare filename (no directory component) also lands in the temp
///   directory.
/// - The filename must end in `.html`; anything else is a
///   [`PathError::MissingHtmlExtension`].
/// - A missing directory is created recursively, with a warning.
pub fn resolve(path: Option<&Path>) -> Result<ResolvedPath, PathError> {
    let requested = match path {
        Some(p) => p.to_path_buf(),
        None => std::env::temp_dir().join("index.html"),
    };

    let filename = requested
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    if !filename.ends_with(".html") {
        return Err(PathError::MissingHtmlExtension(requested));
    }

    let directory = match requested.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => std::env::temp_dir(),
    };

    if !directory.is_dir() {
        warn!(directory = %directory.display(), "creating output directory");
        std::fs::create_dir_all(&directory).map_err(|source| PathError::Io {
            path: directory.clone(),
            source,
        })?;
    }

    let directory = directory.canonicalize().map_err(|source| PathError::Io {
        path: directory.clone(),
        source,
    })?;
    let path = directory.join(&filename);

    Ok(ResolvedPath {
        filename,
        directory,
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_index_html_in_temp_dir() {
        let resolved = resolve(None).unwrap();
        assert_eq!(resolved.filename, "index.html");
        assert_eq!(
            resolved.directory,
            std::env::temp_dir().canonicalize().unwrap()
        );
        assert_eq!(resolved.path, resolved.directory.join("index.html"));
    }

    #[test]
    fn bare_filename_lands_in_temp_dir() {
        let resolved = resolve(Some(Path::new("report.html"))).unwrap();
        assert_eq!(resolved.filename, "report.html");
        assert_eq!(
            resolved.directory,
            std::env::temp_dir().canonicalize().unwrap()
        );
    }

    #[test]
    fn missing_extension_is_rejected() {
        let err = resolve(Some(Path::new("report"))).unwrap_err();
        assert!(matches!(err, PathError::MissingHtmlExtension(_)));

        let err = resolve(Some(Path::new("out/report.csv"))).unwrap_err();
        assert!(matches!(err, PathError::MissingHtmlExtension(_)));
    }

    #[test]
    fn missing_directory_is_created() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("nested/deeper/report.html");
        let resolved = resolve(Some(&target)).unwrap();
        assert!(resolved.directory.is_dir());
        assert!(resolved.directory.ends_with("nested/deeper"));
        assert_eq!(resolved.filename, "report.html");
    }

    #[test]
    fn csv_sibling_shares_basename() {
        let resolved = resolve(Some(Path::new("report.html"))).unwrap();
        assert_eq!(
            resolved.csv_path(),
            resolved.directory.join("report.csv")
        );
    }
}
