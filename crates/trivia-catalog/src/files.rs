//! Directory listing shared by both catalogs.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from scanning a catalog directory.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The directory exists but could not be listed.
    #[error("cannot read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Sorted paths of the regular files in `dir` whose names end in `suffix`.
///
/// A missing directory is not an error: it yields an empty list and a
/// warning, so a host without a themes folder still starts. Unreadable
/// entries are skipped.
pub fn list_files(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>, CatalogError> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(dir = %dir.display(), "directory not found");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(CatalogError::ReadDir {
                path: dir.to_path_buf(),
                source: e,
            })
        }
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "failed to read directory entry");
                continue;
            }
        };
        let path = entry.path();
        let matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(suffix));
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// File name without its extension, used as a display name and theme id.
pub(crate) fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
