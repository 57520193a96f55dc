//! Trivia file catalog.

use std::path::{Path, PathBuf};

use crate::files::{file_stem, list_files, CatalogError};

/// A trivia file offered to the presenter. Not validated until loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriviaEntry {
    /// File stem, shown in pickers.
    pub name: String,
    pub path: PathBuf,
}

/// The `*.json` files of a trivia directory, sorted by path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriviaCatalog {
    entries: Vec<TriviaEntry>,
}

impl TriviaCatalog {
    pub fn scan(dir: &Path) -> Result<Self, CatalogError> {
        let entries: Vec<TriviaEntry> = list_files(dir, ".json")?
            .into_iter()
            .map(|path| TriviaEntry {
                name: file_stem(&path),
                path,
            })
            .collect();
        tracing::debug!(dir = %dir.display(), files = entries.len(), "scanned trivia directory");
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[TriviaEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry whose name matches `name`.
    pub fn find(&self, name: &str) -> Option<&TriviaEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_names_by_stem() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("science.json"), "not even json").unwrap();
        std::fs::write(dir.path().join("history.json"), "{}").unwrap();

        let catalog = TriviaCatalog::scan(dir.path()).unwrap();
        let names: Vec<&str> = catalog.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["history", "science"]);
        assert_eq!(
            catalog.find("science").map(|e| e.path.clone()),
            Some(dir.path().join("science.json"))
        );
        assert!(catalog.find("math").is_none());
    }

    #[test]
    fn test_scan_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = TriviaCatalog::scan(&dir.path().join("trivia_configs")).unwrap();
        assert!(catalog.is_empty());
    }
}
