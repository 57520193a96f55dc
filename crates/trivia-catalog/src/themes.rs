//! # Theme Catalog and Selection
//!
//! Discovery loads and validates every theme so that pickers only offer
//! themes that will actually apply. Selection keeps the prior theme on any
//! failure and records a message for the host to display.

use std::path::{Path, PathBuf};

use trivia_core::{AnimationSpeed, Shape, ThemeDocument, TriviaError};
use trivia_schema::{load_theme_file, SchemaValidator};

use crate::display;
use crate::files::{file_stem, list_files, CatalogError};

/// A theme that passed validation during the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeEntry {
    /// File stem.
    pub id: String,
    pub name: String,
    pub description: String,
    pub path: PathBuf,
}

/// Valid themes found in a directory, sorted by path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeCatalog {
    entries: Vec<ThemeEntry>,
}

impl ThemeCatalog {
    /// Load every `*.json` in `dir`. Files that fail to read, parse or
    /// validate are skipped with a warning.
    pub fn scan(dir: &Path, validator: &SchemaValidator) -> Result<Self, CatalogError> {
        let files = list_files(dir, ".json")?;
        let total = files.len();
        let entries: Vec<ThemeEntry> = files
            .into_iter()
            .filter_map(|path| match load_theme_file(validator, &path) {
                Ok(loaded) => Some(ThemeEntry {
                    id: file_stem(&path),
                    name: loaded.document.name,
                    description: loaded.document.description,
                    path,
                }),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping invalid theme");
                    None
                }
            })
            .collect();
        tracing::info!(
            dir = %dir.display(),
            themes = entries.len(),
            skipped = total - entries.len(),
            "scanned theme directory"
        );
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ThemeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&ThemeEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

/// The host's theme picker state.
#[derive(Debug, Clone, Default)]
pub struct ThemeState {
    available: ThemeCatalog,
    current: Option<ThemeDocument>,
    current_path: Option<PathBuf>,
    error: Option<String>,
}

impl ThemeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rescan `dir` and select the first theme found.
    ///
    /// # Errors
    ///
    /// Returns the scan error, which is also recorded in [`error`](Self::error).
    /// The previous catalog and selection are kept in that case.
    pub fn load_all(&mut self, dir: &Path, validator: &SchemaValidator) -> Result<(), CatalogError> {
        self.error = None;
        let catalog = match ThemeCatalog::scan(dir, validator) {
            Ok(catalog) => catalog,
            Err(e) => {
                self.error = Some(format!("Failed to load themes: {e}"));
                return Err(e);
            }
        };
        let first = catalog.entries().first().map(|e| e.path.clone());
        self.available = catalog;
        if let Some(path) = first {
            // A failed first selection is already recorded in `error`.
            let _ = self.select(&path, validator);
        }
        Ok(())
    }

    /// Load and validate the theme at `path` and make it current.
    ///
    /// # Errors
    ///
    /// Any load error. The prior theme stays current and the message is
    /// recorded in [`error`](Self::error).
    pub fn select(&mut self, path: &Path, validator: &SchemaValidator) -> Result<(), TriviaError> {
        self.error = None;
        match load_theme_file(validator, path) {
            Ok(loaded) => {
                tracing::info!(theme = %loaded.document.name, "theme selected");
                self.current = Some(loaded.document);
                self.current_path = Some(path.to_path_buf());
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Select an available theme by id.
    ///
    /// # Errors
    ///
    /// `Io` with `NotFound` when no available theme has that id, otherwise
    /// as [`select`](Self::select).
    pub fn select_id(&mut self, id: &str, validator: &SchemaValidator) -> Result<(), TriviaError> {
        let Some(path) = self.available.find(id).map(|e| e.path.clone()) else {
            let e = TriviaError::Io {
                path: PathBuf::from(format!("{id}.json")),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such theme"),
            };
            self.error = Some(e.to_string());
            return Err(e);
        };
        self.select(&path, validator)
    }

    pub fn available(&self) -> &[ThemeEntry] {
        self.available.entries()
    }

    pub fn current(&self) -> Option<&ThemeDocument> {
        self.current.as_ref()
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// Message from the most recent failed load or selection.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn animation_speed(&self) -> AnimationSpeed {
        display::animation_speed(self.current())
    }

    pub fn transition_duration_ms(&self) -> f64 {
        display::transition_duration_ms(self.current())
    }

    pub fn shapes(&self) -> Vec<Shape> {
        display::shapes(self.current())
    }

    pub fn text_color(&self) -> String {
        display::text_color(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> String {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../themes")
            .join(name);
        std::fs::read_to_string(path).unwrap()
    }

    fn theme_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("aurora.json"), fixture("aurora.json")).unwrap();
        std::fs::write(dir.path().join("midnight.json"), fixture("midnight.json")).unwrap();
        std::fs::write(dir.path().join("broken.json"), r#"{ "name": "Broken" }"#).unwrap();
        std::fs::write(dir.path().join("garbage.json"), "{{{").unwrap();
        dir
    }

    #[test]
    fn test_scan_skips_invalid_themes() {
        let dir = theme_dir();
        let validator = SchemaValidator::new().unwrap();
        let catalog = ThemeCatalog::scan(dir.path(), &validator).unwrap();
        let ids: Vec<&str> = catalog.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["aurora", "midnight"]);
        assert_eq!(catalog.find("midnight").unwrap().name, "Midnight");
    }

    #[test]
    fn test_load_all_selects_first() {
        let dir = theme_dir();
        let validator = SchemaValidator::new().unwrap();
        let mut state = ThemeState::new();
        state.load_all(dir.path(), &validator).unwrap();
        assert_eq!(state.available().len(), 2);
        assert_eq!(state.current_path(), Some(dir.path().join("aurora.json").as_path()));
        assert!(state.error().is_none());
    }

    #[test]
    fn test_failed_select_keeps_prior_theme() {
        let dir = theme_dir();
        let validator = SchemaValidator::new().unwrap();
        let mut state = ThemeState::new();
        state.select_id("midnight", &validator).unwrap_err();
        state.load_all(dir.path(), &validator).unwrap();
        state.select_id("midnight", &validator).unwrap();
        let before = state.current().cloned();

        let err = state
            .select(&dir.path().join("broken.json"), &validator)
            .unwrap_err();
        assert!(matches!(err, TriviaError::Schema { .. }));
        assert_eq!(state.current().cloned(), before);
        assert_eq!(state.text_color(), "#e2e8f0");
        assert!(state.error().unwrap().contains("invalid theme document"));

        state.select_id("aurora", &validator).unwrap();
        assert!(state.error().is_none());
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let validator = SchemaValidator::new().unwrap();
        let mut state = ThemeState::new();
        let err = state.select_id("nope", &validator).unwrap_err();
        assert!(matches!(err, TriviaError::Io { .. }));
        assert!(state.current().is_none());
        assert_eq!(state.text_color(), "#ffffff");
    }

    #[test]
    fn test_empty_directory_leaves_no_selection() {
        let dir = tempfile::tempdir().unwrap();
        let validator = SchemaValidator::new().unwrap();
        let mut state = ThemeState::new();
        state.load_all(&dir.path().join("themes"), &validator).unwrap();
        assert!(state.available().is_empty());
        assert!(state.current().is_none());
        assert_eq!(state.transition_duration_ms(), 700.0);
    }
}
