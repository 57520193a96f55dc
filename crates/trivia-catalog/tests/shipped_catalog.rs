//! Integration test: the catalogs over the repository's own trivia and theme
//! directories, configured through `HostConfig`.

use std::path::PathBuf;

use trivia_catalog::{ThemeCatalog, ThemeState, TriviaCatalog};
use trivia_core::HostConfig;
use trivia_schema::{load_trivia_file, SchemaValidator};

fn repo_root() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // crates/
    dir.pop(); // repo root
    dir
}

#[test]
fn test_development_layout_finds_fixtures() {
    let config = HostConfig::development(repo_root());
    let validator = SchemaValidator::new().unwrap();

    let trivia = TriviaCatalog::scan(&config.trivia_dir).unwrap();
    assert!(trivia.find("general_knowledge").is_some());
    for entry in trivia.entries() {
        let loaded = load_trivia_file(&validator, &entry.path).unwrap();
        assert!(!loaded.document.is_empty(), "{} is empty", entry.name);
    }

    let themes = ThemeCatalog::scan(&config.themes_dir, &validator).unwrap();
    assert_eq!(themes.len(), 2);
    assert!(themes.entries().iter().all(|t| !t.description.is_empty()));
}

#[test]
fn test_theme_state_over_shipped_themes() {
    let config = HostConfig::development(repo_root());
    let validator = SchemaValidator::new().unwrap();
    let mut state = ThemeState::new();
    state.load_all(&config.themes_dir, &validator).unwrap();

    let first = state.available()[0].clone();
    assert_eq!(state.current().map(|t| t.name.as_str()), Some(first.name.as_str()));
    assert!(!state.shapes().is_empty());
}
