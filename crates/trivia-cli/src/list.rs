//! # List Subcommand
//!
//! Prints the trivia files and the valid themes a host would offer.

use std::fmt::Write as _;

use anyhow::{Context, Result};

use trivia_catalog::{ThemeCatalog, TriviaCatalog};
use trivia_core::HostConfig;
use trivia_schema::SchemaValidator;

use crate::EXIT_OK;

/// Execute the list subcommand.
pub fn run_list(config: &HostConfig) -> Result<u8> {
    let validator = SchemaValidator::new().context("failed to compile embedded schemas")?;
    let trivia = TriviaCatalog::scan(&config.trivia_dir)?;
    let themes = ThemeCatalog::scan(&config.themes_dir, &validator)?;
    print!("{}", render_listing(config, &trivia, &themes));
    Ok(EXIT_OK)
}

/// Render both catalogs as aligned text.
pub fn render_listing(config: &HostConfig, trivia: &TriviaCatalog, themes: &ThemeCatalog) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Trivia ({}): {}", config.trivia_dir.display(), trivia.len());
    let width = trivia.entries().iter().map(|e| e.name.len()).max().unwrap_or(0);
    for entry in trivia.entries() {
        let _ = writeln!(out, "  {:<width$}  {}", entry.name, entry.path.display());
    }

    let _ = writeln!(out, "Themes ({}): {}", config.themes_dir.display(), themes.len());
    let width = themes.entries().iter().map(|e| e.id.len()).max().unwrap_or(0);
    for entry in themes.entries() {
        let _ = writeln!(out, "  {:<width$}  {}: {}", entry.id, entry.name, entry.description);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_shows_both_catalogs() {
        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
        let config = HostConfig::development(&root);
        let validator = SchemaValidator::new().unwrap();
        let trivia = TriviaCatalog::scan(&config.trivia_dir).unwrap();
        let themes = ThemeCatalog::scan(&config.themes_dir, &validator).unwrap();

        let text = render_listing(&config, &trivia, &themes);
        assert!(text.contains("  general_knowledge  "));
        assert!(text.contains("  science"));
        assert!(text.contains("  midnight  Midnight: "));
        assert!(text.lines().any(|l| l.starts_with("Themes (") && l.ends_with(": 2")));
    }

    #[test]
    fn test_empty_listing() {
        let dir = tempfile::tempdir().unwrap();
        let config = HostConfig::development(dir.path());
        let text = render_listing(&config, &TriviaCatalog::default(), &ThemeCatalog::default());
        assert_eq!(text.lines().count(), 2);
    }
}
