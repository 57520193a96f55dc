//! # trivia-cli — Terminal Host for Trivia Runner
//!
//! Provides the `trivia` command-line interface.
//!
//! ## Subcommands
//!
//! - `trivia validate`: check trivia and theme files against their schemas.
//! - `trivia list`: show discovered trivia files and valid themes.
//! - `trivia run`: present a quiz in the terminal on the tick driver.
//!
//! ```bash
//! trivia validate --all
//! trivia validate --kind theme themes/aurora.json
//! trivia run general_knowledge --theme midnight --rounds 2
//! ```
//!
//! ## Exit Codes
//!
//! `0` success, `1` a document failed validation, `2` operational error.

pub mod list;
pub mod run;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use trivia_core::HostConfig;

/// Exit code for a clean run.
pub const EXIT_OK: u8 = 0;
/// Exit code when at least one document was rejected.
pub const EXIT_INVALID: u8 = 1;
/// Exit code for I/O and setup failures.
pub const EXIT_ERROR: u8 = 2;

/// Build the host configuration from an optional config file and
/// per-directory overrides.
///
/// Without a config file the development layout under the current
/// directory is used.
pub fn host_config(
    config: Option<&Path>,
    themes_dir: Option<&Path>,
    trivia_dir: Option<&Path>,
) -> Result<HostConfig> {
    let mut host = match config {
        Some(path) => HostConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir().context("cannot determine current directory")?;
            HostConfig::development(cwd)
        }
    };
    if let Some(dir) = themes_dir {
        host.themes_dir = dir.to_path_buf();
    }
    if let Some(dir) = trivia_dir {
        host.trivia_dir = dir.to_path_buf();
    }
    tracing::debug!(
        themes_dir = %host.themes_dir.display(),
        trivia_dir = %host.trivia_dir.display(),
        "resolved host configuration"
    );
    Ok(host)
}

/// Resolve a trivia argument that may be a path or a catalog name.
///
/// Existing paths are used as-is. Otherwise `<trivia_dir>/<arg>` and
/// `<trivia_dir>/<arg>.json` are tried before falling back to the argument.
pub fn resolve_trivia_path(arg: &Path, trivia_dir: &Path) -> PathBuf {
    if arg.exists() {
        return arg.to_path_buf();
    }
    let in_dir = trivia_dir.join(arg);
    if in_dir.is_file() {
        return in_dir;
    }
    let with_ext = in_dir.with_extension("json");
    if with_ext.is_file() {
        return with_ext;
    }
    arg.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_directories() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("host.json");
        std::fs::write(&config, r#"{ "themesDir": "t", "triviaDir": "q" }"#).unwrap();

        let host = host_config(Some(&config), None, Some(Path::new("/srv/trivia"))).unwrap();
        assert_eq!(host.themes_dir, dir.path().join("t"));
        assert_eq!(host.trivia_dir, PathBuf::from("/srv/trivia"));
    }

    #[test]
    fn test_missing_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = host_config(Some(&dir.path().join("none.json")), None, None).unwrap_err();
        assert!(format!("{err:#}").contains("failed to load config"));
    }

    #[test]
    fn test_resolve_trivia_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("science.json");
        std::fs::write(&file, "{}").unwrap();

        assert_eq!(resolve_trivia_path(Path::new("science"), dir.path()), file);
        assert_eq!(resolve_trivia_path(Path::new("science.json"), dir.path()), file);
        assert_eq!(resolve_trivia_path(&file, Path::new("/elsewhere")), file);
        assert_eq!(
            resolve_trivia_path(Path::new("missing"), dir.path()),
            PathBuf::from("missing")
        );
    }
}
