//! Host configuration.
//!
//! One struct parametrizes every host of the presenter: window size and the
//! two directories that hold trivia and theme files. The development and
//! packaged layouts are presets over the same struct.
//!
//! A JSON config file may override any field; missing fields keep their
//! defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Directory holding trivia files, relative to the application root.
pub const TRIVIA_DIR_NAME: &str = "trivia_configs";

/// Directory holding theme files.
pub const THEMES_DIR_NAME: &str = "themes";

/// Initial window dimensions in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 1000,
        }
    }
}

/// Configuration shared by every host of the presenter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostConfig {
    pub window: WindowSize,
    /// Directory scanned for `*.json` theme files.
    pub themes_dir: PathBuf,
    /// Directory scanned for `*.json` trivia files.
    pub trivia_dir: PathBuf,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self::development(".")
    }
}

impl HostConfig {
    /// Layout used when running from a source checkout: both directories
    /// sit in the application root.
    pub fn development(app_root: impl AsRef<Path>) -> Self {
        let root = app_root.as_ref();
        Self {
            window: WindowSize::default(),
            themes_dir: root.join(THEMES_DIR_NAME),
            trivia_dir: root.join(TRIVIA_DIR_NAME),
        }
    }

    /// Layout used by an installed bundle: themes ship as an extra resource,
    /// trivia files stay next to the application.
    pub fn packaged(resources_dir: impl AsRef<Path>, app_root: impl AsRef<Path>) -> Self {
        Self {
            window: WindowSize::default(),
            themes_dir: resources_dir.as_ref().join(THEMES_DIR_NAME),
            trivia_dir: app_root.as_ref().join(TRIVIA_DIR_NAME),
        }
    }

    /// Load configuration from a JSON file. Relative directories in the file
    /// are resolved against the file's own directory.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut config: Self =
            serde_json::from_str(&content).map_err(|e| ConfigError::Invalid {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        if let Some(base) = path.parent() {
            config.themes_dir = resolve(base, &config.themes_dir);
            config.trivia_dir = resolve(base, &config.trivia_dir);
        }
        Ok(config)
    }
}

fn resolve(base: &Path, dir: &Path) -> PathBuf {
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        base.join(dir)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {reason}", path.display())]
    Invalid { path: PathBuf, reason: String },
}
