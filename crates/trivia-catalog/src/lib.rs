//! # trivia-catalog — File Discovery and Theme Selection
//!
//! Finds the trivia and theme files a host can offer and tracks which theme
//! is applied.
//!
//! - [`TriviaCatalog`] lists trivia files without loading them; a trivia file
//!   is validated only when the user picks it.
//! - [`ThemeCatalog`] validates every theme up front and drops the invalid
//!   ones.
//! - [`ThemeState`] holds the current theme. A failed selection leaves the
//!   prior theme in place and records an error message.
//! - [`display`] derives display parameters from the current theme with the
//!   presenter's defaults.

pub mod display;
pub mod files;
pub mod themes;
pub mod trivia;

pub use files::{list_files, CatalogError};
pub use themes::{ThemeCatalog, ThemeEntry, ThemeState};
pub use trivia::{TriviaCatalog, TriviaEntry};
