//! # trivia-core — Foundational Types for Trivia Runner
//!
//! Defines the typed views of the two JSON documents the presenter consumes
//! and the error taxonomy shared by every other crate in the workspace.
//! Depends on nothing internal.
//!
//! ## Documents
//!
//! - [`TriviaDocument`]: an ordered list of [`Question`]s, each carrying a
//!   three-level [`Category`].
//! - [`ThemeDocument`]: colors, typography, animation and layout parameters
//!   for the display layer.
//!
//! Typed views are produced only after a raw document has passed schema
//! validation (see `trivia-schema`). Unknown properties are tolerated at every
//! level so that documents written for newer presenters still load.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Timing constants of the quiz session live here so hosts and the session
//!   agree on them without a dependency on the session crate.

pub mod config;
pub mod error;
pub mod theme;
pub mod trivia;
pub mod violation;

pub use config::{ConfigError, HostConfig, WindowSize};
pub use error::{DocumentKind, TriviaError};
pub use theme::{
    AnimationSpeed, Animations, AnswerColors, Background, BackgroundImage, BorderRadius,
    CategoryColors, CategoryPalette, CategoryTypography, Colors, Fill, Gradient, GradientFill,
    ImageSize, Layout, ProgressBarColors, Shape, ShapeAnimation, ShapePosition, ShapeSize,
    Spacing, TextColors, ThemeDocument, Transitions, Typography, TypographyEntry,
};
pub use trivia::{Category, Question, TriviaDocument};
pub use violation::{Violation, ViolationKind};

/// Seconds each question stays on screen.
pub const QUESTION_DURATION_SECS: u64 = 60;

/// Remaining seconds at which the answer becomes visible.
pub const REVEAL_THRESHOLD_SECS: u64 = 10;

/// Interval between timer ticks delivered by a host, in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 100;
