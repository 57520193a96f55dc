//! # Error Types
//!
//! The load-boundary taxonomy. Every failure a presentation layer has to
//! render is one of these variants, so the host never crashes on a bad file.
//!
//! - `Parse`: bytes are not well-formed JSON (or do not fit the typed view).
//! - `Schema`: well-formed JSON failing schema validation. Carries every
//!   field-level violation, not just the first.
//! - `EmptyInput`: a trivia document with zero questions.
//! - `Io`: file missing or unreadable.
//! - `SchemaUnavailable`: an embedded schema failed to compile. A build
//!   defect, never caused by the document being loaded.

use std::path::PathBuf;

use thiserror::Error;

use crate::violation::Violation;

/// Which document shape a load was attempting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// A trivia question set.
    Trivia,
    /// A visual theme.
    Theme,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Trivia => "trivia",
            Self::Theme => "theme",
        };
        f.write_str(s)
    }
}

/// Top-level error type for loading documents and driving a session.
#[derive(Error, Debug)]
pub enum TriviaError {
    /// The input was not well-formed JSON.
    #[error("malformed {kind} document: {reason}")]
    Parse {
        /// Document shape being loaded.
        kind: DocumentKind,
        /// Parser message, including line and column.
        reason: String,
    },

    /// The document parsed but failed schema validation.
    #[error("invalid {kind} document ({} violation(s)):\n{}", violations.len(), render(violations))]
    Schema {
        /// Document shape being loaded.
        kind: DocumentKind,
        /// Field-level violations, in validator order.
        violations: Vec<Violation>,
    },

    /// A trivia document contained no questions.
    #[error("trivia document contains no questions")]
    EmptyInput,

    /// The schema for `kind` could not be compiled.
    #[error("{kind} schema unavailable: {reason}")]
    SchemaUnavailable {
        /// Schema that failed.
        kind: DocumentKind,
        /// Compiler or parser message.
        reason: String,
    },

    /// The file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },
}

impl TriviaError {
    /// Short label for the variant, used in log fields.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "parse",
            Self::Schema { .. } => "schema",
            Self::EmptyInput => "empty_input",
            Self::SchemaUnavailable { .. } => "schema_unavailable",
            Self::Io { .. } => "io",
        }
    }
}

fn render(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
