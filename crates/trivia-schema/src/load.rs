//! # Load Boundary
//!
//! The one integration point external I/O needs: raw bytes in, a parsed and
//! validated document out.
//!
//! ```text
//! bytes ──parse──▶ serde_json::Value ──validate──▶ typed document
//!          │                            │
//!          └─ TriviaError::Parse        └─ TriviaError::Schema / EmptyInput
//! ```
//!
//! A document is either accepted whole or rejected whole. Nothing is
//! partially applied, so a host can keep its prior state on any error.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use trivia_core::{DocumentKind, ThemeDocument, TriviaDocument, TriviaError};

use crate::validate::SchemaValidator;

/// A validated document: the raw JSON as read plus its typed view.
///
/// `raw` is kept so that re-serialization reproduces exactly what was
/// validated, including properties the typed view ignores.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub raw: Value,
    pub document: T,
}

/// Read a file into memory.
pub fn read_text_file(path: &Path) -> Result<Vec<u8>, TriviaError> {
    std::fs::read(path).map_err(|e| TriviaError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parse bytes as JSON.
pub fn parse_document(bytes: &[u8], kind: DocumentKind) -> Result<Value, TriviaError> {
    serde_json::from_slice(bytes).map_err(|e| TriviaError::Parse {
        kind,
        reason: e.to_string(),
    })
}

/// Parse, validate and decode a trivia document.
///
/// # Errors
///
/// `Parse` for malformed JSON, `EmptyInput` when `questions` is an empty
/// array, `Schema` for any other violation.
pub fn load_trivia(
    validator: &SchemaValidator,
    bytes: &[u8],
) -> Result<Loaded<TriviaDocument>, TriviaError> {
    let loaded: Loaded<TriviaDocument> = load(validator, bytes, DocumentKind::Trivia)?;
    tracing::info!(questions = loaded.document.len(), "trivia document accepted");
    Ok(loaded)
}

/// Parse, validate and decode a theme document.
pub fn load_theme(
    validator: &SchemaValidator,
    bytes: &[u8],
) -> Result<Loaded<ThemeDocument>, TriviaError> {
    let loaded: Loaded<ThemeDocument> = load(validator, bytes, DocumentKind::Theme)?;
    tracing::info!(theme = %loaded.document.name, "theme document accepted");
    Ok(loaded)
}

/// [`load_trivia`] from a file path.
pub fn load_trivia_file(
    validator: &SchemaValidator,
    path: &Path,
) -> Result<Loaded<TriviaDocument>, TriviaError> {
    let bytes = read_text_file(path)?;
    load_trivia(validator, &bytes).map_err(|e| {
        tracing::warn!(path = %path.display(), error = e.label(), "rejected trivia file");
        e
    })
}

/// [`load_theme`] from a file path.
pub fn load_theme_file(
    validator: &SchemaValidator,
    path: &Path,
) -> Result<Loaded<ThemeDocument>, TriviaError> {
    let bytes = read_text_file(path)?;
    load_theme(validator, &bytes).map_err(|e| {
        tracing::warn!(path = %path.display(), error = e.label(), "rejected theme file");
        e
    })
}

fn load<T: DeserializeOwned>(
    validator: &SchemaValidator,
    bytes: &[u8],
    kind: DocumentKind,
) -> Result<Loaded<T>, TriviaError> {
    let raw = parse_document(bytes, kind)?;

    if let Err(err) = validator.check(&raw, kind) {
        if kind == DocumentKind::Trivia && has_empty_questions(&raw) {
            return Err(TriviaError::EmptyInput);
        }
        return Err(err.into());
    }

    let document = T::deserialize(&raw).map_err(|e| TriviaError::Parse {
        kind,
        reason: format!("document shape: {e}"),
    })?;
    Ok(Loaded { raw, document })
}

fn has_empty_questions(raw: &Value) -> bool {
    raw.get("questions")
        .and_then(Value::as_array)
        .is_some_and(Vec::is_empty)
}
