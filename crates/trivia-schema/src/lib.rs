//! # trivia-schema — Document Validation
//!
//! Validates trivia and theme documents against their JSON Schemas and
//! provides the load boundary used by every host.
//!
//! ## Runtime Validation (`validate`)
//!
//! [`SchemaValidator`] compiles the two embedded schemas once and validates
//! `serde_json::Value`s against them, reporting every violation with a JSON
//! Pointer path and a categorized reason.
//!
//! ## Load Boundary (`load`)
//!
//! [`load_trivia`] and [`load_theme`] compose parse → validate → decode and
//! return the typed document or a `TriviaError`. Errors never escape as
//! panics, so presentation layers can render a message and keep their prior
//! state.
//!
//! ## Crate Policy
//!
//! - Depends only on `trivia-core` internally.
//! - Schemas stay open (`additionalProperties` is never restricted).

pub mod load;
pub mod validate;

pub use load::{
    load_theme, load_theme_file, load_trivia, load_trivia_file, parse_document, read_text_file,
    Loaded,
};
pub use validate::{
    schema_source, SchemaKind, SchemaValidationError, SchemaValidator, ValidationReport,
};
