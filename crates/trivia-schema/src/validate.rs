//! # Schema Validation
//!
//! Runtime validation of trivia and theme documents against the two
//! embedded JSON Schemas (Draft 7).
//!
//! ## Invariants
//!
//! - Validation is pure: the instance is borrowed immutably and no state is
//!   retained between calls.
//! - Every violation is reported, in validator order, with a JSON Pointer to
//!   the offending field. A missing property is reported at the path the
//!   property should occupy (`/questions/0/category/subsub`), not at its
//!   parent.
//! - Schemas are open: no `additionalProperties: false` anywhere, so unknown
//!   properties are accepted at every level.
//!
//! ## Lifecycle
//!
//! Both schemas are compiled once in [`SchemaValidator::new`]. Hosts build a
//! single validator at startup and pass it by reference to every load.

use std::fmt;

use jsonschema::error::ValidationErrorKind;
use jsonschema::{Draft, ValidationError, Validator};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use trivia_core::{DocumentKind, TriviaError, Violation, ViolationKind};

/// Which schema a document is checked against.
pub type SchemaKind = DocumentKind;

const TRIVIA_SCHEMA: &str = include_str!("../schemas/trivia.schema.json");
const THEME_SCHEMA: &str = include_str!("../schemas/theme.schema.json");

/// Raw text of the embedded schema for `kind`.
pub fn schema_source(kind: SchemaKind) -> &'static str {
    match kind {
        SchemaKind::Trivia => TRIVIA_SCHEMA,
        SchemaKind::Theme => THEME_SCHEMA,
    }
}

/// Error during schema validation.
#[derive(Error, Debug)]
pub enum SchemaValidationError {
    /// The document did not conform to the schema.
    #[error("validation failed against {kind} schema:\n{violations}")]
    ValidationFailed {
        /// Schema the document was checked against.
        kind: SchemaKind,
        /// Structured list of individual violations.
        violations: ValidationReport,
    },

    /// An embedded schema is not valid JSON.
    #[error("schema load error for {kind} schema: {reason}")]
    SchemaLoadError {
        /// Schema that failed to load.
        kind: SchemaKind,
        /// Parser message.
        reason: String,
    },

    /// The compiled validator could not be built.
    #[error("validator build error for {kind} schema: {reason}")]
    ValidatorBuildError {
        /// Schema that failed to compile.
        kind: SchemaKind,
        /// Compiler message.
        reason: String,
    },
}

impl From<SchemaValidationError> for TriviaError {
    fn from(err: SchemaValidationError) -> Self {
        match err {
            SchemaValidationError::ValidationFailed { kind, violations } => TriviaError::Schema {
                kind,
                violations: violations.into_inner(),
            },
            SchemaValidationError::SchemaLoadError { kind, reason }
            | SchemaValidationError::ValidatorBuildError { kind, reason } => {
                TriviaError::SchemaUnavailable { kind, reason }
            }
        }
    }
}

/// Outcome of validating one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Whether the document conforms.
    pub valid: bool,
    /// Violations in validator order; empty when `valid`.
    pub errors: Vec<Violation>,
}

impl ValidationReport {
    fn from_violations(errors: Vec<Violation>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.errors
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.errors
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Compiled validators for the trivia and theme schemas.
///
/// `Send + Sync`; share one instance across the whole process.
pub struct SchemaValidator {
    trivia: Validator,
    theme: Validator,
}

impl fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaValidator")
            .field("schemas", &[SchemaKind::Trivia, SchemaKind::Theme])
            .finish()
    }
}

impl SchemaValidator {
    /// Compile both embedded schemas.
    ///
    /// # Errors
    ///
    /// Returns `SchemaLoadError` or `ValidatorBuildError` if an embedded
    /// schema is malformed.
    pub fn new() -> Result<Self, SchemaValidationError> {
        let validator = Self {
            trivia: compile(SchemaKind::Trivia)?,
            theme: compile(SchemaKind::Theme)?,
        };
        tracing::debug!("compiled trivia and theme schemas");
        Ok(validator)
    }

    fn validator(&self, kind: SchemaKind) -> &Validator {
        match kind {
            SchemaKind::Trivia => &self.trivia,
            SchemaKind::Theme => &self.theme,
        }
    }

    /// Validate a parsed JSON value and report every violation.
    pub fn validate(&self, document: &Value, kind: SchemaKind) -> ValidationReport {
        let errors = self
            .validator(kind)
            .iter_errors(document)
            .map(|e| to_violation(&e))
            .collect();
        ValidationReport::from_violations(errors)
    }

    /// Whether `document` conforms, without collecting violations.
    pub fn is_valid(&self, document: &Value, kind: SchemaKind) -> bool {
        self.validator(kind).is_valid(document)
    }

    /// Validate and convert a failing report into an error.
    ///
    /// # Errors
    ///
    /// Returns `SchemaValidationError::ValidationFailed` with structured
    /// violation details if the document is invalid.
    pub fn check(&self, document: &Value, kind: SchemaKind) -> Result<(), SchemaValidationError> {
        let report = self.validate(document, kind);
        if report.valid {
            Ok(())
        } else {
            Err(SchemaValidationError::ValidationFailed {
                kind,
                violations: report,
            })
        }
    }
}

fn compile(kind: SchemaKind) -> Result<Validator, SchemaValidationError> {
    let schema: Value = serde_json::from_str(schema_source(kind)).map_err(|e| {
        SchemaValidationError::SchemaLoadError {
            kind,
            reason: format!("invalid JSON: {e}"),
        }
    })?;

    let mut opts = jsonschema::options();
    opts.with_draft(Draft::Draft7);
    opts.build(&schema)
        .map_err(|e| SchemaValidationError::ValidatorBuildError {
            kind,
            reason: e.to_string(),
        })
}

fn to_violation(error: &ValidationError<'_>) -> Violation {
    let mut instance_path = error.instance_path.to_string();
    if let ValidationErrorKind::Required { property } = &error.kind {
        if let Some(name) = property.as_str() {
            instance_path.push('/');
            instance_path.push_str(&escape_pointer_token(name));
        }
    }

    Violation {
        instance_path,
        schema_path: error.schema_path.to_string(),
        kind: classify(&error.kind),
        message: error.to_string(),
    }
}

fn classify(kind: &ValidationErrorKind) -> ViolationKind {
    match kind {
        ValidationErrorKind::Required { .. } => ViolationKind::MissingProperty,
        ValidationErrorKind::Type { .. } => ViolationKind::TypeMismatch,
        ValidationErrorKind::Pattern { .. } => ViolationKind::PatternMismatch,
        ValidationErrorKind::Enum { .. } | ValidationErrorKind::Constant { .. } => {
            ViolationKind::NotAllowed
        }
        ValidationErrorKind::Minimum { .. }
        | ValidationErrorKind::Maximum { .. }
        | ValidationErrorKind::ExclusiveMinimum { .. }
        | ValidationErrorKind::ExclusiveMaximum { .. } => ViolationKind::OutOfRange,
        ValidationErrorKind::MinLength { .. } | ValidationErrorKind::MaxLength { .. } => {
            ViolationKind::LengthOutOfRange
        }
        ValidationErrorKind::MinItems { .. } => ViolationKind::TooFewItems,
        ValidationErrorKind::OneOfNotValid { .. }
        | ValidationErrorKind::OneOfMultipleValid { .. } => ViolationKind::NoAlternativeMatched,
        _ => ViolationKind::Other,
    }
}

/// Escape a property name for use as a JSON Pointer token (RFC 6901).
fn escape_pointer_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}
