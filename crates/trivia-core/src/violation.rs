//! # Schema Violations
//!
//! A single field-level failure reported by schema validation. The
//! `instance_path` is a JSON Pointer to the offending field; for missing
//! properties it points at the property that should have been present,
//! not at its parent object.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a schema violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A required property is absent.
    MissingProperty,
    /// The value has the wrong JSON type.
    TypeMismatch,
    /// A string does not match the declared pattern.
    PatternMismatch,
    /// A value is outside the declared enum or constant.
    NotAllowed,
    /// A number is outside the declared minimum/maximum.
    OutOfRange,
    /// A string is shorter or longer than allowed.
    LengthOutOfRange,
    /// An array has fewer items than allowed.
    TooFewItems,
    /// None (or more than one) of the `oneOf` alternatives matched.
    NoAlternativeMatched,
    /// Any other keyword failure.
    Other,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MissingProperty => "missing required property",
            Self::TypeMismatch => "wrong type",
            Self::PatternMismatch => "pattern mismatch",
            Self::NotAllowed => "value not allowed",
            Self::OutOfRange => "value out of range",
            Self::LengthOutOfRange => "length out of range",
            Self::TooFewItems => "too few items",
            Self::NoAlternativeMatched => "no matching alternative",
            Self::Other => "constraint violated",
        };
        f.write_str(s)
    }
}

/// A single validation violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// JSON Pointer to the violating field in the instance.
    pub instance_path: String,
    /// JSON Pointer within the schema to the keyword that failed.
    pub schema_path: String,
    /// Category of the failure.
    pub kind: ViolationKind,
    /// Human-readable description from the validator.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}: {}", self.kind, self.message)
        } else {
            write!(f, "  {}: {}: {}", self.instance_path, self.kind, self.message)
        }
    }
}
