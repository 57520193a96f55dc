//! # Trivia Documents
//!
//! Typed view of a trivia question set:
//!
//! ```json
//! { "questions": [
//!     { "id": 1, "question": "…", "answer": "…",
//!       "category": { "main": "…", "sub": "…", "subsub": "…" } }
//! ] }
//! ```
//!
//! Question `id`s are carried through untouched. They are not required to be
//! unique; the session orders questions by position, never by id.

use serde::{Deserialize, Serialize};

/// Three-level category label shown above each question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Top-level category.
    pub main: String,
    /// Second-level category.
    pub sub: String,
    /// Third-level category.
    pub subsub: String,
}

/// A single trivia question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Author-assigned identifier. Any JSON number is accepted.
    pub id: serde_json::Number,
    /// Question text.
    pub question: String,
    /// Answer text, revealed near the end of the countdown.
    pub answer: String,
    /// Category labels.
    pub category: Category,
}

/// A validated trivia question set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriviaDocument {
    /// Questions in authored order.
    pub questions: Vec<Question>,
}

impl TriviaDocument {
    /// Number of questions in the set.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the set has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_with_unknown_fields() {
        let doc: TriviaDocument = serde_json::from_value(json!({
            "title": "ignored",
            "questions": [{
                "id": 7,
                "question": "Largest planet?",
                "answer": "Jupiter",
                "difficulty": "easy",
                "category": { "main": "Science", "sub": "Astronomy", "subsub": "Planets" }
            }]
        }))
        .unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.questions[0].id, serde_json::Number::from(7));
        assert_eq!(doc.questions[0].category.subsub, "Planets");
    }

    #[test]
    fn fractional_ids_are_preserved() {
        let q: Question = serde_json::from_value(json!({
            "id": 1.5,
            "question": "q",
            "answer": "a",
            "category": { "main": "m", "sub": "s", "subsub": "ss" }
        }))
        .unwrap();
        assert_eq!(serde_json::to_value(&q).unwrap()["id"], json!(1.5));
    }

    #[test]
    fn duplicate_ids_are_allowed() {
        let doc: TriviaDocument = serde_json::from_value(json!({
            "questions": [
                { "id": 1, "question": "a", "answer": "b",
                  "category": { "main": "m", "sub": "s", "subsub": "ss" } },
                { "id": 1, "question": "c", "answer": "d",
                  "category": { "main": "m", "sub": "s", "subsub": "ss" } }
            ]
        }))
        .unwrap();
        assert_eq!(doc.len(), 2);
    }
}
