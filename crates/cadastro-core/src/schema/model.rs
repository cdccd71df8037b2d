//! Field error model produced by the validation schema.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Identifies which rule a field violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum RuleCode {
    Required,
    InvalidFormat,
    TooShort,
    WeakPassword,
    FutureDate,
    Underage,
    InvalidChoice,
    MustAccept,
}

/// A single field violation with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field key, e.g. `"email"` or `"academicBackground[0].university"`.
    pub field: String,
    pub code: RuleCode,
    pub message: String,
}

/// All violations found in one candidate record.
///
/// Rules are evaluated independently, so one field may carry several entries
/// (a short password without a digit violates both the length and the
/// strength rule).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub(crate) fn push(
        &mut self,
        field: impl Into<String>,
        code: RuleCode,
        message: impl Into<String>,
    ) {
        self.errors.push(FieldError {
            field: field.into(),
            code,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Whether the given field violated the given rule.
    pub fn has(&self, field: &str, code: RuleCode) -> bool {
        self.errors.iter().any(|e| e.field == field && e.code == code)
    }

    /// Whether the given field has any violation.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// The first message recorded for the given field, if any.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// All messages recorded for the given field, in rule order.
    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

impl std::error::Error for ValidationErrors {}
