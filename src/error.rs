use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::model::RecordId;

/// A single violated constraint reported by record validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub reason: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Errors returned by [`TabularView`](crate::TabularView) operations.
///
/// Every failing operation leaves the view exactly as it was before the call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    /// A sort key or column filter named a field the column set does not
    /// recognize for that purpose.
    #[error("invalid field '{name}': {reason}")]
    InvalidField { name: String, reason: &'static str },

    /// One or more record constraints were violated.
    #[error("validation failed: {}", join_violations(.0))]
    Validation(Vec<FieldViolation>),

    /// The operation referenced an identifier absent from the collection.
    #[error("record {id} not found")]
    NotFound { id: RecordId },
}

impl ViewError {
    pub fn invalid_field(name: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidField {
            name: name.into(),
            reason,
        }
    }

    /// Violations carried by a [`ViewError::Validation`], empty otherwise.
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            Self::Validation(violations) => violations,
            _ => &[],
        }
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
