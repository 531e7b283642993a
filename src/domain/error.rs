//! Domain-level outcome taxonomy.
//!
//! These errors are transport agnostic. The inbound HTTP adapter maps them
//! to status codes and response bodies; the domain only records what went
//! wrong.

use std::fmt;

use thiserror::Error as ThisError;

use super::ports::PersistenceError;
use super::validation::FieldViolation;

/// Failure outcomes shared by every resource operation.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The payload violated one or more validation rules. Carries the full
    /// ordered list of violations, never just the first.
    #[error("payload failed validation: {}", summarise(violations))]
    Validation { violations: Vec<FieldViolation> },

    /// The identifier does not resolve to a stored row. Not an exception
    /// path; reported to clients as a plain 404.
    #[error("{resource} {id} does not exist")]
    NotFound { resource: &'static str, id: String },

    /// The underlying store failed. The core has no compensating action, so
    /// this propagates to the boundary as a fatal outcome.
    #[error("storage failure: {message}")]
    Storage { message: String },
}

fn summarise(violations: &[FieldViolation]) -> String {
    let fields: Vec<&str> = violations.iter().map(FieldViolation::field).collect();
    fields.join(", ")
}

impl Error {
    /// Wrap a non-empty violation list.
    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        Self::Validation { violations }
    }

    /// Record a lookup that matched no stored row.
    pub fn not_found(resource: &'static str, id: impl fmt::Display) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Record a fatal storage failure.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

impl From<PersistenceError> for Error {
    fn from(value: PersistenceError) -> Self {
        Self::storage(value.to_string())
    }
}
