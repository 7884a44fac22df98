//! Lookup outcomes and error definitions.

use thiserror::Error;

use crate::dataset::Record;

/// Result of a well-formed lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome<'a> {
    /// One or more matches, in dataset order.
    Found(Vec<&'a Record>),
    /// No record matched. Not an error.
    NotFound,
}

impl<'a> LookupOutcome<'a> {
    /// Matched records; empty for `NotFound`.
    pub fn records(&self) -> &[&'a Record] {
        match self {
            LookupOutcome::Found(records) => records,
            LookupOutcome::NotFound => &[],
        }
    }
}

/// Errors a lookup can report. Display strings are the client-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The dataset failed to load at startup. Persists until restart.
    #[error("Dataset could not be loaded. Please check the file and try again.")]
    DatasetUnavailable { reason: String },

    /// The query was missing or blank.
    #[error("Medicine name is required")]
    MissingInput,

    /// The dataset lacks a required column.
    #[error("Dataset is missing the required column: '{column}'")]
    SchemaMismatch { column: String },

    /// Any other failure while handling the request.
    #[error("An internal server error occurred.")]
    Internal(String),
}

impl LookupError {
    /// Diagnostic text exposed to clients alongside the message.
    pub fn details(&self) -> Option<&str> {
        match self {
            LookupError::Internal(details) => Some(details),
            _ => None,
        }
    }
}
