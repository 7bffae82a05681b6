//! Field-keyed accumulator for validation failures.
//!
//! Only the first failure recorded for a field is kept. Callers that run
//! several checks against the same field must order them from most to least
//! fundamental (e.g. emptiness before length).

use crate::{CoreError, ErrorLocation, Result as CoreErrorResult};

use std::collections::BTreeMap;
use std::panic::Location;

/// Field name → first failure message, ordered by field name
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field has a recorded failure
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record `message` under `field` unless the field already failed.
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_insert_with(|| message.into());
    }

    /// Record `message` under `field` when `acceptable` is false.
    pub fn check(&mut self, acceptable: bool, field: &str, message: &str) {
        if !acceptable {
            self.add_error(field, message);
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }

    /// Consume the validator, failing with `CoreError::Validation` if any
    /// field was rejected.
    #[track_caller]
    pub fn finish(self) -> CoreErrorResult<()> {
        if self.is_empty() {
            return Ok(());
        }

        Err(CoreError::Validation {
            fields: self.errors,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
