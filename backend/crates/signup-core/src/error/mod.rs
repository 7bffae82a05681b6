use crate::{ErrorLocation, FieldErrors};

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation failed for {} field(s): {fields:?} {location}", fields.len())]
    Validation {
        fields: FieldErrors,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
