pub mod error;
pub mod models;
pub mod validator;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::user::{MAX_EMAIL_BYTES, MAX_NAME_BYTES, User, validate_user};
pub use validator::{FieldErrors, Validator};
