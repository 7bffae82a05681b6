//! User entity - the single resource behind `/v1/signup`.

use crate::Validator;

use chrono::{DateTime, Utc};

/// Upper bound on `User::name`, in bytes
pub const MAX_NAME_BYTES: usize = 25;
/// Upper bound on `User::email`, in bytes
pub const MAX_EMAIL_BYTES: usize = 50;

/// A signed-up user.
///
/// `id`, `created_at` and `version` are owned by the store: they hold zero
/// values until the record has been inserted and are overwritten from the
/// row the store returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    /// Optimistic locking version
    pub version: i32,
}

impl User {
    /// Build an unsaved user from client-supplied fields
    pub fn new(name: String, email: String) -> Self {
        Self {
            id: 0,
            name,
            email,
            created_at: DateTime::<Utc>::default(),
            version: 0,
        }
    }

    /// Check if the store has assigned an id
    pub fn is_persisted(&self) -> bool {
        self.id >= 1
    }
}

/// Apply the field rules for a user.
///
/// All four checks always run; the validator keeps the first failure per
/// field, so an empty name reports "cannot be empty" and never the length
/// message.
pub fn validate_user(v: &mut Validator, user: &User) {
    v.check(!user.name.is_empty(), "name", "cannot be empty");
    v.check(!user.email.is_empty(), "email", "cannot be empty");
    v.check(
        user.name.len() <= MAX_NAME_BYTES,
        "name",
        "cannot be more than 25 bytes long",
    );
    v.check(
        user.email.len() <= MAX_EMAIL_BYTES,
        "email",
        "cannot be more than 50 bytes long",
    );
}
