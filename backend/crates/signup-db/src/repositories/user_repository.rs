//! User repository for CRUD operations on signups.
//!
//! Every method issues exactly one statement and bounds it with the
//! repository's deadline. An expired deadline drops the in-flight future and
//! surfaces as `DbError::Timeout`.
//!
//! `get` and `delete` translate "no such row" into `DbError::RecordNotFound`.
//! `update` does not: callers fetch the user first, so a row that vanishes in
//! between is reported as a plain store error.

use crate::{DEFAULT_QUERY_TIMEOUT, DbError, Result as DbErrorResult};

use signup_core::{ErrorLocation, User};

use std::future::Future;
use std::panic::Location;
use std::time::Duration;

use chrono::DateTime;
use log::warn;
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    fullname: String,
    email: String,
    created_at: i64,
    version: i64,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    fn try_from(r: UserRow) -> DbErrorResult<Self> {
        Ok(User {
            id: r.id,
            name: r.fullname,
            email: r.email,
            created_at: DateTime::from_timestamp(r.created_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: format!("Invalid timestamp in users.created_at: {}", r.created_at),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
            version: r.version as i32,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
    timeout: Duration,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_timeout(pool, DEFAULT_QUERY_TIMEOUT)
    }

    pub fn with_timeout(pool: SqlitePool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    /// Persist a new user and copy the store-assigned `id`, `created_at` and
    /// `version` back onto it.
    pub async fn insert(&self, user: &mut User) -> DbErrorResult<()> {
        let (id, created_at, version) = self
            .with_deadline(
                "insert",
                sqlx::query_as::<_, (i64, i64, i64)>(
                    r#"
                        INSERT INTO users (fullname, email)
                        VALUES (?, ?)
                        RETURNING id, created_at, version
                    "#,
                )
                .bind(&user.name)
                .bind(&user.email)
                .fetch_one(&self.pool),
            )
            .await?;

        user.id = id;
        user.created_at =
            DateTime::from_timestamp(created_at, 0).ok_or_else(|| DbError::Initialization {
                message: format!("Invalid timestamp in users.created_at: {}", created_at),
                location: ErrorLocation::from(Location::caller()),
            })?;
        user.version = version as i32;

        Ok(())
    }

    pub async fn get(&self, id: i64) -> DbErrorResult<User> {
        if id < 1 {
            return Err(DbError::record_not_found());
        }

        let row = self
            .with_deadline(
                "get",
                sqlx::query_as::<_, UserRow>(
                    r#"
                        SELECT id, fullname, email, created_at, version
                        FROM users
                        WHERE id = ?
                    "#,
                )
                .bind(id)
                .fetch_optional(&self.pool),
            )
            .await?;

        row.ok_or_else(DbError::record_not_found)?.try_into()
    }

    /// Write `name` and `email` and bump `version` by one. The new version is
    /// stored back on `user`.
    pub async fn update(&self, user: &mut User) -> DbErrorResult<()> {
        let version = self
            .with_deadline(
                "update",
                sqlx::query_scalar::<_, i64>(
                    r#"
                        UPDATE users
                        SET fullname = ?, email = ?, version = version + 1
                        WHERE id = ?
                        RETURNING version
                    "#,
                )
                .bind(&user.name)
                .bind(&user.email)
                .bind(user.id)
                .fetch_one(&self.pool),
            )
            .await?;

        user.version = version as i32;

        Ok(())
    }

    /// Permanently remove the user.
    pub async fn delete(&self, id: i64) -> DbErrorResult<()> {
        if id < 1 {
            return Err(DbError::record_not_found());
        }

        let result = self
            .with_deadline(
                "delete",
                sqlx::query("DELETE FROM users WHERE id = ?")
                    .bind(id)
                    .execute(&self.pool),
            )
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::record_not_found());
        }

        Ok(())
    }

    async fn with_deadline<T, F>(&self, operation: &'static str, query: F) -> DbErrorResult<T>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.timeout, query).await {
            Ok(result) => Ok(result?),
            Err(_elapsed) => {
                warn!(
                    "users.{} timed out after {}ms",
                    operation,
                    self.timeout.as_millis()
                );
                Err(DbError::Timeout {
                    operation,
                    timeout_ms: self.timeout.as_millis(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }
}
