use signup_config::{Config, Environment, HandlerConfig};
use signup_db::UserRepository;

use std::time::Duration;

use sqlx::SqlitePool;

/// Shared, read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Deadline for each repository statement
    pub query_timeout: Duration,
    pub handler: HandlerConfig,
    pub environment: Environment,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        Self {
            pool,
            query_timeout: config.database.query_timeout(),
            handler: config.handler.clone(),
            environment: config.server.environment,
        }
    }

    /// Repository over the shared pool, bounded by the configured deadline
    pub fn users(&self) -> UserRepository {
        UserRepository::with_timeout(self.pool.clone(), self.query_timeout)
    }
}
