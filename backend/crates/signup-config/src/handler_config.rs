use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MAX_BODY_BYTES, MAX_MAX_BODY_BYTES, MIN_MAX_BODY_BYTES,
};

use serde::Deserialize;

/// Request handling settings for the signup endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HandlerConfig {
    /// Largest accepted JSON request body
    pub max_body_bytes: usize,
    /// When false, PATCH merges only `fullname` and skips re-validation.
    /// When true, PATCH merges `fullname` and `email` and re-validates the
    /// merged user before it is written.
    pub strict_update: bool,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            strict_update: false,
        }
    }
}

impl HandlerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_body_bytes < MIN_MAX_BODY_BYTES || self.max_body_bytes > MAX_MAX_BODY_BYTES {
            return Err(ConfigError::handler(format!(
                "handler.max_body_bytes must be {}-{}, got {}",
                MIN_MAX_BODY_BYTES, MAX_MAX_BODY_BYTES, self.max_body_bytes
            )));
        }

        Ok(())
    }
}
