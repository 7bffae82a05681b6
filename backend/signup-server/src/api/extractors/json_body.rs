//! Strict JSON request body extractor
//!
//! Reads at most `handler.max_body_bytes`, then decodes exactly one JSON
//! value. Every rejection is an `ApiError::BadRequest` with a message the
//! client can act on.

use crate::{ApiError, ApiResult, AppState};

use std::future::Future;

use axum::{
    body::to_bytes,
    extract::{FromRequest, Request},
};
use http_body_util::LengthLimitError;
use serde::de::DeserializeOwned;
use serde_json::error::Category;

/// Request body decoded into `T`
pub struct JsonBody<T>(pub T);

impl<T> FromRequest<AppState> for JsonBody<T>
where
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let limit = state.handler.max_body_bytes;

        async move {
            let bytes = to_bytes(req.into_body(), limit).await.map_err(|e| {
                if e.into_inner().downcast_ref::<LengthLimitError>().is_some() {
                    ApiError::bad_request(format!("body must not be larger than {} bytes", limit))
                } else {
                    ApiError::bad_request("body could not be read")
                }
            })?;

            decode_json(&bytes).map(JsonBody)
        }
    }
}

/// Decode a complete body into `T`.
///
/// Whitespace-only input counts as empty. Anything after the first value,
/// other than whitespace, is rejected.
pub fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> ApiResult<T> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::bad_request("body must not be empty"));
    }

    let mut de = serde_json::Deserializer::from_slice(bytes);
    let value = T::deserialize(&mut de).map_err(describe)?;

    de.end()
        .map_err(|_| ApiError::bad_request("body must only contain a single JSON value"))?;

    Ok(value)
}

#[track_caller]
fn describe(e: serde_json::Error) -> ApiError {
    let message = match e.classify() {
        Category::Syntax => format!(
            "body contains badly-formed JSON (at line {} column {})",
            e.line(),
            e.column()
        ),
        Category::Eof => "body contains badly-formed JSON".to_string(),
        Category::Data => {
            let text = e.to_string();
            if let Some(key) = unknown_key(&text) {
                format!("body contains unknown key \"{}\"", key)
            } else if text.starts_with("invalid type") {
                format!(
                    "body contains incorrect JSON type (at line {} column {})",
                    e.line(),
                    e.column()
                )
            } else {
                format!(
                    "body contains an invalid JSON value (at line {} column {})",
                    e.line(),
                    e.column()
                )
            }
        }
        Category::Io => "body could not be read".to_string(),
    };

    ApiError::bad_request(message)
}

/// serde reports `unknown field `name`, expected ...`
fn unknown_key(text: &str) -> Option<&str> {
    let rest = text.strip_prefix("unknown field `")?;
    rest.split('`').next()
}
