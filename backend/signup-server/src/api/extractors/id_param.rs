//! Path identifier extractor for `/v1/signup/{id}`

use crate::{ApiError, AppState};

use std::future::Future;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// A positive record identifier taken from the `{id}` path segment.
///
/// Anything that is not a base-10 integer of at least 1 is rejected as
/// not found, the same answer a missing record gets.
pub struct IdParam(pub i64);

impl FromRequestParts<AppState> for IdParam {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Path(raw) = Path::<String>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::not_found())?;

            match parse_id(&raw) {
                Some(id) => Ok(IdParam(id)),
                None => {
                    log::debug!("Rejecting invalid id parameter: {:?}", raw);
                    Err(ApiError::not_found())
                }
            }
        }
    }
}

pub fn parse_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id >= 1)
}
