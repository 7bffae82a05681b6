//! Responses for unmatched routes and unsupported methods

use crate::ApiError;

use axum::http::Method;

/// Router fallback: no route matches the path
pub async fn not_found() -> ApiError {
    ApiError::not_found()
}

/// Method fallback: the path exists but not for this method
pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::method_not_allowed(method)
}
