//! Signup REST API handlers
//!
//! Create, read, partial update and delete of a single user record.

use crate::{
    ApiResult, AppState, CreateUserRequest, DeleteResponse, IdParam, JsonBody, UpdateUserRequest,
    UserResponse,
};

use signup_core::{User, Validator, validate_user};

use axum::{
    Json,
    extract::{FromRequest, Request, State},
    http::{StatusCode, header},
};
use log::info;

/// POST /v1/signup
///
/// Validate and persist a new user. Responds 201 with a `Location` header.
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> ApiResult<(StatusCode, [(header::HeaderName, String); 1], Json<UserResponse>)> {
    let mut user = User::new(req.fullname, req.email);

    let mut v = Validator::new();
    validate_user(&mut v, &user);
    v.finish()?;

    state.users().insert(&mut user).await?;

    info!("Created user {} (version {})", user.id, user.version);

    let location = format!("/v1/signup/{}", user.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserResponse { user: user.into() }),
    ))
}

/// GET /v1/signup/{id}
pub async fn show_user(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> ApiResult<Json<UserResponse>> {
    let user = state.users().get(id).await?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// PATCH /v1/signup/{id}
///
/// The record is fetched before the body is read, so an unknown id answers
/// 404 even when the body is malformed.
///
/// By default only `fullname` is applied and the merged record is written
/// without re-validation. With `handler.strict_update` both fields are
/// applied and the result must pass the same rules as a create.
pub async fn update_user(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    request: Request,
) -> ApiResult<Json<UserResponse>> {
    let repo = state.users();
    let mut user = repo.get(id).await?;

    let JsonBody(req) = JsonBody::<UpdateUserRequest>::from_request(request, &state).await?;

    if let Some(fullname) = req.fullname {
        user.name = fullname;
    }

    if state.handler.strict_update {
        if let Some(email) = req.email {
            user.email = email;
        }

        let mut v = Validator::new();
        validate_user(&mut v, &user);
        v.finish()?;
    }

    repo.update(&mut user).await?;

    info!("Updated user {} to version {}", user.id, user.version);

    Ok(Json(UserResponse { user: user.into() }))
}

/// DELETE /v1/signup/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> ApiResult<Json<DeleteResponse>> {
    state.users().delete(id).await?;

    info!("Deleted user {}", id);

    Ok(Json(DeleteResponse {
        message: "user successfully deleted".to_string(),
    }))
}
