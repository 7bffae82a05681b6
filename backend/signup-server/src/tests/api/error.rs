use crate::ApiError;
use crate::api::error::{NOT_FOUND_MESSAGE, SERVER_ERROR_MESSAGE};

use signup_core::{User, Validator, validate_user};
use signup_db::DbError;

use std::panic::Location;

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use error_location::ErrorLocation;
use googletest::prelude::*;
use http_body_util::BodyExt;

async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let response = ApiError::not_found().into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], NOT_FOUND_MESSAGE);
    assert!(json["error"].get("fields").is_none());
}

#[tokio::test]
async fn test_method_not_allowed_names_the_method() {
    let response = ApiError::method_not_allowed(Method::PUT).into_response();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "METHOD_NOT_ALLOWED");
    assert_eq!(
        json["error"]["message"],
        "the PUT method is not supported for this resource"
    );
}

#[tokio::test]
async fn test_bad_request_returns_400_with_message() {
    let response = ApiError::bad_request("body must not be empty").into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
    assert_eq!(json["error"]["message"], "body must not be empty");
}

#[tokio::test]
async fn test_validation_error_returns_422_with_every_field() {
    let mut v = Validator::new();
    validate_user(&mut v, &User::new(String::new(), String::new()));
    let error: ApiError = v.finish().unwrap_err().into();

    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["message"], "failed validation");
    assert_eq!(json["error"]["fields"]["name"], "cannot be empty");
    assert_eq!(json["error"]["fields"]["email"], "cannot be empty");
}

#[tokio::test]
async fn test_internal_error_hides_detail() {
    let error = ApiError::Internal {
        message: "disk I/O error at /var/db/signup.db".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], SERVER_ERROR_MESSAGE);
    assert!(!json.to_string().contains("/var/db"));
}

#[test]
fn test_record_not_found_maps_to_not_found() {
    let error: ApiError = DbError::record_not_found().into();

    assert_that!(error.status(), eq(StatusCode::NOT_FOUND));
}

#[test]
fn test_timeout_maps_to_internal() {
    let error: ApiError = DbError::Timeout {
        operation: "get",
        timeout_ms: 3000,
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert_that!(error.status(), eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(error.to_string(), contains_substring("exceeded 3000ms deadline"));
}
