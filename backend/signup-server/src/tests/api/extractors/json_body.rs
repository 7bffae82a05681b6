use crate::{ApiError, CreateUserRequest, UpdateUserRequest, decode_json};

use googletest::prelude::*;

fn bad_request_message<T: std::fmt::Debug>(result: crate::ApiResult<T>) -> String {
    match result {
        Err(ApiError::BadRequest { message, .. }) => message,
        other => panic!("expected BadRequest, got {:?}", other),
    }
}

#[test]
fn test_decode_valid_create_body() {
    let req: CreateUserRequest =
        decode_json(br#"{"fullname": "Alice", "email": "a@x.com"}"#).unwrap();

    assert_that!(req.fullname, eq("Alice"));
    assert_that!(req.email, eq("a@x.com"));
}

#[test]
fn test_decode_missing_create_fields_default_to_empty() {
    let req: CreateUserRequest = decode_json(br#"{"fullname": "Alice"}"#).unwrap();

    assert_that!(req.email, eq(""));
}

#[test]
fn test_decode_update_null_and_absent_are_none() {
    let req: UpdateUserRequest = decode_json(br#"{"fullname": null}"#).unwrap();

    assert_that!(req.fullname, none());
    assert_that!(req.email, none());
}

#[test]
fn test_decode_empty_body_rejected() {
    let message = bad_request_message(decode_json::<CreateUserRequest>(b""));
    assert_that!(message, eq("body must not be empty"));

    let message = bad_request_message(decode_json::<CreateUserRequest>(b"  \n"));
    assert_that!(message, eq("body must not be empty"));
}

#[test]
fn test_decode_malformed_json_rejected() {
    let message = bad_request_message(decode_json::<CreateUserRequest>(b"{\"fullname\": }"));

    assert_that!(message, starts_with("body contains badly-formed JSON"));
}

#[test]
fn test_decode_truncated_json_rejected() {
    let message = bad_request_message(decode_json::<CreateUserRequest>(b"{\"fullname\": \"Al"));

    assert_that!(message, starts_with("body contains badly-formed JSON"));
}

#[test]
fn test_decode_wrong_type_rejected() {
    let message = bad_request_message(decode_json::<CreateUserRequest>(br#"{"fullname": 5}"#));

    assert_that!(message, starts_with("body contains incorrect JSON type"));
}

#[test]
fn test_decode_unknown_key_rejected() {
    let message = bad_request_message(decode_json::<CreateUserRequest>(
        br#"{"fullname": "Alice", "role": "admin"}"#,
    ));

    assert_that!(message, eq("body contains unknown key \"role\""));
}

#[test]
fn test_decode_trailing_value_rejected() {
    let message = bad_request_message(decode_json::<CreateUserRequest>(
        br#"{"fullname": "Alice"} {"fullname": "Bob"}"#,
    ));

    assert_that!(message, eq("body must only contain a single JSON value"));
}

#[test]
fn test_decode_trailing_whitespace_accepted() {
    let result = decode_json::<CreateUserRequest>(b"{\"fullname\": \"Alice\"}\n\n");

    assert_that!(result, ok(anything()));
}
