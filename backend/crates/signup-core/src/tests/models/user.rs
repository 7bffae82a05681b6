use crate::{User, Validator, validate_user};

use googletest::prelude::*;

fn validate(name: &str, email: &str) -> Validator {
    let mut v = Validator::new();
    validate_user(&mut v, &User::new(name.to_string(), email.to_string()));
    v
}

#[test]
fn test_user_new_has_store_fields_unset() {
    let user = User::new("Alice".to_string(), "a@x.com".to_string());

    assert_that!(user.id, eq(0));
    assert_that!(user.version, eq(0));
    assert_that!(user.name, eq("Alice"));
    assert_that!(user.email, eq("a@x.com"));
    assert!(!user.is_persisted());
}

#[test]
fn test_user_is_persisted_once_id_assigned() {
    let mut user = User::new("Alice".to_string(), "a@x.com".to_string());
    user.id = 7;

    assert!(user.is_persisted());
}

#[test]
fn given_valid_user_then_no_errors() {
    let v = validate("Alice", "a@x.com");

    assert_that!(v.is_empty(), eq(true));
}

#[test]
fn given_empty_name_then_single_name_error() {
    let v = validate("", "a@x.com");

    assert_that!(v.errors().len(), eq(1));
    assert_that!(v.errors().get("name"), some(eq("cannot be empty")));
}

#[test]
fn given_empty_email_then_single_email_error() {
    let v = validate("Alice", "");

    assert_that!(v.errors().len(), eq(1));
    assert_that!(v.errors().get("email"), some(eq("cannot be empty")));
}

#[test]
fn given_name_of_26_bytes_then_length_error() {
    let v = validate(&"a".repeat(26), "a@x.com");

    assert_that!(v.errors().len(), eq(1));
    assert_that!(
        v.errors().get("name"),
        some(eq("cannot be more than 25 bytes long"))
    );
}

#[test]
fn given_name_of_exactly_25_bytes_then_valid() {
    let v = validate(&"a".repeat(25), "a@x.com");

    assert_that!(v.is_empty(), eq(true));
}

#[test]
fn given_multibyte_name_then_length_counts_bytes() {
    // 13 two-byte characters = 26 bytes
    let v = validate(&"é".repeat(13), "a@x.com");

    assert_that!(
        v.errors().get("name"),
        some(eq("cannot be more than 25 bytes long"))
    );
}

#[test]
fn given_email_of_51_bytes_then_length_error() {
    let email = format!("{}@x.com", "a".repeat(45));
    let v = validate("Alice", &email);

    assert_that!(email.len(), eq(51));
    assert_that!(
        v.errors().get("email"),
        some(eq("cannot be more than 50 bytes long"))
    );
}

#[test]
fn given_both_fields_empty_then_one_error_per_field() {
    let v = validate("", "");

    assert_that!(v.errors().len(), eq(2));
    assert_that!(v.errors().get("name"), some(eq("cannot be empty")));
    assert_that!(v.errors().get("email"), some(eq("cannot be empty")));
}
