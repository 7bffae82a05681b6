use crate::parse_id;

use googletest::prelude::*;

#[test]
fn test_parse_id_accepts_positive_integers() {
    assert_that!(parse_id("1"), some(eq(1)));
    assert_that!(parse_id("42"), some(eq(42)));
}

#[test]
fn test_parse_id_rejects_zero_and_negative() {
    assert_that!(parse_id("0"), none());
    assert_that!(parse_id("-7"), none());
}

#[test]
fn test_parse_id_rejects_non_numeric() {
    assert_that!(parse_id("abc"), none());
    assert_that!(parse_id("1.5"), none());
    assert_that!(parse_id(""), none());
    assert_that!(parse_id("99999999999999999999"), none());
}
