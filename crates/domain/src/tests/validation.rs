// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, Gender, sanitise, validate_full_name, validate_member_id, validate_phone,
    validate_service_date, validate_visitor_gender,
};

#[test]
fn test_sanitise_trims_and_collapses_whitespace() {
    assert_eq!(sanitise("  Jane   A.  Doe \t"), "Jane A. Doe");
}

#[test]
fn test_sanitise_empty_input_yields_empty_string() {
    assert_eq!(sanitise("   \t\n  "), "");
}

#[test]
fn test_validate_full_name_accepts_normal_name() {
    let result: Result<String, DomainError> = validate_full_name(" Jane  Doe ");
    assert_eq!(result.unwrap(), "Jane Doe");
}

#[test]
fn test_validate_full_name_rejects_one_character() {
    let result: Result<String, DomainError> = validate_full_name("J");
    assert!(matches!(result, Err(DomainError::InvalidFullName(_))));
}

#[test]
fn test_validate_full_name_rejects_whitespace_only() {
    let result: Result<String, DomainError> = validate_full_name("   ");
    assert!(matches!(result, Err(DomainError::InvalidFullName(_))));
}

#[test]
fn test_validate_full_name_rejects_over_200_characters() {
    let long: String = "a".repeat(201);
    let result: Result<String, DomainError> = validate_full_name(&long);
    assert!(matches!(result, Err(DomainError::InvalidFullName(_))));
}

#[test]
fn test_validate_full_name_accepts_exactly_200_characters() {
    let long: String = "a".repeat(200);
    let result: Result<String, DomainError> = validate_full_name(&long);
    assert!(result.is_ok());
}

#[test]
fn test_validate_phone_accepts_absent_phone() {
    assert_eq!(validate_phone(None).unwrap(), None);
}

#[test]
fn test_validate_phone_normalises_blank_to_none() {
    assert_eq!(validate_phone(Some("   ")).unwrap(), None);
}

#[test]
fn test_validate_phone_accepts_international_format() {
    let result: Result<Option<String>, DomainError> = validate_phone(Some("+44 (0) 7123-456789"));
    assert_eq!(result.unwrap(), Some(String::from("+44 (0) 7123-456789")));
}

#[test]
fn test_validate_phone_rejects_letters() {
    let result: Result<Option<String>, DomainError> = validate_phone(Some("0712abc678"));
    assert!(matches!(result, Err(DomainError::InvalidPhone(_))));
}

#[test]
fn test_validate_phone_rejects_too_short() {
    let result: Result<Option<String>, DomainError> = validate_phone(Some("12345"));
    assert!(matches!(result, Err(DomainError::InvalidPhone(_))));
}

#[test]
fn test_validate_phone_rejects_too_long() {
    let result: Result<Option<String>, DomainError> = validate_phone(Some(&"1".repeat(21)));
    assert!(matches!(result, Err(DomainError::InvalidPhone(_))));
}

#[test]
fn test_validate_member_id_accepts_positive() {
    assert_eq!(validate_member_id(42).unwrap(), 42);
}

#[test]
fn test_validate_member_id_rejects_zero() {
    let result: Result<i64, DomainError> = validate_member_id(0);
    assert!(matches!(result, Err(DomainError::InvalidMemberId(0))));
}

#[test]
fn test_validate_member_id_rejects_negative() {
    let result: Result<i64, DomainError> = validate_member_id(-7);
    assert!(matches!(result, Err(DomainError::InvalidMemberId(-7))));
}

#[test]
fn test_validate_service_date_accepts_iso_date() {
    assert_eq!(validate_service_date("2026-08-23").unwrap(), "2026-08-23");
}

#[test]
fn test_validate_service_date_rejects_impossible_date() {
    let result: Result<String, DomainError> = validate_service_date("2026-02-30");
    assert!(matches!(result, Err(DomainError::InvalidServiceDate(_))));
}

#[test]
fn test_validate_service_date_rejects_wrong_format() {
    let result: Result<String, DomainError> = validate_service_date("23/08/2026");
    assert!(matches!(result, Err(DomainError::InvalidServiceDate(_))));
}

#[test]
fn test_validate_visitor_gender_accepts_male_and_female() {
    assert_eq!(validate_visitor_gender("Male").unwrap(), Gender::Male);
    assert_eq!(validate_visitor_gender("Female").unwrap(), Gender::Female);
}

#[test]
fn test_validate_visitor_gender_rejects_other() {
    let result: Result<Gender, DomainError> = validate_visitor_gender("Other");
    assert!(matches!(result, Err(DomainError::InvalidGender(_))));
}

#[test]
fn test_validate_visitor_gender_rejects_unknown_value() {
    let result: Result<Gender, DomainError> = validate_visitor_gender("Unknown");
    assert!(matches!(result, Err(DomainError::InvalidGender(_))));
}
