// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Gender;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Minimum accepted length of a sanitised full name.
pub const MIN_NAME_LENGTH: usize = 2;
/// Maximum accepted length of a sanitised full name.
pub const MAX_NAME_LENGTH: usize = 200;
/// Minimum accepted length of a phone number.
pub const MIN_PHONE_LENGTH: usize = 6;
/// Maximum accepted length of a phone number.
pub const MAX_PHONE_LENGTH: usize = 20;

const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Trims leading and trailing whitespace and collapses internal runs of
/// whitespace to a single space.
#[must_use]
pub fn sanitise(input: &str) -> String {
    input.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// Validates a visitor's full name, returning the sanitised form.
///
/// # Errors
///
/// Returns [`DomainError::InvalidFullName`] when the sanitised name is
/// shorter than [`MIN_NAME_LENGTH`] or longer than [`MAX_NAME_LENGTH`]
/// characters.
pub fn validate_full_name(raw: &str) -> Result<String, DomainError> {
    let name: String = sanitise(raw);
    let length: usize = name.chars().count();
    if length < MIN_NAME_LENGTH {
        return Err(DomainError::InvalidFullName(format!(
            "must be at least {MIN_NAME_LENGTH} characters"
        )));
    }
    if length > MAX_NAME_LENGTH {
        return Err(DomainError::InvalidFullName(format!(
            "must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(name)
}

/// Validates an optional phone number, returning the sanitised form.
///
/// An absent or blank phone is accepted and normalised to `None`.
///
/// # Errors
///
/// Returns [`DomainError::InvalidPhone`] when a supplied phone is outside
/// the [`MIN_PHONE_LENGTH`]..=[`MAX_PHONE_LENGTH`] range or contains a
/// character other than digits, spaces, `-`, `+`, `(`, or `)`.
pub fn validate_phone(raw: Option<&str>) -> Result<Option<String>, DomainError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let phone: String = sanitise(raw);
    if phone.is_empty() {
        return Ok(None);
    }
    let length: usize = phone.chars().count();
    if !(MIN_PHONE_LENGTH..=MAX_PHONE_LENGTH).contains(&length) {
        return Err(DomainError::InvalidPhone(format!(
            "must be {MIN_PHONE_LENGTH} to {MAX_PHONE_LENGTH} characters"
        )));
    }
    let valid: bool = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')'));
    if valid {
        Ok(Some(phone))
    } else {
        Err(DomainError::InvalidPhone(
            "may only contain digits, spaces, and - + ( )".to_string(),
        ))
    }
}

/// Validates a numeric member ID.
///
/// # Errors
///
/// Returns [`DomainError::InvalidMemberId`] when the ID is zero or
/// negative.
pub const fn validate_member_id(member_id: i64) -> Result<i64, DomainError> {
    if member_id > 0 {
        Ok(member_id)
    } else {
        Err(DomainError::InvalidMemberId(member_id))
    }
}

/// Validates a service date in `YYYY-MM-DD` form, returning the input
/// unchanged on success.
///
/// # Errors
///
/// Returns [`DomainError::InvalidServiceDate`] when the value does not
/// parse as a calendar date.
pub fn validate_service_date(raw: &str) -> Result<String, DomainError> {
    match Date::parse(raw, DATE_FORMAT) {
        Ok(_) => Ok(raw.to_string()),
        Err(_) => Err(DomainError::InvalidServiceDate(raw.to_string())),
    }
}

/// Validates a gender value for visitor registration.
///
/// Visitors are restricted to `Male` and `Female`; the wider [`Gender`]
/// set applies to members only.
///
/// # Errors
///
/// Returns [`DomainError::InvalidGender`] when the value is not `Male`
/// or `Female`.
pub fn validate_visitor_gender(raw: &str) -> Result<Gender, DomainError> {
    match raw.parse::<Gender>()? {
        gender @ (Gender::Male | Gender::Female) => Ok(gender),
        Gender::Other => Err(DomainError::InvalidGender(raw.to_string())),
    }
}
