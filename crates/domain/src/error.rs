// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Full name is missing, too short, or too long.
    InvalidFullName(String),
    /// Phone number does not look like a phone number.
    InvalidPhone(String),
    /// Service name is not one of the fixed service names.
    InvalidService(String),
    /// Gender is not one of the fixed gender values.
    InvalidGender(String),
    /// Member ID must be a positive integer.
    InvalidMemberId(i64),
    /// Service date is not a valid `YYYY-MM-DD` calendar date.
    InvalidServiceDate(String),
    /// Search query is empty after sanitisation.
    EmptyQuery,
    /// Search query exceeds the maximum length.
    QueryTooLong {
        /// The sanitised query length.
        length: usize,
        /// The maximum permitted length.
        max: usize,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFullName(msg) => write!(f, "Invalid full name: {msg}"),
            Self::InvalidPhone(msg) => write!(f, "Invalid phone: {msg}"),
            Self::InvalidService(value) => {
                write!(f, "'{value}' is not one of the fixed service names")
            }
            Self::InvalidGender(value) => {
                write!(f, "'{value}' is not one of the fixed gender values")
            }
            Self::InvalidMemberId(value) => {
                write!(f, "member_id must be a positive integer, got {value}")
            }
            Self::InvalidServiceDate(value) => {
                write!(f, "'{value}' is not a valid YYYY-MM-DD date")
            }
            Self::EmptyQuery => write!(f, "Search query is required and cannot be empty"),
            Self::QueryTooLong { length, max } => {
                write!(f, "Search query is {length} characters; maximum is {max}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
