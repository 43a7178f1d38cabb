// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use checkin_domain::DomainError;
use checkin_persistence::PersistenceError;

/// Authentication errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The supplied PIN was missing or did not match.
    AccessDenied,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AccessDenied => write!(f, "Access denied"),
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent
/// the API contract. Each variant maps to exactly one HTTP status at the
/// server boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The supplied PIN was missing or did not match.
    AccessDenied,
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The member is already checked in for this service and date.
    DuplicateCheckIn {
        /// A human-readable description of the duplicate.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AccessDenied => write!(f, "Access denied"),
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::DuplicateCheckIn { message } => {
                write!(f, "Duplicate check-in: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AccessDenied => Self::AccessDenied,
        }
    }
}

/// Translates a domain validation error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let field: &str = match err {
        DomainError::InvalidFullName(_) => "full_name",
        DomainError::InvalidPhone(_) => "phone",
        DomainError::InvalidService(_) => "service",
        DomainError::InvalidGender(_) => "gender",
        DomainError::InvalidMemberId(_) => "member_id",
        DomainError::InvalidServiceDate(_) => "service_date",
        DomainError::EmptyQuery | DomainError::QueryTooLong { .. } => "q",
    };
    ApiError::InvalidInput {
        field: String::from(field),
        message: err.to_string(),
    }
}

/// Translates a persistence error into an API error.
///
/// This translation is explicit and ensures persistence errors are not
/// leaked directly.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::DuplicateCheckIn { .. } => ApiError::DuplicateCheckIn {
            message: String::from("Member already checked in for this service today"),
        },
        PersistenceError::MemberNotFound(member_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Member"),
            message: format!("Member {member_id} does not exist"),
        },
        PersistenceError::NotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message: String::from("The requested record does not exist"),
        },
        _ => ApiError::Internal {
            message: err.to_string(),
        },
    }
}
