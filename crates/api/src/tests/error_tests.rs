// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence-to-API error translation tests.

use checkin_persistence::PersistenceError;

use crate::error::{ApiError, translate_persistence_error};

#[test]
fn test_duplicate_check_in_translates_to_business_outcome() {
    let err: ApiError = translate_persistence_error(PersistenceError::DuplicateCheckIn {
        member_id: 7,
        service: String::from("Sunday Morning Service"),
        service_date: String::from("2026-08-23"),
    });

    assert_eq!(
        err,
        ApiError::DuplicateCheckIn {
            message: String::from("Member already checked in for this service today"),
        }
    );
}

#[test]
fn test_member_not_found_translates_with_member_id() {
    let err: ApiError = translate_persistence_error(PersistenceError::MemberNotFound(42));

    assert!(matches!(
        err,
        ApiError::ResourceNotFound { resource_type, message }
            if resource_type == "Member" && message.contains("42")
    ));
}

#[test]
fn test_record_not_found_translates_to_resource_not_found() {
    let err: ApiError =
        translate_persistence_error(PersistenceError::NotFound(String::from("Record not found")));

    assert!(matches!(
        err,
        ApiError::ResourceNotFound { resource_type, .. } if resource_type == "Record"
    ));
}

#[test]
fn test_database_error_translates_to_internal() {
    let err: ApiError =
        translate_persistence_error(PersistenceError::DatabaseError(String::from("disk I/O")));

    assert!(matches!(err, ApiError::Internal { .. }));
}
