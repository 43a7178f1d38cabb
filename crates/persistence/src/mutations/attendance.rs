// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Member check-in registration.
//!
//! Registration is idempotent per `(member, service, date)`: a fast
//! existence check gives the common duplicate a clean error, and the
//! unique index on the attendance table is the authority for anything
//! the check races with.

use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::member_attendance;
use crate::error::PersistenceError;
use crate::queries::members::{
    get_member_mysql, get_member_sqlite, has_checked_in_mysql, has_checked_in_sqlite,
};

fn duplicate(member_id: i64, service: &str, service_date: &str) -> PersistenceError {
    PersistenceError::DuplicateCheckIn {
        member_id,
        service: service.to_string(),
        service_date: service_date.to_string(),
    }
}

/// Maps an attendance insert failure to a persistence error.
///
/// A unique violation means a concurrent writer won the race between the
/// existence check and the insert; the unique index is the authority, so
/// the violation is reported as a duplicate check-in.
pub(crate) fn map_insert_error(
    err: diesel::result::Error,
    member_id: i64,
    service: &str,
    service_date: &str,
) -> PersistenceError {
    match err {
        diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            duplicate(member_id, service, service_date)
        }
        e => PersistenceError::from(e),
    }
}

/// Registers a member check-in (`SQLite` version).
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `member_id` - The member ID
/// * `service` - The stored service name
/// * `service_date` - The service date (`YYYY-MM-DD`)
/// * `check_in_time` - The check-in timestamp (ISO 8601, UTC)
///
/// # Returns
///
/// The attendance row ID assigned to the new check-in.
///
/// # Errors
///
/// Returns an error if:
/// - The member does not exist
/// - The member is already checked in for this service and date
/// - The database operation fails
pub fn register_attendance_sqlite(
    conn: &mut SqliteConnection,
    member_id: i64,
    service: &str,
    service_date: &str,
    check_in_time: &str,
) -> Result<i64, PersistenceError> {
    // Surfaces MemberNotFound before the insert would hit the foreign key
    let _ = get_member_sqlite(conn, member_id)?;

    if has_checked_in_sqlite(conn, member_id, service, service_date)? {
        return Err(duplicate(member_id, service, service_date));
    }

    let inserted: Result<usize, diesel::result::Error> =
        diesel::insert_into(member_attendance::table)
            .values((
                member_attendance::member_id.eq(member_id),
                member_attendance::service.eq(service),
                member_attendance::service_date.eq(service_date),
                member_attendance::check_in_time.eq(check_in_time),
            ))
            .execute(conn);

    match inserted {
        Ok(_) => {
            let attendance_id: i64 = conn.get_last_insert_rowid()?;
            info!(member_id, attendance_id, "Member check-in registered");
            Ok(attendance_id)
        }
        Err(e) => Err(map_insert_error(e, member_id, service, service_date)),
    }
}

/// Registers a member check-in (`MySQL` version).
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `member_id` - The member ID
/// * `service` - The stored service name
/// * `service_date` - The service date (`YYYY-MM-DD`)
/// * `check_in_time` - The check-in timestamp (ISO 8601, UTC)
///
/// # Returns
///
/// The attendance row ID assigned to the new check-in.
///
/// # Errors
///
/// Returns an error if:
/// - The member does not exist
/// - The member is already checked in for this service and date
/// - The database operation fails
pub fn register_attendance_mysql(
    conn: &mut MysqlConnection,
    member_id: i64,
    service: &str,
    service_date: &str,
    check_in_time: &str,
) -> Result<i64, PersistenceError> {
    // Surfaces MemberNotFound before the insert would hit the foreign key
    let _ = get_member_mysql(conn, member_id)?;

    if has_checked_in_mysql(conn, member_id, service, service_date)? {
        return Err(duplicate(member_id, service, service_date));
    }

    let inserted: Result<usize, diesel::result::Error> =
        diesel::insert_into(member_attendance::table)
            .values((
                member_attendance::member_id.eq(member_id),
                member_attendance::service.eq(service),
                member_attendance::service_date.eq(service_date),
                member_attendance::check_in_time.eq(check_in_time),
            ))
            .execute(conn);

    match inserted {
        Ok(_) => {
            let attendance_id: i64 = conn.get_last_insert_rowid()?;
            info!(member_id, attendance_id, "Member check-in registered");
            Ok(attendance_id)
        }
        Err(e) => Err(map_insert_error(e, member_id, service, service_date)),
    }
}
