// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Visitor registration.
//!
//! A visitor and their first check-in are created in one transaction,
//! so a visitor row never exists without a matching attendance row.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{visitor_attendance, visitors};
use crate::error::PersistenceError;

backend_fn! {
/// Registers a visitor together with their check-in.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `full_name` - The visitor's full name (already sanitised)
/// * `phone` - Optional phone number
/// * `gender` - The stored gender value
/// * `first_time` - Whether this is the visitor's first time attending
/// * `service` - The stored service name
/// * `service_date` - The service date (`YYYY-MM-DD`)
/// * `check_in_time` - The check-in timestamp (ISO 8601, UTC)
///
/// # Returns
///
/// The `(visitor_id, attendance_id)` pair assigned to the new rows.
///
/// # Errors
///
/// Returns an error if either insert fails; on failure neither row
/// is persisted.
pub fn register_visitor(
    conn: &mut _,
    full_name: &str,
    phone: Option<&str>,
    gender: &str,
    first_time: bool,
    service: &str,
    service_date: &str,
    check_in_time: &str,
) -> Result<(i64, i64), PersistenceError> {
    let (visitor_id, attendance_id): (i64, i64) = conn.transaction(|conn| {
        diesel::insert_into(visitors::table)
            .values((
                visitors::full_name.eq(full_name),
                visitors::phone.eq(phone),
                visitors::gender.eq(gender),
                visitors::first_time.eq(i32::from(first_time)),
            ))
            .execute(conn)?;

        let visitor_id: i64 = conn.get_last_insert_rowid()?;

        diesel::insert_into(visitor_attendance::table)
            .values((
                visitor_attendance::visitor_id.eq(visitor_id),
                visitor_attendance::service.eq(service),
                visitor_attendance::service_date.eq(service_date),
                visitor_attendance::check_in_time.eq(check_in_time),
            ))
            .execute(conn)?;

        let attendance_id: i64 = conn.get_last_insert_rowid()?;

        Ok::<(i64, i64), PersistenceError>((visitor_id, attendance_id))
    })?;

    info!(visitor_id, attendance_id, "Visitor registered and checked in");

    Ok((visitor_id, attendance_id))
}
}
