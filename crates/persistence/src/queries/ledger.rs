// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Unified attendance ledger reads.
//!
//! Member and visitor check-ins live in separate tables; the ledger
//! is their union. Each side is read with a join to its entity table
//! and projected into [`LedgerRow`]; the adapter merges and sorts the
//! two halves.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

use checkin_domain::{EntryKind, LedgerRow};

use crate::diesel_schema::{member_attendance, members, visitor_attendance, visitors};
use crate::error::PersistenceError;

/// Placeholder shown when a visitor left no phone number.
const NO_PHONE: &str = "-";

backend_fn! {
/// Reads all member check-ins joined to their member rows.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_member_entries(conn: &mut _) -> Result<Vec<LedgerRow>, PersistenceError> {
    let rows: Vec<(String, String, Option<String>, String, String, String, Option<String>)> =
        member_attendance::table
            .inner_join(members::table)
            .select((
                members::first_name,
                members::last_name,
                members::phone,
                members::gender,
                member_attendance::service,
                member_attendance::service_date,
                member_attendance::check_in_time,
            ))
            .load(conn)?;

    Ok(rows
        .into_iter()
        .map(
            |(first_name, last_name, phone, gender, service, service_date, check_in_time)| {
                LedgerRow {
                    name: format!("{first_name} {last_name}"),
                    kind: EntryKind::Member,
                    phone: phone.unwrap_or_else(|| NO_PHONE.to_string()),
                    gender,
                    service,
                    service_date,
                    check_in_time,
                }
            },
        )
        .collect())
}
}

backend_fn! {
/// Reads all visitor check-ins joined to their visitor rows.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_visitor_entries(conn: &mut _) -> Result<Vec<LedgerRow>, PersistenceError> {
    let rows: Vec<(String, Option<String>, String, String, String, Option<String>)> =
        visitor_attendance::table
            .inner_join(visitors::table)
            .select((
                visitors::full_name,
                visitors::phone,
                visitors::gender,
                visitor_attendance::service,
                visitor_attendance::service_date,
                visitor_attendance::check_in_time,
            ))
            .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(full_name, phone, gender, service, service_date, check_in_time)| LedgerRow {
            name: full_name,
            kind: EntryKind::Visitor,
            phone: phone.unwrap_or_else(|| NO_PHONE.to_string()),
            gender,
            service,
            service_date,
            check_in_time,
        })
        .collect())
}
}
