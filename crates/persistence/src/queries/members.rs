// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Member lookup and search queries.
//!
//! This module resolves search terms to at most one member. Exact
//! member-code lookups match the stored code verbatim; fuzzy lookups
//! match the term as a substring of the phone number, either name part,
//! or the concatenated full name. Ties resolve to the lowest member ID.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use checkin_domain::SearchTerm;

use crate::data_models::MemberData;
use crate::diesel_schema::{member_attendance, members};
use crate::error::PersistenceError;

/// Diesel Queryable struct for member rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = members)]
struct MemberRow {
    member_id: i64,
    member_code: String,
    first_name: String,
    last_name: String,
    phone: Option<String>,
    email: Option<String>,
    gender: String,
    created_at: String,
}

impl From<MemberRow> for MemberData {
    fn from(row: MemberRow) -> Self {
        Self {
            member_id: row.member_id,
            member_code: row.member_code,
            first_name: row.first_name,
            last_name: row.last_name,
            phone: row.phone,
            email: row.email,
            gender: row.gender,
            created_at: row.created_at,
        }
    }
}

backend_fn! {
/// Retrieves a member by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `member_id` - The member ID to retrieve
///
/// # Errors
///
/// Returns [`PersistenceError::MemberNotFound`] if no member has the
/// given ID, or an error if the query fails.
pub fn get_member(conn: &mut _, member_id: i64) -> Result<MemberData, PersistenceError> {
    let result: Result<MemberRow, diesel::result::Error> = members::table
        .filter(members::member_id.eq(member_id))
        .select(MemberRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(MemberData::from(row)),
        Err(diesel::result::Error::NotFound) => Err(PersistenceError::MemberNotFound(member_id)),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Resolves a classified search term to at most one member.
///
/// Member-code terms match the stored code exactly. Fuzzy terms match
/// a substring of the phone number, the first name, the last name, or
/// the `first last` concatenation. When several members match, the one
/// with the lowest member ID wins.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `term` - The classified search term
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no member matches.
pub fn find_member(
    conn: &mut _,
    term: &SearchTerm,
) -> Result<Option<MemberData>, PersistenceError> {
    let result: Result<MemberRow, diesel::result::Error> = match term {
        SearchTerm::MemberId(code) => {
            debug!("Looking up member by code: {}", code);
            members::table
                .filter(members::member_code.eq(code))
                .select(MemberRow::as_select())
                .first(conn)
        }
        SearchTerm::Fuzzy(query) => {
            debug!("Fuzzy member search: {}", query);
            let pattern: String = format!("%{query}%");
            members::table
                .filter(
                    members::phone
                        .like(pattern.clone())
                        .or(members::first_name.like(pattern.clone()))
                        .or(members::last_name.like(pattern.clone()))
                        .or(members::first_name
                            .concat(" ")
                            .concat(members::last_name)
                            .like(pattern)),
                )
                .order(members::member_id.asc())
                .select(MemberRow::as_select())
                .first(conn)
        }
    };

    match result {
        Ok(row) => Ok(Some(MemberData::from(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Checks whether a member already has a check-in for a service and date.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `member_id` - The member ID
/// * `service` - The stored service name
/// * `service_date` - The service date (`YYYY-MM-DD`)
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn has_checked_in(
    conn: &mut _,
    member_id: i64,
    service: &str,
    service_date: &str,
) -> Result<bool, PersistenceError> {
    let count: i64 = member_attendance::table
        .filter(member_attendance::member_id.eq(member_id))
        .filter(member_attendance::service.eq(service))
        .filter(member_attendance::service_date.eq(service_date))
        .count()
        .get_result(conn)?;

    Ok(count > 0)
}
}
