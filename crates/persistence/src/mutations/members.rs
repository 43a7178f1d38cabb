// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Member seeding mutations.
//!
//! Membership rolls are maintained out of band; this module only covers
//! creating members for seeding and testing. The public `MBR-NNNN` code
//! is derived from the assigned row ID inside the same transaction, so
//! codes are unique and stable.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::MemberData;
use crate::diesel_schema::members;
use crate::error::PersistenceError;
use crate::queries::members::{get_member_mysql, get_member_sqlite};

/// Creates a new member and assigns their public member code (`SQLite` version).
///
/// The row is inserted with an empty code, then updated to `MBR-` followed
/// by the zero-padded row ID, all in one transaction.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `first_name` - The member's first name (already sanitised)
/// * `last_name` - The member's last name (already sanitised)
/// * `phone` - Optional phone number
/// * `email` - Optional email address
/// * `gender` - The stored gender value
///
/// # Errors
///
/// Returns an error if the insert or code assignment fails.
pub fn create_member_sqlite(
    conn: &mut SqliteConnection,
    first_name: &str,
    last_name: &str,
    phone: Option<&str>,
    email: Option<&str>,
    gender: &str,
) -> Result<MemberData, PersistenceError> {
    info!("Creating member: {} {}", first_name, last_name);

    let member_id: i64 = conn.transaction(|conn| {
        diesel::insert_into(members::table)
            .values((
                members::member_code.eq(""),
                members::first_name.eq(first_name),
                members::last_name.eq(last_name),
                members::phone.eq(phone),
                members::email.eq(email),
                members::gender.eq(gender),
            ))
            .execute(conn)?;

        let member_id: i64 = conn.get_last_insert_rowid()?;
        let member_code: String = format!("MBR-{member_id:04}");

        diesel::update(members::table)
            .filter(members::member_id.eq(member_id))
            .set(members::member_code.eq(&member_code))
            .execute(conn)?;

        Ok::<i64, PersistenceError>(member_id)
    })?;

    info!(member_id, "Member created successfully");

    get_member_sqlite(conn, member_id)
}

/// Creates a new member and assigns their public member code (`MySQL` version).
///
/// The row is inserted with an empty code, then updated to `MBR-` followed
/// by the zero-padded row ID, all in one transaction.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `first_name` - The member's first name (already sanitised)
/// * `last_name` - The member's last name (already sanitised)
/// * `phone` - Optional phone number
/// * `email` - Optional email address
/// * `gender` - The stored gender value
///
/// # Errors
///
/// Returns an error if the insert or code assignment fails.
pub fn create_member_mysql(
    conn: &mut MysqlConnection,
    first_name: &str,
    last_name: &str,
    phone: Option<&str>,
    email: Option<&str>,
    gender: &str,
) -> Result<MemberData, PersistenceError> {
    info!("Creating member: {} {}", first_name, last_name);

    let member_id: i64 = conn.transaction(|conn| {
        diesel::insert_into(members::table)
            .values((
                members::member_code.eq(""),
                members::first_name.eq(first_name),
                members::last_name.eq(last_name),
                members::phone.eq(phone),
                members::email.eq(email),
                members::gender.eq(gender),
            ))
            .execute(conn)?;

        let member_id: i64 = conn.get_last_insert_rowid()?;
        let member_code: String = format!("MBR-{member_id:04}");

        diesel::update(members::table)
            .filter(members::member_id.eq(member_id))
            .set(members::member_code.eq(&member_code))
            .execute(conn)?;

        Ok::<i64, PersistenceError>(member_id)
    })?;

    info!(member_id, "Member created successfully");

    get_member_mysql(conn, member_id)
}
