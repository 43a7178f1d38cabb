// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ledger reset.
//!
//! Purging removes check-in rows only. Member and visitor records
//! survive a purge; the next service starts from an empty ledger with
//! the same people on file.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::data_models::PurgeCounts;
use crate::diesel_schema::{member_attendance, visitor_attendance};
use crate::error::PersistenceError;

backend_fn! {
/// Deletes every check-in row from both attendance tables.
///
/// Both deletes run in one transaction; a purge never removes one
/// half of the ledger.
///
/// # Errors
///
/// Returns an error if either delete fails.
pub fn purge_ledger(conn: &mut _) -> Result<PurgeCounts, PersistenceError> {
    let counts: PurgeCounts = conn.transaction(|conn| {
        let member_entries: usize = diesel::delete(member_attendance::table).execute(conn)?;
        let visitor_entries: usize = diesel::delete(visitor_attendance::table).execute(conn)?;

        Ok::<PurgeCounts, PersistenceError>(PurgeCounts {
            member_entries,
            visitor_entries,
        })
    })?;

    info!(
        member_entries = counts.member_entries,
        visitor_entries = counts.visitor_entries,
        "Attendance ledger purged"
    );

    Ok(counts)
}
}
