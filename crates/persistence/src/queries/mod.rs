// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic query modules.
//!
//! All queries use Diesel DSL and work across both supported backends.
//!
//! ## Module Organization
//!
//! - `members` — Member lookup and search resolution
//! - `ledger` — Unified attendance ledger reads

pub mod ledger;
pub mod members;

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::Integer;
use diesel::{MysqlConnection, SqliteConnection};

use crate::error::PersistenceError;

backend_fn! {
/// Verifies the database connection can serve a trivial query.
///
/// # Errors
///
/// Returns an error if the query fails or returns an unexpected value.
pub fn ping(conn: &mut _) -> Result<(), PersistenceError> {
    let one: i32 = diesel::select(sql::<Integer>("1")).get_result(conn)?;
    if one == 1 {
        Ok(())
    } else {
        Err(PersistenceError::QueryFailed(format!(
            "Connectivity check returned {one}"
        )))
    }
}
}
