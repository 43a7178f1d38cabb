// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Transport-independent API boundary for the check-in system.
//!
//! Translates raw requests into validated domain operations, gates the
//! history routes behind a shared PIN, and maps domain and persistence
//! errors onto the API error taxonomy.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{DEFAULT_PIN, PinGate};
pub use error::{ApiError, AuthError, translate_domain_error, translate_persistence_error};
pub use handlers::{
    health, list_history, purge_history, register_attendance, register_visitor,
    render_history_report, search_member,
};
pub use request_response::{
    HealthResponse, LedgerEntryInfo, ListHistoryResponse, MemberInfo, PurgeHistoryResponse,
    RegisterAttendanceRequest, RegisterAttendanceResponse, RegisterVisitorRequest,
    RegisterVisitorResponse,
};
