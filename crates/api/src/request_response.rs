// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

/// API response for the health probe.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    /// Liveness indicator, always `"ok"` on success.
    pub status: String,
}

/// Member information returned by the search resolver.
///
/// This DTO is distinct from the persistence row and represents the API
/// contract.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MemberInfo {
    /// The canonical numeric identifier.
    pub member_id: i64,
    /// The displayable member code (`MBR-0042`).
    pub member_code: String,
    /// The member's first name.
    pub first_name: String,
    /// The member's last name.
    pub last_name: String,
    /// The member's full name (first and last joined).
    pub full_name: String,
    /// The member's phone number, if recorded.
    pub phone: Option<String>,
    /// The member's email address, if recorded.
    pub email: Option<String>,
    /// The member's gender.
    pub gender: String,
}

/// API request to check a member in to a service.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterAttendanceRequest {
    /// The canonical numeric member identifier.
    pub member_id: i64,
    /// The service name (one of the fixed service names).
    pub service: String,
}

/// API response for a successful member check-in.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterAttendanceResponse {
    /// The attendance row identifier.
    pub attendance_id: i64,
    /// The member who checked in.
    pub member_id: i64,
    /// The displayable member code.
    pub member_code: String,
    /// The member's full name.
    pub full_name: String,
    /// The service attended.
    pub service: String,
    /// The service date (`YYYY-MM-DD`, server-derived).
    pub service_date: String,
    /// The check-in timestamp (ISO 8601 UTC, server-derived).
    pub check_in_time: String,
    /// A success message.
    pub message: String,
}

/// API request to register a visitor and check them in.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterVisitorRequest {
    /// The visitor's full name.
    pub full_name: String,
    /// The visitor's phone number, if given.
    pub phone: Option<String>,
    /// The visitor's gender (`Male` or `Female`).
    pub gender: String,
    /// Whether this is the visitor's first time attending.
    pub first_time: bool,
    /// The service name (one of the fixed service names).
    pub service: String,
}

/// API response for a successful visitor registration.
///
/// Echoes both rows created by the atomic registration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterVisitorResponse {
    /// The visitor row identifier.
    pub visitor_id: i64,
    /// The attendance row identifier.
    pub attendance_id: i64,
    /// The visitor's full name (sanitised).
    pub full_name: String,
    /// The visitor's phone number, if given.
    pub phone: Option<String>,
    /// The visitor's gender.
    pub gender: String,
    /// Whether this is the visitor's first time attending.
    pub first_time: bool,
    /// The service attended.
    pub service: String,
    /// The service date (`YYYY-MM-DD`, server-derived).
    pub service_date: String,
    /// The check-in timestamp (ISO 8601 UTC, server-derived).
    pub check_in_time: String,
    /// A success message.
    pub message: String,
}

/// A single row of the merged attendance ledger.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LedgerEntryInfo {
    /// The attendee's display name.
    pub name: String,
    /// The entry kind, `Member` or `Visitor`.
    pub kind: String,
    /// The attendee's phone number, `-` when absent.
    pub phone: String,
    /// The attendee's gender.
    pub gender: String,
    /// The service attended.
    pub service: String,
    /// The service date (`YYYY-MM-DD`).
    pub service_date: String,
    /// The check-in timestamp, if recorded.
    pub check_in_time: Option<String>,
}

/// API response for the attendance history listing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListHistoryResponse {
    /// The merged ledger, newest first.
    pub records: Vec<LedgerEntryInfo>,
}

/// API response for a history purge.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PurgeHistoryResponse {
    /// Member attendance rows deleted.
    pub member_entries: usize,
    /// Visitor attendance rows deleted.
    pub visitor_entries: usize,
    /// A success message.
    pub message: String,
}
