// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for check-in, search, and history operations.
//!
//! Handlers are transport-independent: they take the persistence adapter
//! and plain request types, and return API DTOs or [`ApiError`]. The
//! service date and check-in timestamp are always derived here from the
//! server clock (UTC), never accepted from the caller.

use checkin_domain::{
    Gender, LedgerRow, SearchTerm, Service, validate_full_name, validate_member_id, validate_phone,
    validate_visitor_gender,
};
use checkin_persistence::{MemberData, Persistence, PurgeCounts};
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use tracing::debug;

use crate::auth::PinGate;
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    HealthResponse, LedgerEntryInfo, ListHistoryResponse, MemberInfo, PurgeHistoryResponse,
    RegisterAttendanceRequest, RegisterAttendanceResponse, RegisterVisitorRequest,
    RegisterVisitorResponse,
};

const SERVICE_DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Derives the service date and check-in timestamp from the server clock.
///
/// Returns `(service_date, check_in_time)` as `YYYY-MM-DD` and ISO 8601
/// UTC strings.
fn current_check_in_moment() -> Result<(String, String), ApiError> {
    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let service_date: String = now
        .format(SERVICE_DATE_FORMAT)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to format service date: {e}"),
        })?;
    let check_in_time: String = now.format(&Rfc3339).map_err(|e| ApiError::Internal {
        message: format!("Failed to format check-in time: {e}"),
    })?;
    Ok((service_date, check_in_time))
}

fn member_to_info(member: MemberData) -> MemberInfo {
    let full_name: String = member.full_name();
    MemberInfo {
        member_id: member.member_id,
        member_code: member.member_code,
        first_name: member.first_name,
        last_name: member.last_name,
        full_name,
        phone: member.phone,
        email: member.email,
        gender: member.gender,
    }
}

fn ledger_row_to_info(row: LedgerRow) -> LedgerEntryInfo {
    LedgerEntryInfo {
        name: row.name,
        kind: String::from(row.kind.as_str()),
        phone: row.phone,
        gender: row.gender,
        service: row.service,
        service_date: row.service_date,
        check_in_time: row.check_in_time,
    }
}

/// Probes the store for liveness.
///
/// # Errors
///
/// Returns [`ApiError::Internal`] if the store does not answer.
pub fn health(persistence: &mut Persistence) -> Result<HealthResponse, ApiError> {
    persistence.ping().map_err(translate_persistence_error)?;
    Ok(HealthResponse {
        status: String::from("ok"),
    })
}

/// Resolves a raw search query to at most one member.
///
/// The query is classified first: a `MBR-` prefix forces an exact member
/// code lookup, anything else is a fuzzy match over phone and name
/// columns.
///
/// # Errors
///
/// Returns [`ApiError::InvalidInput`] for an empty or over-long query,
/// [`ApiError::ResourceNotFound`] when nothing matches.
pub fn search_member(persistence: &mut Persistence, query: &str) -> Result<MemberInfo, ApiError> {
    let term: SearchTerm = SearchTerm::classify(query).map_err(translate_domain_error)?;

    let member: MemberData = persistence
        .find_member(&term)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Member"),
            message: format!("No member matches '{}'", query.trim()),
        })?;

    Ok(member_to_info(member))
}

/// Checks a member in to a service.
///
/// The service date and check-in time are derived from the server clock;
/// a member can check in at most once per service per date.
///
/// # Errors
///
/// Returns [`ApiError::InvalidInput`] for a bad member ID or service
/// name, [`ApiError::ResourceNotFound`] for an unknown member, and
/// [`ApiError::DuplicateCheckIn`] when the member is already checked in
/// for this service today.
pub fn register_attendance(
    persistence: &mut Persistence,
    request: &RegisterAttendanceRequest,
) -> Result<RegisterAttendanceResponse, ApiError> {
    let member_id: i64 = validate_member_id(request.member_id).map_err(translate_domain_error)?;
    let service: Service = request
        .service
        .parse::<Service>()
        .map_err(translate_domain_error)?;

    let member: MemberData = persistence
        .get_member(member_id)
        .map_err(translate_persistence_error)?;

    let (service_date, check_in_time): (String, String) = current_check_in_moment()?;

    let attendance_id: i64 = persistence
        .register_attendance(member_id, service, &service_date, &check_in_time)
        .map_err(translate_persistence_error)?;

    debug!(member_id, attendance_id, "Member check-in recorded");

    Ok(RegisterAttendanceResponse {
        attendance_id,
        member_id,
        full_name: member.full_name(),
        member_code: member.member_code,
        service: String::from(service.as_str()),
        service_date,
        check_in_time,
        message: String::from("Checked in successfully"),
    })
}

/// Registers a visitor and checks them in atomically.
///
/// Validation runs before any store access; the visitor row and the
/// attendance row are written in one transaction.
///
/// # Errors
///
/// Returns [`ApiError::InvalidInput`] when the name, phone, gender, or
/// service fails validation.
pub fn register_visitor(
    persistence: &mut Persistence,
    request: &RegisterVisitorRequest,
) -> Result<RegisterVisitorResponse, ApiError> {
    let full_name: String =
        validate_full_name(&request.full_name).map_err(translate_domain_error)?;
    let phone: Option<String> =
        validate_phone(request.phone.as_deref()).map_err(translate_domain_error)?;
    let gender: Gender =
        validate_visitor_gender(&request.gender).map_err(translate_domain_error)?;
    let service: Service = request
        .service
        .parse::<Service>()
        .map_err(translate_domain_error)?;

    let (service_date, check_in_time): (String, String) = current_check_in_moment()?;

    let (visitor_id, attendance_id): (i64, i64) = persistence
        .register_visitor(
            &full_name,
            phone.as_deref(),
            gender,
            request.first_time,
            service,
            &service_date,
            &check_in_time,
        )
        .map_err(translate_persistence_error)?;

    debug!(visitor_id, attendance_id, "Visitor registered");

    Ok(RegisterVisitorResponse {
        visitor_id,
        attendance_id,
        full_name,
        phone,
        gender: String::from(gender.as_str()),
        first_time: request.first_time,
        service: String::from(service.as_str()),
        service_date,
        check_in_time,
        message: String::from("Visitor registered successfully"),
    })
}

/// Reads the merged attendance ledger, newest first.
///
/// # Errors
///
/// Returns [`ApiError::AccessDenied`] for a missing or wrong PIN.
pub fn list_history(
    persistence: &mut Persistence,
    gate: &PinGate,
    pin: Option<&str>,
) -> Result<ListHistoryResponse, ApiError> {
    gate.verify(pin)?;

    let rows: Vec<LedgerRow> = persistence
        .list_ledger()
        .map_err(translate_persistence_error)?;

    Ok(ListHistoryResponse {
        records: rows.into_iter().map(ledger_row_to_info).collect(),
    })
}

/// Deletes every check-in from both attendance tables.
///
/// Member and visitor records survive; only the ledger is cleared.
///
/// # Errors
///
/// Returns [`ApiError::AccessDenied`] for a missing or wrong PIN.
pub fn purge_history(
    persistence: &mut Persistence,
    gate: &PinGate,
    pin: Option<&str>,
) -> Result<PurgeHistoryResponse, ApiError> {
    gate.verify(pin)?;

    let counts: PurgeCounts = persistence
        .purge_ledger()
        .map_err(translate_persistence_error)?;

    debug!(
        member_entries = counts.member_entries,
        visitor_entries = counts.visitor_entries,
        "Attendance history purged"
    );

    Ok(PurgeHistoryResponse {
        member_entries: counts.member_entries,
        visitor_entries: counts.visitor_entries,
        message: String::from("Attendance history cleared"),
    })
}

/// Renders the attendance history as a PDF report.
///
/// # Errors
///
/// Returns [`ApiError::AccessDenied`] for a missing or wrong PIN, and
/// [`ApiError::Internal`] if rendering fails.
pub fn render_history_report(
    persistence: &mut Persistence,
    gate: &PinGate,
    pin: Option<&str>,
) -> Result<Vec<u8>, ApiError> {
    gate.verify(pin)?;

    let rows: Vec<LedgerRow> = persistence
        .list_ledger()
        .map_err(translate_persistence_error)?;

    checkin_report::render_history_pdf(&rows, OffsetDateTime::now_utc()).map_err(|e| {
        ApiError::Internal {
            message: format!("Failed to render history report: {e}"),
        }
    })
}
