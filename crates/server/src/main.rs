// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Query, State as AxumState},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use checkin_api::{
    ApiError, DEFAULT_PIN, HealthResponse, ListHistoryResponse, MemberInfo, PinGate,
    PurgeHistoryResponse, RegisterAttendanceRequest, RegisterAttendanceResponse,
    RegisterVisitorRequest, RegisterVisitorResponse, health, list_history, purge_history,
    register_attendance, register_visitor, render_history_report, search_member,
};
use checkin_persistence::Persistence;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Filename offered for the downloaded history report.
const REPORT_FILENAME: &str = "RFP_Attendance_History.pdf";

/// RFP Check-In Server - HTTP server for the attendance ledger
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// `MySQL`/`MariaDB` connection URL. Takes precedence over --database.
    #[arg(long)]
    mysql_url: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// PIN protecting the history routes
    #[arg(long, default_value = DEFAULT_PIN)]
    pin: String,
}

/// Application state shared across handlers.
///
/// The persistence layer sits behind a Mutex for safe concurrent access;
/// the PIN gate is immutable after startup.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for members, visitors, and the ledger.
    persistence: Arc<Mutex<Persistence>>,
    /// The PIN gate for the history routes.
    gate: PinGate,
}

/// Query parameters for member search.
#[derive(Debug, Deserialize)]
struct SearchQuery {
    /// The raw search term.
    q: String,
}

/// Query parameters for the PIN-gated history routes.
#[derive(Debug, Deserialize)]
struct PinQuery {
    /// The supplied PIN, if any.
    pin: Option<String>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::AccessDenied => StatusCode::UNAUTHORIZED,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::DuplicateCheckIn { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal API error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for GET `/api/health` endpoint.
///
/// Probes the store; a failed probe reports 503 rather than 500 so load
/// balancers treat the instance as unavailable.
async fn handle_health(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<HealthResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: HealthResponse = health(&mut persistence).map_err(|e| HttpError {
        status: StatusCode::SERVICE_UNAVAILABLE,
        message: e.to_string(),
    })?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/api/members/search` endpoint.
///
/// Resolves a search term to at most one member.
async fn handle_search_member(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<MemberInfo>, HttpError> {
    info!(q = %query.q, "Handling member search request");

    let mut persistence = app_state.persistence.lock().await;
    let member: MemberInfo = search_member(&mut persistence, &query.q)?;
    drop(persistence);

    Ok(Json(member))
}

/// Handler for POST `/api/attendance/register` endpoint.
///
/// Checks a member in to a service for today.
async fn handle_register_attendance(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<RegisterAttendanceRequest>,
) -> Result<(StatusCode, Json<RegisterAttendanceResponse>), HttpError> {
    info!(
        member_id = request.member_id,
        service = %request.service,
        "Handling member check-in request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: RegisterAttendanceResponse = register_attendance(&mut persistence, &request)?;
    drop(persistence);

    info!(
        attendance_id = response.attendance_id,
        member_id = response.member_id,
        "Member checked in"
    );

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for POST `/api/visitors/register` endpoint.
///
/// Registers a visitor and checks them in atomically.
async fn handle_register_visitor(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<RegisterVisitorRequest>,
) -> Result<(StatusCode, Json<RegisterVisitorResponse>), HttpError> {
    info!(service = %request.service, "Handling visitor registration request");

    let mut persistence = app_state.persistence.lock().await;
    let response: RegisterVisitorResponse = register_visitor(&mut persistence, &request)?;
    drop(persistence);

    info!(
        visitor_id = response.visitor_id,
        attendance_id = response.attendance_id,
        "Visitor registered"
    );

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET `/api/history` endpoint.
///
/// Returns the merged attendance ledger, newest first. PIN-gated.
async fn handle_list_history(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<PinQuery>,
) -> Result<Json<ListHistoryResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListHistoryResponse =
        list_history(&mut persistence, &app_state.gate, query.pin.as_deref())?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for DELETE `/api/history` endpoint.
///
/// Clears both attendance tables; member and visitor records survive.
/// PIN-gated.
async fn handle_purge_history(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<PinQuery>,
) -> Result<Json<PurgeHistoryResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: PurgeHistoryResponse =
        purge_history(&mut persistence, &app_state.gate, query.pin.as_deref())?;
    drop(persistence);

    info!(
        member_entries = response.member_entries,
        visitor_entries = response.visitor_entries,
        "Attendance history purged"
    );

    Ok(Json(response))
}

/// Handler for GET `/api/history/pdf` endpoint.
///
/// Streams the attendance history report as a PDF attachment. PIN-gated.
async fn handle_history_pdf(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<PinQuery>,
) -> Result<Response, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let bytes: Vec<u8> =
        render_history_report(&mut persistence, &app_state.gate, query.pin.as_deref())?;
    drop(persistence);

    info!(bytes = bytes.len(), "History report rendered");

    let headers = [
        (header::CONTENT_TYPE, String::from("application/pdf")),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{REPORT_FILENAME}\""),
        ),
    ];

    Ok((headers, bytes).into_response())
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handle_health))
        .route("/api/members/search", get(handle_search_member))
        .route("/api/attendance/register", post(handle_register_attendance))
        .route("/api/visitors/register", post(handle_register_visitor))
        .route(
            "/api/history",
            get(handle_list_history).delete(handle_purge_history),
        )
        .route("/api/history/pdf", get(handle_history_pdf))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing RFP Check-In Server");

    // Initialize persistence (MySQL, file-based, or in-memory based on CLI arguments)
    let persistence: Persistence = if let Some(mysql_url) = &args.mysql_url {
        info!("Using MySQL database");
        Persistence::new_with_mysql(mysql_url)?
    } else if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        gate: PinGate::new(args.pin),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
