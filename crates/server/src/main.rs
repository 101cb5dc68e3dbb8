// Copyright (C) 2026 Fred Clausen
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
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use clap::Parser;
use powerdesk_api::{
    ApiError, CreateOrderRequest, CreateProjectRequest, CreatePurchaseOrderRequest,
    CreatePurchaseRequestRequest, CreateQuotationRequest, CreateRecordResponse,
    DeleteRecordResponse, FiscalYearRequest, FiscalYearResponse, IdentifierPreviewResponse,
    ListRecordsResponse, PidPreviewResponse, PreviewIdentifierRequest, PreviewPidRequest,
    create_order, create_project, create_purchase_order, create_purchase_request,
    create_quotation, delete_record, list_records, preview_identifier, preview_pid,
    resolve_fiscal_year,
};
use powerdesk_domain::{BusinessClock, DEFAULT_TIMEZONE};
use powerdesk_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Powerdesk Server - HTTP server for the Powerdesk ERP backend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// IANA timezone used for fiscal years and time-of-day identifiers
    #[arg(short, long, default_value = DEFAULT_TIMEZONE)]
    timezone: String,
}

/// Application state shared across handlers.
///
/// All database access goes through one mutex, so identifier allocation
/// and the insert that follows it are never interleaved within a process.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for records.
    persistence: Arc<Mutex<Persistence>>,
    /// The business clock identifiers are issued against.
    clock: BusinessClock,
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
        let status: StatusCode = match err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::IdentifierConflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for GET `/fiscal_year` endpoint.
///
/// Resolves the fiscal year of `?date=`, or of today.
async fn handle_fiscal_year(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<FiscalYearRequest>,
) -> Result<Json<FiscalYearResponse>, HttpError> {
    info!(date = ?query.date, "Handling fiscal_year request");

    let response: FiscalYearResponse = resolve_fiscal_year(&app_state.clock, &query)?;
    Ok(Json(response))
}

/// Handler for GET `/pid/next` endpoint.
///
/// Previews the next PID. Nothing is reserved.
async fn handle_preview_pid(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<PreviewPidRequest>,
) -> Result<Json<PidPreviewResponse>, HttpError> {
    info!(fy = ?query.fy, "Handling preview_pid request");

    let mut persistence = app_state.persistence.lock().await;
    let response: PidPreviewResponse = preview_pid(&mut persistence, &app_state.clock, &query)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/identifiers/next` endpoint.
async fn handle_preview_identifier(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<PreviewIdentifierRequest>,
) -> Result<Json<IdentifierPreviewResponse>, HttpError> {
    info!(
        family = %query.family,
        linked_pid = ?query.linked_pid,
        fy = ?query.fy,
        "Handling preview_identifier request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: IdentifierPreviewResponse =
        preview_identifier(&mut persistence, &app_state.clock, &query)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/projects` endpoint.
async fn handle_create_project(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateProjectRequest>,
) -> Result<Json<CreateRecordResponse>, HttpError> {
    info!(client_name = %req.client_name, "Handling create_project request");

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateRecordResponse = create_project(&mut persistence, &app_state.clock, &req)?;
    Ok(Json(response))
}

/// Handler for POST `/orders` endpoint.
async fn handle_create_order(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<Json<CreateRecordResponse>, HttpError> {
    info!(client_name = %req.client_name, "Handling create_order request");

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateRecordResponse = create_order(&mut persistence, &app_state.clock, &req)?;
    Ok(Json(response))
}

/// Handler for POST `/quotations` endpoint.
async fn handle_create_quotation(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateQuotationRequest>,
) -> Result<Json<CreateRecordResponse>, HttpError> {
    info!(
        client_name = %req.client_name,
        linked_pid = ?req.linked_pid,
        "Handling create_quotation request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateRecordResponse =
        create_quotation(&mut persistence, &app_state.clock, &req)?;
    Ok(Json(response))
}

/// Handler for POST `/purchase_orders` endpoint.
async fn handle_create_purchase_order(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreatePurchaseOrderRequest>,
) -> Result<Json<CreateRecordResponse>, HttpError> {
    info!(
        vendor_name = %req.vendor_name,
        linked_pid = ?req.linked_pid,
        "Handling create_purchase_order request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateRecordResponse =
        create_purchase_order(&mut persistence, &app_state.clock, &req)?;
    Ok(Json(response))
}

/// Handler for POST `/purchase_requests` endpoint.
async fn handle_create_purchase_request(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreatePurchaseRequestRequest>,
) -> Result<Json<CreateRecordResponse>, HttpError> {
    info!(
        requested_by = %req.requested_by,
        linked_pid = ?req.linked_pid,
        "Handling create_purchase_request request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateRecordResponse =
        create_purchase_request(&mut persistence, &app_state.clock, &req)?;
    Ok(Json(response))
}

/// Handler for GET `/records/{collection}` endpoint.
async fn handle_list_records(
    AxumState(app_state): AxumState<AppState>,
    Path(collection): Path<String>,
) -> Result<Json<ListRecordsResponse>, HttpError> {
    info!(collection = %collection, "Handling list_records request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ListRecordsResponse = list_records(&mut persistence, &collection)?;
    Ok(Json(response))
}

/// Handler for DELETE `/records/{collection}/{id}` endpoint.
async fn handle_delete_record(
    AxumState(app_state): AxumState<AppState>,
    Path((collection, id)): Path<(String, i64)>,
) -> Result<Json<DeleteRecordResponse>, HttpError> {
    info!(collection = %collection, id, "Handling delete_record request");

    let mut persistence = app_state.persistence.lock().await;
    let response: DeleteRecordResponse = delete_record(&mut persistence, &collection, id)?;
    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/fiscal_year", get(handle_fiscal_year))
        .route("/pid/next", get(handle_preview_pid))
        .route("/identifiers/next", get(handle_preview_identifier))
        .route("/projects", post(handle_create_project))
        .route("/orders", post(handle_create_order))
        .route("/quotations", post(handle_create_quotation))
        .route("/purchase_orders", post(handle_create_purchase_order))
        .route("/purchase_requests", post(handle_create_purchase_request))
        .route("/records/{collection}", get(handle_list_records))
        .route("/records/{collection}/{id}", delete(handle_delete_record))
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

    info!("Initializing Powerdesk Server");

    let clock: BusinessClock = BusinessClock::in_timezone(&args.timezone)?;
    info!(timezone = clock.timezone_name(), "Using business timezone");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        clock,
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
