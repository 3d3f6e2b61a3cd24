//! Axum route handlers for the SDA admin API.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use sda_core::{
    message_envelope, validate_argument, CommandOutcome, ListResponse, MessageResponse,
    PublicKeyResponse,
};
use sda_executor::{AdminService, PublicKeyReader};
use serde::Deserialize;
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{config::ResponseMode, error::GatewayError};

// ── Shared state ─────────────────────────────────────────────────────────────

/// Per-process state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub admin: AdminService,
    pub keys: Arc<PublicKeyReader>,
    pub response_mode: ResponseMode,
}

// ── Request types ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct IngestBody {
    pub file_name: String,
}

#[derive(Debug, Deserialize)]
pub struct AccessionBody {
    pub unique_id: String,
    pub file_name: String,
}

#[derive(Debug, Deserialize)]
pub struct DatasetBody {
    pub dataset_id: String,
    pub file_name: String,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/sda/ingest/list", post(list_inbox))
        .route("/sda/ingest", post(ingest_file))
        .route("/sda/accession/list", post(list_accessions))
        .route("/sda/accession", post(accession_file))
        .route("/sda/dataset/list", post(list_datasets))
        .route("/sda/dataset", post(map_dataset))
        .route("/sda/get/public-key", get(public_key))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /` — liveness probe.
pub async fn root() -> impl IntoResponse {
    Json(json!({"message": "sda-gateway is running"}))
}

/// `POST /sda/ingest/list` — files waiting in the inbox.
pub async fn list_inbox(State(state): State<AppState>) -> Json<ListResponse> {
    Json(state.admin.list_inbox().await)
}

/// `POST /sda/ingest` — ingest one file.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] if `file_name` is blank or
/// option-like.
pub async fn ingest_file(
    State(state): State<AppState>,
    Json(body): Json<IngestBody>,
) -> Result<Json<MessageResponse>, GatewayError> {
    let file_name = validate_argument("file_name", &body.file_name)?;
    Ok(Json(state.admin.ingest_file(file_name).await))
}

/// `POST /sda/accession/list` — files awaiting an accession ID.
pub async fn list_accessions(State(state): State<AppState>) -> Json<ListResponse> {
    Json(state.admin.list_pending_accessions().await)
}

/// `POST /sda/accession` — assign an accession ID to a file.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] if either field is blank or
/// option-like.
pub async fn accession_file(
    State(state): State<AppState>,
    Json(body): Json<AccessionBody>,
) -> Result<Response, GatewayError> {
    let unique_id = validate_argument("unique_id", &body.unique_id)?;
    let file_name = validate_argument("file_name", &body.file_name)?;
    let outcome = state.admin.accession_file(unique_id, file_name).await;
    Ok(render_outcome(state.response_mode, outcome))
}

/// `POST /sda/dataset/list` — files awaiting a dataset mapping.
pub async fn list_datasets(State(state): State<AppState>) -> Json<ListResponse> {
    Json(state.admin.list_pending_datasets().await)
}

/// `POST /sda/dataset` — map a file into a dataset.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] if either field is blank or
/// option-like.
pub async fn map_dataset(
    State(state): State<AppState>,
    Json(body): Json<DatasetBody>,
) -> Result<Response, GatewayError> {
    let dataset_id = validate_argument("dataset_id", &body.dataset_id)?;
    let file_name = validate_argument("file_name", &body.file_name)?;
    let outcome = state.admin.map_file_to_dataset(dataset_id, file_name).await;
    Ok(render_outcome(state.response_mode, outcome))
}

/// `GET /sda/get/public-key` — the archive's Crypt4GH public key.
pub async fn public_key(State(state): State<AppState>) -> Json<PublicKeyResponse> {
    Json(state.keys.read().await)
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn render_outcome(mode: ResponseMode, outcome: CommandOutcome) -> Response {
    match mode {
        ResponseMode::Normalized => Json(message_envelope(outcome)).into_response(),
        ResponseMode::Raw => Json(legacy_json(outcome)).into_response(),
    }
}

/// The pre-envelope wire shape: a bare string on success, an error object
/// otherwise.
fn legacy_json(outcome: CommandOutcome) -> serde_json::Value {
    match outcome {
        CommandOutcome::Payload(text) => serde_json::Value::String(text),
        CommandOutcome::Failure { message, code } => {
            json!({"success": false, "output": message, "code": code})
        }
    }
}
