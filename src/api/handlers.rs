//! HTTP API handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use tracing::debug;

use crate::error::{ErrorResponse, RecordError};
use crate::metrics::{self, LatencyTimer};
use crate::records::{NewRecord, Record, RecordAssembler, RecordStore, RecordSummary};

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Record creation pipeline (owns the store handle).
    pub assembler: RecordAssembler,
    /// Prometheus scrape handle, if a recorder was installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create app state over a fresh, empty store.
    pub fn new() -> Self {
        Self::with_assembler(RecordAssembler::new(RecordStore::new()))
    }

    /// Create app state around an existing assembler.
    pub fn with_assembler(assembler: RecordAssembler) -> Self {
        Self {
            assembler,
            metrics: None,
        }
    }

    /// Attach the Prometheus handle served at `/metrics`.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// The shared record store.
    pub fn store(&self) -> &RecordStore {
        self.assembler.store()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Create a hospital record.
#[utoipa::path(
    post,
    path = "/v1/hospital",
    request_body = NewRecord,
    responses(
        (status = 200, description = "Record created", body = Record),
        (status = 400, description = "Missing, invalid or duplicate fields", body = ErrorResponse),
    ),
    tag = "records",
)]
pub async fn create_record(
    State(state): State<AppState>,
    body: Result<Json<NewRecord>, JsonRejection>,
) -> Result<Json<Record>, RecordError> {
    let _timer = LatencyTimer::new("create_record");

    let Json(request) = body.map_err(|rejection| {
        debug!("Rejected request body: {}", rejection);
        RecordError::MalformedBody(rejection.body_text())
    })?;

    let record = state.assembler.create(request).await?;
    Ok(Json(record))
}

/// List record summaries (id, name, dob, doj) in creation order.
#[utoipa::path(
    get,
    path = "/v1/hospitals",
    responses(
        (status = 200, description = "All records without usernames", body = [RecordSummary]),
    ),
    tag = "records",
)]
pub async fn list_summaries(State(state): State<AppState>) -> Json<Vec<RecordSummary>> {
    let _timer = LatencyTimer::new("list_summaries");

    let records = state.store().list_all().await;
    Json(records.iter().map(Record::summary).collect())
}

/// List full records in creation order.
#[utoipa::path(
    get,
    path = "/v1/hospital",
    responses(
        (status = 200, description = "All records", body = [Record]),
    ),
    tag = "records",
)]
pub async fn list_records(State(state): State<AppState>) -> Json<Vec<Record>> {
    let _timer = LatencyTimer::new("list_records");

    Json(state.store().list_all().await)
}

/// Fetch a record by username.
#[utoipa::path(
    get,
    path = "/v1/hospital/{username}",
    params(
        ("username" = String, Path, description = "Email-shaped username"),
    ),
    responses(
        (status = 200, description = "Matching record", body = Record),
        (status = 404, description = "User not found", body = ErrorResponse),
    ),
    tag = "records",
)]
pub async fn get_record(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Record>, RecordError> {
    let _timer = LatencyTimer::new("get_record");

    let found = state.store().find_by_username(&username).await;
    metrics::inc_record_lookups(found.is_some());

    found.map(Json).ok_or(RecordError::UserNotFound)
}

/// Fallback for unmatched paths and methods.
pub async fn not_found() -> RecordError {
    RecordError::RouteNotFound
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Prometheus scrape endpoint.
pub async fn metrics_text(State(state): State<AppState>) -> impl IntoResponse {
    let body = state
        .metrics
        .as_ref()
        .map(PrometheusHandle::render)
        .unwrap_or_default();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn app_state_clones_share_store() {
        let state = AppState::new();
        let clone = state.clone();

        clone
            .assembler
            .create(NewRecord::new("Ann", "01-01-1990", "ann@example.com"))
            .await
            .unwrap();

        assert_eq!(state.store().len().await, 1);
        assert!(state.metrics.is_none());
    }

    #[test]
    fn app_state_debug_shows_metrics_slot() {
        let state = AppState::new();
        let rendered = format!("{state:?}");

        assert!(rendered.starts_with("AppState"));
        assert!(rendered.contains("metrics: None"));
    }

    #[tokio::test]
    async fn get_record_maps_missing_user() {
        let state = AppState::new();

        let err = get_record(State(state), Path("nobody@example.com".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err, RecordError::UserNotFound);
    }
}
