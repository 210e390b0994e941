//! HTTP API route definitions.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::docs::openapi_json;
use super::handlers::{
    create_record, get_record, health, list_records, list_summaries, metrics_text, not_found,
    AppState,
};
use crate::config::Profile;

/// Create the API router for the given route profile.
pub fn create_router(state: AppState, profile: Profile) -> Router {
    let records = match profile {
        Profile::A => Router::new()
            .route("/v1/hospital", post(create_record).fallback(not_found))
            .route("/v1/hospitals", get(list_summaries).fallback(not_found)),
        Profile::B => Router::new()
            .route(
                "/v1/hospital",
                get(list_records).post(create_record).fallback(not_found),
            )
            .route("/v1/hospital/:username", get(get_record).fallback(not_found)),
    };

    records
        // Operational endpoints
        .route("/health", get(health))
        .route("/metrics", get(metrics_text))
        .route("/api-docs/openapi.json", get(openapi_json))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
