//! OpenAPI document for the record endpoints.

use axum::Json;
use utoipa::OpenApi;

use super::handlers;
use crate::error::ErrorResponse;
use crate::records::{NewRecord, Record, RecordSummary};

/// OpenAPI documentation covering both route profiles.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::create_record,
        handlers::list_summaries,
        handlers::list_records,
        handlers::get_record,
    ),
    components(schemas(NewRecord, Record, RecordSummary, ErrorResponse)),
    tags(
        (name = "records", description = "Hospital record management"),
    ),
    info(
        title = "Hospital Records API",
        version = "0.1.0",
        description = "In-memory hospital record service. `/v1/hospitals` is served by profile A; `/v1/hospital` (GET) and `/v1/hospital/{username}` by profile B.",
        license(name = "MIT"),
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development"),
    ),
)]
pub struct ApiDoc;

/// Serve the OpenAPI document as JSON.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
