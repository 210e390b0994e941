//! Unified error types for the hospital record service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;
use thiserror::Error;
use time::Month;
use utoipa::ToSchema;

/// Process-level error type.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Metrics recorder could not be installed.
    #[error("metrics error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single field failed its format check.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ValidationError {
    /// Name is empty or contains something other than ASCII letters.
    #[error("Name should contain only alphabets")]
    InvalidName,

    /// Date of birth is not `DD-MM-YYYY` with in-range day and month.
    #[error("Invalid date of birth format. Should be in DD-MM-YYYY format")]
    InvalidDateFormat,

    /// Day is past the end of February for that year.
    #[error("February cannot contain the specified date")]
    InvalidFebruaryDate,

    /// Day is past the end of a 30-day month.
    #[error("{month} cannot contain the specified date")]
    InvalidDayOfMonth {
        /// The month that was overrun.
        month: Month,
    },

    /// Username is not a single email address, or contains `..`.
    #[error("Invalid email format for username")]
    InvalidUsernameFormat,
}

/// Request-scoped errors raised while creating or reading records.
#[derive(Error, Debug, Clone, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum RecordError {
    /// One of name, dob or username is absent or empty.
    #[error("Missing data. Please provide name, date of birth, and username.")]
    MissingFields,

    /// A field failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Another record already holds this username.
    #[error("Username already exists")]
    DuplicateUsername,

    /// No record holds the requested username.
    #[error("User not found")]
    UserNotFound,

    /// Unmatched path or method.
    #[error("Invalid URL. Please check the endpoint and try again.")]
    RouteNotFound,

    /// Request body could not be decoded.
    #[error("Invalid request body: {0}")]
    MalformedBody(String),
}

impl RecordError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RecordError::UserNotFound | RecordError::RouteNotFound => StatusCode::NOT_FOUND,
            RecordError::MissingFields
            | RecordError::Validation(_)
            | RecordError::DuplicateUsername
            | RecordError::MalformedBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Short label for metrics, e.g. `duplicate_username` or `invalid_name`.
    pub fn reason(&self) -> &'static str {
        match self {
            RecordError::Validation(inner) => inner.into(),
            other => other.into(),
        }
    }
}

/// JSON error body returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message.
    pub error: String,
}

impl IntoResponse for RecordError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
