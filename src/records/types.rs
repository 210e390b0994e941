//! Hospital record types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored hospital record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Record {
    /// Server-assigned identifier, 1-based and strictly increasing.
    pub id: u64,
    /// Patient name (ASCII letters only).
    pub name: String,
    /// Date of birth, `DD-MM-YYYY`.
    pub dob: String,
    /// Date of joining, `DD-MM-YYYY`. Stamped by the server at creation.
    pub doj: String,
    /// Email-shaped username, unique across the store.
    pub username: String,
}

impl Record {
    /// Project this record for the listing endpoint.
    pub fn summary(&self) -> RecordSummary {
        RecordSummary {
            id: self.id,
            name: self.name.clone(),
            dob: self.dob.clone(),
            doj: self.doj.clone(),
        }
    }
}

/// Listing projection of a [`Record`] without the username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecordSummary {
    pub id: u64,
    pub name: String,
    pub dob: String,
    pub doj: String,
}

/// Client-supplied fields for a new record.
///
/// Every field is optional at decode time so that absence surfaces as
/// [`RecordError::MissingFields`](crate::error::RecordError::MissingFields).
/// Unknown fields (including any client-sent `id` or `doj`) are ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct NewRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl NewRecord {
    /// Build a request with every field present.
    pub fn new(
        name: impl Into<String>,
        dob: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            dob: Some(dob.into()),
            username: Some(username.into()),
        }
    }
}
