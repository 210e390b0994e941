//! Record creation pipeline.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::clock::{format_date, Clock, SystemClock};
use super::store::{RecordDraft, RecordStore};
use super::types::{NewRecord, Record};
use super::validation::{validate_date_of_birth, validate_name, validate_username};
use crate::error::RecordError;
use crate::metrics;

/// Validates incoming fields and appends accepted records to the store.
#[derive(Debug, Clone)]
pub struct RecordAssembler {
    store: RecordStore,
    clock: Arc<dyn Clock>,
}

impl RecordAssembler {
    /// Create an assembler stamping joining dates from the system clock.
    pub fn new(store: RecordStore) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Create an assembler with an explicit date source.
    pub fn with_clock(store: RecordStore, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// The store this assembler appends to.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Create a record from client-supplied fields.
    ///
    /// Checks run in order: presence, name, date of birth, username format,
    /// username uniqueness. The first failure is returned and the store is
    /// left untouched. On success exactly one record is appended.
    pub async fn create(&self, request: NewRecord) -> Result<Record, RecordError> {
        let result = self.assemble(request).await;

        match &result {
            Ok(record) => {
                info!(id = record.id, username = %record.username, "Record created");
                metrics::inc_records_created();
            }
            Err(e) => {
                warn!(reason = e.reason(), "Record rejected: {}", e);
                metrics::inc_records_rejected(e.reason());
            }
        }

        result
    }

    async fn assemble(&self, request: NewRecord) -> Result<Record, RecordError> {
        let (name, dob, username) = match (request.name, request.dob, request.username) {
            (Some(name), Some(dob), Some(username))
                if !name.is_empty() && !dob.is_empty() && !username.is_empty() =>
            {
                (name, dob, username)
            }
            _ => return Err(RecordError::MissingFields),
        };

        validate_name(&name)?;
        validate_date_of_birth(&dob)?;
        validate_username(&username)?;
        debug!(%username, "Record fields validated");

        let draft = RecordDraft {
            name,
            dob,
            doj: format_date(self.clock.today()),
            username,
        };

        self.store.insert(draft).await
    }
}
