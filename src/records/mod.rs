//! Hospital records: validation, storage and creation.

pub mod assembler;
pub mod clock;
pub mod store;
pub mod types;
pub mod validation;

pub use assembler::RecordAssembler;
pub use clock::{Clock, FixedClock, SystemClock};
pub use store::{RecordDraft, RecordStore};
pub use types::{NewRecord, Record, RecordSummary};
