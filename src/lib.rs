//! In-memory hospital record service.
//!
//! Records carry a name, date of birth and email-shaped username supplied by
//! the client, plus a server-assigned id and joining date. Creation runs a
//! fail-fast validation pipeline; the first failing check is reported and
//! nothing is stored.
//!
//! ```text
//! POST /v1/hospital {name, dob, username}
//!   -> presence -> name -> dob -> username -> uniqueness
//!   -> stamp id + doj -> append -> 200 {id, name, dob, doj, username}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types and HTTP error mapping
//! - [`records`]: Validators, record store and assembler
//! - [`api`]: HTTP routes and handlers
//! - [`metrics`]: Prometheus counters and latency
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod records;
pub mod utils;

pub use config::{Config, Profile};
pub use error::{RecordError, Result, ServiceError, ValidationError};
