//! Record store abstraction.
//!
//! The registry never touches a backend directly; it goes through
//! [`RecordStore`], so the file backend can be swapped for an in-memory
//! one in tests without changing any handler logic.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::PatientRecord;

/// The full stored mapping, keyed by patient id. BTreeMap keeps iteration
/// deterministic (ascending id), which is also the sort tie-break order.
pub type PatientMap = BTreeMap<String, PatientRecord>;

/// Store backend errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Full-load/full-save persistence over the patient mapping.
///
/// `load` returns an empty mapping when no data has been written yet.
/// `save` replaces the entire backing state; there is no partial write.
pub trait RecordStore {
    fn load(&self) -> StoreResult<PatientMap>;
    fn save(&self, patients: &PatientMap) -> StoreResult<()>;
}
