//! Patient Registry Core Library
//!
//! File-backed patient-record CRUD with derived health metrics.
//!
//! # Architecture
//!
//! ```text
//! HTTP handler ──▶ PatientRegistry ──▶ RecordStore (load)
//!                        │                  │
//!                 validate / merge    JsonFileStore │ MemoryStore
//!                 compute bmi+verdict       │
//!                        └───────────▶ RecordStore (save)
//! ```
//!
//! The store is full-load/full-save: every operation re-reads the whole
//! mapping and mutators rewrite it. Derived fields (bmi, verdict) are
//! pure functions over the stored fields, computed on read and never
//! persisted.
//!
//! # Modules
//!
//! - [`models`]: domain types (PatientRecord, NewPatient, PatientUpdate,
//!   PatientView) and structured validation
//! - [`store`]: the RecordStore trait with file and in-memory backends
//! - [`registry`]: the CRUD-plus-sort service over an injected store

pub mod models;
pub mod registry;
pub mod store;

// Re-export commonly used types
pub use models::{
    FieldError, Gender, NewPatient, PatientRecord, PatientUpdate, PatientView,
    ValidationErrors, Verdict,
};
pub use registry::{
    InvalidSortField, InvalidSortOrder, PatientRegistry, RegistryError, RegistryResult,
    SortField, SortOrder,
};
pub use store::{JsonFileStore, MemoryStore, PatientMap, RecordStore, StoreError};
