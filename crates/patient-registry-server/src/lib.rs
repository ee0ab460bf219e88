//! Patient Registry HTTP service.
//!
//! Thin axum layer over [`patient_registry_core::PatientRegistry`]:
//! handlers translate HTTP to registry calls and registry errors back to
//! statuses. The router is generic over the record store so tests can
//! drive the exact production routes against an in-memory backend.

pub mod config;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::Router;

use patient_registry_core::{PatientRegistry, RecordStore};

pub use config::Config;
pub use error::ApiError;

/// Build the full route table over the given registry.
pub fn router<S>(registry: PatientRegistry<S>) -> Router
where
    S: RecordStore + Send + Sync + 'static,
{
    let registry = Arc::new(registry);
    Router::new()
        .route("/", get(handlers::root))
        .route("/view", get(handlers::view::<S>))
        .route("/patient/{id}", get(handlers::get_patient::<S>))
        .route("/create", post(handlers::create_patient::<S>))
        .route("/edit/{id}", put(handlers::update_patient::<S>))
        .route("/delete/{id}", delete(handlers::delete_patient::<S>))
        .route("/sort", get(handlers::sort_patients::<S>))
        .with_state(registry)
}
