//! HTTP handlers, one per route.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use patient_registry_core::{
    NewPatient, PatientRegistry, PatientUpdate, PatientView, RecordStore, RegistryError,
    SortField, SortOrder,
};

use crate::error::ApiError;

type Registry<S> = State<Arc<PatientRegistry<S>>>;

pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Patient Management System API" }))
}

pub async fn view<S: RecordStore>(
    State(registry): Registry<S>,
) -> Result<Json<BTreeMap<String, PatientView>>, ApiError> {
    Ok(Json(registry.list()?))
}

pub async fn get_patient<S: RecordStore>(
    State(registry): Registry<S>,
    Path(id): Path<String>,
) -> Result<Json<PatientView>, ApiError> {
    let view = registry.get(&id).inspect_err(|_| {
        tracing::debug!(%id, "patient lookup missed");
    })?;
    Ok(Json(view))
}

pub async fn create_patient<S: RecordStore>(
    State(registry): Registry<S>,
    Json(patient): Json<NewPatient>,
) -> Result<impl IntoResponse, ApiError> {
    let id = patient.id.clone();
    match registry.create(patient) {
        Ok(()) => {
            tracing::info!(%id, "patient created");
            Ok((
                StatusCode::CREATED,
                Json(json!({ "message": "Patient created successfully" })),
            ))
        }
        // Field validation on the request payload is 422; everything
        // else keeps the common mapping (duplicate id is 400).
        Err(RegistryError::Invalid(errors)) => {
            tracing::debug!(%id, %errors, "create payload rejected");
            Err(ApiError::validation(
                StatusCode::UNPROCESSABLE_ENTITY,
                &errors,
            ))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn update_patient<S: RecordStore>(
    State(registry): Registry<S>,
    Path(id): Path<String>,
    Json(update): Json<PatientUpdate>,
) -> Result<Json<serde_json::Value>, ApiError> {
    registry.update(&id, &update).inspect_err(|e| {
        tracing::debug!(%id, error = %e, "patient update rejected");
    })?;
    tracing::info!(%id, "patient updated");
    Ok(Json(json!({ "message": "Patient updated successfully" })))
}

pub async fn delete_patient<S: RecordStore>(
    State(registry): Registry<S>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    registry.remove(&id)?;
    tracing::info!(%id, "patient deleted");
    Ok(Json(json!({ "message": "Patient deleted successfully" })))
}

#[derive(Debug, Deserialize)]
pub struct SortParams {
    pub sort_by: String,
    pub order: Option<String>,
}

pub async fn sort_patients<S: RecordStore>(
    State(registry): Registry<S>,
    Query(params): Query<SortParams>,
) -> Result<Json<Vec<PatientView>>, ApiError> {
    let field: SortField = params
        .sort_by
        .parse()
        .map_err(|_| ApiError::new(StatusCode::BAD_REQUEST, "Invalid sort field"))?;
    let order = match params.order.as_deref() {
        None => SortOrder::default(),
        Some(raw) => raw
            .parse()
            .map_err(|_| ApiError::new(StatusCode::BAD_REQUEST, "Invalid sort order"))?,
    };
    Ok(Json(registry.sorted(field, order)?))
}
