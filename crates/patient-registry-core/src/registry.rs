//! Patient registry service.
//!
//! Every operation re-loads the full mapping from the store and mutators
//! re-save it; there is no in-memory state between calls. Concurrent
//! writers race whole-file, last-write-wins — accepted for this system's
//! single-user scope.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::str::FromStr;

use thiserror::Error;

use crate::models::{NewPatient, PatientUpdate, PatientView, ValidationErrors};
use crate::store::{RecordStore, StoreError};

/// Registry operation errors.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("patient not found: {0}")]
    NotFound(String),

    #[error("patient already exists: {0}")]
    DuplicateId(String),

    #[error("validation failed: {0}")]
    Invalid(#[from] ValidationErrors),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Sortable record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Height,
    Weight,
    Bmi,
}

/// Error for an unrecognized `sort_by` value.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid sort field: {0}")]
pub struct InvalidSortField(pub String);

impl FromStr for SortField {
    type Err = InvalidSortField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "height" => Ok(SortField::Height),
            "weight" => Ok(SortField::Weight),
            "bmi" => Ok(SortField::Bmi),
            other => Err(InvalidSortField(other.to_string())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Error for an unrecognized `order` value.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid sort order: {0}")]
pub struct InvalidSortOrder(pub String);

impl FromStr for SortOrder {
    type Err = InvalidSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(InvalidSortOrder(other.to_string())),
        }
    }
}

/// CRUD-plus-sort service over an injected record store.
pub struct PatientRegistry<S> {
    store: S,
}

impl<S: RecordStore> PatientRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All records, keyed by id, derived fields included.
    pub fn list(&self) -> RegistryResult<BTreeMap<String, PatientView>> {
        let patients = self.store.load()?;
        Ok(patients
            .iter()
            .map(|(id, record)| (id.clone(), PatientView::from(record)))
            .collect())
    }

    /// One record by id.
    pub fn get(&self, id: &str) -> RegistryResult<PatientView> {
        let patients = self.store.load()?;
        patients
            .get(id)
            .map(PatientView::from)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    /// Validate and insert a new patient. Fails if the id is taken.
    pub fn create(&self, patient: NewPatient) -> RegistryResult<()> {
        let (id, record) = patient.into_parts()?;
        let mut patients = self.store.load()?;
        if patients.contains_key(&id) {
            return Err(RegistryError::DuplicateId(id));
        }
        patients.insert(id, record);
        self.store.save(&patients)?;
        Ok(())
    }

    /// Merge the present fields into the existing record, revalidate the
    /// whole merged record, and replace it. Nothing is persisted when the
    /// merged record fails validation.
    pub fn update(&self, id: &str, update: &PatientUpdate) -> RegistryResult<()> {
        let mut patients = self.store.load()?;
        let record = patients
            .get_mut(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;

        let mut merged = record.clone();
        update.apply_to(&mut merged);
        merged.validate()?;

        *record = merged;
        self.store.save(&patients)?;
        Ok(())
    }

    /// Remove a patient by id.
    pub fn remove(&self, id: &str) -> RegistryResult<()> {
        let mut patients = self.store.load()?;
        if patients.remove(id).is_none() {
            return Err(RegistryError::NotFound(id.to_string()));
        }
        self.store.save(&patients)?;
        Ok(())
    }

    /// All records ordered by the chosen field. Stable sort; ties keep
    /// the map's ascending-id iteration order.
    pub fn sorted(&self, field: SortField, order: SortOrder) -> RegistryResult<Vec<PatientView>> {
        let patients = self.store.load()?;
        let mut views: Vec<PatientView> =
            patients.values().map(PatientView::from).collect();

        let key = |view: &PatientView| match field {
            SortField::Height => view.height,
            SortField::Weight => view.weight,
            SortField::Bmi => view.bmi,
        };
        views.sort_by(|a, b| {
            let cmp = key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal);
            match order {
                SortOrder::Asc => cmp,
                SortOrder::Desc => cmp.reverse(),
            }
        });
        Ok(views)
    }
}
