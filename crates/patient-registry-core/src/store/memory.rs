//! In-memory store (for testing and embedding).

use std::sync::Mutex;

use super::{PatientMap, RecordStore, StoreResult};

/// Store holding the mapping behind a mutex. Same full-load/full-save
/// contract as the file store, minus the file.
#[derive(Default)]
pub struct MemoryStore {
    patients: Mutex<PatientMap>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an initial mapping.
    pub fn with_patients(patients: PatientMap) -> Self {
        Self {
            patients: Mutex::new(patients),
        }
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> StoreResult<PatientMap> {
        let guard = self.patients.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }

    fn save(&self, patients: &PatientMap) -> StoreResult<()> {
        let mut guard = self.patients.lock().unwrap_or_else(|e| e.into_inner());
        *guard = patients.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, PatientRecord};

    #[test]
    fn test_empty_by_default() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = MemoryStore::new();
        let mut patients = PatientMap::new();
        patients.insert(
            "P001".into(),
            PatientRecord {
                name: "Meera".into(),
                city: "Chennai".into(),
                age: 51,
                gender: Gender::Female,
                height: 1.6,
                weight: 58.0,
            },
        );
        store.save(&patients).unwrap();
        assert_eq!(store.load().unwrap(), patients);
    }
}
