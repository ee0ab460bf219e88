//! Flat-file JSON store.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::{PatientMap, RecordStore, StoreResult};

/// Store backed by a single JSON file: a top-level object keyed by patient
/// id, each value holding the stored attributes only (derived fields are
/// never written).
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store over the given file path. The file does not need to
    /// exist yet; it is created on first save.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> StoreResult<PatientMap> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(PatientMap::new());
            }
            Err(e) => return Err(e.into()),
        };
        let patients = serde_json::from_reader(BufReader::new(file))?;
        Ok(patients)
    }

    fn save(&self, patients: &PatientMap) -> StoreResult<()> {
        // Write to a temp file in the target directory, then rename over
        // the destination, so readers never observe a half-written file.
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, patients)?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}
