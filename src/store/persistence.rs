//! Persistence backends for the roster.
//!
//! The on-disk form is a single JSON document holding the full ordered record
//! sequence. It is rewritten wholesale on every save through a temp file and
//! an atomic rename, and read wholesale on load.

use crate::error::StorageError;
use crate::record::Record;
use crate::validation::{validate_age_value, validate_grade, validate_id, validate_name};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Storage port for the whole record sequence.
pub trait RosterPersistence: Send {
    /// Read persisted records. `Ok(None)` means nothing has been saved yet.
    fn read(&self) -> Result<Option<Vec<Record>>, StorageError>;

    /// Replace persisted state with `records`.
    fn write(&self, records: &[Record]) -> Result<(), StorageError>;

    /// Human-readable location used in logs and messages.
    fn location(&self) -> String;
}

/// Serialized document layout
#[derive(Debug, Serialize, Deserialize)]
struct RosterDocument {
    records: Vec<Record>,
}

#[derive(Serialize)]
struct RosterDocumentRef<'a> {
    records: &'a [Record],
}

/// Encode records into the on-disk JSON form.
pub fn encode_records(records: &[Record]) -> Result<Vec<u8>, StorageError> {
    let mut bytes = serde_json::to_vec_pretty(&RosterDocumentRef { records })
        .map_err(|e| StorageError::Serialize(e.to_string()))?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Decode and re-check records from the on-disk JSON form.
pub fn decode_records(bytes: &[u8], location: &str) -> Result<Vec<Record>, StorageError> {
    let corrupt = |reason: String| StorageError::Corrupt {
        location: location.to_string(),
        reason,
    };
    let document: RosterDocument =
        serde_json::from_slice(bytes).map_err(|e| corrupt(e.to_string()))?;

    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(document.records.len());
    for stored in document.records {
        let id = validate_id(stored.id()).map_err(|e| corrupt(format!("record id: {}", e)))?;
        let name = validate_name(&stored.name)
            .map_err(|e| corrupt(format!("record {}: {}", id, e)))?;
        let age = validate_age_value(stored.age as u32)
            .map_err(|e| corrupt(format!("record {}: {}", id, e)))?;
        let grade = validate_grade(stored.grade.as_str())
            .map_err(|e| corrupt(format!("record {}: {}", id, e)))?;
        if !seen.insert(id.clone()) {
            return Err(corrupt(format!("duplicate id {}", id)));
        }
        records.push(Record::new(name, &id, age, grade));
    }
    Ok(records)
}

/// JSON file backend with atomic replacement.
pub struct JsonFilePersistence {
    path: PathBuf,
    temp_path: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut temp_name = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "roster".into());
        temp_name.push(".tmp");
        let temp_path = path.with_file_name(temp_name);
        Self { path, temp_path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterPersistence for JsonFilePersistence {
    fn read(&self) -> Result<Option<Vec<Record>>, StorageError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::IoError(e)),
        };
        decode_records(&bytes, &self.location()).map(Some)
    }

    fn write(&self, records: &[Record]) -> Result<(), StorageError> {
        let bytes = encode_records(records)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        {
            let mut file = File::create(&self.temp_path)?;
            file.write_all(&bytes)?;
            file.sync_all()?;
        }

        if let Err(e) = fs::rename(&self.temp_path, &self.path) {
            let _ = fs::remove_file(&self.temp_path);
            return Err(StorageError::IoError(e));
        }

        if let Some(parent) = self.path.parent() {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    bytes: Option<Vec<u8>>,
    fail_writes: bool,
}

/// In-process backend. Clones share the same persisted state, so a second
/// store can observe what the first one saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the backend with raw bytes, e.g. to simulate a corrupt file.
    pub fn with_raw(bytes: impl Into<Vec<u8>>) -> Self {
        let backend = Self::new();
        backend.state.lock().bytes = Some(bytes.into());
        backend
    }

    /// Make subsequent writes fail with an I/O error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.state.lock().fail_writes = fail;
    }

    pub fn raw(&self) -> Option<Vec<u8>> {
        self.state.lock().bytes.clone()
    }
}

impl RosterPersistence for MemoryPersistence {
    fn read(&self) -> Result<Option<Vec<Record>>, StorageError> {
        let state = self.state.lock();
        match &state.bytes {
            None => Ok(None),
            Some(bytes) => decode_records(bytes, "memory").map(Some),
        }
    }

    fn write(&self, records: &[Record]) -> Result<(), StorageError> {
        let mut state = self.state.lock();
        if state.fail_writes {
            return Err(StorageError::IoError(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "memory backend configured to fail writes",
            )));
        }
        state.bytes = Some(encode_records(records)?);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
