//! Roster Store
//!
//! Owns the ordered record sequence and enforces id uniqueness. Lookups are
//! linear scans; the roster is console-scale. Persistence is delegated to a
//! [`RosterPersistence`] backend and replaces state wholesale in both
//! directions.

pub mod persistence;

use crate::record::{Grade, Record};
use crate::types::normalize_id;
pub use persistence::{JsonFilePersistence, MemoryPersistence, RosterPersistence};
use tracing::{debug, error, info};

/// In-memory roster plus its persistence backend
pub struct RosterStore {
    records: Vec<Record>,
    backend: Box<dyn RosterPersistence>,
}

impl RosterStore {
    /// Create an empty store without touching the backend.
    pub fn new(backend: Box<dyn RosterPersistence>) -> Self {
        Self {
            records: Vec::new(),
            backend,
        }
    }

    /// Append a new record. Returns false if the id already exists.
    pub fn create(&mut self, name: &str, id: &str, age: u8, grade: Grade) -> bool {
        if self.find_by_id(id).is_some() {
            debug!(id = %normalize_id(id), "Rejected duplicate id");
            return false;
        }
        let record = Record::new(name, id, age, grade);
        info!(id = %record.id(), "Created record");
        self.records.push(record);
        true
    }

    /// Find a record by id, ignoring case and surrounding whitespace.
    pub fn find_by_id(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.matches_id(id))
    }

    fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.matches_id(id))
    }

    /// Replace name, age and grade in place. The id never changes.
    pub fn update(&mut self, id: &str, new_name: &str, new_age: u8, new_grade: Grade) -> bool {
        match self.find_by_id_mut(id) {
            Some(record) => {
                record.name = new_name.trim().to_string();
                record.age = new_age;
                record.grade = new_grade;
                info!(id = %record.id(), "Updated record");
                true
            }
            None => {
                debug!(id = %normalize_id(id), "Update target not found");
                false
            }
        }
    }

    /// Remove the record with this id, keeping the order of the rest.
    pub fn delete(&mut self, id: &str) -> bool {
        match self.records.iter().position(|r| r.matches_id(id)) {
            Some(index) => {
                let removed = self.records.remove(index);
                info!(id = %removed.id(), "Deleted record");
                true
            }
            None => {
                debug!(id = %normalize_id(id), "Delete target not found");
                false
            }
        }
    }

    /// Case-insensitive substring search on names, in store order.
    ///
    /// An empty query matches every record.
    pub fn search_by_name(&self, substring: &str) -> Vec<&Record> {
        let needle = substring.trim().to_lowercase();
        self.records
            .iter()
            .filter(|r| r.name_contains(&needle))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Location of the persisted state.
    pub fn location(&self) -> String {
        self.backend.location()
    }

    /// Write the full sequence to the backend. In-memory state is untouched
    /// whether or not the write succeeds.
    pub fn save(&self) -> bool {
        match self.backend.write(&self.records) {
            Ok(()) => {
                info!(
                    location = %self.backend.location(),
                    count = self.records.len(),
                    "Saved roster"
                );
                true
            }
            Err(e) => {
                error!(location = %self.backend.location(), error = %e, "Failed to save roster");
                false
            }
        }
    }

    /// Replace the in-memory sequence with persisted state.
    ///
    /// No persisted state is a successful empty load. Unreadable state resets
    /// the roster to empty and reports failure.
    pub fn load(&mut self) -> bool {
        match self.backend.read() {
            Ok(Some(records)) => {
                info!(
                    location = %self.backend.location(),
                    count = records.len(),
                    "Loaded roster"
                );
                self.records = records;
                true
            }
            Ok(None) => {
                debug!(location = %self.backend.location(), "No persisted roster; starting empty");
                self.records.clear();
                true
            }
            Err(e) => {
                error!(location = %self.backend.location(), error = %e, "Failed to load roster");
                self.records.clear();
                false
            }
        }
    }
}
