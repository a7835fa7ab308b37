//! Student record value type.

use crate::types::{normalize_id, RecordId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A grade string that has already passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grade(String);

impl Grade {
    /// Wrap a grade produced by [`crate::validation::validate_grade`].
    pub(crate) fn from_validated(grade: String) -> Self {
        Grade(grade)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One student's stored data.
///
/// Equality and hashing consider only the id. The id is normalized once, here,
/// and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    id: RecordId,
    pub name: String,
    pub age: u8,
    pub grade: Grade,
}

impl Record {
    pub fn new(name: impl Into<String>, id: &str, age: u8, grade: Grade) -> Self {
        let name = name.into();
        Self {
            id: normalize_id(id),
            name: name.trim().to_string(),
            age,
            grade,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Case-insensitive, whitespace-trimmed id comparison.
    pub fn matches_id(&self, raw: &str) -> bool {
        self.id.eq_ignore_ascii_case(raw.trim())
    }

    /// Case-insensitive substring match on the name.
    pub fn name_contains(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }

    /// True when every field, not just the id, is equal.
    pub fn same_fields(&self, other: &Record) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.age == other.age
            && self.grade == other.grade
    }

    /// Fixed-width single-line summary.
    pub fn describe(&self) -> String {
        format!(
            "ID: {:<10} | Name: {:<20} | Age: {:<3} | Grade: {}",
            self.id, self.name, self.age, self.grade
        )
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.id.eq_ignore_ascii_case(&other.id)
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.to_ascii_uppercase().hash(state);
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
