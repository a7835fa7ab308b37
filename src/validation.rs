//! Input field validation.
//!
//! Every check trims its input and returns the normalized value so callers can
//! hand the result straight to the store.

use crate::error::ValidationError;
use crate::record::Grade;
use crate::types::{normalize_id, RecordId, MAX_AGE, MIN_AGE, MIN_ID_LEN, MIN_NAME_LEN};

/// Validate a student name: letters and spaces, at least 2 characters.
pub fn validate_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.chars().count() < MIN_NAME_LEN {
        return Err(ValidationError::NameTooShort);
    }
    if !name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        return Err(ValidationError::InvalidNameCharacters);
    }
    Ok(name.to_string())
}

/// Validate a student id and return it uppercased.
pub fn validate_id(raw: &str) -> Result<RecordId, ValidationError> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(ValidationError::EmptyId);
    }
    if id.chars().count() < MIN_ID_LEN {
        return Err(ValidationError::IdTooShort);
    }
    if !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidIdCharacters);
    }
    Ok(normalize_id(id))
}

/// Parse and range-check an age typed by the user.
pub fn validate_age(raw: &str) -> Result<u8, ValidationError> {
    let value: u32 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::AgeNotNumeric)?;
    validate_age_value(value)
}

/// Range-check a numeric age.
pub fn validate_age_value(value: u32) -> Result<u8, ValidationError> {
    if value < MIN_AGE as u32 || value > MAX_AGE as u32 {
        return Err(ValidationError::AgeOutOfRange {
            value,
            min: MIN_AGE,
            max: MAX_AGE,
        });
    }
    Ok(value as u8)
}

/// Validate a grade: `A`-`F` with optional `+`/`-`, or `PASS`/`FAIL`.
pub fn validate_grade(raw: &str) -> Result<Grade, ValidationError> {
    let grade = raw.trim().to_uppercase();
    if grade.is_empty() {
        return Err(ValidationError::EmptyGrade);
    }
    if !is_grade_shape(&grade) {
        return Err(ValidationError::InvalidGrade(grade));
    }
    Ok(Grade::from_validated(grade))
}

fn is_grade_shape(grade: &str) -> bool {
    if grade == "PASS" || grade == "FAIL" {
        return true;
    }
    let bytes = grade.as_bytes();
    match bytes {
        [letter] => (b'A'..=b'F').contains(letter),
        [letter, modifier] => (b'A'..=b'F').contains(letter) && matches!(*modifier, b'+' | b'-'),
        _ => false,
    }
}

/// Validate a free-text search term (must not be blank).
pub fn validate_search_term(raw: &str) -> Result<String, ValidationError> {
    let term = raw.trim();
    if term.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    Ok(term.to_string())
}

/// Interpret a yes/no answer. Returns `None` for anything else.
pub fn parse_confirmation(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Fully validated field set for a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDraft {
    pub name: String,
    pub id: RecordId,
    pub age: u8,
    pub grade: Grade,
}

impl RecordDraft {
    /// Validate all four fields, reporting the first violation.
    pub fn validate(name: &str, id: &str, age: &str, grade: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validate_name(name)?,
            id: validate_id(id)?,
            age: validate_age(age)?,
            grade: validate_grade(grade)?,
        })
    }
}
